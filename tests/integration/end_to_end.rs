// tests/integration/end_to_end.rs
use std::{fs, path::Path};

use treecat::{Config, SourceDir, run_with_config};

#[path = "../common/mod.rs"]
mod common;
use common::TempDir;

const NAMESPACE: &str = "treecat_integration";

fn sorted_config(sources: Vec<SourceDir>, output: &Path) -> Config {
    let mut config = Config::new(sources, output);
    config.sort_entries = true;
    config
}

fn snapshot(output: &Path) -> String {
    String::from_utf8(fs::read(output).expect("output exists")).expect("snapshot is UTF-8")
}

fn header_count(snapshot: &str) -> usize {
    snapshot.matches("\n==================== ").count()
}

#[test]
fn flat_directory_with_text_and_binary_files() {
    let site = TempDir::new("flat_scenario", NAMESPACE);
    site.write_file("a.txt", "hello");
    site.write_bytes("logo.png", &[0x89, 0x50, 0x4E, 0x47, 0xFF, 0xFE]);
    let out = TempDir::new("flat_scenario_out", NAMESPACE);
    let output = out.path().join("snapshot.txt");

    let config = sorted_config(vec![SourceDir::flat(site.path())], &output);
    let report = run_with_config(&config).expect("run succeeds");

    assert_eq!(report.files_written, 1);
    assert_eq!(report.files_skipped, 1);
    assert_eq!(
        snapshot(&output),
        "\n==================== a.txt ====================\n\nhello\n\
         \n==================== logo.png ====================\n\n\
         [Binary or non-text file skipped]\n"
    );
}

#[test]
fn text_contents_are_carried_verbatim() {
    let site = TempDir::new("verbatim", NAMESPACE);
    let contents = "line one\r\nline two\n\nno trailing newline";
    site.write_file("notes.txt", contents);
    let out = TempDir::new("verbatim_out", NAMESPACE);
    let output = out.path().join("snapshot.txt");

    run_with_config(&sorted_config(vec![SourceDir::flat(site.path())], &output)).unwrap();

    let body = snapshot(&output);
    assert!(body.ends_with(&format!("\n\n{contents}\n")));
}

#[test]
fn empty_directory_contributes_nothing() {
    let site = TempDir::new("empty_dir", NAMESPACE);
    let out = TempDir::new("empty_dir_out", NAMESPACE);
    let output = out.path().join("snapshot.txt");

    let report =
        run_with_config(&sorted_config(vec![SourceDir::recursive(site.path())], &output)).unwrap();

    assert_eq!(report.sections(), 0);
    assert_eq!(fs::read(&output).unwrap().len(), 0);
}

#[test]
fn directory_order_is_preserved() {
    let first = TempDir::new("order_first", NAMESPACE);
    first.write_file("zz.txt", "from first");
    let second = TempDir::new("order_second", NAMESPACE);
    second.write_file("aa.txt", "from second");
    let out = TempDir::new("order_out", NAMESPACE);
    let output = out.path().join("snapshot.txt");

    let config = sorted_config(
        vec![SourceDir::flat(first.path()), SourceDir::flat(second.path())],
        &output,
    );
    run_with_config(&config).unwrap();

    let body = snapshot(&output);
    let first_header = body.find("zz.txt").expect("first directory header present");
    let second_header = body.find("aa.txt").expect("second directory header present");
    assert!(first_header < second_header);
}

#[test]
fn recursive_sources_use_relative_paths_and_flat_sources_do_not() {
    let site = TempDir::new("mixed_modes", NAMESPACE);
    site.write_file("index.html", "<html>");
    site.write_file("css/dark.css", "body {}");
    let out = TempDir::new("mixed_modes_out", NAMESPACE);
    let output = out.path().join("snapshot.txt");

    let recursive = sorted_config(vec![SourceDir::recursive(site.path())], &output);
    run_with_config(&recursive).unwrap();
    let nested = ["css", "dark.css"].join(std::path::MAIN_SEPARATOR_STR);
    assert!(snapshot(&output).contains(&format!("==================== {nested} ====")));

    let flat = sorted_config(vec![SourceDir::flat(site.path())], &output);
    run_with_config(&flat).unwrap();
    let body = snapshot(&output);
    assert!(body.contains("==================== index.html ===="));
    assert!(!body.contains(&nested));
}

#[test]
fn header_count_matches_discovered_files() {
    let site = TempDir::new("header_count", NAMESPACE);
    site.write_file("a.txt", "a");
    site.write_file("sub/b.txt", "b");
    site.write_bytes("sub/deep/c.bin", &[0x00, 0xFF]);
    let out = TempDir::new("header_count_out", NAMESPACE);
    let output = out.path().join("snapshot.txt");

    let report =
        run_with_config(&sorted_config(vec![SourceDir::recursive(site.path())], &output)).unwrap();

    assert_eq!(report.sections(), 3);
    assert_eq!(header_count(&snapshot(&output)), 3);
}

#[test]
fn reruns_are_byte_identical() {
    let site = TempDir::new("idempotent", NAMESPACE);
    site.write_file("a.txt", "alpha");
    site.write_file("b/c.txt", "gamma");
    let out = TempDir::new("idempotent_out", NAMESPACE);
    let output = out.path().join("snapshot.txt");

    let config = sorted_config(vec![SourceDir::recursive(site.path())], &output);
    run_with_config(&config).unwrap();
    let first = fs::read(&output).unwrap();
    run_with_config(&config).unwrap();
    let second = fs::read(&output).unwrap();
    assert_eq!(first, second);
}

#[test]
fn missing_source_directory_is_skipped() {
    let site = TempDir::new("missing_dir", NAMESPACE);
    site.write_file("kept.txt", "kept");
    let gone = site.path().join("does-not-exist");
    let out = TempDir::new("missing_dir_out", NAMESPACE);
    let output = out.path().join("snapshot.txt");

    let config = sorted_config(
        vec![SourceDir::recursive(&gone), SourceDir::flat(site.path())],
        &output,
    );
    let report = run_with_config(&config).expect("run continues past missing directory");

    assert_eq!(report.dirs_skipped, 1);
    assert_eq!(report.files_written, 1);
    assert!(snapshot(&output).contains("kept.txt"));
}

#[test]
fn unopenable_output_path_fails_the_run() {
    let site = TempDir::new("bad_output", NAMESPACE);
    site.write_file("a.txt", "a");
    let output = site.path().join("no-such-dir").join("snapshot.txt");

    let config = sorted_config(vec![SourceDir::flat(site.path())], &output);
    assert!(run_with_config(&config).is_err());
}
