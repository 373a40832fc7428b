// src/bootstrap.rs
use anyhow::{Context, Result};
use treecat_domain::config::Config;
use treecat_infra::{ConsoleNotifier, SnapshotWriter, Utf8ContentReader, WalkSourceScanner};
use treecat_usecase::{ConsolidateTree, RunReport};

use crate::cli;

pub fn run() -> Result<()> {
    let config = cli::load_config()?;
    let report = run_with_config(&config)?;
    eprintln!(
        "treecat v{}: {} file(s) written, {} skipped, {} directories skipped",
        crate::VERSION,
        report.files_written,
        report.files_skipped,
        report.dirs_skipped
    );
    Ok(())
}

/// Wire the adapters into the orchestrator and run one consolidation.
pub fn run_with_config(config: &Config) -> Result<RunReport> {
    let notifier = ConsoleNotifier::new();
    let scanner = WalkSourceScanner::with_notifier(&notifier);
    let reader = Utf8ContentReader::new();

    let mut sink = SnapshotWriter::create(&config.output)
        .with_context(|| format!("opening output {}", config.output.display()))?;

    let usecase = ConsolidateTree::new(&scanner, &reader, Some(&notifier));
    usecase.run(config, &mut sink).context("consolidation failed")
}
