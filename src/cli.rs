// src/cli.rs
use std::path::PathBuf;

use clap::{Parser, ValueHint};
use treecat_domain::config::{Config, SourceDir};
use treecat_shared_kernel::{PresentationError, Result, path::logical_absolute};

/// Top-level CLI arguments parsed via clap.
#[derive(Parser, Debug)]
#[command(
    name = "treecat",
    version = crate::VERSION,
    about = "Flatten directory trees into a single annotated text snapshot"
)]
pub struct Args {
    /// Source directories, consolidated in the order given
    #[arg(required = true, value_hint = ValueHint::DirPath)]
    pub dirs: Vec<PathBuf>,

    /// Output snapshot file
    #[arg(long, value_hint = ValueHint::FilePath)]
    pub out: PathBuf,

    /// Include only the direct files of the given directory, no subdirectory
    /// descent (must also appear in the directory list; repeatable)
    #[arg(long, value_hint = ValueHint::DirPath)]
    pub flat: Vec<PathBuf>,

    /// Sort entries lexicographically instead of using filesystem order
    #[arg(long)]
    pub sorted: bool,

    /// Follow symbolic links while scanning
    #[arg(long)]
    pub follow_links: bool,
}

/// Parse the process arguments into a validated domain configuration.
pub fn load_config() -> Result<Config> {
    build_config(Args::parse())
}

pub fn build_config(args: Args) -> Result<Config> {
    // Flat markers are matched logically so `--flat site` and `./site` in the
    // directory list refer to the same directory.
    let flat: Vec<PathBuf> = args.flat.iter().map(|path| logical_absolute(path)).collect();
    for (marker, resolved) in args.flat.iter().zip(&flat) {
        if !args.dirs.iter().any(|dir| &logical_absolute(dir) == resolved) {
            return Err(PresentationError::InvalidValue {
                flag: "--flat".to_string(),
                value: marker.display().to_string(),
                reason: "not among the listed source directories".to_string(),
            }
            .into());
        }
    }

    let sources = args
        .dirs
        .iter()
        .map(|dir| SourceDir {
            path: dir.clone(),
            recursive: !flat.contains(&logical_absolute(dir)),
        })
        .collect();

    let mut config = Config::new(sources, args.out);
    config.sort_entries = args.sorted;
    config.follow_links = args.follow_links;
    config.validate()?;
    Ok(config)
}
