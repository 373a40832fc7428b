// src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod bootstrap;
pub mod cli;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use bootstrap::{run, run_with_config};
pub use treecat_domain::config::{Config, SourceDir};
pub use treecat_usecase::RunReport;
