use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use treecat_shared_kernel::{DomainError, DomainResult};

/// A single source directory together with its traversal mode.
///
/// `recursive: false` enumerates only the direct file children of the
/// directory; `recursive: true` descends into every subdirectory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceDir {
    pub path: PathBuf,
    pub recursive: bool,
}

impl SourceDir {
    pub fn recursive(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into(), recursive: true }
    }

    pub fn flat(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into(), recursive: false }
    }
}

/// Domain representation of resolved configuration options.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Source directories, consolidated in this order.
    pub sources: Vec<SourceDir>,
    /// Snapshot file written by the run.
    pub output: PathBuf,
    /// Sort entries lexicographically instead of relying on filesystem order.
    pub sort_entries: bool,
    /// Follow symbolic links during traversal.
    pub follow_links: bool,
}

impl Config {
    pub fn new(sources: Vec<SourceDir>, output: impl Into<PathBuf>) -> Self {
        Self {
            sources,
            output: output.into(),
            sort_entries: false,
            follow_links: false,
        }
    }

    pub fn validate(&self) -> DomainResult<()> {
        if self.sources.is_empty() {
            return Err(DomainError::InvalidConfiguration {
                reason: "at least one source directory is required".to_string(),
            });
        }
        Ok(())
    }
}
