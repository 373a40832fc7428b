// crates/ports/src/filesystem.rs
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use treecat_shared_kernel::Result;

/// Input parameters controlling the scan of one source directory.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanPlan {
    pub root: PathBuf,
    /// Descend into subdirectories; when false only direct children are listed.
    pub recursive: bool,
    pub follow_links: bool,
    /// Sort entries lexicographically instead of keeping filesystem order.
    pub sort_entries: bool,
}

/// DTO representing a file discovered by a scanner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileEntryDto {
    pub path: PathBuf,
    /// Name shown in the section header: base name for flat scans, path
    /// relative to the root for recursive scans.
    pub display_name: String,
}

/// Port for discovering the files of a source directory.
pub trait SourceScanner: Send + Sync {
    fn scan(&self, plan: &ScanPlan) -> Result<Vec<FileEntryDto>>;
}
