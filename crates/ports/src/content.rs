// crates/ports/src/content.rs
use std::path::Path;

use treecat_shared_kernel::Result;

/// Outcome of decoding a file's bytes as text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileContent {
    /// Valid UTF-8, carried verbatim.
    Text(String),
    /// Not valid UTF-8; the bytes are never surfaced.
    Binary,
}

/// Port for reading a file's contents as UTF-8 text.
///
/// Decode failure is not an error: it is reported as [`FileContent::Binary`].
/// An `Err` means the file could not be read at all (permissions, vanished
/// between listing and reading).
pub trait ContentReader: Send + Sync {
    fn read_text(&self, path: &Path) -> Result<FileContent>;
}
