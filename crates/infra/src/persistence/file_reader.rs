// crates/infra/src/persistence/file_reader.rs
use std::{
    fs::File,
    io::Read,
    path::Path,
};

use treecat_ports::content::{ContentReader, FileContent};
use treecat_shared_kernel::{InfrastructureError, Result};

/// Convenience helpers for reading files with consistent error handling.
pub struct FileReader;

impl FileReader {
    /// Open the file at `path`.
    pub fn open(path: &Path) -> std::io::Result<File> {
        File::open(path)
    }

    /// Read the entire file into memory.
    pub fn read_to_end(path: &Path) -> std::io::Result<Vec<u8>> {
        let mut file = Self::open(path)?;
        let mut buf = Vec::new();
        file.read_to_end(&mut buf)?;
        Ok(buf)
    }
}

/// `ContentReader` adapter decoding whole files as UTF-8.
///
/// Invalid UTF-8 is not an error; it is reported as [`FileContent::Binary`].
/// Line endings are carried through untouched.
#[derive(Debug, Default)]
pub struct Utf8ContentReader;

impl Utf8ContentReader {
    pub fn new() -> Self {
        Self
    }
}

impl ContentReader for Utf8ContentReader {
    fn read_text(&self, path: &Path) -> Result<FileContent> {
        let bytes = FileReader::read_to_end(path).map_err(|source| {
            InfrastructureError::FileRead { path: path.to_path_buf(), source }
        })?;
        match String::from_utf8(bytes) {
            Ok(text) => Ok(FileContent::Text(text)),
            Err(_) => Ok(FileContent::Binary),
        }
    }
}
