use std::path::PathBuf;

/// A discovered file together with the name shown in its section header.
///
/// For flat sources the display name is the file's base name; for recursive
/// sources it is the path relative to the source root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    pub path: PathBuf,
    pub display_name: String,
}
