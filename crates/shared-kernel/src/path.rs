use std::path::{Path, PathBuf};

/// Convert a potentially relative path into an absolute one without resolving symlinks.
///
/// Directory arguments are compared by this logical form, so a flat marker
/// spelled `site` matches a listed `./site` even though the spellings differ.
/// Symlinks stay unresolved because two links to the same tree are still two
/// distinct sources.
pub fn logical_absolute(path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .map(|cwd| cwd.join(path))
            .unwrap_or_else(|_| path.to_path_buf())
    }
}
