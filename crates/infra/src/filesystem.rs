// crates/infra/src/filesystem.rs
use std::path::Path;

use ignore::WalkBuilder;
use treecat_ports::filesystem::{FileEntryDto, ScanPlan, SourceScanner};
use treecat_ports::notify::Notifier;
use treecat_shared_kernel::{InfrastructureError, Result};

/// Filesystem adapter implementing the `SourceScanner` port.
///
/// Recursive scans use the `ignore` walker with its standard filters
/// disabled: a snapshot includes every file, hidden or not, regardless of
/// any `.gitignore` in the tree. Flat scans list direct children only.
///
/// Per-entry walk errors are reported through the notifier and the entry is
/// skipped; only a root that cannot be scanned at all is an error.
#[derive(Default)]
pub struct WalkSourceScanner<'a> {
    notifier: Option<&'a dyn Notifier>,
}

impl<'a> WalkSourceScanner<'a> {
    pub fn new() -> Self {
        Self { notifier: None }
    }

    pub fn with_notifier(notifier: &'a dyn Notifier) -> Self {
        Self { notifier: Some(notifier) }
    }

    fn warn(&self, message: &str) {
        if let Some(notifier) = self.notifier {
            notifier.warn(message);
        }
    }

    fn walk_tree(&self, plan: &ScanPlan) -> Vec<FileEntryDto> {
        let mut builder = WalkBuilder::new(&plan.root);
        builder.standard_filters(false);
        builder.follow_links(plan.follow_links);

        let mut entries = Vec::new();
        for result in builder.build() {
            let entry = match result {
                Ok(entry) => entry,
                Err(err) => {
                    self.warn(&format!("walk error: {}", err));
                    continue;
                }
            };
            // The walker reports file types without following symlinks, so
            // symlinks must pass here and be resolved by `is_regular_file`.
            let is_candidate = match entry.file_type() {
                Some(ft) => ft.is_file() || (plan.follow_links && ft.is_symlink()),
                None => false,
            };
            if !is_candidate {
                continue;
            }
            let path = entry.into_path();
            if !is_regular_file(&path, plan.follow_links) {
                continue;
            }
            let display_name = relative_display(&path, &plan.root);
            entries.push(FileEntryDto { path, display_name });
        }
        entries
    }

    fn list_direct_children(&self, plan: &ScanPlan) -> Result<Vec<FileEntryDto>> {
        let read_dir = std::fs::read_dir(&plan.root).map_err(|source| {
            InfrastructureError::FileSystemOperation {
                operation: "read_dir".to_string(),
                path: plan.root.clone(),
                source,
            }
        })?;

        let mut entries = Vec::new();
        for result in read_dir {
            let dir_entry = match result {
                Ok(entry) => entry,
                Err(err) => {
                    self.warn(&format!(
                        "read_dir error under {}: {}",
                        plan.root.display(),
                        err
                    ));
                    continue;
                }
            };
            let path = dir_entry.path();
            if !is_regular_file(&path, plan.follow_links) {
                continue;
            }
            let display_name = path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_default();
            entries.push(FileEntryDto { path, display_name });
        }
        Ok(entries)
    }
}

impl SourceScanner for WalkSourceScanner<'_> {
    fn scan(&self, plan: &ScanPlan) -> Result<Vec<FileEntryDto>> {
        let metadata = std::fs::metadata(&plan.root).map_err(|source| {
            InfrastructureError::FileSystemOperation {
                operation: "scan".to_string(),
                path: plan.root.clone(),
                source,
            }
        })?;
        if !metadata.is_dir() {
            return Err(InfrastructureError::FileSystemOperation {
                operation: "scan".to_string(),
                path: plan.root.clone(),
                source: std::io::Error::other("not a directory"),
            }
            .into());
        }

        let mut entries = if plan.recursive {
            self.walk_tree(plan)
        } else {
            self.list_direct_children(plan)?
        };

        if plan.sort_entries {
            entries.sort_by_cached_key(|entry| norm_key(&entry.path));
        }
        Ok(entries)
    }
}

// When follow_links is false we use symlink_metadata and explicitly exclude
// symlinks from being treated as regular files, consistent with the walker's
// follow_links flag.
fn is_regular_file(path: &Path, follow_links: bool) -> bool {
    let metadata = if follow_links {
        std::fs::metadata(path)
    } else {
        std::fs::symlink_metadata(path)
    };
    let Ok(metadata) = metadata else {
        return false;
    };
    if !follow_links && metadata.file_type().is_symlink() {
        return false;
    }
    metadata.is_file()
}

fn relative_display(path: &Path, root: &Path) -> String {
    path.strip_prefix(root)
        .unwrap_or(path)
        .to_string_lossy()
        .into_owned()
}

// Platform-aware normalization for deterministic ordering. On Unix the raw
// bytes avoid a lossy conversion per comparison.
#[cfg(unix)]
fn norm_key(path: &Path) -> Vec<u8> {
    use std::os::unix::ffi::OsStrExt;
    path.as_os_str().as_bytes().to_vec()
}

#[cfg(not(unix))]
fn norm_key(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}
