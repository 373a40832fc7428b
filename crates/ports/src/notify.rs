// crates/ports/src/notify.rs

/// Port for surfacing non-fatal warnings (skipped files and directories).
pub trait Notifier: Send + Sync {
    fn warn(&self, message: &str);
}
