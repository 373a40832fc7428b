// crates/infra/src/console.rs
use treecat_ports::notify::Notifier;

/// Notifier adapter writing `[warn] ...` lines to stderr.
///
/// Warnings never go into the snapshot file itself.
#[derive(Debug, Default)]
pub struct ConsoleNotifier;

impl ConsoleNotifier {
    pub fn new() -> Self {
        Self
    }
}

impl Notifier for ConsoleNotifier {
    fn warn(&self, message: &str) {
        eprintln!("[warn] {}", message);
    }
}
