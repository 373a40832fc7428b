// crates/ports/src/sink.rs
use treecat_shared_kernel::Result;

/// Port receiving the consolidated snapshot, section by section.
///
/// Callers emit `begin_section` followed by exactly one of `write_text` or
/// `write_skip_marker` per file, then `finish` once at the end of the run.
pub trait SnapshotSink {
    fn begin_section(&mut self, display_name: &str) -> Result<()>;
    fn write_text(&mut self, contents: &str) -> Result<()>;
    fn write_skip_marker(&mut self) -> Result<()>;
    fn finish(&mut self) -> Result<()>;
}
