/// Summary of one consolidation run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunReport {
    /// Files whose contents were written verbatim.
    pub files_written: usize,
    /// Files replaced by the skip marker (binary or unreadable).
    pub files_skipped: usize,
    /// Source directories skipped because they could not be scanned.
    pub dirs_skipped: usize,
}

impl RunReport {
    /// Total number of section headers emitted.
    pub fn sections(&self) -> usize {
        self.files_written + self.files_skipped
    }
}
