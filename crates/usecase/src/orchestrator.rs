use treecat_domain::config::Config;
use treecat_domain::model::FileEntry;
use treecat_ports::content::{ContentReader, FileContent};
use treecat_ports::filesystem::{FileEntryDto, ScanPlan, SourceScanner};
use treecat_ports::notify::Notifier;
use treecat_ports::sink::SnapshotSink;
use treecat_shared_kernel::{ApplicationError, Result};

use crate::dto::RunReport;

/// Orchestrates one consolidation run over the configured sources.
///
/// Sink errors are fatal (the snapshot cannot be completed); everything else
/// is best-effort: unreadable directories and files are warned about,
/// skipped, and counted in the [`RunReport`].
pub struct ConsolidateTree<'a> {
    scanner: &'a dyn SourceScanner,
    reader: &'a dyn ContentReader,
    notifier: Option<&'a dyn Notifier>,
}

impl<'a> ConsolidateTree<'a> {
    pub fn new(
        scanner: &'a dyn SourceScanner,
        reader: &'a dyn ContentReader,
        notifier: Option<&'a dyn Notifier>,
    ) -> Self {
        Self { scanner, reader, notifier }
    }

    pub fn run(&self, config: &Config, sink: &mut dyn SnapshotSink) -> Result<RunReport> {
        config.validate()?;

        let mut report = RunReport::default();
        for source in &config.sources {
            let plan = ScanPlan {
                root: source.path.clone(),
                recursive: source.recursive,
                follow_links: config.follow_links,
                sort_entries: config.sort_entries,
            };
            let entries = match self.scanner.scan(&plan) {
                Ok(entries) => entries,
                Err(err) => {
                    self.warn(&format!(
                        "skipping directory {}: {}",
                        source.path.display(),
                        err
                    ));
                    report.dirs_skipped += 1;
                    continue;
                }
            };
            for entry in entries.into_iter().map(port_to_domain_entry) {
                self.write_entry(&entry, sink, &mut report)?;
            }
        }
        sink.finish().map_err(|err| ApplicationError::ConsolidationFailed {
            reason: "failed to finalize the snapshot".to_string(),
            source: Some(Box::new(err)),
        })?;
        Ok(report)
    }

    fn write_entry(
        &self,
        entry: &FileEntry,
        sink: &mut dyn SnapshotSink,
        report: &mut RunReport,
    ) -> Result<()> {
        sink.begin_section(&entry.display_name)?;
        match self.reader.read_text(&entry.path) {
            Ok(FileContent::Text(text)) => {
                sink.write_text(&text)?;
                report.files_written += 1;
            }
            Ok(FileContent::Binary) => {
                sink.write_skip_marker()?;
                report.files_skipped += 1;
            }
            // Unreadable files get the same treatment as binary ones so a
            // single bad file never aborts the run.
            Err(err) => {
                self.warn(&format!("could not read {}: {}", entry.path.display(), err));
                sink.write_skip_marker()?;
                report.files_skipped += 1;
            }
        }
        Ok(())
    }

    fn warn(&self, message: &str) {
        if let Some(notifier) = self.notifier {
            notifier.warn(message);
        }
    }
}

fn port_to_domain_entry(entry: FileEntryDto) -> FileEntry {
    FileEntry { path: entry.path, display_name: entry.display_name }
}
