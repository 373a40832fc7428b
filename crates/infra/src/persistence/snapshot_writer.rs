// crates/infra/src/persistence/snapshot_writer.rs
use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use treecat_domain::snapshot::{SKIP_MARKER, section_header};
use treecat_ports::sink::SnapshotSink;
use treecat_shared_kernel::{InfrastructureError, Result};

use crate::persistence::FileWriter;

/// `SnapshotSink` adapter emitting the delimiter format over any writer.
///
/// The underlying handle is held for the whole run and flushed by `finish`;
/// dropping the writer releases it even when a run aborts midway.
pub struct SnapshotWriter<W: Write> {
    out: W,
}

impl SnapshotWriter<BufWriter<File>> {
    /// Open the snapshot file at `path`, truncating any previous content.
    pub fn create(path: &Path) -> Result<Self> {
        let out = FileWriter::create(path).map_err(|source| {
            InfrastructureError::OutputCreate { path: path.to_path_buf(), source }
        })?;
        Ok(Self { out })
    }
}

impl<W: Write> SnapshotWriter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> SnapshotSink for SnapshotWriter<W> {
    fn begin_section(&mut self, display_name: &str) -> Result<()> {
        self.out.write_all(section_header(display_name).as_bytes())?;
        Ok(())
    }

    fn write_text(&mut self, contents: &str) -> Result<()> {
        self.out.write_all(contents.as_bytes())?;
        self.out.write_all(b"\n")?;
        Ok(())
    }

    fn write_skip_marker(&mut self) -> Result<()> {
        self.out.write_all(SKIP_MARKER.as_bytes())?;
        self.out.write_all(b"\n")?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.out.flush()?;
        Ok(())
    }
}
