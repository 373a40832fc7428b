pub mod file_reader;
pub mod file_writer;
pub mod snapshot_writer;

pub use file_reader::{FileReader, Utf8ContentReader};
pub use file_writer::FileWriter;
pub use snapshot_writer::SnapshotWriter;
