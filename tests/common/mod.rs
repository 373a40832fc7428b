pub mod temp;

pub use temp::TempDir;
