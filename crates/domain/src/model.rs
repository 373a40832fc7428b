pub mod entities;

pub use entities::FileEntry;
