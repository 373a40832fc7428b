pub mod aggregates;

pub use aggregates::{Config, SourceDir};
