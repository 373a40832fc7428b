// crates/shared-kernel/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub use error::{
    ApplicationError, DomainError, DomainResult, ErrorContext, InfrastructureError,
    PresentationError, Result, TreecatError,
};

pub mod error;
pub mod path;
