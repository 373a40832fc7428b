#![allow(clippy::multiple_crate_versions)]

pub mod config;
pub mod model;
pub mod snapshot;
