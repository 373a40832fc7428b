//! # Ports
//!
//! Interface definitions for external dependencies.
//!
//! This crate defines traits that abstract external concerns:
//!
//! - [`filesystem`]: Directory scanning and file discovery
//! - [`content`]: Reading file contents as text
//! - [`sink`]: Writing snapshot sections
//! - [`notify`]: Warning output for skipped paths
//!
//! These ports allow the domain and application layers to remain
//! independent of specific implementations.

// crates/ports/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod content;
pub mod filesystem;
pub mod notify;
pub mod sink;
