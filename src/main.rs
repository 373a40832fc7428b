// src/main.rs
#![allow(clippy::multiple_crate_versions)]

fn main() -> anyhow::Result<()> {
    treecat::bootstrap::run()
}
