//! `bzfetch fetch` – resolve, download, verify and install in one go.

use anyhow::Result;
use bzfetch_core::pipeline;
use bzfetch_core::{PlatformKey, ReleaseDescriptor};
use std::path::Path;

pub fn run_fetch(descriptor: &ReleaseDescriptor, key: &PlatformKey, dir: &Path) -> Result<()> {
    let path = pipeline::fetch_and_install(descriptor, key, dir)?;
    println!("{}", path.display());
    Ok(())
}
