//! `bzfetch build` – stage the verified executable in the build directory.

use anyhow::Result;
use bzfetch_core::pipeline;
use bzfetch_core::{PlatformKey, ReleaseDescriptor};
use std::path::Path;

pub fn run_build(descriptor: &ReleaseDescriptor, key: &PlatformKey, build_dir: &Path) -> Result<()> {
    let path = pipeline::stage(descriptor, key, build_dir)?;
    println!("staged {}", path.display());
    Ok(())
}
