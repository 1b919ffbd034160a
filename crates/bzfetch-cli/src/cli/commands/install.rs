//! `bzfetch install` – copy staged files into the install directory.

use anyhow::{Context, Result};
use bzfetch_core::pipeline;
use std::path::Path;

pub fn run_install(build_dir: &Path, install_dir: &Path) -> Result<()> {
    let installed = pipeline::install_staged(build_dir, install_dir).with_context(|| {
        format!(
            "install from {} failed (run `bzfetch build` first if nothing is staged)",
            build_dir.display()
        )
    })?;
    if installed.is_empty() {
        anyhow::bail!(
            "build directory {} is empty; run `bzfetch build` first",
            build_dir.display()
        );
    }
    for p in installed {
        println!("{}", p.display());
    }
    Ok(())
}
