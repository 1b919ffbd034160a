//! `bzfetch platforms` – list the release table.

use anyhow::Result;
use bzfetch_core::{PlatformKey, ReleaseDescriptor};

pub fn run_platforms(descriptor: &ReleaseDescriptor) -> Result<()> {
    descriptor.validate()?;
    let host = PlatformKey::host();
    println!("{} {}", descriptor.tool, descriptor.version);
    println!("{:<8} {:<8} {:<20} {}", "OS", "ARCH", "ASSET", "SHA256");
    for e in &descriptor.entries {
        let marker = if e.os == host.os && e.arch == host.arch {
            " (host)"
        } else {
            ""
        };
        println!(
            "{:<8} {:<8} {:<20} {}{}",
            e.os,
            e.arch,
            format!("{}-{}", descriptor.tool, e.suffix),
            e.sha256,
            marker
        );
    }
    Ok(())
}
