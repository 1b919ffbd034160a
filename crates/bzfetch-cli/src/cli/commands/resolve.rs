//! `bzfetch resolve` – show which asset a platform maps to, without downloading.

use anyhow::Result;
use bzfetch_core::resolver;
use bzfetch_core::{PlatformKey, ReleaseDescriptor};

pub fn run_resolve(descriptor: &ReleaseDescriptor, key: &PlatformKey, json: bool) -> Result<()> {
    let artifact = resolver::resolve_key(descriptor, key)?;
    if json {
        let value = serde_json::json!({
            "os": key.os,
            "arch": key.arch,
            "version": descriptor.version,
            "url": artifact.url,
            "sha256": artifact.sha256,
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
    } else {
        println!("{}  {}", artifact.sha256, artifact.url);
    }
    Ok(())
}
