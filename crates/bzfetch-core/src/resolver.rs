//! Platform-keyed lookup of the release asset URL and its checksum.

use crate::error::{FetchError, Result};
use crate::platform::PlatformKey;
use crate::release::ReleaseDescriptor;

/// Where to download the asset from and what it must hash to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedArtifact {
    pub url: String,
    pub sha256: String,
}

/// Exact-match lookup of `(os, arch)` in the descriptor's table.
///
/// No aliasing and no fallback: a pair that is not in the table is
/// `UnsupportedPlatform`. Never touches the network.
pub fn resolve(descriptor: &ReleaseDescriptor, os: &str, arch: &str) -> Result<ResolvedArtifact> {
    let entry = descriptor
        .entries
        .iter()
        .find(|e| e.os == os && e.arch == arch)
        .ok_or_else(|| FetchError::UnsupportedPlatform {
            os: os.to_string(),
            arch: arch.to_string(),
        })?;
    let artifact = ResolvedArtifact {
        url: descriptor.asset_url(&entry.suffix),
        sha256: entry.sha256.clone(),
    };
    tracing::debug!(%os, %arch, url = %artifact.url, "resolved release asset");
    Ok(artifact)
}

/// Same as [`resolve`] for a [`PlatformKey`].
pub fn resolve_key(descriptor: &ReleaseDescriptor, key: &PlatformKey) -> Result<ResolvedArtifact> {
    resolve(descriptor, &key.os, &key.arch)
}
