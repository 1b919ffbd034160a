//! resolve → fetch → verify → install, and the two packaging stages built on it.
//!
//! Each call runs once, synchronously, and stops at the first error. Callers
//! must not run two of these against the same directory at the same time.

use crate::checksum;
use crate::error::Result;
use crate::fetch;
use crate::platform::PlatformKey;
use crate::release::ReleaseDescriptor;
use crate::resolver;
use crate::storage;
use std::path::{Path, PathBuf};

/// Download the asset for `key`, verify it, and install it into `dir`.
pub fn fetch_and_install(
    descriptor: &ReleaseDescriptor,
    key: &PlatformKey,
    dir: &Path,
) -> Result<PathBuf> {
    let artifact = resolver::resolve_key(descriptor, key)?;
    let data = fetch::fetch(&artifact.url)?;
    let data = checksum::verify(data, &artifact.sha256)?;
    let name = descriptor.executable_name(key.is_windows());
    storage::install(&data, dir, &name)
}

/// Build stage: fetch and verify into the build directory.
///
/// Executables left by an earlier build for any platform are removed first,
/// so the install stage only ever sees the last one staged.
pub fn stage(descriptor: &ReleaseDescriptor, key: &PlatformKey, build_dir: &Path) -> Result<PathBuf> {
    tracing::info!(platform = %key, "staging {} {} into {}", descriptor.tool, descriptor.version, build_dir.display());
    let stale = [descriptor.executable_name(false), descriptor.executable_name(true)];
    storage::remove_files(build_dir, &stale)?;
    fetch_and_install(descriptor, key, build_dir)
}

/// Install stage: copy whatever the build stage staged into the install directory.
pub fn install_staged(build_dir: &Path, install_dir: &Path) -> Result<Vec<PathBuf>> {
    tracing::info!("installing {} into {}", build_dir.display(), install_dir.display());
    storage::copy_dir_files(build_dir, install_dir)
}
