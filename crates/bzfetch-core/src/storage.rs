//! Writing the verified executable into place.
//!
//! The bytes go to `<name>.part` first, get their execute bits, then are
//! renamed to the final name, so a half-written file never carries the
//! final name. A failure leaves the `.part` file behind; it is not cleaned up.

use crate::error::{FetchError, Result};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Temporary file suffix used before the rename.
pub const TEMP_SUFFIX: &str = ".part";

/// Write `data` as `dir/file_name`, creating `dir` if needed, and mark it executable.
/// Returns the final path.
pub fn install(data: &[u8], dir: &Path, file_name: &str) -> Result<PathBuf> {
    fs::create_dir_all(dir).map_err(|e| FetchError::fs(dir, e))?;
    let final_path = dir.join(file_name);
    let tp = temp_path(&final_path);

    {
        let mut f = fs::File::options()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&tp)
            .map_err(|e| FetchError::fs(&tp, e))?;
        f.write_all(data).map_err(|e| FetchError::fs(&tp, e))?;
        f.sync_all().map_err(|e| FetchError::fs(&tp, e))?;
    }

    mark_executable(&tp)?;
    fs::rename(&tp, &final_path).map_err(|e| FetchError::fs(&final_path, e))?;

    tracing::info!("installed {} ({} bytes)", final_path.display(), data.len());
    Ok(final_path)
}

/// OR owner/group/other execute bits into the file's current mode.
/// Uses chmod directly, so the process umask does not apply.
#[cfg(unix)]
pub fn mark_executable(path: &Path) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;
    let mut perms = fs::metadata(path)
        .map_err(|e| FetchError::fs(path, e))?
        .permissions();
    perms.set_mode(perms.mode() | 0o111);
    fs::set_permissions(path, perms).map_err(|e| FetchError::fs(path, e))
}

/// Windows has no execute bit; `.exe` is enough.
#[cfg(not(unix))]
pub fn mark_executable(_path: &Path) -> Result<()> {
    Ok(())
}

/// Copy every regular file in `from` into `to` (created if missing), keeping permissions.
/// Returns the copied destination paths, sorted.
pub fn copy_dir_files(from: &Path, to: &Path) -> Result<Vec<PathBuf>> {
    let entries = fs::read_dir(from).map_err(|e| FetchError::fs(from, e))?;
    fs::create_dir_all(to).map_err(|e| FetchError::fs(to, e))?;

    let mut out = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| FetchError::fs(from, e))?;
        let src = entry.path();
        let file_type = entry.file_type().map_err(|e| FetchError::fs(&src, e))?;
        if !file_type.is_file() || src.to_string_lossy().ends_with(TEMP_SUFFIX) {
            continue;
        }
        let dst = to.join(entry.file_name());
        // fs::copy carries the permission bits over.
        fs::copy(&src, &dst).map_err(|e| FetchError::fs(&dst, e))?;
        tracing::debug!("copied {} -> {}", src.display(), dst.display());
        out.push(dst);
    }
    out.sort();
    Ok(out)
}

/// Delete `dir/<name>` and `dir/<name>.part` for each name, ignoring ones that don't exist.
pub fn remove_files(dir: &Path, names: &[String]) -> Result<()> {
    for name in names {
        let path = dir.join(name);
        for p in [temp_path(&path), path] {
            match fs::remove_file(&p) {
                Ok(()) => tracing::debug!("removed stale {}", p.display()),
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
                Err(e) => return Err(FetchError::fs(&p, e)),
            }
        }
    }
    Ok(())
}

/// Path for the temp file: appends `.part` to the final path.
pub fn temp_path(final_path: &Path) -> PathBuf {
    let mut o = final_path.as_os_str().to_owned();
    o.push(TEMP_SUFFIX);
    PathBuf::from(o)
}
