//! Per-user directories for config, staging, logs and installed executables.
//!
//! Unix follows the XDG base directory spec through the `xdg` crate. Other
//! hosts (Windows) use the `dirs` crate's known-folder lookup.

use anyhow::Result;
use std::path::PathBuf;

const APP: &str = "bzfetch";

#[cfg(unix)]
pub fn config_file() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::new()?;
    Ok(xdg_dirs.get_config_home().join(APP).join("config.toml"))
}

#[cfg(not(unix))]
pub fn config_file() -> Result<PathBuf> {
    let base = dirs::config_dir().ok_or_else(|| anyhow::anyhow!("no per-user config directory"))?;
    Ok(base.join(APP).join("config.toml"))
}

/// Default staging directory for the build stage.
#[cfg(unix)]
pub fn build_dir() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::new()?;
    Ok(xdg_dirs.get_cache_home().join(APP).join("build"))
}

#[cfg(not(unix))]
pub fn build_dir() -> Result<PathBuf> {
    let base = dirs::cache_dir().ok_or_else(|| anyhow::anyhow!("no per-user cache directory"))?;
    Ok(base.join(APP).join("build"))
}

/// Default install directory: `~/.local/bin`, where XDG puts user executables.
#[cfg(unix)]
pub fn install_dir() -> Result<PathBuf> {
    match std::env::var_os("HOME") {
        Some(home) => Ok(PathBuf::from(home).join(".local").join("bin")),
        None => anyhow::bail!("no install_dir configured and HOME is not set"),
    }
}

#[cfg(not(unix))]
pub fn install_dir() -> Result<PathBuf> {
    let base =
        dirs::data_local_dir().ok_or_else(|| anyhow::anyhow!("no per-user local data directory"))?;
    Ok(base.join(APP).join("bin"))
}

/// Directory holding `bzfetch.log` when file logging is requested.
#[cfg(unix)]
pub fn log_dir() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::new()?;
    Ok(xdg_dirs.get_state_home().join(APP))
}

#[cfg(not(unix))]
pub fn log_dir() -> Result<PathBuf> {
    let base =
        dirs::data_local_dir().ok_or_else(|| anyhow::anyhow!("no per-user local data directory"))?;
    Ok(base.join(APP).join("logs"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_dirs_are_scoped_to_the_tool() {
        let build = build_dir().unwrap();
        assert!(build.ends_with(PathBuf::from(APP).join("build")), "{}", build.display());
        let logs = log_dir().unwrap();
        assert!(logs.components().any(|c| c.as_os_str() == APP), "{}", logs.display());
        assert!(config_file().unwrap().ends_with(PathBuf::from(APP).join("config.toml")));
    }

    #[test]
    fn default_install_dir_is_a_bin_dir() {
        let dir = install_dir().unwrap();
        assert!(dir.ends_with("bin"), "{}", dir.display());
    }
}
