use crate::paths;
use crate::release::{ReleaseDescriptor, DEFAULT_RELEASES_HOST, DEFAULT_REPO};
use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Global configuration loaded from `~/.config/bzfetch/config.toml`.
/// Every key is optional; a missing key takes its `Default` value.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BzfetchConfig {
    /// Scheme and host serving the release assets; override for a mirror.
    pub releases_host: String,
    /// `owner/name` of the upstream repository on the releases host.
    pub repo: String,
    /// Directory the build stage downloads into. Defaults to the per-user cache dir.
    pub build_dir: Option<PathBuf>,
    /// Directory the install stage copies into. Defaults to `~/.local/bin` on Unix.
    pub install_dir: Option<PathBuf>,
}

impl Default for BzfetchConfig {
    fn default() -> Self {
        Self {
            releases_host: DEFAULT_RELEASES_HOST.to_string(),
            repo: DEFAULT_REPO.to_string(),
            build_dir: None,
            install_dir: None,
        }
    }
}

impl BzfetchConfig {
    /// Reject hosts that are not absolute http(s) URLs and empty repos.
    pub fn validate(&self) -> Result<()> {
        let parsed = url::Url::parse(&self.releases_host)
            .with_context(|| format!("invalid releases_host {:?}", self.releases_host))?;
        if parsed.scheme() != "https" && parsed.scheme() != "http" {
            bail!("releases_host must be http or https, got {}", parsed.scheme());
        }
        if self.repo.trim_matches('/').is_empty() {
            bail!("repo must not be empty");
        }
        Ok(())
    }

    /// Bundled release table with this config's host and repo applied.
    pub fn descriptor(&self) -> ReleaseDescriptor {
        ReleaseDescriptor::buildifier()
            .with_releases_host(&self.releases_host)
            .with_repo(&self.repo)
    }

    pub fn build_dir(&self) -> Result<PathBuf> {
        match &self.build_dir {
            Some(p) => Ok(p.clone()),
            None => paths::build_dir(),
        }
    }

    pub fn install_dir(&self) -> Result<PathBuf> {
        match &self.install_dir {
            Some(p) => Ok(p.clone()),
            None => paths::install_dir(),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    paths::config_file()
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<BzfetchConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = BzfetchConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: BzfetchConfig =
        toml::from_str(&data).with_context(|| format!("parse {}", path.display()))?;
    cfg.validate()?;
    Ok(cfg)
}
