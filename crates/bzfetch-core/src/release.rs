//! Release descriptor: the upstream version plus its per-platform asset table.
//!
//! The version and the table live in one value so a release bump edits both
//! in the same place. `validate` is run by the test suite against the bundled
//! table.

use anyhow::{bail, Result};
use std::collections::HashSet;

/// Upstream buildifier release the bundled table was recorded from.
pub const BUILDIFIER_VERSION: &str = "6.1.2";

/// Packaging revision appended to the upstream version.
pub const PACKAGE_REVISION: &str = "0";

pub const DEFAULT_RELEASES_HOST: &str = "https://github.com";
pub const DEFAULT_REPO: &str = "bazelbuild/buildtools";

const TOOL_NAME: &str = "buildifier";

/// (os, arch, asset suffix, sha256)
const BUILDIFIER_ASSETS: &[(&str, &str, &str, &str)] = &[
    (
        "Linux",
        "aarch64",
        "linux-arm64",
        "0ba6e8e3208b5a029164e542ddb5509e618f87b639ffe8cc2f54770022853080",
    ),
    (
        "Linux",
        "x86_64",
        "linux-amd64",
        "51bc947dabb7b14ec6fb1224464fbcf7a7cb138f1a10a3b328f00835f72852ce",
    ),
    (
        "Darwin",
        "arm64",
        "darwin-arm64",
        "7549b5f535219ac957aa2a6069d46fbfc9ea3f74abd85fd3d460af4b1a2099a6",
    ),
    (
        "Darwin",
        "x86_64",
        "darwin-amd64",
        "e2f4a67691c5f55634fbfb3850eb97dd91be0edd059d947b6c83d120682e0216",
    ),
    (
        "Windows",
        "x86_64",
        "windows-amd64.exe",
        "92bdd284fbc6766fc3e300b434ff9e68ac4d76a06cb29d1bdefe79a102a8d135",
    ),
];

/// One row of the asset table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlatformEntry {
    pub os: String,
    pub arch: String,
    /// Appended to `<tool>-` to form the asset file name.
    pub suffix: String,
    /// Lowercase hex SHA-256 of the asset.
    pub sha256: String,
}

impl PlatformEntry {
    pub fn new(os: &str, arch: &str, suffix: &str, sha256: &str) -> Self {
        Self {
            os: os.to_string(),
            arch: arch.to_string(),
            suffix: suffix.to_string(),
            sha256: sha256.to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ReleaseDescriptor {
    pub tool: String,
    pub version: String,
    /// Scheme + host, no trailing slash (e.g. `https://github.com`).
    pub releases_host: String,
    /// `owner/name` on the releases host.
    pub repo: String,
    pub entries: Vec<PlatformEntry>,
}

impl ReleaseDescriptor {
    /// The bundled buildifier release table.
    pub fn buildifier() -> Self {
        Self {
            tool: TOOL_NAME.to_string(),
            version: BUILDIFIER_VERSION.to_string(),
            releases_host: DEFAULT_RELEASES_HOST.to_string(),
            repo: DEFAULT_REPO.to_string(),
            entries: BUILDIFIER_ASSETS
                .iter()
                .map(|(os, arch, suffix, sha)| PlatformEntry::new(os, arch, suffix, sha))
                .collect(),
        }
    }

    /// Point downloads at a mirror (or a local test server).
    pub fn with_releases_host(mut self, host: &str) -> Self {
        self.releases_host = host.trim_end_matches('/').to_string();
        self
    }

    pub fn with_repo(mut self, repo: &str) -> Self {
        self.repo = repo.trim_matches('/').to_string();
        self
    }

    /// `<host>/<repo>/releases/download/v<version>/<tool>-<suffix>`
    pub fn asset_url(&self, suffix: &str) -> String {
        format!(
            "{}/{}/releases/download/v{}/{}-{}",
            self.releases_host.trim_end_matches('/'),
            self.repo,
            self.version,
            self.tool,
            suffix
        )
    }

    /// Name of the installed executable for a given OS family.
    pub fn executable_name(&self, windows: bool) -> String {
        if windows {
            format!("{}.exe", self.tool)
        } else {
            self.tool.clone()
        }
    }

    /// Check table well-formedness: unique keys, non-empty suffixes, 64-char lowercase hex hashes.
    pub fn validate(&self) -> Result<()> {
        if self.version.is_empty() {
            bail!("release table for {} has no version", self.tool);
        }
        let mut seen = HashSet::new();
        for e in &self.entries {
            if !seen.insert((e.os.as_str(), e.arch.as_str())) {
                bail!("duplicate table entry for {}/{}", e.os, e.arch);
            }
            if e.suffix.is_empty() {
                bail!("empty asset suffix for {}/{}", e.os, e.arch);
            }
            if !is_sha256_hex(&e.sha256) {
                bail!("malformed sha256 for {}/{}: {:?}", e.os, e.arch, e.sha256);
            }
        }
        Ok(())
    }
}

/// Published package version: `<upstream version>.<packaging revision>`.
pub fn package_version() -> String {
    format!("{}.{}", BUILDIFIER_VERSION, PACKAGE_REVISION)
}

pub(crate) fn is_sha256_hex(s: &str) -> bool {
    s.len() == 64 && s.bytes().all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f'))
}
