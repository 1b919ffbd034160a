//! Error taxonomy for resolve → fetch → verify → install.
//!
//! Every variant is terminal for the invocation; nothing here is retried.

use std::io;
use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, FetchError>;

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// No release table entry for the host's (OS, arch) pair.
    #[error("unsupported platform: {os}/{arch} has no prebuilt buildifier in this release")]
    UnsupportedPlatform { os: String, arch: String },

    /// Server answered with a non-success status.
    #[error("GET {url} returned HTTP {status}")]
    Transfer { url: String, status: u32 },

    /// Transport-level failure (DNS, TLS, connection reset, bad URL).
    #[error("GET {url} failed")]
    Curl {
        url: String,
        #[source]
        source: curl::Error,
    },

    /// Downloaded bytes do not hash to the recorded checksum.
    #[error("sha256 mismatch, expected {expected}, got {actual}")]
    Integrity { expected: String, actual: String },

    /// Directory creation, write, copy or permission change failed.
    #[error("filesystem error at {}", path.display())]
    Filesystem {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl FetchError {
    pub(crate) fn fs(path: impl Into<PathBuf>, source: io::Error) -> Self {
        FetchError::Filesystem {
            path: path.into(),
            source,
        }
    }

    /// True for both HTTP status failures and transport failures.
    pub fn is_transfer(&self) -> bool {
        matches!(self, FetchError::Transfer { .. } | FetchError::Curl { .. })
    }
}
