//! Host platform key: (OS family, machine architecture) as the host reports them.
//!
//! Names follow `uname -s` / `uname -m` conventions (`Linux`, `Darwin`,
//! `Windows`; `x86_64`, `aarch64`, `arm64`), which is what the release table
//! is keyed on.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PlatformKey {
    pub os: String,
    pub arch: String,
}

impl PlatformKey {
    pub fn new(os: impl Into<String>, arch: impl Into<String>) -> Self {
        Self {
            os: os.into(),
            arch: arch.into(),
        }
    }

    /// Platform key of the machine this binary runs on.
    pub fn host() -> Self {
        from_rust_consts(std::env::consts::OS, std::env::consts::ARCH)
    }

    /// Windows family gets the `.exe` executable name.
    pub fn is_windows(&self) -> bool {
        self.os.eq_ignore_ascii_case("windows")
    }
}

impl fmt::Display for PlatformKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.os, self.arch)
    }
}

/// Map Rust's `std::env::consts` names to uname-style names.
/// Unknown values pass through so an unsupported host is reported verbatim.
fn from_rust_consts(os: &str, arch: &str) -> PlatformKey {
    let os_name = match os {
        "linux" => "Linux",
        "macos" => "Darwin",
        "windows" => "Windows",
        other => other,
    };
    // macOS reports arm64 from uname -m; Linux reports aarch64.
    let arch_name = match (os, arch) {
        ("macos", "aarch64") => "arm64",
        (_, other) => other,
    };
    PlatformKey::new(os_name, arch_name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_rust_names_to_uname_names() {
        assert_eq!(from_rust_consts("linux", "x86_64"), PlatformKey::new("Linux", "x86_64"));
        assert_eq!(from_rust_consts("linux", "aarch64"), PlatformKey::new("Linux", "aarch64"));
        assert_eq!(from_rust_consts("macos", "aarch64"), PlatformKey::new("Darwin", "arm64"));
        assert_eq!(from_rust_consts("macos", "x86_64"), PlatformKey::new("Darwin", "x86_64"));
        assert_eq!(from_rust_consts("windows", "x86_64"), PlatformKey::new("Windows", "x86_64"));
    }

    #[test]
    fn unknown_names_pass_through() {
        assert_eq!(
            from_rust_consts("freebsd", "riscv64"),
            PlatformKey::new("freebsd", "riscv64")
        );
    }

    #[test]
    fn windows_detection_and_display() {
        let key = PlatformKey::new("Windows", "x86_64");
        assert!(key.is_windows());
        assert_eq!(key.to_string(), "Windows/x86_64");
        assert!(!PlatformKey::new("Linux", "x86_64").is_windows());
    }

    #[test]
    fn host_key_is_not_empty() {
        let key = PlatformKey::host();
        assert!(!key.os.is_empty());
        assert!(!key.arch.is_empty());
        assert_eq!(key.is_windows(), cfg!(target_os = "windows"));
    }
}
