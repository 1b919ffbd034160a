//! CLI for installing the prebuilt buildifier binary.

mod commands;

use anyhow::Result;
use bzfetch_core::config::{self, BzfetchConfig};
use bzfetch_core::PlatformKey;
use clap::{Args, Parser, Subcommand};
use std::path::{Path, PathBuf};

use commands::{
    run_build, run_checksum, run_completions, run_fetch, run_install, run_platforms, run_resolve,
    run_version,
};

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "bzfetch")]
#[command(about = "Fetch, verify and install the prebuilt buildifier binary", long_about = None)]
pub struct Cli {
    /// Append logs to bzfetch.log in the per-user state dir instead of stderr.
    #[arg(long, global = true)]
    pub log_file: bool,

    #[command(subcommand)]
    pub command: CliCommand,
}

/// Target platform override. Both flags or neither; defaults to the host.
#[derive(Debug, Clone, Default, Args)]
pub struct PlatformArgs {
    /// OS family as uname reports it (Linux, Darwin, Windows).
    #[arg(long, requires = "arch")]
    pub os: Option<String>,
    /// Machine architecture as uname reports it (x86_64, aarch64, arm64).
    #[arg(long, requires = "os")]
    pub arch: Option<String>,
}

impl PlatformArgs {
    pub fn key(&self) -> PlatformKey {
        match (&self.os, &self.arch) {
            (Some(os), Some(arch)) => PlatformKey::new(os.as_str(), arch.as_str()),
            _ => PlatformKey::host(),
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Resolve, download, verify and install buildifier in one step.
    Fetch {
        /// Directory to install into (default: install_dir from config).
        #[arg(long, value_name = "DIR")]
        dir: Option<PathBuf>,
        #[command(flatten)]
        platform: PlatformArgs,
    },

    /// Build stage: download and verify buildifier into the build directory.
    Build {
        /// Staging directory (default: build_dir from config).
        #[arg(long, value_name = "DIR")]
        build_dir: Option<PathBuf>,
        #[command(flatten)]
        platform: PlatformArgs,
    },

    /// Install stage: copy the staged executable into the install directory.
    Install {
        /// Staging directory filled by `build`.
        #[arg(long, value_name = "DIR")]
        build_dir: Option<PathBuf>,
        /// Destination directory.
        #[arg(long, value_name = "DIR")]
        install_dir: Option<PathBuf>,
    },

    /// Print the download URL and expected SHA-256 for a platform.
    Resolve {
        #[command(flatten)]
        platform: PlatformArgs,
        /// Print as JSON.
        #[arg(long)]
        json: bool,
    },

    /// List the platforms the bundled release table supports.
    Platforms,

    /// Compute SHA-256 of a file.
    Checksum {
        /// Path to the file.
        path: String,
    },

    /// Print the package version.
    Version,

    /// Generate shell completions.
    Completions {
        /// Target shell.
        shell: clap_complete::Shell,
    },
}

impl CliCommand {
    /// Whether the command reads `config.toml`. The others never touch it,
    /// so a broken config cannot stop them and they never create one.
    pub fn needs_config(&self) -> bool {
        match self {
            CliCommand::Fetch { .. }
            | CliCommand::Build { .. }
            | CliCommand::Install { .. }
            | CliCommand::Resolve { .. }
            | CliCommand::Platforms => true,
            CliCommand::Checksum { .. } | CliCommand::Version | CliCommand::Completions { .. } => {
                false
            }
        }
    }

    pub fn run(self) -> Result<()> {
        let cfg = if self.needs_config() {
            let cfg = config::load_or_init()?;
            tracing::debug!("loaded config: {:?}", cfg);
            cfg
        } else {
            BzfetchConfig::default()
        };
        let descriptor = cfg.descriptor();

        match self {
            CliCommand::Fetch { dir, platform } => {
                let dir = match dir {
                    Some(d) => d,
                    None => cfg.install_dir()?,
                };
                run_fetch(&descriptor, &platform.key(), &dir)?;
            }
            CliCommand::Build {
                build_dir,
                platform,
            } => {
                let build_dir = match build_dir {
                    Some(d) => d,
                    None => cfg.build_dir()?,
                };
                run_build(&descriptor, &platform.key(), &build_dir)?;
            }
            CliCommand::Install {
                build_dir,
                install_dir,
            } => {
                let build_dir = match build_dir {
                    Some(d) => d,
                    None => cfg.build_dir()?,
                };
                let install_dir = match install_dir {
                    Some(d) => d,
                    None => cfg.install_dir()?,
                };
                run_install(&build_dir, &install_dir)?;
            }
            CliCommand::Resolve { platform, json } => {
                run_resolve(&descriptor, &platform.key(), json)?
            }
            CliCommand::Platforms => run_platforms(&descriptor)?,
            CliCommand::Checksum { path } => run_checksum(Path::new(&path))?,
            CliCommand::Version => run_version(),
            CliCommand::Completions { shell } => run_completions(shell),
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
