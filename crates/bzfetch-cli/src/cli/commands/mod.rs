//! CLI command handlers. One file per command.

mod build;
mod checksum;
mod completions;
mod fetch;
mod install;
mod platforms;
mod resolve;
mod version;

pub use build::run_build;
pub use checksum::run_checksum;
pub use completions::run_completions;
pub use fetch::run_fetch;
pub use install::run_install;
pub use platforms::run_platforms;
pub use resolve::run_resolve;
pub use version::run_version;
