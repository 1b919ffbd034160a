pub mod config;
pub mod logging;
pub mod paths;

pub mod checksum;
pub mod error;
pub mod fetch;
pub mod pipeline;
pub mod platform;
pub mod release;
pub mod resolver;
pub mod storage;

pub use error::{FetchError, Result};
pub use platform::PlatformKey;
pub use release::ReleaseDescriptor;
pub use resolver::ResolvedArtifact;
