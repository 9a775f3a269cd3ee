pub mod cli;
pub mod error;
pub mod git;
pub mod logger;
pub mod output;
pub mod version;

pub use error::{ErrorCode, VersionerError};
pub use git::{GitCli, RevisionSource};
pub use version::{resolve, resolve_version, Resolution, Source, VersionString};
