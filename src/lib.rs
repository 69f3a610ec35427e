//! Find the GitHub pull request that introduced a commit or a line of code.
//!
//! Two binaries sit on top of this library:
//!
//! - `getpr [OWNER/REPO] <COMMIT>` asks the GitHub GraphQL API which pull
//!   request a commit belongs to.
//! - `blame-pr <FILE>` blames a file, lets you pick a line, and reads the pull
//!   request number from the merge or squash commit message.
//!
//! The library API is not stable.

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
mod error;
pub mod git;
pub mod github;
#[cfg(feature = "cli")]
pub mod logging;
pub mod picker;
pub mod resolve;
pub mod shell_exec;
pub mod styling;

pub use error::{Error, exit_code};
