//! Consolidated styling module for terminal output.
//!
//! This module uses the anstyle ecosystem:
//! - anstream for auto-detecting color support
//! - anstyle for composable styling
//! - color-print for inline markup in messages
//!
//! ## stdout vs stderr principle
//!
//! - **stdout**: the resolved pull request URL, and nothing else
//! - **stderr**: errors, hints, and log output
//!
//! This separation allows `getpr 737302e | pbcopy` without status messages
//! leaking into the pipe.

mod constants;
mod format;

// Re-exports from anstream (auto-detecting output)
pub use anstream::{eprintln, println};

pub use constants::*;
pub use format::format_with_gutter;
