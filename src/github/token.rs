//! GitHub token lookup.

use std::path::{Path, PathBuf};

use crate::Error;

/// Environment variable checked first.
pub const TOKEN_ENV: &str = "GITHUB_TOKEN";

/// File in the home directory checked when the environment variable is unset.
pub const TOKEN_FILE: &str = ".github_token";

/// Find a GitHub token: `$GITHUB_TOKEN`, then `$HOME/.github_token`.
pub fn resolve_token() -> Result<String, Error> {
    resolve_token_from(std::env::var(TOKEN_ENV).ok(), dirs::home_dir())
}

/// [`resolve_token`] with the environment and home directory passed in.
///
/// Surrounding whitespace is trimmed from both sources. An empty or
/// whitespace-only value counts as missing.
pub fn resolve_token_from(env: Option<String>, home: Option<PathBuf>) -> Result<String, Error> {
    if let Some(token) = env.as_deref().map(str::trim).filter(|t| !t.is_empty()) {
        log::debug!("Using GitHub token from {TOKEN_ENV}");
        return Ok(token.to_string());
    }

    if let Some(token) = home.as_deref().and_then(read_token_file) {
        return Ok(token);
    }

    Err(Error::MissingToken)
}

fn read_token_file(home: &Path) -> Option<String> {
    let path = home.join(TOKEN_FILE);
    match std::fs::read_to_string(&path) {
        Ok(contents) => {
            let token = contents.trim();
            if token.is_empty() {
                log::debug!("{} is empty", path.display());
                None
            } else {
                log::debug!("Using GitHub token from {}", path.display());
                Some(token.to_string())
            }
        }
        Err(e) => {
            log::debug!("Cannot read {}: {e}", path.display());
            None
        }
    }
}
