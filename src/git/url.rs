//! Git remote URL parsing.
//!
//! Turns the push URL of a remote into the GitHub repository it points at
//! (owner and name) and into the repository's web URL.

use std::borrow::Cow;

use crate::Error;

const GITHUB_WEB: &str = "https://github.com/";

/// A GitHub repository identified by owner and name.
///
/// # Supported remote formats
///
/// - `ssh://git@<host>/<owner>/<repo>.git`
/// - `ssh://<host>/<owner>/<repo>.git`
/// - `git@<host>:<owner>/<repo>.git`
/// - `git://<host>/<owner>/<repo>.git`
/// - `http(s)://<host>/<owner>/<repo>.git`
///
/// The `.git` suffix and trailing slashes are optional.
///
/// # Example
///
/// ```
/// use getpr::git::RepositoryRef;
///
/// let repo = RepositoryRef::from_remote("git@github.com:skanehira/github-blame.git").unwrap();
/// assert_eq!(repo.owner(), "skanehira");
/// assert_eq!(repo.name(), "github-blame");
/// assert_eq!(repo.web_url(), "https://github.com/skanehira/github-blame");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryRef {
    owner: String,
    name: String,
}

impl RepositoryRef {
    /// Build from owner and name, rejecting empty parts.
    pub fn new(owner: impl Into<String>, name: impl Into<String>) -> Option<Self> {
        let owner = owner.into();
        let name = name.into();
        if owner.is_empty() || name.is_empty() {
            return None;
        }
        Some(Self { owner, name })
    }

    /// Parse a git remote URL.
    ///
    /// Fails with [`Error::UnrecognizedRemote`] when the remote has an
    /// unknown shape or does not contain both an owner and a name.
    pub fn from_remote(remote: &str) -> Result<Self, Error> {
        let unrecognized = || Error::UnrecognizedRemote {
            remote: without_credentials(remote.trim()).into_owned(),
        };

        let normalized = normalize_remote(remote);
        let path = match remote_kind(normalized) {
            // ssh://git@github.com/owner/repo: the host is never part of the path
            RemoteKind::PathStyle => url_path(normalized).ok_or_else(unrecognized)?,
            // git@github.com:owner/repo
            RemoteKind::ScpStyle => normalized
                .split_once(':')
                .map(|(_, path)| path)
                .ok_or_else(unrecognized)?,
            RemoteKind::Other => return Err(unrecognized()),
        };

        let mut segments = path.rsplit('/');
        let (Some(name), Some(owner)) = (segments.next(), segments.next()) else {
            return Err(unrecognized());
        };
        Self::new(owner, name).ok_or_else(unrecognized)
    }

    /// Parse an explicit `OWNER/REPO` argument.
    pub fn from_slug(slug: &str) -> Result<Self, Error> {
        let invalid = || Error::InvalidRepositorySlug {
            slug: slug.to_string(),
        };
        match slug.split_once('/') {
            Some((owner, name))
                if !owner.chars().any(char::is_whitespace)
                    && !name.chars().any(char::is_whitespace)
                    && !name.contains('/') =>
            {
                Self::new(owner, name).ok_or_else(invalid)
            }
            _ => Err(invalid()),
        }
    }

    /// The repository owner or organization (e.g., "skanehira").
    pub fn owner(&self) -> &str {
        &self.owner
    }

    /// The repository name without .git suffix (e.g., "github-blame").
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The repository page on github.com.
    pub fn web_url(&self) -> String {
        format!("{GITHUB_WEB}{}/{}", self.owner, self.name)
    }
}

impl std::fmt::Display for RepositoryRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

/// Convert a remote URL into the repository's web URL.
///
/// ssh and git remotes are mapped onto `https://github.com/<owner>/<repo>`.
/// http(s) remotes already are web URLs and keep their host, minus any
/// credentials. Anything else is returned as is, minus the `.git` suffix.
pub fn remote_to_web_url(remote: &str) -> String {
    let normalized = normalize_remote(remote);
    match remote_kind(normalized) {
        RemoteKind::PathStyle | RemoteKind::ScpStyle if !is_http(normalized) => {
            match RepositoryRef::from_remote(normalized) {
                Ok(repo) => repo.web_url(),
                Err(_) => normalized.to_string(),
            }
        }
        _ => without_credentials(normalized).into_owned(),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RemoteKind {
    /// `scheme://host/owner/repo`: owner and repo are the last two segments
    PathStyle,
    /// `user@host:owner/repo`
    ScpStyle,
    Other,
}

fn remote_kind(remote: &str) -> RemoteKind {
    if remote.starts_with("ssh") || is_http(remote) {
        RemoteKind::PathStyle
    } else if remote.starts_with("git") {
        if remote.contains("://") {
            RemoteKind::PathStyle
        } else {
            RemoteKind::ScpStyle
        }
    } else {
        RemoteKind::Other
    }
}

fn is_http(remote: &str) -> bool {
    remote.starts_with("http")
}

/// The path after `scheme://authority/`, if there is one.
fn url_path(remote: &str) -> Option<&str> {
    let (_, rest) = remote.split_once("://")?;
    rest.split_once('/').map(|(_, path)| path)
}

/// Drop `user[:password]@` from an http(s) remote.
///
/// ssh users (`git@`) are kept, they are not secrets.
fn without_credentials(remote: &str) -> Cow<'_, str> {
    if !is_http(remote) {
        return Cow::Borrowed(remote);
    }
    let Some((scheme, rest)) = remote.split_once("://") else {
        return Cow::Borrowed(remote);
    };
    let authority_end = rest.find('/').unwrap_or(rest.len());
    match rest[..authority_end].rsplit_once('@') {
        Some((_, host)) => Cow::Owned(format!("{scheme}://{host}{}", &rest[authority_end..])),
        None => Cow::Borrowed(remote),
    }
}

/// Trim whitespace, trailing slashes, a `.git` suffix and trailing dots.
fn normalize_remote(remote: &str) -> &str {
    let remote = remote.trim().trim_end_matches('/');
    let remote = remote.strip_suffix(".git").unwrap_or(remote);
    remote.trim_end_matches('.')
}
