use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use std::process::Command;

use super::{AttributionRecord, RepositoryRef, parse_blame, remote_to_web_url};
use crate::Error;
use crate::shell_exec::{display_command, run};

/// Repository context for git operations.
///
/// # Examples
///
/// ```no_run
/// use getpr::git::Repository;
///
/// let repo = Repository::current();
/// let summary = repo.commit_summary("HEAD")?;
/// # Ok::<(), getpr::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct Repository {
    path: PathBuf,
}

impl Repository {
    /// Create a repository context at the specified path.
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Create a repository context for the current directory.
    pub fn current() -> Self {
        Self::at(".")
    }

    /// Per-line attribution of `file`, last line first.
    pub fn blame(&self, file: &Path) -> Result<Vec<AttributionRecord>, Error> {
        let args = [OsStr::new("blame"), OsStr::new("--"), file.as_os_str()];
        let output = self.run_command(&args)?;
        parse_blame(&output)
    }

    /// The one-line log entry (`<abbrev> <subject>`) of a revision.
    pub fn commit_summary(&self, revision: &str) -> Result<String, Error> {
        let output = self.run_command(&[
            "log",
            "--oneline",
            "--no-color",
            "--no-decorate",
            "-n",
            "1",
            revision,
            "--",
        ])?;
        Ok(output.trim_end_matches(['\r', '\n']).to_string())
    }

    /// The push URL of a remote, e.g. `git@github.com:owner/repo.git`.
    pub fn push_url(&self, remote: &str) -> Result<String, Error> {
        let output = self.run_command(&["remote", "get-url", "--push", remote])?;
        Ok(output.trim().to_string())
    }

    /// The GitHub repository a remote points at.
    pub fn repository_ref(&self, remote: &str) -> Result<RepositoryRef, Error> {
        RepositoryRef::from_remote(&self.push_url(remote)?)
    }

    /// The web URL of the repository a remote points at.
    pub fn web_url(&self, remote: &str) -> Result<String, Error> {
        Ok(remote_to_web_url(&self.push_url(remote)?))
    }

    /// Run a git command in this repository and return its stdout.
    ///
    /// A non-zero exit or a failure to spawn git becomes
    /// [`Error::CommandFailed`] carrying git's stderr verbatim. Arguments are
    /// passed through untouched, so paths need not be UTF-8.
    pub fn run_command<S: AsRef<OsStr>>(&self, args: &[S]) -> Result<String, Error> {
        let mut cmd = Command::new("git");
        cmd.args(args);
        cmd.current_dir(&self.path);

        let command = display_command(&cmd);
        let output = run(&mut cmd, Some(&self.logging_context())).map_err(|e| {
            Error::CommandFailed {
                command: command.clone(),
                error: e.to_string(),
            }
        })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            for line in stderr.trim().lines() {
                log::debug!("  ! {}", line);
            }
            // Some git commands print errors to stdout
            let stdout = String::from_utf8_lossy(&output.stdout);
            let error = [stderr.trim(), stdout.trim()]
                .into_iter()
                .filter(|s| !s.is_empty())
                .collect::<Vec<_>>()
                .join("\n");
            return Err(Error::CommandFailed { command, error });
        }

        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
        log::trace!("  {} bytes of output", stdout.len());
        Ok(stdout)
    }

    fn logging_context(&self) -> String {
        self.path.display().to_string()
    }
}
