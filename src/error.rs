//! getpr error types and formatting
//!
//! **`Error`** is a typed enum for domain errors that can be pattern-matched
//! and tested. Use `.into()` to convert to `anyhow::Error` while preserving the
//! type for downcasting. Display produces styled output for users.

use color_print::cformat;

use crate::styling::{error_message, format_with_gutter, hint_message};

/// Domain errors for resolving commits to pull requests.
///
/// Each variant stores the data needed to construct a user-facing message.
///
/// ```ignore
/// return Err(Error::SelectionAborted.into());
///
/// if let Some(Error::PullRequestNotFound { revision, .. }) = err.downcast_ref() {
///     println!("nothing for {revision}");
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    // Subprocess errors
    /// A version-control command exited non-zero or could not be spawned.
    CommandFailed {
        /// Shell-quoted command line, e.g. `git blame src/lib.rs`
        command: String,
        /// stderr of the command, or the spawn error
        error: String,
    },

    // Parse errors
    MalformedAttributionLine {
        /// 1-based line number within the blame output
        line_number: usize,
        line: String,
    },
    UnrecognizedRemote {
        remote: String,
    },
    InvalidRepositorySlug {
        slug: String,
    },
    NoPullRequestNumber {
        message: String,
    },

    // Authentication errors
    MissingToken,
    Unauthorized,

    // API errors
    ApiRequestFailed {
        error: String,
    },
    /// The GraphQL endpoint answered with an `errors` array.
    ApiErrors {
        messages: Vec<String>,
    },
    PullRequestNotFound {
        owner: String,
        name: String,
        revision: String,
    },

    // Interactive selection
    SelectionAborted,
    NothingToSelect {
        file: String,
    },
    PickerUnavailable,

    BrowserOpenFailed {
        url: String,
        error: String,
    },
}

impl std::error::Error for Error {}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::CommandFailed { command, error } => {
                let header = error_message(cformat!("Command failed: <bold>{command}</>"));
                write!(f, "{}", format_error_block(header, error))
            }

            Error::MalformedAttributionLine { line_number, line } => {
                let header = error_message(cformat!(
                    "Malformed attribution line <bold>{line_number}</>: expected <bright-black><<revision>> <<text>></>"
                ));
                write!(f, "{}", format_error_block(header, line))
            }

            Error::UnrecognizedRemote { remote } => {
                write!(
                    f,
                    "{}\n{}",
                    error_message(cformat!(
                        "Cannot determine owner/repository from remote <bold>{remote}</>"
                    )),
                    hint_message(cformat!(
                        "Pass it explicitly, e.g. <bright-black>getpr owner/repo <<commit>></>"
                    ))
                )
            }

            Error::InvalidRepositorySlug { slug } => {
                write!(
                    f,
                    "{}\n{}",
                    error_message(cformat!("Invalid repository <bold>{slug}</>")),
                    hint_message(cformat!("Expected <bright-black>OWNER/REPO</>"))
                )
            }

            Error::NoPullRequestNumber { message } => {
                let header = error_message("Cannot find a pull request number in commit message");
                write!(f, "{}", format_error_block(header, message))
            }

            Error::MissingToken => {
                write!(
                    f,
                    "{}\n{}",
                    error_message("Cannot get GitHub token"),
                    hint_message(cformat!(
                        "Set <bright-black>GITHUB_TOKEN</>, or write the token to <bright-black>$HOME/.github_token</>"
                    ))
                )
            }

            Error::Unauthorized => {
                write!(
                    f,
                    "{}\n{}",
                    error_message("GitHub rejected the token (401 Unauthorized)"),
                    hint_message(cformat!(
                        "Check the token in <bright-black>GITHUB_TOKEN</> or <bright-black>$HOME/.github_token</>"
                    ))
                )
            }

            Error::ApiRequestFailed { error } => {
                let header = error_message("GitHub API request failed");
                write!(f, "{}", format_error_block(header, error))
            }

            Error::ApiErrors { messages } => {
                let header = error_message("GitHub API returned errors");
                write!(f, "{}", format_error_block(header, &messages.join("\n")))
            }

            Error::PullRequestNotFound {
                owner,
                name,
                revision,
            } => {
                write!(
                    f,
                    "{}",
                    error_message(cformat!(
                        "Not found pull request for <bold>{revision}</> in <bold>{owner}/{name}</>"
                    ))
                )
            }

            Error::SelectionAborted => {
                write!(f, "{}", error_message("Selection aborted"))
            }

            Error::NothingToSelect { file } => {
                write!(
                    f,
                    "{}",
                    error_message(cformat!("No lines to select in <bold>{file}</>"))
                )
            }

            Error::PickerUnavailable => {
                write!(
                    f,
                    "{}\n{}",
                    error_message("Interactive picker is not available on this platform"),
                    hint_message(cformat!(
                        "Look up the commit with <bright-black>git blame</>, then run <bright-black>getpr <<commit>></>"
                    ))
                )
            }

            Error::BrowserOpenFailed { url, error } => {
                let header = error_message(cformat!("Cannot open <bold>{url}</> in the browser"));
                write!(f, "{}", format_error_block(header, error))
            }
        }
    }
}

/// Exit code for an error returned from a command.
///
/// Every failure is terminal and reported the same way, so both binaries
/// exit with status 1 on any error.
pub fn exit_code(_err: &anyhow::Error) -> i32 {
    1
}

/// Format an error header followed by the raw error text in a gutter.
fn format_error_block(header: impl Into<String>, error: &str) -> String {
    let header = header.into();
    let trimmed = error.trim();
    if trimmed.is_empty() {
        header
    } else {
        format!("{header}\n{}", format_with_gutter(trimmed))
    }
}
