//! Commit to pull request resolution
//!
//! The two flows behind the binaries, with their collaborators passed in:
//!
//! - [`pull_request_url_for_line`]: blame a file, pick a line, read the pull
//!   request number from the commit message. Works offline.
//! - [`pull_request_for_commit`]: ask the GitHub API which pull request a
//!   commit belongs to.

use std::path::Path;

use crate::Error;
use crate::git::{Repository, RepositoryRef};
use crate::github::{GraphqlTransport, PrMatchers, PullRequestRef, find_pull_request};
use crate::picker::Selector;

/// Pull request URL for a line of `file` chosen through `selector`.
///
/// The URL is built from the web URL of `remote` and the number in the
/// subject of the commit that last touched the line.
pub fn pull_request_url_for_line(
    repo: &Repository,
    file: &Path,
    selector: &dyn Selector,
    matchers: &PrMatchers,
    remote: &str,
) -> anyhow::Result<String> {
    let records = repo.blame(file)?;
    if records.is_empty() {
        return Err(Error::NothingToSelect {
            file: file.display().to_string(),
        }
        .into());
    }

    let index = selector.select(&records)?;
    let record = records
        .get(index)
        .ok_or_else(|| anyhow::anyhow!("Selected line {index} is out of range"))?;

    let summary = repo.commit_summary(&record.revision_id)?;
    let number = matchers.pr_number(&summary)?;
    let web_url = repo.web_url(remote)?;
    Ok(pull_request_url(&web_url, &number))
}

/// `<repository web URL>/pull/<number>`
pub fn pull_request_url(web_url: &str, number: &str) -> String {
    format!("{web_url}/pull/{number}")
}

/// The repository to query: `OWNER/REPO` when given, else the one `remote`
/// of `repo` points at.
pub fn target_repository(
    repo: &Repository,
    slug: Option<&str>,
    remote: &str,
) -> Result<RepositoryRef, Error> {
    match slug {
        Some(slug) => RepositoryRef::from_slug(slug),
        None => repo.repository_ref(remote),
    }
}

/// The first pull request associated with `revision` in `target`.
pub fn pull_request_for_commit(
    transport: &dyn GraphqlTransport,
    target: &RepositoryRef,
    revision: &str,
) -> anyhow::Result<PullRequestRef> {
    log::debug!("Looking up pull request for {revision} in {target}");
    find_pull_request(transport, target, revision)
}
