//! GitHub GraphQL API access.
//!
//! One query is needed: the pull requests associated with a commit. The
//! transport is a trait so the lookup can run against canned responses.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use ureq::Agent;

use crate::Error;
use crate::git::RepositoryRef;

/// Production GraphQL endpoint.
pub const DEFAULT_API_URL: &str = "https://api.github.com/graphql";

const USER_AGENT: &str = concat!("getpr/", env!("CARGO_PKG_VERSION"));

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// First pull request associated with a commit.
pub const ASSOCIATED_PULL_REQUEST_QUERY: &str = "\
query($owner: String!, $name: String!, $expression: String!) {
  repository(owner: $owner, name: $name) {
    object(expression: $expression) {
      ... on Commit {
        associatedPullRequests(first: 1) {
          nodes {
            url
          }
        }
      }
    }
  }
}";

/// Body of a GraphQL POST.
#[derive(Debug, Clone, Serialize)]
pub struct GraphqlRequest {
    pub query: &'static str,
    pub variables: serde_json::Value,
}

/// Sends GraphQL requests and returns the decoded JSON body.
///
/// Implementations map transport failures to [`Error`]. A response with an
/// `errors` array is still `Ok`; interpreting it is up to the caller.
pub trait GraphqlTransport {
    fn execute(&self, request: &GraphqlRequest) -> anyhow::Result<serde_json::Value>;
}

/// Authenticated HTTPS transport.
pub struct HttpTransport {
    agent: Agent,
    endpoint: String,
    token: String,
}

impl HttpTransport {
    pub fn new(endpoint: impl Into<String>, token: impl Into<String>) -> Self {
        let agent: Agent = Agent::config_builder()
            .timeout_global(Some(REQUEST_TIMEOUT))
            .build()
            .into();
        Self {
            agent,
            endpoint: endpoint.into(),
            token: token.into(),
        }
    }
}

impl GraphqlTransport for HttpTransport {
    fn execute(&self, request: &GraphqlRequest) -> anyhow::Result<serde_json::Value> {
        log::debug!("POST {}", self.endpoint);
        let response = self
            .agent
            .post(&self.endpoint)
            .header("Authorization", format!("Bearer {}", self.token))
            .header("User-Agent", USER_AGENT)
            .header("Accept", "application/json")
            .send_json(request);

        let mut response = match response {
            Ok(response) => response,
            Err(ureq::Error::StatusCode(401)) => return Err(Error::Unauthorized.into()),
            Err(e) => {
                return Err(Error::ApiRequestFailed {
                    error: e.to_string(),
                }
                .into());
            }
        };

        log::debug!("  {}", response.status());
        let body = response
            .body_mut()
            .read_json::<serde_json::Value>()
            .map_err(|e| Error::ApiRequestFailed {
                error: format!("invalid response body: {e}"),
            })?;
        Ok(body)
    }
}

/// A pull request found for a commit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PullRequestRef {
    pub url: String,
}

#[derive(Debug, Deserialize)]
struct Response {
    data: Option<Data>,
    #[serde(default)]
    errors: Option<Vec<ResponseError>>,
}

#[derive(Debug, Deserialize)]
struct ResponseError {
    message: String,
}

#[derive(Debug, Deserialize)]
struct Data {
    repository: Option<Repository>,
}

#[derive(Debug, Deserialize)]
struct Repository {
    object: Option<Object>,
}

/// `object` is a union; non-commit objects decode with no pull requests.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Object {
    associated_pull_requests: Option<Connection>,
}

#[derive(Debug, Deserialize)]
struct Connection {
    #[serde(default)]
    nodes: Option<Vec<Option<PullRequestNode>>>,
}

#[derive(Debug, Deserialize)]
struct PullRequestNode {
    url: String,
}

/// Build the associated-pull-request query for a revision.
pub fn associated_pull_request_request(repo: &RepositoryRef, revision: &str) -> GraphqlRequest {
    GraphqlRequest {
        query: ASSOCIATED_PULL_REQUEST_QUERY,
        variables: serde_json::json!({
            "owner": repo.owner(),
            "name": repo.name(),
            "expression": revision,
        }),
    }
}

/// Look up the first pull request associated with `revision` in `repo`.
///
/// Fails with [`Error::ApiErrors`] when the response carries errors, and
/// with [`Error::PullRequestNotFound`] when the repository, the commit or
/// any associated pull request is missing.
pub fn find_pull_request(
    transport: &dyn GraphqlTransport,
    repo: &RepositoryRef,
    revision: &str,
) -> anyhow::Result<PullRequestRef> {
    let body = transport.execute(&associated_pull_request_request(repo, revision))?;
    let response: Response =
        serde_json::from_value(body).map_err(|e| Error::ApiRequestFailed {
            error: format!("unexpected response shape: {e}"),
        })?;

    let errors = response.errors.unwrap_or_default();
    if !errors.is_empty() {
        return Err(Error::ApiErrors {
            messages: errors.into_iter().map(|e| e.message).collect(),
        }
        .into());
    }

    response
        .data
        .and_then(|data| data.repository)
        .and_then(|repository| repository.object)
        .and_then(|object| object.associated_pull_requests)
        .and_then(|connection| connection.nodes)
        .and_then(|nodes| nodes.into_iter().flatten().next())
        .map(|node| PullRequestRef { url: node.url })
        .ok_or_else(|| {
            Error::PullRequestNotFound {
                owner: repo.owner().to_string(),
                name: repo.name().to_string(),
                revision: revision.to_string(),
            }
            .into()
        })
}
