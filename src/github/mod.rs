//! GitHub: pull request numbers in commit messages, tokens, and the GraphQL API

mod graphql;
mod pr_number;
mod token;

pub use graphql::{
    ASSOCIATED_PULL_REQUEST_QUERY, DEFAULT_API_URL, GraphqlRequest, GraphqlTransport,
    HttpTransport, PullRequestRef, associated_pull_request_request, find_pull_request,
};
pub use pr_number::{
    MERGE_PATTERN, PrMatchers, PrNumberMatcher, RegexMatcher, SQUASH_PATTERN,
};
pub use token::{TOKEN_ENV, TOKEN_FILE, resolve_token, resolve_token_from};
