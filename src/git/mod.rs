//! Git operations: running git, parsing its output, and parsing remote URLs

mod parse;
mod repository;
mod url;


pub use parse::{AttributionRecord, parse_blame};
pub use repository::Repository;
pub use url::{RepositoryRef, remote_to_web_url};
