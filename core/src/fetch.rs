//! The central **abstraction** for retrieving partials.
//!
//! The assembler only ever talks to [`FragmentFetcher`]; where the partial
//! text actually comes from (a directory on disk, an HTTP endpoint, a mock
//! in tests) is the implementation's business. This keeps the assembly
//! logic independent of transport and makes its failure policy testable
//! without touching the network.

use async_trait::async_trait;
use thiserror::Error;

mod fs;
mod http;

pub use fs::FsFetcher;
pub use http::HttpFetcher;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("failed to read partial '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("HTTP {status} fetching '{url}'")]
    Status { url: String, status: u16 },
    #[error("request for '{url}' failed: {source}")]
    Request {
        url: String,
        source: reqwest::Error,
    },
    #[error("partial path '{0}' escapes the partials root")]
    PathEscape(String),
}

/// Retrieves the text of one partial, addressed relative to the partials
/// root the fetcher was constructed with.
#[async_trait]
pub trait FragmentFetcher: Send + Sync {
    async fn fetch(&self, path: &str) -> Result<String, FetchError>;
}
