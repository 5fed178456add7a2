//! HTTP fetcher for assembling against a remote partials root, e.g. a
//! staging server that already hosts the shared partials.

use async_trait::async_trait;
use reqwest::Client;

use super::{FetchError, FragmentFetcher};

pub struct HttpFetcher {
    client: Client,
    base: String,
}

impl HttpFetcher {
    /// `base` is the URL the partial paths are resolved against,
    /// e.g. `https://staging.example.com/site`.
    pub fn new(base: impl Into<String>) -> Self {
        let base = base.into().trim_end_matches('/').to_string();
        Self {
            client: Client::new(),
            base,
        }
    }
}

#[async_trait]
impl FragmentFetcher for HttpFetcher {
    async fn fetch(&self, path: &str) -> Result<String, FetchError> {
        let url = format!("{}/{}", self.base, path.trim_start_matches('/'));

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|source| FetchError::Request {
                url: url.clone(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url,
                status: status.as_u16(),
            });
        }

        response.text().await.map_err(|source| FetchError::Request {
            url: url.clone(),
            source,
        })
    }
}
