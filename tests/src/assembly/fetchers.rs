#![cfg(test)]
//! Mock fetchers for exercising the assembler's concurrency and failure
//! policy without a filesystem or network.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use sitefuse_core::fetch::{FetchError, FragmentFetcher};
use tokio::sync::Barrier;

/// Completes a fetch only once `parties` fetches are in flight at the same
/// time. A sequential loader deadlocks against it.
pub struct BarrierFetcher {
    barrier: Barrier,
}

impl BarrierFetcher {
    pub fn new(parties: usize) -> Self {
        Self {
            barrier: Barrier::new(parties),
        }
    }
}

#[async_trait]
impl FragmentFetcher for BarrierFetcher {
    async fn fetch(&self, path: &str) -> Result<String, FetchError> {
        self.barrier.wait().await;
        Ok(format!("<p data-partial=\"{path}\"></p>"))
    }
}

/// Counts fetches and serves a trivial fragment.
pub struct CountingFetcher {
    pub calls: Arc<AtomicUsize>,
}

impl CountingFetcher {
    pub fn new() -> Self {
        Self {
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }
}

#[async_trait]
impl FragmentFetcher for CountingFetcher {
    async fn fetch(&self, _path: &str) -> Result<String, FetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok("<p></p>".to_string())
    }
}
