//! Filesystem fetcher used by site builds: partials live in the site tree
//! itself, addressed relative to the site root.

use std::path::{Component, Path, PathBuf};

use async_trait::async_trait;

use super::{FetchError, FragmentFetcher};

pub struct FsFetcher {
    root: PathBuf,
}

impl FsFetcher {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Rejects absolute paths and anything with a `..` component. Partial
    /// paths come from the fragment map and must stay inside the root.
    fn resolve(&self, path: &str) -> Result<PathBuf, FetchError> {
        let rel = Path::new(path);

        let escapes = rel.components().any(|c| {
            matches!(
                c,
                Component::ParentDir | Component::RootDir | Component::Prefix(_)
            )
        });
        if escapes {
            return Err(FetchError::PathEscape(path.to_string()));
        }

        Ok(self.root.join(rel))
    }
}

#[async_trait]
impl FragmentFetcher for FsFetcher {
    async fn fetch(&self, path: &str) -> Result<String, FetchError> {
        let full = self.resolve(path)?;

        tokio::fs::read_to_string(&full)
            .await
            .map_err(|source| FetchError::Io {
                path: full.display().to_string(),
                source,
            })
    }
}
