use std::fs;
use std::io::Write;
use std::path::Path;

use anyhow::Context;
use sitefuse_common::config::Config;
use sitefuse_common::fragment::{FragmentSpec, RewriteMode};
use sitefuse_common::{success, warn};
use sitefuse_core::assembler::AssemblyService;
use sitefuse_core::fetch::{FragmentFetcher, FsFetcher, HttpFetcher};

use crate::commands::resolve_fragments;

pub async fn page(
    file: &Path,
    depth: usize,
    partials_root: Option<&str>,
    output: Option<&Path>,
    overrides: &[FragmentSpec],
    cfg: &Config,
) -> anyhow::Result<()> {
    let source =
        fs::read_to_string(file).with_context(|| format!("reading page '{}'", file.display()))?;

    let service = AssemblyService::new(select_fetcher(partials_root), resolve_fragments(overrides));

    let (html, report) = service
        .assemble(&source, RewriteMode::from_depth(depth), cfg)
        .await;

    match output {
        Some(path) => {
            fs::write(path, &html)
                .with_context(|| format!("writing '{}'", path.display()))?;
            success!(
                "wrote '{}' ({} fragments spliced, {} skipped)",
                path.display(),
                report.applied,
                report.skipped
            );
        }
        None => {
            std::io::stdout().write_all(html.as_bytes())?;
        }
    }

    if report.failed > 0 {
        warn!(
            "{} fragment(s) failed to load; their placeholders were left empty",
            report.failed
        );
    }

    Ok(())
}

/// An `http(s)://` partials root selects the network fetcher; anything else
/// is treated as a directory. Defaults to the current directory.
fn select_fetcher(partials_root: Option<&str>) -> Box<dyn FragmentFetcher> {
    match partials_root {
        Some(root) if root.starts_with("http://") || root.starts_with("https://") => {
            Box::new(HttpFetcher::new(root))
        }
        Some(root) => Box::new(FsFetcher::new(root)),
        None => Box::new(FsFetcher::new(".")),
    }
}
