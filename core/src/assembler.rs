//! # Page Assembly Service
//!
//! Implements the core "fill the placeholders" use case.
//!
//! For one page, the service locates the configured placeholder elements,
//! fetches every matching partial concurrently, splices the results in, and
//! hoists fragment-carried scripts to the end of the body. A partial that
//! cannot be fetched is logged and its placeholder stays empty; nothing
//! short-circuits the rest of the page.

use futures::future;
use sitefuse_common::config::Config;
use sitefuse_common::fragment::{FragmentSpec, RewriteMode};
use sitefuse_html::{locate, rewrite, scripts, splice};
use tracing::{debug, error};

use crate::fetch::FragmentFetcher;
use crate::postprocess;

/// Per-page outcome counts, aggregated across a site build for the final
/// summary.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AssemblyReport {
    /// Fragments fetched and spliced.
    pub applied: usize,
    /// Placeholders absent from the page; no fetch was performed.
    pub skipped: usize,
    /// Fetches that failed; the placeholder was left empty.
    pub failed: usize,
    /// Script elements relocated out of fragments.
    pub scripts_moved: usize,
}

impl AssemblyReport {
    pub fn absorb(&mut self, other: AssemblyReport) {
        self.applied += other.applied;
        self.skipped += other.skipped;
        self.failed += other.failed;
        self.scripts_moved += other.scripts_moved;
    }
}

/// Application service for page assembly.
///
/// Holds the fetcher and the fragment map; the rewrite mode varies per page
/// and is passed per call.
pub struct AssemblyService {
    fetcher: Box<dyn FragmentFetcher>,
    fragments: Vec<FragmentSpec>,
}

impl AssemblyService {
    pub fn new(fetcher: Box<dyn FragmentFetcher>, fragments: Vec<FragmentSpec>) -> Self {
        Self { fetcher, fragments }
    }

    /// Assembles one page.
    ///
    /// All fetches are dispatched before any is awaited and joined as a
    /// group; there is no ordering guarantee between fragments. Transforms
    /// that depend on the finished page (the year injection) run only after
    /// every fragment has settled, successfully or not.
    ///
    /// Never fails: fetch and splice problems are logged, counted in the
    /// report, and leave the affected placeholder empty.
    pub async fn assemble(
        &self,
        page_html: &str,
        mode: RewriteMode,
        cfg: &Config,
    ) -> (String, AssemblyReport) {
        let mut report = AssemblyReport::default();

        // Placeholders absent from this page never trigger a fetch.
        let mut present: Vec<(&FragmentSpec, usize)> = Vec::new();
        for spec in &self.fragments {
            match locate::find_by_id(page_html, &spec.placeholder_id) {
                Some(span) => present.push((spec, span.open_start)),
                None => {
                    debug!("no '#{}' on this page, skipping", spec.placeholder_id);
                    report.skipped += 1;
                }
            }
        }

        let fetches = present
            .iter()
            .map(|(spec, _)| self.fetcher.fetch(&spec.partial_path));
        let results = future::join_all(fetches).await;

        let mut page = page_html.to_string();
        // (placeholder position, scripts) so relocation follows document
        // order rather than fetch completion order.
        let mut hoisted: Vec<(usize, Vec<String>)> = Vec::new();

        for ((spec, position), result) in present.iter().zip(results) {
            match result {
                Ok(text) => {
                    let body = match mode {
                        RewriteMode::None => text,
                        RewriteMode::PrefixParent { .. } => {
                            rewrite::prefix_parent_refs(&text, &mode.prefix())
                        }
                    };
                    let (body, fragment_scripts) = scripts::extract(&body);

                    match splice::replace_inner(&page, &spec.placeholder_id, &body) {
                        Ok(updated) => {
                            page = updated;
                            report.applied += 1;
                            report.scripts_moved += fragment_scripts.len();
                            hoisted.push((*position, fragment_scripts));
                        }
                        Err(e) => {
                            error!("failed to splice '{}': {e}", spec.partial_path);
                            report.failed += 1;
                        }
                    }
                }
                Err(e) => {
                    error!("failed to load partial '{}': {e}", spec.partial_path);
                    report.failed += 1;
                }
            }
        }

        hoisted.sort_by_key(|(position, _)| *position);
        let relocated: Vec<String> = hoisted.into_iter().flat_map(|(_, s)| s).collect();
        let mut page = scripts::append_before_body_close(&page, &relocated);

        if !cfg.no_year {
            page = postprocess::inject_year(&page);
        }

        (page, report)
    }
}
