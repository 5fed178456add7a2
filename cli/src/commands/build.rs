use std::fs;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use anyhow::{Context, bail};
use colored::*;
use sitefuse_common::config::Config;
use sitefuse_common::fragment::{FragmentSpec, PARTIALS_DIR, RewriteMode};
use sitefuse_common::{info, success, warn};
use sitefuse_core::assembler::{AssemblyReport, AssemblyService};
use sitefuse_core::fetch::FsFetcher;

use crate::commands::resolve_fragments;
use crate::terminal::{print, spinner};

pub async fn build(
    site: &Path,
    out: &Path,
    overrides: &[FragmentSpec],
    cfg: &Config,
) -> anyhow::Result<()> {
    let site = site
        .canonicalize()
        .with_context(|| format!("site directory '{}' not accessible", site.display()))?;

    fs::create_dir_all(out)
        .with_context(|| format!("cannot create output directory '{}'", out.display()))?;
    let out = out.canonicalize()?;

    if out.starts_with(&site) {
        bail!("output directory must live outside the site tree");
    }

    let service = AssemblyService::new(
        Box::new(FsFetcher::new(site.clone())),
        resolve_fragments(overrides),
    );

    let (pages, assets) = collect_entries(&site)?;
    if pages.is_empty() {
        warn!("no .html pages under '{}'", site.display());
        return Ok(());
    }
    info!(
        "{} pages and {} assets found under '{}'",
        pages.len(),
        assets.len(),
        site.display()
    );

    let progress = (cfg.quiet == 0).then(|| spinner::start("Assembling pages..."));

    let start_time: Instant = Instant::now();
    let mut total = AssemblyReport::default();

    for rel in &pages {
        if let Some(pb) = &progress {
            pb.set_message(rel.display().to_string());
        }

        let source = fs::read_to_string(site.join(rel))
            .with_context(|| format!("reading page '{}'", rel.display()))?;

        let mode = RewriteMode::from_depth(page_depth(rel));
        let (html, report) = service.assemble(&source, mode, cfg).await;
        total.absorb(report);

        write_output(&out, rel, html.as_bytes())?;
    }

    for rel in &assets {
        let data = fs::read(site.join(rel))
            .with_context(|| format!("reading asset '{}'", rel.display()))?;
        write_output(&out, rel, &data)?;
    }

    if let Some(pb) = progress {
        pb.finish_and_clear();
    }

    print_summary(pages.len(), &total, start_time.elapsed(), cfg);
    Ok(())
}

/// Directory depth of a page below the site root; drives the rewrite mode.
fn page_depth(rel: &Path) -> usize {
    rel.parent().map_or(0, |p| p.components().count())
}

/// Walks the site tree once, splitting pages to assemble from assets to
/// copy through. The partials directory feeds the assembler and is not
/// emitted itself.
fn collect_entries(root: &Path) -> anyhow::Result<(Vec<PathBuf>, Vec<PathBuf>)> {
    let mut pages = Vec::new();
    let mut assets = Vec::new();
    walk(root, root, &mut pages, &mut assets)?;
    pages.sort();
    assets.sort();
    Ok((pages, assets))
}

fn walk(
    root: &Path,
    dir: &Path,
    pages: &mut Vec<PathBuf>,
    assets: &mut Vec<PathBuf>,
) -> anyhow::Result<()> {
    for entry in
        fs::read_dir(dir).with_context(|| format!("reading directory '{}'", dir.display()))?
    {
        let path = entry?.path();
        let rel = path.strip_prefix(root)?.to_path_buf();

        if path.is_dir() {
            if rel == Path::new(PARTIALS_DIR) {
                continue;
            }
            walk(root, &path, pages, assets)?;
        } else if is_html(&path) {
            pages.push(rel);
        } else {
            assets.push(rel);
        }
    }
    Ok(())
}

fn is_html(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("html"))
}

fn write_output(out: &Path, rel: &Path, data: &[u8]) -> anyhow::Result<()> {
    let target = out.join(rel);
    if let Some(parent) = target.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("cannot create '{}'", parent.display()))?;
    }
    fs::write(&target, data).with_context(|| format!("writing '{}'", target.display()))
}

fn print_summary(page_count: usize, report: &AssemblyReport, total_time: Duration, cfg: &Config) {
    let pages: ColoredString = format!("{page_count} pages").bold().green();
    let elapsed: ColoredString = format!("{:.2}s", total_time.as_secs_f64()).bold().yellow();
    let output: ColoredString = format!(
        "Build Complete: {pages} assembled in {elapsed} ({} fragments spliced, {} scripts moved)",
        report.applied, report.scripts_moved
    )
    .normal();

    match cfg.quiet {
        0 => {
            print::fat_separator(cfg.quiet);
            print::centerln(&output);
        }
        _ => {
            success!("{}", output);
        }
    }

    if report.failed > 0 {
        warn!(
            "{} fragment(s) failed to load; their placeholders were left empty",
            report.failed
        );
    }
}
