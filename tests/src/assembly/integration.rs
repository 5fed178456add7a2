#![cfg(test)]
use std::fs;
use std::sync::atomic::Ordering;
use std::time::Duration;

use sitefuse_common::config::Config;
use sitefuse_common::fragment::{FragmentSpec, RewriteMode, default_fragments};
use sitefuse_core::assembler::AssemblyService;
use sitefuse_core::fetch::FsFetcher;
use tempfile::TempDir;

use super::fetchers::{BarrierFetcher, CountingFetcher};

fn cfg() -> Config {
    Config {
        quiet: 0,
        no_banner: true,
        no_year: false,
    }
}

/// Lays out a minimal copy of the real site: two nav partials, a footer
/// carrying a year span and a script, and two pages at different depths.
fn scaffold_site() -> TempDir {
    let dir = tempfile::tempdir().expect("tempdir");
    let root = dir.path();

    fs::create_dir_all(root.join("partials")).unwrap();
    fs::create_dir_all(root.join("projects")).unwrap();

    fs::write(
        root.join("partials/nav.html"),
        concat!(
            r#"<nav id="main-nav"><a href="index.html">home</a>"#,
            r##"<a href="#contact">contact</a>"##,
            r#"<a href="https://example.com">ext</a>"#,
            r#"<img src="images/logo.svg"></nav>"#
        ),
    )
    .unwrap();

    fs::write(
        root.join("partials/nav-project.html"),
        r#"<nav id="project-nav"><a href="projects/one.html">one</a></nav>"#,
    )
    .unwrap();

    fs::write(
        root.join("partials/footer.html"),
        concat!(
            r#"<footer>© <span id="copyright-year"></span></footer>"#,
            r#"<script>initConsentBanner()</script>"#
        ),
    )
    .unwrap();

    fs::write(
        root.join("index.html"),
        concat!(
            "<html><body>",
            r#"<div id="main-nav-placeholder"></div>"#,
            "<main>home</main>",
            r#"<div id="footer-placeholder"></div>"#,
            "</body></html>"
        ),
    )
    .unwrap();

    fs::write(
        root.join("projects/one.html"),
        concat!(
            "<html><body>",
            r#"<div id="main-nav-placeholder"></div>"#,
            r#"<div id="project-nav-placeholder"></div>"#,
            "<main>project</main>",
            r#"<div id="footer-placeholder"></div>"#,
            "</body></html>"
        ),
    )
    .unwrap();

    dir
}

fn site_service(site: &TempDir) -> AssemblyService {
    AssemblyService::new(
        Box::new(FsFetcher::new(site.path())),
        default_fragments(),
    )
}

#[tokio::test]
async fn root_page_end_to_end() {
    let site = scaffold_site();
    let service = site_service(&site);
    let source = fs::read_to_string(site.path().join("index.html")).unwrap();

    let (html, report) = service.assemble(&source, RewriteMode::None, &cfg()).await;

    // Both placeholders present on the page got filled; the project nav
    // placeholder is absent and was skipped without a fetch.
    assert_eq!(report.applied, 2, "report: {report:?}");
    assert_eq!(report.skipped, 1);
    assert_eq!(report.failed, 0);

    // Root page: fragment references stay exactly as authored.
    assert!(html.contains(r#"<a href="index.html">home</a>"#));
    assert!(html.contains(r#"<img src="images/logo.svg">"#));

    // The footer script was hoisted before </body> and nowhere else.
    assert_eq!(html.matches("initConsentBanner()").count(), 1);
    assert!(html.contains("<script>initConsentBanner()</script>\n</body>"));

    // The year span arrived inside the footer fragment and was still filled.
    assert!(!html.contains(r#"<span id="copyright-year"></span>"#));
}

#[tokio::test]
async fn nested_page_rewrites_only_site_relative_references() {
    let site = scaffold_site();
    let service = site_service(&site);
    let source = fs::read_to_string(site.path().join("projects/one.html")).unwrap();

    let (html, report) = service
        .assemble(&source, RewriteMode::from_depth(1), &cfg())
        .await;

    assert_eq!(report.applied, 3);
    assert_eq!(report.failed, 0);

    assert!(html.contains(r#"<a href="../index.html">home</a>"#));
    assert!(html.contains(r#"<img src="../images/logo.svg">"#));
    assert!(html.contains(r#"<a href="../projects/one.html">one</a>"#));

    // Exemptions hold on the assembled page.
    assert!(html.contains(r##"<a href="#contact">contact</a>"##));
    assert!(html.contains(r#"<a href="https://example.com">ext</a>"#));
}

#[tokio::test]
async fn missing_partial_degrades_the_page_not_the_build() {
    let site = scaffold_site();
    fs::remove_file(site.path().join("partials/nav.html")).unwrap();

    let service = site_service(&site);
    let source = fs::read_to_string(site.path().join("index.html")).unwrap();

    let (html, report) = service.assemble(&source, RewriteMode::None, &cfg()).await;

    assert_eq!(report.failed, 1);
    assert_eq!(report.applied, 1);

    // The nav placeholder stayed empty; the footer still went in and the
    // dependent year transform still ran.
    assert!(html.contains(r#"<div id="main-nav-placeholder"></div>"#));
    assert!(html.contains("<footer>"));
    assert!(!html.contains(r#"<span id="copyright-year"></span>"#));
}

#[tokio::test]
async fn fetches_for_one_page_run_concurrently() {
    let fragments = vec![
        FragmentSpec::new("a-placeholder", "partials/a.html"),
        FragmentSpec::new("b-placeholder", "partials/b.html"),
        FragmentSpec::new("c-placeholder", "partials/c.html"),
    ];
    let service = AssemblyService::new(Box::new(BarrierFetcher::new(3)), fragments);

    let page = concat!(
        "<body>",
        r#"<div id="a-placeholder"></div>"#,
        r#"<div id="b-placeholder"></div>"#,
        r#"<div id="c-placeholder"></div>"#,
        "</body>"
    );

    // The barrier only releases once all three fetches are in flight, so a
    // sequential loader would hang here.
    let result = tokio::time::timeout(
        Duration::from_secs(5),
        service.assemble(page, RewriteMode::None, &cfg()),
    )
    .await;

    let (_, report) = result.expect("fetches were not dispatched in parallel");
    assert_eq!(report.applied, 3);
}

#[tokio::test]
async fn absent_placeholders_never_hit_the_fetcher() {
    let fetcher = CountingFetcher::new();
    let calls = fetcher.calls.clone();
    let service = AssemblyService::new(Box::new(fetcher), default_fragments());

    let page = "<body><main>bare page</main></body>";
    let (html, report) = service.assemble(page, RewriteMode::None, &cfg()).await;

    assert_eq!(calls.load(Ordering::SeqCst), 0);
    assert_eq!(report.skipped, 3);
    assert_eq!(html, page);
}
