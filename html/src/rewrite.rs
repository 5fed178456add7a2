//! # Reference Rewriting
//!
//! Adjusts site-relative references inside a fragment so they still resolve
//! from pages nested below the site root. Shared partials are authored
//! root-relative (`images/logo.png`, `about.html`); a page one directory
//! down needs those turned into `../images/logo.png` and `../about.html`.
//!
//! Only anchor `href` and image `src` attributes are touched. Anything that
//! is not a site-relative reference passes through untouched:
//!
//! * absolute URLs (`http`-prefixed, covering both schemes)
//! * protocol-relative URLs (`//cdn…`)
//! * in-page anchors (`#section`)
//! * `mailto:` and `data:` URIs
//! * references already carrying the parent token (no double-prefixing)

use std::sync::LazyLock;

use regex::{Captures, Regex};
use sitefuse_common::fragment::PARENT_TOKEN;

const EXEMPT_PREFIXES: &[&str] = &["http", "//", "#", "mailto:", "data:", PARENT_TOKEN];

static ANCHOR_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<a\b[^>]*>").expect("anchor tag pattern"));

static IMG_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<img\b[^>]*>").expect("img tag pattern"));

static HREF_ATTR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)\b(href)(\s*=\s*)("[^"]*"|'[^']*')"#).expect("href attr pattern")
});

static SRC_ATTR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)\b(src)(\s*=\s*)("[^"]*"|'[^']*')"#).expect("src attr pattern")
});

/// Prepends `prefix` to every site-relative anchor `href` and image `src`
/// in `fragment`. The prefix comes from the page's rewrite mode; callers
/// skip this pass entirely for root-level pages.
pub fn prefix_parent_refs(fragment: &str, prefix: &str) -> String {
    let pass = rewrite_tags(fragment, &ANCHOR_TAG, &HREF_ATTR, prefix);
    rewrite_tags(&pass, &IMG_TAG, &SRC_ATTR, prefix)
}

fn rewrite_tags(html: &str, tag: &Regex, attr: &Regex, prefix: &str) -> String {
    tag.replace_all(html, |tag_caps: &Captures| {
        attr.replace_all(&tag_caps[0], |attr_caps: &Captures| {
            let quoted = &attr_caps[3];
            let quote = &quoted[..1];
            let value = &quoted[1..quoted.len() - 1];

            format!(
                "{}{}{}{}{}",
                &attr_caps[1],
                &attr_caps[2],
                quote,
                rewrite_ref(value, prefix),
                quote
            )
        })
        .into_owned()
    })
    .into_owned()
}

fn rewrite_ref(value: &str, prefix: &str) -> String {
    if value.is_empty() || EXEMPT_PREFIXES.iter().any(|p| value.starts_with(p)) {
        return value.to_string();
    }
    format!("{prefix}{value}")
}
