//! # Script Relocation
//!
//! Partials may carry `<script>` elements. Left inside the spliced markup
//! they would sit wherever the placeholder happens to be; hoisting them to
//! the end of `<body>` keeps one well-defined execution point and guarantees
//! each script appears in the emitted page exactly once.
//!
//! Scripts are moved verbatim, inline text and `src` attribute included.

use std::sync::LazyLock;

use regex::Regex;

static SCRIPT_ELEMENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<script\b[^>]*>.*?</script\s*>").expect("script element pattern")
});

static BODY_CLOSE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)</body\s*>").expect("body close pattern"));

/// Splits a fragment into its markup without scripts and the scripts
/// themselves, in source order.
pub fn extract(fragment: &str) -> (String, Vec<String>) {
    let scripts: Vec<String> = SCRIPT_ELEMENT
        .find_iter(fragment)
        .map(|m| m.as_str().to_string())
        .collect();

    if scripts.is_empty() {
        return (fragment.to_string(), scripts);
    }

    let stripped = SCRIPT_ELEMENT.replace_all(fragment, "").into_owned();
    (stripped, scripts)
}

/// Appends `scripts` immediately before the document's `</body>`, or at the
/// end of the document when no body close tag exists.
pub fn append_before_body_close(page: &str, scripts: &[String]) -> String {
    if scripts.is_empty() {
        return page.to_string();
    }

    let block = scripts.join("\n");

    match BODY_CLOSE.find_iter(page).last() {
        Some(close) => {
            let mut out = String::with_capacity(page.len() + block.len() + 1);
            out.push_str(&page[..close.start()]);
            out.push_str(&block);
            out.push('\n');
            out.push_str(&page[close.start()..]);
            out
        }
        None => {
            let mut out = page.to_string();
            out.push('\n');
            out.push_str(&block);
            out
        }
    }
}
