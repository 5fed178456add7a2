//! # Element Location
//!
//! Finds an element by `id` attribute and computes the byte span of its
//! inner content, tracking nested same-name tags so a `<div>` placeholder
//! inside other `<div>`s closes where it should.

use std::sync::LazyLock;

use regex::Regex;

static COMMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<!--.*?-->").expect("comment pattern"));

/// Byte offsets of one located element within a document.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ElementSpan {
    /// Lowercased tag name, e.g. `div`.
    pub tag: String,
    /// Offset of the `<` opening the element.
    pub open_start: usize,
    /// First byte of the inner content (just past the open tag's `>`).
    pub inner_start: usize,
    /// One past the last byte of the inner content (the `<` of the close tag).
    pub inner_end: usize,
}

/// Locates the first element carrying `id="<id>"` (either quote style).
///
/// Returns `None` when no such element exists or its close tag is missing.
/// Matching is case-insensitive on tag and attribute names, literal on the
/// id value itself.
pub fn find_by_id(html: &str, id: &str) -> Option<ElementSpan> {
    let open = open_tag_pattern(id).ok()?;
    let caps = open.captures(html)?;

    let whole = caps.get(0)?;
    let tag = caps.get(1)?.as_str().to_ascii_lowercase();

    let open_start = whole.start();
    let inner_start = whole.end();
    let inner_end = find_close(html, &tag, inner_start)?;

    Some(ElementSpan {
        tag,
        open_start,
        inner_start,
        inner_end,
    })
}

fn open_tag_pattern(id: &str) -> Result<Regex, regex::Error> {
    // [^>]* keeps this a single-tag match; attribute values containing a
    // literal '>' are not supported.
    Regex::new(&format!(
        r#"(?i)<([a-z][a-z0-9-]*)\b[^>]*\bid\s*=\s*["']{}["'][^>]*>"#,
        regex::escape(id)
    ))
}

/// Scans forward from `from` for the close tag matching `tag`, skipping
/// balanced nested occurrences of the same tag. Self-closing tags and tags
/// inside comments don't open a level.
fn find_close(html: &str, tag: &str, from: usize) -> Option<usize> {
    let scanner = Regex::new(&format!(r"(?i)<(/?)({})\b", regex::escape(tag))).ok()?;

    let rest = &html[from..];
    let comments: Vec<(usize, usize)> = COMMENT
        .find_iter(rest)
        .map(|m| (m.start(), m.end()))
        .collect();

    let mut depth: usize = 1;
    for caps in scanner.captures_iter(rest) {
        let whole = caps.get(0)?;
        if comments
            .iter()
            .any(|&(start, end)| start <= whole.start() && whole.start() < end)
        {
            continue;
        }
        let closing = !caps.get(1)?.as_str().is_empty();

        if closing {
            depth -= 1;
            if depth == 0 {
                return Some(from + whole.start());
            }
        } else if !is_self_closing(rest, whole.end()) {
            depth += 1;
        }
    }
    None
}

/// A tag whose attribute list ends in `/` closes itself and never gets a
/// matching close tag.
fn is_self_closing(rest: &str, after_name: usize) -> bool {
    match rest[after_name..].find('>') {
        Some(gt) => rest[after_name..after_name + gt].trim_end().ends_with('/'),
        None => false,
    }
}
