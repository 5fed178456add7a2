//! # Placeholder Splicing
//!
//! Replaces the inner content of an element found by id, keeping the
//! wrapper element itself in place.

use thiserror::Error;

use crate::locate;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SpliceError {
    #[error("no element with id '{0}' in the document")]
    PlaceholderMissing(String),
}

/// Replaces the inner content of the element with the given id.
///
/// The surrounding bytes of the document, the element's own open and close
/// tags included, are carried over untouched.
pub fn replace_inner(html: &str, id: &str, content: &str) -> Result<String, SpliceError> {
    let span = locate::find_by_id(html, id)
        .ok_or_else(|| SpliceError::PlaceholderMissing(id.to_string()))?;

    let mut out = String::with_capacity(html.len() + content.len());
    out.push_str(&html[..span.inner_start]);
    out.push_str(content);
    out.push_str(&html[span.inner_end..]);
    Ok(out)
}
