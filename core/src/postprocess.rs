//! Transforms that depend on the fully assembled page. They run after the
//! fragment join, so they see content that arrived inside a fragment (the
//! footer's year span) as well as content authored on the page itself.

use chrono::{Datelike, Local};
use sitefuse_html::splice;

/// Element whose text content is replaced by the current year.
pub const YEAR_ELEMENT_ID: &str = "copyright-year";

/// Writes the current year into `#copyright-year`. Pages without that
/// element pass through untouched.
pub fn inject_year(page: &str) -> String {
    inject_year_value(page, Local::now().year())
}

fn inject_year_value(page: &str, year: i32) -> String {
    match splice::replace_inner(page, YEAR_ELEMENT_ID, &year.to_string()) {
        Ok(updated) => updated,
        Err(_) => page.to_string(),
    }
}
