//! # Fragment Map Model
//!
//! Defines which placeholder elements a page may carry and which shared
//! partial each one is filled from.
//!
//! A spec can come from two places:
//! * The built-in map (navigation bars and footer, matching the partials
//!   shipped under `partials/`).
//! * A `--fragment id=path` override on the command line.

use std::fmt;
use std::str::FromStr;

/// Token prepended to site-relative references on nested pages.
pub const PARENT_TOKEN: &str = "../";

/// Directory holding the shared partials, relative to the site root.
pub const PARTIALS_DIR: &str = "partials";

/// One placeholder/partial pairing.
///
/// The placeholder id identifies an element in the page; the partial path is
/// resolved against the partials root by whichever fetcher is in use.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FragmentSpec {
    pub placeholder_id: String,
    pub partial_path: String,
}

impl FragmentSpec {
    pub fn new(placeholder_id: impl Into<String>, partial_path: impl Into<String>) -> Self {
        Self {
            placeholder_id: placeholder_id.into(),
            partial_path: partial_path.into(),
        }
    }
}

impl fmt::Display for FragmentSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{} <- {}", self.placeholder_id, self.partial_path)
    }
}

impl FromStr for FragmentSpec {
    type Err = String;

    /// Parses an `id=path` pair, e.g. `footer-placeholder=partials/footer.html`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let Some((id, path)) = s.split_once('=') else {
            return Err(format!("invalid fragment spec '{s}': expected 'id=path'"));
        };

        let id = id.trim();
        let path = path.trim();

        validate_id(id, s)?;
        validate_path(path, s)?;

        Ok(Self::new(id, path))
    }
}

/// The map every page is checked against unless overridden.
pub fn default_fragments() -> Vec<FragmentSpec> {
    vec![
        FragmentSpec::new("main-nav-placeholder", "partials/nav.html"),
        FragmentSpec::new("project-nav-placeholder", "partials/nav-project.html"),
        FragmentSpec::new("footer-placeholder", "partials/footer.html"),
    ]
}

fn validate_id(id: &str, original: &str) -> Result<(), String> {
    if id.is_empty() {
        return Err(format!("empty placeholder id in fragment spec '{original}'"));
    }
    if id.chars().any(|c| c.is_whitespace() || c == '"' || c == '\'' || c == '<' || c == '>') {
        return Err(format!("placeholder id '{id}' contains markup characters"));
    }
    Ok(())
}

fn validate_path(path: &str, original: &str) -> Result<(), String> {
    if path.is_empty() {
        return Err(format!("empty partial path in fragment spec '{original}'"));
    }
    Ok(())
}

/// How fragment-internal references are adjusted for the page being built.
///
/// Always an explicit input: single pages take it from a `--depth` flag,
/// site builds derive it from the page's directory depth below the site
/// root. Nothing inspects URLs to guess it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RewriteMode {
    /// The page sits at the site root; fragment markup is spliced verbatim.
    None,
    /// The page sits `depth` directories below the site root; site-relative
    /// anchor and image references get `../` per level prepended.
    PrefixParent { depth: usize },
}

impl RewriteMode {
    pub fn from_depth(depth: usize) -> Self {
        match depth {
            0 => Self::None,
            n => Self::PrefixParent { depth: n },
        }
    }

    /// The generated prefix, e.g. `../../` at depth 2. Empty for [`Self::None`].
    pub fn prefix(&self) -> String {
        match self {
            Self::None => String::new(),
            Self::PrefixParent { depth } => PARENT_TOKEN.repeat(*depth),
        }
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fragment_spec_parsing() {
        // Plain pair
        assert_eq!(
            FragmentSpec::from_str("footer-placeholder=partials/footer.html"),
            Ok(FragmentSpec::new(
                "footer-placeholder",
                "partials/footer.html"
            ))
        );

        // Whitespace around the separator is tolerated
        assert_eq!(
            FragmentSpec::from_str(" sidebar = partials/sidebar.html "),
            Ok(FragmentSpec::new("sidebar", "partials/sidebar.html"))
        );

        // --- Error Cases ---

        // No separator
        assert!(FragmentSpec::from_str("footer-placeholder").is_err());

        // Empty id
        assert!(FragmentSpec::from_str("=partials/footer.html").is_err());

        // Empty path
        assert!(FragmentSpec::from_str("footer-placeholder=").is_err());

        // Markup characters in the id
        assert!(FragmentSpec::from_str("foo\"bar=partials/x.html").is_err());
        assert!(FragmentSpec::from_str("foo bar=partials/x.html").is_err());
    }

    #[test]
    fn test_default_fragments_cover_both_navs_and_footer() {
        let defaults = default_fragments();
        assert_eq!(defaults.len(), 3);

        let ids: Vec<&str> = defaults
            .iter()
            .map(|spec| spec.placeholder_id.as_str())
            .collect();
        assert!(ids.contains(&"main-nav-placeholder"));
        assert!(ids.contains(&"project-nav-placeholder"));
        assert!(ids.contains(&"footer-placeholder"));

        for spec in &defaults {
            assert!(spec.partial_path.starts_with(PARTIALS_DIR));
        }
    }

    #[test]
    fn test_rewrite_mode_prefix() {
        assert_eq!(RewriteMode::from_depth(0), RewriteMode::None);
        assert_eq!(RewriteMode::from_depth(0).prefix(), "");

        assert_eq!(
            RewriteMode::from_depth(1),
            RewriteMode::PrefixParent { depth: 1 }
        );
        assert_eq!(RewriteMode::from_depth(1).prefix(), "../");
        assert_eq!(RewriteMode::from_depth(3).prefix(), "../../../");
    }
}
