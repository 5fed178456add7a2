use colored::*;
use sitefuse_common::fragment::{FragmentSpec, PARTIALS_DIR};

use crate::commands::resolve_fragments;

pub fn info(overrides: &[FragmentSpec]) -> anyhow::Result<()> {
    println!(
        "{} {}",
        "Version:".bold(),
        env!("CARGO_PKG_VERSION").green()
    );
    println!("{} {}", "Partials dir:".bold(), PARTIALS_DIR.cyan());

    let fragments = resolve_fragments(overrides);
    let origin = if overrides.is_empty() {
        "built-in"
    } else {
        "overridden"
    };
    println!("{} ({origin})", "Fragment map:".bold());
    for spec in &fragments {
        println!(
            "  {} {} {}",
            format!("#{}", spec.placeholder_id).cyan(),
            "<-".bright_black(),
            spec.partial_path.normal()
        );
    }

    Ok(())
}
