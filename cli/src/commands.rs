pub mod build;
pub mod info;
pub mod page;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use sitefuse_common::fragment::{self, FragmentSpec};

#[derive(Parser)]
#[command(name = "sitefuse")]
#[command(about = "Assembles static pages from shared HTML partials.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,

    /// Suppress decorative output (repeat to also hide per-page lines)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub quiet: u8,

    /// Skip the startup banner
    #[arg(long, global = true)]
    pub no_banner: bool,

    /// Leave any #copyright-year element untouched
    #[arg(long, global = true)]
    pub no_year: bool,

    /// Replace the built-in fragment map (repeatable)
    #[arg(long = "fragment", value_name = "ID=PATH", global = true)]
    pub fragments: Vec<FragmentSpec>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show information about the tool and the fragment map in effect
    #[command(alias = "i")]
    Info,
    /// Assemble every page of a site tree into an output directory
    #[command(alias = "b")]
    Build {
        /// Site root containing the pages and the partials directory
        site: PathBuf,
        /// Directory the assembled site is written to
        #[arg(short, long)]
        out: PathBuf,
    },
    /// Assemble a single page to a file or stdout
    #[command(alias = "p")]
    Page {
        /// The page to assemble
        file: PathBuf,
        /// How many directories the page sits below the site root
        #[arg(short, long, default_value_t = 0)]
        depth: usize,
        /// Partials root: a directory, or an http(s) base URL
        #[arg(long, value_name = "PATH|URL")]
        partials_root: Option<String>,
        /// Output file (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

/// `--fragment` overrides replace the built-in map entirely.
pub fn resolve_fragments(overrides: &[FragmentSpec]) -> Vec<FragmentSpec> {
    if overrides.is_empty() {
        fragment::default_fragments()
    } else {
        overrides.to_vec()
    }
}
