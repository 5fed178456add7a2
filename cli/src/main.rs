mod commands;
mod terminal;

use commands::{CommandLine, Commands, build, info, page};
use sitefuse_common::config::Config;
use terminal::{logging, print};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    logging::init(commands.quiet);

    let cfg = Config {
        quiet: commands.quiet,
        no_banner: commands.no_banner,
        no_year: commands.no_year,
    };

    match commands.command {
        Commands::Info => {
            print::banner(&cfg);
            print::header("about the tool", cfg.quiet);
            info::info(&commands.fragments)
        }
        Commands::Build { site, out } => {
            print::banner(&cfg);
            print::header("assembling site", cfg.quiet);
            build::build(&site, &out, &commands.fragments, &cfg).await
        }
        // No banner here: the assembled page may be going to stdout.
        Commands::Page {
            file,
            depth,
            partials_root,
            output,
        } => {
            page::page(
                &file,
                depth,
                partials_root.as_deref(),
                output.as_deref(),
                &commands.fragments,
                &cfg,
            )
            .await
        }
    }
}
