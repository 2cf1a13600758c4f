use anyhow::Result;
use clap::Parser;
use contentscope::cli::{Cli, Commands};
use contentscope::commands;

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Run { input, output } => commands::run::run(input, output),
        Commands::Classify {
            queries,
            distribution,
            format,
            output,
        } => commands::classify::classify(queries, distribution, format, output),
        Commands::Check {
            file,
            title,
            meta_description,
            keyword,
            format,
            output,
        } => commands::check::check(file, title, meta_description, keyword, format, output),
    }
}
