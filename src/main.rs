use anyhow::Result;
use clap::Parser;
use iconprep::cli::{Cli, Commands};
use iconprep::commands;

fn main() -> Result<()> {
    let cli = Cli::parse();

    match &cli.command {
        Commands::Fix => commands::fix::run(&cli),
        Commands::Generate => commands::generate::run(&cli),
        Commands::All => commands::all::run(&cli),
    }
}
