//! nullfuzz - nullability fuzzing suite generator for the Lua GraphQL library

use anyhow::Result;
use clap::Parser;
use env_logger::Env;

mod cli;
mod commands;

use cli::Cli;
use commands::{catalog, generate, ls, translate};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.global.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(default_level)).init();

    match &cli.command {
        cli::Commands::Generate(args) => generate::execute(args, &cli.global).await,
        cli::Commands::Ls(args) => ls::execute(args, &cli.global).await,
        cli::Commands::Translate(args) => translate::execute(args).await,
        cli::Commands::Catalog => catalog::execute().await,
    }
}
