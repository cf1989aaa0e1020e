//! CLI argument definitions using clap derive API

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// nullfuzz - generate luatest nullability suites checked against graphql-js
#[derive(Parser, Debug)]
#[command(name = "nullfuzz")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Global options
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Global arguments available to all commands
#[derive(Args, Debug, Clone)]
pub struct GlobalArgs {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Config file path (default: nullfuzz.yml in the working directory)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Query graphql-js for every combination and write the luatest file
    Generate(GenerateArgs),

    /// List planned cases without running the oracle
    Ls(LsArgs),

    /// Translate a graphql-js error message into the Lua library's wording
    Translate(TranslateArgs),

    /// Print the type catalog
    Catalog,
}

/// Suite and kind selection shared by generate and ls
#[derive(Args, Debug, Clone, Default)]
pub struct SelectionArgs {
    /// Suites to generate (comma-separated, default: config or all)
    #[arg(short, long)]
    pub suites: Option<String>,

    /// Kinds to generate (comma-separated, default: config or whole catalog)
    #[arg(short, long)]
    pub kinds: Option<String>,
}

/// Arguments for the generate command
#[derive(Args, Debug)]
pub struct GenerateArgs {
    #[command(flatten)]
    pub selection: SelectionArgs,

    /// Write the generated file here instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Node executable used to run graphql-js
    #[arg(long, env = "NULLFUZZ_NODE")]
    pub node: Option<String>,

    /// Directory containing the graphql module (prepended to NODE_PATH)
    #[arg(long)]
    pub node_path: Option<PathBuf>,
}

/// Arguments for the ls command
#[derive(Args, Debug)]
pub struct LsArgs {
    #[command(flatten)]
    pub selection: SelectionArgs,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub output: LsOutput,
}

/// Ls output formats
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LsOutput {
    /// Human-readable table
    Table,
    /// JSON array
    Json,
}

/// Arguments for the translate command
#[derive(Args, Debug)]
pub struct TranslateArgs {
    /// graphql-js error message
    pub message: String,

    /// Also print which error shape matched
    #[arg(short, long)]
    pub explain: bool,
}

#[cfg(test)]
#[path = "cli_test.rs"]
mod tests;
