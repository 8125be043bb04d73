mod commands;
mod format;
mod input;
mod report;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{
    convert::ConvertArgs, info::InfoArgs, inspect::InspectArgs, schema::SchemaArgs,
};

#[derive(Parser)]
#[command(
    name = "transulog",
    about = "Convert decoded ULog flight logs into per-topic mcap files"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert decoded logs into one mcap file per topic
    Convert(ConvertArgs),
    /// Print the inferred schema, checksum and message paths of each format
    Schema(SchemaArgs),
    /// Write a Markdown summary of a decoded log
    Info(InfoArgs),
    /// Show what a converted mcap file declares
    Inspect(InspectArgs),
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Convert(args) => args.run(),
        Commands::Schema(args) => args.run(),
        Commands::Info(args) => args.run(),
        Commands::Inspect(args) => args.run(),
    }
}
