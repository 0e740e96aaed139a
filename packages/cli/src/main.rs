mod commands;

use clap::{Parser, Subcommand};
use commands::{blocks, render, RenderArgs};

/// Blocksmith CLI - block-based site builder toolkit
#[derive(Parser, Debug)]
#[command(name = "blocksmith")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a site bundle to static HTML
    Render(RenderArgs),

    /// List the registered blocks
    Blocks,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    match cli.command {
        Command::Render(args) => render::run(args).await,
        Command::Blocks => blocks::run().await,
    }
}
