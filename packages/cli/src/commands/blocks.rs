//! `blocksmith blocks` - list the registered block library.

use blocksmith_blocks::BlockRegistry;
use colored::Colorize;

pub async fn run() -> anyhow::Result<()> {
    let registry = BlockRegistry::builtin();
    let summaries = registry.list_metadata().await;

    println!("{} {} blocks registered", "Library".green().bold(), summaries.len());
    for summary in summaries {
        let marker = if summary.popular { "★" } else { " " };
        println!(
            "  {} {:<14} {:<12} {}",
            marker.yellow(),
            summary.id.bold(),
            summary.category.label().dimmed(),
            summary.description
        );
    }
    Ok(())
}
