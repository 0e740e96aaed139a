//! `blocksmith render` - compose a site bundle to static HTML.

use anyhow::Context;
use blocksmith_blocks::BlockRegistry;
use blocksmith_common::model::Site;
use blocksmith_renderer::{compile_document, compose_page, HtmlOptions};
use clap::Args;
use colored::Colorize;
use std::fs;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub struct RenderArgs {
    /// Site bundle (JSON: { id, name, theme, pages })
    pub input: PathBuf,

    /// Output directory for the generated HTML
    #[arg(short, long, default_value = "./dist")]
    pub out: PathBuf,

    /// Also render unpublished pages
    #[arg(long)]
    pub drafts: bool,
}

pub async fn run(args: RenderArgs) -> anyhow::Result<()> {
    let raw = fs::read_to_string(&args.input)
        .with_context(|| format!("reading {}", args.input.display()))?;
    let site = Site::from_json(&raw)
        .with_context(|| format!("parsing {}", args.input.display()))?;

    fs::create_dir_all(&args.out)
        .with_context(|| format!("creating {}", args.out.display()))?;

    let registry = BlockRegistry::builtin();

    println!(
        "{} {} ({} pages)",
        "Rendering".green().bold(),
        site.name,
        site.pages.len()
    );

    let mut written = 0usize;
    for page in &site.pages {
        // Publication is gated here, before composition is ever invoked.
        if !page.published && !args.drafts {
            println!("  {} {} (unpublished)", "skip".dimmed(), page.title);
            continue;
        }

        let document = compose_page(page, &site.theme, &registry).await;
        let html = compile_document(
            &document,
            HtmlOptions {
                title: page.title.clone(),
                ..HtmlOptions::default()
            },
        );

        let file_stem = if page.slug.is_empty() { &page.id } else { &page.slug };
        let path = args.out.join(format!("{}.html", file_stem));
        fs::write(&path, html).with_context(|| format!("writing {}", path.display()))?;

        println!("  {} {} → {}", "ok".green(), page.title, path.display());
        written += 1;
    }

    println!("{} {} file(s) written", "Done".green().bold(), written);
    Ok(())
}
