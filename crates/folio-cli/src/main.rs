mod cli;

use std::fs;
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::Datelike;
use clap::Parser;
use cli::{Cli, Commands};
use folio_media::MediaSource;
use folio_page::{active_section_index, PageRenderer, Portfolio, RenderOptions};

fn load_portfolio(content: Option<&Path>) -> Result<Portfolio> {
    match content {
        Some(path) => {
            let json = fs::read_to_string(path)
                .with_context(|| format!("Failed to read content file {}", path.display()))?;
            Ok(Portfolio::from_json(&json)?)
        }
        None => Ok(Portfolio::embedded()?),
    }
}

fn render(
    content: Option<&Path>,
    out: Option<&Path>,
    options: RenderOptions,
) -> Result<()> {
    let portfolio = load_portfolio(content)?;
    let html = PageRenderer::new(options).render(&portfolio);

    match out {
        Some(path) => {
            fs::write(path, &html)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            tracing::info!("Wrote {} ({} bytes)", path.display(), html.len());
        }
        None => {
            std::io::stdout()
                .write_all(html.as_bytes())
                .context("Failed to write page to stdout")?;
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Respect RUST_LOG env var if set, otherwise use defaults based on verbose flag
    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| {
        if cli.verbose { "debug" } else { "info" }.to_string()
    });

    tracing_subscriber::fmt()
        .with_env_filter(&env_filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Render {
            content,
            out,
            year,
            title,
            no_styles,
        } => {
            let options = RenderOptions {
                title,
                year: year.unwrap_or_else(|| chrono::Local::now().year()),
                stylesheet: !no_styles,
            };
            render(content.as_deref(), out.as_deref(), options)?;
        }
        Commands::Classify { locator } => {
            let source = MediaSource::classify(Some(locator.as_str()));
            println!("{}", source.kind().name());
        }
        Commands::Section {
            scroll_y,
            viewport_height,
        } => {
            let index = active_section_index(scroll_y, viewport_height)
                .context("Viewport height must be a positive finite number")?;
            println!("{index}");
        }
    }

    Ok(())
}
