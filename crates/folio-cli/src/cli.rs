use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "folio")]
#[command(author, version, about = "Single-page portfolio renderer")]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render the portfolio page to HTML
    Render {
        /// Portfolio JSON to use instead of the built-in content
        #[arg(short, long)]
        content: Option<PathBuf>,

        /// Output file (stdout if not specified)
        #[arg(short, long)]
        out: Option<PathBuf>,

        /// Copyright year (current year if not specified)
        #[arg(long)]
        year: Option<i32>,

        /// Document title
        #[arg(long)]
        title: Option<String>,

        /// Leave out the inline stylesheet
        #[arg(long)]
        no_styles: bool,
    },

    /// Show which player a media locator gets
    Classify {
        /// Media locator
        locator: String,
    },

    /// Compute the active section for a scroll offset
    Section {
        /// Vertical scroll offset in pixels
        #[arg(long, allow_negative_numbers = true)]
        scroll_y: f64,

        /// Viewport height in pixels
        #[arg(long, allow_negative_numbers = true)]
        viewport_height: f64,
    },
}
