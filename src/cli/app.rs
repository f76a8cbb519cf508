//! Main CLI application structure

use std::num::NonZeroUsize;
use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};

use super::output::{Output, OutputFormat};
use super::{article, save};
use crate::domain::{PageKind, RenderFormat};
use crate::fetch::HttpFetcher;
use crate::storage::{Config, OutputLayout};
use crate::Digest;

#[derive(Parser)]
#[command(name = "hn")]
#[command(author, version, about = "Save Hacker News listings as markdown digests")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(long, short = 'f', global = true, default_value = "text")]
    pub format: OutputFormat,

    /// Enable verbose output for debugging
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    /// Root directory for digests (overrides config)
    #[arg(long, global = true, env = "HN_DIGEST_OUTPUT_DIR")]
    pub output_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Fetch a listing and save it as a markdown digest
    Save {
        /// Listing to fetch
        #[arg(long, short, value_enum, default_value_t = PageKind::Main)]
        page: PageKind,

        /// Archive day (YYYY-MM-DD), front page only
        #[arg(long, short)]
        date: Option<NaiveDate>,

        /// Markdown layout
        #[arg(long, short, value_enum, default_value_t = RenderFormat::Full)]
        layout: RenderFormat,

        /// File name to use instead of the generated one
        #[arg(long)]
        filename: Option<String>,
    },

    /// Print one article from a saved digest
    Article {
        /// Article number (1-based)
        number: NonZeroUsize,

        /// Listing whose latest digest is searched
        #[arg(long, short, value_enum, default_value_t = PageKind::Main)]
        page: PageKind,

        /// Explicit digest file to read
        #[arg(long)]
        file: Option<PathBuf>,
    },

    /// Fetch one article from a saved digest and save its content
    Pull {
        /// Article number (1-based)
        number: NonZeroUsize,

        /// Listing whose latest digest is searched
        #[arg(long, short, value_enum, default_value_t = PageKind::Main)]
        page: PageKind,

        /// Explicit digest file to read
        #[arg(long)]
        file: Option<PathBuf>,

        /// Date used in the saved file name (defaults to today)
        #[arg(long, short)]
        date: Option<NaiveDate>,
    },

    /// Print the path of the latest full digest
    Latest {
        /// Listing to look at
        #[arg(long, short, value_enum, default_value_t = PageKind::Main)]
        page: PageKind,
    },
}

/// Main entry point for the CLI
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let output = Output::new(cli.format, cli.verbose);

    let config = Config::load()?;
    let layout = match cli.output_dir {
        Some(dir) => OutputLayout::new(dir),
        None => config.layout(),
    };
    output.verbose_ctx("config", &format!("Output root: {}", layout.root().display()));

    match cli.command {
        Commands::Save {
            page,
            date,
            layout: format,
            filename,
        } => {
            let digest = Digest::new(layout, http_fetcher(&config)?);
            save::run(&output, &digest, page, date, format, filename.as_deref())?
        }

        Commands::Article { number, page, file } => {
            article::show(&output, &layout, number.get(), page, file.as_deref())?
        }

        Commands::Pull {
            number,
            page,
            file,
            date,
        } => {
            let digest = Digest::new(layout, http_fetcher(&config)?);
            article::pull(&output, &digest, number.get(), page, file.as_deref(), date)?
        }

        Commands::Latest { page } => article::latest(&output, &layout, page)?,
    }

    Ok(())
}

fn http_fetcher(config: &Config) -> Result<HttpFetcher> {
    HttpFetcher::new(&config.fetch).context("Failed to create HTTP client")
}
