//! # Command-Line Interface
//!
//! User-facing CLI commands and output formatting.
//!
//! ## Commands
//!
//! | Command | Purpose | Example |
//! |---------|---------|---------|
//! | `save` | Fetch a listing into a digest | `hn save --page front --date 2024-01-01` |
//! | `article` | Print one article of a digest | `hn article 3` |
//! | `pull` | Save one article's page | `hn pull 3 --page front` |
//! | `latest` | Show the latest full digest | `hn latest` |
//!
//! ## Output Formats
//!
//! All commands support `--format` flag:
//! - `text` (default) - Human-readable output
//! - `json` - Machine-parseable JSON
//!
//! ## Entry Point
//!
//! Call [`run()`] to parse arguments and execute the appropriate command.

mod app;
mod article;
mod output;
mod save;

pub use app::{run, Cli, Commands};
pub use output::{Output, OutputFormat};
