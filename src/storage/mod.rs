//! # Storage Layer
//!
//! Where digests live on disk and how they are written and read.
//!
//! ## Storage Formats
//!
//! | Data | Format | Location |
//! |------|--------|----------|
//! | Digests (full) | Markdown | `output/{page}/hackernews_{page}_{date}.md` |
//! | Digests (compact) | Markdown | `output/{page}/hackernews_{page}_{date}_compact.md` |
//! | Saved articles | Markdown | `output/articles/{date}_{nn}_{slug}.md` |
//! | Config | TOML | `.hn-digest.toml` or the global config dir |
//!
//! ## Key Types
//!
//! - [`OutputLayout`] - Path resolution under the output root
//! - [`Config`] - Output root and fetch settings

mod config;
mod digest_store;
mod paths;

pub use config::{Config, ConfigError, FetchConfig, OutputConfig, PROJECT_CONFIG_FILE};
pub use digest_store::{read_markdown, write_markdown};
pub use paths::{slugify, OutputLayout, DEFAULT_OUTPUT_DIR, MAX_SLUG_LEN};
