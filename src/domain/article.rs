//! Article domain model
//!
//! An article is one entry of a Hacker News listing: the linked title,
//! the target URL and the domain Hacker News shows next to it.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Live front page
const MAIN_URL: &str = "https://news.ycombinator.com/";

/// Front page archive for a given day
const FRONT_URL: &str = "https://news.ycombinator.com/front?day=";

/// A single listing entry
///
/// Two articles are the same only if title, URL and domain all match.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Article {
    title: String,
    url: String,
    domain: String,
}

impl Article {
    /// Creates an article from its three fields
    pub fn new(
        title: impl Into<String>,
        url: impl Into<String>,
        domain: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
            domain: domain.into(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn domain(&self) -> &str {
        &self.domain
    }
}

/// Which Hacker News listing a digest was fetched from
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "snake_case")]
pub enum PageKind {
    /// The live front page
    #[default]
    Main,

    /// The front page archive for one day
    Front,
}

impl PageKind {
    /// Short name used in directories and file names
    pub fn as_str(&self) -> &'static str {
        match self {
            PageKind::Main => "main",
            PageKind::Front => "front",
        }
    }

    /// Human-readable label used in digest headers
    pub fn label(&self) -> &'static str {
        match self {
            PageKind::Main => "Main (Live Front Page)",
            PageKind::Front => "Daily Archive (Front Page by Day)",
        }
    }

    /// Returns the listing URL and the date the digest is filed under
    ///
    /// The live page is always filed under `today`; a requested date only
    /// selects which archive day to fetch.
    pub fn source(&self, date: Option<NaiveDate>, today: NaiveDate) -> (String, NaiveDate) {
        match self {
            PageKind::Main => (MAIN_URL.to_string(), today),
            PageKind::Front => {
                let day = date.unwrap_or(today);
                (format!("{}{}", FRONT_URL, day.format("%Y-%m-%d")), day)
            }
        }
    }

    /// Returns all page kinds
    pub fn all() -> &'static [PageKind] {
        &[PageKind::Main, PageKind::Front]
    }
}

impl std::fmt::Display for PageKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for PageKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "main" => Ok(PageKind::Main),
            "front" => Ok(PageKind::Front),
            _ => Err(format!("Unknown page kind: {}", s)),
        }
    }
}

/// Markdown layout of a saved digest
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum RenderFormat {
    /// Three lines per article: title, URL, domain
    #[default]
    Full,

    /// One line per article
    Compact,
}

impl RenderFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            RenderFormat::Full => "full",
            RenderFormat::Compact => "compact",
        }
    }

    /// File name suffix placed before `.md`
    pub fn file_suffix(&self) -> &'static str {
        match self {
            RenderFormat::Full => "",
            RenderFormat::Compact => "_compact",
        }
    }
}

impl std::fmt::Display for RenderFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for RenderFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "full" => Ok(RenderFormat::Full),
            "compact" => Ok(RenderFormat::Compact),
            _ => Err(format!("Unknown render format: {}", s)),
        }
    }
}
