//! Output path resolution
//!
//! ```text
//! output/
//! ├── main/
//! │   ├── hackernews_main_2024-01-01.md
//! │   └── hackernews_main_2024-01-01_compact.md
//! ├── front/
//! │   └── hackernews_front_2023-12-31.md
//! └── articles/
//!     └── 2024-01-01_03_hello-world-a-test.md
//! ```

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;
use std::time::SystemTime;

use chrono::NaiveDate;
use regex::Regex;

use crate::domain::{PageKind, RenderFormat, DATE_FORMAT};

/// Default output root, relative to the working directory
pub const DEFAULT_OUTPUT_DIR: &str = "output";

/// Subdirectory holding single saved articles
const ARTICLES_DIR: &str = "articles";

/// Marker that identifies compact digests by file name
const COMPACT_MARKER: &str = "_compact";

/// Longest slug kept in article file names, in characters
pub const MAX_SLUG_LEN: usize = 50;

/// SAFETY: Pattern is a compile-time constant that is known to be valid.
#[allow(clippy::unwrap_used)]
static SLUG_STRIP_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^\w\s-]").unwrap());

/// SAFETY: Pattern is a compile-time constant that is known to be valid.
#[allow(clippy::unwrap_used)]
static SLUG_GAP_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[\s_]+").unwrap());

/// Computes where digests and articles live under an output root
#[derive(Debug, Clone)]
pub struct OutputLayout {
    root: PathBuf,
}

impl Default for OutputLayout {
    fn default() -> Self {
        Self::new(DEFAULT_OUTPUT_DIR)
    }
}

impl OutputLayout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Directory holding the digests of one page kind
    pub fn page_dir(&self, page_kind: PageKind) -> PathBuf {
        self.root.join(page_kind.as_str())
    }

    /// Directory holding single saved articles
    pub fn articles_dir(&self) -> PathBuf {
        self.root.join(ARTICLES_DIR)
    }

    /// Path of a digest file
    ///
    /// An explicit file name replaces the computed one but stays in the
    /// page kind's directory.
    pub fn collection_path(
        &self,
        page_kind: PageKind,
        date: NaiveDate,
        format: RenderFormat,
        file_name: Option<&str>,
    ) -> PathBuf {
        let name = match file_name {
            Some(name) => name.to_string(),
            None => format!(
                "{}{}{}.md",
                digest_prefix(page_kind),
                date.format(DATE_FORMAT),
                format.file_suffix()
            ),
        };
        self.page_dir(page_kind).join(name)
    }

    /// Most recently modified full-format digest for a page kind
    ///
    /// Compact digests are skipped. A missing directory yields `None`.
    pub fn find_latest(&self, page_kind: PageKind) -> io::Result<Option<PathBuf>> {
        let dir = self.page_dir(page_kind);
        if !dir.is_dir() {
            return Ok(None);
        }

        let prefix = digest_prefix(page_kind);
        let mut latest: Option<(SystemTime, PathBuf)> = None;

        for entry in fs::read_dir(&dir)? {
            let entry = entry?;
            let path = entry.path();

            let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
                continue;
            };
            if !name.starts_with(&prefix) || !name.ends_with(".md") || name.contains(COMPACT_MARKER) {
                continue;
            }
            if !path.is_file() {
                continue;
            }

            let mtime = entry.metadata()?.modified()?;
            if latest.as_ref().map_or(true, |(best, _)| mtime > *best) {
                latest = Some((mtime, path));
            }
        }

        Ok(latest.map(|(_, path)| path))
    }

    /// Path of a single saved article: `{date}_{nn}_{slug}.md`
    pub fn article_path(&self, index: usize, title: &str, date: NaiveDate) -> PathBuf {
        self.articles_dir().join(format!(
            "{}_{:02}_{}.md",
            date.format(DATE_FORMAT),
            index,
            slugify(title)
        ))
    }
}

fn digest_prefix(page_kind: PageKind) -> String {
    format!("hackernews_{}_", page_kind.as_str())
}

/// Lowercase, hyphenated, file-name-safe form of a title
///
/// Characters other than word characters, whitespace and `-` are dropped,
/// runs of whitespace and `_` become one `-`, and the result is capped at
/// [`MAX_SLUG_LEN`] characters. A title with nothing to keep gives an
/// empty slug.
pub fn slugify(title: &str) -> String {
    let lowered = title.to_lowercase();
    let stripped = SLUG_STRIP_RE.replace_all(&lowered, "");
    let hyphenated = SLUG_GAP_RE.replace_all(&stripped, "-");
    hyphenated
        .trim_matches('-')
        .chars()
        .take(MAX_SLUG_LEN)
        .collect()
}
