//! Save and read digests
//!
//! Save direction: fetch → extract → render → resolve path → write.
//! Read direction: explicit path or latest digest → read → lookup.

use std::io;
use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDate};
use serde::Serialize;
use thiserror::Error;

use crate::domain::{
    extract, lookup, now, render, render_article_header, Article, LookupError, PageKind,
    RenderFormat,
};
use crate::fetch::{Fetch, FetchError};
use crate::storage::{read_markdown, write_markdown, OutputLayout};

#[derive(Debug, Error)]
pub enum DigestError {
    #[error("No saved HN file found for page '{page_kind}'. Run 'hn save --page {page_kind}' first.")]
    SourceUnavailable { page_kind: PageKind },

    #[error("Article {index} not found in {}", .path.display())]
    NotFound { index: usize, path: PathBuf },

    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error("Failed to access {}", .path.display())]
    Filesystem {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl DigestError {
    fn filesystem(path: &Path) -> impl FnOnce(io::Error) -> Self + '_ {
        move |source| DigestError::Filesystem {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Result of saving a digest
#[derive(Debug, Clone, Serialize)]
pub struct SavedDigest {
    pub path: PathBuf,
    pub count: usize,
    pub date: NaiveDate,
    pub source_url: String,
}

/// Result of saving a single article
#[derive(Debug, Clone, Serialize)]
pub struct SavedArticle {
    pub path: PathBuf,
    pub index: usize,
    pub article: Article,
}

/// Digest pipeline bound to an output root and a page source
pub struct Digest<F> {
    layout: OutputLayout,
    fetcher: F,
}

impl<F: Fetch> Digest<F> {
    pub fn new(layout: OutputLayout, fetcher: F) -> Self {
        Self { layout, fetcher }
    }

    pub fn layout(&self) -> &OutputLayout {
        &self.layout
    }

    /// Fetches a listing and saves it as a digest
    ///
    /// `date` only matters for the daily archive; the live page is always
    /// filed under today.
    pub fn save_digest(
        &self,
        page_kind: PageKind,
        date: Option<NaiveDate>,
        format: RenderFormat,
        file_name: Option<&str>,
    ) -> Result<SavedDigest, DigestError> {
        let today = Local::now().date_naive();
        let (source_url, date) = page_kind.source(date, today);

        let content = self.fetcher.fetch(&source_url)?;
        let articles = extract(&content);
        let markdown = render(&articles, date, page_kind, format);

        let path = self.layout.collection_path(page_kind, date, format, file_name);
        write_markdown(&path, &markdown).map_err(DigestError::filesystem(&path))?;

        Ok(SavedDigest {
            path,
            count: articles.len(),
            date,
            source_url,
        })
    }

    /// Looks up article `index`, fetches its page and saves it with a header
    pub fn save_article(
        &self,
        index: usize,
        page_kind: PageKind,
        digest_path: Option<&Path>,
        date: Option<NaiveDate>,
    ) -> Result<SavedArticle, DigestError> {
        let article = get_article(&self.layout, index, page_kind, digest_path)?;
        let body = self.fetcher.fetch(article.url())?;

        let mut content = render_article_header(&article, index, now());
        content.push_str(&body);
        if !content.ends_with('\n') {
            content.push('\n');
        }

        let date = date.unwrap_or_else(|| Local::now().date_naive());
        let path = self.layout.article_path(index, article.title(), date);
        write_markdown(&path, &content).map_err(DigestError::filesystem(&path))?;

        Ok(SavedArticle {
            path,
            index,
            article,
        })
    }
}

/// Digest that article lookups read from
///
/// An explicit path wins; otherwise the latest full-format digest for the
/// page kind.
pub fn resolve_digest(
    layout: &OutputLayout,
    page_kind: PageKind,
    digest_path: Option<&Path>,
) -> Result<PathBuf, DigestError> {
    if let Some(path) = digest_path {
        return Ok(path.to_path_buf());
    }

    let dir = layout.page_dir(page_kind);
    let latest = layout
        .find_latest(page_kind)
        .map_err(DigestError::filesystem(&dir))?;

    latest.ok_or(DigestError::SourceUnavailable { page_kind })
}

/// Returns article `index` (1-based) from a saved digest
pub fn get_article(
    layout: &OutputLayout,
    index: usize,
    page_kind: PageKind,
    digest_path: Option<&Path>,
) -> Result<Article, DigestError> {
    let path = resolve_digest(layout, page_kind, digest_path)?;
    let document = read_markdown(&path).map_err(DigestError::filesystem(&path))?;

    lookup(&document, index).map_err(|err| match err {
        LookupError::NotFound { index } => DigestError::NotFound { index, path },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::collections::HashMap;
    use std::fs;
    use tempfile::TempDir;

    const LISTING: &str = "\
1.  [Alpha](https://alpha.dev/post) ([alpha.dev](https://news.ycombinator.com/from?site=alpha.dev))
2.  [Beta: 2. edition](https://beta.io/b?id=2) ([beta.io](https://news.ycombinator.com/from?site=beta.io))
3.  [Alpha](https://alpha.dev/post) ([alpha.dev](https://news.ycombinator.com/from?site=alpha.dev))
";

    /// Serves canned pages and records requested URLs
    #[derive(Default)]
    struct StubFetcher {
        pages: HashMap<String, String>,
        requested: RefCell<Vec<String>>,
    }

    impl StubFetcher {
        fn with_page(mut self, url: &str, body: &str) -> Self {
            self.pages.insert(url.to_string(), body.to_string());
            self
        }
    }

    impl Fetch for StubFetcher {
        fn fetch(&self, url: &str) -> Result<String, FetchError> {
            self.requested.borrow_mut().push(url.to_string());
            self.pages.get(url).cloned().ok_or_else(|| FetchError::Status {
                url: url.to_string(),
                status: reqwest::StatusCode::NOT_FOUND,
            })
        }
    }

    fn day(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    fn archive_fetcher() -> StubFetcher {
        StubFetcher::default()
            .with_page("https://news.ycombinator.com/front?day=2024-01-01", LISTING)
            .with_page("https://alpha.dev/post", "Alpha body")
    }

    #[test]
    fn save_then_get_full() {
        let dir = TempDir::new().unwrap();
        let digest = Digest::new(OutputLayout::new(dir.path()), archive_fetcher());

        let saved = digest
            .save_digest(PageKind::Front, Some(day("2024-01-01")), RenderFormat::Full, None)
            .unwrap();

        assert_eq!(saved.count, 2);
        assert_eq!(saved.date, day("2024-01-01"));
        assert_eq!(
            saved.path,
            dir.path().join("front").join("hackernews_front_2024-01-01.md")
        );

        let first = get_article(digest.layout(), 1, PageKind::Front, None).unwrap();
        let second = get_article(digest.layout(), 2, PageKind::Front, None).unwrap();
        let mut titles = vec![first.title().to_string(), second.title().to_string()];
        titles.sort();
        assert_eq!(titles, vec!["Alpha", "Beta: 2. edition"]);
    }

    #[test]
    fn compact_save_is_read_by_explicit_path() {
        let dir = TempDir::new().unwrap();
        let digest = Digest::new(OutputLayout::new(dir.path()), archive_fetcher());

        let saved = digest
            .save_digest(
                PageKind::Front,
                Some(day("2024-01-01")),
                RenderFormat::Compact,
                Some("custom.md"),
            )
            .unwrap();

        assert_eq!(saved.path, dir.path().join("front").join("custom.md"));

        let article = get_article(digest.layout(), 2, PageKind::Front, Some(&saved.path)).unwrap();
        assert!(article.url().starts_with("https://"));
    }

    #[test]
    fn missing_digest_is_source_unavailable() {
        let dir = TempDir::new().unwrap();
        let layout = OutputLayout::new(dir.path());

        let err = get_article(&layout, 1, PageKind::Main, None).unwrap_err();
        assert!(matches!(
            err,
            DigestError::SourceUnavailable {
                page_kind: PageKind::Main
            }
        ));
    }

    #[test]
    fn compact_only_digest_is_source_unavailable() {
        let dir = TempDir::new().unwrap();
        let digest = Digest::new(OutputLayout::new(dir.path()), archive_fetcher());

        digest
            .save_digest(PageKind::Front, Some(day("2024-01-01")), RenderFormat::Compact, None)
            .unwrap();

        let err = get_article(digest.layout(), 1, PageKind::Front, None).unwrap_err();
        assert!(matches!(err, DigestError::SourceUnavailable { .. }));
    }

    #[test]
    fn absent_index_is_not_found() {
        let dir = TempDir::new().unwrap();
        let digest = Digest::new(OutputLayout::new(dir.path()), archive_fetcher());
        digest
            .save_digest(PageKind::Front, Some(day("2024-01-01")), RenderFormat::Full, None)
            .unwrap();

        let err = get_article(digest.layout(), 3, PageKind::Front, None).unwrap_err();
        assert!(matches!(err, DigestError::NotFound { index: 3, .. }));
    }

    #[test]
    fn unreadable_explicit_path_is_filesystem_error() {
        let dir = TempDir::new().unwrap();
        let layout = OutputLayout::new(dir.path());
        let missing = dir.path().join("missing.md");

        let err = get_article(&layout, 1, PageKind::Main, Some(&missing)).unwrap_err();
        assert!(matches!(err, DigestError::Filesystem { .. }));
    }

    #[test]
    fn fetch_failure_propagates() {
        let dir = TempDir::new().unwrap();
        let digest = Digest::new(OutputLayout::new(dir.path()), StubFetcher::default());

        let err = digest
            .save_digest(PageKind::Main, None, RenderFormat::Full, None)
            .unwrap_err();

        assert!(matches!(err, DigestError::Fetch(FetchError::Status { .. })));
        assert!(!dir.path().join("main").exists());
    }

    #[test]
    fn main_page_is_fetched_from_live_url() {
        let dir = TempDir::new().unwrap();
        let fetcher = StubFetcher::default().with_page("https://news.ycombinator.com/", LISTING);
        let digest = Digest::new(OutputLayout::new(dir.path()), fetcher);

        let saved = digest
            .save_digest(PageKind::Main, Some(day("2000-01-01")), RenderFormat::Full, None)
            .unwrap();

        assert_eq!(saved.date, Local::now().date_naive());
        assert_eq!(saved.source_url, "https://news.ycombinator.com/");
    }

    #[test]
    fn save_article_writes_header_and_body() {
        let dir = TempDir::new().unwrap();
        let layout = OutputLayout::new(dir.path());
        let digest_path = dir.path().join("digest.md");
        fs::write(
            &digest_path,
            "1. **Alpha, the Post!**\n   - URL: https://alpha.dev/post\n   - Domain: alpha.dev\n\n",
        )
        .unwrap();

        let digest = Digest::new(layout, archive_fetcher());
        let saved = digest
            .save_article(1, PageKind::Main, Some(&digest_path), Some(day("2024-01-01")))
            .unwrap();

        assert_eq!(
            saved.path,
            dir.path().join("articles").join("2024-01-01_01_alpha-the-post.md")
        );
        assert_eq!(digest.fetcher.requested.borrow().last().unwrap(), "https://alpha.dev/post");

        let content = fs::read_to_string(&saved.path).unwrap();
        assert!(content.starts_with("# Alpha, the Post!\n\n"));
        assert!(content.contains("| Article | #1 |\n"));
        assert!(content.contains("| URL     | https://alpha.dev/post |\n"));
        assert!(content.ends_with("---\n\nAlpha body\n"));
    }
}
