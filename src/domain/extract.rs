//! Article extraction from fetched listing text
//!
//! A Hacker News listing rendered as markdown shows each story as
//! `[title](url) ([domain](https://news.ycombinator.com/from?site=domain))`.
//! Extraction is a single regex pass over that shape, not a markdown parse.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

use super::article::Article;

/// `[title](http(s)://url) ([domain](`, no component spanning a line break
///
/// SAFETY: Pattern is a compile-time constant that is known to be valid.
#[allow(clippy::unwrap_used)]
static STORY_LINK_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\[([^\]\n]+)\]\((https?://[^)\n]+)\)\s+\(\[([^\]\n]+)\]").unwrap()
});

/// Extracts every story link from `content`
///
/// Duplicates (same title, URL and domain) are dropped; the first
/// occurrence keeps its position. Text without any story links yields an
/// empty list.
pub fn extract(content: &str) -> Vec<Article> {
    let mut seen = HashSet::new();
    let mut articles = Vec::new();

    for caps in STORY_LINK_RE.captures_iter(content) {
        let article = Article::new(&caps[1], &caps[2], &caps[3]);
        if seen.insert(article.clone()) {
            articles.push(article);
        }
    }

    articles
}
