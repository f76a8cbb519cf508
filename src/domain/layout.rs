//! Article block grammar shared by the renderer and the lookup parser
//!
//! Digests are written by one process and read back by another, so the
//! byte layout of an article block is the only contract between them.
//! Every literal of that layout is defined once here; the templates and
//! the matching patterns below are both built from these constants.
//!
//! Full layout:
//!
//! ```text
//! 3. **Title**
//!    - URL: https://example.com/post
//!    - Domain: example.com
//!
//! ```
//!
//! Compact layout:
//!
//! ```text
//! 3. **Title** — [example.com](https://example.com/post)
//! ```

use std::sync::LazyLock;

use regex::Regex;

use super::article::Article;

/// Wraps the title on the index line
pub const BOLD: &str = "**";

/// Indentation of the URL and domain lines in the full layout
pub const FIELD_INDENT: &str = "   ";

/// Marker of the URL line in the full layout
pub const URL_FIELD: &str = "- URL:";

/// Marker of the domain line in the full layout
pub const DOMAIN_FIELD: &str = "- Domain:";

/// Separates the title from the domain link in the compact layout
pub const COMPACT_SEPARATOR: &str = "—";

/// Full-layout block: index, title, URL, domain
///
/// SAFETY: built from escaped constants, always a valid pattern.
#[allow(clippy::unwrap_used)]
static FULL_BLOCK_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"(?m)^(\d+)\.\s+{bold}(.+?){bold}\n\s+{url}\s+(https?://\S+)\n\s+{domain}\s+(\S+)",
        bold = regex::escape(BOLD),
        url = regex::escape(URL_FIELD),
        domain = regex::escape(DOMAIN_FIELD),
    ))
    .unwrap()
});

/// Compact-layout line: index, title, domain, URL
///
/// SAFETY: built from escaped constants, always a valid pattern.
#[allow(clippy::unwrap_used)]
static COMPACT_LINE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"(?m)^(\d+)\.\s+{bold}(.+?){bold}\s+{sep}\s+\[([^\]]+)\]\((https?://\S+?)\)",
        bold = regex::escape(BOLD),
        sep = regex::escape(COMPACT_SEPARATOR),
    ))
    .unwrap()
});

/// Renders one article in the full layout, trailing blank line included
pub fn full_block(index: usize, article: &Article) -> String {
    format!(
        "{index}. {BOLD}{title}{BOLD}\n{FIELD_INDENT}{URL_FIELD} {url}\n{FIELD_INDENT}{DOMAIN_FIELD} {domain}\n\n",
        title = article.title(),
        url = article.url(),
        domain = article.domain(),
    )
}

/// Renders one article in the compact layout
pub fn compact_line(index: usize, article: &Article) -> String {
    format!(
        "{index}. {BOLD}{title}{BOLD} {COMPACT_SEPARATOR} [{domain}]({url})\n",
        title = article.title(),
        domain = article.domain(),
        url = article.url(),
    )
}

/// Finds the full-layout block numbered `index`
///
/// Only blocks whose index line starts a line are considered, so numbers
/// inside titles or URLs never match.
pub fn match_full(document: &str, index: usize) -> Option<Article> {
    let wanted = index.to_string();
    FULL_BLOCK_RE
        .captures_iter(document)
        .find(|caps| caps[1] == wanted)
        .map(|caps| Article::new(&caps[2], &caps[3], &caps[4]))
}

/// Finds the compact-layout line numbered `index`
pub fn match_compact(document: &str, index: usize) -> Option<Article> {
    let wanted = index.to_string();
    COMPACT_LINE_RE
        .captures_iter(document)
        .find(|caps| caps[1] == wanted)
        .map(|caps| Article::new(&caps[2], &caps[4], &caps[3]))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Article {
        Article::new("Show HN: A tiny thing", "https://example.com/post", "example.com")
    }

    #[test]
    fn full_block_shape() {
        assert_eq!(
            full_block(3, &sample()),
            "3. **Show HN: A tiny thing**\n   - URL: https://example.com/post\n   - Domain: example.com\n\n"
        );
    }

    #[test]
    fn compact_line_shape() {
        assert_eq!(
            compact_line(12, &sample()),
            "12. **Show HN: A tiny thing** — [example.com](https://example.com/post)\n"
        );
    }

    #[test]
    fn full_match_reads_rendered_block() {
        let doc = full_block(7, &sample());
        assert_eq!(match_full(&doc, 7), Some(sample()));
        assert_eq!(match_full(&doc, 1), None);
    }

    #[test]
    fn compact_match_reads_rendered_line() {
        let doc = compact_line(7, &sample());
        assert_eq!(match_compact(&doc, 7), Some(sample()));
        assert_eq!(match_full(&doc, 7), None);
    }

    #[test]
    fn index_must_start_the_line() {
        let doc = "Intro mentions 2. **Fake** — [x.com](https://x.com)\n";
        assert_eq!(match_compact(doc, 2), None);
    }

    #[test]
    fn longer_index_does_not_shadow_shorter() {
        let mut doc = String::new();
        doc.push_str(&full_block(11, &Article::new("Eleven", "https://e.com/11", "e.com")));
        doc.push_str(&full_block(1, &Article::new("One", "https://o.com/1", "o.com")));

        assert_eq!(match_full(&doc, 1).unwrap().title(), "One");
        assert_eq!(match_full(&doc, 11).unwrap().title(), "Eleven");
    }
}
