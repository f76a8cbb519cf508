//! Markdown rendering of digests and saved articles

use chrono::{Local, NaiveDate, NaiveDateTime};

use super::article::{Article, PageKind, RenderFormat};
use super::layout;

/// Date format used in headers and file names
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Format of the `Fetched` header field
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Current local wall-clock time
pub fn now() -> NaiveDateTime {
    Local::now().naive_local()
}

/// Renders a digest stamped with the current time
pub fn render(
    articles: &[Article],
    date: NaiveDate,
    page_kind: PageKind,
    format: RenderFormat,
) -> String {
    render_at(articles, date, page_kind, format, now())
}

/// Renders a digest: header, then one block per article numbered from 1
pub fn render_at(
    articles: &[Article],
    date: NaiveDate,
    page_kind: PageKind,
    format: RenderFormat,
    fetched: NaiveDateTime,
) -> String {
    let mut content = digest_header(articles.len(), date, page_kind, fetched);

    for (i, article) in articles.iter().enumerate() {
        let block = match format {
            RenderFormat::Full => layout::full_block(i + 1, article),
            RenderFormat::Compact => layout::compact_line(i + 1, article),
        };
        content.push_str(&block);
    }

    content
}

fn digest_header(
    count: usize,
    date: NaiveDate,
    page_kind: PageKind,
    fetched: NaiveDateTime,
) -> String {
    let label = page_kind.label();
    let mut header = format!("# Hacker News — {}\n\n", label);
    header.push_str(&field_table(&[
        ("Date", date.format(DATE_FORMAT).to_string()),
        ("Page", label.to_string()),
        ("Fetched", fetched.format(TIMESTAMP_FORMAT).to_string()),
        ("Count", format!("{} articles", count)),
    ]));
    header
}

/// Header for a single saved article: title, field table, rule
pub fn render_article_header(article: &Article, index: usize, fetched: NaiveDateTime) -> String {
    let mut header = format!("# {}\n\n", article.title());
    header.push_str(&field_table(&[
        ("Article", format!("#{}", index)),
        ("URL", article.url().to_string()),
        ("Domain", article.domain().to_string()),
        ("Fetched", fetched.format(TIMESTAMP_FORMAT).to_string()),
    ]));
    header
}

/// Two-column field table followed by a horizontal rule
fn field_table(rows: &[(&str, String)]) -> String {
    let mut table = String::from("| Field   | Value |\n|---------|-------|\n");
    for (field, value) in rows {
        table.push_str(&format!("| {:<7} | {} |\n", field, value));
    }
    table.push_str("\n---\n\n");
    table
}
