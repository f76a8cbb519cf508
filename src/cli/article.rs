//! Article lookup commands

use std::path::Path;

use anyhow::Result;
use chrono::NaiveDate;

use super::output::Output;
use crate::digest::get_article;
use crate::domain::PageKind;
use crate::fetch::Fetch;
use crate::storage::OutputLayout;
use crate::{Digest, DigestError};

/// Prints title, URL and domain of one article
pub fn show(
    output: &Output,
    layout: &OutputLayout,
    number: usize,
    page: PageKind,
    file: Option<&Path>,
) -> Result<()> {
    output.verbose_ctx(
        "article",
        &format!("Looking up article {}: page={}, file={:?}", number, page, file),
    );

    let article = get_article(layout, number, page, file)?;

    if output.is_json() {
        output.data(&serde_json::json!({
            "number": number,
            "title": article.title(),
            "url": article.url(),
            "domain": article.domain(),
        }));
    } else {
        output.field("Title", article.title());
        output.field("URL", article.url());
        output.field("Domain", article.domain());
    }

    Ok(())
}

/// Fetches one article's page and saves it under the articles directory
pub fn pull<F: Fetch>(
    output: &Output,
    digest: &Digest<F>,
    number: usize,
    page: PageKind,
    file: Option<&Path>,
    date: Option<NaiveDate>,
) -> Result<()> {
    output.verbose_ctx(
        "pull",
        &format!("Pulling article {}: page={}, file={:?}", number, page, file),
    );

    let saved = digest.save_article(number, page, file, date)?;

    if output.is_json() {
        output.data(&saved);
    } else {
        output.success(&format!(
            "Saved article {} ({}) to {}",
            saved.index,
            saved.article.title(),
            saved.path.display()
        ));
    }

    Ok(())
}

/// Prints the latest full-format digest path
pub fn latest(output: &Output, layout: &OutputLayout, page: PageKind) -> Result<()> {
    let path = layout
        .find_latest(page)?
        .ok_or(DigestError::SourceUnavailable { page_kind: page })?;

    if output.is_json() {
        output.data(&serde_json::json!({
            "page": page,
            "path": path,
        }));
    } else {
        output.success(&path.display().to_string());
    }

    Ok(())
}
