//! Digest save command

use anyhow::Result;
use chrono::NaiveDate;

use super::output::Output;
use crate::domain::{PageKind, RenderFormat};
use crate::fetch::Fetch;
use crate::Digest;

pub fn run<F: Fetch>(
    output: &Output,
    digest: &Digest<F>,
    page: PageKind,
    date: Option<NaiveDate>,
    format: RenderFormat,
    filename: Option<&str>,
) -> Result<()> {
    output.verbose_ctx(
        "save",
        &format!("Saving {} digest: date={:?}, layout={}", page, date, format),
    );

    let saved = digest.save_digest(page, date, format, filename)?;

    output.verbose_ctx("save", &format!("Fetched {}", saved.source_url));

    if output.is_json() {
        output.data(&saved);
    } else {
        output.success(&format!(
            "Saved {} articles to {}",
            saved.count,
            saved.path.display()
        ));
    }

    Ok(())
}
