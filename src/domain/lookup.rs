//! Article lookup in saved digests
//!
//! The full layout is tried first, then the compact one. Both are always
//! attempted in that order; the file is never inspected to guess its layout.

use thiserror::Error;

use super::article::Article;
use super::layout;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LookupError {
    #[error("Article {index} not found")]
    NotFound { index: usize },
}

/// Returns article `index` (1-based) from a saved digest
///
/// Fields are returned exactly as they appear in the document.
pub fn lookup(document: &str, index: usize) -> Result<Article, LookupError> {
    if index == 0 {
        return Err(LookupError::NotFound { index });
    }

    layout::match_full(document, index)
        .or_else(|| layout::match_compact(document, index))
        .ok_or(LookupError::NotFound { index })
}
