//! Domain models for hn-digest
//!
//! Pure text transforms: extraction, rendering and lookup. No I/O here.

mod article;
mod extract;
mod layout;
mod lookup;
mod render;

pub use article::{Article, PageKind, RenderFormat};
pub use extract::extract;
pub use lookup::{lookup, LookupError};
pub use render::{now, render, render_article_header, render_at, DATE_FORMAT, TIMESTAMP_FORMAT};
