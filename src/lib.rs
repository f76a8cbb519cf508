//! hn-digest - Hacker News listings as markdown digests
//!
//! A listing is fetched, its story links are extracted and written to a
//! markdown digest in one of two layouts. Later, possibly from another
//! process, the digest is parsed again to answer "what is article N?".

pub mod cli;
pub mod digest;
pub mod domain;
pub mod fetch;
pub mod storage;

pub use digest::{get_article, Digest, DigestError, SavedArticle, SavedDigest};
pub use domain::{Article, PageKind, RenderFormat};
