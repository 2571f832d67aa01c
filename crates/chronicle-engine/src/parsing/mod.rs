//! # Parsing
//!
//! Three pure, synchronous parsers over whole text blobs:
//!
//! - **`timeline`**: flat list-formatted timeline text → [`Catalog`](crate::models::Catalog)
//! - **`blocks`**: constrained-Markdown document text → ordered [`Block`]s
//! - **`inline`**: one inline-bearing text run → [`InlineToken`]s
//!
//! Block parsing and inline tokenization are deliberately decoupled: blocks
//! carry untokenized text, and consumers tokenize at render time. Tokenizing
//! the same text twice is idempotent and side-effect-free.
//!
//! None of these parsers can fail. Input that doesn't match a grammar
//! degrades locally (a skipped record, a literal character, a paragraph)
//! rather than propagating an error.

pub mod blocks;
pub mod inline;
pub mod timeline;

pub use blocks::{Block, parse_blocks};
pub use inline::{InlineToken, tokenize};
pub use timeline::parse_timeline;
