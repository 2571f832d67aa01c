//! Core engine for chronicle: timeline catalog parsing, the structured
//! document model, identifier canonicalization, and content loading.
//!
//! The parsers in [`parsing`] are pure and total: they take whole text blobs,
//! never perform I/O, and never fail. Everything that can fail (filesystem
//! access, a missing timeline) lives in [`io`] and [`store`].

pub mod ident;
pub mod io;
pub mod models;
pub mod parsing;
pub mod paths;
pub mod store;

pub use ident::{canonical_id, decode_article_id, encode_article_id};
pub use io::{ContentLibrary, LibraryError};
pub use models::{Catalog, CatalogEntry};
pub use parsing::{Block, InlineToken, parse_blocks, parse_timeline, tokenize};
pub use store::TimelineStore;
