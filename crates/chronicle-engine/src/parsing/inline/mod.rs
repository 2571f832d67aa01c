//! # Inline Tokenization
//!
//! Recursive-descent tokenization of one inline-bearing text run into
//! [`InlineToken`]s: plain text, code spans, strong spans, links.
//!
//! A single forward scan tries the three delimited constructs at each
//! position, in precedence order; code spans win first and suppress
//! everything inside them. An opener with no matching closer is literal
//! text — there is no escaping mechanism, and that limitation is part of
//! the dialect, not something to paper over.
//!
//! Plain text accumulates between matches and is flushed as one coalesced
//! `Text` token; no input ever produces adjacent `Text` tokens.
//!
//! ## Modules
//!
//! - **`types`**: the [`InlineToken`] union
//! - **`kinds`**: per-construct delimiter constants
//! - **`cursor`**: byte cursor for the scan loop
//! - **`parser`**: [`tokenize`] with its `try_*` helpers

pub mod cursor;
pub mod kinds;
pub mod parser;
pub mod types;

pub use parser::tokenize;
pub use types::InlineToken;
