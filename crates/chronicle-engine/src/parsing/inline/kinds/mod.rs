//! Per-construct delimiter constants for inline tokenization.
//!
//! Delimiter knowledge lives with the construct that owns it; the parser
//! composes these constants and never hardcodes `` ` ``, `**`, or `[`.

pub mod code_span;
pub mod link;
pub mod strong;

pub use code_span::CodeSpan;
pub use link::Link;
pub use strong::Strong;
