//! Per-construct delimiter knowledge for block parsing.
//!
//! Each block kind owns its syntax constants and line predicates; the
//! parser composes these and never hardcodes a delimiter itself.

pub mod code_fence;
pub mod heading;
pub mod list_marker;
pub mod quote;

pub use code_fence::CodeFence;
pub use heading::Heading;
pub use list_marker::ListMarker;
pub use quote::Quote;
