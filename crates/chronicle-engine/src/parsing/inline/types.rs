use serde::Serialize;

/// One span-level unit within a block's inline-bearing text.
///
/// `Strong` and `Link` hold nested token sequences, so the value is a pure
/// tree; in practice the dialect nests one level (a link inside a strong
/// span or vice versa), but the type places no bound on depth.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum InlineToken {
    /// Plain text. Adjacent runs always coalesce into one token.
    Text(String),
    /// Backtick-delimited code span; contents are never tokenized further.
    Code(String),
    /// `**…**` span wrapping the tokenization of its contents.
    Strong(Vec<InlineToken>),
    /// `[text](href)` span. The href is an opaque passthrough: no
    /// validation, escaping, or decoding.
    Link {
        text: Vec<InlineToken>,
        href: String,
    },
}
