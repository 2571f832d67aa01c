use serde::Serialize;

/// One structural unit of a parsed document, in document order.
///
/// Block types do not nest: a list item's text may carry inline spans but is
/// never re-parsed into blocks. Fields named `text`, `items`, or `lines` are
/// inline-bearing; `CodeFence` content is verbatim and never tokenized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Block {
    /// `#`–`######` heading with its level.
    Heading { level: u8, text: String },
    /// Consecutive plain lines, joined with embedded newlines.
    Paragraph { text: String },
    /// `- ` / `* ` items, markers stripped.
    BulletList { items: Vec<String> },
    /// `1. `-style items, markers stripped and numbering discarded.
    NumberedList { items: Vec<String> },
    /// Consecutive `>` lines, prefixes stripped, one entry per source line.
    Quote { lines: Vec<String> },
    /// Fenced code with its language tag (empty when none was given).
    CodeFence { lang: String, code: String },
}
