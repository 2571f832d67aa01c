/// Fenced code block delimiter.
///
/// Fences are raw zones: every line between the opening and closing marker
/// is kept verbatim, and no other construct is recognized inside.
pub struct CodeFence;

impl CodeFence {
    /// The three-backtick fence marker.
    pub const MARKER: &'static str = "```";

    /// True when the line (after trimming) opens or closes a fence.
    pub fn is_fence(line: &str) -> bool {
        line.trim().starts_with(Self::MARKER)
    }

    /// Language tag of an opening fence line: the text after the marker,
    /// trimmed. Empty when the fence carries no tag.
    pub fn lang(line: &str) -> &str {
        line.trim().strip_prefix(Self::MARKER).unwrap_or("").trim()
    }
}
