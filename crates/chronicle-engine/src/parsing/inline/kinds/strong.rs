/// Strong-emphasis delimiter. Contents are tokenized recursively.
pub struct Strong;

impl Strong {
    /// The `**` marker that opens and closes a strong span.
    pub const MARKER: &'static str = "**";
}
