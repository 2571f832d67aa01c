/// Code span delimiter.
///
/// Code spans are raw zones: their contents are emitted verbatim and no
/// other construct is recognized inside them.
pub struct CodeSpan;

impl CodeSpan {
    /// The backtick that opens and closes a code span.
    pub const TICK: u8 = b'`';
}
