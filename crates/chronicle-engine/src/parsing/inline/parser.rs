use super::cursor::Cursor;
use super::kinds::{CodeSpan, Link, Strong};
use super::types::InlineToken;

/// Tokenizes one inline-bearing text run into [`InlineToken`]s.
///
/// Single forward scan. At each position the delimited constructs are tried
/// in precedence order (code span, strong span, link); on a match the
/// pending plain text is flushed first, so text runs stay coalesced. A
/// position where nothing matches contributes one byte to the pending text.
///
/// Total: no input fails. Unmatched openers are literal text.
pub fn tokenize(input: &str) -> Vec<InlineToken> {
    let mut tokens = Vec::new();
    let mut cur = Cursor::new(input);
    let mut text_start = 0;

    while !cur.eof() {
        let at = cur.pos();
        let matched = try_code_span(&mut cur)
            .or_else(|| try_strong(&mut cur))
            .or_else(|| try_link(&mut cur));
        match matched {
            Some(token) => {
                flush_text(&mut tokens, input, text_start, at);
                tokens.push(token);
                text_start = cur.pos();
            }
            None => cur.bump(),
        }
    }

    flush_text(&mut tokens, input, text_start, cur.pos());
    tokens
}

fn flush_text(tokens: &mut Vec<InlineToken>, input: &str, start: usize, end: usize) {
    if end > start {
        tokens.push(InlineToken::Text(input[start..end].to_string()));
    }
}

/// Code span at the cursor: `` ` `` to the next `` ` ``.
///
/// `None` when not at a backtick or when no closing backtick exists; the
/// cursor is untouched on failure.
fn try_code_span(cur: &mut Cursor) -> Option<InlineToken> {
    if cur.peek() != Some(CodeSpan::TICK) {
        return None;
    }
    let inner = &cur.rest()[1..];
    let close = inner.find(CodeSpan::TICK as char)?;
    let value = inner[..close].to_string();
    cur.bump_n(1 + close + 1);
    Some(InlineToken::Code(value))
}

/// Strong span at the cursor: `**` to the next `**`, contents tokenized
/// recursively.
fn try_strong(cur: &mut Cursor) -> Option<InlineToken> {
    if !cur.starts_with(Strong::MARKER) {
        return None;
    }
    let inner = &cur.rest()[Strong::MARKER.len()..];
    let close = inner.find(Strong::MARKER)?;
    let children = tokenize(&inner[..close]);
    cur.bump_n(Strong::MARKER.len() + close + Strong::MARKER.len());
    Some(InlineToken::Strong(children))
}

/// Link at the cursor: `[text](href)`.
///
/// The shape requires the `](` separator to appear before the first `)`;
/// otherwise the opener is literal. Link text is tokenized recursively, the
/// href is taken verbatim.
fn try_link(cur: &mut Cursor) -> Option<InlineToken> {
    if cur.peek() != Some(Link::OPEN) {
        return None;
    }
    let rest = &cur.rest()[1..];
    let mid = rest.find(Link::SEPARATOR)?;
    let close = rest.find(Link::CLOSE as char)?;
    if close <= mid {
        return None;
    }
    let text = tokenize(&rest[..mid]);
    let href = rest[mid + Link::SEPARATOR.len()..close].to_string();
    cur.bump_n(1 + close + 1);
    Some(InlineToken::Link { text, href })
}
