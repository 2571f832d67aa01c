use super::kinds::{CodeFence, Heading, ListMarker, Quote};
use super::types::Block;

/// Parses a whole document into an ordered sequence of [`Block`]s.
///
/// One forward pass over the lines. At each group start the constructs are
/// tried in fixed order: fenced code, heading, blockquote, bullet list,
/// numbered list, blank line, paragraph. A paragraph then absorbs following
/// lines until a blank line or a line that would start any other construct;
/// that line is left for the next iteration rather than consumed.
///
/// Total: there is no input this function rejects. An unterminated fence
/// consumes to end of input, and empty input yields no blocks.
pub fn parse_blocks(text: &str) -> Vec<Block> {
    let lines: Vec<&str> = text.lines().collect();
    let mut blocks = Vec::new();
    let mut i = 0;

    while i < lines.len() {
        let line = lines[i];

        if CodeFence::is_fence(line) {
            let lang = CodeFence::lang(line).to_string();
            i += 1;
            let mut code_lines = Vec::new();
            while i < lines.len() && !CodeFence::is_fence(lines[i]) {
                code_lines.push(lines[i]);
                i += 1;
            }
            // Step past the closing fence; at end of input this is a no-op.
            i += 1;
            blocks.push(Block::CodeFence {
                lang,
                code: code_lines.join("\n"),
            });
            continue;
        }

        if let Some((level, text)) = Heading::parse(line) {
            blocks.push(Block::Heading {
                level,
                text: text.to_string(),
            });
            i += 1;
            continue;
        }

        if Quote::is_quote(line) {
            let mut quote_lines = Vec::new();
            while i < lines.len() && Quote::is_quote(lines[i]) {
                quote_lines.push(Quote::strip_prefix(lines[i]).to_string());
                i += 1;
            }
            blocks.push(Block::Quote { lines: quote_lines });
            continue;
        }

        if ListMarker::is_bullet(line) {
            let mut items = Vec::new();
            while i < lines.len() {
                match ListMarker::strip_bullet(lines[i]) {
                    Some(item) => {
                        items.push(item.to_string());
                        i += 1;
                    }
                    None => break,
                }
            }
            blocks.push(Block::BulletList { items });
            continue;
        }

        if ListMarker::is_numbered(line) {
            let mut items = Vec::new();
            while i < lines.len() {
                match ListMarker::strip_numbered(lines[i]) {
                    Some(item) => {
                        items.push(item.to_string());
                        i += 1;
                    }
                    None => break,
                }
            }
            blocks.push(Block::NumberedList { items });
            continue;
        }

        if line.trim().is_empty() {
            i += 1;
            continue;
        }

        let mut para_lines = vec![line];
        i += 1;
        while i < lines.len() && !lines[i].trim().is_empty() && !starts_construct(lines[i]) {
            para_lines.push(lines[i]);
            i += 1;
        }
        blocks.push(Block::Paragraph {
            text: para_lines.join("\n"),
        });
    }

    blocks
}

/// True when a line would open any non-paragraph construct. A paragraph
/// never absorbs such a line.
fn starts_construct(line: &str) -> bool {
    CodeFence::is_fence(line)
        || Heading::is_heading(line)
        || Quote::is_quote(line)
        || ListMarker::is_bullet(line)
        || ListMarker::is_numbered(line)
}
