/// Blockquote prefix.
pub struct Quote;

impl Quote {
    /// The blockquote prefix character.
    pub const PREFIX: char = '>';

    /// True when the line belongs to a blockquote.
    pub fn is_quote(line: &str) -> bool {
        line.trim_start().starts_with(Self::PREFIX)
    }

    /// Strips leading whitespace, one `>`, and at most one whitespace
    /// character after it. The rest of the line is one quote line.
    pub fn strip_prefix(line: &str) -> &str {
        let Some(rest) = line.trim_start().strip_prefix(Self::PREFIX) else {
            return line;
        };
        match rest.chars().next() {
            Some(c) if c.is_whitespace() => &rest[c.len_utf8()..],
            _ => rest,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_prefix_and_one_space() {
        assert_eq!(Quote::strip_prefix("> quoted"), "quoted");
        assert_eq!(Quote::strip_prefix(">quoted"), "quoted");
        // Only one space is consumed; deeper indentation survives.
        assert_eq!(Quote::strip_prefix(">   quoted"), "  quoted");
        assert_eq!(Quote::strip_prefix("  > quoted"), "quoted");
    }

    #[test]
    fn non_quote_line_is_returned_unchanged() {
        assert_eq!(Quote::strip_prefix("plain"), "plain");
    }
}
