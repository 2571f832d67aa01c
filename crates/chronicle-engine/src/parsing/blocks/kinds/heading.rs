/// ATX-style heading prefix.
pub struct Heading;

impl Heading {
    /// The heading prefix character.
    pub const MARKER: char = '#';
    /// Deepest recognized heading level.
    pub const MAX_LEVEL: usize = 6;

    /// Splits a heading line into `(level, text)`.
    ///
    /// Headings start at column zero: one to six `#` characters followed by
    /// at least one whitespace character. The text is the trimmed remainder
    /// of the line.
    pub fn parse(line: &str) -> Option<(u8, &str)> {
        let level = line.chars().take_while(|&c| c == Self::MARKER).count();
        if level == 0 || level > Self::MAX_LEVEL {
            return None;
        }
        let rest = &line[level..];
        if !rest.chars().next()?.is_whitespace() {
            return None;
        }
        Some((level as u8, rest.trim()))
    }

    /// True when the line would open a heading. Used by the paragraph rule's
    /// lookahead.
    pub fn is_heading(line: &str) -> bool {
        Self::parse(line).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_each_level() {
        for level in 1..=6usize {
            let line = format!("{} 标题", "#".repeat(level));
            assert_eq!(Heading::parse(&line), Some((level as u8, "标题")));
        }
    }

    #[test]
    fn seven_hashes_is_not_a_heading() {
        assert_eq!(Heading::parse("####### deep"), None);
    }

    #[test]
    fn requires_whitespace_after_hashes() {
        assert_eq!(Heading::parse("#tag"), None);
        assert_eq!(Heading::parse("#"), None);
    }

    #[test]
    fn does_not_match_indented_hashes() {
        assert_eq!(Heading::parse("  # indented"), None);
    }

    #[test]
    fn empty_heading_text_is_allowed() {
        assert_eq!(Heading::parse("## "), Some((2, "")));
    }
}
