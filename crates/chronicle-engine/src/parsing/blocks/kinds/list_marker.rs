/// Bullet and numbered list item markers.
pub struct ListMarker;

impl ListMarker {
    /// Characters that open a bullet item.
    pub const BULLETS: [char; 2] = ['-', '*'];

    /// Strips `<ws><bullet><ws...>` from a bullet item line, returning the
    /// item text, or `None` when the line is not a bullet item.
    pub fn strip_bullet(line: &str) -> Option<&str> {
        let rest = line.trim_start().strip_prefix(Self::BULLETS)?;
        if !rest.chars().next()?.is_whitespace() {
            return None;
        }
        Some(rest.trim_start())
    }

    /// Strips `<ws><digits>.<ws...>` from a numbered item line, returning
    /// the item text. The numeric value is discarded: numbering is
    /// presentational and never tracked.
    pub fn strip_numbered(line: &str) -> Option<&str> {
        let rest = line.trim_start();
        let digits = rest.chars().take_while(char::is_ascii_digit).count();
        if digits == 0 {
            return None;
        }
        let rest = rest[digits..].strip_prefix('.')?;
        if !rest.chars().next()?.is_whitespace() {
            return None;
        }
        Some(rest.trim_start())
    }

    pub fn is_bullet(line: &str) -> bool {
        Self::strip_bullet(line).is_some()
    }

    pub fn is_numbered(line: &str) -> bool {
        Self::strip_numbered(line).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_bullet_markers() {
        assert_eq!(ListMarker::strip_bullet("- item"), Some("item"));
        assert_eq!(ListMarker::strip_bullet("* item"), Some("item"));
        assert_eq!(ListMarker::strip_bullet("  -   indented"), Some("indented"));
        assert_eq!(ListMarker::strip_bullet("-no space"), None);
        assert_eq!(ListMarker::strip_bullet("-"), None);
        assert_eq!(ListMarker::strip_bullet("plain"), None);
    }

    #[test]
    fn strips_numbered_markers() {
        assert_eq!(ListMarker::strip_numbered("1. first"), Some("first"));
        assert_eq!(ListMarker::strip_numbered("  12.  two"), Some("two"));
        assert_eq!(ListMarker::strip_numbered("1.missing"), None);
        assert_eq!(ListMarker::strip_numbered(".dot"), None);
        assert_eq!(ListMarker::strip_numbered("1 no dot"), None);
    }

    #[test]
    fn bullet_text_keeps_trailing_whitespace() {
        assert_eq!(ListMarker::strip_bullet("- item  "), Some("item  "));
    }
}
