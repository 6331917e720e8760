use unicode_width::UnicodeWidthStr;

/// Display width of a string in terminal cells.
///
/// Emoji and fullwidth CJK count as two cells; control characters count as
/// zero.
pub fn display_width(text: &str) -> u16 {
    text.width() as u16
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii_is_one_cell_per_char() {
        assert_eq!(display_width("Cup"), 3);
        assert_eq!(display_width(""), 0);
    }

    #[test]
    fn emoji_are_double_width() {
        assert_eq!(display_width("☕"), 2);
        assert_eq!(display_width("🦀"), 2);
    }

    #[test]
    fn control_characters_are_zero_width() {
        assert_eq!(display_width("a\u{7}b"), 2);
    }
}
