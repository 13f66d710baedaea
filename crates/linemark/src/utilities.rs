//! Line terminator handling shared by the grammar and the line-break finalizer.

/// Characters that end a line. `\r\n` and `\n\r` pair into a single terminator.
pub const LINE_TERMINATORS: &[char] = &[
    '\n', '\r', '\u{0B}', '\u{0C}', '\u{2028}', '\u{2029}',
];

/// Regex class body matching any line terminator character
pub(crate) const EOL_CLASS: &str = r"\r\n\v\f\x{2028}\x{2029}";

/// Output marker inserted before every line terminator
pub const BREAK_TAG: &str = "<br>";

/// Check if a character ends a line
pub fn is_line_terminator(c: char) -> bool {
    LINE_TERMINATORS.contains(&c)
}

/// Byte length of the terminator at the start of `s`, if there is one.
pub fn terminator_len(s: &str) -> Option<usize> {
    if s.starts_with("\r\n") || s.starts_with("\n\r") {
        return Some(2);
    }
    s.chars()
        .next()
        .filter(|&c| is_line_terminator(c))
        .map(char::len_utf8)
}

/// The character immediately before byte offset `at`
pub(crate) fn char_before(text: &str, at: usize) -> Option<char> {
    text[..at].chars().next_back()
}

/// The character starting at byte offset `at`
pub(crate) fn char_at(text: &str, at: usize) -> Option<char> {
    text[at..].chars().next()
}
