//! Literal text escaping.

/// Characters escaped with a backslash when literal text is inserted.
pub const REGEX_CHARACTERS: &[char] = &['(', ')', '/', '.', '*', '?', '+', '$', '^', '=', '!'];

/// Check if a character is escaped by [`escape`].
#[must_use]
pub fn is_escaped(c: char) -> bool {
    REGEX_CHARACTERS.contains(&c)
}

/// Prefix every character of [`REGEX_CHARACTERS`] with a backslash.
///
/// Characters outside that set, including `[`, `{`, `|` and `\`, are copied
/// as they are.
#[must_use]
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        if is_escaped(c) {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_every_regex_character() {
        assert_eq!(escape("()/.*?+$^=!"), r"\(\)\/\.\*\?\+\$\^\=\!");
    }

    #[test]
    fn leaves_other_text() {
        assert_eq!(escape("abc 123"), "abc 123");
        assert_eq!(escape("[a]{1}|"), "[a]{1}|");
        assert_eq!(escape(""), "");
    }

    #[test]
    fn mixed_text() {
        assert_eq!(escape("?abc../d"), r"\?abc\.\.\/d");
        assert_eq!(escape("ab?"), r"ab\?");
    }
}
