//! Translation of builder escapes the regex engine spells differently.

use std::borrow::Cow;

/// Rewrite the escapes the engine does not accept verbatim.
///
/// `\0` (null, not followed by a digit) becomes `\x00`, and `\b` inside a
/// character class (backspace) becomes `\x08`. Everything else is copied.
pub(crate) fn to_engine_syntax(source: &str) -> Cow<'_, str> {
    if !source.contains('\\') {
        return Cow::Borrowed(source);
    }

    let mut out = String::with_capacity(source.len() + 8);
    let mut chars = source.chars().peekable();
    let mut in_class = false;

    while let Some(c) = chars.next() {
        match c {
            '\\' => match chars.next() {
                Some('0') if !chars.peek().is_some_and(char::is_ascii_digit) => {
                    out.push_str(r"\x00");
                }
                Some('b') if in_class => out.push_str(r"\x08"),
                Some(escaped) => {
                    out.push('\\');
                    out.push(escaped);
                }
                None => out.push('\\'),
            },
            '[' if !in_class => {
                in_class = true;
                out.push(c);
            }
            ']' if in_class => {
                in_class = false;
                out.push(c);
            }
            _ => out.push(c),
        }
    }

    Cow::Owned(out)
}
