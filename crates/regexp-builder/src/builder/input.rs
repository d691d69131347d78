//! Values accepted by [`RegExpBuilder::matches`](super::RegExpBuilder::matches).

use super::RegExpBuilder;
use crate::engine::CompiledPattern;

/// A value that can be inserted into a pattern.
#[derive(Debug, Clone, Copy)]
pub enum PatternInput<'a> {
    /// Literal text, escaped on insertion.
    Text(&'a str),
    /// A compiled pattern, inserted as its source.
    Pattern(&'a CompiledPattern),
    /// A builder, built and inserted as its source.
    Builder(&'a RegExpBuilder),
    /// Anything else. Always rejected.
    Unsupported {
        /// Name of the rejected value's type.
        kind: &'static str,
    },
}

impl<'a> From<&'a str> for PatternInput<'a> {
    fn from(text: &'a str) -> Self {
        Self::Text(text)
    }
}

impl<'a> From<&'a String> for PatternInput<'a> {
    fn from(text: &'a String) -> Self {
        Self::Text(text)
    }
}

impl<'a> From<&'a CompiledPattern> for PatternInput<'a> {
    fn from(pattern: &'a CompiledPattern) -> Self {
        Self::Pattern(pattern)
    }
}

impl<'a> From<&'a RegExpBuilder> for PatternInput<'a> {
    fn from(builder: &'a RegExpBuilder) -> Self {
        Self::Builder(builder)
    }
}

impl<'a, T: Into<PatternInput<'a>>> From<Option<T>> for PatternInput<'a> {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Unsupported { kind: "none" }, Into::into)
    }
}
