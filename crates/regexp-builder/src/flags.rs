//! Pattern flags.
//!
//! Flags are single characters. A [`Flags`] set keeps them in order of first
//! appearance and never holds the same character twice, so merging the
//! configured defaults with per-build flags is a plain ordered union.

use std::fmt;

/// Report every match instead of the first one.
pub const FLAG_GLOBAL: char = 'g';

/// Match letters regardless of case.
pub const FLAG_CASE_INSENSITIVE: char = 'i';

/// Let `^` and `$` match at line boundaries.
pub const FLAG_MULTI_LINE: char = 'm';

/// Let `.` match line terminators.
pub const FLAG_DOT_ALL: char = 's';

/// Treat the pattern as a sequence of Unicode code points.
pub const FLAG_UNICODE: char = 'u';

/// Only match at the start of the searched text.
pub const FLAG_STICKY: char = 'y';

/// Every flag the engine adapter understands.
pub const SUPPORTED_FLAGS: &[char] = &[
    FLAG_GLOBAL,
    FLAG_CASE_INSENSITIVE,
    FLAG_MULTI_LINE,
    FLAG_DOT_ALL,
    FLAG_UNICODE,
    FLAG_STICKY,
];

/// An ordered, duplicate-free set of flag characters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Flags(Vec<char>);

impl Flags {
    /// Create an empty flag set.
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Add a flag unless it is already present.
    pub fn insert(&mut self, flag: char) -> &mut Self {
        if !self.0.contains(&flag) {
            self.0.push(flag);
        }
        self
    }

    /// Append every flag of `other` that is not already present.
    pub fn merge(&mut self, other: &Self) -> &mut Self {
        for &flag in &other.0 {
            self.insert(flag);
        }
        self
    }

    /// Check if a flag is present. Case-sensitive.
    #[must_use]
    pub fn contains(&self, flag: char) -> bool {
        self.0.contains(&flag)
    }

    /// Get the flags as a slice, in order.
    #[must_use]
    pub fn as_slice(&self) -> &[char] {
        &self.0
    }

    /// Get the number of flags.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if the set is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get iterator over flags.
    pub fn iter(&self) -> impl Iterator<Item = char> + '_ {
        self.0.iter().copied()
    }

    /// Find the first flag the engine adapter does not support.
    #[must_use]
    pub fn first_unsupported(&self) -> Option<char> {
        self.iter().find(|flag| !SUPPORTED_FLAGS.contains(flag))
    }
}

impl fmt::Display for Flags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.iter().try_for_each(|flag| write!(f, "{flag}"))
    }
}

impl FromIterator<char> for Flags {
    fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Self {
        let mut flags = Self::new();
        flags.extend(iter);
        flags
    }
}

impl Extend<char> for Flags {
    fn extend<I: IntoIterator<Item = char>>(&mut self, iter: I) {
        for flag in iter {
            self.insert(flag);
        }
    }
}

impl From<char> for Flags {
    fn from(flag: char) -> Self {
        Self(vec![flag])
    }
}

/// Each character of the string is one flag.
impl From<&str> for Flags {
    fn from(flags: &str) -> Self {
        flags.chars().collect()
    }
}

impl From<String> for Flags {
    fn from(flags: String) -> Self {
        Self::from(flags.as_str())
    }
}

impl From<&[&str]> for Flags {
    fn from(flags: &[&str]) -> Self {
        flags.iter().flat_map(|s| s.chars()).collect()
    }
}

impl<const N: usize> From<[&str; N]> for Flags {
    fn from(flags: [&str; N]) -> Self {
        Self::from(flags.as_slice())
    }
}

impl From<Vec<&str>> for Flags {
    fn from(flags: Vec<&str>) -> Self {
        Self::from(flags.as_slice())
    }
}

impl From<Vec<String>> for Flags {
    fn from(flags: Vec<String>) -> Self {
        flags.iter().flat_map(|s| s.chars()).collect()
    }
}

impl From<&[char]> for Flags {
    fn from(flags: &[char]) -> Self {
        flags.iter().copied().collect()
    }
}

impl From<Vec<char>> for Flags {
    fn from(flags: Vec<char>) -> Self {
        flags.into_iter().collect()
    }
}
