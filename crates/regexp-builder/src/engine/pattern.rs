//! Compiled pattern types.

use std::fmt;

use crate::error::Result;
use crate::flags::{
    FLAG_CASE_INSENSITIVE, FLAG_DOT_ALL, FLAG_GLOBAL, FLAG_MULTI_LINE, FLAG_STICKY, FLAG_UNICODE,
    Flags,
};

/// The engine that accepted a pattern.
#[derive(Clone, Debug)]
pub(crate) enum Matcher {
    /// Finite automata engine, no lookaround or backreferences.
    Basic(regex::Regex),
    /// Backtracking engine for everything the basic engine rejects.
    Fancy(fancy_regex::Regex),
}

/// A compiled regular expression with its source pattern and flags.
#[derive(Clone)]
pub struct CompiledPattern {
    source: String,
    flags: Flags,
    matcher: Matcher,
}

impl CompiledPattern {
    pub(crate) const fn new(source: String, flags: Flags, matcher: Matcher) -> Self {
        Self {
            source,
            flags,
            matcher,
        }
    }

    /// Get the source pattern, without delimiters or flags.
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Get the active flags.
    #[must_use]
    pub const fn flags(&self) -> &Flags {
        &self.flags
    }

    /// Check the global flag.
    #[must_use]
    pub fn is_global(&self) -> bool {
        self.flags.contains(FLAG_GLOBAL)
    }

    /// Check the case-insensitive flag.
    #[must_use]
    pub fn ignore_case(&self) -> bool {
        self.flags.contains(FLAG_CASE_INSENSITIVE)
    }

    /// Check the multi-line flag.
    #[must_use]
    pub fn multiline(&self) -> bool {
        self.flags.contains(FLAG_MULTI_LINE)
    }

    /// Check the dot-all flag.
    #[must_use]
    pub fn dot_all(&self) -> bool {
        self.flags.contains(FLAG_DOT_ALL)
    }

    /// Check the unicode flag.
    #[must_use]
    pub fn unicode(&self) -> bool {
        self.flags.contains(FLAG_UNICODE)
    }

    /// Check the sticky flag.
    #[must_use]
    pub fn sticky(&self) -> bool {
        self.flags.contains(FLAG_STICKY)
    }

    /// Check if the pattern needed the backtracking engine.
    #[must_use]
    pub const fn is_backtracking(&self) -> bool {
        matches!(self.matcher, Matcher::Fancy(_))
    }

    /// Check if the pattern matches the text.
    ///
    /// Fails only if the backtracking engine gives up on the input.
    pub fn is_match(&self, text: &str) -> Result<bool> {
        Ok(self.find(text)?.is_some())
    }

    /// Find the first match. With the sticky flag the match must start at
    /// the beginning of the text.
    pub fn find(&self, text: &str) -> Result<Option<PatternMatch>> {
        let found = self.find_at(text, 0)?;
        Ok(found.filter(|m| !self.sticky() || m.start == 0))
    }

    /// Find every match when the global flag is set, otherwise at most one.
    ///
    /// Sticky global matching stops at the first gap between matches.
    pub fn find_all(&self, text: &str) -> Result<Vec<PatternMatch>> {
        if !self.is_global() {
            return Ok(self.find(text)?.into_iter().collect());
        }

        let mut matches = Vec::new();
        let mut pos = 0;
        while pos <= text.len() {
            let Some(m) = self.find_at(text, pos)? else {
                break;
            };
            if self.sticky() && m.start != pos {
                break;
            }
            pos = if m.is_empty() {
                // step over one character so an empty match cannot repeat
                m.end + text[m.end..].chars().next().map_or(1, char::len_utf8)
            } else {
                m.end
            };
            matches.push(m);
        }
        Ok(matches)
    }

    /// Get the capture groups of the first match.
    pub fn captures(&self, text: &str) -> Result<Vec<String>> {
        Ok(self.find(text)?.map(|m| m.captures).unwrap_or_default())
    }

    fn find_at(&self, text: &str, pos: usize) -> Result<Option<PatternMatch>> {
        let found = match &self.matcher {
            Matcher::Basic(re) => re.captures_at(text, pos).and_then(|caps| {
                let whole = caps.get(0)?;
                Some(PatternMatch {
                    start: whole.start(),
                    end: whole.end(),
                    captures: caps
                        .iter()
                        .skip(1) // Skip the full match
                        .filter_map(|m| m.map(|m| m.as_str().to_string()))
                        .collect(),
                })
            }),
            Matcher::Fancy(re) => re.captures_from_pos(text, pos)?.and_then(|caps| {
                let whole = caps.get(0)?;
                Some(PatternMatch {
                    start: whole.start(),
                    end: whole.end(),
                    captures: (1..caps.len())
                        .filter_map(|i| caps.get(i))
                        .map(|m| m.as_str().to_string())
                        .collect(),
                })
            }),
        };
        Ok(found)
    }
}

impl fmt::Display for CompiledPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "/{}/{}", self.source, self.flags)
    }
}

impl fmt::Debug for CompiledPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompiledPattern")
            .field("source", &self.source)
            .field("flags", &self.flags.to_string())
            .field("backtracking", &self.is_backtracking())
            .finish()
    }
}

/// Result of a successful pattern match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternMatch {
    /// Start position of the match in the text.
    pub start: usize,
    /// End position of the match in the text.
    pub end: usize,
    /// Capture groups that participated in the match.
    pub captures: Vec<String>,
}

impl PatternMatch {
    /// Get the matched text from the original input.
    #[must_use]
    pub fn as_str<'a>(&self, text: &'a str) -> &'a str {
        &text[self.start..self.end]
    }

    /// Get the length of the match.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.end - self.start
    }

    /// Check if the match is empty.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }
}
