//! Regex engine adapter.
//!
//! The builder only produces pattern text. Compiling it is delegated to the
//! `regex` crate, falling up to `fancy-regex` for lookahead and
//! backreferences, which the finite automata engine rejects. Engine errors
//! are passed through unmodified.

mod dialect;
mod pattern;

pub use pattern::{CompiledPattern, PatternMatch};

use pattern::Matcher;

use crate::error::{BuilderError, Result};
use crate::flags::{FLAG_CASE_INSENSITIVE, FLAG_DOT_ALL, FLAG_MULTI_LINE, Flags};

/// Flags the engine applies as an inline group rather than at match time.
const INLINE_FLAGS: &[char] = &[FLAG_CASE_INSENSITIVE, FLAG_MULTI_LINE, FLAG_DOT_ALL];

/// Compile pattern text with the given flags.
pub fn compile(source: &str, flags: impl Into<Flags>) -> Result<CompiledPattern> {
    let flags = flags.into();
    if let Some(flag) = flags.first_unsupported() {
        return Err(BuilderError::InvalidFlag { flag });
    }

    let translated = dialect::to_engine_syntax(source);
    let inline: String = flags.iter().filter(|f| INLINE_FLAGS.contains(f)).collect();
    let engine_source = if inline.is_empty() {
        translated.into_owned()
    } else {
        format!("(?{inline}){translated}")
    };

    let matcher = match regex::Regex::new(&engine_source) {
        Ok(re) => Matcher::Basic(re),
        Err(basic_err) => {
            tracing::trace!(error = %basic_err, "Falling back to backtracking engine");
            Matcher::Fancy(fancy_regex::Regex::new(&engine_source)?)
        }
    };

    tracing::debug!(
        source = %source,
        flags = %flags,
        backtracking = matches!(matcher, Matcher::Fancy(_)),
        "Compiled pattern"
    );

    Ok(CompiledPattern::new(source.to_string(), flags, matcher))
}
