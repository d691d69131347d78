//! The fluent pattern builder.
//!
//! A [`RegExpBuilder`] owns a pattern buffer and a validation stack. Each
//! chaining operation appends one fragment of regex syntax; begin and end
//! operations additionally push and pop markers so that [`build`] can refuse
//! patterns whose groups or lookaheads are unbalanced.
//!
//! # Example
//!
//! ```
//! use regexp_builder::RegExpBuilder;
//!
//! let mut builder = RegExpBuilder::new();
//! builder
//!     .begin_group()
//!     .matches_letter()
//!     .end_group()?
//!     .use_group(1);
//!
//! let pattern = builder.build()?;
//! assert_eq!(pattern.source(), r"([a-zA-Z])\1");
//! assert!(pattern.is_match("xx")?);
//! # Ok::<(), regexp_builder::BuilderError>(())
//! ```
//!
//! [`build`]: RegExpBuilder::build

mod input;
mod stack;
mod text;

use std::borrow::Cow;
use std::fmt;

pub use input::PatternInput;
pub use stack::{MarkerKind, ValidationStack};
pub use text::{REGEX_CHARACTERS, escape};

use crate::alias::{Alias, AliasRegistry};
use crate::config::{BuilderConfig, ConfigValue, ConfigWarning};
use crate::engine::{self, CompiledPattern};
use crate::error::{BuilderError, Result};
use crate::flags::Flags;

/// Assembles a regular expression from named operations.
///
/// Not meant to be shared: every operation takes `&mut self`.
#[derive(Debug, Clone, Default)]
pub struct RegExpBuilder {
    pattern: String,
    stack: ValidationStack,
    config: BuilderConfig,
    aliases: AliasRegistry,
}

impl RegExpBuilder {
    /// Create a builder with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder with an already validated configuration.
    #[must_use]
    pub fn with_config(config: BuilderConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Create a builder from raw options.
    ///
    /// Unusable options are logged and replaced by their defaults; use
    /// [`load`](Self::load) to inspect the warnings.
    #[must_use]
    pub fn with_options(raw: &ConfigValue) -> Self {
        Self::load(Some(raw)).0
    }

    /// Create a builder from raw options, returning the configuration warnings.
    #[must_use]
    pub fn load(raw: Option<&ConfigValue>) -> (Self, Vec<ConfigWarning>) {
        let (config, warnings) = BuilderConfig::load(raw);
        (Self::with_config(config), warnings)
    }

    /// Get a snapshot of the configuration.
    #[must_use]
    pub fn configuration(&self) -> BuilderConfig {
        self.config.clone()
    }

    /// Get the pattern assembled so far, without any build-time wrapping.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.pattern
    }

    /// Open statements, outermost first.
    #[must_use]
    pub fn open_statements(&self) -> &[MarkerKind] {
        self.stack.markers()
    }

    fn push(&mut self, fragment: &str) -> &mut Self {
        self.pattern.push_str(fragment);
        self
    }

    fn open(&mut self, kind: MarkerKind, fragment: &str) -> &mut Self {
        self.stack.push(kind);
        self.push(fragment)
    }

    fn close(&mut self, kind: MarkerKind) -> Result<&mut Self> {
        self.stack.pop(kind, self.config.group_validation)?;
        Ok(self.push(")"))
    }

    // ######### matches #########

    /// Insert text, a compiled pattern or another builder.
    ///
    /// Text is escaped like [`matches_text`](Self::matches_text). Patterns and
    /// builders are inserted as their source without a surrounding group, so
    /// a following quantifier binds only to their last atom.
    pub fn matches<'a>(&mut self, input: impl Into<PatternInput<'a>>) -> Result<&mut Self> {
        match input.into() {
            PatternInput::Text(text) => Ok(self.matches_text(text)),
            PatternInput::Pattern(pattern) => Ok(self.matches_regexp(pattern)),
            PatternInput::Builder(builder) => self.matches_builder(builder),
            PatternInput::Unsupported { kind } => Err(BuilderError::illegal_argument(format!(
                "Illegal argument of type {kind}"
            ))),
        }
    }

    /// Append text verbatim, without escaping or grouping.
    pub fn matches_free_text(&mut self, text: &str) -> &mut Self {
        self.push(text)
    }

    /// Append the source of a compiled pattern.
    pub fn matches_regexp(&mut self, pattern: &CompiledPattern) -> &mut Self {
        self.push(pattern.source())
    }

    /// Build another builder and append its source.
    ///
    /// Fails if the nested builder fails to build.
    pub fn matches_builder(&mut self, builder: &Self) -> Result<&mut Self> {
        let pattern = builder.build()?;
        Ok(self.matches_regexp(&pattern))
    }

    /// Match any single character (`.`).
    pub fn matches_any(&mut self) -> &mut Self {
        self.push(".")
    }

    /// Match one of the given characters (`[...]`). Not escaped.
    pub fn matches_for(&mut self, characters: &str) -> &mut Self {
        self.push("[");
        self.push(characters);
        self.push("]")
    }

    /// Synonym for [`matches_for`](Self::matches_for).
    pub fn matches_one_of(&mut self, characters: &str) -> &mut Self {
        self.matches_for(characters)
    }

    /// Match any character except the given ones (`[^...]`). Not escaped.
    pub fn matches_not_for(&mut self, characters: &str) -> &mut Self {
        self.push("[^");
        self.push(characters);
        self.push("]")
    }

    /// Synonym for [`matches_not_for`](Self::matches_not_for).
    pub fn matches_not_one_of(&mut self, characters: &str) -> &mut Self {
        self.matches_not_for(characters)
    }

    /// Match a digit (`[0-9]`).
    pub fn matches_digit(&mut self) -> &mut Self {
        self.matches_for("0-9")
    }

    /// Match anything but a digit (`[^0-9]`).
    pub fn matches_non_digit(&mut self) -> &mut Self {
        self.matches_not_for("0-9")
    }

    /// Match a form feed (`\f`).
    pub fn matches_form_feed(&mut self) -> &mut Self {
        self.push(r"\f")
    }

    /// Match a line feed (`\n`).
    pub fn matches_line_feed(&mut self) -> &mut Self {
        self.push(r"\n")
    }

    /// Match a carriage return (`\r`).
    pub fn matches_carriage_return(&mut self) -> &mut Self {
        self.push(r"\r")
    }

    /// Match a whitespace character (`\s`).
    pub fn matches_white_space(&mut self) -> &mut Self {
        self.push(r"\s")
    }

    /// Match a non-whitespace character (`\S`).
    pub fn matches_not_white_space(&mut self) -> &mut Self {
        self.push(r"\S")
    }

    /// Match a tab (`\t`).
    pub fn matches_tab(&mut self) -> &mut Self {
        self.push(r"\t")
    }

    /// Match a vertical tab (`\v`).
    pub fn matches_vertical_tab(&mut self) -> &mut Self {
        self.push(r"\v")
    }

    /// Match a word character (`\w`).
    pub fn matches_alphanumeric(&mut self) -> &mut Self {
        self.push(r"\w")
    }

    /// Match a non-word character (`\W`).
    pub fn matches_non_alphanumeric(&mut self) -> &mut Self {
        self.push(r"\W")
    }

    /// Match the null character (`\0`).
    pub fn matches_null(&mut self) -> &mut Self {
        self.push(r"\0")
    }

    /// Match an ASCII letter (`[a-zA-Z]`).
    pub fn matches_letter(&mut self) -> &mut Self {
        self.matches_for("a-zA-Z")
    }

    /// Match an uppercase ASCII letter (`[A-Z]`).
    pub fn matches_uppercase_letter(&mut self) -> &mut Self {
        self.matches_for("A-Z")
    }

    /// Match a lowercase ASCII letter (`[a-z]`).
    pub fn matches_lowercase_letter(&mut self) -> &mut Self {
        self.matches_for("a-z")
    }

    /// Match a backspace (`[\b]`).
    pub fn matches_backspace(&mut self) -> &mut Self {
        self.push(r"[\b]")
    }

    /// Match literal text.
    ///
    /// Regex characters are escaped. Multi-character text goes into a
    /// non-capturing group so that a following quantifier applies to all of
    /// it, or into a capturing group when `wrapTextInsideGroup` is set.
    /// Empty text is ignored.
    pub fn matches_text(&mut self, text: &str) -> &mut Self {
        self.insert_text(text, false)
    }

    /// Match literal text inside a capturing group.
    pub fn matches_captured_text(&mut self, text: &str) -> &mut Self {
        self.insert_text(text, true)
    }

    fn insert_text(&mut self, text: &str, force_group: bool) -> &mut Self {
        if text.is_empty() {
            return self;
        }

        let escaped = escape(text);
        if self.config.wrap_text_inside_group || force_group {
            self.push("(");
            self.push(&escaped);
            self.push(")")
        } else if text.chars().count() == 1 {
            self.push(&escaped)
        } else {
            self.push("(?:");
            self.push(&escaped);
            self.push(")")
        }
    }

    // ######### How many times #########

    /// Repeat the previous atom `min` times, or between `min` and `max` times.
    pub fn matches_times(&mut self, min: u32, max: impl Into<Option<u32>>) -> &mut Self {
        let fragment = match max.into() {
            Some(max) => format!("{{{min},{max}}}"),
            None => format!("{{{min}}}"),
        };
        self.push(&fragment)
    }

    /// Synonym for [`matches_times`](Self::matches_times).
    pub fn with_constraint(&mut self, min: u32, max: impl Into<Option<u32>>) -> &mut Self {
        self.matches_times(min, max)
    }

    /// Repeat the previous atom one or more times (`+`).
    pub fn one_or_more_times(&mut self) -> &mut Self {
        self.push("+")
    }

    /// Repeat the previous atom zero or more times (`*`).
    pub fn zero_or_more_times(&mut self) -> &mut Self {
        self.push("*")
    }

    /// Make the previous atom optional (`?`).
    pub fn zero_or_one_times(&mut self) -> &mut Self {
        self.push("?")
    }

    /// Make the previous quantifier lazy (`?`).
    pub fn with_not_greedy(&mut self) -> &mut Self {
        self.push("?")
    }

    // ######### Control Signs #########

    /// Match a word boundary (`\b`).
    pub fn matches_word_boundary(&mut self) -> &mut Self {
        self.push(r"\b")
    }

    /// Match a position that is not a word boundary (`\B`).
    pub fn matches_not_word_boundary(&mut self) -> &mut Self {
        self.push(r"\B")
    }

    /// Match the beginning of the input or line (`^`).
    pub fn begin_line(&mut self) -> &mut Self {
        self.push("^")
    }

    /// Match the end of the input or line (`$`).
    pub fn end_line(&mut self) -> &mut Self {
        self.push("$")
    }

    // ######### Groups #########

    /// Open a capturing group (`(`).
    pub fn begin_group(&mut self) -> &mut Self {
        self.open(MarkerKind::Group, "(")
    }

    /// Open a non-capturing group (`(?:`).
    pub fn begin_non_captured_group(&mut self) -> &mut Self {
        self.open(MarkerKind::Group, "(?:")
    }

    /// Close the innermost group (`)`).
    pub fn end_group(&mut self) -> Result<&mut Self> {
        self.close(MarkerKind::Group)
    }

    /// Synonym for [`end_group`](Self::end_group).
    pub fn end_non_captured_group(&mut self) -> Result<&mut Self> {
        self.end_group()
    }

    /// Open a positive lookahead (`(?=`).
    pub fn start_look_ahead_for(&mut self) -> &mut Self {
        self.open(MarkerKind::LookAhead, "(?=")
    }

    /// Synonym for [`start_look_ahead_for`](Self::start_look_ahead_for).
    pub fn if_followed_by(&mut self) -> &mut Self {
        self.start_look_ahead_for()
    }

    /// Open a negative lookahead (`(?!`).
    pub fn start_negated_look_ahead(&mut self) -> &mut Self {
        self.open(MarkerKind::LookAhead, "(?!")
    }

    /// Synonym for [`start_negated_look_ahead`](Self::start_negated_look_ahead).
    pub fn if_not_followed_by(&mut self) -> &mut Self {
        self.start_negated_look_ahead()
    }

    /// Close the innermost lookahead, positive or negative (`)`).
    pub fn end_look_ahead(&mut self) -> Result<&mut Self> {
        self.close(MarkerKind::LookAhead)
    }

    /// Synonym for [`end_look_ahead`](Self::end_look_ahead).
    pub fn end_negated_look_ahead(&mut self) -> Result<&mut Self> {
        self.end_look_ahead()
    }

    /// Synonym for [`end_look_ahead`](Self::end_look_ahead), reading as
    /// "if followed by ... match".
    pub fn match_end(&mut self) -> Result<&mut Self> {
        self.end_look_ahead()
    }

    /// Match the text captured by group `group` (`\n`). Not checked against
    /// the groups actually declared.
    pub fn use_group(&mut self, group: u32) -> &mut Self {
        self.push(&format!(r"\{group}"))
    }

    // ######### Other #########

    /// Alternation (`|`).
    pub fn or(&mut self) -> &mut Self {
        self.push("|")
    }

    /// Does nothing; reads well between operations.
    pub const fn and(&mut self) -> &mut Self {
        self
    }

    // ######### object methods #########

    /// Register `alias` as another name for the operation `operation`.
    pub fn add_alias(&mut self, operation: &str, alias: &str) -> Result<&mut Self> {
        self.aliases.add(operation, alias)?;
        Ok(self)
    }

    /// Remove an alias. Returns false if no such alias exists.
    pub fn delete_alias(&mut self, alias: &str) -> bool {
        self.aliases.remove(alias)
    }

    /// Registered aliases, in insertion order.
    #[must_use]
    pub fn aliases(&self) -> &[Alias] {
        self.aliases.entries()
    }

    pub(crate) const fn alias_registry(&self) -> &AliasRegistry {
        &self.aliases
    }

    /// Reset the pattern and the validation stack. Configuration and aliases
    /// are kept.
    pub fn clear(&mut self) -> &mut Self {
        self.pattern.clear();
        self.stack.clear();
        self
    }

    /// Compile the pattern with the configured flags.
    pub fn build(&self) -> Result<CompiledPattern> {
        self.build_with_flags(Flags::new())
    }

    /// Compile the pattern with the configured flags plus `flags`.
    ///
    /// `flags` may be a string (one flag per character) or a list.
    pub fn build_with_flags(&self, flags: impl Into<Flags>) -> Result<CompiledPattern> {
        if self.config.group_validation
            && let Some(kind) = self.stack.top()
        {
            return Err(BuilderError::MissingEnd { kind });
        }

        let mut effective: Flags = self.config.flags.iter().copied().collect();
        effective.merge(&flags.into());

        let source = if self.config.wrap_inside_group {
            Cow::Owned(format!("({})", self.pattern))
        } else {
            Cow::Borrowed(self.pattern.as_str())
        };

        engine::compile(&source, effective)
    }
}

impl fmt::Display for RegExpBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.pattern)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{GROUP_VALIDATION, WRAP_TEXT_INSIDE_GROUP};

    fn relaxed() -> RegExpBuilder {
        RegExpBuilder::with_config(BuilderConfig::new().group_validation(false))
    }

    #[test]
    fn starts_empty() {
        let builder = RegExpBuilder::new();
        assert_eq!(builder.to_string(), "");
        assert!(builder.open_statements().is_empty());
    }

    #[test]
    fn fixed_fragments() {
        let cases: &[(fn(&mut RegExpBuilder) -> &mut RegExpBuilder, &str)] = &[
            (RegExpBuilder::matches_any, "."),
            (RegExpBuilder::matches_digit, "[0-9]"),
            (RegExpBuilder::matches_non_digit, "[^0-9]"),
            (RegExpBuilder::matches_form_feed, r"\f"),
            (RegExpBuilder::matches_line_feed, r"\n"),
            (RegExpBuilder::matches_carriage_return, r"\r"),
            (RegExpBuilder::matches_white_space, r"\s"),
            (RegExpBuilder::matches_not_white_space, r"\S"),
            (RegExpBuilder::matches_tab, r"\t"),
            (RegExpBuilder::matches_vertical_tab, r"\v"),
            (RegExpBuilder::matches_alphanumeric, r"\w"),
            (RegExpBuilder::matches_non_alphanumeric, r"\W"),
            (RegExpBuilder::matches_null, r"\0"),
            (RegExpBuilder::matches_letter, "[a-zA-Z]"),
            (RegExpBuilder::matches_uppercase_letter, "[A-Z]"),
            (RegExpBuilder::matches_lowercase_letter, "[a-z]"),
            (RegExpBuilder::matches_backspace, r"[\b]"),
            (RegExpBuilder::one_or_more_times, "+"),
            (RegExpBuilder::zero_or_more_times, "*"),
            (RegExpBuilder::zero_or_one_times, "?"),
            (RegExpBuilder::with_not_greedy, "?"),
            (RegExpBuilder::matches_word_boundary, r"\b"),
            (RegExpBuilder::matches_not_word_boundary, r"\B"),
            (RegExpBuilder::begin_line, "^"),
            (RegExpBuilder::end_line, "$"),
            (RegExpBuilder::begin_group, "("),
            (RegExpBuilder::begin_non_captured_group, "(?:"),
            (RegExpBuilder::start_look_ahead_for, "(?="),
            (RegExpBuilder::if_followed_by, "(?="),
            (RegExpBuilder::start_negated_look_ahead, "(?!"),
            (RegExpBuilder::if_not_followed_by, "(?!"),
            (RegExpBuilder::or, "|"),
            (RegExpBuilder::and, ""),
        ];

        for (operation, expected) in cases {
            let mut builder = relaxed();
            operation(&mut builder);
            assert_eq!(builder.as_str(), *expected);
        }
    }

    #[test]
    fn closing_fragments_without_validation() {
        let cases: &[(fn(&mut RegExpBuilder) -> Result<&mut RegExpBuilder>, &str)] = &[
            (RegExpBuilder::end_group, ")"),
            (RegExpBuilder::end_non_captured_group, ")"),
            (RegExpBuilder::end_look_ahead, ")"),
            (RegExpBuilder::end_negated_look_ahead, ")"),
            (RegExpBuilder::match_end, ")"),
        ];

        for (operation, expected) in cases {
            let mut builder = relaxed();
            operation(&mut builder).unwrap();
            assert_eq!(builder.as_str(), *expected);
        }
    }

    #[test]
    fn character_sets_not_escaped() {
        let mut builder = RegExpBuilder::new();
        builder.matches_for("ab?").matches_not_one_of("ab?");
        assert_eq!(builder.as_str(), "[ab?][^ab?]");

        let mut builder = RegExpBuilder::new();
        builder.matches_one_of("x-z").matches_not_for(".");
        assert_eq!(builder.as_str(), "[x-z][^.]");
    }

    #[test]
    fn text_insertion() {
        let mut builder = RegExpBuilder::new();
        builder.matches_text("");
        assert_eq!(builder.as_str(), "");

        builder.matches_text("a");
        assert_eq!(builder.as_str(), "a");

        let mut builder = RegExpBuilder::new();
        builder.matches_text("ab");
        assert_eq!(builder.as_str(), "(?:ab)");

        let mut builder = RegExpBuilder::new();
        builder.matches_text("?a.b");
        assert_eq!(builder.as_str(), r"(?:\?a\.b)");

        let mut builder = RegExpBuilder::new();
        builder.matches_text("?");
        assert_eq!(builder.as_str(), r"\?");

        let mut builder = RegExpBuilder::new();
        builder.matches_captured_text("abc");
        assert_eq!(builder.as_str(), "(abc)");
    }

    #[test]
    fn text_inside_capturing_group_when_configured() {
        let raw = ConfigValue::table().with(WRAP_TEXT_INSIDE_GROUP, true);
        let mut builder = RegExpBuilder::with_options(&raw);
        builder.matches_text("ab").matches_text("c");
        assert_eq!(builder.as_str(), "(ab)(c)");
    }

    #[test]
    fn free_text_verbatim() {
        let mut builder = RegExpBuilder::new();
        builder.matches_free_text("");
        assert_eq!(builder.as_str(), "");
        builder.matches_free_text(r"foo|.*\(\))");
        assert_eq!(builder.as_str(), r"foo|.*\(\))");
    }

    #[test]
    fn quantifiers() {
        let mut builder = RegExpBuilder::new();
        builder.matches_times(2, None);
        assert_eq!(builder.as_str(), "{2}");

        let mut builder = RegExpBuilder::new();
        builder.matches_times(2, 3);
        assert_eq!(builder.as_str(), "{2,3}");

        let mut builder = RegExpBuilder::new();
        builder.with_constraint(1, Some(3));
        assert_eq!(builder.as_str(), "{1,3}");
    }

    #[test]
    fn back_reference() {
        let mut builder = RegExpBuilder::new();
        builder.use_group(3);
        assert_eq!(builder.as_str(), r"\3");
    }

    #[test]
    fn unclosed_statements_fail_build() {
        let openers: &[fn(&mut RegExpBuilder) -> &mut RegExpBuilder] = &[
            RegExpBuilder::begin_group,
            RegExpBuilder::begin_non_captured_group,
            RegExpBuilder::start_look_ahead_for,
            RegExpBuilder::if_followed_by,
            RegExpBuilder::start_negated_look_ahead,
            RegExpBuilder::if_not_followed_by,
        ];

        for open in openers {
            let mut builder = RegExpBuilder::new();
            open(&mut builder);
            let err = builder.build().unwrap_err();
            assert!(matches!(err, BuilderError::MissingEnd { .. }));
        }
    }

    #[test]
    fn innermost_unclosed_statement_reported() {
        let mut builder = RegExpBuilder::new();
        builder.begin_group().start_look_ahead_for();
        let err = builder.build().unwrap_err();
        assert_eq!(err.to_string(), "Missing end look ahead statement");

        let mut builder = RegExpBuilder::new();
        builder.start_look_ahead_for().begin_group();
        let err = builder.build().unwrap_err();
        assert_eq!(err.to_string(), "Missing end group statement");
    }

    #[test]
    fn closing_without_opening_fails_immediately() {
        let closers: &[fn(&mut RegExpBuilder) -> Result<&mut RegExpBuilder>] = &[
            RegExpBuilder::end_group,
            RegExpBuilder::end_non_captured_group,
            RegExpBuilder::end_look_ahead,
            RegExpBuilder::end_negated_look_ahead,
            RegExpBuilder::match_end,
        ];

        for close in closers {
            let mut builder = RegExpBuilder::new();
            let err = close(&mut builder).unwrap_err();
            assert!(matches!(err, BuilderError::MissingBegin { .. }));
            assert_eq!(builder.as_str(), "");
        }
    }

    #[test]
    fn mismatched_close_fails() {
        let mut builder = RegExpBuilder::new();
        builder.begin_group();
        let err = builder.end_look_ahead().unwrap_err();
        assert_eq!(err.to_string(), "Before closing a look ahead you must open one");

        let mut builder = RegExpBuilder::new();
        builder.if_not_followed_by();
        assert!(builder.end_group().is_err());
        assert!(builder.end_look_ahead().is_ok());
        assert_eq!(builder.as_str(), "(?!)");
    }

    #[test]
    fn relaxed_validation_defers_to_engine() {
        let raw = ConfigValue::table().with(GROUP_VALIDATION, false);

        let mut builder = RegExpBuilder::with_options(&raw);
        builder.begin_group();
        assert!(matches!(builder.build().unwrap_err(), BuilderError::Engine(_)));

        let mut builder = RegExpBuilder::with_options(&raw);
        builder.end_look_ahead().unwrap();
        assert_eq!(builder.as_str(), ")");
        assert!(matches!(builder.build().unwrap_err(), BuilderError::Engine(_)));

        let mut builder = RegExpBuilder::with_options(&raw);
        builder.begin_group().end_look_ahead().unwrap();
        assert!(builder.open_statements().is_empty());
        assert!(builder.build().is_ok());
    }

    #[test]
    fn digits_one_or_more() {
        let pattern = RegExpBuilder::new()
            .matches_digit()
            .one_or_more_times()
            .build()
            .unwrap();
        assert_eq!(pattern.source(), "[0-9]+");
        assert!(pattern.is_match("abc123").unwrap());
    }

    #[test]
    fn group_back_reference() {
        let mut builder = RegExpBuilder::new();
        builder
            .begin_group()
            .matches_letter()
            .end_group()
            .unwrap()
            .use_group(1);
        let pattern = builder.build().unwrap();
        assert_eq!(pattern.source(), r"([a-zA-Z])\1");
        assert!(pattern.is_match("abba").unwrap());
        assert!(!pattern.is_match("abab").unwrap());
    }

    #[test]
    fn look_ahead_round_trip() {
        let mut builder = RegExpBuilder::new();
        builder
            .matches_digit()
            .one_or_more_times()
            .if_followed_by()
            .matches_text("px")
            .match_end()
            .unwrap();
        let pattern = builder.build().unwrap();
        assert_eq!(pattern.source(), "[0-9]+(?=(?:px))");

        let text = "10em 20px";
        let m = pattern.find(text).unwrap().unwrap();
        assert_eq!(m.as_str(text), "20");
    }

    #[test]
    fn wrap_inside_group_not_persisted() {
        let mut builder =
            RegExpBuilder::with_config(BuilderConfig::new().wrap_inside_group(true));
        builder.matches_free_text("abc").matches_free_text("def");

        let pattern = builder.build().unwrap();
        assert_eq!(pattern.source(), "(abcdef)");
        assert_eq!(builder.to_string(), "abcdef");

        let pattern = builder.build().unwrap();
        assert_eq!(pattern.source(), "(abcdef)");
    }

    #[test]
    fn build_flags() {
        let mut builder = RegExpBuilder::new();
        builder.matches_text("abc");

        let pattern = builder.build().unwrap();
        assert!(pattern.flags().is_empty());

        let pattern = builder.build_with_flags("g").unwrap();
        assert_eq!(pattern.to_string(), "/(?:abc)/g");

        let pattern = builder.build_with_flags(["g", "i"]).unwrap();
        assert_eq!(pattern.to_string(), "/(?:abc)/gi");
        assert!(pattern.is_global());
        assert!(pattern.ignore_case());
    }

    #[test]
    fn build_flags_merge_with_defaults() {
        let mut builder = RegExpBuilder::with_config(BuilderConfig::new().flags(['g', 'm']));
        builder.matches_text("a");

        let pattern = builder.build_with_flags(["i", "g"]).unwrap();
        assert_eq!(pattern.flags().to_string(), "gmi");
    }

    #[test]
    fn build_with_unknown_flag() {
        let builder = RegExpBuilder::new();
        let err = builder.build_with_flags("q").unwrap_err();
        assert!(matches!(err, BuilderError::InvalidFlag { flag: 'q' }));
    }

    #[test]
    fn clear_resets_pattern_and_stack() {
        let mut builder = RegExpBuilder::with_config(BuilderConfig::new().flags(['g']));
        builder.matches_free_text("abc").begin_group();
        builder.clear();

        assert_eq!(builder.to_string(), "");
        assert!(builder.open_statements().is_empty());
        assert_eq!(builder.configuration().flags, vec!['g']);
        assert!(builder.build().is_ok());
    }

    #[test]
    fn clone_is_independent() {
        let mut original = RegExpBuilder::new();
        original.matches_text("123").begin_group();

        let mut copy = original.clone();
        assert_eq!(copy.to_string(), original.to_string());

        original.matches_text("abc");
        assert_ne!(copy.to_string(), original.to_string());

        copy.end_group().unwrap();
        assert_eq!(original.open_statements(), &[MarkerKind::Group]);
        assert!(copy.open_statements().is_empty());
    }

    #[test]
    fn configuration_is_snapshot() {
        let builder = RegExpBuilder::new();
        let mut snapshot = builder.configuration();
        snapshot.group_validation = false;
        assert!(builder.configuration().group_validation);
    }

    #[test]
    fn load_reports_warnings() {
        let raw = ConfigValue::table().with("noProperty", 1_i64);
        let (builder, warnings) = RegExpBuilder::load(Some(&raw));
        assert_eq!(builder.configuration(), BuilderConfig::default());
        assert_eq!(warnings.len(), 1);
    }

    #[test]
    fn matches_dispatch() {
        let mut builder = RegExpBuilder::new();
        builder.matches("abc?").unwrap();
        assert_eq!(builder.as_str(), r"(?:abc\?)");

        let pattern = engine::compile("abc", Flags::new()).unwrap();
        let mut builder = RegExpBuilder::new();
        builder.matches(&pattern).unwrap();
        assert_eq!(builder.as_str(), "abc");

        let mut nested = RegExpBuilder::new();
        nested.matches_text("abc");
        let mut builder = RegExpBuilder::new();
        builder.matches(&nested).unwrap();
        assert_eq!(builder.as_str(), "(?:abc)");

        let text = String::from("x");
        let mut builder = RegExpBuilder::new();
        builder.matches(&text).unwrap().matches(Some("y")).unwrap();
        assert_eq!(builder.as_str(), "xy");
    }

    #[test]
    fn matches_rejects_missing_value() {
        let mut builder = RegExpBuilder::new();
        let err = builder.matches(None::<&str>).unwrap_err();
        assert!(matches!(err, BuilderError::IllegalArgument { .. }));

        let err = builder
            .matches(PatternInput::Unsupported { kind: "number" })
            .unwrap_err();
        assert_eq!(err.to_string(), "illegal argument: Illegal argument of type number");
        assert_eq!(builder.as_str(), "");
    }

    #[test]
    fn matches_builder_and_regexp() {
        let mut nested = RegExpBuilder::new();
        nested.matches_text("abc");
        let mut builder = RegExpBuilder::new();
        builder.matches_builder(&nested).unwrap().matches_text("123");
        assert_eq!(builder.as_str(), "(?:abc)(?:123)");

        let pattern = engine::compile("abc", Flags::new()).unwrap();
        let mut builder = RegExpBuilder::new();
        builder.matches_regexp(&pattern).matches_text("123");
        assert_eq!(builder.as_str(), "abc(?:123)");
    }

    #[test]
    fn matches_builder_propagates_nested_failure() {
        let mut nested = RegExpBuilder::new();
        nested.begin_group();
        let mut builder = RegExpBuilder::new();
        let err = builder.matches_builder(&nested).unwrap_err();
        assert!(err.is_structural());
        assert_eq!(builder.as_str(), "");
    }
}
