//! Builder operations addressed by name.
//!
//! Every chaining operation of [`RegExpBuilder`] has an [`Operation`]
//! identifier parsed from its method name. [`RegExpBuilder::invoke`] runs an
//! operation or alias by name with dynamically typed [`Argument`]s.
//!
//! ```
//! use regexp_builder::{Argument, RegExpBuilder};
//!
//! let mut builder = RegExpBuilder::new();
//! builder.add_alias("matches_digit", "digit")?;
//! builder
//!     .invoke("digit", &[])?
//!     .invoke("matches_times", &[Argument::from(2_u32)])?;
//! assert_eq!(builder.as_str(), "[0-9]{2}");
//! # Ok::<(), regexp_builder::BuilderError>(())
//! ```

use std::fmt;
use std::str::FromStr;

use crate::builder::RegExpBuilder;
use crate::engine::CompiledPattern;
use crate::error::{BuilderError, Result};

macro_rules! operations {
    ($($variant:ident => $name:literal),* $(,)?) => {
        /// A chaining operation of [`RegExpBuilder`].
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum Operation {
            $(
                #[doc = concat!("[`RegExpBuilder::", $name, "`]")]
                $variant,
            )*
        }

        impl Operation {
            /// Every operation, in declaration order.
            pub const ALL: &'static [Self] = &[$(Self::$variant),*];

            /// The method name of this operation.
            #[must_use]
            pub const fn name(self) -> &'static str {
                match self {
                    $(Self::$variant => $name,)*
                }
            }
        }

        impl FromStr for Operation {
            type Err = BuilderError;

            fn from_str(name: &str) -> Result<Self> {
                match name {
                    $($name => Ok(Self::$variant),)*
                    _ => Err(BuilderError::UnknownOperation {
                        name: name.to_string(),
                    }),
                }
            }
        }
    };
}

operations! {
    Matches => "matches",
    MatchesFreeText => "matches_free_text",
    MatchesRegexp => "matches_regexp",
    MatchesBuilder => "matches_builder",
    MatchesAny => "matches_any",
    MatchesFor => "matches_for",
    MatchesOneOf => "matches_one_of",
    MatchesNotFor => "matches_not_for",
    MatchesNotOneOf => "matches_not_one_of",
    MatchesDigit => "matches_digit",
    MatchesNonDigit => "matches_non_digit",
    MatchesFormFeed => "matches_form_feed",
    MatchesLineFeed => "matches_line_feed",
    MatchesCarriageReturn => "matches_carriage_return",
    MatchesWhiteSpace => "matches_white_space",
    MatchesNotWhiteSpace => "matches_not_white_space",
    MatchesTab => "matches_tab",
    MatchesVerticalTab => "matches_vertical_tab",
    MatchesAlphanumeric => "matches_alphanumeric",
    MatchesNonAlphanumeric => "matches_non_alphanumeric",
    MatchesNull => "matches_null",
    MatchesLetter => "matches_letter",
    MatchesUppercaseLetter => "matches_uppercase_letter",
    MatchesLowercaseLetter => "matches_lowercase_letter",
    MatchesBackspace => "matches_backspace",
    MatchesText => "matches_text",
    MatchesCapturedText => "matches_captured_text",
    MatchesTimes => "matches_times",
    WithConstraint => "with_constraint",
    OneOrMoreTimes => "one_or_more_times",
    ZeroOrMoreTimes => "zero_or_more_times",
    ZeroOrOneTimes => "zero_or_one_times",
    WithNotGreedy => "with_not_greedy",
    MatchesWordBoundary => "matches_word_boundary",
    MatchesNotWordBoundary => "matches_not_word_boundary",
    BeginLine => "begin_line",
    EndLine => "end_line",
    BeginGroup => "begin_group",
    BeginNonCapturedGroup => "begin_non_captured_group",
    EndGroup => "end_group",
    EndNonCapturedGroup => "end_non_captured_group",
    StartLookAheadFor => "start_look_ahead_for",
    IfFollowedBy => "if_followed_by",
    StartNegatedLookAhead => "start_negated_look_ahead",
    IfNotFollowedBy => "if_not_followed_by",
    EndLookAhead => "end_look_ahead",
    EndNegatedLookAhead => "end_negated_look_ahead",
    MatchEnd => "match_end",
    UseGroup => "use_group",
    Or => "or",
    And => "and",
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A dynamically typed operation argument.
#[derive(Debug, Clone)]
pub enum Argument {
    /// Text or a character set.
    Text(String),
    /// A repetition count or group number.
    Number(u32),
    /// A compiled pattern.
    Pattern(CompiledPattern),
    /// Another builder.
    Builder(Box<RegExpBuilder>),
}

impl Argument {
    /// Name of the argument's type, used in error messages.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Text(_) => "text",
            Self::Number(_) => "number",
            Self::Pattern(_) => "pattern",
            Self::Builder(_) => "builder",
        }
    }
}

impl From<&str> for Argument {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for Argument {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<u32> for Argument {
    fn from(n: u32) -> Self {
        Self::Number(n)
    }
}

impl From<CompiledPattern> for Argument {
    fn from(pattern: CompiledPattern) -> Self {
        Self::Pattern(pattern)
    }
}

impl From<RegExpBuilder> for Argument {
    fn from(builder: RegExpBuilder) -> Self {
        Self::Builder(Box::new(builder))
    }
}

fn wrong_arguments(operation: Operation, args: &[Argument]) -> BuilderError {
    let kinds: Vec<&str> = args.iter().map(Argument::kind).collect();
    BuilderError::illegal_argument(format!(
        "{operation} cannot be called with ({})",
        kinds.join(", ")
    ))
}

impl RegExpBuilder {
    /// Run an operation or alias by name.
    ///
    /// Fails with [`BuilderError::UnknownOperation`] if `name` is neither,
    /// and with [`BuilderError::IllegalArgument`] if `args` do not fit the
    /// operation's parameters.
    pub fn invoke(&mut self, name: &str, args: &[Argument]) -> Result<&mut Self> {
        let operation = self
            .alias_registry()
            .resolve(name)
            .ok_or_else(|| BuilderError::UnknownOperation {
                name: name.to_string(),
            })?;
        tracing::trace!(%name, %operation, args = args.len(), "Invoking operation");
        self.apply(operation, args)
    }

    /// Run an operation with dynamically typed arguments.
    pub fn apply(&mut self, operation: Operation, args: &[Argument]) -> Result<&mut Self> {
        use Operation as Op;

        match (operation, args) {
            (Op::Matches, [Argument::Text(text)]) => self.matches(text.as_str()),
            (Op::Matches, [Argument::Pattern(pattern)]) => self.matches(pattern),
            (Op::Matches, [Argument::Builder(builder)]) => self.matches(&**builder),
            (Op::MatchesRegexp, [Argument::Pattern(pattern)]) => Ok(self.matches_regexp(pattern)),
            (Op::MatchesBuilder, [Argument::Builder(builder)]) => self.matches_builder(builder),

            (Op::MatchesFreeText, [Argument::Text(text)]) => Ok(self.matches_free_text(text)),
            (Op::MatchesFor, [Argument::Text(chars)]) => Ok(self.matches_for(chars)),
            (Op::MatchesOneOf, [Argument::Text(chars)]) => Ok(self.matches_one_of(chars)),
            (Op::MatchesNotFor, [Argument::Text(chars)]) => Ok(self.matches_not_for(chars)),
            (Op::MatchesNotOneOf, [Argument::Text(chars)]) => Ok(self.matches_not_one_of(chars)),
            (Op::MatchesText, [Argument::Text(text)]) => Ok(self.matches_text(text)),
            (Op::MatchesCapturedText, [Argument::Text(text)]) => {
                Ok(self.matches_captured_text(text))
            }

            (Op::MatchesTimes, [Argument::Number(min)]) => Ok(self.matches_times(*min, None)),
            (Op::MatchesTimes, [Argument::Number(min), Argument::Number(max)]) => {
                Ok(self.matches_times(*min, *max))
            }
            (Op::WithConstraint, [Argument::Number(min)]) => Ok(self.with_constraint(*min, None)),
            (Op::WithConstraint, [Argument::Number(min), Argument::Number(max)]) => {
                Ok(self.with_constraint(*min, *max))
            }
            (Op::UseGroup, [Argument::Number(group)]) => Ok(self.use_group(*group)),

            (Op::EndGroup, []) => self.end_group(),
            (Op::EndNonCapturedGroup, []) => self.end_non_captured_group(),
            (Op::EndLookAhead, []) => self.end_look_ahead(),
            (Op::EndNegatedLookAhead, []) => self.end_negated_look_ahead(),
            (Op::MatchEnd, []) => self.match_end(),

            (operation, []) => self
                .apply_nullary(operation)
                .ok_or_else(|| wrong_arguments(operation, args)),
            (operation, _) => Err(wrong_arguments(operation, args)),
        }
    }

    fn apply_nullary(&mut self, operation: Operation) -> Option<&mut Self> {
        use Operation as Op;

        let builder = match operation {
            Op::MatchesAny => self.matches_any(),
            Op::MatchesDigit => self.matches_digit(),
            Op::MatchesNonDigit => self.matches_non_digit(),
            Op::MatchesFormFeed => self.matches_form_feed(),
            Op::MatchesLineFeed => self.matches_line_feed(),
            Op::MatchesCarriageReturn => self.matches_carriage_return(),
            Op::MatchesWhiteSpace => self.matches_white_space(),
            Op::MatchesNotWhiteSpace => self.matches_not_white_space(),
            Op::MatchesTab => self.matches_tab(),
            Op::MatchesVerticalTab => self.matches_vertical_tab(),
            Op::MatchesAlphanumeric => self.matches_alphanumeric(),
            Op::MatchesNonAlphanumeric => self.matches_non_alphanumeric(),
            Op::MatchesNull => self.matches_null(),
            Op::MatchesLetter => self.matches_letter(),
            Op::MatchesUppercaseLetter => self.matches_uppercase_letter(),
            Op::MatchesLowercaseLetter => self.matches_lowercase_letter(),
            Op::MatchesBackspace => self.matches_backspace(),
            Op::OneOrMoreTimes => self.one_or_more_times(),
            Op::ZeroOrMoreTimes => self.zero_or_more_times(),
            Op::ZeroOrOneTimes => self.zero_or_one_times(),
            Op::WithNotGreedy => self.with_not_greedy(),
            Op::MatchesWordBoundary => self.matches_word_boundary(),
            Op::MatchesNotWordBoundary => self.matches_not_word_boundary(),
            Op::BeginLine => self.begin_line(),
            Op::EndLine => self.end_line(),
            Op::BeginGroup => self.begin_group(),
            Op::BeginNonCapturedGroup => self.begin_non_captured_group(),
            Op::StartLookAheadFor => self.start_look_ahead_for(),
            Op::IfFollowedBy => self.if_followed_by(),
            Op::StartNegatedLookAhead => self.start_negated_look_ahead(),
            Op::IfNotFollowedBy => self.if_not_followed_by(),
            Op::Or => self.or(),
            Op::And => self.and(),
            _ => return None,
        };
        Some(builder)
    }
}
