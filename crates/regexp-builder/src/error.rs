//! Error types for regexp-builder.
//!
//! Structural errors come from the validation stack, illegal-argument errors
//! from the polymorphic insertion operations, and engine errors are handed
//! through untouched from the regex engine that compiles the final pattern.

use thiserror::Error;

use crate::builder::MarkerKind;

/// The main error type for regexp-builder operations.
#[derive(Debug, Error)]
pub enum BuilderError {
    /// An end operation was called without a matching begin operation.
    #[error("Before closing a {} you must open one", kind.statement())]
    MissingBegin {
        /// The kind of statement the end operation tried to close.
        kind: MarkerKind,
    },

    /// A begin operation was never closed before the pattern was built.
    #[error("Missing end {} statement", kind.statement())]
    MissingEnd {
        /// The kind of the innermost unclosed statement.
        kind: MarkerKind,
    },

    /// An operation received a value it cannot work with.
    #[error("illegal argument: {message}")]
    IllegalArgument {
        /// Description of what was wrong with the argument.
        message: String,
    },

    /// A flag character the regex engine does not understand.
    #[error("invalid flag '{flag}'")]
    InvalidFlag {
        /// The rejected flag character.
        flag: char,
    },

    /// The regex engine refused the assembled pattern.
    #[error(transparent)]
    Engine(#[from] fancy_regex::Error),

    /// No operation with this name exists.
    #[error("a method with the name {name} doesn't exist")]
    UnknownOperation {
        /// The name that could not be resolved.
        name: String,
    },

    /// An alias would shadow an operation or another alias.
    #[error("a method or alias with the name {name} already exists")]
    AliasExists {
        /// The alias that was rejected.
        name: String,
    },

    /// A configuration source could not be read or parsed.
    #[error("configuration error: {message}")]
    Config {
        /// Description of the configuration error.
        message: String,
    },

    /// An I/O error occurred while reading a configuration file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for regexp-builder operations.
pub type Result<T> = std::result::Result<T, BuilderError>;

impl BuilderError {
    /// Create an illegal argument error.
    pub fn illegal_argument(message: impl Into<String>) -> Self {
        Self::IllegalArgument {
            message: message.into(),
        }
    }

    /// Create a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Check if this error was raised by group/lookahead validation.
    #[must_use]
    pub const fn is_structural(&self) -> bool {
        matches!(self, Self::MissingBegin { .. } | Self::MissingEnd { .. })
    }

    /// Check if this error came from the regex engine.
    #[must_use]
    pub const fn is_engine(&self) -> bool {
        matches!(self, Self::Engine(_) | Self::InvalidFlag { .. })
    }
}
