//! regexp-builder: build regular expressions from readable, named operations
//!
//! Instead of writing `([a-zA-Z])\1` by hand, a [`RegExpBuilder`] is told what
//! to match one step at a time. It escapes literal text, keeps track of open
//! groups and lookaheads, and hands the finished pattern to the regex engine.
//!
//! # Features
//!
//! - **Fluent vocabulary** of character classes, quantifiers, anchors, groups
//!   and lookaheads
//! - **Structural validation** of group and lookahead nesting, reported
//!   before the engine ever sees the pattern
//! - **Lenient configuration** from TOML, JSON or in-memory values; bad
//!   options are logged and replaced by defaults
//! - **Two engines**: the `regex` crate when the pattern allows it,
//!   `fancy-regex` for lookahead and backreferences
//! - **Aliases** and invocation by name for data-driven builders
//!
//! # Example
//!
//! ```
//! use regexp_builder::prelude::*;
//!
//! let mut builder = RegExpBuilder::new();
//! builder
//!     .begin_line()
//!     .matches_digit()
//!     .matches_times(3, None)
//!     .matches_text("-")
//!     .matches_digit()
//!     .matches_times(4, None)
//!     .end_line();
//!
//! let pattern = builder.build()?;
//! assert_eq!(pattern.source(), "^[0-9]{3}-[0-9]{4}$");
//! assert!(pattern.is_match("555-0199")?);
//! assert!(!pattern.is_match("555-01999")?);
//! # Ok::<(), BuilderError>(())
//! ```

pub mod alias;
pub mod builder;
pub mod config;
pub mod engine;
pub mod error;
pub mod flags;
pub mod operation;
pub mod prelude;

pub use alias::{Alias, AliasRegistry};
pub use builder::{MarkerKind, PatternInput, REGEX_CHARACTERS, RegExpBuilder, escape};
pub use config::{BuilderConfig, ConfigFormat, ConfigValue, ConfigWarning};
pub use engine::{CompiledPattern, PatternMatch, compile};
pub use error::{BuilderError, Result};
pub use flags::{
    FLAG_CASE_INSENSITIVE, FLAG_DOT_ALL, FLAG_GLOBAL, FLAG_MULTI_LINE, FLAG_STICKY, FLAG_UNICODE,
    Flags,
};
pub use operation::{Argument, Operation};
