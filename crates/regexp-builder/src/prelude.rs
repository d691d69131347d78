//! Convenient re-exports for common regexp-builder usage.
//!
//! ```
//! use regexp_builder::prelude::*;
//!
//! let mut builder = RegExpBuilder::new();
//! builder.matches_text("a.b");
//! assert!(builder.build()?.is_match("a.b")?);
//! # Ok::<(), BuilderError>(())
//! ```

// Builder
pub use crate::builder::{MarkerKind, PatternInput, RegExpBuilder};

// Configuration
pub use crate::config::{BuilderConfig, ConfigValue, ConfigWarning};

// Compiled patterns
pub use crate::engine::{CompiledPattern, PatternMatch};

// Error handling
pub use crate::error::{BuilderError, Result};

// Flags
pub use crate::flags::Flags;

// Invocation by name
pub use crate::operation::{Argument, Operation};
