//! Validation stack for open groups and lookaheads.

use crate::error::{BuilderError, Result};

/// The kind of statement an open marker stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MarkerKind {
    /// A capturing or non-capturing group.
    Group,
    /// A positive or negative lookahead.
    LookAhead,
}

impl MarkerKind {
    /// Statement name used in validation messages.
    #[must_use]
    pub const fn statement(self) -> &'static str {
        match self {
            Self::Group => "group",
            Self::LookAhead => "look ahead",
        }
    }
}

/// LIFO record of statements that were opened but not yet closed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationStack {
    markers: Vec<MarkerKind>,
}

impl ValidationStack {
    /// Create an empty stack.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            markers: Vec::new(),
        }
    }

    /// Record a newly opened statement.
    pub fn push(&mut self, kind: MarkerKind) {
        self.markers.push(kind);
        tracing::trace!(?kind, depth = self.markers.len(), "Opened statement");
    }

    /// Close the innermost statement, which must be of `expected` kind.
    ///
    /// With `strict` a mismatch or an empty stack is an error and leaves the
    /// stack untouched. Without it the top marker is dropped regardless.
    pub fn pop(&mut self, expected: MarkerKind, strict: bool) -> Result<()> {
        if self.top() != Some(expected) {
            if strict {
                return Err(BuilderError::MissingBegin { kind: expected });
            }
            tracing::trace!(
                ?expected,
                found = ?self.top(),
                "Closing mismatched statement without validation"
            );
        }
        self.markers.pop();
        Ok(())
    }

    /// The innermost open statement.
    #[must_use]
    pub fn top(&self) -> Option<MarkerKind> {
        self.markers.last().copied()
    }

    /// Open statements, outermost first.
    #[must_use]
    pub fn markers(&self) -> &[MarkerKind] {
        &self.markers
    }

    /// Number of open statements.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.markers.len()
    }

    /// Check if every statement is closed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }

    /// Forget every open statement.
    pub fn clear(&mut self) {
        self.markers.clear();
    }
}
