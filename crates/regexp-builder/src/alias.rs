//! User-defined alternative names for builder operations.

use crate::error::{BuilderError, Result};
use crate::operation::Operation;

/// Builder methods that are not chaining operations. They can neither be
/// aliased nor used as an alias name.
pub const RESERVED_NAMES: &[&str] = &[
    "new",
    "build",
    "build_with_flags",
    "clear",
    "clone",
    "to_string",
    "as_str",
    "configuration",
    "open_statements",
    "add_alias",
    "delete_alias",
    "aliases",
    "invoke",
    "apply",
];

/// An alias and the operation it stands for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alias {
    /// The aliased operation.
    pub operation: Operation,
    /// The alternative name.
    pub alias: String,
}

/// Aliases of one builder, in insertion order.
#[derive(Debug, Clone, Default)]
pub struct AliasRegistry {
    entries: Vec<Alias>,
}

impl AliasRegistry {
    /// Create an empty registry.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Register `alias` for `target`, which is an operation name or an
    /// existing alias.
    pub fn add(&mut self, target: &str, alias: &str) -> Result<()> {
        if alias.is_empty() {
            return Err(BuilderError::illegal_argument("alias name must not be empty"));
        }

        let operation = self
            .resolve(target)
            .ok_or_else(|| BuilderError::UnknownOperation {
                name: target.to_string(),
            })?;

        if self.resolve(alias).is_some() || RESERVED_NAMES.contains(&alias) {
            return Err(BuilderError::AliasExists {
                name: alias.to_string(),
            });
        }

        tracing::debug!(%alias, operation = operation.name(), "Added alias");
        self.entries.push(Alias {
            operation,
            alias: alias.to_string(),
        });
        Ok(())
    }

    /// Remove an alias. Returns false if it was not registered.
    pub fn remove(&mut self, alias: &str) -> bool {
        let before = self.entries.len();
        self.entries.retain(|entry| entry.alias != alias);
        let removed = self.entries.len() != before;
        if removed {
            tracing::debug!(%alias, "Removed alias");
        }
        removed
    }

    /// The operation registered under `alias`.
    #[must_use]
    pub fn lookup(&self, alias: &str) -> Option<Operation> {
        self.entries
            .iter()
            .find(|entry| entry.alias == alias)
            .map(|entry| entry.operation)
    }

    /// Resolve an operation name or an alias.
    #[must_use]
    pub fn resolve(&self, name: &str) -> Option<Operation> {
        name.parse().ok().or_else(|| self.lookup(name))
    }

    /// Registered aliases, in insertion order.
    #[must_use]
    pub fn entries(&self) -> &[Alias] {
        &self.entries
    }
}
