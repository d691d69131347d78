//! Builder configuration.
//!
//! Options reach the builder as an untyped [`ConfigValue`] mapping. The
//! loader checks each recognized option against its validator, falls back to
//! the declared default when the value is missing or has the wrong type, and
//! drops unknown keys. Problems are reported as [`ConfigWarning`]s and logged;
//! loading itself never fails.

mod file;
mod value;

use std::collections::HashMap;
use std::fmt;

use serde::Serialize;

pub use file::{ConfigFormat, parse_config};
pub use value::ConfigValue;

/// Option key enabling group and lookahead validation.
pub const GROUP_VALIDATION: &str = "groupValidation";

/// Option key wrapping the whole built pattern in a capturing group.
pub const WRAP_INSIDE_GROUP: &str = "wrapInsideGroup";

/// Option key wrapping every literal text insertion in a capturing group.
pub const WRAP_TEXT_INSIDE_GROUP: &str = "wrapTextInsideGroup";

/// Option key listing the default flags.
pub const FLAGS: &str = "flags";

/// A recognized option: its default, its validator and the type name used
/// when a value fails validation.
#[derive(Debug, Clone)]
pub struct OptionSpec {
    /// Option key.
    pub name: &'static str,
    /// Value used when the option is missing or invalid.
    pub default: ConfigValue,
    /// Returns true if a supplied value is acceptable.
    pub validate: fn(&ConfigValue) -> bool,
    /// Human-readable name of the expected type.
    pub type_name: &'static str,
}

impl OptionSpec {
    /// Create a new option specification.
    #[must_use]
    pub const fn new(
        name: &'static str,
        default: ConfigValue,
        validate: fn(&ConfigValue) -> bool,
        type_name: &'static str,
    ) -> Self {
        Self {
            name,
            default,
            validate,
            type_name,
        }
    }
}

fn is_bool(value: &ConfigValue) -> bool {
    value.as_bool().is_some()
}

fn is_flag_list(value: &ConfigValue) -> bool {
    value.as_array().is_some_and(|items| {
        items
            .iter()
            .all(|item| item.as_str().is_some_and(|s| s.chars().count() == 1))
    })
}

/// The options understood by [`RegExpBuilder`](crate::RegExpBuilder).
#[must_use]
pub fn builder_options() -> Vec<OptionSpec> {
    vec![
        OptionSpec::new(GROUP_VALIDATION, ConfigValue::Boolean(true), is_bool, "boolean"),
        OptionSpec::new(WRAP_INSIDE_GROUP, ConfigValue::Boolean(false), is_bool, "boolean"),
        OptionSpec::new(
            WRAP_TEXT_INSIDE_GROUP,
            ConfigValue::Boolean(false),
            is_bool,
            "boolean",
        ),
        OptionSpec::new(FLAGS, ConfigValue::Array(Vec::new()), is_flag_list, "array"),
    ]
}

/// A non-fatal problem found while loading options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigWarning {
    /// The raw options were not a key-value mapping.
    NotATable {
        /// Type name of the value that was supplied instead.
        found: &'static str,
    },
    /// A key that no option recognizes.
    IllegalProperty {
        /// The unknown key.
        name: String,
    },
    /// A recognized option with a value of the wrong type.
    WrongType {
        /// The option key.
        name: String,
        /// Expected type name.
        expected: &'static str,
        /// Type name of the supplied value.
        found: &'static str,
    },
}

impl fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotATable { found } => {
                write!(f, "Expected a configuration object but found {found}")
            }
            Self::IllegalProperty { name } => {
                write!(f, "Found illegal property {name} inside the configuration object")
            }
            Self::WrongType {
                name,
                expected,
                found,
            } => write!(
                f,
                "Found wrong type for property {name}. Expected {expected} but found {found}"
            ),
        }
    }
}

/// Result of loading raw options against a set of [`OptionSpec`]s.
#[derive(Debug, Clone, Default)]
pub struct LoadedOptions {
    values: HashMap<&'static str, ConfigValue>,
    warnings: Vec<ConfigWarning>,
}

impl LoadedOptions {
    /// Get the resolved value of an option.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&ConfigValue> {
        self.values.get(name)
    }

    /// Number of resolved options. Always equals the number of specs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if no options were resolved.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Warnings raised while loading.
    #[must_use]
    pub fn warnings(&self) -> &[ConfigWarning] {
        &self.warnings
    }

    /// Consume and return the warnings.
    #[must_use]
    pub fn into_warnings(self) -> Vec<ConfigWarning> {
        self.warnings
    }

    fn warn(&mut self, warning: ConfigWarning) {
        tracing::warn!(%warning, "Ignoring configuration value");
        self.warnings.push(warning);
    }
}

/// Resolve raw options against the given specs.
///
/// A missing or null option silently takes its default. Unknown keys are
/// reported in sorted order so the warning sequence is deterministic.
#[must_use]
pub fn load_options(raw: Option<&ConfigValue>, specs: &[OptionSpec]) -> LoadedOptions {
    let mut loaded = LoadedOptions::default();
    let empty = HashMap::new();

    let table = match raw {
        None | Some(ConfigValue::Null) => &empty,
        Some(ConfigValue::Table(t)) => t,
        Some(other) => {
            loaded.warn(ConfigWarning::NotATable {
                found: other.type_name(),
            });
            &empty
        }
    };

    for spec in specs {
        let value = match table.get(spec.name) {
            Some(v) if !v.is_null() && (spec.validate)(v) => v.clone(),
            Some(v) if !v.is_null() => {
                loaded.warn(ConfigWarning::WrongType {
                    name: spec.name.to_string(),
                    expected: spec.type_name,
                    found: v.type_name(),
                });
                spec.default.clone()
            }
            _ => spec.default.clone(),
        };
        loaded.values.insert(spec.name, value);
    }

    let mut unknown: Vec<&String> = table
        .keys()
        .filter(|key| !specs.iter().any(|spec| spec.name == key.as_str()))
        .collect();
    unknown.sort();
    for name in unknown {
        loaded.warn(ConfigWarning::IllegalProperty { name: name.clone() });
    }

    loaded
}

/// Validated configuration of a [`RegExpBuilder`](crate::RegExpBuilder).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BuilderConfig {
    /// Enforce balanced groups and lookaheads.
    pub group_validation: bool,

    /// Wrap the whole built pattern in a capturing group.
    pub wrap_inside_group: bool,

    /// Wrap every literal text insertion in a capturing group.
    pub wrap_text_inside_group: bool,

    /// Flags applied to every build, in order.
    pub flags: Vec<char>,
}

impl Default for BuilderConfig {
    fn default() -> Self {
        Self {
            group_validation: true,
            wrap_inside_group: false,
            wrap_text_inside_group: false,
            flags: Vec::new(),
        }
    }
}

impl BuilderConfig {
    /// Create the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a configuration from raw options.
    ///
    /// Never fails: unusable values fall back to their defaults and are
    /// reported in the returned warnings.
    #[must_use]
    pub fn load(raw: Option<&ConfigValue>) -> (Self, Vec<ConfigWarning>) {
        let defaults = Self::default();
        let loaded = load_options(raw, &builder_options());

        let flag = |name: &str, default: bool| {
            loaded
                .get(name)
                .and_then(ConfigValue::as_bool)
                .unwrap_or(default)
        };

        let config = Self {
            group_validation: flag(GROUP_VALIDATION, defaults.group_validation),
            wrap_inside_group: flag(WRAP_INSIDE_GROUP, defaults.wrap_inside_group),
            wrap_text_inside_group: flag(WRAP_TEXT_INSIDE_GROUP, defaults.wrap_text_inside_group),
            flags: loaded
                .get(FLAGS)
                .and_then(ConfigValue::as_array)
                .map(|items| {
                    items
                        .iter()
                        .filter_map(ConfigValue::as_str)
                        .filter_map(|s| s.chars().next())
                        .collect()
                })
                .unwrap_or_default(),
        };

        (config, loaded.into_warnings())
    }

    /// Set whether groups and lookaheads are validated.
    #[must_use]
    pub const fn group_validation(mut self, enabled: bool) -> Self {
        self.group_validation = enabled;
        self
    }

    /// Set whether the built pattern is wrapped in a capturing group.
    #[must_use]
    pub const fn wrap_inside_group(mut self, enabled: bool) -> Self {
        self.wrap_inside_group = enabled;
        self
    }

    /// Set whether literal text is wrapped in capturing groups.
    #[must_use]
    pub const fn wrap_text_inside_group(mut self, enabled: bool) -> Self {
        self.wrap_text_inside_group = enabled;
        self
    }

    /// Set the default flags.
    #[must_use]
    pub fn flags(mut self, flags: impl IntoIterator<Item = char>) -> Self {
        self.flags = flags.into_iter().collect();
        self
    }
}
