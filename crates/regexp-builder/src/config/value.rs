//! Dynamically-typed configuration values.

use std::collections::HashMap;

/// Configuration value.
///
/// Raw builder options arrive as an untyped key-value mapping; the loader
/// checks every recognized key against its expected shape before a typed
/// [`BuilderConfig`](crate::config::BuilderConfig) is produced.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigValue {
    /// String value.
    String(String),
    /// Integer value.
    Integer(i64),
    /// Float value.
    Float(f64),
    /// Boolean value.
    Boolean(bool),
    /// Array value.
    Array(Vec<ConfigValue>),
    /// Table/object value.
    Table(HashMap<String, ConfigValue>),
    /// Null value.
    Null,
}

impl ConfigValue {
    /// Create an empty table.
    #[must_use]
    pub fn table() -> Self {
        Self::Table(HashMap::new())
    }

    /// Insert a key into a table value, ignoring non-table values.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Self>) -> Self {
        if let Self::Table(t) = &mut self {
            t.insert(key.into(), value.into());
        }
        self
    }

    /// Get as string.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Get as integer.
    #[must_use]
    pub const fn as_int(&self) -> Option<i64> {
        match self {
            Self::Integer(i) => Some(*i),
            _ => None,
        }
    }

    /// Get as boolean.
    #[must_use]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// Get as array.
    #[must_use]
    pub const fn as_array(&self) -> Option<&Vec<Self>> {
        match self {
            Self::Array(a) => Some(a),
            _ => None,
        }
    }

    /// Get as table.
    #[must_use]
    pub const fn as_table(&self) -> Option<&HashMap<String, Self>> {
        match self {
            Self::Table(t) => Some(t),
            _ => None,
        }
    }

    /// Get value by key (for tables).
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Self> {
        self.as_table().and_then(|t| t.get(key))
    }

    /// Check for the null value.
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Name of the value's type, as reported in configuration warnings.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::String(_) => "string",
            Self::Integer(_) | Self::Float(_) => "number",
            Self::Boolean(_) => "boolean",
            Self::Array(_) => "array",
            Self::Table(_) => "object",
            Self::Null => "null",
        }
    }
}

impl From<bool> for ConfigValue {
    fn from(b: bool) -> Self {
        Self::Boolean(b)
    }
}

impl From<i64> for ConfigValue {
    fn from(i: i64) -> Self {
        Self::Integer(i)
    }
}

impl From<f64> for ConfigValue {
    fn from(f: f64) -> Self {
        Self::Float(f)
    }
}

impl From<&str> for ConfigValue {
    fn from(s: &str) -> Self {
        Self::String(s.to_string())
    }
}

impl From<String> for ConfigValue {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

impl<T: Into<ConfigValue>> From<Vec<T>> for ConfigValue {
    fn from(items: Vec<T>) -> Self {
        Self::Array(items.into_iter().map(Into::into).collect())
    }
}

impl From<serde_json::Value> for ConfigValue {
    fn from(value: serde_json::Value) -> Self {
        use serde_json::Value;

        match value {
            Value::Null => Self::Null,
            Value::Bool(b) => Self::Boolean(b),
            Value::Number(n) => n
                .as_i64()
                .map_or_else(|| Self::Float(n.as_f64().unwrap_or(f64::NAN)), Self::Integer),
            Value::String(s) => Self::String(s),
            Value::Array(a) => Self::Array(a.into_iter().map(Self::from).collect()),
            Value::Object(o) => Self::Table(o.into_iter().map(|(k, v)| (k, Self::from(v))).collect()),
        }
    }
}

impl From<toml::Value> for ConfigValue {
    fn from(value: toml::Value) -> Self {
        use toml::Value;

        match value {
            Value::String(s) => Self::String(s),
            Value::Integer(i) => Self::Integer(i),
            Value::Float(f) => Self::Float(f),
            Value::Boolean(b) => Self::Boolean(b),
            Value::Datetime(d) => Self::String(d.to_string()),
            Value::Array(a) => Self::Array(a.into_iter().map(Self::from).collect()),
            Value::Table(t) => Self::Table(t.into_iter().map(|(k, v)| (k, Self::from(v))).collect()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn type_names() {
        assert_eq!(ConfigValue::from("x").type_name(), "string");
        assert_eq!(ConfigValue::from(1_i64).type_name(), "number");
        assert_eq!(ConfigValue::from(1.5).type_name(), "number");
        assert_eq!(ConfigValue::from(true).type_name(), "boolean");
        assert_eq!(ConfigValue::from(vec!["g"]).type_name(), "array");
        assert_eq!(ConfigValue::table().type_name(), "object");
        assert_eq!(ConfigValue::Null.type_name(), "null");
    }

    #[test]
    fn table_builder() {
        let value = ConfigValue::table()
            .with("groupValidation", false)
            .with("flags", vec!["g", "i"]);

        assert_eq!(value.get("groupValidation").and_then(ConfigValue::as_bool), Some(false));
        assert_eq!(value.get("flags").and_then(ConfigValue::as_array).map(Vec::len), Some(2));
        assert!(value.get("missing").is_none());
    }

    #[test]
    fn from_json() {
        let json = serde_json::json!({
            "wrapInsideGroup": true,
            "count": 3,
            "ratio": 0.5,
            "nothing": null,
        });
        let value = ConfigValue::from(json);

        assert_eq!(value.get("wrapInsideGroup"), Some(&ConfigValue::Boolean(true)));
        assert_eq!(value.get("count").and_then(ConfigValue::as_int), Some(3));
        assert_eq!(value.get("ratio"), Some(&ConfigValue::Float(0.5)));
        assert!(value.get("nothing").is_some_and(ConfigValue::is_null));
    }

    #[test]
    fn from_toml() {
        let table: toml::Table = toml::from_str("flags = [\"g\"]\ngroupValidation = false\n").unwrap();
        let value = ConfigValue::from(toml::Value::Table(table));

        assert_eq!(value.get("groupValidation").and_then(ConfigValue::as_bool), Some(false));
        assert_eq!(
            value.get("flags"),
            Some(&ConfigValue::Array(vec![ConfigValue::from("g")]))
        );
    }
}
