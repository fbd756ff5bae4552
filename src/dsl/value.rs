//! Evaluated values produced by the UKL parser.

use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A UKL mapping: keys in insertion order, compared as an unordered map.
pub type Table = IndexMap<String, Value>;

/// A fully resolved UKL value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// Non-negative integer literal
    Integer(i64),
    /// Single-quoted string, quotes stripped
    String(String),
    /// Nested dictionary
    Table(Table),
}

impl Value {
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Self::Integer(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_table(&self) -> Option<&Table> {
        match self {
            Self::Table(t) => Some(t),
            _ => None,
        }
    }

    /// Short name of the variant, used in log output.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Integer(_) => "integer",
            Self::String(_) => "string",
            Self::Table(_) => "dictionary",
        }
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Self::Integer(n)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

impl From<Table> for Value {
    fn from(t: Table) -> Self {
        Self::Table(t)
    }
}

/// Formats the value in canonical UKL syntax.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{}", n),
            Self::String(s) => write!(f, "'{}'", s),
            Self::Table(t) => write_table(f, t),
        }
    }
}

/// Write a table as a single-line UKL dictionary literal.
pub(crate) fn write_table(f: &mut impl fmt::Write, table: &Table) -> fmt::Result {
    if table.is_empty() {
        return f.write_str("{}");
    }
    f.write_str("{ ")?;
    for (i, (key, value)) in table.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{}: {}", key, value)?;
    }
    f.write_str(" }")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_nested() {
        let mut inner = Table::new();
        inner.insert("port".to_string(), Value::from(8080));
        inner.insert("host".to_string(), Value::from("localhost"));
        let value = Value::from(inner);
        assert_eq!(value.to_string(), "{ port: 8080, host: 'localhost' }");
        assert_eq!(Value::from(Table::new()).to_string(), "{}");
    }

    #[test]
    fn test_table_equality_ignores_order() {
        let mut a = Table::new();
        a.insert("x".to_string(), Value::from(1));
        a.insert("y".to_string(), Value::from(2));
        let mut b = Table::new();
        b.insert("y".to_string(), Value::from(2));
        b.insert("x".to_string(), Value::from(1));
        assert_eq!(a, b);
    }

    #[test]
    fn test_accessors() {
        assert_eq!(Value::from(7).as_integer(), Some(7));
        assert_eq!(Value::from("a").as_str(), Some("a"));
        assert!(Value::from("a").as_table().is_none());
        assert_eq!(Value::from(Table::new()).kind(), "dictionary");
    }
}
