//! Output renderers for parsed UKL tables.

use crate::dsl::{Table, Value};
use crate::error::Result;

/// Output format for a translated document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum OutputFormat {
    /// TOML document
    #[default]
    Toml,
    /// Pretty-printed JSON object
    Json,
    /// Canonical single-line UKL dictionary
    Ukl,
}

/// Render a table in the requested format.
pub fn render(table: &Table, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Toml => to_toml(table),
        OutputFormat::Json => to_json(table),
        OutputFormat::Ukl => Ok(to_ukl(table)),
    }
}

/// Render a table as a TOML document.
pub fn to_toml(table: &Table) -> Result<String> {
    Ok(toml::to_string(table)?)
}

/// Render a table as pretty-printed JSON.
pub fn to_json(table: &Table) -> Result<String> {
    Ok(serde_json::to_string_pretty(table)?)
}

/// Render a table as a UKL dictionary literal that parses back to the same table.
pub fn to_ukl(table: &Table) -> String {
    Value::Table(table.clone()).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dsl::parse;

    #[test]
    fn test_flat_toml() {
        let table = parse("{ key1: 123, key2: 'value' }").unwrap();
        let out = to_toml(&table).unwrap();
        assert!(out.contains("key1 = 123"));
        assert!(out.contains("key2 = \"value\""));
    }

    #[test]
    fn test_nested_toml_round_trip() {
        let table = parse("{ top: 1, outer: { inner1: 42, inner2: 'text', deep: { x: 'y' } }, name: 'n' }")
            .unwrap();
        let out = to_toml(&table).unwrap();
        assert!(out.contains("[outer]"));
        let back: Table = toml::from_str(&out).unwrap();
        assert_eq!(back, table);
    }

    #[test]
    fn test_json_output() {
        let table = parse("{ outer: { inner: 42 } }").unwrap();
        let out = to_json(&table).unwrap();
        let back: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(back["outer"]["inner"], 42);
    }

    #[test]
    fn test_ukl_output_reparses() {
        let table = parse("{ a: 'x', b: { c: 1 } }").unwrap();
        let out = render(&table, OutputFormat::Ukl).unwrap();
        assert_eq!(out, "{ a: 'x', b: { c: 1 } }");
        assert_eq!(parse(&out).unwrap(), table);
    }

    #[test]
    fn test_empty_table() {
        assert_eq!(to_toml(&Table::new()).unwrap().trim(), "");
        assert_eq!(to_ukl(&Table::new()), "{}");
    }
}
