//! Parser and evaluator for UKL.

use super::constants::{is_constant_name, split_declaration, ConstantTable};
use super::lines::{LineKind, Lines, LogicalLine};
use super::value::{Table, Value};
use crate::error::{Result, UklError};
use crate::DEFAULT_MAX_DEPTH;

/// Parser configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParserConfig {
    /// Maximum dictionary nesting depth; the top-level dictionary is depth 1
    pub max_depth: usize,
}

impl ParserConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the maximum dictionary nesting depth
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

/// Parser for UKL documents.
///
/// Each call to [`Parser::parse`] builds its own constant table and drops it
/// when done. Constants are resolved as soon as a dictionary line references
/// them, so declarations must come first.
pub struct Parser {
    config: ParserConfig,
}

impl Parser {
    /// Create a new parser with the given configuration.
    pub fn new(config: ParserConfig) -> Self {
        Self { config }
    }

    /// Parse a whole document into the merged top-level table.
    pub fn parse(&self, input: &str) -> Result<Table> {
        let mut constants = ConstantTable::new();
        let mut result = Table::new();

        for line in Lines::new(input) {
            let line = line?;
            match line.kind() {
                LineKind::Declaration => self.declare(&line, &mut constants)?,
                LineKind::Dictionary => {
                    let table = self.parse_top_level(&line, &constants)?;
                    tracing::debug!(line = line.number, keys = table.len(), "merging dictionary");
                    result.extend(table);
                }
            }
        }

        Ok(result)
    }

    fn declare(&self, line: &LogicalLine, constants: &mut ConstantTable) -> Result<()> {
        let decl = split_declaration(&line.text).ok_or_else(|| UklError::InvalidDeclaration {
            line: line.number,
            text: line.text.clone(),
        })?;

        if !is_constant_name(decl.name) {
            return Err(UklError::InvalidConstantName {
                line: line.number,
                name: decl.name.to_string(),
            });
        }

        let value = self.parse_value(decl.value, line.number, 0, constants)?;
        tracing::debug!(line = line.number, name = decl.name, kind = value.kind(), "constant declared");
        if constants.define(decl.name, value).is_some() {
            tracing::debug!(name = decl.name, "constant redefined");
        }
        Ok(())
    }

    fn parse_top_level(&self, line: &LogicalLine, constants: &ConstantTable) -> Result<Table> {
        let text = line.text.as_str();
        if !(text.starts_with('{') && text.ends_with('}')) {
            return Err(UklError::invalid_value(line.number, "invalid dictionary", text));
        }
        self.parse_dict(text, line.number, 1, constants)
    }

    /// Evaluate a single value: integer, string, dictionary or constant reference.
    pub fn parse_value(
        &self,
        raw: &str,
        line: usize,
        depth: usize,
        constants: &ConstantTable,
    ) -> Result<Value> {
        let text = raw.trim();
        let Some(first) = text.chars().next() else {
            return Err(UklError::invalid_value(line, "missing value", raw));
        };

        match first {
            '0'..='9' => {
                if !text.bytes().all(|b| b.is_ascii_digit()) {
                    return Err(UklError::invalid_value(line, "invalid integer", text));
                }
                text.parse::<i64>()
                    .map(Value::Integer)
                    .map_err(|_| UklError::IntegerOutOfRange {
                        line,
                        text: text.to_string(),
                    })
            }
            '\'' => {
                if text.len() < 2 || !text.ends_with('\'') {
                    return Err(UklError::invalid_value(line, "unterminated string", text));
                }
                Ok(Value::String(text[1..text.len() - 1].to_string()))
            }
            '{' => {
                if !text.ends_with('}') {
                    return Err(UklError::invalid_value(line, "invalid dictionary", text));
                }
                self.parse_dict(text, line, depth + 1, constants)
                    .map(Value::Table)
            }
            '|' => {
                if text.len() < 2 || !text.ends_with('|') {
                    return Err(UklError::invalid_value(line, "invalid constant reference", text));
                }
                lookup(constants, &text[1..text.len() - 1], line)
            }
            // Bare names resolve like `|name|`
            _ => lookup(constants, text, line),
        }
    }

    /// Evaluate a `{ key: value, ... }` literal.
    pub fn parse_dict(
        &self,
        raw: &str,
        line: usize,
        depth: usize,
        constants: &ConstantTable,
    ) -> Result<Table> {
        if depth > self.config.max_depth {
            return Err(UklError::NestingTooDeep {
                line,
                limit: self.config.max_depth,
            });
        }

        let text = raw.trim();
        let text = text.strip_prefix('{').unwrap_or(text);
        let text = text.strip_suffix('}').unwrap_or(text);

        let mut table = Table::new();
        for segment in split_top_level(text) {
            let pair = segment.trim();
            if pair.is_empty() {
                continue;
            }

            let (key, value) = pair.split_once(':').ok_or_else(|| UklError::InvalidPair {
                line,
                pair: pair.to_string(),
            })?;
            let key = key.trim();
            if !is_key(key) {
                return Err(UklError::InvalidKey {
                    line,
                    key: key.to_string(),
                });
            }

            let value = self.parse_value(value, line, depth, constants)?;
            table.insert(key.to_string(), value);
        }

        Ok(table)
    }
}

impl Default for Parser {
    fn default() -> Self {
        Self::new(ParserConfig::default())
    }
}

fn lookup(constants: &ConstantTable, name: &str, line: usize) -> Result<Value> {
    constants
        .get(name)
        .cloned()
        .ok_or_else(|| UklError::UnknownConstant {
            line,
            name: name.to_string(),
        })
}

/// Whether `key` is a valid dictionary key (`[a-z_][a-z0-9_]*`).
pub fn is_key(key: &str) -> bool {
    let mut bytes = key.bytes();
    matches!(bytes.next(), Some(b'a'..=b'z' | b'_'))
        && bytes.all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'_')
}

/// Split dictionary content on commas that are not nested in braces or quotes.
pub fn split_top_level(content: &str) -> Vec<&str> {
    let mut segments = Vec::new();
    let mut depth = 0usize;
    let mut in_string = false;
    let mut start = 0;

    for (pos, ch) in content.char_indices() {
        match ch {
            '\'' => in_string = !in_string,
            '{' if !in_string => depth += 1,
            '}' if !in_string => depth = depth.saturating_sub(1),
            ',' if !in_string && depth == 0 => {
                segments.push(&content[start..pos]);
                start = pos + 1;
            }
            _ => {}
        }
    }
    segments.push(&content[start..]);
    segments
}
