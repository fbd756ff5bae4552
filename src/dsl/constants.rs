//! Constant declarations and the per-parse constant table.

use std::collections::HashMap;

use super::lines::DECLARATION_PREFIX;
use super::value::Value;

/// Constants declared so far in a single parse, by name.
#[derive(Debug, Clone, Default)]
pub struct ConstantTable {
    values: HashMap<String, Value>,
}

impl ConstantTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a constant, replacing any earlier definition. Returns the old value.
    pub fn define(&mut self, name: impl Into<String>, value: Value) -> Option<Value> {
        self.values.insert(name.into(), value)
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// The pieces of a `var <name> = <value>;` line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Declaration<'a> {
    pub name: &'a str,
    pub value: &'a str,
}

/// Split a declaration line into name and raw value.
///
/// Returns `None` unless the line has the shape `var <name> = <value>;`
/// with `<name>` made of lowercase letters and a non-empty `<value>`.
pub fn split_declaration(line: &str) -> Option<Declaration<'_>> {
    let rest = line.strip_prefix(DECLARATION_PREFIX)?.trim_start();
    let body = rest.strip_suffix(';')?;

    let name_len = body
        .find(|c: char| !c.is_ascii_lowercase())
        .unwrap_or(body.len());
    let (name, after_name) = body.split_at(name_len);
    let value = after_name.trim_start().strip_prefix('=')?.trim();

    if name.is_empty() || value.is_empty() {
        return None;
    }
    Some(Declaration { name, value })
}

/// Whether `name` is a valid constant name (`[a-z]+`).
pub fn is_constant_name(name: &str) -> bool {
    !name.is_empty() && name.bytes().all(|b| b.is_ascii_lowercase())
}
