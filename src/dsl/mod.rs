//! Parser for the UKL configuration language.
//!
//! UKL is a small line-oriented language: a block of constant declarations
//! followed by dictionary literals. Every dictionary line is merged into one
//! top-level table; later keys overwrite earlier ones.
//!
//! # Grammar Overview
//!
//! ```text
//! document    = { line }
//! line        = comment | declaration | dictionary | empty
//! comment     = '#' { any_char }
//! declaration = "var" ws name ws? '=' ws? value ';'
//! dictionary  = '{' [ pair { ',' pair } [','] ] '}'
//! pair        = key ':' value
//! value       = integer | string | dictionary | reference
//!
//! name        = [a-z]+
//! key         = [a-z_] { [a-z0-9_] }
//! integer     = [0-9]+
//! string      = '\'' { any_char } '\''
//! reference   = '|' name '|' | name
//! ```
//!
//! A dictionary may span several physical lines; it ends at the line where
//! its braces balance. Declarations always fit on one line.
//!
//! # Example
//!
//! ```text
//! # Server settings
//! var host = 'localhost';
//! var port = 8080;
//!
//! {
//!   server: { address: |host|, port: |port| },
//!   debug_level: 2
//! }
//! ```

mod constants;
mod lines;
mod parser;
mod value;

pub use constants::{is_constant_name, split_declaration, ConstantTable, Declaration};
pub use lines::{LineKind, Lines, LogicalLine};
pub use parser::{is_key, split_top_level, Parser, ParserConfig};
pub use value::{Table, Value};

use crate::error::Result;

/// Parse a UKL string into its top-level table.
pub fn parse(input: &str) -> Result<Table> {
    parse_with_config(input, ParserConfig::default())
}

/// Parse a UKL string with a custom parser configuration.
pub fn parse_with_config(input: &str, config: ParserConfig) -> Result<Table> {
    Parser::new(config).parse(input)
}

/// Parse a UKL file.
pub fn parse_file(path: &std::path::Path) -> Result<Table> {
    parse_file_with_config(path, ParserConfig::default())
}

/// Parse a UKL file with a custom parser configuration.
pub fn parse_file_with_config(path: &std::path::Path, config: ParserConfig) -> Result<Table> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| crate::error::UklError::file_read(path, e))?;
    tracing::debug!(path = %path.display(), bytes = content.len(), "read input file");
    parse_with_config(&content, config)
}
