//! # UKL Core
//!
//! A translator from UKL, a small educational configuration language, to TOML.
//!
//! This library provides:
//! - A line-oriented parser for UKL documents with named constants
//! - A value model of integers, strings and nested dictionaries
//! - Renderers for TOML, JSON and canonical UKL output
//!
//! ## Architecture
//!
//! - [`dsl`] - Line classifier, constant table and dictionary evaluator
//! - [`emit`] - Output renderers
//! - [`error`] - Error type shared by all stages
//!
//! ## Usage
//!
//! ### Native CLI
//!
//! ```bash
//! ukl config.ukl > config.toml
//! ukl config.ukl --format json
//! ```
//!
//! ### Library
//!
//! ```
//! let table = ukl_core::dsl::parse("var port = 8080;\n{ server: { port: |port| } }").unwrap();
//! let toml = ukl_core::emit::to_toml(&table).unwrap();
//! assert!(toml.contains("port = 8080"));
//! ```
//!
//! ### WASM
//!
//! ```javascript
//! import { translate } from 'ukl_core';
//!
//! const toml = translate("{ key1: 123, key2: 'value' }");
//! ```

pub mod dsl;
pub mod emit;
pub mod error;

// Re-export main types for convenience
pub use dsl::{parse, Table, Value};
pub use emit::OutputFormat;
pub use error::{Result, UklError};

// WASM bindings
#[cfg(feature = "wasm")]
mod wasm;

#[cfg(feature = "wasm")]
pub use wasm::{translate, translate_json};

/// Default limit on dictionary nesting depth
pub const DEFAULT_MAX_DEPTH: usize = 128;

/// Translate UKL source text to a string in the given output format.
pub fn translate_str(input: &str, format: OutputFormat) -> Result<String> {
    let table = dsl::parse(input)?;
    emit::render(&table, format)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_translate_str_nested() {
        let out = translate_str("{ outer: { inner1: 42, inner2: 'text' } }", OutputFormat::Toml).unwrap();
        let back: Table = toml::from_str(&out).unwrap();
        assert_eq!(back, parse("{ outer: { inner2: 'text', inner1: 42 } }").unwrap());
    }

    #[test]
    fn test_translate_str_propagates_syntax_error() {
        let err = translate_str("var = 'localhost';", OutputFormat::Toml).unwrap_err();
        assert!(err.is_syntax());
        assert!(err.to_string().contains("invalid constant declaration"));
    }
}
