//! Line classifier for UKL input.
//!
//! Splits the input into logical lines. A logical line is a single physical
//! line, except that a dictionary left open at the end of a line continues
//! on the following lines until its braces balance.

use crate::error::{Result, UklError};

/// Prefix that marks a constant declaration.
pub const DECLARATION_PREFIX: &str = "var ";

/// Prefix that marks a comment line.
pub const COMMENT_PREFIX: char = '#';

/// A trimmed logical line with the number of its first physical line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogicalLine {
    /// Line number (1-indexed)
    pub number: usize,
    /// Line content, whitespace trimmed
    pub text: String,
}

/// What a logical line contains.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// `var <name> = <value>;`
    Declaration,
    /// `{ key: value, ... }`
    Dictionary,
}

impl LogicalLine {
    pub fn kind(&self) -> LineKind {
        if self.text.starts_with(DECLARATION_PREFIX) {
            LineKind::Declaration
        } else {
            LineKind::Dictionary
        }
    }
}

/// Iterator over the logical lines of a UKL document.
pub struct Lines<'a> {
    physical: std::iter::Enumerate<std::str::Lines<'a>>,
}

impl<'a> Lines<'a> {
    /// Create a new line iterator over the given input.
    pub fn new(input: &'a str) -> Self {
        Self {
            physical: input.lines().enumerate(),
        }
    }

    /// Next non-blank, non-comment physical line.
    fn next_significant(&mut self) -> Option<(usize, &'a str)> {
        self.physical.by_ref().find_map(|(idx, raw)| {
            let text = raw.trim();
            if text.is_empty() || text.starts_with(COMMENT_PREFIX) {
                None
            } else {
                Some((idx + 1, text))
            }
        })
    }
}

impl<'a> Iterator for Lines<'a> {
    type Item = Result<LogicalLine>;

    fn next(&mut self) -> Option<Self::Item> {
        let (number, first) = self.next_significant()?;
        let mut text = first.to_string();

        if !first.starts_with(DECLARATION_PREFIX) {
            let mut depth = brace_balance(first);
            while depth > 0 {
                let Some((_, cont)) = self.next_significant() else {
                    return Some(Err(UklError::UnterminatedDictionary { line: number }));
                };
                text.push(' ');
                text.push_str(cont);
                depth += brace_balance(cont);
            }
        }

        tracing::trace!(line = number, text = %text, "logical line");
        Some(Ok(LogicalLine { number, text }))
    }
}

/// Opening minus closing braces, ignoring braces inside quoted strings.
pub fn brace_balance(text: &str) -> i64 {
    let mut depth = 0;
    let mut in_string = false;
    for ch in text.chars() {
        match ch {
            '\'' => in_string = !in_string,
            '{' if !in_string => depth += 1,
            '}' if !in_string => depth -= 1,
            _ => {}
        }
    }
    depth
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect(input: &str) -> Vec<LogicalLine> {
        Lines::new(input).collect::<Result<Vec<_>>>().unwrap()
    }

    #[test]
    fn test_skips_blank_and_comment_lines() {
        let lines = collect("\n# comment\n   \n  { a: 1 }  \n");
        assert_eq!(
            lines,
            vec![LogicalLine {
                number: 4,
                text: "{ a: 1 }".to_string()
            }]
        );
    }

    #[test]
    fn test_classifies_declarations() {
        let lines = collect("var host = 'x';\n{ a: |host| }");
        assert_eq!(lines[0].kind(), LineKind::Declaration);
        assert_eq!(lines[1].kind(), LineKind::Dictionary);
        // `var` without a following space is not a declaration
        assert_eq!(collect("varx")[0].kind(), LineKind::Dictionary);
    }

    #[test]
    fn test_joins_open_dictionary() {
        let lines = collect("{\n  key1: 123,\n  # note\n  key2: 'value'\n}\n{ b: 2 }");
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].number, 1);
        assert_eq!(lines[0].text, "{ key1: 123, key2: 'value' }");
        assert_eq!(lines[1].number, 6);
    }

    #[test]
    fn test_unterminated_dictionary() {
        let err = Lines::new("\n{ a: {\n b: 1 }")
            .collect::<Result<Vec<_>>>()
            .unwrap_err();
        assert!(matches!(err, UklError::UnterminatedDictionary { line: 2 }));
    }

    #[test]
    fn test_brace_balance_ignores_strings() {
        assert_eq!(brace_balance("{ a: '{{' "), 1);
        assert_eq!(brace_balance("{ a: { b: 1 } }"), 0);
        assert_eq!(brace_balance("}"), -1);
    }
}
