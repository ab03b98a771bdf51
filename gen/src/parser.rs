//! Assignment-line parser and alias classification.
//!
//! Each input line either carries an assignment (`name = value`, optionally
//! ending in a comma) or is skipped. The value's first character decides the
//! classification: alphabetic means the value names an earlier base entry
//! and the line declares an alias; any other leading character declares a
//! new base entry. The first-character rule is a heuristic on the source
//! text, not an identifier grammar (a leading underscore or digit starts a
//! base entry), and generated tables depend on that exact behavior.

use enum_name_map_core::NameTable;
use thiserror::Error;
use tracing::debug;

/// Errors that can occur while parsing assignment lines.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// An alias line referenced a base entry that was never declared.
    #[error("line {line}: alias references undefined base entry `{name}`")]
    UndefinedBase { name: String, line: usize },
}

/// Counters describing a single parse run.
#[derive(Debug, Clone, Default)]
pub struct ParseDiagnostics {
    /// Lines consumed from the input.
    pub total_lines: usize,
    /// Lines without `=`, skipped.
    pub skipped_lines: usize,
    /// Lines classified as base entries (re-declarations included).
    pub base_lines: usize,
    /// Lines classified as aliases.
    pub alias_lines: usize,
}

impl ParseDiagnostics {
    /// Fraction of input lines that carried an assignment.
    pub fn recognized_ratio(&self) -> f64 {
        if self.total_lines == 0 {
            return 0.0;
        }
        (self.total_lines - self.skipped_lines) as f64 / self.total_lines as f64
    }
}

/// Classification of an assignment's right-hand side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ValueKind {
    /// Leading alphabetic character: a reference to an earlier base entry.
    AliasRef,
    /// Anything else: a literal establishing a new base entry.
    Literal,
}

/// Line-oriented parser building a [`NameTable`] from assignment text.
///
/// Construct with [`EnumMapParser::new`], call [`parse`](EnumMapParser::parse)
/// once, then read per-run counters from
/// [`diagnostics`](EnumMapParser::diagnostics). Most consumers should use
/// [`parse_enum_text`](crate::parse_enum_text) instead.
pub struct EnumMapParser<'a> {
    text: &'a str,
    diagnostics: ParseDiagnostics,
}

impl<'a> EnumMapParser<'a> {
    pub fn new(text: &'a str) -> Self {
        Self {
            text,
            diagnostics: ParseDiagnostics::default(),
        }
    }

    /// Walks the input lines and builds the name table.
    ///
    /// Stops at the first alias line whose referent is unknown; the table
    /// built so far is discarded.
    pub fn parse(&mut self) -> Result<NameTable, ParseError> {
        let mut table = NameTable::new();

        for (index, line) in self.text.lines().enumerate() {
            self.diagnostics.total_lines += 1;

            let Some((name, value)) = split_assignment(line) else {
                self.diagnostics.skipped_lines += 1;
                debug!(line = index + 1, "no assignment, skipping");
                continue;
            };

            match classify_value(value) {
                ValueKind::AliasRef => {
                    if !table.push_alias(value, name) {
                        return Err(ParseError::UndefinedBase {
                            name: value.to_string(),
                            line: index + 1,
                        });
                    }
                    self.diagnostics.alias_lines += 1;
                }
                ValueKind::Literal => {
                    table.insert_base(name);
                    self.diagnostics.base_lines += 1;
                }
            }
        }

        debug!(
            bases = self.diagnostics.base_lines,
            aliases = self.diagnostics.alias_lines,
            skipped = self.diagnostics.skipped_lines,
            "parse complete"
        );
        Ok(table)
    }

    /// Counters for the run performed by [`parse`](EnumMapParser::parse).
    pub fn diagnostics(&self) -> &ParseDiagnostics {
        &self.diagnostics
    }
}

/// Splits a line on its first `=`, trimming whitespace from both parts and
/// stripping one trailing comma from the value. Returns `None` for lines
/// without `=`.
///
/// The comma is stripped after trimming, with no re-trim afterwards: a value
/// like `RED ,` yields `RED ` (trailing space kept).
fn split_assignment(line: &str) -> Option<(&str, &str)> {
    let (left, right) = line.split_once('=')?;
    let name = left.trim();
    let mut value = right.trim();
    if let Some(stripped) = value.strip_suffix(',') {
        value = stripped;
    }
    Some((name, value))
}

fn classify_value(value: &str) -> ValueKind {
    match value.chars().next() {
        Some(ch) if ch.is_alphabetic() => ValueKind::AliasRef,
        _ => ValueKind::Literal,
    }
}
