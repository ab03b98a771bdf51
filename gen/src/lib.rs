//! Enum name-map parsing and table generation.
//!
//! This crate turns enum-like assignment lines (`NAME = value,`) into an
//! ordered [`NameTable`] of base entries and their aliases, and renders that
//! table as the body of a `value → display string` map initializer. A line
//! whose right-hand side starts with an alphabetic character declares an
//! alias of an earlier base entry; any other right-hand side declares a new
//! base entry. Lines without `=` are ignored.
//!
//! # Main entry points
//!
//! - [`parse_enum_text`] — parse assignment lines into a [`NameTable`].
//! - [`parse_enum_text_with_report`] — same, plus a serializable
//!   [`ParseReport`](report::ParseReport) summarizing the run.
//! - [`emitter::format_table`] — render a table at a given indentation
//!   depth.
//!
//! # Example
//!
//! ```
//! use enum_name_map_gen::{emitter::format_table, parse_enum_text};
//!
//! let table = parse_enum_text("RED = 0,\nGREEN = 1,\nCRIMSON = RED,\n").unwrap();
//! assert_eq!(table.len(), 2);
//! assert_eq!(
//!     format_table(&table, 1),
//!     "\t{RED, \"RED (aka CRIMSON)\"},\n\t{GREEN, \"GREEN\"},\n"
//! );
//! ```
//!
//! [`NameTable`]: enum_name_map_core::NameTable

pub mod emitter;
pub mod parser;
pub mod report;

use enum_name_map_core::NameTable;
use parser::{EnumMapParser, ParseError};
use report::ParseReport;

/// A completed parse run: the table plus its run report.
#[derive(Debug, Clone)]
pub struct ParseRun {
    pub table: NameTable,
    pub report: ParseReport,
}

/// Parses assignment lines into an ordered name table.
///
/// Fails when an alias line references a base entry that has not been
/// declared on an earlier line.
///
/// # Examples
///
/// ```
/// use enum_name_map_gen::parse_enum_text;
///
/// let table = parse_enum_text("BLUE = 5").unwrap();
/// assert_eq!(table.find_group("BLUE").unwrap().aliases.len(), 0);
/// ```
pub fn parse_enum_text(text: &str) -> Result<NameTable, ParseError> {
    let mut parser = EnumMapParser::new(text);
    parser.parse()
}

/// Parses assignment lines and additionally produces a [`ParseReport`].
pub fn parse_enum_text_with_report(text: &str) -> Result<ParseRun, ParseError> {
    let mut parser = EnumMapParser::new(text);
    let table = parser.parse()?;
    let report = ParseReport::from_diagnostics(parser.diagnostics());
    Ok(ParseRun { table, report })
}
