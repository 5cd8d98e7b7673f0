//! Core data structures for currency table generation.
//!
//! Defines the per-line currency record, the labelled fields it is
//! extracted from, and the run summary reported after generation.

use std::fmt;

/// One currency definition extracted from a single input line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrencyRecord {
    /// ISO 4217 alphabetic code, e.g. "USD"
    pub code: String,
    /// Human readable name, e.g. "US Dollar"
    pub name: String,
    /// Display symbol, may be non-ASCII
    pub symbol: String,
    /// ISO 4217 numeric code, e.g. 840
    pub numeric_code: u32,
    /// Number of decimal places (the "exponent" in the input)
    pub minor_units: u32,
}

/// Labelled fields of an input line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Code,
    Name,
    Symbol,
    Exponent,
    Number,
}

impl Field {
    /// All fields in extraction order
    pub const ALL: [Field; 5] = [
        Field::Code,
        Field::Name,
        Field::Symbol,
        Field::Exponent,
        Field::Number,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Code => "code",
            Field::Name => "name",
            Field::Symbol => "symbol",
            Field::Exponent => "exponent",
            Field::Number => "number",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Summary of a generation run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationStats {
    /// Lines read from the input, blank ones included
    pub lines_read: usize,
    /// Records rendered to the output
    pub records_emitted: usize,
    /// Blank or whitespace-only lines skipped
    pub blank_lines_skipped: usize,
    /// Bytes of generated text
    pub bytes_written: usize,
    /// Codes that appeared more than once
    pub duplicate_codes: usize,
}
