//! Currency definition line parsing.
//!
//! Each non-blank input line carries five labelled fields which are located
//! independently, so their order within the line does not matter. Example:
//!
//! ```text
//! USD: name: "US Dollar", symbol: "$", exponent: 2, number: 840
//! ```

use crate::constants::patterns;
use crate::error::{CurrencyError, Result};
use crate::models::{CurrencyRecord, Field};
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::trace;

static RE_CODE: Lazy<Regex> = Lazy::new(|| Regex::new(patterns::CODE).expect("static"));
static RE_NAME: Lazy<Regex> = Lazy::new(|| Regex::new(patterns::NAME).expect("static"));
static RE_SYMBOL: Lazy<Regex> = Lazy::new(|| Regex::new(patterns::SYMBOL).expect("static"));
static RE_EXPONENT: Lazy<Regex> = Lazy::new(|| Regex::new(patterns::EXPONENT).expect("static"));
static RE_NUMBER: Lazy<Regex> = Lazy::new(|| Regex::new(patterns::NUMBER).expect("static"));

/// Parse one input line. `line_number` is 1-based and only used for errors.
///
/// Returns `Ok(None)` for blank or whitespace-only lines.
pub fn parse_line(line: &str, line_number: usize) -> Result<Option<CurrencyRecord>> {
    if line.trim().is_empty() {
        trace!("Skipping blank line {}", line_number);
        return Ok(None);
    }

    let mut builder = CurrencyRecordBuilder::new(line_number);
    for field in Field::ALL {
        builder.extract(field, line);
    }

    builder.build().map(Some)
}

/// Find the captured text for a single field, if present
pub fn extract_field(field: Field, line: &str) -> Option<&str> {
    let re = match field {
        Field::Code => &*RE_CODE,
        Field::Name => &*RE_NAME,
        Field::Symbol => &*RE_SYMBOL,
        Field::Exponent => &*RE_EXPONENT,
        Field::Number => &*RE_NUMBER,
    };

    re.captures(line)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Collects extracted field values for one line
struct CurrencyRecordBuilder<'a> {
    line_number: usize,
    code: Option<&'a str>,
    name: Option<&'a str>,
    symbol: Option<&'a str>,
    exponent: Option<&'a str>,
    number: Option<&'a str>,
}

impl<'a> CurrencyRecordBuilder<'a> {
    fn new(line_number: usize) -> Self {
        Self {
            line_number,
            code: None,
            name: None,
            symbol: None,
            exponent: None,
            number: None,
        }
    }

    fn extract(&mut self, field: Field, line: &'a str) {
        let value = extract_field(field, line);
        match field {
            Field::Code => self.code = value,
            Field::Name => self.name = value,
            Field::Symbol => self.symbol = value,
            Field::Exponent => self.exponent = value,
            Field::Number => self.number = value,
        }
    }

    fn build(self) -> Result<CurrencyRecord> {
        let line = self.line_number;
        let missing = |field| CurrencyError::MissingField { line, field };

        let code = self.code.ok_or_else(|| missing(Field::Code))?;
        let name = self.name.ok_or_else(|| missing(Field::Name))?;
        let symbol = self.symbol.ok_or_else(|| missing(Field::Symbol))?;
        let exponent = self.exponent.ok_or_else(|| missing(Field::Exponent))?;
        let number = self.number.ok_or_else(|| missing(Field::Number))?;

        Ok(CurrencyRecord {
            code: code.to_string(),
            name: name.to_string(),
            symbol: symbol.to_string(),
            numeric_code: parse_integer(number, Field::Number, line)?,
            minor_units: parse_integer(exponent, Field::Exponent, line)?,
        })
    }
}

/// Parse a captured digit run; only overflow can fail here
fn parse_integer(value: &str, field: Field, line: usize) -> Result<u32> {
    value
        .parse::<u32>()
        .map_err(|_| CurrencyError::InvalidNumber {
            line,
            field,
            value: value.to_string(),
        })
}
