//! Rust source template for one currency record.
//!
//! Each block is a `(code, Currency { .. })` tuple followed by a comma, so the
//! concatenated blocks can be pasted inside a table literal such as
//! `&[(&str, Currency)]`.

use crate::constants::{INDENT, RECORD_TYPE_NAME};
use crate::models::CurrencyRecord;
use std::io::{self, Write};

/// Render a record as a Rust source block, trailing newline included
pub fn render_record(record: &CurrencyRecord) -> String {
    let i1 = INDENT;
    let i2 = INDENT.repeat(2);
    let i3 = INDENT.repeat(3);

    format!(
        "{i1}(\n\
         {i2}{code},\n\
         {i2}{ty} {{\n\
         {i3}code: {code},\n\
         {i3}symbol: {symbol},\n\
         {i3}numeric_code: {numeric_code},\n\
         {i3}minor_units: {minor_units},\n\
         {i3}name: {name},\n\
         {i2}}},\n\
         {i1}),\n",
        code = string_literal(&record.code),
        ty = RECORD_TYPE_NAME,
        symbol = string_literal(&record.symbol),
        numeric_code = record.numeric_code,
        minor_units = record.minor_units,
        name = string_literal(&record.name),
    )
}

/// Render a record straight into `writer`, returning the number of bytes written
pub fn write_record<W: Write>(writer: &mut W, record: &CurrencyRecord) -> io::Result<usize> {
    let block = render_record(record);
    writer.write_all(block.as_bytes())?;
    Ok(block.len())
}

/// Quote a value as a Rust string literal, keeping the upstream text verbatim
fn string_literal(value: &str) -> String {
    let mut literal = String::with_capacity(value.len() + 2);
    literal.push('"');
    for c in value.chars() {
        match c {
            '\\' => literal.push_str("\\\\"),
            '"' => literal.push_str("\\\""),
            '\r' => literal.push_str("\\r"),
            _ => literal.push(c),
        }
    }
    literal.push('"');
    literal
}
