//! Currency Table Library
//!
//! Turns an upstream currency definition list (one currency per line, fields
//! written as `name: "..."`, `symbol: "..."`, `exponent: N`, `number: N`) into
//! Rust source blocks that populate a static code-to-currency table.
//!
//! - [`parser`] extracts the labelled fields of one line
//! - [`render`] formats a record as a `(code, Currency { .. })` block
//! - [`generator`] runs the linear pass from input file to output

pub mod cli;
pub mod config;
pub mod constants;
pub mod error;
pub mod generator;
pub mod models;
pub mod parser;
pub mod render;

// Re-export commonly used types
pub use config::{GeneratorConfig, OutputTarget};
pub use error::{CurrencyError, Result};
pub use generator::{generate, generate_file, generate_to_string, run};
pub use models::{CurrencyRecord, Field, GenerationStats};
