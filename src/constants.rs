//! Application constants for the currency table generator
//!
//! Field extraction patterns, default paths and logging defaults.

// =============================================================================
// Input Defaults
// =============================================================================

/// Input file read when no path is given on the command line
pub const DEFAULT_INPUT_FILE: &str = "currencies.txt";

// =============================================================================
// Field Extraction Patterns
// =============================================================================

/// Labelled extraction patterns, one capture group each
pub mod patterns {
    /// Exactly three ASCII word characters followed by a colon; the first match wins.
    /// The leading boundary keeps labels such as `name:` from matching as `ame`.
    pub const CODE: &str = r"\b([0-9A-Za-z_]{3}):";

    pub const NAME: &str = r#"name:\s"([^"]+)""#;

    pub const SYMBOL: &str = r#"symbol:\s"([^"]+)""#;

    pub const EXPONENT: &str = r"exponent:\s([0-9]+)";

    pub const NUMBER: &str = r"number:\s([0-9]+)";
}

// =============================================================================
// Output Template
// =============================================================================

/// Name of the record struct the generated blocks construct
pub const RECORD_TYPE_NAME: &str = "Currency";

/// Indentation of the outermost tuple in a generated block
pub const INDENT: &str = "    ";

// =============================================================================
// Logging
// =============================================================================

/// Target used in the default log filter
pub const LOG_TARGET: &str = "currency_table";

/// Level used when neither -v nor -q is given
pub const DEFAULT_LOG_LEVEL: &str = "warn";
