//! Command-line interface components.

use crate::constants::{DEFAULT_INPUT_FILE, DEFAULT_LOG_LEVEL};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "currency_table")]
#[command(about = "Generate a Rust currency table from a currency definition list")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Args {
    /// Currency definition file, one currency per line
    #[arg(value_name = "INPUT", default_value = DEFAULT_INPUT_FILE)]
    pub input_path: PathBuf,

    /// Write the generated table to this file instead of stdout
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Verify that --output is up to date instead of writing it
    #[arg(long, requires = "output")]
    pub check: bool,

    /// Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

impl Args {
    /// Log level derived from the verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => DEFAULT_LOG_LEVEL,
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }
}
