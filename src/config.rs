//! Generator configuration and validation.
//!
//! Built from command-line arguments; there are no configuration files.

use crate::cli::Args;
use crate::error::{CurrencyError, Result};
use std::path::PathBuf;
use tracing::debug;

/// Where generated text goes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    /// Stream blocks to stdout as they are rendered
    Stdout,
    /// Render fully, then write (or compare, in check mode) this file
    File(PathBuf),
}

/// Settings for one generation run
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Currency definition file
    pub input_path: PathBuf,

    /// Output destination
    pub output: OutputTarget,

    /// Compare against the existing output instead of writing it
    pub check: bool,
}

impl GeneratorConfig {
    /// Config that streams `input_path` to stdout
    pub fn new(input_path: impl Into<PathBuf>) -> Self {
        Self {
            input_path: input_path.into(),
            output: OutputTarget::Stdout,
            check: false,
        }
    }

    /// Build and validate a config from parsed arguments
    pub fn from_args(args: &Args) -> Result<Self> {
        let config = Self {
            input_path: args.input_path.clone(),
            output: match &args.output {
                Some(path) => OutputTarget::File(path.clone()),
                None => OutputTarget::Stdout,
            },
            check: args.check,
        };

        config.validate()?;
        debug!("Loaded configuration: {:?}", config);
        Ok(config)
    }

    /// Validate configuration settings
    pub fn validate(&self) -> Result<()> {
        if self.check && self.output == OutputTarget::Stdout {
            return Err(CurrencyError::Configuration {
                message: "--check needs an --output file to compare against".to_string(),
            });
        }

        if !self.input_path.is_file() {
            return Err(CurrencyError::InputNotFound {
                path: self.input_path.clone(),
            });
        }

        if let OutputTarget::File(path) = &self.output {
            if path == &self.input_path {
                return Err(CurrencyError::Configuration {
                    message: format!("output path {} is the input file", path.display()),
                });
            }
        }

        Ok(())
    }
}
