//! Currency table generation.
//!
//! A single linear pass over the input: every non-blank line is parsed,
//! rendered and written before the next one is looked at. The first
//! malformed line aborts the run.

use crate::config::{GeneratorConfig, OutputTarget};
use crate::error::{CurrencyError, Result};
use crate::models::GenerationStats;
use crate::parser::parse_line;
use crate::render::write_record;
use std::collections::HashMap;
use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use tracing::{debug, info, warn};

/// Generate table blocks for every record in `contents`, in input order
pub fn generate<W: Write>(contents: &str, writer: &mut W) -> Result<GenerationStats> {
    let mut stats = GenerationStats::default();
    let mut first_seen: HashMap<String, usize> = HashMap::new();

    for (index, line) in contents.lines().enumerate() {
        let line_number = index + 1;
        stats.lines_read = line_number;

        let Some(record) = parse_line(line, line_number)? else {
            stats.blank_lines_skipped += 1;
            continue;
        };

        if let Some(first) = first_seen.get(&record.code) {
            warn!(
                "Currency code {} on line {} was already defined on line {}",
                record.code, line_number, first
            );
            stats.duplicate_codes += 1;
        } else {
            first_seen.insert(record.code.clone(), line_number);
        }

        stats.bytes_written += write_record(writer, &record)?;
        stats.records_emitted += 1;
    }

    debug!(
        "Generated {} records from {} lines ({} blank)",
        stats.records_emitted, stats.lines_read, stats.blank_lines_skipped
    );

    Ok(stats)
}

/// Read the input file and generate its table blocks into `writer`
pub fn generate_file<W: Write>(input_path: &Path, writer: &mut W) -> Result<GenerationStats> {
    let contents = read_input(input_path)?;
    generate(&contents, writer)
}

/// Generate the complete table text in memory
pub fn generate_to_string(contents: &str) -> Result<(String, GenerationStats)> {
    let mut buf = Vec::with_capacity(contents.len() * 2);
    let stats = generate(contents, &mut buf)?;
    // Input is valid UTF-8 and the template only adds ASCII
    let text = String::from_utf8(buf)
        .map_err(|e| CurrencyError::Io(io::Error::new(io::ErrorKind::InvalidData, e)))?;
    Ok((text, stats))
}

/// Run a generation as described by `config`
pub fn run(config: &GeneratorConfig) -> Result<GenerationStats> {
    info!("Reading currency definitions from {}", config.input_path.display());

    let stats = match &config.output {
        OutputTarget::Stdout => {
            let stdout = io::stdout();
            let mut writer = BufWriter::new(stdout.lock());
            let stats = generate_file(&config.input_path, &mut writer)?;
            writer.flush()?;
            stats
        }
        OutputTarget::File(path) => {
            let contents = read_input(&config.input_path)?;
            let (text, stats) = generate_to_string(&contents)?;

            if config.check {
                check_output(path, &text)?;
                info!("{} is up to date", path.display());
            } else {
                fs::write(path, text.as_bytes())?;
                info!("Wrote {} bytes to {}", stats.bytes_written, path.display());
            }
            stats
        }
    };

    info!(
        "Emitted {} currency records ({} duplicate codes)",
        stats.records_emitted, stats.duplicate_codes
    );

    Ok(stats)
}

/// Compare freshly generated text with the file already on disk
fn check_output(path: &Path, expected: &str) -> Result<()> {
    let existing = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            return Err(CurrencyError::StaleOutput {
                path: path.to_path_buf(),
            });
        }
        Err(e) => return Err(CurrencyError::Io(e)),
    };

    if existing != expected.as_bytes() {
        return Err(CurrencyError::StaleOutput {
            path: path.to_path_buf(),
        });
    }

    Ok(())
}

fn read_input(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => CurrencyError::InputNotFound {
            path: path.to_path_buf(),
        },
        _ => CurrencyError::Io(e),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Field;
    use std::path::PathBuf;
    use tempfile::TempDir;

    const TWO_LINES: &str = concat!(
        "USD: name: \"US Dollar\", symbol: \"$\", exponent: 2, number: 840\n",
        "EUR: name: \"Euro\", symbol: \"€\", exponent: 2, number: 978\n",
    );

    #[test]
    fn test_empty_input() {
        let (text, stats) = generate_to_string("").unwrap();
        assert!(text.is_empty());
        assert_eq!(stats, GenerationStats::default());
    }

    #[test]
    fn test_order_is_preserved() {
        let (text, stats) = generate_to_string(TWO_LINES).unwrap();
        assert_eq!(stats.records_emitted, 2);
        assert_eq!(stats.bytes_written, text.len());

        let usd = text.find("\"USD\"").unwrap();
        let eur = text.find("\"EUR\"").unwrap();
        assert!(usd < eur);
    }

    #[test]
    fn test_trailing_blank_lines_are_skipped() {
        let input = format!("{}\n   \n\n", TWO_LINES);
        let (_, stats) = generate_to_string(&input).unwrap();
        assert_eq!(stats.records_emitted, 2);
        assert_eq!(stats.blank_lines_skipped, 3);
    }

    #[test]
    fn test_crlf_input() {
        let input = TWO_LINES.replace('\n', "\r\n");
        let (crlf, _) = generate_to_string(&input).unwrap();
        let (lf, _) = generate_to_string(TWO_LINES).unwrap();
        assert_eq!(crlf, lf);
    }

    #[test]
    fn test_failure_aborts_after_partial_output() {
        let input = format!(
            "{}GBP: name: \"Pound Sterling\", exponent: 2, number: 826\n",
            TWO_LINES
        );
        let mut buf = Vec::new();
        let err = generate(&input, &mut buf).unwrap_err();
        assert!(matches!(
            err,
            CurrencyError::MissingField {
                line: 3,
                field: Field::Symbol
            }
        ));

        // Blocks for the lines before the failure were already written
        let written = String::from_utf8(buf).unwrap();
        assert!(written.contains("\"EUR\""));
        assert!(!written.contains("GBP"));
    }

    #[test]
    fn test_duplicate_codes_are_counted() {
        let input = format!("{}{}", TWO_LINES, TWO_LINES);
        let (_, stats) = generate_to_string(&input).unwrap();
        assert_eq!(stats.records_emitted, 4);
        assert_eq!(stats.duplicate_codes, 2);
    }

    #[test]
    fn test_missing_input_file() {
        let err = generate_file(Path::new("/nonexistent/currencies.txt"), &mut io::sink())
            .unwrap_err();
        assert!(matches!(err, CurrencyError::InputNotFound { .. }));
    }

    fn file_config(dir: &TempDir, check: bool) -> (GeneratorConfig, PathBuf) {
        let input = dir.path().join("currencies.txt");
        fs::write(&input, TWO_LINES).unwrap();
        let output = dir.path().join("currencies.rs");
        let config = GeneratorConfig {
            input_path: input,
            output: OutputTarget::File(output.clone()),
            check,
        };
        (config, output)
    }

    #[test]
    fn test_run_writes_output_file() {
        let dir = TempDir::new().unwrap();
        let (config, output) = file_config(&dir, false);

        let stats = run(&config).unwrap();
        let written = fs::read_to_string(&output).unwrap();
        assert_eq!(written.len(), stats.bytes_written);
        assert_eq!(written, generate_to_string(TWO_LINES).unwrap().0);
    }

    #[test]
    fn test_check_mode() {
        let dir = TempDir::new().unwrap();
        let (config, output) = file_config(&dir, true);

        // Missing output counts as stale
        assert!(matches!(
            run(&config),
            Err(CurrencyError::StaleOutput { .. })
        ));
        assert!(!output.exists());

        fs::write(&output, generate_to_string(TWO_LINES).unwrap().0).unwrap();
        run(&config).unwrap();

        fs::write(&output, "stale").unwrap();
        assert!(matches!(
            run(&config),
            Err(CurrencyError::StaleOutput { .. })
        ));
    }

    #[test]
    fn test_failed_run_leaves_no_output_file() {
        let dir = TempDir::new().unwrap();
        let (config, output) = file_config(&dir, false);
        fs::write(&config.input_path, "USD: name: \"US Dollar\"\n").unwrap();

        assert!(run(&config).is_err());
        assert!(!output.exists());
    }
}
