use anyhow::Context;
use clap::Parser;
use currency_table::cli::Args;
use currency_table::constants::LOG_TARGET;
use currency_table::{GeneratorConfig, generator};
use std::process;
use tracing::debug;

fn main() {
    let args = Args::parse();

    setup_logging(&args);

    match run(&args) {
        Ok(()) => process::exit(0),
        Err(error) => {
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}

fn run(args: &Args) -> anyhow::Result<()> {
    debug!("Command line arguments: {:?}", args);

    let config = GeneratorConfig::from_args(args).context("Invalid arguments")?;

    let stats = generator::run(&config).with_context(|| {
        format!(
            "Failed to generate currency table from {}",
            config.input_path.display()
        )
    })?;

    debug!(
        "Run summary: {} lines read, {} records, {} bytes",
        stats.lines_read, stats.records_emitted, stats.bytes_written
    );
    Ok(())
}

/// Set up structured logging on stderr; stdout carries only generated code
fn setup_logging(args: &Args) {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = args.get_log_level();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("{}={}", LOG_TARGET, log_level)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .init();

    debug!("Logging initialized at level: {}", log_level);
}
