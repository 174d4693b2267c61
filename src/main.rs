use std::io::{self, BufWriter};
use std::process::ExitCode;

use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

/// Log filter built from RUST_LOG-style directives; logging is off when none
/// are given.
fn log_filter(directives: &str) -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(LevelFilter::OFF.into())
        .parse_lossy(directives)
}

fn main() -> ExitCode {
    // Logs go to stderr so stdout carries only verdicts. Enable with
    // RUST_LOG, e.g. RUST_LOG=domain_checker=debug.
    let directives = std::env::var(EnvFilter::DEFAULT_ENV).unwrap_or_default();
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(&directives))
        .with_writer(io::stderr)
        .without_time()
        .try_init()
        .ok();

    let stdin = io::stdin().lock();
    let stdout = BufWriter::new(io::stdout().lock());

    match domain_checker::run(stdin, stdout) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "batch failed");
            eprintln!("domain-checker: {}", e);
            ExitCode::FAILURE
        }
    }
}
