//! Sudoku Runner - Application Entry Point

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use sudoku_runner::{
    Config, TestRunner,
    config::{LogFormat, LoggingConfig},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;

    init_tracing(&config.logging);

    tracing::info!(root = %config.paths.root.display(), "Starting Sudoku test run");

    let runner = TestRunner::new(config);
    let report = runner.run().await?;

    tracing::info!(
        cases = report.cases.len(),
        bytes = report.total_bytes(),
        elapsed_ms = report.elapsed.as_millis() as u64,
        "All test cases completed"
    );

    Ok(())
}

/// Logs go to stderr; stdout carries only progress lines.
fn init_tracing(logging: &LoggingConfig) {
    let filter = tracing_subscriber::EnvFilter::try_new(&logging.rust_log)
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let registry = tracing_subscriber::registry().with(filter);

    match logging.format {
        LogFormat::Pretty => registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init(),
        LogFormat::Json => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            )
            .init(),
    }
}
