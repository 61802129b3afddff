use anyhow::Result;
use std::fs::File;
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

const DEFAULT_FILTER: &str = "info,homework_notifier_rust=debug,homework_rust_core=debug";

/// Log to stdout and to `log_file` (truncated).
///
/// An unwritable log file only downgrades to stdout. `log` records from this
/// crate are bridged into the same subscriber.
pub fn init(log_file: &Path) -> Result<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let (file_layer, file_error) = match File::create(log_file) {
        Ok(file) => (
            Some(
                fmt::layer()
                    .with_ansi(false)
                    .with_writer(Mutex::new(file)),
            ),
            None,
        ),
        Err(e) => (None, Some(e)),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stdout))
        .with(file_layer)
        .try_init()?;

    if let Some(e) = file_error {
        log::warn!(
            "Cannot open log file {}: {}; logging to stdout only",
            log_file.display(),
            e
        );
    }

    Ok(())
}
