use anyhow::Result;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize tracing with the specified level and format.
///
/// Logs are written to stderr; stdout carries the decoded batch.
///
/// # Arguments
/// * `level` - Log level or filter directive (trace, debug, info, warn, error)
/// * `json_format` - If true, output logs in JSON format
/// * `strip_ansi` - If true, disable ANSI color codes in logs
pub fn init(level: &str, json_format: bool, strip_ansi: bool) -> Result<()> {
    let filter = EnvFilter::try_new(level).unwrap_or_else(|e| {
        eprintln!(
            "Invalid log level '{}': {}. Falling back to 'info'",
            level, e
        );
        EnvFilter::new("info")
    });

    let registry = tracing_subscriber::registry();

    if json_format {
        let fmt_layer = fmt::layer().json().with_writer(std::io::stderr);
        registry.with(filter).with(fmt_layer).try_init()?;
    } else {
        let fmt_layer = fmt::layer()
            .with_target(true)
            .with_thread_ids(false)
            .with_file(true)
            .with_line_number(true)
            .with_ansi(!strip_ansi)
            .with_writer(std::io::stderr);

        registry.with(filter).with(fmt_layer).try_init()?;
    }

    Ok(())
}
