use anyhow::Result;
use flexi_logger::{Logger, LoggerHandle};

/// Diagnostics go to stderr; `RUST_LOG` overrides the default level.
/// Keep the returned handle alive for the life of the process.
pub fn setup_logging() -> Result<LoggerHandle> {
    let handle = Logger::try_with_env_or_str("warn")?
        .log_to_stderr()
        .format(flexi_logger::default_format)
        .start()?;
    Ok(handle)
}
