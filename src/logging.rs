use flexi_logger::{Logger, LoggerHandle};
use miette::{IntoDiagnostic, Result};

pub fn level_for(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Starts logging to stderr. Keep the handle alive for as long as you log.
pub fn init(verbosity: u8) -> Result<LoggerHandle> {
    Logger::try_with_str(level_for(verbosity))
        .into_diagnostic()?
        .log_to_stderr()
        .start()
        .into_diagnostic()
}
