//! Process-wide logger bootstrap for the binaries.
//!
//! The library only emits through the `log` facade; nothing is printed until
//! a binary calls [`init_logging`].

use flexi_logger::{Logger, LoggerHandle, WriteMode};
use log::info;
use once_cell::sync::OnceCell;

static LOGGING_STATE: OnceCell<LoggingState> = OnceCell::new();

struct LoggingState {
    level: String,
    _logger: LoggerHandle,
}

/// Starts a stderr logger at `level` (a `flexi_logger` spec such as `info`
/// or `timetable_builder=debug`).
///
/// Repeating the call with the same level is a no-op; a different level is
/// rejected.
pub fn init_logging(level: &str) -> Result<(), String> {
    let level = level.trim();
    if level.is_empty() {
        return Err("log level must not be empty".to_string());
    }

    if let Some(state) = LOGGING_STATE.get() {
        if state.level == level {
            return Ok(());
        }
        return Err(format!(
            "logging already initialized with level `{}`; refusing to switch to `{}`",
            state.level, level
        ));
    }

    LOGGING_STATE.get_or_try_init(|| -> Result<LoggingState, String> {
        let logger = Logger::try_with_str(level)
            .map_err(|err| format!("invalid log level `{level}`: {err}"))?
            .log_to_stderr()
            .write_mode(WriteMode::Direct)
            .start()
            .map_err(|err| format!("failed to start logger: {err}"))?;
        info!(
            "event=logging_init level={} version={}",
            level,
            env!("CARGO_PKG_VERSION")
        );
        Ok(LoggingState {
            level: level.to_string(),
            _logger: logger,
        })
    })?;
    Ok(())
}
