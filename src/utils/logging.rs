//! Stderr logger setup for binaries and benches.

use std::io::Write;

use env_logger::{Builder, Env};

/// Environment variable holding the log filter (`error`..`trace`, or any
/// `env_logger` directive such as `sapling_chess::search=trace`).
pub const LOG_ENV_VAR: &str = "SAPLING_LOG";
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Install the global logger. Each line carries a local timestamp, the
/// level, and the emitting module. Calling it twice is harmless; the second
/// call reports the logger that is already set.
pub fn init_logging() -> Result<(), log::SetLoggerError> {
    Builder::from_env(Env::default().filter_or(LOG_ENV_VAR, DEFAULT_LOG_FILTER))
        .format(|buf, record| {
            writeln!(
                buf,
                "{} {:<5} [{}] {}",
                chrono::Local::now().format("%H:%M:%S%.3f"),
                record.level(),
                record.module_path().unwrap_or("?"),
                record.args()
            )
        })
        .try_init()
}

#[cfg(test)]
mod tests {
    use super::init_logging;

    #[test]
    fn second_init_reports_existing_logger() {
        let _ = init_logging();
        assert!(init_logging().is_err());
    }
}
