//! Logger initialization.

use std::io::Write;

use colored::Colorize;
use log::LevelFilter;

use crate::config::LogFormat;
use crate::error::SetupError;

/// Initializes `env_logger` with the level and format from the CLI.
///
/// The logger reads `RUST_LOG` from the environment as a baseline, then
/// the CLI-provided `level` overrides it. Log lines go to stderr, so they
/// never mix with rows written to stdout.
pub fn init_logger_with(level: LevelFilter, format: LogFormat) -> Result<(), SetupError> {
    let mut builder = env_logger::Builder::from_default_env();
    builder.filter_level(level);

    match format {
        LogFormat::Json => {
            builder.format(|buf, record| {
                writeln!(
                    buf,
                    "{{\"ts\":{},\"level\":\"{}\",\"target\":\"{}\",\"msg\":{}}}",
                    chrono::Utc::now().timestamp_millis(),
                    record.level(),
                    record.target(),
                    serde_json::to_string(&record.args().to_string())
                        .unwrap_or_else(|_| "\"\"".into())
                )
            });
        }
        LogFormat::Plain => {
            builder.format(|buf, record| {
                let level = record.level();
                let colored_level = match level {
                    log::Level::Error => level.to_string().red(),
                    log::Level::Warn => level.to_string().yellow(),
                    log::Level::Info => level.to_string().green(),
                    log::Level::Debug => level.to_string().blue(),
                    log::Level::Trace => level.to_string().purple(),
                };
                writeln!(buf, "[{}] {}", colored_level, record.args())
            });
        }
    }

    // try_init instead of init: tests may initialize more than once.
    builder.try_init()?;

    Ok(())
}
