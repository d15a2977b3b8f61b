//! ip_locate library: batch IP geolocation to delimited rows.
//!
//! Reads IP addresses from positional arguments, a file, or stdin,
//! resolves each against a local MaxMind City database, and writes one
//! delimited row per address: `address,city,subdivision,country`.
//! Per-record failures go to a diagnostic stream and never abort the
//! batch; only setup failures are fatal.
//!
//! # Example
//!
//! ```no_run
//! use std::io;
//!
//! use clap::Parser;
//! use ip_locate::{open_input, open_output, run_batch, Config, GeoDb, Opt, RecordEmitter};
//!
//! # fn main() -> Result<(), ip_locate::SetupError> {
//! let config = Config::try_from(Opt::parse())?;
//! let db = GeoDb::open(&config.db_path)?;
//! let input = open_input(config.input.as_deref())?;
//! let output = open_output(config.output.as_deref())?;
//! let mut emitter = RecordEmitter::new(output, config.delimiter);
//!
//! let report = run_batch(&config, &db, input, &mut emitter, &mut io::stderr());
//! println!("{} rows written", report.resolved);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

pub mod config;
mod emit;
mod error;
mod geoip;
mod initialization;
mod streams;

// Re-export public API
pub use config::{Config, LogFormat, LogLevel, Opt};
pub use emit::RecordEmitter;
pub use error::{ConfigError, RecordError, SetupError};
pub use geoip::{CityRecord, GeoDb, PRIVATE_SENTINEL, UNKNOWN_SENTINEL};
pub use initialization::init_logger_with;
pub use run::{run_batch, BatchReport};
pub use streams::{open_input, open_output};

// Internal run module (contains the batch driver)
mod run {
    use std::io::{BufRead, Write};
    use std::time::Instant;

    use log::info;

    use crate::config::Config;
    use crate::emit::RecordEmitter;
    use crate::geoip::GeoDb;

    /// Summary of one batch run.
    ///
    /// Per-record failures are counted here and reported on the
    /// diagnostic stream; they do not affect the process exit code.
    #[derive(Debug, Clone)]
    pub struct BatchReport {
        /// Addresses taken from the arguments or the input stream.
        pub total: usize,
        /// Rows successfully written.
        pub resolved: usize,
        /// Per-record failures reported to the diagnostic stream.
        pub failed: usize,
        /// Elapsed wall-clock seconds.
        pub elapsed_seconds: f64,
    }

    /// Runs one batch: looks up every address and emits one row each.
    ///
    /// Addresses come from `config.ips` when any were given (argument
    /// mode, `input` is not read); otherwise from `input`, one per line,
    /// until end of stream. When reading stdin interactively (no input
    /// file configured) a one-line prompt is printed first.
    ///
    /// Every per-record failure is written to `diag` with the offending
    /// input text and the batch continues. Failures writing to `diag`
    /// itself are ignored.
    pub fn run_batch<R: BufRead, W: Write>(
        config: &Config,
        db: &GeoDb,
        input: R,
        emitter: &mut RecordEmitter<W>,
        diag: &mut dyn Write,
    ) -> BatchReport {
        let start = Instant::now();
        let mut report = BatchReport {
            total: 0,
            resolved: 0,
            failed: 0,
            elapsed_seconds: 0.0,
        };

        if !config.ips.is_empty() {
            for ip_text in &config.ips {
                process_ip(db, emitter, diag, ip_text, &config.lang, &mut report);
            }
        } else {
            if config.input.is_none() {
                println!("Enter IP addresses, one per line:");
            }
            for line in input.lines() {
                match line {
                    Ok(line) => process_ip(db, emitter, diag, &line, &config.lang, &mut report),
                    Err(err) => {
                        // Report a read error once, then end the batch.
                        let _ = writeln!(diag, "error reading input: {err}");
                        break;
                    }
                }
            }
        }

        report.elapsed_seconds = start.elapsed().as_secs_f64();
        info!(
            "Processed {} address{} ({} resolved, {} failed) in {:.2}s",
            report.total,
            if report.total == 1 { "" } else { "es" },
            report.resolved,
            report.failed,
            report.elapsed_seconds
        );
        report
    }

    fn process_ip<W: Write>(
        db: &GeoDb,
        emitter: &mut RecordEmitter<W>,
        diag: &mut dyn Write,
        ip_text: &str,
        lang: &str,
        report: &mut BatchReport,
    ) {
        report.total += 1;
        match db.lookup_city(ip_text, lang) {
            Ok(record) => match emitter.emit(&record) {
                Ok(()) => report.resolved += 1,
                Err(err) => {
                    let _ = writeln!(diag, "error writing record for {}: {}", record.address, err);
                    report.failed += 1;
                }
            },
            Err(err) => {
                let _ = writeln!(diag, "{err}");
                report.failed += 1;
            }
        }
    }
}
