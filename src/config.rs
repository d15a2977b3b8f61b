//! Application configuration and CLI options.
//!
//! `Opt` is the raw clap surface; `Config` is the validated form the rest
//! of the crate consumes. Validation rejects contradictory input sources
//! and delimiters the CSV writer cannot represent.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::error::ConfigError;

/// Logging level for the application.
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Command-line options.
///
/// Addresses can be given directly as arguments, read from a file with
/// `--in`, or piped on stdin when neither is present.
///
/// # Examples
///
/// ```bash
/// # Look up two addresses directly
/// ip_locate 8.8.8.8 1.1.1.1
///
/// # Read addresses from a file, write semicolon-delimited rows
/// ip_locate --in addresses.txt --out rows.csv --delimiter ';'
///
/// # Names in German where the database has them
/// ip_locate --lang de 89.160.20.128
/// ```
#[derive(Debug, Parser)]
#[command(
    name = "ip_locate",
    about = "Looks up IP addresses in a local GeoLite2 City database and prints one delimited row per address."
)]
pub struct Opt {
    /// IP addresses to look up; omit to read from --in or stdin
    #[arg(value_name = "IP")]
    pub ips: Vec<String>,

    /// Path to the GeoLite2 City database
    #[arg(long, value_parser, default_value = "GeoLite2-City.mmdb")]
    pub db: PathBuf,

    /// Input file of newline-delimited IP addresses; reads stdin when omitted
    #[arg(long = "in", value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Output file; must not already exist. Writes to stdout when omitted
    #[arg(long = "out", value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Language code for looked-up names
    #[arg(long, default_value = "en")]
    pub lang: String,

    /// Field delimiter for output rows (one character)
    #[arg(long, default_value = ",")]
    pub delimiter: String,

    /// Log level: error|warn|info|debug|trace
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,
}

/// Validated configuration.
///
/// Invariants: `delimiter` is a single ASCII byte, and `ips` is empty
/// whenever `input` is set.
#[derive(Debug, Clone)]
pub struct Config {
    /// Geolocation database file.
    pub db_path: PathBuf,

    /// Input file of newline-delimited addresses; `None` means stdin.
    pub input: Option<PathBuf>,

    /// Output file; `None` means stdout. A named file must not pre-exist.
    pub output: Option<PathBuf>,

    /// Language code used to select localized names.
    pub lang: String,

    /// Field delimiter for output rows.
    pub delimiter: u8,

    /// Addresses supplied as positional arguments.
    pub ips: Vec<String>,

    /// Log level.
    pub log_level: LogLevel,

    /// Log format.
    pub log_format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            db_path: PathBuf::from("GeoLite2-City.mmdb"),
            input: None,
            output: None,
            lang: "en".to_string(),
            delimiter: b',',
            ips: Vec::new(),
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
        }
    }
}

impl TryFrom<Opt> for Config {
    type Error = ConfigError;

    fn try_from(opt: Opt) -> Result<Self, Self::Error> {
        if !opt.ips.is_empty() && opt.input.is_some() {
            return Err(ConfigError::MutuallyExclusiveSources);
        }

        // A single char wider than one byte is still unusable: the CSV
        // writer delimits on bytes.
        let delimiter = match opt.delimiter.as_bytes() {
            &[byte] => byte,
            _ => return Err(ConfigError::InvalidDelimiter(opt.delimiter)),
        };

        Ok(Config {
            db_path: opt.db,
            input: opt.input,
            output: opt.output,
            lang: opt.lang,
            delimiter,
            ips: opt.ips,
            log_level: opt.log_level,
            log_format: opt.log_format,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_opt() -> Opt {
        Opt {
            ips: Vec::new(),
            db: PathBuf::from("GeoLite2-City.mmdb"),
            input: None,
            output: None,
            lang: "en".to_string(),
            delimiter: ",".to_string(),
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
        }
    }

    #[test]
    fn test_log_level_conversion() {
        assert_eq!(
            log::LevelFilter::from(LogLevel::Error),
            log::LevelFilter::Error
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Warn),
            log::LevelFilter::Warn
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Info),
            log::LevelFilter::Info
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Debug),
            log::LevelFilter::Debug
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Trace),
            log::LevelFilter::Trace
        );
    }

    #[test]
    fn test_positional_ips_and_input_file_conflict() {
        let mut opt = base_opt();
        opt.ips = vec!["8.8.8.8".to_string()];
        opt.input = Some(PathBuf::from("ips.txt"));

        let err = Config::try_from(opt).unwrap_err();
        assert!(matches!(err, ConfigError::MutuallyExclusiveSources));
    }

    #[test]
    fn test_delimiter_must_be_one_byte() {
        for bad in ["", ",,", "tab", "é"] {
            let mut opt = base_opt();
            opt.delimiter = bad.to_string();

            let err = Config::try_from(opt).unwrap_err();
            assert!(
                matches!(err, ConfigError::InvalidDelimiter(ref d) if d == bad),
                "delimiter {:?} should be rejected",
                bad
            );
        }
    }

    #[test]
    fn test_tab_delimiter_accepted() {
        let mut opt = base_opt();
        opt.delimiter = "\t".to_string();

        let config = Config::try_from(opt).expect("tab is a valid delimiter");
        assert_eq!(config.delimiter, b'\t');
    }

    #[test]
    fn test_defaults_carry_through() {
        let config = Config::try_from(base_opt()).expect("defaults are valid");
        assert_eq!(config.db_path, PathBuf::from("GeoLite2-City.mmdb"));
        assert_eq!(config.lang, "en");
        assert_eq!(config.delimiter, b',');
        assert!(config.input.is_none());
        assert!(config.output.is_none());
        assert!(config.ips.is_empty());
    }
}
