//! Error type definitions.
//!
//! Failures come in two tiers: `SetupError` is fatal and carries a distinct
//! process exit code per cause, while `RecordError` covers single-address
//! failures that are reported to the diagnostic stream and never stop the
//! batch.

use std::io;
use std::net::IpAddr;
use std::path::PathBuf;

use log::SetLoggerError;
use maxminddb::MaxMindDbError;
use thiserror::Error;

/// Configuration validation failures.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Positional IP addresses and `--in` were both supplied.
    #[error("cannot provide both --in and IP addresses on the command line")]
    MutuallyExclusiveSources,

    /// The delimiter option was not a single character.
    #[error("delimiter must be a single character, got {0:?}")]
    InvalidDelimiter(String),
}

/// Fatal setup failures.
///
/// Each variant maps to a distinct exit code via [`SetupError::exit_code`];
/// per-record failures never reach this type.
#[derive(Error, Debug)]
pub enum SetupError {
    /// Invalid command-line configuration.
    #[error("invalid option")]
    Config(#[from] ConfigError),

    /// Logger initialization failed.
    #[error("failed to initialize logger")]
    Logger(#[from] SetLoggerError),

    /// The geolocation database could not be opened.
    #[error("failed to open database {}", .path.display())]
    Database {
        /// Path that was passed to the reader.
        path: PathBuf,
        /// Underlying reader error.
        source: MaxMindDbError,
    },

    /// The input file could not be opened for reading.
    #[error("failed to open input {}", .path.display())]
    Input {
        /// Path of the input file.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// The output file could not be created exclusively.
    #[error("failed to create output {}", .path.display())]
    Output {
        /// Path of the output file.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },
}

impl SetupError {
    /// Process exit code for this failure.
    pub fn exit_code(&self) -> i32 {
        match self {
            SetupError::Config(_) | SetupError::Logger(_) => 1,
            SetupError::Database { .. } => 2,
            SetupError::Input { .. } => 3,
            SetupError::Output { .. } => 4,
        }
    }
}

/// Per-record failures.
///
/// Messages embed the offending input so a diagnostic line is enough to
/// retry the address by hand.
#[derive(Error, Debug)]
pub enum RecordError {
    /// The input text did not parse as an IP address.
    #[error("cannot convert {0:?} to an IP address")]
    AddrParse(String),

    /// The database holds no record covering the address.
    #[error("no record for {0} in the database")]
    NotFound(IpAddr),

    /// The database query or record decode failed.
    #[error("lookup failed for {addr}: {source}")]
    Lookup {
        /// The address that was queried.
        addr: IpAddr,
        /// Underlying reader error.
        source: MaxMindDbError,
    },

    /// Serializing the row failed.
    #[error(transparent)]
    Write(#[from] csv::Error),

    /// Flushing the row to the output stream failed.
    #[error(transparent)]
    Flush(#[from] io::Error),
}
