//! GeoIP lookup over a local MaxMind City database.
//!
//! [`GeoDb`] owns the reader for one database file and resolves address
//! text into fully-populated [`CityRecord`]s: names are selected in the
//! requested language, private-range addresses are overridden to
//! "private", and anything still missing becomes "unknown".

mod lookup;
mod types;

pub use types::CityRecord;

use std::path::Path;

use maxminddb::Reader;

use crate::error::SetupError;

/// Sentinel emitted in every name field of a private-range address.
pub const PRIVATE_SENTINEL: &str = "private";

/// Sentinel emitted for a name the database could not provide.
pub const UNKNOWN_SENTINEL: &str = "unknown";

/// An open city database.
///
/// The reader holds the whole file in memory; lookups are read-only and
/// the handle is released when the value is dropped.
pub struct GeoDb {
    reader: Reader<Vec<u8>>,
}

impl GeoDb {
    /// Opens the database file.
    pub fn open(path: &Path) -> Result<Self, SetupError> {
        let reader = Reader::open_readfile(path).map_err(|source| SetupError::Database {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(GeoDb { reader })
    }
}
