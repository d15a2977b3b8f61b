//! Delimited record output.

use std::io::Write;

use csv::{IntoInnerError, Writer, WriterBuilder};

use crate::error::RecordError;
use crate::geoip::CityRecord;

/// Writes one delimited row per resolved address.
///
/// Rows use standard CSV quoting (fields containing the delimiter, a
/// quote, or a line break are quoted) and are flushed as they are written
/// so output is visible line by line when piped or watched interactively.
pub struct RecordEmitter<W: Write> {
    writer: Writer<W>,
}

impl<W: Write> RecordEmitter<W> {
    /// Creates an emitter over `out` with `delimiter` between fields.
    pub fn new(out: W, delimiter: u8) -> Self {
        let writer = WriterBuilder::new().delimiter(delimiter).from_writer(out);
        RecordEmitter { writer }
    }

    /// Serializes `[address, city, subdivision, country]` and flushes.
    pub fn emit(&mut self, record: &CityRecord) -> Result<(), RecordError> {
        let address = record.address.to_string();
        self.writer.write_record([
            address.as_str(),
            record.city.as_str(),
            record.subdivision.as_str(),
            record.country.as_str(),
        ])?;
        self.writer.flush()?;
        Ok(())
    }

    /// Flushes and returns the underlying writer.
    pub fn into_inner(self) -> Result<W, IntoInnerError<Writer<W>>> {
        self.writer.into_inner()
    }
}
