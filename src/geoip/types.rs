//! Lookup result data structures.

use std::net::IpAddr;

/// A fully-resolved output record for one address.
///
/// By the time a record leaves the lookup adapter every field is
/// populated: names absent from the database are "unknown", and all three
/// name fields of a private-range address are "private".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CityRecord {
    /// The looked-up address, rendered in canonical form on output.
    pub address: IpAddr,
    /// City name in the requested language.
    pub city: String,
    /// First-listed subdivision name in the requested language.
    pub subdivision: String,
    /// Country name in the requested language.
    pub country: String,
}
