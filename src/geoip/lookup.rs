//! Address resolution: parse, query, and field defaulting.

use std::collections::BTreeMap;
use std::net::IpAddr;

use maxminddb::geoip2;

use super::types::CityRecord;
use super::{GeoDb, PRIVATE_SENTINEL, UNKNOWN_SENTINEL};
use crate::error::RecordError;

impl GeoDb {
    /// Resolves one address into a fully-populated record.
    ///
    /// `ip_text` is trimmed of surrounding whitespace before parsing.
    /// Names are taken in `lang`; the private-range override supersedes
    /// whatever the database returned, and any field still empty after
    /// that becomes "unknown".
    pub fn lookup_city(&self, ip_text: &str, lang: &str) -> Result<CityRecord, RecordError> {
        let addr = parse_address(ip_text)?;

        let names = match self.query_names(addr, lang) {
            Ok(names) => names,
            // A private address renders as "private" even when the
            // database has nothing for it.
            Err(_) if is_private(addr) => Names::default(),
            Err(err) => return Err(err),
        };

        Ok(finalize(addr, names))
    }

    fn query_names(&self, addr: IpAddr, lang: &str) -> Result<Names, RecordError> {
        let city: geoip2::City = self
            .reader
            .lookup(addr)
            .map_err(|source| RecordError::Lookup { addr, source })?
            .ok_or(RecordError::NotFound(addr))?;

        Ok(Names {
            city: pick_name(city.city.and_then(|c| c.names), lang),
            subdivision: pick_name(
                city.subdivisions
                    .and_then(|subs| subs.into_iter().next())
                    .and_then(|sub| sub.names),
                lang,
            ),
            country: pick_name(city.country.and_then(|c| c.names), lang),
        })
    }
}

/// Name fields as extracted from the database, before defaulting.
#[derive(Debug, Default)]
struct Names {
    city: String,
    subdivision: String,
    country: String,
}

fn parse_address(ip_text: &str) -> Result<IpAddr, RecordError> {
    let trimmed = ip_text.trim();
    trimmed
        .parse()
        .map_err(|_| RecordError::AddrParse(trimmed.to_string()))
}

fn pick_name(names: Option<BTreeMap<&str, &str>>, lang: &str) -> String {
    names
        .and_then(|names| names.get(lang).map(|name| (*name).to_string()))
        .unwrap_or_default()
}

/// Applies the private-range override, then the "unknown" defaulting.
/// The override must win: a private address shows "private" in all three
/// fields no matter what the database held.
fn finalize(addr: IpAddr, names: Names) -> CityRecord {
    let Names {
        mut city,
        mut subdivision,
        mut country,
    } = names;

    if is_private(addr) {
        city = PRIVATE_SENTINEL.to_string();
        subdivision = PRIVATE_SENTINEL.to_string();
        country = PRIVATE_SENTINEL.to_string();
    }

    CityRecord {
        address: addr,
        city: default_unknown(city),
        subdivision: default_unknown(subdivision),
        country: default_unknown(country),
    }
}

fn default_unknown(name: String) -> String {
    if name.is_empty() {
        UNKNOWN_SENTINEL.to_string()
    } else {
        name
    }
}

/// RFC 1918 IPv4 ranges, their IPv4-mapped IPv6 forms, and fc00::/7.
fn is_private(addr: IpAddr) -> bool {
    match addr {
        IpAddr::V4(v4) => v4.is_private(),
        IpAddr::V6(v6) => match v6.to_ipv4_mapped() {
            Some(v4) => v4.is_private(),
            None => (v6.segments()[0] & 0xfe00) == 0xfc00,
        },
    }
}
