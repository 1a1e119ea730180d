use chrono::DateTime;

use crate::types::CatalogRecord;

/// Formats an RFC 3339 release date for display, e.g. "2019-09-26".
///
/// Falls back to the raw string when it does not parse, and to "unknown"
/// when absent; records without a release date do occur in the wild.
pub fn format_release_date(release_date: Option<&str>) -> String {
    match release_date {
        Some(raw) => DateTime::parse_from_rfc3339(raw)
            .map(|d| d.format("%Y-%m-%d").to_string())
            .unwrap_or_else(|_| raw.to_string()),
        None => "unknown".to_string(),
    }
}

pub fn release_year(release_date: Option<&str>) -> Option<i32> {
    release_date
        .and_then(|raw| DateTime::parse_from_rfc3339(raw).ok())
        .map(|d| d.format("%Y").to_string())
        .and_then(|y| y.parse().ok())
}

/// Formats the purchase price, e.g. "9.99 USD", or "-" when the album
/// cannot be bought.
pub fn format_price(price: Option<f64>, currency: Option<&str>) -> String {
    match price {
        Some(p) => match currency {
            Some(c) => format!("{:.2} {}", p, c),
            None => format!("{:.2}", p),
        },
        None => "-".to_string(),
    }
}

pub fn streaming_label(is_streamable: bool) -> String {
    if is_streamable { "yes" } else { "no" }.to_string()
}

pub fn album_title(album: &CatalogRecord) -> String {
    let name = album.collection_name.clone().unwrap_or_default();
    match release_year(album.release_date.as_deref()) {
        Some(year) => format!("{} ({})", name, year),
        None => name,
    }
}
