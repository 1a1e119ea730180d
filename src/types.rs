use serde::{Deserialize, Serialize};
use tabled::Tabled;

/// Raw payload of one lookup request.
///
/// A structurally valid payload either carries records in `results` or, on a
/// payload-level failure (e.g. a malformed id), a non-empty `error_message`
/// instead. Transport failures never produce this type at all.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LookupResponse {
    pub result_count: u32,
    pub results: Vec<CatalogRecord>,
    pub error_message: Option<String>,
}

/// One flat record of a lookup payload.
///
/// The API returns a single flat list mixing collection ("album") and track
/// ("song") records, distinguished by `wrapper_type`/`collection_type`/`kind`.
/// Every field is optional because no single record carries all of them;
/// songs reference their album through `collection_id`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CatalogRecord {
    pub wrapper_type: Option<String>,
    pub collection_type: Option<String>,
    pub kind: Option<String>,
    pub collection_id: Option<i64>,
    pub collection_name: Option<String>,
    pub artist_name: Option<String>,
    pub artwork_url100: Option<String>,
    pub release_date: Option<String>,
    pub primary_genre_name: Option<String>,
    pub track_count: Option<u32>,
    pub collection_price: Option<f64>,
    pub currency: Option<String>,
    pub collection_view_url: Option<String>,
    pub track_name: Option<String>,
    pub track_number: Option<u32>,
    pub is_streamable: Option<bool>,
}

/// Display-ready album derived from one lookup payload.
///
/// Recomputed on every response, never cached or mutated in place. The
/// streaming flag aggregates the album's song records: an album with no song
/// records counts as streamable, otherwise at least one song must report
/// `is_streamable == true`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlbumView {
    pub album: CatalogRecord,
    pub tracks: Vec<CatalogRecord>,
    pub is_streamable: bool,
}

#[derive(Tabled)]
pub struct AlbumTableRow {
    pub album: String,
    pub artist: String,
    pub released: String,
    pub genre: String,
    pub tracks: String,
    pub streaming: String,
    pub price: String,
}

#[derive(Tabled)]
pub struct StorefrontTableRow {
    pub code: String,
    pub name: String,
    pub flag: String,
}
