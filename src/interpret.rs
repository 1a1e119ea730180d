//! Result interpretation: turns a raw lookup payload into album views.
//!
//! A payload is interpreted into exactly one of three outcomes. A non-empty
//! error message wins over everything else, a zero result count is "not
//! found" rather than an error, and anything else yields one [`AlbumView`]
//! per album-typed record in payload order.

use crate::types::{AlbumView, CatalogRecord, LookupResponse};

/// Terminal outcome of one lookup panel.
#[derive(Debug, Clone)]
pub enum LookupOutcome {
    /// Payload-level failure; carries the service's message verbatim.
    Failed(String),
    /// Structurally valid payload with zero results.
    NotFound,
    /// One view per album record, payload order preserved. The raw result
    /// count is carried alongside so the renderer can report both figures;
    /// with `entity=song` the count also includes the track records.
    Populated {
        result_count: u32,
        views: Vec<AlbumView>,
    },
}

/// Interprets one raw lookup payload.
///
/// Precedence: a non-empty `errorMessage` signals failure regardless of any
/// result count or records; an empty message does not count. Album records
/// are the subsequence with `collectionType == "Album"`, never re-sorted.
/// Each album's tracks are the song records sharing its `collectionId` -
/// a full scan per album, fine at the 200-record payload cap.
pub fn interpret(response: &LookupResponse) -> LookupOutcome {
    if let Some(message) = &response.error_message {
        if !message.is_empty() {
            return LookupOutcome::Failed(message.clone());
        }
    }

    if response.result_count == 0 {
        return LookupOutcome::NotFound;
    }

    let views = response
        .results
        .iter()
        .filter(|r| is_album(r))
        .map(|album| {
            let tracks: Vec<CatalogRecord> = response
                .results
                .iter()
                .filter(|r| is_song_of(r, album))
                .cloned()
                .collect();

            let is_streamable =
                tracks.is_empty() || tracks.iter().any(|t| t.is_streamable == Some(true));

            AlbumView {
                album: album.clone(),
                tracks,
                is_streamable,
            }
        })
        .collect();

    LookupOutcome::Populated {
        result_count: response.result_count,
        views,
    }
}

fn is_album(record: &CatalogRecord) -> bool {
    record.collection_type.as_deref() == Some("Album")
}

fn is_song_of(record: &CatalogRecord, album: &CatalogRecord) -> bool {
    record.kind.as_deref() == Some("song")
        && album.collection_id.is_some()
        && record.collection_id == album.collection_id
}
