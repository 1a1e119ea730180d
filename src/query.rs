//! Query resolution: turns free-text user input into lookup queries.
//!
//! The resolver accepts whatever the user typed - a bare catalog ID, a UPC,
//! or a pasted Apple Music album URL - and produces one [`LookupQuery`] per
//! requested identifier kind. No format validation is performed on the value;
//! malformed values are forwarded to the API verbatim and surface as an empty
//! or error response there.

use std::{collections::BTreeSet, fmt};

use crate::config;

const ALBUM_URL_PREFIX: &str = "https://music.apple.com/";

/// Identifier kind used for a catalog lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LookupKind {
    Id,
    Upc,
}

impl LookupKind {
    pub const ALL: [LookupKind; 2] = [LookupKind::Id, LookupKind::Upc];
}

impl fmt::Display for LookupKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LookupKind::Id => write!(f, "id"),
            LookupKind::Upc => write!(f, "upc"),
        }
    }
}

/// Ordered, de-duplicated set of lookup kinds selected on the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupKinds(pub BTreeSet<LookupKind>);

impl LookupKinds {
    pub fn iter(&self) -> impl Iterator<Item = LookupKind> + '_ {
        self.0.iter().copied()
    }
}

impl Default for LookupKinds {
    fn default() -> Self {
        LookupKinds(BTreeSet::from(LookupKind::ALL))
    }
}

impl fmt::Display for LookupKinds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined = self
            .0
            .iter()
            .map(|k| k.to_string())
            .collect::<Vec<_>>()
            .join(",");
        write!(f, "{}", joined)
    }
}

/// Parses a comma-separated kind list from the command line.
///
/// Accepts `id`, `upc` and the `both` keyword, case-insensitively and with
/// surrounding whitespace tolerated. Duplicates collapse. Used as a clap
/// value parser for the `--kind` flag.
pub fn parse_lookup_kinds(input: &str) -> Result<LookupKinds, String> {
    if input.trim().is_empty() {
        return Err("kind list cannot be empty".to_string());
    }

    let mut kinds = BTreeSet::new();
    for segment in input.split(',') {
        let segment = segment.trim().to_lowercase();
        match segment.as_str() {
            "" => return Err("kind list contains an empty segment".to_string()),
            "id" => {
                kinds.insert(LookupKind::Id);
            }
            "upc" => {
                kinds.insert(LookupKind::Upc);
            }
            "both" => {
                kinds.extend(LookupKind::ALL);
            }
            other => {
                return Err(format!(
                    "invalid value '{}': expected 'id', 'upc' or 'both'",
                    other
                ));
            }
        }
    }

    Ok(LookupKinds(kinds))
}

/// One resolved catalog lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupQuery {
    pub kind: LookupKind,
    pub value: String,
}

/// Extracts the album ID from a pasted Apple Music album URL.
///
/// Matches `https://music.apple.com/<storefront>/album/<slug>/<id>`,
/// optionally followed by a query string, and yields the final path segment
/// with the query string stripped. Returns `None` for anything else, in
/// which case the caller uses the raw input verbatim.
pub fn extract_album_id(input: &str) -> Option<String> {
    let rest = input.strip_prefix(ALBUM_URL_PREFIX)?;
    let path = rest.split('?').next().unwrap_or(rest);
    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

    // Exactly <storefront>/album/<slug>/<id>; longer paths are not the
    // album URL pattern and pass through verbatim like any other input.
    if segments.len() != 4 || segments[1] != "album" {
        return None;
    }

    segments.last().map(|s| s.to_string())
}

/// Resolves raw user input into one query per requested kind.
///
/// Empty (after trimming) input resolves to `None`: nothing is fetched.
/// An input matching the Apple Music album URL pattern contributes its
/// trailing ID; any other input is used unchanged for every kind.
pub fn resolve(raw: &str, kinds: &LookupKinds) -> Option<Vec<LookupQuery>> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    let value = extract_album_id(trimmed).unwrap_or_else(|| trimmed.to_string());

    Some(
        kinds
            .iter()
            .map(|kind| LookupQuery {
                kind,
                value: value.clone(),
            })
            .collect(),
    )
}

/// Builds the exact request string for one (storefront, query) panel.
///
/// This string doubles as the response cache key, so it must be produced
/// identically for identical inputs.
pub fn request_url(storefront_code: &str, query: &LookupQuery) -> String {
    format!(
        "{base}?country={country}&lang=en&{kind}={value}&entity=song&limit=200",
        base = config::lookup_url(),
        country = storefront_code,
        kind = query.kind,
        value = query.value
    )
}
