use std::collections::BTreeSet;

use ituncli::config;
use ituncli::query::*;

#[test]
fn test_extract_album_id_from_url() {
    let id = extract_album_id("https://music.apple.com/us/album/abbey-road/1441164426");
    assert_eq!(id, Some("1441164426".to_string()));
}

#[test]
fn test_extract_album_id_strips_query_string() {
    let id = extract_album_id("https://music.apple.com/jp/album/abbey-road/1441164426?i=1441164851&ls=1");
    assert_eq!(id, Some("1441164426".to_string()));

    // Query string on a trailing slash variant
    let id = extract_album_id("https://music.apple.com/fr/album/abbey-road/1441164426/?l=en");
    assert_eq!(id, Some("1441164426".to_string()));
}

#[test]
fn test_extract_album_id_rejects_non_matching_input() {
    // Bare catalog ID is not a URL
    assert_eq!(extract_album_id("1440650428"), None);

    // Missing slug segment
    assert_eq!(
        extract_album_id("https://music.apple.com/us/album/1441164426"),
        None
    );

    // Wrong host
    assert_eq!(
        extract_album_id("https://example.com/us/album/abbey-road/1441164426"),
        None
    );

    // Not an album path
    assert_eq!(
        extract_album_id("https://music.apple.com/us/artist/the-beatles/136975"),
        None
    );

    // Extra path segments beyond <storefront>/album/<slug>/<id>
    assert_eq!(
        extract_album_id("https://music.apple.com/us/album/abbey-road/deluxe/1441164426"),
        None
    );
}

#[test]
fn test_resolve_empty_input_is_a_noop() {
    let kinds = LookupKinds::default();
    assert!(resolve("", &kinds).is_none());
    assert!(resolve("   ", &kinds).is_none());
}

#[test]
fn test_resolve_raw_input_passes_through_verbatim() {
    let kinds = LookupKinds::default();
    let queries = resolve("1440650428", &kinds).unwrap();

    // One query per kind, identical values
    assert_eq!(queries.len(), 2);
    assert_eq!(queries[0].kind, LookupKind::Id);
    assert_eq!(queries[1].kind, LookupKind::Upc);
    assert!(queries.iter().all(|q| q.value == "1440650428"));

    // No validation: malformed values are forwarded unchanged
    let queries = resolve("not-a-real-id", &kinds).unwrap();
    assert!(queries.iter().all(|q| q.value == "not-a-real-id"));
}

#[test]
fn test_resolve_url_input_uses_extracted_id() {
    let kinds = parse_lookup_kinds("id").unwrap();
    let queries = resolve(
        "  https://music.apple.com/us/album/abbey-road/1441164426 ",
        &kinds,
    )
    .unwrap();

    assert_eq!(queries.len(), 1);
    assert_eq!(queries[0].kind, LookupKind::Id);
    assert_eq!(queries[0].value, "1441164426");
}

#[test]
fn test_lookup_kind_display() {
    assert_eq!(LookupKind::Id.to_string(), "id");
    assert_eq!(LookupKind::Upc.to_string(), "upc");
}

#[test]
fn test_lookup_kinds_default_and_display() {
    let default_kinds = LookupKinds::default();
    let collected: Vec<LookupKind> = default_kinds.iter().collect();
    assert_eq!(collected, vec![LookupKind::Id, LookupKind::Upc]);
    assert_eq!(default_kinds.to_string(), "id,upc");

    let empty_kinds = LookupKinds(BTreeSet::new());
    assert_eq!(empty_kinds.to_string(), "");
}

#[test]
fn test_parse_lookup_kinds_valid_inputs() {
    let result = parse_lookup_kinds("id").unwrap();
    let kinds: Vec<LookupKind> = result.iter().collect();
    assert_eq!(kinds, vec![LookupKind::Id]);

    let result = parse_lookup_kinds("upc").unwrap();
    let kinds: Vec<LookupKind> = result.iter().collect();
    assert_eq!(kinds, vec![LookupKind::Upc]);

    // "both" keyword expands to all kinds
    let result = parse_lookup_kinds("both").unwrap();
    let kinds: Vec<LookupKind> = result.iter().collect();
    assert_eq!(kinds, vec![LookupKind::Id, LookupKind::Upc]);

    // Case insensitivity and spaces
    let result = parse_lookup_kinds(" ID, Upc ").unwrap();
    let kinds: Vec<LookupKind> = result.iter().collect();
    assert_eq!(kinds, vec![LookupKind::Id, LookupKind::Upc]);
}

#[test]
fn test_parse_lookup_kinds_deduplication() {
    let result = parse_lookup_kinds("id,id,upc").unwrap();
    let kinds: Vec<LookupKind> = result.iter().collect();
    assert_eq!(kinds, vec![LookupKind::Id, LookupKind::Upc]);
}

#[test]
fn test_parse_lookup_kinds_invalid_inputs() {
    let result = parse_lookup_kinds("");
    assert!(result.is_err());
    assert!(result.unwrap_err().contains("cannot be empty"));

    let result = parse_lookup_kinds("   ");
    assert!(result.is_err());
    assert!(result.unwrap_err().contains("cannot be empty"));

    let result = parse_lookup_kinds("isrc");
    assert!(result.is_err());
    assert!(result.unwrap_err().contains("invalid value 'isrc'"));

    let result = parse_lookup_kinds("id,,upc");
    assert!(result.is_err());
    assert!(result.unwrap_err().contains("empty segment"));
}

#[test]
fn test_request_url_format() {
    let query = LookupQuery {
        kind: LookupKind::Id,
        value: "1440650428".to_string(),
    };
    assert_eq!(
        request_url("US", &query),
        format!(
            "{}?country=US&lang=en&id=1440650428&entity=song&limit=200",
            config::DEFAULT_LOOKUP_URL
        )
    );

    let query = LookupQuery {
        kind: LookupKind::Upc,
        value: "0602577915055".to_string(),
    };
    assert_eq!(
        request_url("JP", &query),
        format!(
            "{}?country=JP&lang=en&upc=0602577915055&entity=song&limit=200",
            config::DEFAULT_LOOKUP_URL
        )
    );
}

#[test]
fn test_request_url_is_deterministic() {
    // The request string doubles as the cache key, so identical inputs must
    // produce identical strings.
    let query = LookupQuery {
        kind: LookupKind::Id,
        value: "1441164426".to_string(),
    };
    assert_eq!(request_url("FR", &query), request_url("FR", &query));
}
