use ituncli::types::CatalogRecord;
use ituncli::utils::*;

#[test]
fn test_format_release_date() {
    // RFC 3339 dates format as plain dates
    assert_eq!(
        format_release_date(Some("2019-09-26T07:00:00Z")),
        "2019-09-26"
    );

    // Unparseable input passes through unchanged
    assert_eq!(format_release_date(Some("sometime in 1969")), "sometime in 1969");

    // Absent date
    assert_eq!(format_release_date(None), "unknown");
}

#[test]
fn test_release_year() {
    assert_eq!(release_year(Some("1969-09-26T07:00:00Z")), Some(1969));
    assert_eq!(release_year(Some("not a date")), None);
    assert_eq!(release_year(None), None);
}

#[test]
fn test_format_price() {
    assert_eq!(format_price(Some(9.99), Some("USD")), "9.99 USD");
    assert_eq!(format_price(Some(2500.0), Some("JPY")), "2500.00 JPY");
    assert_eq!(format_price(Some(9.99), None), "9.99");
    assert_eq!(format_price(None, Some("USD")), "-");
    assert_eq!(format_price(None, None), "-");
}

#[test]
fn test_streaming_label() {
    assert_eq!(streaming_label(true), "yes");
    assert_eq!(streaming_label(false), "no");
}

#[test]
fn test_album_title() {
    let album = CatalogRecord {
        collection_name: Some("Abbey Road".to_string()),
        release_date: Some("1969-09-26T07:00:00Z".to_string()),
        ..Default::default()
    };
    assert_eq!(album_title(&album), "Abbey Road (1969)");

    let undated = CatalogRecord {
        collection_name: Some("Abbey Road".to_string()),
        ..Default::default()
    };
    assert_eq!(album_title(&undated), "Abbey Road");
}
