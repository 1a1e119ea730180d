use ituncli::management::{CacheError, ResponseCacheManager};
use ituncli::types::{CatalogRecord, LookupResponse};
use tempfile::TempDir;

// Helper function to create a distinguishable cached payload
fn create_response(album_name: &str) -> LookupResponse {
    LookupResponse {
        result_count: 1,
        results: vec![CatalogRecord {
            wrapper_type: Some("collection".to_string()),
            collection_type: Some("Album".to_string()),
            collection_id: Some(1),
            collection_name: Some(album_name.to_string()),
            ..Default::default()
        }],
        error_message: None,
    }
}

const REQUEST: &str =
    "https://itunes.apple.com/lookup?country=US&lang=en&id=1441164426&entity=song&limit=200";

#[tokio::test]
async fn test_identical_request_string_is_served_from_cache() {
    let dir = TempDir::new().unwrap();

    // Nothing cached yet
    let miss = ResponseCacheManager::new(REQUEST.to_string(), None)
        .with_base_dir(dir.path())
        .load_from_cache()
        .await;
    assert!(miss.is_err());

    ResponseCacheManager::new(REQUEST.to_string(), Some(create_response("Abbey Road")))
        .with_base_dir(dir.path())
        .save_to_cache()
        .await
        .unwrap();

    // The identical request string finds the entry
    let hit = ResponseCacheManager::new(REQUEST.to_string(), None)
        .with_base_dir(dir.path())
        .load_from_cache()
        .await
        .unwrap();
    let response = hit.get_response().unwrap();
    assert_eq!(
        response.results[0].collection_name.as_deref(),
        Some("Abbey Road")
    );

    // A different request string is a separate entry
    let other = ResponseCacheManager::new(format!("{}&upc=1", REQUEST), None)
        .with_base_dir(dir.path())
        .load_from_cache()
        .await;
    assert!(other.is_err());
}

#[tokio::test]
async fn test_reissued_request_overwrites_entry() {
    let dir = TempDir::new().unwrap();

    ResponseCacheManager::new(REQUEST.to_string(), Some(create_response("First")))
        .with_base_dir(dir.path())
        .save_to_cache()
        .await
        .unwrap();

    ResponseCacheManager::new(REQUEST.to_string(), Some(create_response("Second")))
        .with_base_dir(dir.path())
        .save_to_cache()
        .await
        .unwrap();

    // Last write wins
    let hit = ResponseCacheManager::new(REQUEST.to_string(), None)
        .with_base_dir(dir.path())
        .load_from_cache()
        .await
        .unwrap();
    assert_eq!(
        hit.get_response().unwrap().results[0]
            .collection_name
            .as_deref(),
        Some("Second")
    );
}

#[tokio::test]
async fn test_save_without_response_is_an_error() {
    let dir = TempDir::new().unwrap();

    let result = ResponseCacheManager::new(REQUEST.to_string(), None)
        .with_base_dir(dir.path())
        .save_to_cache()
        .await;

    assert!(matches!(result, Err(CacheError::CriticalError(_))));
}

#[tokio::test]
async fn test_clear_succeeds_on_missing_directory() {
    let dir = TempDir::new().unwrap();

    // Never written to: nothing to remove, still Ok
    ResponseCacheManager::clear_in(dir.path()).await.unwrap();
}

#[tokio::test]
async fn test_clear_removes_written_entries() {
    let dir = TempDir::new().unwrap();

    ResponseCacheManager::new(REQUEST.to_string(), Some(create_response("Abbey Road")))
        .with_base_dir(dir.path())
        .save_to_cache()
        .await
        .unwrap();

    ResponseCacheManager::clear_in(dir.path()).await.unwrap();

    let miss = ResponseCacheManager::new(REQUEST.to_string(), None)
        .with_base_dir(dir.path())
        .load_from_cache()
        .await;
    assert!(miss.is_err());
}
