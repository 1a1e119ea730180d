use crate::{management::ResponseCacheManager, success, warning};

pub async fn clear_cache() {
    match ResponseCacheManager::clear().await {
        Ok(_) => success!("Response cache cleared."),
        Err(e) => warning!("Cannot clear response cache. Err: {:?}", e),
    }
}
