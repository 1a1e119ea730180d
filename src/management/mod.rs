mod response;

pub use response::CacheError;
pub use response::ResponseCacheManager;
