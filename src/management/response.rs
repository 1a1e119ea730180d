use std::{
    io::Error,
    path::{Path, PathBuf},
};

use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};
use sha2::{Digest, Sha256};

use crate::types::LookupResponse;

#[derive(Debug)]
pub enum CacheError {
    IoError(Error),
    CriticalError(String),
    SerdeError(serde_json::Error),
}

impl From<Error> for CacheError {
    fn from(err: Error) -> Self {
        CacheError::IoError(err)
    }
}

/// Keyed response cache with last-write-wins semantics.
///
/// The key is the exact request string: identical queries are served from a
/// previous result, and re-issuing a query simply overwrites the entry. Each
/// entry lives in its own file named by a digest of the key, so keys never
/// have to be filesystem-safe.
pub struct ResponseCacheManager {
    request: String,
    response: Option<LookupResponse>,
    base_dir: PathBuf,
}

impl ResponseCacheManager {
    pub fn new(request: String, response: Option<LookupResponse>) -> Self {
        Self {
            request,
            response,
            base_dir: Self::default_base_dir(),
        }
    }

    /// Roots the cache somewhere other than the local data directory.
    pub fn with_base_dir(mut self, base_dir: impl Into<PathBuf>) -> Self {
        self.base_dir = base_dir.into();
        self
    }

    pub async fn load_from_cache(&self) -> Result<Self, CacheError> {
        let path = Self::get_path(&self);
        let content = async_fs::read_to_string(&path)
            .await
            .map_err(|e| CacheError::IoError(e))?;
        let response = serde_json::from_str(&content).map_err(|e| CacheError::SerdeError(e))?;
        Ok(Self {
            request: self.request.clone(),
            response: Some(response),
            base_dir: self.base_dir.clone(),
        })
    }

    pub async fn save_to_cache(&self) -> Result<(), CacheError> {
        let response = self
            .response
            .as_ref()
            .ok_or_else(|| CacheError::CriticalError("no response to cache".to_string()))?;

        let path = Self::get_path(&self);
        if let Some(parent) = path.parent() {
            async_fs::create_dir_all(parent)
                .await
                .map_err(|e| CacheError::IoError(e))?;
        }

        let json = serde_json::to_string_pretty(response).map_err(|e| CacheError::SerdeError(e))?;
        async_fs::write(&path, json)
            .await
            .map_err(|e| CacheError::IoError(e))
    }

    pub fn get_response(&self) -> Option<LookupResponse> {
        self.response.clone()
    }

    /// Removes the entire cache directory. A cache that was never written
    /// clears successfully.
    pub async fn clear() -> Result<(), CacheError> {
        Self::clear_in(&Self::default_base_dir()).await
    }

    /// Removes the cache directory under the given base directory.
    pub async fn clear_in(base_dir: &Path) -> Result<(), CacheError> {
        let path = Self::cache_dir(base_dir);
        match async_fs::remove_dir_all(&path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(CacheError::IoError(e)),
        }
    }

    fn get_path(&self) -> PathBuf {
        let digest = Sha256::digest(self.request.as_bytes());
        let mut path = Self::cache_dir(&self.base_dir);
        path.push(format!("{}.json", URL_SAFE_NO_PAD.encode(digest)));
        path
    }

    fn cache_dir(base_dir: &Path) -> PathBuf {
        base_dir.join("ituncli/cache")
    }

    fn default_base_dir() -> PathBuf {
        dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."))
    }
}
