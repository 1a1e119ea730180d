//! Configuration management for the iTunes Store lookup CLI.
//!
//! This module handles loading and accessing configuration values from
//! environment variables and `.env` files. The tool works out of the box
//! with no configuration at all; the `.env` file only exists to override
//! the lookup endpoint, e.g. to point at a local fixture server.
//!
//! The configuration system follows a hierarchical approach:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the local data directory
//! 3. Application defaults

use dotenv;
use std::{env, path::PathBuf};

/// Default base URL of the public iTunes lookup endpoint.
pub const DEFAULT_LOOKUP_URL: &str = "https://itunes.apple.com/lookup";

/// Loads environment variables from a `.env` file in the local data directory.
///
/// Creates the necessary directory structure if it doesn't exist and loads
/// environment variables from a `.env` file located in the platform-specific
/// local data directory under `ituncli/.env`. A missing `.env` file is not an
/// error since every configuration value has a default.
///
/// # Directory Structure
///
/// The function looks for the `.env` file in:
/// - Linux: `~/.local/share/ituncli/.env`
/// - macOS: `~/Library/Application Support/ituncli/.env`
/// - Windows: `%LOCALAPPDATA%/ituncli/.env`
///
/// # Errors
///
/// Returns an error string if the parent directory cannot be created.
pub async fn load_env() -> Result<(), String> {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("ituncli/.env");
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent)
            .await
            .map_err(|e| e.to_string())?;
    }

    // Optional override file; defaults cover the missing case.
    let _ = dotenv::from_path(path);
    Ok(())
}

/// Returns the base URL of the iTunes lookup endpoint.
///
/// Reads the `ITUNES_LOOKUP_URL` environment variable, falling back to the
/// public endpoint when unset.
///
/// # Example
///
/// ```
/// let url = lookup_url(); // e.g., "https://itunes.apple.com/lookup"
/// ```
pub fn lookup_url() -> String {
    env::var("ITUNES_LOOKUP_URL").unwrap_or_else(|_| DEFAULT_LOOKUP_URL.to_string())
}
