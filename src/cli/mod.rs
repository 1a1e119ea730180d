//! # CLI Module
//!
//! This module provides the command-line interface layer for Ituncli, an
//! iTunes Store client for checking album availability across regional
//! storefronts. It implements all user-facing commands and coordinates
//! between query resolution, the lookup API client, response caching, and
//! output rendering.
//!
//! ## Commands
//!
//! - [`lookup`] - Resolves a free-text query and fans out one lookup per
//!   (storefront, identifier kind) panel
//! - [`list_storefronts`] - Displays the static storefront table with
//!   optional search filtering
//! - [`clear_cache`] - Wipes the keyed response cache
//!
//! ## Data Flow
//!
//! ```text
//! CLI Layer (argument handling, rendering)
//!     ↓
//! Query Resolver (free text → lookup queries)
//!     ↓
//! Management Layer (response cache, keyed by request string)
//!     ↓
//! API Layer (iTunes lookup endpoint)
//! ```
//!
//! ## Error Handling Philosophy
//!
//! Panels are independent: a transport failure, payload-level error, or
//! empty result in one storefront never affects its siblings, and none of
//! them terminate the process. The only fatal paths are unusable arguments
//! (e.g. an unknown storefront code), which go through the `error!` macro.

mod cache;
mod lookup;
mod storefronts;

pub use cache::clear_cache;
pub use lookup::lookup;
pub use storefronts::list_storefronts;
