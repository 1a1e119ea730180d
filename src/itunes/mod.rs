//! # iTunes Integration Module
//!
//! This module provides the HTTP client for the public iTunes lookup API.
//! Unlike most catalog services the lookup endpoint is unauthenticated, so
//! the integration layer is a single submodule handling the GET request,
//! rate-limit backoff, and JSON decoding.
//!
//! ## Failure domains
//!
//! The client distinguishes transport failures (network errors, non-JSON
//! bodies) from payload-level failures (a well-formed payload carrying an
//! `errorMessage`). Only the former surface as errors here; the latter are
//! a successful fetch whose interpretation is up to [`crate::interpret`].
//!
//! ## Endpoint
//!
//! `GET {lookup_url}?country=..&lang=en&{id|upc}=..&entity=song&limit=200`
//!
//! The full request string is built by [`crate::query::request_url`] and
//! doubles as the response cache key.

pub mod lookup;
