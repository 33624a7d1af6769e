//! HTTP client for the Shodan API endpoints used by shodan-lens.
//!
//! This crate provides the [`ShodanClient`] the plugin dispatches through.
//! The client is GET-only, stateless apart from the API key captured at
//! construction, and performs no retries, caching, or rate limiting.

mod client;
pub mod api;

pub use client::{ShodanClient, ShodanClientBuilder};
pub use lens_core::{LensError, Result};
