//! Core types and errors for the shodan-lens launcher plugin.
//!
//! This crate provides the foundational pieces shared across the workspace:
//!
//! - **Types**: Strongly-typed representations of the Shodan API responses
//!   the plugin consumes
//! - **Errors**: Uniform error handling with [`LensError`]
//!
//! # Example
//!
//! ```rust,ignore
//! use lens_core::{HostInfo, LensError, Result};
//!
//! fn summarize(host: &HostInfo) -> Result<String> {
//!     Ok(format!("{} ({} open ports)", host.ip_str, host.ports.len()))
//! }
//! ```

mod error;
pub mod types;

pub use error::{LensError, Result};
pub use types::*;
