//! HTTP client for the public pincode lookup service.

pub mod client;

pub use client::{DEFAULT_BASE_URL, LookupError, PincodeClient, parse_lookup_body};
