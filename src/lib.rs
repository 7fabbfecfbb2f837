//! Pincode Lookup - Look up Indian postal pincode data and filter it by name
//!
//! This library wraps the public `api.postalpincode.in` lookup service in a
//! small interactive terminal application. It supports:
//!
//! - Validating 6-digit pincodes before any network call
//! - Fetching the post-office list for a pincode over plain HTTPS
//! - Filtering the fetched list by post-office name (case-insensitive substring)
//! - A reducer-style view state that stays consistent across overlapping lookups
//!
//! # Example
//!
//! ```no_run
//! use pincode_lookup::api::PincodeClient;
//! use pincode_lookup::models::Pincode;
//!
//! let client = PincodeClient::new();
//! let pincode: Pincode = "400001".parse()?;
//! let records = client.lookup(&pincode)?;
//! println!("Found {} post offices", records.len());
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod api;
pub mod cli;
pub mod filters;
pub mod models;
pub mod state;
pub mod tui;

// Re-export commonly used types
pub use api::{LookupError, PincodeClient, parse_lookup_body};
pub use filters::filter_by_name;
pub use models::{Pincode, PostOfficeRecord};
pub use state::LookupState;
