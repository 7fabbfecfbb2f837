//! Data models for pincode lookups.
//!
//! This module defines the data structures used throughout the application:
//!
//! - [`Pincode`] - A validated 6-digit Indian postal code
//! - [`PostOfficeRecord`] - One post office returned by the lookup service
//! - [`LookupResponse`] - The first element of the service's JSON response array
//!
//! The wire-facing models use serde with field renames for the service's
//! PascalCase JSON shape.

pub mod pincode;
pub mod post_office;

pub use pincode::{Pincode, PincodeError, VALIDATION_MESSAGE};
pub use post_office::{LookupResponse, PostOfficeRecord};
