use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Message shown when the submitted pincode fails validation
pub const VALIDATION_MESSAGE: &str = "Please Enter a Valid 6-Digit pincode.";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{VALIDATION_MESSAGE}")]
pub struct PincodeError;

/// A validated 6-digit Indian postal code.
///
/// Construction goes through [`FromStr`], which accepts a string iff it is
/// exactly 6 characters long and every character is an ASCII decimal digit.
/// Signs, decimal points, and whitespace are all rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pincode(String);

impl Pincode {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for Pincode {
    type Err = PincodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() == 6 && s.bytes().all(|b| b.is_ascii_digit()) {
            Ok(Pincode(s.to_string()))
        } else {
            Err(PincodeError)
        }
    }
}

impl fmt::Display for Pincode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
