//! Reducer-style view state for the lookup form.
//!
//! All form state lives in one [`LookupState`] value with explicit transition
//! methods; each inbound event (submit, completion, filter edit) produces the
//! next state atomically instead of mutating independent slots:
//!
//! - [`LookupState::submit`] - validate the typed pincode and start a lookup
//! - [`LookupState::complete`] - apply a finished lookup, dropping stale ones
//! - [`LookupState::set_filter`] - update the name filter
//!
//! The filtered view is never stored. [`LookupState::visible`] derives it from
//! the record list and filter text on every read, so it cannot drift out of
//! sync, and narrowing then widening the filter restores hidden records
//! without a new lookup.
//!
//! Every accepted submit gets a monotonically increasing sequence number, and
//! a completion is only applied when its sequence is still the latest. A slow
//! response to an earlier submit can neither overwrite newer records nor
//! clear the loading flag of a newer in-flight request.

use crate::api::LookupError;
use crate::filters::filter_by_name;
use crate::models::{Pincode, PostOfficeRecord};

/// Message shown when the current filter text matches no record
pub const NO_MATCH_MESSAGE: &str = "Couldn't find the postal data you're looking for...";

/// Identifies one accepted submit; its completion carries it back
pub type RequestSeq = u64;

#[derive(Debug, Default)]
pub struct LookupState {
    records: Vec<PostOfficeRecord>,
    filter: String,
    error: Option<String>,
    loading: bool,
    latest_seq: RequestSeq,
}

impl LookupState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Full result set from the most recent successful lookup
    pub fn records(&self) -> &[PostOfficeRecord] {
        &self.records
    }

    pub fn filter(&self) -> &str {
        &self.filter
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Derived view: records whose name contains the filter text
    pub fn visible(&self) -> Vec<&PostOfficeRecord> {
        filter_by_name(&self.records, &self.filter)
    }

    /// Results are rendered iff no lookup is in flight and something matches
    pub fn shows_results(&self) -> bool {
        !self.loading && !self.visible().is_empty()
    }

    /// Handle a submit of the raw pincode input.
    ///
    /// On validation failure the fixed message is set, no lookup starts, and
    /// existing records stay untouched. On success the state enters loading
    /// and the caller receives the parsed pincode plus the sequence number to
    /// pass back into [`complete`](Self::complete).
    pub fn submit(&mut self, input: &str) -> Option<(RequestSeq, Pincode)> {
        match input.parse::<Pincode>() {
            Ok(pincode) => {
                self.latest_seq += 1;
                self.loading = true;
                self.error = None;
                Some((self.latest_seq, pincode))
            }
            Err(err) => {
                self.error = Some(err.to_string());
                None
            }
        }
    }

    /// Apply a finished lookup.
    ///
    /// Returns false (and changes nothing) when `seq` is not the latest
    /// accepted submit. Otherwise loading is cleared exactly once and the
    /// outcome replaces the result set wholesale: records on success, an
    /// empty set plus the error's fixed message on failure.
    pub fn complete(
        &mut self,
        seq: RequestSeq,
        outcome: Result<Vec<PostOfficeRecord>, LookupError>,
    ) -> bool {
        if seq != self.latest_seq {
            return false;
        }

        self.loading = false;
        match outcome {
            Ok(records) => {
                self.records = records;
                self.error = None;
            }
            Err(err) => {
                self.records.clear();
                self.error = Some(err.to_string());
            }
        }
        true
    }

    /// Replace the filter text and recompute the no-match condition.
    ///
    /// Never touches the result set and never starts a lookup.
    pub fn set_filter(&mut self, filter: impl Into<String>) {
        self.filter = filter.into();
        if !self.filter.is_empty() && self.visible().is_empty() {
            self.error = Some(NO_MATCH_MESSAGE.to_string());
        } else {
            self.error = None;
        }
    }
}
