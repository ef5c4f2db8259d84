//! Filter evaluation
//!
//! A class is visible when it passes both dimensions:
//! - no slot selected, or the class meets in the selected slot
//! - no tags selected, or the class carries at least one selected tag
//!
//! Evaluation is a pure function of the full snapshot and the state; it is
//! always run over the snapshot, never over a previous result.

use crate::state::FilterState;
use syllabus_catalog::ClassRecord;

/// Check whether `record` passes `state`
#[must_use]
pub fn matches(record: &ClassRecord, state: &FilterState) -> bool {
    let slot_ok = state.slot().map_or(true, |slot| record.meets_in(slot));
    let tags_ok = state.tags().is_empty() || record.has_any_tag(state.tags());
    slot_ok && tags_ok
}

/// Visible classes, in snapshot order
///
/// An empty state returns every record.
#[must_use]
pub fn filter<'r>(records: &'r [ClassRecord], state: &FilterState) -> Vec<&'r ClassRecord> {
    if state.is_empty() {
        return records.iter().collect();
    }
    records.iter().filter(|r| matches(r, state)).collect()
}

/// Positions of the visible classes within `records`
#[must_use]
pub fn filter_indices(records: &[ClassRecord], state: &FilterState) -> Vec<usize> {
    if state.is_empty() {
        return (0..records.len()).collect();
    }
    records
        .iter()
        .enumerate()
        .filter(|(_, r)| matches(r, state))
        .map(|(i, _)| i)
        .collect()
}
