//! Selectable filter options derived from the class snapshot
//!
//! Options are computed once per snapshot, not per filter change. Both sets
//! keep first-seen order so the selectors list choices the way the snapshot
//! lists classes.

use indexmap::IndexSet;
use serde::Serialize;
use syllabus_catalog::{ClassRecord, TimeSlot};

/// Distinct slots and tags present in a snapshot
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterOptions {
    slots: IndexSet<TimeSlot>,
    tags: IndexSet<String>,
}

/// One entry of a select widget
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectOption<T> {
    /// Text shown to the user
    pub label: String,
    /// Value carried by the option
    pub value: T,
}

/// Derive available slots and tags from `records`
///
/// Pure; an empty snapshot yields empty sets.
#[must_use]
pub fn derive_options(records: &[ClassRecord]) -> FilterOptions {
    let mut options = FilterOptions::default();
    for record in records {
        // IndexSet keeps the first position on re-insert
        options.slots.insert(record.slot());
        options.tags.extend(record.tags.iter().cloned());
    }
    options
}

impl FilterOptions {
    /// Available slots, first-seen order
    #[inline]
    #[must_use]
    pub fn slots(&self) -> &IndexSet<TimeSlot> {
        &self.slots
    }

    /// Available tags, first-seen order
    #[inline]
    #[must_use]
    pub fn tags(&self) -> &IndexSet<String> {
        &self.tags
    }

    /// Check whether some class meets in `slot`
    #[inline]
    #[must_use]
    pub fn has_slot(&self, slot: &TimeSlot) -> bool {
        self.slots.contains(slot)
    }

    /// Check whether some class carries `tag`
    #[inline]
    #[must_use]
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.contains(tag)
    }

    /// Check if the snapshot offered nothing to filter on
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty() && self.tags.is_empty()
    }

    /// Period selector entries, labelled `月曜1限` style
    #[must_use]
    pub fn slot_options(&self) -> Vec<SelectOption<TimeSlot>> {
        self.slots
            .iter()
            .map(|slot| SelectOption {
                label: slot.label(),
                value: slot.clone(),
            })
            .collect()
    }

    /// Tag selector entries
    #[must_use]
    pub fn tag_options(&self) -> Vec<SelectOption<String>> {
        self.tags
            .iter()
            .map(|tag| SelectOption {
                label: tag.clone(),
                value: tag.clone(),
            })
            .collect()
    }
}
