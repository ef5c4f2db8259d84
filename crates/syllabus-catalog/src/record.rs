//! Class records - one row of the class list

use crate::slot::TimeSlot;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One class in the listing snapshot
///
/// Records are owned by the data source and treated as an immutable,
/// already-validated snapshot for the life of a page view. Display fields
/// beyond `title` are kept verbatim in `extra`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassRecord {
    /// Stable class identifier (also the detail page path segment)
    pub id: String,
    /// Class title
    pub title: String,
    /// Day token, e.g. `月`
    pub day: String,
    /// Period number within the day
    pub time: u32,
    /// Classification labels
    #[serde(default)]
    pub tags: Vec<String>,
    /// Remaining display fields, passed through untouched
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

impl ClassRecord {
    /// Create record without extra display fields
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        day: impl Into<String>,
        time: u32,
        tags: Vec<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            day: day.into(),
            time,
            tags,
            extra: BTreeMap::new(),
        }
    }

    /// Time slot this class meets in
    #[inline]
    #[must_use]
    pub fn slot(&self) -> TimeSlot {
        TimeSlot::new(self.day.clone(), self.time)
    }

    /// Check whether the class meets in `slot`
    #[inline]
    #[must_use]
    pub fn meets_in(&self, slot: &TimeSlot) -> bool {
        slot.contains(&self.day, self.time)
    }

    /// Check whether the class carries `tag`
    #[inline]
    #[must_use]
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    /// Check whether the class carries at least one of `tags`
    #[must_use]
    pub fn has_any_tag<S: AsRef<str>>(&self, tags: &[S]) -> bool {
        tags.iter().any(|tag| self.has_tag(tag.as_ref()))
    }
}
