//! Filter state and its transitions
//!
//! [`FilterState`] is the plain selection (one optional slot, ordered
//! distinct tags). [`FilterSession`] owns it for one page view together with
//! the snapshot's [`FilterOptions`] and a [`FragmentWriter`], and is the only
//! place the state changes:
//!
//! | Transition | Effect on state | URL write |
//! |---|---|---|
//! | `load` | decoded from the fragment | none |
//! | `set_slot` | slot replaced | encoded state |
//! | `set_tags` | tags replaced | encoded state |
//! | `clear` | both emptied | empty fragment |

use crate::codec::{decode, encode};
use crate::options::FilterOptions;
use indexmap::IndexSet;
use serde::{Deserialize, Serialize};
use syllabus_catalog::TimeSlot;

/// Current selection of the listing filter
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterState {
    pub(crate) selected_slot: Option<TimeSlot>,
    pub(crate) selected_tags: Vec<String>,
}

impl FilterState {
    /// Create state; duplicate tags are dropped, first occurrence wins
    #[must_use]
    pub fn new<I, S>(slot: Option<TimeSlot>, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            selected_slot: slot,
            selected_tags: distinct(tags),
        }
    }

    /// Selected slot, if any
    #[inline]
    #[must_use]
    pub fn slot(&self) -> Option<&TimeSlot> {
        self.selected_slot.as_ref()
    }

    /// Selected tags, in selection order
    #[inline]
    #[must_use]
    pub fn tags(&self) -> &[String] {
        &self.selected_tags
    }

    /// Check if neither dimension is constrained
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.selected_slot.is_none() && self.selected_tags.is_empty()
    }

    /// Check if any dimension is constrained (the clear control is shown)
    #[inline]
    #[must_use]
    pub fn is_active(&self) -> bool {
        !self.is_empty()
    }
}

fn distinct<I, S>(tags: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    tags.into_iter()
        .map(Into::into)
        .collect::<IndexSet<String>>()
        .into_iter()
        .collect()
}

/// Sink for fragment writes
///
/// Receives the new fragment (without `#`) after every user-driven
/// transition; an empty string clears the fragment. Writes replace the
/// current history entry and are fire-and-forget.
pub trait FragmentWriter {
    /// Replace the current URL fragment
    fn replace_fragment(&mut self, fragment: &str);
}

impl<F> FragmentWriter for F
where
    F: FnMut(&str),
{
    fn replace_fragment(&mut self, fragment: &str) {
        self(fragment);
    }
}

/// Filter state machine for one page view
#[derive(Debug)]
pub struct FilterSession<W> {
    options: FilterOptions,
    state: FilterState,
    writer: W,
}

impl<W: FragmentWriter> FilterSession<W> {
    /// Start a page view from the fragment already in the URL
    ///
    /// Does not write: the URL already holds this state.
    pub fn load(options: FilterOptions, fragment: &str, writer: W) -> Self {
        let state = decode(fragment, &options);
        tracing::debug!(
            "Loaded filter from fragment {:?}: slot={:?}, tags={:?}",
            fragment,
            state.selected_slot,
            state.selected_tags
        );
        Self {
            options,
            state,
            writer,
        }
    }

    /// Select a period slot
    ///
    /// A slot no class meets in clears the period selection instead.
    pub fn set_slot(&mut self, slot: TimeSlot) {
        self.state.selected_slot = if self.options.has_slot(&slot) {
            Some(slot)
        } else {
            tracing::warn!("Ignoring slot {} not offered by any class", slot);
            None
        };
        self.write();
    }

    /// Replace the selected tags
    ///
    /// Order is kept, duplicates and tags no class carries are dropped.
    pub fn set_tags<I, S>(&mut self, tags: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let (known, unknown): (Vec<String>, Vec<String>) = distinct(tags)
            .into_iter()
            .partition(|tag| self.options.has_tag(tag));
        if !unknown.is_empty() {
            tracing::warn!("Ignoring unknown tags: {:?}", unknown);
        }
        self.state.selected_tags = known;
        self.write();
    }

    /// Reset both dimensions
    pub fn clear(&mut self) {
        self.state = FilterState::default();
        self.write();
    }

    /// Current selection
    #[inline]
    #[must_use]
    pub fn state(&self) -> &FilterState {
        &self.state
    }

    /// Options the selection is drawn from
    #[inline]
    #[must_use]
    pub fn options(&self) -> &FilterOptions {
        &self.options
    }

    /// Fragment writer
    #[inline]
    #[must_use]
    pub fn writer(&self) -> &W {
        &self.writer
    }

    fn write(&mut self) {
        let fragment = encode(&self.state);
        tracing::debug!("Replacing fragment with {:?}", fragment);
        self.writer.replace_fragment(&fragment);
    }
}
