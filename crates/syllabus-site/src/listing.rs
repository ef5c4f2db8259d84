//! Class listing page controller
//!
//! Owns one page view: the snapshot, the options derived from it, the
//! filter session and a memoized visible list. The visible list is
//! recomputed lazily after each filter transition, never on option changes
//! (options are fixed for the snapshot).

use syllabus_catalog::{CatalogResult, ClassRecord, ClassSource, TimeSlot};
use syllabus_filter::{
    derive_options, filter_indices, fragment_of, FilterOptions, FilterSession, FilterState,
    FragmentWriter, SelectOption,
};

/// One view of the class listing page
#[derive(Debug)]
pub struct ListingPage<W> {
    records: Vec<ClassRecord>,
    session: FilterSession<W>,
    visible: Option<Vec<usize>>,
}

impl<W: FragmentWriter> ListingPage<W> {
    /// Open the page at `url` over `records`
    ///
    /// The filter is restored from the URL fragment without writing back.
    pub fn open(records: Vec<ClassRecord>, url: &str, writer: W) -> Self {
        let options = derive_options(&records);
        tracing::info!(
            "Opening listing at {} with {} classes ({} slots, {} tags)",
            url,
            records.len(),
            options.slots().len(),
            options.tags().len()
        );
        let session = FilterSession::load(options, fragment_of(url), writer);
        Self {
            records,
            session,
            visible: None,
        }
    }

    /// Fetch the snapshot from `source` and open the page at `url`
    ///
    /// # Errors
    /// Propagates the source's error if the class list cannot be fetched.
    pub fn from_source<S: ClassSource + ?Sized>(
        source: &S,
        url: &str,
        writer: W,
    ) -> CatalogResult<Self> {
        let records = source.fetch_class_list()?;
        Ok(Self::open(records, url, writer))
    }

    /// User picked a period
    pub fn select_slot(&mut self, slot: TimeSlot) {
        self.session.set_slot(slot);
        self.visible = None;
    }

    /// User changed the tag selection
    pub fn select_tags<I, S>(&mut self, tags: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.session.set_tags(tags);
        self.visible = None;
    }

    /// User pressed the clear control
    pub fn clear(&mut self) {
        self.session.clear();
        self.visible = None;
    }

    /// Classes passing the current filter, in snapshot order
    pub fn visible(&mut self) -> Vec<&ClassRecord> {
        let records = &self.records;
        let state = self.session.state();
        let indices = self
            .visible
            .get_or_insert_with(|| filter_indices(records, state));
        indices.iter().map(|&i| &records[i]).collect()
    }

    /// Number of classes passing the current filter
    pub fn visible_count(&mut self) -> usize {
        self.visible().len()
    }

    /// Full snapshot
    #[inline]
    #[must_use]
    pub fn records(&self) -> &[ClassRecord] {
        &self.records
    }

    /// Current selection
    #[inline]
    #[must_use]
    pub fn state(&self) -> &FilterState {
        self.session.state()
    }

    /// Options derived from the snapshot
    #[inline]
    #[must_use]
    pub fn options(&self) -> &FilterOptions {
        self.session.options()
    }

    /// Fragment writer (e.g. the page's history)
    #[inline]
    #[must_use]
    pub fn writer(&self) -> &W {
        self.session.writer()
    }

    /// Whether the clear control is shown
    #[inline]
    #[must_use]
    pub fn show_clear_control(&self) -> bool {
        self.state().is_active()
    }

    /// Period selector entries
    #[must_use]
    pub fn slot_options(&self) -> Vec<SelectOption<TimeSlot>> {
        self.options().slot_options()
    }

    /// Tag selector entries
    #[must_use]
    pub fn tag_options(&self) -> Vec<SelectOption<String>> {
        self.options().tag_options()
    }

    /// Currently selected period, as a selector entry
    #[must_use]
    pub fn selected_slot_option(&self) -> Option<SelectOption<TimeSlot>> {
        self.state().slot().map(|slot| SelectOption {
            label: slot.label(),
            value: slot.clone(),
        })
    }

    /// Currently selected tags, as selector entries
    #[must_use]
    pub fn selected_tag_options(&self) -> Vec<SelectOption<String>> {
        self.state()
            .tags()
            .iter()
            .map(|tag| SelectOption {
                label: tag.clone(),
                value: tag.clone(),
            })
            .collect()
    }
}
