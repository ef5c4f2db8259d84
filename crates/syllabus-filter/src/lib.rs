//! Syllabus Filter
//!
//! The filter behind the class listing page: one optional period slot and
//! any number of tags, mirrored into the URL fragment so a filtered view can
//! be bookmarked and shared.
//!
//! # Architecture
//!
//! ```text
//! URL fragment ──decode──▶ FilterState ──filter()──▶ visible classes
//!      ▲                        │
//!      └────────encode──────────┘   (on every user change)
//! ```
//!
//! - [`derive_options`]: selectable slots and tags from the full snapshot
//! - [`codec`]: `filter=<day>-<time>&tags=<a>,<b>` ⇄ [`FilterState`]
//! - [`FilterSession`]: the load / set / clear state machine
//! - [`filter`]: pure evaluator (slot AND any-of-tags)
//!
//! # Example
//!
//! ```rust
//! use syllabus_catalog::{ClassRecord, TimeSlot};
//! use syllabus_filter::{derive_options, filter, FilterSession};
//!
//! let classes = vec![
//!     ClassRecord::new("c1", "Logic", "月", 1, vec!["A".into()]),
//!     ClassRecord::new("c2", "Ethics", "火", 2, vec!["B".into()]),
//! ];
//! let options = derive_options(&classes);
//!
//! let mut written = Vec::new();
//! let mut session = FilterSession::load(options, "filter=月-1", |f: &str| {
//!     written.push(f.to_string())
//! });
//! assert_eq!(session.state().slot(), Some(&TimeSlot::new("月", 1)));
//!
//! let visible = filter(&classes, session.state());
//! assert_eq!(visible.len(), 1);
//!
//! session.set_tags(["B"]);
//! drop(session);
//! assert_eq!(written, vec!["filter=月-1&tags=B"]);
//! ```

#![warn(missing_docs)]

pub mod codec;
pub mod evaluate;
pub mod options;
pub mod state;

// Re-exports
pub use codec::{decode, encode, fragment_of, parse_fragment, FragmentParts, SlotCapture};
pub use evaluate::{filter, filter_indices, matches};
pub use options::{derive_options, FilterOptions, SelectOption};
pub use state::{FilterSession, FilterState, FragmentWriter};

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for working with the listing filter
    pub use crate::{
        decode, derive_options, encode, filter, FilterOptions, FilterSession, FilterState,
        FragmentWriter,
    };
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
