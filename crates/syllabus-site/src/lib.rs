//! Syllabus Site
//!
//! Page-level pieces of the class site:
//! - **Listing**: [`ListingPage`] ties the snapshot, the URL fragment and the
//!   filter together for one page view
//! - **Detail**: [`DetailPage`] display model for a single class
//! - **Location**: [`PageUrl`] and [`History`] for in-place fragment writes
//! - **Config**: [`SiteConfig`] loaded from TOML
//!
//! # Example
//!
//! ```rust
//! use syllabus_catalog::ClassRecord;
//! use syllabus_site::{History, ListingPage};
//!
//! let classes = vec![
//!     ClassRecord::new("c1", "Logic", "月", 1, vec!["A".into()]),
//!     ClassRecord::new("c2", "Ethics", "火", 2, vec!["B".into()]),
//! ];
//!
//! let url = "/class#tags=B";
//! let mut page = ListingPage::open(classes, url, History::new(url));
//! assert_eq!(page.visible().len(), 1);
//!
//! page.clear();
//! assert_eq!(page.writer().current().to_string(), "/class");
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

pub mod config;
pub mod detail_page;
pub mod listing;
pub mod location;

// Re-exports for convenience
pub use config::{ConfigError, SiteConfig};
pub use detail_page::{detail_page, DetailPage};
pub use listing::ListingPage;
pub use location::{History, PageUrl};

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for building site pages
    pub use crate::{detail_page, DetailPage, History, ListingPage, PageUrl, SiteConfig};
    pub use syllabus_catalog::{ClassRecord, ClassSource, MemorySource, TimeSlot};
    pub use syllabus_filter::{FilterState, FragmentWriter};
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
