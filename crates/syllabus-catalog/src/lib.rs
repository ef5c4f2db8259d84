//! Syllabus Catalog
//!
//! The read-only class corpus the listing and detail pages are built from.
//!
//! # Core Concepts
//!
//! - [`ClassRecord`]: One row of the class list (day, period, tags, title)
//! - [`TimeSlot`]: A `(day, period)` pair identifying a class time block
//! - [`ClassDetail`]: The full record shown on a class detail page
//! - [`ClassSource`]: Data source seam supplying records and details
//!
//! # Example
//!
//! ```rust
//! use syllabus_catalog::{ClassSource, MemorySource};
//!
//! let source = MemorySource::from_json_str(
//!     r#"{ "classes": [
//!         { "id": "c1", "title": "Logic", "day": "月", "time": 1, "tags": ["人と文化"] }
//!     ] }"#,
//! )
//! .unwrap();
//!
//! let classes = source.fetch_class_list().unwrap();
//! assert_eq!(classes[0].slot().label(), "月曜1限");
//! ```

#![warn(missing_docs)]

pub mod detail;
pub mod error;
pub mod record;
pub mod slot;
pub mod source;

// Re-exports
pub use detail::{ClassDetail, Reaction};
pub use error::{CatalogError, CatalogResult, SlotParseError};
pub use record::ClassRecord;
pub use slot::TimeSlot;
pub use source::{detail_ids, CatalogDocument, ClassSource, MemorySource};

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for working with the class catalog
    pub use crate::{
        CatalogError, CatalogResult, ClassDetail, ClassRecord, ClassSource, MemorySource,
        TimeSlot,
    };
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
