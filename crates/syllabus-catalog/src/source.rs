//! Class data source seam
//!
//! The listing and detail pages never talk to a content backend directly;
//! they consume a [`ClassSource`]. [`MemorySource`] serves a fixed snapshot
//! and can be loaded from a JSON [`CatalogDocument`].

use crate::detail::ClassDetail;
use crate::error::{CatalogError, CatalogResult};
use crate::record::ClassRecord;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Supplier of the class corpus
///
/// Implementations return already-validated data; callers treat the result
/// as a read-only snapshot.
pub trait ClassSource {
    /// Full list of class records, in display order
    fn fetch_class_list(&self) -> CatalogResult<Vec<ClassRecord>>;

    /// Detail record for one class
    ///
    /// # Errors
    /// - [`CatalogError::MissingId`] for an empty id
    /// - [`CatalogError::NotFound`] for an unknown id
    fn fetch_class(&self, id: &str) -> CatalogResult<ClassDetail>;
}

/// On-disk snapshot layout
///
/// ```json
/// { "classes": [ { "id": "...", "title": "...", "day": "月", "time": 1, "tags": [] } ],
///   "details": [ { "id": "...", "teachers": [], ... } ] }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogDocument {
    /// Listing records
    pub classes: Vec<ClassRecord>,
    /// Detail records, keyed by id
    #[serde(default)]
    pub details: Vec<ClassDetail>,
}

/// In-memory class source over a fixed snapshot
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    document: CatalogDocument,
}

impl MemorySource {
    /// Create source over listing records only
    #[inline]
    #[must_use]
    pub fn new(classes: Vec<ClassRecord>) -> Self {
        Self {
            document: CatalogDocument {
                classes,
                details: Vec::new(),
            },
        }
    }

    /// Attach detail records
    #[inline]
    #[must_use]
    pub fn with_details(mut self, details: Vec<ClassDetail>) -> Self {
        self.document.details = details;
        self
    }

    /// Parse a JSON catalog document
    ///
    /// # Errors
    /// Returns [`CatalogError::Malformed`] if the document does not match
    /// the class schema.
    pub fn from_json_str(json: &str) -> CatalogResult<Self> {
        let document: CatalogDocument = serde_json::from_str(json)?;
        tracing::debug!(
            "Parsed catalog document: {} classes, {} details",
            document.classes.len(),
            document.details.len()
        );
        Ok(Self { document })
    }

    /// Read and parse a JSON catalog document from disk
    ///
    /// # Errors
    /// Returns [`CatalogError::Io`] if the file cannot be read, or
    /// [`CatalogError::Malformed`] if it cannot be parsed.
    pub fn from_json_file(path: impl AsRef<Path>) -> CatalogResult<Self> {
        let path = path.as_ref();
        let json =
            std::fs::read_to_string(path).map_err(|e| CatalogError::io_error(path, e))?;
        let source = Self::from_json_str(&json)?;
        tracing::info!(
            "Loaded {} classes from {}",
            source.document.classes.len(),
            path.display()
        );
        Ok(source)
    }

    /// Underlying snapshot
    #[inline]
    #[must_use]
    pub fn document(&self) -> &CatalogDocument {
        &self.document
    }
}

impl ClassSource for MemorySource {
    fn fetch_class_list(&self) -> CatalogResult<Vec<ClassRecord>> {
        Ok(self.document.classes.clone())
    }

    fn fetch_class(&self, id: &str) -> CatalogResult<ClassDetail> {
        if id.trim().is_empty() {
            return Err(CatalogError::MissingId);
        }

        if let Some(detail) = self.document.details.iter().find(|d| d.id == id) {
            return Ok(detail.clone());
        }

        // Listed classes without a detail entry still get a page
        self.document
            .classes
            .iter()
            .find(|c| c.id == id)
            .map(ClassDetail::from_record)
            .ok_or_else(|| CatalogError::NotFound(id.to_string()))
    }
}

/// Ids of the classes that get a detail page, in snapshot order
#[must_use]
pub fn detail_ids(records: &[ClassRecord]) -> Vec<&str> {
    records.iter().map(|r| r.id.as_str()).collect()
}
