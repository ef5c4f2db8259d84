//! Class detail page model

use serde::Serialize;
use syllabus_catalog::{CatalogResult, ClassDetail, ClassSource};

/// Suffix appended to the class title in the page head
pub const TITLE_SUFFIX: &str = "科目紹介";

/// Description used when the class has no staff comment
pub const DEFAULT_DESCRIPTION: &str = "授業紹介";

/// Shown when no textbook is required
pub const NO_TEXTBOOK: &str = "なし";

/// Display-ready fields of a class detail page
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DetailPage {
    pub id: String,
    pub head_title: String,
    pub description: String,
    pub title: String,
    pub slot_label: String,
    pub tags: Vec<String>,
    pub teachers: String,
    pub textbook: String,
    pub comment: Option<String>,
    pub evaluation: Option<String>,
    pub notes: Option<String>,
    pub reactions: Vec<String>,
}

impl From<&ClassDetail> for DetailPage {
    fn from(detail: &ClassDetail) -> Self {
        let comment = detail.comment.clone().filter(|c| !c.is_empty());
        Self {
            id: detail.id.clone(),
            head_title: format!("{} - {}", detail.title, TITLE_SUFFIX),
            description: comment
                .clone()
                .unwrap_or_else(|| DEFAULT_DESCRIPTION.to_string()),
            title: detail.title.clone(),
            slot_label: detail.slot().label(),
            tags: detail.tags.clone(),
            teachers: detail.teachers.join(", "),
            textbook: detail
                .textbook
                .clone()
                .filter(|t| !t.is_empty())
                .unwrap_or_else(|| NO_TEXTBOOK.to_string()),
            comment,
            evaluation: detail.evaluation.clone(),
            notes: detail.notes.clone(),
            reactions: detail.reactions.iter().map(|r| r.content.clone()).collect(),
        }
    }
}

/// Build the detail page for `id`
///
/// # Errors
/// Propagates [`CatalogError::MissingId`](syllabus_catalog::CatalogError::MissingId)
/// and [`CatalogError::NotFound`](syllabus_catalog::CatalogError::NotFound)
/// from the source.
pub fn detail_page<S: ClassSource + ?Sized>(source: &S, id: &str) -> CatalogResult<DetailPage> {
    let detail = source.fetch_class(id)?;
    tracing::debug!("Building detail page for {}", detail.id);
    Ok(DetailPage::from(&detail))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use syllabus_catalog::CatalogError;
    use syllabus_test_utils::{detail, weekly_source};

    #[test]
    fn page_from_full_detail() {
        let page = DetailPage::from(&detail("bio"));

        assert_eq!(page.head_title, "Class bio - 科目紹介");
        assert_eq!(page.description, "Bring a notebook");
        assert_eq!(page.slot_label, "月曜1限");
        assert_eq!(page.teachers, "Sato, Suzuki");
        assert_eq!(page.textbook, NO_TEXTBOOK);
        assert_eq!(page.reactions, vec!["Very practical".to_string()]);
    }

    #[test]
    fn page_defaults_without_comment() {
        let mut bare = detail("law");
        bare.comment = None;
        bare.textbook = Some("Civil Code".to_string());

        let page = DetailPage::from(&bare);
        assert_eq!(page.description, DEFAULT_DESCRIPTION);
        assert_eq!(page.textbook, "Civil Code");
        assert_eq!(page.comment, None);
    }

    #[test]
    fn detail_page_from_source() {
        let page = detail_page(&weekly_source(), "bio").unwrap();
        assert_eq!(page.id, "bio");
        assert_eq!(page.teachers, "Sato, Suzuki");

        let fallback = detail_page(&weekly_source(), "prog").unwrap();
        assert_eq!(fallback.teachers, "");
        assert_eq!(fallback.description, DEFAULT_DESCRIPTION);
    }

    #[test]
    fn detail_page_errors() {
        assert!(matches!(
            detail_page(&weekly_source(), ""),
            Err(CatalogError::MissingId)
        ));
        assert!(matches!(
            detail_page(&weekly_source(), "nope"),
            Err(CatalogError::NotFound(_))
        ));
    }
}
