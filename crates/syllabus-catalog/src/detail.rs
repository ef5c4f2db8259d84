//! Class details - the full record behind a class detail page

use crate::record::ClassRecord;
use crate::slot::TimeSlot;
use serde::{Deserialize, Serialize};

/// Full class information shown on a detail page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassDetail {
    /// Class identifier
    pub id: String,
    /// Class title
    pub title: String,
    /// Day token
    pub day: String,
    /// Period number
    pub time: u32,
    /// Classification labels
    #[serde(default)]
    pub tags: Vec<String>,
    /// Teaching staff
    #[serde(default)]
    pub teachers: Vec<String>,
    /// Required textbook, if any
    #[serde(default)]
    pub textbook: Option<String>,
    /// Message from the teaching staff
    #[serde(default)]
    pub comment: Option<String>,
    /// Grading policy
    #[serde(default)]
    pub evaluation: Option<String>,
    /// Notes for prospective students
    #[serde(default)]
    pub notes: Option<String>,
    /// Student impressions
    #[serde(default)]
    pub reactions: Vec<Reaction>,
}

/// One student impression of a class
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reaction {
    /// Reaction identifier
    pub id: String,
    /// Free text
    pub content: String,
}

impl ClassDetail {
    /// Minimal detail carrying only what the listing record knows
    #[must_use]
    pub fn from_record(record: &ClassRecord) -> Self {
        Self {
            id: record.id.clone(),
            title: record.title.clone(),
            day: record.day.clone(),
            time: record.time,
            tags: record.tags.clone(),
            teachers: Vec::new(),
            textbook: None,
            comment: None,
            evaluation: None,
            notes: None,
            reactions: Vec::new(),
        }
    }

    /// Time slot this class meets in
    #[inline]
    #[must_use]
    pub fn slot(&self) -> TimeSlot {
        TimeSlot::new(self.day.clone(), self.time)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn detail_from_record() {
        let rec = ClassRecord::new("c1", "Logic", "月", 1, vec!["A".into()]);
        let detail = ClassDetail::from_record(&rec);

        assert_eq!(detail.id, "c1");
        assert_eq!(detail.slot(), TimeSlot::new("月", 1));
        assert_eq!(detail.tags, vec!["A".to_string()]);
        assert!(detail.teachers.is_empty());
        assert!(detail.reactions.is_empty());
    }

    #[test]
    fn detail_deserializes_optional_fields() {
        let detail: ClassDetail = serde_json::from_str(
            r#"{"id":"c1","title":"Logic","day":"月","time":1,
                "teachers":["Sato","Ito"],"comment":"Welcome",
                "reactions":[{"id":"r1","content":"Fun"}]}"#,
        )
        .unwrap();

        assert_eq!(detail.teachers, vec!["Sato".to_string(), "Ito".to_string()]);
        assert_eq!(detail.comment.as_deref(), Some("Welcome"));
        assert_eq!(detail.textbook, None);
        assert_eq!(
            detail.reactions,
            vec![Reaction {
                id: "r1".into(),
                content: "Fun".into()
            }]
        );
    }
}
