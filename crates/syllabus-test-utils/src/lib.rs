//! Testing utilities for the Syllabus workspace
//!
//! Shared fixtures, snapshot builders and proptest strategies.

#![allow(missing_docs)]

use proptest::prelude::*;
use syllabus_catalog::{ClassDetail, ClassRecord, MemorySource, Reaction};

pub const DAYS: [&str; 5] = ["月", "火", "水", "木", "金"];
pub const TAGS: [&str; 6] = ["人と自然", "人と文化", "人と社会", "語学", "情報", "実習"];

pub fn record(id: &str, day: &str, time: u32, tags: &[&str]) -> ClassRecord {
    ClassRecord::new(
        id,
        format!("Class {id}"),
        day,
        time,
        tags.iter().map(|t| (*t).to_string()).collect(),
    )
}

/// The two-class snapshot: `月-1 [A]`, `火-2 [B]`
pub fn two_class_snapshot() -> Vec<ClassRecord> {
    vec![record("c1", "月", 1, &["A"]), record("c2", "火", 2, &["B"])]
}

/// A week of classes with overlapping slots and tags
pub fn weekly_snapshot() -> Vec<ClassRecord> {
    vec![
        record("bio", "月", 1, &["人と自然", "実習"]),
        record("lit", "月", 1, &["人と文化"]),
        record("law", "火", 2, &["人と社会"]),
        record("eng", "火", 2, &["語学"]),
        record("prog", "水", 3, &["情報", "実習"]),
        record("hist", "木", 4, &["人と文化", "人と社会"]),
        record("free", "金", 5, &[]),
    ]
}

pub fn detail(id: &str) -> ClassDetail {
    let base = weekly_snapshot()
        .into_iter()
        .find(|r| r.id == id)
        .unwrap_or_else(|| record(id, "月", 1, &[]));
    ClassDetail {
        teachers: vec!["Sato".to_string(), "Suzuki".to_string()],
        textbook: None,
        comment: Some("Bring a notebook".to_string()),
        evaluation: Some("Report 60%, attendance 40%".to_string()),
        notes: None,
        reactions: vec![Reaction {
            id: format!("{id}-r1"),
            content: "Very practical".to_string(),
        }],
        ..ClassDetail::from_record(&base)
    }
}

pub fn weekly_source() -> MemorySource {
    MemorySource::new(weekly_snapshot()).with_details(vec![detail("bio")])
}

pub fn weekly_catalog_json() -> String {
    r#"{
  "classes": [
    {"id": "bio", "title": "Biology", "day": "月", "time": 1, "tags": ["人と自然", "実習"]},
    {"id": "lit", "title": "Literature", "day": "月", "time": 1, "tags": ["人と文化"]},
    {"id": "law", "title": "Law", "day": "火", "time": 2, "tags": ["人と社会"]},
    {"id": "free", "title": "Free Study", "day": "金", "time": 5, "tags": []}
  ],
  "details": [
    {"id": "bio", "title": "Biology", "day": "月", "time": 1, "tags": ["人と自然", "実習"],
     "teachers": ["Sato"], "comment": "Field work included",
     "reactions": [{"id": "r1", "content": "Loved the lab"}]}
  ]
}"#
    .to_string()
}

pub fn arb_record() -> impl Strategy<Value = ClassRecord> {
    (
        "[a-z]{1,6}",
        prop::sample::select(DAYS.to_vec()),
        1u32..=6,
        prop::collection::vec(prop::sample::select(TAGS.to_vec()), 0..3),
    )
        .prop_map(|(id, day, time, tags)| record(&id, day, time, &tags))
}

pub fn arb_snapshot() -> impl Strategy<Value = Vec<ClassRecord>> {
    prop::collection::vec(arb_record(), 0..24)
}
