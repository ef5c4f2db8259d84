//! Scenario tests for the filter session on realistic snapshots.

use pretty_assertions::assert_eq;
use syllabus_catalog::TimeSlot;
use syllabus_filter::{derive_options, filter, FilterSession, FilterState};
use syllabus_test_utils::{two_class_snapshot, weekly_snapshot};

fn ids(records: &[&syllabus_catalog::ClassRecord]) -> Vec<String> {
    records.iter().map(|r| r.id.clone()).collect()
}

/// Loading `filter=月-1` selects that slot and shows only its class.
#[test]
fn load_slot_from_fragment() {
    let records = two_class_snapshot();
    let mut writes: Vec<String> = Vec::new();
    let session = FilterSession::load(derive_options(&records), "filter=月-1", |f: &str| {
        writes.push(f.to_string());
    });

    assert_eq!(
        session.state(),
        &FilterState::new(Some(TimeSlot::new("月", 1)), Vec::<String>::new())
    );
    assert_eq!(ids(&filter(&records, session.state())), vec!["c1"]);
    drop(session);
    assert!(writes.is_empty());
}

/// Stale links keep whatever is still valid.
#[test]
fn load_stale_link() {
    let records = weekly_snapshot();
    let session = FilterSession::load(
        derive_options(&records),
        "filter=土-1&tags=廃止,語学",
        |_: &str| {},
    );

    assert_eq!(session.state().slot(), None);
    assert_eq!(session.state().tags(), &["語学".to_string()]);
    assert_eq!(ids(&filter(&records, session.state())), vec!["eng"]);
}

/// A full interaction: pick tags, narrow by slot, then clear.
#[test]
fn interaction_sequence_writes_each_step() {
    let records = weekly_snapshot();
    let mut writes: Vec<String> = Vec::new();
    let mut session =
        FilterSession::load(derive_options(&records), "", |f: &str| writes.push(f.to_string()));

    session.set_tags(["実習", "人と文化"]);
    assert_eq!(
        ids(&filter(&records, session.state())),
        vec!["bio", "lit", "prog", "hist"]
    );

    session.set_slot(TimeSlot::new("月", 1));
    assert_eq!(ids(&filter(&records, session.state())), vec!["bio", "lit"]);

    session.set_tags(["実習"]);
    assert_eq!(ids(&filter(&records, session.state())), vec!["bio"]);

    session.clear();
    assert_eq!(session.state(), &FilterState::default());
    assert_eq!(filter(&records, session.state()).len(), records.len());

    drop(session);
    assert_eq!(
        writes,
        vec![
            "tags=実習,人と文化".to_string(),
            "filter=月-1&tags=実習,人と文化".to_string(),
            "filter=月-1&tags=実習".to_string(),
            String::new(),
        ]
    );
}

/// Clearing is idempotent and always writes the empty fragment.
#[test]
fn clear_from_empty_still_writes() {
    let records = weekly_snapshot();
    let mut writes: Vec<String> = Vec::new();
    let mut session =
        FilterSession::load(derive_options(&records), "", |f: &str| writes.push(f.to_string()));
    session.clear();
    session.clear();
    drop(session);
    assert_eq!(writes, vec![String::new(), String::new()]);
}

/// Slot filtering alone shows every class in that block.
#[test]
fn slot_shared_by_two_classes() {
    let records = weekly_snapshot();
    let session = FilterSession::load(derive_options(&records), "filter=火-2", |_: &str| {});
    assert_eq!(ids(&filter(&records, session.state())), vec!["law", "eng"]);
}
