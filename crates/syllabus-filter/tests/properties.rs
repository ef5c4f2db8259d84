//! Property tests for the listing filter.
//!
//! These pin down the algebra the listing page relies on:
//! - Evaluation only ever removes classes and keeps snapshot order.
//! - An empty selection shows the whole snapshot.
//! - Any selection drawn from the snapshot's options survives a trip
//!   through the URL fragment unchanged.

use proptest::prelude::*;
use syllabus_catalog::{ClassRecord, TimeSlot};
use syllabus_filter::{decode, derive_options, encode, filter, matches, FilterState};
use syllabus_test_utils::{arb_snapshot, DAYS, TAGS};

/// Snapshot plus a selection made only from its own options.
fn snapshot_with_valid_state() -> impl Strategy<Value = (Vec<ClassRecord>, FilterState)> {
    arb_snapshot().prop_flat_map(|records| {
        let options = derive_options(&records);
        let slots: Vec<TimeSlot> = options.slots().iter().cloned().collect();
        let tags: Vec<String> = options.tags().iter().cloned().collect();

        let slot = if slots.is_empty() {
            Just(None).boxed()
        } else {
            proptest::option::of(prop::sample::select(slots)).boxed()
        };
        let tag_count = tags.len();
        let selected = prop::sample::subsequence(tags, 0..=tag_count).prop_shuffle();

        (Just(records), slot, selected)
            .prop_map(|(records, slot, tags)| (records, FilterState::new(slot, tags)))
    })
}

/// Any selection, including slots and tags no class has.
fn arb_state() -> impl Strategy<Value = FilterState> {
    let mut universe: Vec<&'static str> = TAGS.to_vec();
    universe.push("ghost");
    let len = universe.len();
    (
        proptest::option::of((prop::sample::select(DAYS.to_vec()), 1u32..=7)),
        prop::sample::subsequence(universe, 0..=len),
    )
        .prop_map(|(slot, tags)| FilterState::new(slot.map(|(d, t)| TimeSlot::new(d, t)), tags))
}

fn is_subsequence(sub: &[&ClassRecord], full: &[ClassRecord]) -> bool {
    let mut rest = full.iter();
    sub.iter()
        .all(|wanted| rest.any(|candidate| std::ptr::eq(*wanted, candidate)))
}

proptest! {
    #[test]
    fn prop_filter_is_subsequence(records in arb_snapshot(), state in arb_state()) {
        let visible = filter(&records, &state);
        prop_assert!(is_subsequence(&visible, &records));
    }

    #[test]
    fn prop_filter_keeps_exactly_matching(records in arb_snapshot(), state in arb_state()) {
        let visible = filter(&records, &state);
        let expected = records.iter().filter(|r| matches(r, &state)).count();
        prop_assert_eq!(visible.len(), expected);
        prop_assert!(visible.iter().all(|r| matches(r, &state)));
    }

    #[test]
    fn prop_empty_state_is_identity(records in arb_snapshot()) {
        let visible = filter(&records, &FilterState::default());
        let cloned: Vec<ClassRecord> = visible.into_iter().cloned().collect();
        prop_assert_eq!(cloned, records);
    }

    #[test]
    fn prop_fragment_roundtrip((records, state) in snapshot_with_valid_state()) {
        let options = derive_options(&records);
        let fragment = encode(&state);
        prop_assert_eq!(decode(&fragment, &options), state);
    }

    #[test]
    fn prop_decode_only_yields_known_values(records in arb_snapshot(), state in arb_state()) {
        let options = derive_options(&records);
        let decoded = decode(&encode(&state), &options);

        prop_assert!(decoded.slot().map_or(true, |s| options.has_slot(s)));
        prop_assert!(decoded.tags().iter().all(|t| options.has_tag(t)));
    }

    #[test]
    fn prop_decode_never_panics(fragment in ".{0,40}", records in arb_snapshot()) {
        let options = derive_options(&records);
        let _ = decode(&fragment, &options);
    }
}
