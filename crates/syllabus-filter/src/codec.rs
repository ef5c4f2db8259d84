//! URL fragment codec
//!
//! Wire format (the fragment after `#`):
//!
//! ```text
//! fragment := [ "filter=" day "-" time ] [ "&" ] [ "tags=" tag ("," tag)* ]
//! ```
//!
//! Either segment may be absent; an empty selection encodes to an empty
//! fragment. Decoding never fails: anything malformed degrades to the
//! nearest valid partial state, and tags or slots the snapshot does not
//! offer are dropped so stale links still open.
//!
//! Tags and days are written verbatim except for the characters that would
//! break the grammar (`%`, `,`, `&`, `#`, `=` and whitespace), which are
//! percent-encoded. Typical tags therefore produce exactly the plain
//! `tags=a,b` form.

use crate::options::FilterOptions;
use crate::state::FilterState;
use indexmap::IndexSet;
use once_cell::sync::Lazy;
use regex::Regex;
use std::borrow::Cow;
use std::fmt::Write;
use syllabus_catalog::TimeSlot;

static SLOT_SEGMENT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?:^|[#&])filter=([^\s&#]+)-([0-9]+)(?:$|[&#])").expect("valid slot pattern")
});

static TAGS_SEGMENT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?:^|[#&])tags=([^&#]*)").expect("valid tags pattern"));

/// Raw `filter=<day>-<time>` capture
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotCapture<'a> {
    /// Day token, still percent-encoded
    pub day: &'a str,
    /// Decimal digits of the period
    pub time: &'a str,
}

/// Segments found in a fragment
///
/// Produced by [`parse_fragment`]; each field is `None` when its segment is
/// absent or malformed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FragmentParts<'a> {
    /// `filter=` segment
    pub slot: Option<SlotCapture<'a>>,
    /// Raw comma-separated `tags=` value
    pub tags: Option<&'a str>,
}

impl FragmentParts<'_> {
    /// Check if neither segment was found
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slot.is_none() && self.tags.is_none()
    }
}

/// Locate the two segments in `fragment`
///
/// A segment counts when it starts the fragment or follows `#` or `&`, so
/// both a bare fragment and a full `/path#...` string are accepted.
#[must_use]
pub fn parse_fragment(fragment: &str) -> FragmentParts<'_> {
    let slot = SLOT_SEGMENT.captures(fragment).and_then(|caps| {
        Some(SlotCapture {
            day: caps.get(1)?.as_str(),
            time: caps.get(2)?.as_str(),
        })
    });
    let tags = TAGS_SEGMENT
        .captures(fragment)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str());

    FragmentParts { slot, tags }
}

/// Fragment part of a URL (after the first `#`), empty if there is none
#[must_use]
pub fn fragment_of(url: &str) -> &str {
    url.split_once('#').map_or("", |(_, fragment)| fragment)
}

/// Encode `state` as a fragment (without the leading `#`)
#[must_use]
pub fn encode(state: &FilterState) -> String {
    let mut out = String::new();

    if let Some(slot) = state.slot() {
        // Writing to a String cannot fail
        let _ = write!(out, "filter={}-{}", escape(slot.day()), slot.time());
    }

    if !state.tags().is_empty() {
        if !out.is_empty() {
            out.push('&');
        }
        out.push_str("tags=");
        for (i, tag) in state.tags().iter().enumerate() {
            if i > 0 {
                out.push(',');
            }
            out.push_str(&escape(tag));
        }
    }

    out
}

/// Decode a fragment against the options of the current snapshot
///
/// - A well-formed slot is kept only if some class meets in it
/// - Tags are kept in fragment order, minus duplicates and unknown tags
#[must_use]
pub fn decode(fragment: &str, options: &FilterOptions) -> FilterState {
    let parts = parse_fragment(fragment);

    let selected_slot = parts.slot.and_then(|capture| {
        let time = capture.time.parse::<u32>().ok()?;
        let slot = TimeSlot::new(unescape(capture.day), time);
        if options.has_slot(&slot) {
            Some(slot)
        } else {
            tracing::warn!("Dropping slot {} from fragment: no class meets in it", slot);
            None
        }
    });

    let mut selected_tags = IndexSet::new();
    if let Some(raw) = parts.tags {
        for tag in raw.split(',').map(unescape) {
            if options.has_tag(&tag) {
                selected_tags.insert(tag.into_owned());
            } else if !tag.is_empty() {
                tracing::warn!("Dropping unknown tag {:?} from fragment", tag);
            }
        }
    }

    FilterState {
        selected_slot,
        selected_tags: selected_tags.into_iter().collect(),
    }
}

fn escape(value: &str) -> Cow<'_, str> {
    if !value.chars().any(is_reserved) {
        return Cow::Borrowed(value);
    }

    let mut out = String::with_capacity(value.len() + 8);
    for c in value.chars() {
        if is_reserved(c) {
            let mut buf = [0u8; 4];
            for byte in c.encode_utf8(&mut buf).bytes() {
                let _ = write!(out, "%{byte:02X}");
            }
        } else {
            out.push(c);
        }
    }
    Cow::Owned(out)
}

fn is_reserved(c: char) -> bool {
    matches!(c, '%' | ',' | '&' | '#' | '=') || c.is_whitespace()
}

/// Percent-decode, keeping the raw text when it is not valid UTF-8 escapes
fn unescape(value: &str) -> Cow<'_, str> {
    urlencoding::decode(value).unwrap_or(Cow::Borrowed(value))
}
