//! Page URLs and in-place history replacement
//!
//! The listing page never navigates away when the filter changes; it
//! replaces the fragment of the current history entry. [`History`] models
//! that: it holds the current [`PageUrl`] and keeps every replaced URL so
//! callers (and tests) can observe the writes.

use std::fmt::{self, Display, Formatter};
use syllabus_filter::FragmentWriter;

/// URL of a page: path plus optional fragment
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PageUrl {
    path: String,
    fragment: String,
}

impl PageUrl {
    /// Split `url` at the first `#`
    #[must_use]
    pub fn parse(url: &str) -> Self {
        match url.split_once('#') {
            Some((path, fragment)) => Self {
                path: path.to_string(),
                fragment: fragment.to_string(),
            },
            None => Self {
                path: url.to_string(),
                fragment: String::new(),
            },
        }
    }

    /// Path part
    #[inline]
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Fragment part, without `#`
    #[inline]
    #[must_use]
    pub fn fragment(&self) -> &str {
        &self.fragment
    }

    /// Replace the fragment; an empty one removes it
    #[inline]
    pub fn set_fragment(&mut self, fragment: &str) {
        fragment.clone_into(&mut self.fragment);
    }
}

impl Display for PageUrl {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.fragment.is_empty() {
            write!(f, "{}", self.path)
        } else {
            write!(f, "{}#{}", self.path, self.fragment)
        }
    }
}

impl From<&str> for PageUrl {
    fn from(url: &str) -> Self {
        Self::parse(url)
    }
}

/// Current history entry plus the log of replacements
#[derive(Debug, Clone, Default)]
pub struct History {
    current: PageUrl,
    replaced: Vec<String>,
}

impl History {
    /// Start at `url`
    #[must_use]
    pub fn new(url: &str) -> Self {
        Self {
            current: PageUrl::parse(url),
            replaced: Vec::new(),
        }
    }

    /// Current URL
    #[inline]
    #[must_use]
    pub fn current(&self) -> &PageUrl {
        &self.current
    }

    /// Every URL written by a replacement, oldest first
    #[inline]
    #[must_use]
    pub fn replaced(&self) -> &[String] {
        &self.replaced
    }
}

impl FragmentWriter for History {
    fn replace_fragment(&mut self, fragment: &str) {
        self.current.set_fragment(fragment);
        self.replaced.push(self.current.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_with_fragment() {
        let url = PageUrl::parse("/class#filter=月-1");
        assert_eq!(url.path(), "/class");
        assert_eq!(url.fragment(), "filter=月-1");
    }

    #[test]
    fn parse_without_fragment() {
        let url = PageUrl::from("/class");
        assert_eq!(url.path(), "/class");
        assert_eq!(url.fragment(), "");
        assert_eq!(url.to_string(), "/class");
    }

    #[test]
    fn fragment_may_contain_hash() {
        let url = PageUrl::parse("/class#a#b");
        assert_eq!(url.fragment(), "a#b");
    }

    #[test]
    fn empty_fragment_is_dropped_from_display() {
        let mut url = PageUrl::parse("/class#tags=A");
        url.set_fragment("");
        assert_eq!(url.to_string(), "/class");
    }

    #[test]
    fn history_replaces_in_place() {
        let mut history = History::new("/class");
        history.replace_fragment("tags=A");
        history.replace_fragment("filter=月-1&tags=A");
        history.replace_fragment("");

        assert_eq!(history.current().to_string(), "/class");
        assert_eq!(
            history.replaced(),
            &[
                "/class#tags=A".to_string(),
                "/class#filter=月-1&tags=A".to_string(),
                "/class".to_string(),
            ]
        );
    }
}
