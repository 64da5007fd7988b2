//! Filtering and paging for post listings.

use std::ops::Range;

use crate::coerce::parse_int;
use crate::constants::{DEFAULT_PAGE_LIMIT, DEFAULT_PAGE_OFFSET};
use crate::types::ForumId;

/// Which forum a post listing is restricted to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ForumFilter {
    /// No restriction.
    #[default]
    Any,
    /// Posts whose `forumId` equals this id exactly.
    Only(ForumId),
    /// The requested forum id was not a number; nothing matches it.
    Nothing,
}

impl ForumFilter {
    /// An absent or empty parameter disables the filter.
    pub fn from_param(raw: Option<&str>) -> Self {
        match raw {
            None | Some("") => Self::Any,
            Some(s) => parse_int(s).map_or(Self::Nothing, |id| Self::Only(ForumId(id))),
        }
    }

    /// A post with no forum id only passes the `Any` filter.
    pub fn matches(&self, forum_id: Option<ForumId>) -> bool {
        match self {
            Self::Any => true,
            Self::Only(id) => forum_id == Some(*id),
            Self::Nothing => false,
        }
    }
}

/// An `offset`/`limit` window. `None` bounds are non-numeric input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    pub offset: Option<i64>,
    pub limit: Option<i64>,
}

impl Default for Page {
    fn default() -> Self {
        Self {
            offset: Some(DEFAULT_PAGE_OFFSET),
            limit: Some(DEFAULT_PAGE_LIMIT),
        }
    }
}

impl Page {
    pub fn new(offset: i64, limit: i64) -> Self {
        Self {
            offset: Some(offset),
            limit: Some(limit),
        }
    }

    /// Absent parameters take their defaults; present ones are coerced.
    pub fn from_params(offset: Option<&str>, limit: Option<&str>) -> Self {
        let defaults = Self::default();
        Self {
            offset: offset.map_or(defaults.offset, parse_int),
            limit: limit.map_or(defaults.limit, parse_int),
        }
    }

    /// Index range selected from a sequence of `len` items.
    ///
    /// Follows `Array.prototype.slice(offset, offset + limit)`: a
    /// non-numeric bound counts as 0, a negative bound counts back from the
    /// end, and both clamp to `len`. A non-numeric offset or limit therefore
    /// selects nothing.
    pub fn bounds(&self, len: usize) -> Range<usize> {
        let end = match (self.offset, self.limit) {
            (Some(offset), Some(limit)) => Some(offset.saturating_add(limit)),
            _ => None,
        };
        let start = resolve(self.offset, len);
        let end = resolve(end, len);
        start..end.max(start)
    }
}

fn resolve(bound: Option<i64>, len: usize) -> usize {
    let len_i = i64::try_from(len).unwrap_or(i64::MAX);
    let idx = match bound {
        None => 0,
        Some(b) if b < 0 => len_i.saturating_add(b).max(0),
        Some(b) => b.min(len_i),
    };
    usize::try_from(idx).unwrap_or(0)
}

/// A complete post listing request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PostQuery {
    pub forum: ForumFilter,
    pub page: Page,
}

impl PostQuery {
    pub fn from_params(forum_id: Option<&str>, offset: Option<&str>, limit: Option<&str>) -> Self {
        Self {
            forum: ForumFilter::from_param(forum_id),
            page: Page::from_params(offset, limit),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_page_takes_first_fifty() {
        assert_eq!(Page::default().bounds(6), 0..6);
        assert_eq!(Page::default().bounds(80), 0..50);
    }

    #[test]
    fn test_window_after_offset() {
        assert_eq!(Page::new(1, 1).bounds(2), 1..2);
        assert_eq!(Page::new(1, 1).bounds(1), 1..1);
        assert_eq!(Page::new(4, 10).bounds(6), 4..6);
        assert_eq!(Page::new(9, 10).bounds(6), 6..6);
    }

    #[test]
    fn test_negative_bounds_count_from_end() {
        // slice(-2, 8) on six items
        assert_eq!(Page::new(-2, 10).bounds(6), 4..6);
        // slice(0, -1)
        assert_eq!(Page::new(0, -1).bounds(6), 0..5);
        // slice(-10, -8) clamps to nothing
        assert_eq!(Page::new(-10, 2).bounds(6), 0..0);
    }

    #[test]
    fn test_non_numeric_bounds_select_nothing() {
        let page = Page::from_params(Some("abc"), None);
        assert_eq!(page.offset, None);
        assert!(page.bounds(6).is_empty());

        let page = Page::from_params(None, Some(""));
        assert!(page.bounds(6).is_empty());
    }

    #[test]
    fn test_params_are_truncated() {
        let page = Page::from_params(Some("1.8"), Some("2.2"));
        assert_eq!(page, Page::new(1, 2));
    }

    #[test]
    fn test_forum_filter_from_param() {
        assert_eq!(ForumFilter::from_param(None), ForumFilter::Any);
        assert_eq!(ForumFilter::from_param(Some("")), ForumFilter::Any);
        assert_eq!(ForumFilter::from_param(Some("2")), ForumFilter::Only(ForumId(2)));
        assert_eq!(ForumFilter::from_param(Some("two")), ForumFilter::Nothing);
        assert!(!ForumFilter::Nothing.matches(Some(ForumId(2))));
        assert!(ForumFilter::Any.matches(Some(ForumId(2))));
    }

    #[test]
    fn test_post_without_forum_only_matches_any() {
        assert!(ForumFilter::Any.matches(None));
        assert!(!ForumFilter::Only(ForumId(1)).matches(None));
        assert!(!ForumFilter::Nothing.matches(None));
    }
}
