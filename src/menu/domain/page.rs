//! Page counting, target resolution, and the view context handed to page
//! formatters.

use serde::{Deserialize, Serialize};

use super::UserId;

/// Upper bound on the number of pages a source can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MaxPages {
    /// The source knows its page count up front.
    Known(usize),
    /// The source cannot cheaply bound its length.
    Unknown,
}

impl MaxPages {
    /// Returns the page count when it is known.
    #[must_use]
    pub const fn known(self) -> Option<usize> {
        match self {
            Self::Known(count) => Some(count),
            Self::Unknown => None,
        }
    }

    /// Returns `true` when there is nowhere to navigate to: the count is
    /// known and at most one.
    ///
    /// Locked sources disable every navigation control except stop.
    #[must_use]
    pub const fn is_locked(self) -> bool {
        matches!(self, Self::Known(0 | 1))
    }

    /// Returns the index of the last page, if the count is known and
    /// non-zero.
    #[must_use]
    pub const fn last_index(self) -> Option<usize> {
        match self {
            Self::Known(count) if count > 0 => Some(count - 1),
            Self::Known(_) | Self::Unknown => None,
        }
    }
}

/// Outcome of resolving a requested page index against a page count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolvedTarget {
    /// Fetch this page.
    Page(usize),
    /// The request can never be satisfied; leave the session untouched.
    OutOfRange,
    /// The source currently holds no pages at all.
    Empty,
}

/// Resolves a requested page index, wrapping at both ends when the page
/// count is known.
///
/// Requests past the end land on the first page and negative requests
/// land on the last page. Unknown page counts are never wrapped: any
/// non-negative index is passed through for the source to judge.
///
/// # Examples
///
/// ```
/// use cog_menus::menu::domain::{MaxPages, ResolvedTarget, resolve_target};
///
/// assert_eq!(resolve_target(3, MaxPages::Known(3)), ResolvedTarget::Page(0));
/// assert_eq!(resolve_target(-1, MaxPages::Known(3)), ResolvedTarget::Page(2));
/// assert_eq!(resolve_target(-1, MaxPages::Unknown), ResolvedTarget::OutOfRange);
/// ```
#[must_use]
pub fn resolve_target(target: isize, max_pages: MaxPages) -> ResolvedTarget {
    match max_pages {
        MaxPages::Unknown => {
            usize::try_from(target).map_or(ResolvedTarget::OutOfRange, ResolvedTarget::Page)
        }
        MaxPages::Known(0) => ResolvedTarget::Empty,
        MaxPages::Known(count) => match usize::try_from(target) {
            Err(_) => ResolvedTarget::Page(count - 1),
            Ok(index) if index >= count => ResolvedTarget::Page(0),
            Ok(index) => ResolvedTarget::Page(index),
        },
    }
}

/// Offsets a page index by a signed step without overflowing.
#[must_use]
pub fn offset_index(current: usize, step: isize) -> isize {
    isize::try_from(current)
        .unwrap_or(isize::MAX)
        .saturating_add(step)
}

/// Session-visible context passed to page formatters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageView {
    current_page: usize,
    max_pages: MaxPages,
    viewer: UserId,
    footer: String,
}

impl PageView {
    /// Creates a view for the page about to be rendered.
    #[must_use]
    pub fn new(
        current_page: usize,
        max_pages: MaxPages,
        viewer: UserId,
        footer: impl Into<String>,
    ) -> Self {
        Self {
            current_page,
            max_pages,
            viewer,
            footer: footer.into(),
        }
    }

    /// Returns the zero-based index of the page being rendered.
    #[must_use]
    pub const fn current_page(&self) -> usize {
        self.current_page
    }

    /// Returns the source's page count at render time.
    #[must_use]
    pub const fn max_pages(&self) -> MaxPages {
        self.max_pages
    }

    /// Returns the user the menu was opened for.
    #[must_use]
    pub const fn viewer(&self) -> UserId {
        self.viewer
    }

    /// Returns the rendered page footer, e.g. `Page 2/7`.
    #[must_use]
    pub fn footer(&self) -> &str {
        &self.footer
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0, MaxPages::Known(3), ResolvedTarget::Page(0))]
    #[case(2, MaxPages::Known(3), ResolvedTarget::Page(2))]
    #[case(3, MaxPages::Known(3), ResolvedTarget::Page(0))]
    #[case(5, MaxPages::Known(3), ResolvedTarget::Page(0))]
    #[case(-1, MaxPages::Known(3), ResolvedTarget::Page(2))]
    #[case(-7, MaxPages::Known(3), ResolvedTarget::Page(2))]
    #[case(0, MaxPages::Known(0), ResolvedTarget::Empty)]
    #[case(40, MaxPages::Unknown, ResolvedTarget::Page(40))]
    #[case(-1, MaxPages::Unknown, ResolvedTarget::OutOfRange)]
    fn resolves_targets(
        #[case] target: isize,
        #[case] max_pages: MaxPages,
        #[case] expected: ResolvedTarget,
    ) {
        assert_eq!(resolve_target(target, max_pages), expected);
    }

    #[rstest]
    fn last_index_requires_known_non_zero_count() {
        assert_eq!(MaxPages::Known(4).last_index(), Some(3));
        assert_eq!(MaxPages::Known(0).last_index(), None);
        assert_eq!(MaxPages::Unknown.last_index(), None);
    }

    #[rstest]
    #[case(MaxPages::Known(0), true)]
    #[case(MaxPages::Known(1), true)]
    #[case(MaxPages::Known(2), false)]
    #[case(MaxPages::Unknown, false)]
    fn locks_navigation_below_two_pages(#[case] max_pages: MaxPages, #[case] locked: bool) {
        assert_eq!(max_pages.is_locked(), locked);
    }

    #[rstest]
    fn offset_index_steps_both_ways() {
        assert_eq!(offset_index(0, -1), -1);
        assert_eq!(offset_index(4, 1), 5);
    }
}
