//! Dropdown options and the bounded option window shown around the
//! current page.

use serde::{Deserialize, Serialize};

/// Maximum number of options a dropdown may carry.
pub const SELECT_OPTION_LIMIT: usize = 25;

/// Options kept before the current page in a centred window.
const WINDOW_BEHIND: usize = 12;

/// Options kept from the current page onwards in a centred window.
const WINDOW_AHEAD: usize = 13;

/// Maximum length of an option description, in characters.
pub const OPTION_DESCRIPTION_LIMIT: usize = 50;

/// One entry in a jump-to-page dropdown.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SelectOption {
    label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    value: String,
}

impl SelectOption {
    /// Creates an option without a description.
    #[must_use]
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            description: None,
            value: value.into(),
        }
    }

    /// Creates the conventional `Page N` option whose value is the page
    /// index.
    #[must_use]
    pub fn for_page(index: usize) -> Self {
        Self::new(format!("Page {}", index + 1), index.to_string())
    }

    /// Sets the description, truncated to
    /// [`OPTION_DESCRIPTION_LIMIT`] characters.
    #[must_use]
    pub fn with_description(mut self, description: impl AsRef<str>) -> Self {
        let truncated: String = description
            .as_ref()
            .chars()
            .take(OPTION_DESCRIPTION_LIMIT)
            .collect();
        self.description = Some(truncated);
        self
    }

    /// Returns the visible label.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Returns the short description, if any.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the value reported back when the option is picked.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

/// Returns the slice of `options` to display when `current` is the page
/// on screen.
///
/// Lists of up to [`SELECT_OPTION_LIMIT`] entries are shown whole. Longer
/// lists show a window of 25: the first 25 while the current page is
/// within the first 12, the last 25 once the current page enters the
/// tail, and otherwise the 12 options before and 13 from the current
/// page.
///
/// # Examples
///
/// ```
/// use cog_menus::menu::domain::select_window;
///
/// let options: Vec<usize> = (0..100).collect();
/// assert_eq!(select_window(&options, 50).first(), Some(&38));
/// assert_eq!(select_window(&options, 50).last(), Some(&62));
/// ```
#[must_use]
pub fn select_window<T>(options: &[T], current: usize) -> &[T] {
    let len = options.len();
    if len <= SELECT_OPTION_LIMIT {
        return options;
    }
    let tail_start = len - SELECT_OPTION_LIMIT;
    let range = if current > WINDOW_BEHIND && current < tail_start {
        (current - WINDOW_BEHIND)..(current + WINDOW_AHEAD)
    } else if current >= tail_start {
        tail_start..len
    } else {
        0..SELECT_OPTION_LIMIT
    };
    options.get(range).unwrap_or(options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(10, 3, 0, 10)]
    #[case(25, 24, 0, 25)]
    #[case(30, 0, 0, 25)]
    #[case(30, 12, 5, 30)]
    #[case(60, 12, 0, 25)]
    #[case(30, 20, 5, 30)]
    #[case(40, 20, 15, 40)]
    #[case(40, 13, 1, 26)]
    #[case(100, 50, 38, 63)]
    #[case(100, 75, 75, 100)]
    #[case(100, 99, 75, 100)]
    fn window_matches_expected_range(
        #[case] len: usize,
        #[case] current: usize,
        #[case] start: usize,
        #[case] end: usize,
    ) {
        let options: Vec<usize> = (0..len).collect();
        let expected: Vec<usize> = (start..end).collect();
        assert_eq!(select_window(&options, current), expected.as_slice());
    }

    #[rstest]
    fn window_never_exceeds_limit() {
        let options: Vec<usize> = (0..300).collect();
        for current in 0..300 {
            assert!(select_window(&options, current).len() <= SELECT_OPTION_LIMIT);
        }
    }

    #[rstest]
    fn description_truncates_on_character_boundaries() {
        let long = "é".repeat(80);
        let option = SelectOption::new("Page 1", "0").with_description(long);
        assert_eq!(
            option.description().map(|text| text.chars().count()),
            Some(OPTION_DESCRIPTION_LIMIT)
        );
    }

    #[rstest]
    fn page_option_uses_one_based_label() {
        let option = SelectOption::for_page(4);
        assert_eq!(option.label(), "Page 5");
        assert_eq!(option.value(), "4");
    }
}
