//! Lenient calendar date parsing for free-text replies.

use chrono::NaiveDate;
use regex::Regex;
use std::sync::LazyLock;

static DATE_PATTERN: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(r"((19|20)\d\d)[- /.](0[1-9]|1[012]|[1-9])[- /.](0[1-9]|[12][0-9]|3[01]|[1-9])")
        .map_err(|err| tracing::warn!(error = %err, "date pattern failed to compile"))
        .ok()
});

/// Finds the first `YYYY-MM-DD` style date in `text`.
///
/// Year, month and day may be separated by `-`, `/`, `.` or a space, and
/// month and day may drop their leading zero. Dates that do not exist on
/// the calendar are rejected.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use cog_menus::hockey::domain::parse_date;
///
/// assert_eq!(parse_date("games on 2021/3/7 please"), NaiveDate::from_ymd_opt(2021, 3, 7));
/// assert_eq!(parse_date("tomorrow"), None);
/// ```
#[must_use]
pub fn parse_date(text: &str) -> Option<NaiveDate> {
    let captures = DATE_PATTERN.as_ref()?.captures(text)?;
    let year = captures.get(1)?.as_str().parse().ok()?;
    let month = captures.get(3)?.as_str().parse().ok()?;
    let day = captures.get(4)?.as_str().parse().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}
