//! Time utilities: rendering optional clocks and durations for the summary
//! and the sheet.

use crate::models::{ClockTime, DutyDuration};

/// `HH:MM`, or `-` when the value is absent.
pub fn clock_or_dash(t: Option<ClockTime>) -> String {
    t.map(|t| t.colon()).unwrap_or_else(|| "-".to_string())
}

/// `HH:MM`, or an empty cell when the value is absent.
pub fn clock_or_blank(t: Option<ClockTime>) -> String {
    t.map(|t| t.colon()).unwrap_or_default()
}

/// Sum of the durations that are present; `None` if none is.
pub fn sum_durations<I>(items: I) -> Option<DutyDuration>
where
    I: IntoIterator<Item = Option<DutyDuration>>,
{
    items
        .into_iter()
        .flatten()
        .fold(None, |acc, d| Some(acc.map_or(d, |a| a + d)))
}
