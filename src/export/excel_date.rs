// src/export/excel_date.rs

use chrono::{NaiveDate, NaiveTime, Timelike};

/// Excel's day zero (the 1900 leap-year bug is baked into the offset).
fn excel_epoch() -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(1899, 12, 30)
}

/// Interpret a sheet cell as a date (`MM/DD/YYYY`) or clock time (`HH:MM`),
/// returning the Excel serial and its number format.
pub(crate) fn parse_to_excel_date(s: &str) -> Option<(&'static str, f64)> {
    if let Ok(d) = NaiveDate::parse_from_str(s, "%m/%d/%Y") {
        let days = (d - excel_epoch()?).num_days() as f64;
        return Some(("mm/dd/yyyy", days));
    }

    // Zero-padded clocks only.
    if s.len() == 5
        && let Ok(t) = NaiveTime::parse_from_str(s, "%H:%M")
    {
        let seconds = t.num_seconds_from_midnight() as f64;
        return Some(("hh:mm", seconds / 86400.0));
    }

    None
}
