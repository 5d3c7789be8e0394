//! Date utilities: roster date tokens, calendar ranges and the display
//! formats used by the summary and the sheet.

use crate::errors::{AppError, AppResult};
use chrono::{Datelike, NaiveDate};

const MONTHS: [&str; 12] = [
    "jan", "feb", "mar", "apr", "may", "jun", "jul", "aug", "sep", "oct", "nov", "dec",
];

/// Month number (1-12) for a three-letter English abbreviation, any case.
pub fn month_from_abbrev(abbrev: &str) -> Option<u32> {
    let lower = abbrev.to_ascii_lowercase();
    MONTHS
        .iter()
        .position(|m| *m == lower)
        .map(|i| i as u32 + 1)
}

/// Build a date from the three parts of a roster token (`01`, `Mar`, `26`).
///
/// Two-digit years are taken as 20YY. Fails when the parts do not name a
/// real calendar day (`31Feb25`).
pub fn roster_date(day: &str, month: &str, year: &str) -> AppResult<NaiveDate> {
    let token = format!("{day}{month}{year}");
    let d: u32 = day
        .parse()
        .map_err(|_| AppError::InvalidDate(token.clone()))?;
    let m = month_from_abbrev(month).ok_or_else(|| AppError::InvalidDate(token.clone()))?;
    let y: i32 = year
        .parse()
        .map_err(|_| AppError::InvalidDate(token.clone()))?;

    NaiveDate::from_ymd_opt(2000 + y, m, d).ok_or(AppError::InvalidDate(token))
}

/// Every date from `start` to `end`, both included. Empty if `end < start`.
pub fn days_inclusive(start: NaiveDate, end: NaiveDate) -> Vec<NaiveDate> {
    start.iter_days().take_while(|d| *d <= end).collect()
}

/// `01Jan`
pub fn day_month(d: NaiveDate) -> String {
    d.format("%d%b").to_string()
}

/// `01/31/2025`
pub fn sheet_date(d: NaiveDate) -> String {
    d.format("%m/%d/%Y").to_string()
}

/// `January 2025`
pub fn month_year(d: NaiveDate) -> String {
    format!("{} {}", month_name(d.month()), d.year())
}

pub fn month_name(month: u32) -> &'static str {
    match month {
        1 => "January",
        2 => "February",
        3 => "March",
        4 => "April",
        5 => "May",
        6 => "June",
        7 => "July",
        8 => "August",
        9 => "September",
        10 => "October",
        11 => "November",
        12 => "December",
        _ => "Unknown",
    }
}
