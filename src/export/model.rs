// src/export/model.rs

use crate::models::SheetRow;

/// Column headers (A–M) for CSV / XLSX.
pub const HEADERS: [&str; 13] = [
    "Date",
    "From",
    "To",
    "Type",
    "Report (Home Outbound)",
    "Arrival (Home Inbound)",
    "Departure (Away Outbound)",
    "Arrival (Away Inbound)",
    "Duty Hours",
    "Duty Minutes",
    "Duty Decimal",
    "Flight Hours",
    "Flight Minutes",
];

/// Flatten a row into its 13 cells, blanks as empty strings.
pub fn row_to_record(r: &SheetRow) -> [String; 13] {
    let num = |v: Option<i64>| v.map(|n| n.to_string()).unwrap_or_default();

    [
        r.date.clone(),
        r.from.clone(),
        r.to.clone(),
        r.day_type.as_str().to_string(),
        r.home_report.clone(),
        r.home_arrival.clone(),
        r.away_departure.clone(),
        r.away_arrival.clone(),
        num(r.duty_hours),
        num(r.duty_minutes),
        r.duty_decimal.map(|d| format!("{d:.2}")).unwrap_or_default(),
        num(r.flight_hours),
        num(r.flight_minutes),
    ]
}

pub fn rows_to_table(rows: &[SheetRow]) -> Vec<[String; 13]> {
    rows.iter().map(row_to_record).collect()
}
