use super::clock::DutyDuration;
use crate::utils::date::sheet_date;
use chrono::NaiveDate;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DayType {
    Turnaround,
    Layover,
}

impl DayType {
    pub fn as_str(&self) -> &'static str {
        match self {
            DayType::Turnaround => "Turnaround",
            DayType::Layover => "Layover",
        }
    }
}

/// One calendar-day line of the timesheet (columns A–M).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SheetRow {
    pub date: String,                // A  MM/DD/YYYY
    pub from: String,                // B
    pub to: String,                  // C
    pub day_type: DayType,           // D
    pub home_report: String,         // E  report, leg leaving home
    pub home_arrival: String,        // F  arrival, leg returning home
    pub away_departure: String,      // G  departure, leg leaving the away station
    pub away_arrival: String,        // H  arrival, leg reaching the away station
    pub duty_hours: Option<i64>,     // I
    pub duty_minutes: Option<i64>,   // J
    pub duty_decimal: Option<f64>,   // K
    pub flight_hours: Option<i64>,   // L
    pub flight_minutes: Option<i64>, // M
}

impl SheetRow {
    pub fn blank(date: NaiveDate, day_type: DayType) -> Self {
        Self {
            date: sheet_date(date),
            from: String::new(),
            to: String::new(),
            day_type,
            home_report: String::new(),
            home_arrival: String::new(),
            away_departure: String::new(),
            away_arrival: String::new(),
            duty_hours: None,
            duty_minutes: None,
            duty_decimal: None,
            flight_hours: None,
            flight_minutes: None,
        }
    }

    pub fn set_duty(&mut self, duty: DutyDuration) {
        self.duty_hours = Some(duty.hours());
        self.duty_minutes = Some(duty.minutes());
        self.duty_decimal = Some(duty.decimal_hours());
    }

    pub fn set_flight(&mut self, flight: DutyDuration) {
        self.flight_hours = Some(flight.hours());
        self.flight_minutes = Some(flight.minutes());
    }
}
