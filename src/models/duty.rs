use super::clock::{ClockTime, DutyDuration};
use chrono::{Days, NaiveDate};
use serde::Serialize;

/// One flown sector. Origin and destination are always present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FlightLeg {
    pub flight_number: String, // "SQ123"
    pub origin: String,        // "SIN"
    pub destination: String,   // "HKG"
}

impl FlightLeg {
    pub fn new(flight_number: &str, origin: &str, destination: &str) -> Self {
        Self {
            flight_number: flight_number.to_string(),
            origin: origin.to_string(),
            destination: destination.to_string(),
        }
    }

    /// `ORIGIN-DESTINATION`
    pub fn sector(&self) -> String {
        format!("{}-{}", self.origin, self.destination)
    }

    /// Same flight number flying the same sector.
    pub fn same_flight(&self, other: &FlightLeg) -> bool {
        self.flight_number == other.flight_number
            && self.origin == other.origin
            && self.destination == other.destination
    }

    /// `other` flies this sector backwards.
    pub fn is_reverse_of(&self, other: &FlightLeg) -> bool {
        self.origin == other.destination && self.destination == other.origin
    }

    pub fn departs(&self, station: &str) -> bool {
        self.origin == station
    }

    pub fn arrives(&self, station: &str) -> bool {
        self.destination == station
    }
}

/// What kind of duty a roster row describes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DutyKind {
    Flight(FlightLeg),
    Standby { code: String },
    OffDuty { code: String },
    Layover { station: Option<String> },
}

impl DutyKind {
    pub fn label(&self) -> &str {
        match self {
            DutyKind::Flight(_) => "FLY",
            DutyKind::Standby { code } => code,
            DutyKind::OffDuty { code } => code,
            DutyKind::Layover { .. } => "LO",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DutyEntry {
    pub start_date: NaiveDate,           // date heading the roster row
    pub arrival_date: Option<NaiveDate>, // only when the duty crossed midnight
    pub kind: DutyKind,

    pub report_time: Option<ClockTime>,
    pub departure_time: Option<ClockTime>,
    pub arrival_time: Option<ClockTime>,

    pub flight_duration: Option<DutyDuration>,
    pub duty_duration: Option<DutyDuration>,
    pub flight_duty_period: Option<DutyDuration>,

    /// Arrival-day half of a leg that was deliberately kept apart from its
    /// departure-day row.
    pub split_continuation: bool,
    pub raw_block: String,
}

impl DutyEntry {
    pub fn new(start_date: NaiveDate, kind: DutyKind, raw_block: &str) -> Self {
        Self {
            start_date,
            arrival_date: None,
            kind,
            report_time: None,
            departure_time: None,
            arrival_time: None,
            flight_duration: None,
            duty_duration: None,
            flight_duty_period: None,
            split_continuation: false,
            raw_block: raw_block.to_string(),
        }
    }

    pub fn flight(&self) -> Option<&FlightLeg> {
        match &self.kind {
            DutyKind::Flight(leg) => Some(leg),
            _ => None,
        }
    }

    pub fn is_flight(&self) -> bool {
        matches!(self.kind, DutyKind::Flight(_))
    }

    pub fn is_standby(&self) -> bool {
        matches!(self.kind, DutyKind::Standby { .. })
    }

    /// Departure if known, otherwise the report time.
    pub fn departure_or_report(&self) -> Option<ClockTime> {
        self.departure_time.or(self.report_time)
    }

    /// The duty length shown in exports: duty time, falling back to FDP.
    pub fn duty_or_fdp(&self) -> Option<DutyDuration> {
        self.duty_duration.or(self.flight_duty_period)
    }

    /// Only an arrival time is known.
    pub fn arrival_only(&self) -> bool {
        self.arrival_time.is_some() && self.report_time.is_none() && self.departure_time.is_none()
    }

    /// Calendar day on which the duty ends.
    ///
    /// An explicit `arrival_date` wins; otherwise an arrival clock earlier than
    /// the departure (or report) clock means the next day.
    pub fn arrival_day(&self) -> NaiveDate {
        if let Some(d) = self.arrival_date {
            return d;
        }
        match (self.departure_or_report(), self.arrival_time) {
            (Some(dep), Some(arr)) if arr < dep => self
                .start_date
                .checked_add_days(Days::new(1))
                .unwrap_or(self.start_date),
            _ => self.start_date,
        }
    }

    pub fn crosses_midnight(&self) -> bool {
        self.arrival_day() != self.start_date
    }
}
