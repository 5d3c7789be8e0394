use super::duty::{DutyEntry, FlightLeg};
use chrono::NaiveDate;

/// A pairing: a non-empty run of entries borrowed from the merged roster.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trip<'a> {
    entries: Vec<&'a DutyEntry>,
}

impl<'a> Trip<'a> {
    /// Only the grouper builds trips, and never from an empty run.
    pub(crate) fn new(entries: Vec<&'a DutyEntry>) -> Self {
        debug_assert!(!entries.is_empty(), "a trip always holds at least one entry");
        Self { entries }
    }

    pub fn entries(&self) -> &[&'a DutyEntry] {
        &self.entries
    }

    pub fn first(&self) -> &'a DutyEntry {
        self.entries[0]
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn start_date(&self) -> NaiveDate {
        self.first().start_date
    }

    pub fn standby(&self) -> Option<&'a DutyEntry> {
        self.entries.iter().copied().find(|e| e.is_standby())
    }

    /// Flight entries paired with their leg, in roster order.
    pub fn flights(&self) -> Vec<(&'a DutyEntry, &'a FlightLeg)> {
        self.entries
            .iter()
            .filter_map(|e| e.flight().map(|leg| (*e, leg)))
            .collect()
    }

    /// Last day touched by the trip: the arrival day of its last flight, or
    /// the start date when it holds no flights.
    pub fn end_date(&self) -> NaiveDate {
        self.flights()
            .last()
            .map(|(e, _)| e.arrival_day())
            .unwrap_or_else(|| self.start_date())
    }

    pub fn departs_home(&self, home: &str) -> bool {
        self.flights().iter().any(|(_, leg)| leg.departs(home))
    }

    /// Single inbound flight whose outbound lies before the roster window.
    pub fn is_broken_inbound(&self, home: &str) -> bool {
        let flights = self.flights();
        flights.len() == 1 && !flights[0].1.departs(home) && flights[0].1.arrives(home)
    }

    /// Station the crew is away at: the first leg's destination when it
    /// leaves home, otherwise its origin.
    pub fn away_station(&self, home: &str) -> Option<&'a str> {
        self.flights().first().map(|(_, leg)| {
            if leg.departs(home) {
                leg.destination.as_str()
            } else {
                leg.origin.as_str()
            }
        })
    }
}
