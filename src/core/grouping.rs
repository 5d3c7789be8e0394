use crate::models::{DutyEntry, DutyKind, Trip};
use tracing::trace;

/// Partition merged entries into trips bounded by home-base departures and
/// arrivals.
///
/// - standby: its own trip, closing any open one
/// - off-duty / layover: never part of a trip
/// - flight with no trip open: a home arrival is a broken inbound and is
///   emitted alone; anything else opens a trip
/// - flight with a trip open: appended; closes the trip once it reaches
///   home with an arrival time
///
/// An unterminated trip at the end is still returned.
pub fn group_trips<'a>(entries: &'a [DutyEntry], home_base: &str) -> Vec<Trip<'a>> {
    let mut trips: Vec<Trip<'a>> = Vec::new();
    let mut current: Vec<&'a DutyEntry> = Vec::new();

    for entry in entries {
        match &entry.kind {
            DutyKind::Standby { code } => {
                if !current.is_empty() {
                    trace!(len = current.len(), "standby closes open trip");
                    trips.push(Trip::new(std::mem::take(&mut current)));
                }
                trace!(code = code.as_str(), date = %entry.start_date, "standby trip");
                trips.push(Trip::new(vec![entry]));
            }
            DutyKind::OffDuty { .. } | DutyKind::Layover { .. } => {
                trace!(kind = entry.kind.label(), date = %entry.start_date, "not part of a trip");
            }
            DutyKind::Flight(leg) => {
                if current.is_empty() && !leg.departs(home_base) && leg.arrives(home_base) {
                    trace!(flight = leg.flight_number.as_str(), "broken inbound");
                    trips.push(Trip::new(vec![entry]));
                    continue;
                }

                current.push(entry);

                if leg.arrives(home_base) && entry.arrival_time.is_some() {
                    trace!(len = current.len(), "trip closed at home base");
                    trips.push(Trip::new(std::mem::take(&mut current)));
                }
            }
        }
    }

    if !current.is_empty() {
        trace!(len = current.len(), "unterminated trip at end of roster");
        trips.push(Trip::new(current));
    }

    trips
}
