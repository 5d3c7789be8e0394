// src/export/message.rs

use crate::models::{ClockTime, DutyEntry, FlightLeg, Trip};
use crate::utils::date::{day_month, month_year};
use crate::utils::time::clock_or_dash;

/// Human-readable roster summary, one line per trip.
///
/// ```text
/// Flights for January 2025:
/// 01Jan - 02Jan | HKG | 09:00(SQ123) | 18:00(SQ124)
/// 05Jan - 05Jan | SS50 | 06:00 | -
/// ```
pub fn trips_to_message(trips: &[Trip<'_>], home: &str) -> String {
    let Some(first) = trips.first() else {
        return "No flights found.".to_string();
    };

    let mut lines = vec![format!("Flights for {}:", month_year(first.start_date()))];
    lines.extend(trips.iter().filter_map(|t| trip_line(t, home)));
    lines.join("\n")
}

fn trip_line(trip: &Trip<'_>, home: &str) -> Option<String> {
    let span = format!(
        "{} - {}",
        day_month(trip.start_date()),
        day_month(trip.end_date())
    );

    if let Some(standby) = trip.standby() {
        return Some(format!(
            "{span} | {} | {} | {}",
            standby.kind.label(),
            clock_or_dash(standby.report_time),
            clock_or_dash(standby.arrival_time)
        ));
    }

    let flights = trip.flights();
    let inbound: Option<(&DutyEntry, &FlightLeg)> =
        flights.iter().rev().find(|(_, leg)| leg.arrives(home)).copied();

    // Arrival only: the outbound lies before the roster window.
    if !trip.departs_home(home) {
        let (entry, leg) = inbound.or_else(|| flights.last().copied())?;
        return Some(format!(
            "{span} | {} | - | {}",
            leg.origin,
            stamp(entry.arrival_time, leg)
        ));
    }

    let (out_entry, out_leg) = flights.iter().find(|(_, leg)| leg.departs(home)).copied()?;
    let back = inbound
        .map(|(entry, leg)| stamp(entry.arrival_time, leg))
        .unwrap_or_else(|| "-".to_string());

    Some(format!(
        "{span} | {} | {} | {back}",
        out_leg.destination,
        stamp(out_entry.report_time, out_leg)
    ))
}

/// `09:00(SQ123)`
fn stamp(time: Option<ClockTime>, leg: &FlightLeg) -> String {
    format!("{}({})", clock_or_dash(time), leg.flight_number)
}
