// src/export/rows.rs

use crate::models::{ClockTime, DayType, DutyDuration, DutyEntry, FlightLeg, SheetRow, Trip};
use crate::utils::date::days_inclusive;
use crate::utils::time::{clock_or_blank, sum_durations};
use chrono::NaiveDate;

/// One flown leg as the sheet sees it. A departure-day entry and its
/// `split_continuation` arrival row collapse into a single leg.
#[derive(Debug, Clone, Copy)]
struct Leg<'a> {
    index: usize,
    leg: &'a FlightLeg,
    report: Option<ClockTime>,
    departure: Option<ClockTime>,
    arrival: Option<ClockTime>,
    flight: Option<DutyDuration>,
    duty: Option<DutyDuration>,
    departure_day: NaiveDate,
    arrival_day: NaiveDate,
}

impl<'a> Leg<'a> {
    fn single(index: usize, entry: &'a DutyEntry, leg: &'a FlightLeg) -> Self {
        Self {
            index,
            leg,
            report: entry.report_time,
            departure: entry.departure_time,
            arrival: entry.arrival_time,
            flight: entry.flight_duration,
            duty: entry.duty_or_fdp(),
            departure_day: entry.start_date,
            arrival_day: entry.arrival_day(),
        }
    }

    /// `head` carries the departure, `tail` the arrival on a later row.
    fn joined(index: usize, head: &'a DutyEntry, tail: &'a DutyEntry, leg: &'a FlightLeg) -> Self {
        Self {
            index,
            leg,
            report: head.report_time.or(tail.report_time),
            departure: head.departure_time.or(tail.departure_time),
            arrival: tail.arrival_time.or(head.arrival_time),
            flight: head.flight_duration.or(tail.flight_duration),
            duty: head.duty_or_fdp().or(tail.duty_or_fdp()),
            departure_day: head.start_date,
            arrival_day: tail.arrival_day().max(head.start_date),
        }
    }

    fn departure_or_report(&self) -> Option<ClockTime> {
        self.departure.or(self.report)
    }
}

/// Which part of a leg lands on a calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Half {
    /// Departure and arrival on the same day.
    Whole,
    /// Departure day of an overnight leg.
    Departure,
    /// Arrival day of an overnight leg.
    Arrival,
}

#[derive(Debug, Clone, Copy)]
struct LegPart<'a> {
    date: NaiveDate,
    leg: Leg<'a>,
    half: Half,
}

impl LegPart<'_> {
    fn departs(&self) -> bool {
        self.half != Half::Arrival
    }

    fn arrives(&self) -> bool {
        self.half != Half::Departure
    }
}

/// Day-by-day timesheet rows for every flight trip. Standby trips have no
/// rows.
pub fn trips_to_sheet_rows(trips: &[Trip<'_>], home: &str) -> Vec<SheetRow> {
    trips.iter().flat_map(|t| trip_rows(t, home)).collect()
}

fn trip_rows(trip: &Trip<'_>, home: &str) -> Vec<SheetRow> {
    let flights = trip.flights();
    let Some(&(entry, leg)) = flights.first() else {
        return Vec::new();
    };

    if trip.is_broken_inbound(home) {
        let part = LegPart {
            date: entry.start_date,
            leg: Leg::single(0, entry, leg),
            half: Half::Whole,
        };
        return vec![build_row(entry.start_date, DayType::Layover, &[part], 0, home)];
    }

    let legs = logical_legs(&flights);
    let last = legs.len().saturating_sub(1);
    let parts = split_parts(&legs);
    let away = trip.away_station(home).unwrap_or_default();

    let end = parts
        .iter()
        .map(|p| p.date)
        .max()
        .map_or(trip.end_date(), |d| d.max(trip.end_date()));

    let mut rows = Vec::new();
    for day in days_inclusive(trip.start_date(), end) {
        let today: Vec<LegPart<'_>> = parts.iter().filter(|p| p.date == day).copied().collect();

        if today.is_empty() {
            let mut row = SheetRow::blank(day, DayType::Layover);
            row.to = away.to_string();
            rows.push(row);
        } else if is_turnaround(&today) {
            rows.push(build_row(day, DayType::Turnaround, &today, last, home));
        } else {
            for part in &today {
                rows.push(build_row(day, DayType::Layover, &[*part], last, home));
            }
        }
    }

    rows
}

/// Flights in order, with each split continuation folded into the leg it
/// continues.
fn logical_legs<'a>(flights: &[(&'a DutyEntry, &'a FlightLeg)]) -> Vec<Leg<'a>> {
    let mut legs = Vec::with_capacity(flights.len());
    let mut i = 0;

    while i < flights.len() {
        let (entry, leg) = flights[i];
        let index = legs.len();

        match flights.get(i + 1) {
            Some(&(next, next_leg)) if next.split_continuation && next_leg.same_flight(leg) => {
                legs.push(Leg::joined(index, entry, next, leg));
                i += 2;
            }
            _ => {
                legs.push(Leg::single(index, entry, leg));
                i += 1;
            }
        }
    }

    legs
}

/// One part per same-day leg; two (departure day, arrival day) per
/// overnight leg.
fn split_parts<'a>(legs: &[Leg<'a>]) -> Vec<LegPart<'a>> {
    let mut parts = Vec::with_capacity(legs.len() + 2);

    for &leg in legs {
        if leg.arrival_day != leg.departure_day {
            parts.push(LegPart {
                date: leg.departure_day,
                leg,
                half: Half::Departure,
            });
            parts.push(LegPart {
                date: leg.arrival_day,
                leg,
                half: Half::Arrival,
            });
        } else {
            parts.push(LegPart {
                date: leg.departure_day,
                leg,
                half: Half::Whole,
            });
        }
    }

    parts
}

/// Two same-day legs, the second flying the first one's sector backwards.
fn is_turnaround(today: &[LegPart<'_>]) -> bool {
    match today {
        [a, b] => {
            a.half == Half::Whole && b.half == Half::Whole && b.leg.leg.is_reverse_of(a.leg.leg)
        }
        _ => false,
    }
}

fn build_row(
    day: NaiveDate,
    day_type: DayType,
    parts: &[LegPart<'_>],
    last: usize,
    home: &str,
) -> SheetRow {
    let mut row = SheetRow::blank(day, day_type);

    if let Some(first) = parts.first() {
        row.from = first.leg.leg.origin.clone();
        row.to = first.leg.leg.destination.clone();
    }

    for part in parts {
        place_times(&mut row, part, home);
    }

    // The first leg's durations go on its departure row, the last leg's on
    // its arrival row; a single-leg trip writes them once.
    let mut duty: Option<DutyDuration> = None;
    let mut flight = Vec::new();
    for part in parts {
        let first_departure = part.leg.index == 0 && part.departs();
        let last_arrival = part.leg.index == last && last != 0 && part.arrives();
        if first_departure || last_arrival {
            duty = duty.max(part.leg.duty);
            flight.push(part.leg.flight);
        }
    }
    if let Some(d) = duty {
        row.set_duty(d);
    }
    if let Some(f) = sum_durations(flight) {
        row.set_flight(f);
    }

    row
}

fn place_times(row: &mut SheetRow, part: &LegPart<'_>, home: &str) {
    let leg = &part.leg;
    let arrival = match part.half {
        Half::Departure => "-".to_string(),
        Half::Whole | Half::Arrival => clock_or_blank(leg.arrival),
    };

    if leg.leg.departs(home) {
        if part.departs() {
            row.home_report = clock_or_blank(leg.report);
        }
        row.away_arrival = arrival;
    } else if leg.leg.arrives(home) {
        if part.departs() {
            row.away_departure = clock_or_blank(leg.departure_or_report());
        }
        row.home_arrival = arrival;
    } else {
        if part.departs() {
            row.away_departure = clock_or_blank(leg.departure_or_report());
        }
        row.away_arrival = arrival;
    }
}
