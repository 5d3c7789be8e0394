//! Continuation handling for flights that straddle two roster days.

use crate::models::DutyEntry;
use tracing::debug;

/// Fold arrival-only continuation rows into their origin entry, then move
/// misplaced overnight departures back onto the departure-day row.
///
/// The two passes always run in this order. Running `merge` on its own
/// output changes nothing.
pub fn merge(entries: Vec<DutyEntry>) -> Vec<DutyEntry> {
    let folded = fold_continuations(entries);
    fix_misplaced_overnight_departures(folded)
}

/// Both entries fly the same flight number on the same sector.
pub fn is_continuation(prev: &DutyEntry, next: &DutyEntry) -> bool {
    match (prev.flight(), next.flight()) {
        (Some(a), Some(b)) => a.same_flight(b),
        _ => false,
    }
}

/// Single left-to-right pass; the accumulator's last element is the
/// "preceding kept entry".
pub fn fold_continuations(entries: Vec<DutyEntry>) -> Vec<DutyEntry> {
    entries
        .into_iter()
        .fold(Vec::new(), |mut kept: Vec<DutyEntry>, mut entry| {
            let Some(prev) = kept.last_mut() else {
                kept.push(entry);
                return kept;
            };
            if !is_continuation(prev, &entry) {
                kept.push(entry);
                return kept;
            }

            let arrival_only = entry.arrival_time.is_some() && entry.departure_time.is_none();
            if arrival_only && !entry.split_continuation && prev.arrival_time.is_none() {
                absorb_arrival(prev, entry);
                return kept;
            }

            if entry.departure_time.is_some() && entry.arrival_time.is_some() {
                entry.split_continuation = true;
            }
            kept.push(entry);
            kept
        })
}

fn absorb_arrival(prev: &mut DutyEntry, cont: DutyEntry) {
    prev.arrival_time = cont.arrival_time;
    if cont.start_date != prev.start_date {
        prev.arrival_date = Some(cont.start_date);
    }

    prev.flight_duration = prev.flight_duration.or(cont.flight_duration);
    prev.duty_duration = prev.duty_duration.or(cont.duty_duration);
    prev.flight_duty_period = prev.flight_duty_period.or(cont.flight_duty_period);

    prev.raw_block.push('\n');
    prev.raw_block.push_str(&cont.raw_block);

    debug!(
        flight = prev.flight().map(|l| l.flight_number.as_str()).unwrap_or_default(),
        start = %prev.start_date,
        arrival = %cont.start_date,
        "folded continuation arrival"
    );
}

/// When a departure-day row lacks its departure and the next row (same
/// flight) carries departure and arrival, the departure belongs to the
/// first row. Move it, with the flight time, leaving only the arrival on the
/// continuation.
pub fn fix_misplaced_overnight_departures(mut entries: Vec<DutyEntry>) -> Vec<DutyEntry> {
    for i in 1..entries.len() {
        let (head, tail) = entries.split_at_mut(i);
        let prev = &mut head[i - 1];
        let next = &mut tail[0];

        let misplaced = prev.departure_time.is_none()
            && next.departure_time.is_some()
            && next.arrival_time.is_some()
            && is_continuation(prev, next);
        if !misplaced {
            continue;
        }

        prev.departure_time = next.departure_time.take();
        if next.flight_duration.is_some() {
            prev.flight_duration = next.flight_duration.take();
        }
        next.split_continuation = true;

        debug!(
            flight = prev.flight().map(|l| l.flight_number.as_str()).unwrap_or_default(),
            date = %prev.start_date,
            "moved overnight departure back to departure day"
        );
    }
    entries
}
