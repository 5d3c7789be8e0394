mod common;
use common::{jan25_text, roster};
use crewsheet::models::DutyKind;

#[test]
fn test_fixture_trips() {
    let r = roster(&jan25_text());
    assert_eq!(r.entries.len(), 7);

    let trips = r.trips();
    let shapes: Vec<Vec<&str>> = trips
        .iter()
        .map(|t| {
            t.entries()
                .iter()
                .map(|e| match &e.kind {
                    DutyKind::Flight(leg) => leg.flight_number.as_str(),
                    other => other.label(),
                })
                .collect()
        })
        .collect();

    assert_eq!(
        shapes,
        vec![
            vec!["SQ123", "SQ124"],
            vec!["SS50"],
            vec!["SQ856", "SQ855"],
        ]
    );
}

#[test]
fn test_trips_partition_flights_and_standbys() {
    let r = roster(&jan25_text());
    let trips = r.trips();

    let in_trips: usize = trips.iter().map(|t| t.len()).sum();
    let eligible = r
        .entries
        .iter()
        .filter(|e| e.is_flight() || e.is_standby())
        .count();
    assert_eq!(in_trips, eligible);

    for entry in &r.entries {
        let hits = trips
            .iter()
            .filter(|t| t.entries().iter().any(|e| std::ptr::eq(*e, entry)))
            .count();
        let expected = usize::from(entry.is_flight() || entry.is_standby());
        assert_eq!(hits, expected, "{:?}", entry.kind);
    }
}

#[test]
fn test_broken_inbound_stands_alone() {
    let r = roster("01Mar25 SQ221 MEL-SIN 0650 2:10\n02Mar25 SQ211 SIN-SYD 2100 2200");
    let trips = r.trips();

    assert_eq!(trips.len(), 2);
    assert!(trips[0].is_broken_inbound("SIN"));
    assert_eq!(trips[1].len(), 1);
}

#[test]
fn test_standby_closes_open_trip() {
    let r = roster("01Mar25 SQ5 SIN-BKK 0800 0900\n02Mar25 SS12 0600\n03Mar25 SQ6 BKK-SIN 1000 1100 1230");
    let trips = r.trips();

    assert_eq!(trips.len(), 3);
    assert_eq!(trips[0].len(), 1);
    assert!(trips[1].standby().is_some());
    // inbound with no trip open
    assert!(trips[2].is_broken_inbound("SIN"));
}

#[test]
fn test_away_to_away_leg_stays_in_trip() {
    let r = roster(
        "01Apr25 SQ5 SIN-BKK 0800 0900 1030\n02Apr25 SQ7 BKK-HKG 1000 1100 1500\n03Apr25 SQ8 HKG-SIN 0900 1000 1400",
    );
    let trips = r.trips();
    assert_eq!(trips.len(), 1);
    assert_eq!(trips[0].len(), 3);
    assert_eq!(trips[0].away_station("SIN"), Some("BKK"));
}

#[test]
fn test_unterminated_trip_is_returned() {
    let r = roster("28Jan25 SQ318 SIN-LHR 2250 2350");
    let trips = r.trips();
    assert_eq!(trips.len(), 1);
    assert!(trips[0].departs_home("SIN"));
}
