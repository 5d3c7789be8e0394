mod common;
use common::{jan25_text, roster};
use crewsheet::export::model::{HEADERS, row_to_record};
use crewsheet::models::DayType;

#[test]
fn test_fixture_summary_message() {
    let r = roster(&jan25_text());
    let msg = r.summary();

    assert_eq!(
        msg,
        "Flights for January 2025:\n\
         01Jan - 02Jan | HKG | 09:00(SQ123) | 18:00(SQ124)\n\
         05Jan - 05Jan | SS50 | 06:00 | -\n\
         10Jan - 14Jan | LHR | 22:00(SQ856) | 07:15(SQ855)"
    );
}

#[test]
fn test_empty_roster_message() {
    let r = roster("07Jan25 ATDO\n08Jan25 OFFD");
    assert_eq!(r.summary(), "No flights found.");
    assert!(r.sheet_rows().is_empty());
}

#[test]
fn test_arrival_only_and_open_trip_lines() {
    let r = roster("01Mar25 SQ221 MEL-SIN 0650 2:10\n02Mar25 SQ211 SIN-SYD 2100 2200");
    let msg = r.summary();
    let lines: Vec<&str> = msg.lines().collect();

    assert_eq!(lines[0], "Flights for March 2025:");
    assert_eq!(lines[1], "01Mar - 01Mar | MEL | - | 06:50(SQ221)");
    assert_eq!(lines[2], "02Mar - 02Mar | SYD | 21:00(SQ211) | -");
}

#[test]
fn test_turnaround_is_one_row() {
    let r = roster(
        "03Feb25\nSQ890 SIN-HKG 0800 0900 1300 3:55 10:00 10:30\nSQ891 HKG-SIN 1400 1800 3:50",
    );
    let rows = r.sheet_rows();

    assert_eq!(rows.len(), 1);
    let row = &rows[0];
    assert_eq!(row.day_type, DayType::Turnaround);
    assert_eq!(row.date, "02/03/2025");
    assert_eq!((row.from.as_str(), row.to.as_str()), ("SIN", "HKG"));
    assert_eq!(row.home_report, "08:00");
    assert_eq!(row.away_arrival, "13:00");
    assert_eq!(row.away_departure, "14:00");
    assert_eq!(row.home_arrival, "18:00");
    assert_eq!((row.duty_hours, row.duty_minutes), (Some(10), Some(0)));
    assert_eq!(row.duty_decimal, Some(10.0));
    // both legs' block time
    assert_eq!((row.flight_hours, row.flight_minutes), (Some(7), Some(45)));

    assert_eq!(
        r.summary().lines().nth(1),
        Some("03Feb - 03Feb | HKG | 08:00(SQ890) | 18:00(SQ891)")
    );
}

#[test]
fn test_overnight_legs_span_days() {
    let r = roster(&jan25_text());
    let rows = r.sheet_rows();
    let dates: Vec<&str> = rows.iter().map(|r| r.date.as_str()).collect();

    assert_eq!(
        dates,
        [
            "01/01/2025",
            "01/02/2025",
            "01/10/2025",
            "01/11/2025",
            "01/12/2025",
            "01/13/2025",
            "01/14/2025",
        ]
    );

    let dep_day = &rows[2];
    assert_eq!(dep_day.home_report, "22:00");
    assert_eq!(dep_day.away_arrival, "-");
    assert_eq!(dep_day.duty_hours, Some(13));

    let arr_day = &rows[3];
    assert_eq!(arr_day.home_report, "");
    assert_eq!(arr_day.away_arrival, "05:30");
    assert_eq!((arr_day.duty_hours, arr_day.flight_hours), (None, None));

    let rest_day = &rows[4];
    assert_eq!(rest_day.day_type, DayType::Layover);
    assert_eq!((rest_day.from.as_str(), rest_day.to.as_str()), ("", "LHR"));

    assert_eq!(rows[5].away_departure, "11:30");
    assert_eq!(rows[5].home_arrival, "-");
    assert_eq!(rows[6].home_arrival, "07:15");
}

#[test]
fn test_repaired_overnight_departure_is_one_leg() {
    // second row repeats SQ318 with the departure that belongs to the 20th
    let r = roster(
        "20Apr25 SQ318 SIN-LHR 2250\n\
         21Apr25 SQ318 SIN-LHR 2350 0555 13:05\n\
         23Apr25 SQ317 LHR-SIN 0900 1000 1800 12:00",
    );
    assert!(r.entries[1].split_continuation);

    let rows = r.sheet_rows();
    let records: Vec<[String; 13]> = rows.iter().map(row_to_record).collect();
    assert_eq!(
        records,
        [
            ["04/20/2025", "SIN", "LHR", "Layover", "22:50", "", "", "-", "13", "5", "13.08", "", ""],
            ["04/21/2025", "SIN", "LHR", "Layover", "", "", "", "05:55", "", "", "", "", ""],
            ["04/22/2025", "", "LHR", "Layover", "", "", "", "", "", "", "", "", ""],
            ["04/23/2025", "LHR", "SIN", "Layover", "", "18:00", "10:00", "", "", "", "", "12", "0"],
        ]
    );

    let with_duty = rows.iter().filter(|row| row.duty_hours.is_some()).count();
    assert_eq!(with_duty, 1);

    assert_eq!(
        r.summary().lines().nth(1),
        Some("20Apr - 23Apr | LHR | 22:50(SQ318) | 18:00(SQ317)")
    );
}

#[test]
fn test_broken_inbound_row() {
    let r = roster("01Mar25 SQ221 MEL-SIN 0650 2:10");
    let rows = r.sheet_rows();

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].day_type, DayType::Layover);
    assert_eq!(rows[0].home_arrival, "06:50");
    assert_eq!(rows[0].duty_decimal, Some(2.17));
}

#[test]
fn test_standby_has_no_rows() {
    let r = roster("05Jan25 SS50 0600 1400");
    assert!(r.sheet_rows().is_empty());
}

#[test]
fn test_record_layout() {
    let r = roster("01Mar25 SQ221 MEL-SIN 0650 2:10");
    let rec = row_to_record(&r.sheet_rows()[0]);

    assert_eq!(HEADERS.len(), rec.len());
    assert_eq!(
        rec,
        [
            "03/01/2025", "MEL", "SIN", "Layover", "", "06:50", "", "", "2", "10", "2.17", "", "",
        ]
    );
}
