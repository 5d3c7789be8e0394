mod common;
use common::{crew, fixture, temp_config, temp_out};
use predicates::prelude::*;
use std::fs;

#[test]
fn test_summary_prints_trips() {
    let cfg = temp_config("summary_prints");

    crew()
        .args(["--config", &cfg, "summary", &fixture("jan25_roster.txt")])
        .assert()
        .success()
        .stdout(predicate::str::contains("Flights for January 2025:"))
        .stdout(predicate::str::contains(
            "01Jan - 02Jan | HKG | 09:00(SQ123) | 18:00(SQ124)",
        ))
        .stdout(predicate::str::contains("05Jan - 05Jan | SS50 | 06:00 | -"));
}

#[test]
fn test_entries_table_and_json() {
    let cfg = temp_config("entries_table");
    let input = fixture("jan25_roster.txt");

    crew()
        .args(["--config", &cfg, "entries", &input])
        .assert()
        .success()
        .stdout(predicate::str::contains("SIN-HKG"))
        .stdout(predicate::str::contains("05:30 (11Jan)"))
        .stdout(predicate::str::contains("ATDO"));

    crew()
        .args(["--config", &cfg, "entries", &input, "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"type\": \"flight\""))
        .stdout(predicate::str::contains("\"flight_number\": \"SQ856\""))
        .stdout(predicate::str::contains("\"arrival_date\": \"2025-01-11\""));
}

#[test]
fn test_export_csv() {
    let cfg = temp_config("export_csv");
    let out = temp_out("export_csv", "csv");

    crew()
        .args([
            "--config",
            &cfg,
            "export",
            &fixture("jan25_roster.txt"),
            "--file",
            &out,
            "--format",
            "csv",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("CSV export completed"));

    let content = fs::read_to_string(&out).expect("read exported csv");
    let mut lines = content.lines();
    assert_eq!(
        lines.next(),
        Some(
            "Date,From,To,Type,Report (Home Outbound),Arrival (Home Inbound),\
             Departure (Away Outbound),Arrival (Away Inbound),Duty Hours,Duty Minutes,\
             Duty Decimal,Flight Hours,Flight Minutes"
        )
    );
    assert_eq!(lines.next(), Some("01/01/2025,SIN,HKG,Layover,09:00,,,,,,,,"));
    assert!(content.contains("01/12/2025,,LHR,Layover,,,,,,,,,"));
}

#[test]
fn test_export_format_from_extension() {
    let cfg = temp_config("export_json_ext");
    let out = temp_out("export_json_ext", "json");

    crew()
        .args(["--config", &cfg, "export", &fixture("jan25_roster.txt"), "--file", &out])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported json");
    assert!(content.contains("\"date\": \"01/14/2025\""));
    assert!(content.contains("\"home_arrival\": \"07:15\""));
}

#[test]
fn test_export_xlsx() {
    let cfg = temp_config("export_xlsx");
    let out = temp_out("export_xlsx", "xlsx");

    crew()
        .args([
            "--config",
            &cfg,
            "export",
            &fixture("jan25_roster.txt"),
            "--file",
            &out,
            "--format",
            "xlsx",
        ])
        .assert()
        .success();

    let bytes = fs::read(&out).expect("read exported xlsx");
    assert!(bytes.starts_with(b"PK"));
}

#[test]
fn test_export_existing_file_needs_force() {
    let cfg = temp_config("export_force");
    let out = temp_out("export_force", "csv");
    fs::write(&out, "keep me").unwrap();
    let input = fixture("jan25_roster.txt");

    crew()
        .args(["--config", &cfg, "export", &input, "--file", &out])
        .write_stdin("n\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("not overwritten"));
    assert_eq!(fs::read_to_string(&out).unwrap(), "keep me");

    crew()
        .args(["--config", &cfg, "export", &input, "--file", &out, "--force"])
        .assert()
        .success();
    assert!(fs::read_to_string(&out).unwrap().starts_with("Date,"));
}

#[test]
fn test_export_relative_path_fails() {
    let cfg = temp_config("export_relative");

    crew()
        .args([
            "--config",
            &cfg,
            "export",
            &fixture("jan25_roster.txt"),
            "--file",
            "out.csv",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("must be absolute"));
}

#[test]
fn test_summary_push_confirmed_and_declined() {
    let cfg = temp_config("summary_push");
    let out = temp_out("summary_push", "csv");
    let input = fixture("jan25_roster.txt");

    crew()
        .args(["--config", &cfg, "summary", &input, "--push", &out])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("[y/N]"))
        .stdout(predicate::str::contains("Timesheet not pushed."));
    assert!(fs::metadata(&out).is_err());

    crew()
        .args(["--config", &cfg, "summary", &input, "--push", &out])
        .write_stdin("y\n")
        .assert()
        .success();
    assert!(fs::read_to_string(&out).unwrap().contains("01/14/2025"));

    crew()
        .args(["--config", &cfg, "summary", &input, "--push", &out, "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[y/N]").not());
}

#[test]
fn test_invalid_date_fails() {
    let cfg = temp_config("invalid_date");

    crew()
        .args(["--config", &cfg, "summary", &fixture("bad_date.txt")])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid date: 31Feb25"));
}

#[test]
fn test_pdf_input_rejected() {
    let cfg = temp_config("pdf_input");
    let pdf = temp_out("pdf_input", "pdf");
    fs::write(&pdf, b"%PDF-1.7").unwrap();

    crew()
        .args(["--config", &cfg, "entries", &pdf])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unsupported document"));
}

#[test]
fn test_init_and_print_config() {
    let cfg = temp_config("init_print");

    crew().args(["--config", &cfg, "init"]).assert().success();
    assert!(fs::read_to_string(&cfg).unwrap().contains("home_base: SIN"));

    crew()
        .args(["--config", &cfg, "init"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--force"));

    crew()
        .args(["--config", &cfg, "init", "--force"])
        .assert()
        .success();

    crew()
        .args(["--config", &cfg, "config", "--print"])
        .assert()
        .success()
        .stdout(predicate::str::contains("default_format: csv"))
        .stdout(predicate::str::contains("- ATDO"));
}

#[test]
fn test_config_home_base_changes_trips() {
    let cfg = temp_config("home_mel");
    fs::write(&cfg, "home_base: MEL\n").unwrap();
    let roster = temp_out("home_mel_roster", "txt");
    fs::write(&roster, "01Mar25 SQ237 SIN-MEL 0610\n02Mar25 SQ238 MEL-SIN 0800 0900\n").unwrap();

    crew()
        .args(["--config", &cfg, "summary", &roster])
        .assert()
        .success()
        .stdout(predicate::str::contains("01Mar - 01Mar | SIN | - | 06:10(SQ237)"))
        .stdout(predicate::str::contains("02Mar - 02Mar | SIN | 08:00(SQ238) | -"));
}

#[test]
fn test_invalid_config_is_reported() {
    let cfg = temp_config("bad_home");
    fs::write(&cfg, "home_base: singapore\n").unwrap();

    crew()
        .args(["--config", &cfg, "summary", &fixture("jan25_roster.txt")])
        .assert()
        .failure()
        .stderr(predicate::str::contains("home_base"));
}
