mod common;
use common::{fixture, jan25_text, roster, temp_out};
use crewsheet::core::{Core, RosterRules};
use crewsheet::delivery::{Confirmation, ConsoleSender, SummarySender};
use crewsheet::errors::AppError;
use crewsheet::export::{ExportFormat, FileSink, MemorySink, RowSink};
use crewsheet::ocr::{PlainTextExtractor, TextExtractor};
use std::fs;
use std::path::Path;

#[test]
fn test_console_sender_without_question() {
    let mut out: Vec<u8> = Vec::new();
    let answer = ConsoleSender::new("".as_bytes(), &mut out)
        .send("Flights for January 2025:", None)
        .unwrap();

    assert_eq!(answer, None);
    assert_eq!(String::from_utf8(out).unwrap(), "Flights for January 2025:\n");
}

#[test]
fn test_console_sender_reads_answer() {
    let question = Confirmation::new("Push timesheet?");

    let mut out: Vec<u8> = Vec::new();
    let yes = ConsoleSender::new("Yes\n".as_bytes(), &mut out)
        .send("summary", Some(&question))
        .unwrap();
    assert_eq!(yes, Some(true));
    assert!(String::from_utf8(out).unwrap().contains("Push timesheet? [y/N]"));

    let mut out: Vec<u8> = Vec::new();
    let no = ConsoleSender::new("\n".as_bytes(), &mut out)
        .send("summary", Some(&question))
        .unwrap();
    assert_eq!(no, Some(false));
}

#[test]
fn test_plain_text_extractor() {
    let text = PlainTextExtractor
        .extract_text(b"01Jan25\r\nSQ123 SIN-HKG 0900\r", Some("roster.txt"))
        .unwrap();
    assert_eq!(text, "01Jan25\nSQ123 SIN-HKG 0900\n");

    let pdf = PlainTextExtractor.extract_text(b"%PDF-1.7", Some("Roster.PDF"));
    assert!(matches!(pdf, Err(AppError::UnsupportedDocument(_))));

    let binary = PlainTextExtractor.extract_text(&[0xff, 0xfe, 0x00], None);
    assert!(matches!(binary, Err(AppError::UnsupportedDocument(_))));
}

#[test]
fn test_core_load_from_file() {
    let r = Core::load(
        Path::new(&fixture("jan25_roster.txt")),
        &PlainTextExtractor,
        &RosterRules::default(),
    )
    .unwrap();
    assert_eq!(r.trips().len(), 3);
}

#[test]
fn test_memory_sink_collects_rows() {
    let r = roster(&jan25_text());
    let mut sink = MemorySink::default();
    sink.push(&r.sheet_rows()).unwrap();
    assert_eq!(sink.rows.len(), 7);
}

#[test]
fn test_file_sink_writes_csv() {
    let out = temp_out("file_sink_csv", "csv");
    let r = roster(&jan25_text());

    FileSink::new(&out, ExportFormat::Csv)
        .force(true)
        .push(&r.sheet_rows())
        .unwrap();

    let content = fs::read_to_string(&out).unwrap();
    assert_eq!(content.lines().count(), 8);
    assert!(content.contains("01/10/2025,SIN,LHR,Layover,22:00,,,-,13,0,13.00,,"));
}

#[test]
fn test_file_sink_rejects_relative_path() {
    let r = roster(&jan25_text());
    let res = FileSink::new("relative.csv", ExportFormat::Csv).push(&r.sheet_rows());
    assert!(matches!(res, Err(AppError::Export(_))));
}

#[test]
fn test_export_format_parsing() {
    assert_eq!("XLSX".parse::<ExportFormat>().unwrap(), ExportFormat::Xlsx);
    assert_eq!(
        ExportFormat::from_path(Path::new("/tmp/jan.json")).unwrap(),
        ExportFormat::Json
    );
    assert!(matches!(
        "pdf".parse::<ExportFormat>(),
        Err(AppError::InvalidExportFormat(_))
    ));
}
