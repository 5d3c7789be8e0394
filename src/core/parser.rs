//! Roster text → duty entries.
//!
//! Two layers. The document splitter tracks the date context and stitches
//! OCR output into logical rows, one per duty. `RowParser::parse_row` then
//! classifies a single row and decides which optional fields its bare
//! numbers belong to, using the previous entry as the only context.

use crate::core::rules::RosterRules;
use crate::errors::AppResult;
use crate::models::{ClockTime, DutyDuration, DutyEntry, DutyKind, FlightLeg};
use crate::utils::date::roster_date;
use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use std::ops::Range;
use tracing::{debug, trace};

static DATE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)\b(\d{2})[\s.,'/-]*(jan|feb|mar|apr|may|jun|jul|aug|sep|oct|nov|dec)[\s.,'/-]*(\d{2})\b",
    )
    .unwrap()
});
static NOISE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^(page\s*\d+(\s*of\s*\d+)?|printed\b.*|crew\s+roster\b.*)$").unwrap()
});
static HEADER_WORD_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\b(rpt|std|sta|fdp|sector|duty)\b").unwrap());

static SQ_GAP_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\bSQ\s+(\d)").unwrap());
static SECTOR_GAP_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b([A-Z]{3})\s*[-–—]\s*([A-Z]{3})\b").unwrap());

static FLIGHT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\bSQ\d{1,4}\b").unwrap());
static FLIGHT_TOKEN_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^SQ\d{1,4}$").unwrap());
static SECTOR_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b([A-Z]{3})-([A-Z]{3})\b").unwrap());
static STANDBY_TOKEN_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^SS\d+$").unwrap());
static TIME_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b\d{4}\b").unwrap());
static DURATION_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b\d{1,3}:\d{2}\b").unwrap());
static TOKEN_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\S+").unwrap());

/// Parse a whole OCR transcription into the flat, unmerged entry sequence.
///
/// Fails only when a date token does not name a real calendar day.
pub fn parse_roster(text: &str, rules: &RosterRules) -> AppResult<Vec<DutyEntry>> {
    let parser = RowParser::new(rules);
    let mut entries: Vec<DutyEntry> = Vec::new();

    for block in split_date_blocks(text)? {
        for row in parser.logical_rows(&block.lines) {
            if let Some(entry) = parser.parse_row(block.date, &row, entries.last()) {
                entries.push(entry);
            }
        }
    }

    debug!(count = entries.len(), "parsed roster rows");
    Ok(entries)
}

/// Lines sharing one date heading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateBlock {
    pub date: NaiveDate,
    pub lines: Vec<String>,
}

/// Group physical lines under the most recent date token. The token itself
/// is cut out of its line; whatever follows it on that line stays.
pub fn split_date_blocks(text: &str) -> AppResult<Vec<DateBlock>> {
    let mut blocks: Vec<DateBlock> = Vec::new();

    for raw in text.lines() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }
        if is_noise(line) {
            debug!(line, "skipping header/noise line");
            continue;
        }

        if let Some(caps) = DATE_RE.captures(line) {
            let date = roster_date(&caps[1], &caps[2], &caps[3])?;
            let span = caps.get(0).map(|m| m.range()).unwrap_or(0..0);
            let rest = blank_out(line, &[span]);
            let rest = rest.trim();

            let mut lines = Vec::new();
            if !rest.is_empty() {
                lines.push(rest.to_string());
            }
            blocks.push(DateBlock { date, lines });
            continue;
        }

        match blocks.last_mut() {
            Some(block) => block.lines.push(line.to_string()),
            None => debug!(line, "ignoring line before the first date"),
        }
    }

    Ok(blocks)
}

/// Header rows, page furniture and print stamps.
pub fn is_noise(line: &str) -> bool {
    NOISE_RE.is_match(line.trim()) || HEADER_WORD_RE.find_iter(line).count() >= 2
}

/// Collapse whitespace and re-join tokens OCR tends to split
/// (`SQ 123`, `SIN - HKG`, `SIN–HKG`).
pub fn normalize_line(line: &str) -> String {
    let collapsed = line.split_whitespace().collect::<Vec<_>>().join(" ");
    let joined = SQ_GAP_RE.replace_all(&collapsed, "SQ$1");
    SECTOR_GAP_RE.replace_all(&joined, "$1-$2").into_owned()
}

fn clean_token(token: &str) -> &str {
    token.trim_matches(|c: char| !c.is_ascii_alphanumeric())
}

fn is_station(token: &str) -> bool {
    token.len() == 3 && token.chars().all(|c| c.is_ascii_uppercase())
}

/// Replace the given byte ranges with a space each, keeping everything else.
fn blank_out(line: &str, spans: &[Range<usize>]) -> String {
    let mut spans: Vec<&Range<usize>> = spans.iter().collect();
    spans.sort_by_key(|r| r.start);

    let mut out = String::with_capacity(line.len());
    let mut cursor = 0;
    for span in spans {
        if span.start < cursor {
            continue;
        }
        out.push_str(&line[cursor..span.start]);
        out.push(' ');
        cursor = span.end;
    }
    out.push_str(&line[cursor..]);
    out
}

fn scan_times(text: &str) -> Vec<ClockTime> {
    TIME_RE
        .find_iter(text)
        .filter_map(|m| {
            let t = ClockTime::from_hhmm(m.as_str());
            if t.is_none() {
                debug!(token = m.as_str(), "four-digit token is not a clock value");
            }
            t
        })
        .collect()
}

fn scan_durations(text: &str) -> Vec<DutyDuration> {
    DURATION_RE
        .find_iter(text)
        .filter_map(|m| DutyDuration::from_hmm(m.as_str()))
        .collect()
}

/// What the previous entry tells us about the current flight row.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct RowContext {
    same_flight: bool,
    turnaround: bool,
    prev_has_report: bool,
    prev_has_departure: bool,
    prev_has_arrival: bool,
}

impl RowContext {
    fn from_previous(previous: Option<&DutyEntry>, date: NaiveDate, leg: &FlightLeg) -> Self {
        let Some(prev) = previous else {
            return Self::default();
        };
        let Some(prev_leg) = prev.flight() else {
            return Self::default();
        };

        Self {
            same_flight: prev_leg.same_flight(leg),
            turnaround: prev.start_date == date && prev_leg.is_reverse_of(leg),
            prev_has_report: prev.report_time.is_some(),
            prev_has_departure: prev.departure_time.is_some(),
            prev_has_arrival: prev.arrival_time.is_some(),
        }
    }
}

pub struct RowParser<'r> {
    rules: &'r RosterRules,
}

impl<'r> RowParser<'r> {
    pub fn new(rules: &'r RosterRules) -> Self {
        Self { rules }
    }

    fn is_standby(&self, token: &str) -> bool {
        STANDBY_TOKEN_RE.is_match(token) || self.rules.is_standby_literal(token)
    }

    fn is_anchor(&self, token: &str) -> bool {
        FLIGHT_TOKEN_RE.is_match(token)
            || self.is_standby(token)
            || self.rules.is_off_duty(token)
            || self.rules.is_layover_marker(token)
    }

    /// Re-cut a date block into one row per duty. Each row starts at an
    /// anchor token; text ahead of the first anchor is dropped.
    pub fn logical_rows(&self, lines: &[String]) -> Vec<String> {
        let joined = normalize_line(&lines.join(" "));

        let starts: Vec<usize> = TOKEN_RE
            .find_iter(&joined)
            .filter(|m| self.is_anchor(clean_token(m.as_str())))
            .map(|m| m.start())
            .collect();

        let Some(&first) = starts.first() else {
            if !joined.is_empty() {
                debug!(text = %joined, "no duty token in date block");
            }
            return Vec::new();
        };
        if first > 0 {
            let prefix = joined[..first].trim();
            trace!(prefix, "dropping text before first duty token");
        }

        starts
            .iter()
            .enumerate()
            .map(|(i, &start)| {
                let end = starts.get(i + 1).copied().unwrap_or(joined.len());
                joined[start..end].trim().to_string()
            })
            .collect()
    }

    /// Classify one logical row. `previous` is the last entry kept so far.
    pub fn parse_row(
        &self,
        date: NaiveDate,
        line: &str,
        previous: Option<&DutyEntry>,
    ) -> Option<DutyEntry> {
        let line = normalize_line(line);
        if line.is_empty() {
            return None;
        }
        if is_noise(&line) {
            debug!(line = %line, "skipping header/noise row");
            return None;
        }

        let tokens: Vec<&str> = line.split(' ').map(clean_token).collect();

        if let Some(code) = tokens.iter().find(|t| self.is_standby(t)) {
            return Some(self.standby_entry(date, &line, code));
        }

        if let Some(code) = tokens.iter().find(|t| self.rules.is_off_duty(t)) {
            let kind = DutyKind::OffDuty {
                code: code.to_string(),
            };
            return Some(DutyEntry::new(date, kind, &line));
        }

        if tokens.iter().any(|t| self.rules.is_layover_marker(t)) {
            let station = tokens
                .iter()
                .find(|t| is_station(t) && !self.rules.is_reserved(t))
                .map(|s| s.to_string());
            return Some(DutyEntry::new(date, DutyKind::Layover { station }, &line));
        }

        self.flight_entry(date, &line, previous)
    }

    fn standby_entry(&self, date: NaiveDate, line: &str, code: &str) -> DutyEntry {
        let kind = DutyKind::Standby {
            code: code.to_string(),
        };
        let mut entry = DutyEntry::new(date, kind, line);

        let mut times = scan_times(line).into_iter();
        entry.report_time = times.next();
        entry.departure_time = times.next();
        entry.arrival_time = times.next();

        let mut durations = scan_durations(line).into_iter();
        entry.duty_duration = durations.next();
        entry.flight_duty_period = durations.next();

        entry
    }

    fn flight_entry(
        &self,
        date: NaiveDate,
        line: &str,
        previous: Option<&DutyEntry>,
    ) -> Option<DutyEntry> {
        let flight = FLIGHT_RE.find(line);
        let sector = SECTOR_RE.captures(line);

        let (Some(flight), Some(sector)) = (flight, sector) else {
            debug!(line, "row has no flight number and sector pair");
            return None;
        };

        let leg = FlightLeg::new(flight.as_str(), &sector[1], &sector[2]);
        let sector_span = sector.get(0).map(|m| m.range()).unwrap_or(0..0);
        let remainder = blank_out(line, &[flight.range(), sector_span]);

        let times = scan_times(&remainder);
        let durations = scan_durations(&remainder);
        let ctx = RowContext::from_previous(previous, date, &leg);
        let arrives_home = leg.arrives(&self.rules.home_base);

        let mut entry = DutyEntry::new(date, DutyKind::Flight(leg), line);
        assign_times(&mut entry, &times, &ctx, arrives_home);
        assign_durations(&mut entry, &durations, &ctx);

        Some(entry)
    }
}

fn assign_times(entry: &mut DutyEntry, times: &[ClockTime], ctx: &RowContext, arrives_home: bool) {
    match *times {
        [report, departure, arrival, ..] => {
            entry.report_time = Some(report);
            entry.departure_time = Some(departure);
            entry.arrival_time = Some(arrival);
        }
        [a, b] => {
            let continues = ctx.same_flight && ctx.prev_has_report && !ctx.prev_has_departure;
            if continues || ctx.turnaround {
                trace!(continues, turnaround = ctx.turnaround, "two times: departure + arrival");
                entry.departure_time = Some(a);
                entry.arrival_time = Some(b);
            } else {
                trace!("two times: report + departure");
                entry.report_time = Some(a);
                entry.departure_time = Some(b);
            }
        }
        [t] => {
            if ctx.same_flight && !ctx.prev_has_arrival {
                trace!("one time: arrival of continued flight");
                entry.arrival_time = Some(t);
            } else if ctx.turnaround {
                trace!("one time: turnaround departure");
                entry.departure_time = Some(t);
            } else if arrives_home {
                trace!("one time: broken inbound arrival");
                entry.arrival_time = Some(t);
            } else {
                trace!("one time: report");
                entry.report_time = Some(t);
            }
        }
        [] => {}
    }
}

fn assign_durations(entry: &mut DutyEntry, durations: &[DutyDuration], ctx: &RowContext) {
    match *durations {
        [flight, duty, fdp, ..] => {
            entry.flight_duration = Some(flight);
            entry.duty_duration = Some(duty);
            entry.flight_duty_period = Some(fdp);
        }
        [duty, fdp] => {
            entry.duty_duration = Some(duty);
            entry.flight_duty_period = Some(fdp);
        }
        [d] => {
            if ctx.same_flight {
                entry.flight_duty_period = Some(d);
            } else if ctx.turnaround {
                entry.flight_duration = Some(d);
            } else if entry.arrival_only() {
                entry.flight_duty_period = Some(d);
            } else {
                entry.flight_duration = Some(d);
            }
        }
        [] => {}
    }
}
