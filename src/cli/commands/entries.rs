use crate::cli::commands::load_roster;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::{ClockTime, DutyDuration, DutyEntry};
use crate::ui::messages::warning;
use crate::utils::date::day_month;
use crate::utils::table::Table;

/// Handle the `entries` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Entries { input, json } = cmd {
        let roster = load_roster(input, cfg)?;

        if *json {
            let out = serde_json::to_string_pretty(&roster.entries)
                .map_err(|e| AppError::Other(format!("JSON serialization error: {e}")))?;
            println!("{out}");
            return Ok(());
        }

        if roster.entries.is_empty() {
            warning("No duty entries found in the roster.");
            return Ok(());
        }

        println!("{}", entries_table(&roster.entries).render());
    }

    Ok(())
}

fn entries_table(entries: &[DutyEntry]) -> Table {
    let mut table = Table::new(&[
        "Date", "Kind", "Sector", "Report", "Dep", "Arr", "Flt", "Duty", "FDP",
    ]);

    let clock = |t: Option<ClockTime>| t.map(|t| t.colon()).unwrap_or_default();
    let dur = |d: Option<DutyDuration>| d.map(|d| d.to_string()).unwrap_or_default();

    for e in entries {
        let sector = e.flight().map(|l| l.sector()).unwrap_or_default();
        let mut arrival = clock(e.arrival_time);
        if e.crosses_midnight() {
            arrival = format!("{arrival} ({})", day_month(e.arrival_day()));
        }

        table.add_row(vec![
            day_month(e.start_date),
            e.kind.label().to_string(),
            sector,
            clock(e.report_time),
            clock(e.departure_time),
            arrival,
            dur(e.flight_duration),
            dur(e.duty_duration),
            dur(e.flight_duty_period),
        ]);
    }

    table
}
