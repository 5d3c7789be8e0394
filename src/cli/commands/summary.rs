use crate::cli::commands::export::resolve_format;
use crate::cli::commands::load_roster;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::delivery::{Confirmation, ConsoleSender, SummarySender};
use crate::errors::AppResult;
use crate::export::{FileSink, RowSink};
use crate::ui::messages::info;
use crate::utils::path::expand_tilde;

/// Handle the `summary` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Summary {
        input,
        push,
        format,
        yes,
    } = cmd
    {
        let roster = load_roster(input, cfg)?;
        let summary = roster.summary();
        let mut sender = ConsoleSender::stdio();

        let Some(target) = push else {
            sender.send(&summary, None)?;
            return Ok(());
        };

        let path = expand_tilde(target);
        let approved = if *yes {
            sender.send(&summary, None)?;
            true
        } else {
            let question = Confirmation::new(format!("Push timesheet to {}?", path.display()));
            sender.send(&summary, Some(&question))?.unwrap_or(false)
        };

        if !approved {
            info("Timesheet not pushed.");
            return Ok(());
        }

        // Releases stdin; the answer above already covers overwriting.
        drop(sender);

        let format = resolve_format(*format, &path, cfg);
        FileSink::new(path, format).force(true).push(&roster.sheet_rows())?;
    }
    Ok(())
}
