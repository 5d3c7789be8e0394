use crate::cli::commands::load_roster;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::{ExportFormat, FileSink, RowSink};
use crate::utils::path::expand_tilde;
use std::path::Path;

/// Handle the `export` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        input,
        file,
        format,
        force,
    } = cmd
    {
        let roster = load_roster(input, cfg)?;
        let path = expand_tilde(file);
        let format = resolve_format(*format, &path, cfg);

        FileSink::new(path, format)
            .force(*force)
            .push(&roster.sheet_rows())?;
    }
    Ok(())
}

/// Explicit flag, then the file extension, then the configured default.
pub(crate) fn resolve_format(flag: Option<ExportFormat>, path: &Path, cfg: &Config) -> ExportFormat {
    flag.or_else(|| ExportFormat::from_path(path).ok())
        .unwrap_or(cfg.default_format)
}
