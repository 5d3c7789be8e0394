use crate::export::ExportFormat;
use clap::{ArgAction, Parser, Subcommand};

/// Command-line interface definition for crewsheet.
/// Turns an OCR'd crew roster into a trip summary and a timesheet.
#[derive(Parser)]
#[command(
    name = "crewsheet",
    version = env!("CARGO_PKG_VERSION"),
    about = "Parse OCR'd airline crew rosters into trip summaries and timesheet rows",
    long_about = None
)]
pub struct Cli {
    /// Use this configuration file instead of the standard one
    #[arg(global = true, long = "config", value_name = "FILE")]
    pub config: Option<String>,

    /// Increase diagnostic output on stderr (-v, -vv, -vvv)
    #[arg(global = true, short = 'v', long = "verbose", action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write a default configuration file
    Init {
        #[arg(long, help = "Overwrite an existing configuration file")]
        force: bool,
    },

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// List the duty entries parsed from a roster
    Entries {
        #[arg(help = "Roster text file (OCR output)")]
        input: String,

        #[arg(long, help = "Print entries as JSON instead of a table")]
        json: bool,
    },

    /// Print the trip summary and optionally push the timesheet
    Summary {
        #[arg(help = "Roster text file (OCR output)")]
        input: String,

        #[arg(
            long,
            value_name = "FILE",
            help = "Ask for confirmation, then write the timesheet to this absolute path"
        )]
        push: Option<String>,

        #[arg(long, value_enum, help = "Timesheet format (default: from config or file extension)")]
        format: Option<ExportFormat>,

        #[arg(long, short = 'y', help = "Push without asking")]
        yes: bool,
    },

    /// Export the timesheet rows
    Export {
        #[arg(help = "Roster text file (OCR output)")]
        input: String,

        #[arg(long, help = "Absolute output file path")]
        file: String,

        #[arg(long, value_enum, help = "Export format (default: from file extension)")]
        format: Option<ExportFormat>,

        #[arg(long, help = "Overwrite an existing file without asking")]
        force: bool,
    },
}
