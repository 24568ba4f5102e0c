use crate::export::{ExportFormat, OutputFormat};
use crate::models::{SummaryScope, TimeWindow};
use clap::{Args, Parser, Subcommand};

/// Command-line interface definition for rAttendance
#[derive(Parser)]
#[command(
    name = "rattendance",
    version = env!("CARGO_PKG_VERSION"),
    about = "Attendance viewer: filter records by time window, paginate and summarize status percentages",
    long_about = None
)]
pub struct Cli {
    /// Override the attendance feed (.json or .csv)
    #[arg(global = true, long = "source", value_name = "FILE")]
    pub source: Option<String>,

    /// Print diagnostic logs on stderr
    #[arg(global = true, long = "debug")]
    pub debug: bool,

    /// Reference date/time used instead of the system clock (tests)
    #[arg(global = true, long = "now", hide = true, value_name = "DATETIME")]
    pub now: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Navigation options shared by `show` and `export`.
#[derive(Args, Debug, Clone, Default)]
pub struct ViewArgs {
    /// Time window: all, today, this-week, this-month, this-year
    #[arg(long, short = 'w', value_enum)]
    pub window: Option<TimeWindow>,

    /// Page to display (1-based); clamped to the last page
    #[arg(long, short = 'p', default_value_t = 1)]
    pub page: usize,

    /// Records per page (overrides config)
    #[arg(long = "page-size", value_name = "N")]
    pub page_size: Option<usize>,

    /// Show a team member's records instead of your own
    #[arg(long, short = 'm', value_name = "USER_ID")]
    pub member: Option<u64>,

    /// Compute percentages over the current page or the whole window
    #[arg(long, value_enum)]
    pub scope: Option<SummaryScope>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration file
    Init,

    /// Manage the configuration file (view, check or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

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

    /// Show one page of attendance records with the status summary
    Show {
        #[command(flatten)]
        view: ViewArgs,

        /// Output format on stdout
        #[arg(long, value_enum, default_value = "table")]
        format: OutputFormat,
    },

    /// Export the current page and summary to a file
    Export {
        #[command(flatten)]
        view: ViewArgs,

        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        /// Output file path (absolute path required)
        #[arg(long, value_name = "FILE")]
        file: String,

        /// Overwrite output file without confirmation
        #[arg(long, short = 'f')]
        force: bool,
    },
}
