pub mod clubs;
pub mod completions;
pub mod data;
pub mod load;
pub mod positions;
pub mod report;
#[cfg(feature = "web")]
pub mod serve;
pub mod stats;
pub mod status;

use clap::{Args, Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(
    name = "mls",
    about = "Salary and compensation reports for MLS player data.",
    after_help = "Without a subcommand, mls prints the report for the newest data file.\nFilters and output options go after `mls report`, e.g. `mls report --clubs ATL --dp`."
)]
pub struct Cli {
    /// Print skipped lines and incomplete records to stderr
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Ranked compensation report with per-club totals (the default).
    ///
    /// Bare `mls` runs this with no filters; options are only accepted here.
    Report(ReportArgs),
    /// Goals+assists per dollar from a shooter table CSV.
    Stats {
        /// Path to the shooter table CSV
        file: String,
        /// Comma separated list of clubs
        #[arg(long)]
        clubs: Option<String>,
    },
    /// List known clubs and the spellings that map to them.
    Clubs,
    /// List recognized position codes.
    Positions,
    /// List salary data files in the data directory.
    Data,
    /// Switch to a different data directory.
    Load {
        /// Directory containing *_data files
        path: String,
    },
    /// Show settings and resolved paths.
    Status,
    /// Print a shell completion script.
    Completions {
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
    /// Serve the report as a small web page.
    #[cfg(feature = "web")]
    Serve {
        /// Address to listen on
        #[arg(long, default_value = "127.0.0.1:8080")]
        addr: String,
    },
}

#[derive(Args, Default, Clone)]
pub struct ReportArgs {
    /// Data file: a path, or a file name inside the data directory (default: newest)
    #[arg(long)]
    pub data: Option<String>,
    /// Comma separated list of clubs (names or abbreviations)
    #[arg(long)]
    pub clubs: Option<String>,
    /// Comma separated list of player name fragments
    #[arg(long)]
    pub players: Option<String>,
    /// Comma separated list of positions
    #[arg(long)]
    pub pos: Option<String>,
    /// Don't group players by club
    #[arg(long = "no-sort")]
    pub no_sort: bool,
    /// Only designated players (compensation at or above the DP threshold)
    #[arg(long)]
    pub dp: bool,
    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,
    /// Write the report to a file instead of stdout
    #[arg(long)]
    pub output: Option<String>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Table,
    Csv,
    Json,
}
