//! CLI argument definitions for the census profiler.

use std::path::PathBuf;

use census_core::ProfileSection;
use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "census-profiler",
    version,
    about = "Census profiles - Aggregate census counts into geography profiles",
    long_about = "Aggregate pre-tabulated census counts into a geography profile.\n\n\
                  Each section (demographics, economics, service delivery, education,\n\
                  households, children, child-headed households, crime) is computed for\n\
                  the geography and its containing geographies for comparison."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Log the busy and idle time of each profile and section span.
    #[arg(long = "log-span-timings", global = true)]
    pub log_span_timings: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Build the profile of one geography.
    Profile(ProfileArgs),

    /// List the profile sections.
    Sections,

    /// List the geographies of a data directory.
    Geographies(GeographiesArgs),
}

#[derive(Parser)]
pub struct ProfileArgs {
    /// Data directory holding geographies.csv and tables/.
    #[arg(value_name = "DATA_DIR")]
    pub data_dir: PathBuf,

    /// Geography to profile, as level-code (e.g. municipality-CPT).
    #[arg(value_name = "GEO_ID")]
    pub geo_id: String,

    /// Only build these sections (repeatable; default: all).
    #[arg(long = "section", value_name = "SECTION")]
    pub sections: Vec<ProfileSection>,

    /// Write the profile JSON to a file instead of stdout.
    #[arg(long = "output", value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Pretty-print the profile JSON.
    #[arg(long = "pretty")]
    pub pretty: bool,

    /// Count categories missing from the data as zero.
    ///
    /// By default a category the profile depends on (for example "Female"
    /// heads of household) must be present in the data, and the profile
    /// fails when it is not.
    #[arg(long = "lenient-categories")]
    pub lenient_categories: bool,

    /// Keep long distributions whole instead of folding small categories
    /// into "Other".
    #[arg(long = "no-group-remainder")]
    pub no_group_remainder: bool,
}

#[derive(Parser)]
pub struct GeographiesArgs {
    /// Data directory holding geographies.csv.
    #[arg(value_name = "DATA_DIR")]
    pub data_dir: PathBuf,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
