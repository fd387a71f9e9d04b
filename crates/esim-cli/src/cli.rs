//! CLI argument definitions for the eSIM storefront.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use esim_model::{DataAmount, DatasetKind};

#[derive(Parser)]
#[command(
    name = "esim",
    version,
    about = "Travel eSIM - browse data plans and place an order",
    long_about = "Browse travel data plans by country or region.\n\n\
                  Narrow the catalog by destination, data amount and validity,\n\
                  pick one plan, and hand the order off to the order endpoint."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Directory holding Country.csv and Region.csv.
    #[arg(long = "catalog-dir", value_name = "DIR", default_value = "data", global = true)]
    pub catalog_dir: PathBuf,

    /// JSON storefront configuration (currency, order endpoint, transport).
    #[arg(long = "config", value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
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

    /// Allow contact details to appear in logs.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// List dataset kinds.
    Kinds,

    /// List the choices for the next filter level.
    Options(FilterArgs),

    /// Show the plans matching the filters.
    Plans(FilterArgs),

    /// Select a plan and submit an order.
    Order(OrderArgs),
}

/// Filter chain shared by the browsing commands.
#[derive(Args, Clone, Default)]
pub struct FilterArgs {
    /// Single country or multi-country region catalog.
    #[arg(long = "kind", value_name = "KIND")]
    pub kind: Option<DatasetKind>,

    /// Destination.
    #[arg(long = "region", value_name = "REGION", requires = "kind")]
    pub region: Option<String>,

    /// Data allowance in GB.
    #[arg(long = "data", value_name = "GB", requires = "region")]
    pub data: Option<DataAmount>,

    /// Validity in days.
    #[arg(long = "days", value_name = "DAYS", requires = "data")]
    pub days: Option<u32>,
}

#[derive(Args)]
pub struct OrderArgs {
    #[command(flatten)]
    pub filters: FilterArgs,

    /// Row number from the `plans` table (starting at 1).
    #[arg(long = "row", value_name = "N")]
    pub row: usize,

    /// Your name.
    #[arg(long = "name", default_value = "")]
    pub name: String,

    /// Your email.
    #[arg(long = "email", default_value = "")]
    pub email: String,

    /// Your mobile number.
    #[arg(long = "phone", default_value = "")]
    pub phone: String,
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
