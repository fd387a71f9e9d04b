//! Travel eSIM storefront CLI.

use clap::{ColorChoice, Parser};
use esim_cli::cli::{Cli, Command, LogFormatArg, LogLevelArg};
use esim_cli::commands::{
    load_config, open_catalog, open_storefront, run_kinds, run_options, run_order, run_plans,
};
use esim_cli::logging::{LogConfig, LogFormat, init_logging};
use esim_cli::render::options_table;
use std::io::{self, IsTerminal};
use tracing::level_filters::LevelFilter;

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let exit_code = match run(&cli) {
        Ok(()) => 0,
        Err(error) => {
            eprintln!("error: {error:#}");
            1
        }
    };
    std::process::exit(exit_code);
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    if let Command::Kinds = cli.command {
        println!("{}", options_table("Single Country / Region", &run_kinds()));
        return Ok(());
    }
    let config = load_config(cli.config.as_deref())?;
    let catalog = open_catalog(&cli.catalog_dir)?;
    match &cli.command {
        Command::Kinds => {}
        Command::Options(filters) => {
            let store = open_storefront(catalog, &config, filters)?;
            run_options(&store, filters);
        }
        Command::Plans(filters) => {
            let store = open_storefront(catalog, &config, filters)?;
            run_plans(&store);
        }
        Command::Order(args) => {
            let mut store = open_storefront(catalog, &config, &args.filters)?;
            let url = run_order(&mut store, args)?;
            println!("{url}");
        }
    }
    Ok(())
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let mut config = LogConfig {
        level_filter: cli.verbosity.tracing_level_filter(),
        ..LogConfig::default()
    };
    config.use_env_filter = !(cli.verbosity.is_present() || cli.log_level.is_some());
    if let Some(level) = cli.log_level {
        config.level_filter = match level {
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        };
    }
    config.format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    config.log_file = cli.log_file.clone();
    config.log_data = cli.log_data;
    config.with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    config
}
