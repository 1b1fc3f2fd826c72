//! Academic record reconciliation CLI.

use std::io::{self, IsTerminal};

use anyhow::Result;
use clap::{ColorChoice, Parser};
use tracing::level_filters::LevelFilter;
use transcript_cli::config::AppConfig;
use transcript_cli::logging::{LogConfig, LogFormat, init_logging};

mod cli;
mod commands;
mod summary;

use crate::cli::{Cli, Command, LogFormatArg, LogLevelArg};
use crate::commands::{
    Session, run_average, run_certificate, run_evaluate, run_merge, run_normalize,
};
use crate::summary::{
    print_certificate, print_json, print_merit, print_requirements, print_unmatched,
};

const EXIT_OK: i32 = 0;
/// Requirements not met, or not an accepted certificate.
const EXIT_NEGATIVE: i32 = 1;
const EXIT_ERROR: i32 = 2;

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(EXIT_ERROR);
    }
    let exit_code = match run(&cli) {
        Ok(code) => code,
        Err(error) => {
            eprintln!("error: {error:#}");
            EXIT_ERROR
        }
    };
    std::process::exit(exit_code);
}

fn run(cli: &Cli) -> Result<i32> {
    match &cli.command {
        Command::Normalize(args) => {
            let normalized = run_normalize(&session(cli)?, args)?;
            print_json(&normalized.document)?;
            print_unmatched(&normalized);
            Ok(EXIT_OK)
        }
        Command::Merge(args) => {
            let merged = run_merge(&session(cli)?, args)?;
            print_json(&merged)?;
            Ok(EXIT_OK)
        }
        Command::Evaluate(args) => {
            let report = run_evaluate(&session(cli)?, args)?;
            if args.json {
                print_json(&report)?;
            } else {
                print_requirements(&report);
            }
            Ok(if report.meets_all_requirements {
                EXIT_OK
            } else {
                EXIT_NEGATIVE
            })
        }
        Command::Average(args) => {
            let summary = run_average(&session(cli)?, args)?;
            if args.json {
                print_json(&summary)?;
            } else {
                print_merit(&summary);
            }
            Ok(EXIT_OK)
        }
        Command::Certificate(args) => {
            let check = run_certificate(args)?;
            print_certificate(&check);
            Ok(if check.is_exam_certificate {
                EXIT_OK
            } else {
                EXIT_NEGATIVE
            })
        }
    }
}

fn session(cli: &Cli) -> Result<Session> {
    let mut config = AppConfig::load(cli.config.as_deref())?;
    config.apply_overrides(&cli.catalog.overrides());
    Session::new(config)
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
