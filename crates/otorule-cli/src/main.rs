// Rust guideline compliant 2026-02-09

//! Otorule CLI Application
//!
//! Command-line interface for converting UTAU `oto.ini` aliases with rule
//! tables and generating recording lists.

use clap::Parser;
use otorule_app::{AppError, ErrorEnvelope};
use otorule_cli::commands::{self, apply::ApplyArgs, reclist::ReclistArgs, rules::RulesArgs};
use otorule_cli::{create_formatter, logging, should_use_color, terminal, OutputFormatter};
use otorule_core::{Config, OutputFormat};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(
    name = "otorule",
    version,
    about = "Otorule: rule-based oto.ini alias converter",
    long_about = "Otorule rewrites the aliases of an UTAU oto.ini with CV, V, C and tail rule tables, numbers duplicate aliases, and generates recording lists.",
    after_help = "Examples:\n  otorule apply oto.ini --rules rules.ini\n  otorule apply oto.ini --rules rules.ini --tail-rule --max-entries 3 --output new_oto.ini\n  otorule apply oto.ini --rules rules.ini --dry-run --format plain\n  otorule reclist oto.ini\n  otorule rules rules.ini\n"
)]
struct Cli {
    /// Enable JSON output
    #[arg(long, global = true)]
    json: bool,

    /// Output format
    #[arg(long, value_enum, global = true)]
    format: Option<FormatArg>,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    /// Custom config file path
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Write JSON log lines to this file instead of stderr
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum FormatArg {
    Json,
    Table,
    Plain,
}

impl From<FormatArg> for OutputFormat {
    fn from(value: FormatArg) -> Self {
        match value {
            FormatArg::Json => OutputFormat::Json,
            FormatArg::Table => OutputFormat::Table,
            FormatArg::Plain => OutputFormat::Plain,
        }
    }
}

#[derive(Debug, clap::Subcommand)]
enum Commands {
    /// Convert an oto.ini with a rules file
    Apply(ApplyArgs),

    /// Generate a recording list from an oto.ini
    Reclist(ReclistArgs),

    /// Summarize the tables of a rules file
    Rules(RulesArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let use_color = !cli.no_color && should_use_color();

    let config = match Config::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(err) => {
            let format = cli.format.map(OutputFormat::from).unwrap_or(if cli.json {
                OutputFormat::Json
            } else {
                OutputFormat::Table
            });
            let formatter = create_formatter(format, use_color);
            let err = anyhow::Error::from(AppError::from(err));
            report_error(&err, format, formatter.as_ref(), use_color);
            return ExitCode::FAILURE;
        }
    };

    let format = match (cli.format, cli.json) {
        (Some(format), _) => format.into(),
        (None, true) => OutputFormat::Json,
        (None, false) => config.output_format,
    };
    let formatter = create_formatter(format, use_color);

    let log_level = cli.log_level.as_deref().unwrap_or(&config.log_level);
    let _log_guard = match logging::init_tracing(log_level, cli.log_file.as_deref()) {
        Ok(guard) => guard,
        Err(err) => {
            report_error(&err, format, formatter.as_ref(), use_color);
            return ExitCode::FAILURE;
        }
    };

    let result = match cli.command {
        Some(Commands::Apply(args)) => {
            commands::apply::execute(args, &config, formatter.as_ref(), use_color)
        }
        Some(Commands::Reclist(args)) => commands::reclist::execute(args, formatter.as_ref()),
        Some(Commands::Rules(args)) => commands::rules::execute(args, formatter.as_ref()),
        None => {
            println!("Use --help for usage information");
            Ok(())
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::debug!(error = ?err, "command failed");
            report_error(&err, format, formatter.as_ref(), use_color);
            ExitCode::FAILURE
        }
    }
}

fn report_error(
    err: &anyhow::Error,
    format: OutputFormat,
    formatter: &dyn OutputFormatter,
    use_color: bool,
) {
    match format {
        OutputFormat::Json => {
            let envelope = match err.downcast_ref::<AppError>() {
                Some(app_error) => ErrorEnvelope::from_error(app_error),
                None => ErrorEnvelope::unknown(err.to_string()),
            };
            match serde_json::to_string_pretty(&envelope) {
                Ok(json) => println!("{}", json),
                Err(_) => println!("{}", formatter.format_error(&err.to_string())),
            }
        }
        OutputFormat::Table => terminal::print_error(&err.to_string(), use_color),
        OutputFormat::Plain => eprintln!("{}", formatter.format_error(&err.to_string())),
    }
}
