use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;
mod config;

use config::ConfigLoader;

#[derive(Parser)]
#[command(name = "checkup", about = "Medication competency assessments in the terminal")]
#[command(version, propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Write logs to this file instead of stderr
    #[arg(long, global = true, value_name = "PATH")]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the assessment TUI (default)
    Tui(commands::tui::TuiArgs),
    /// Print the question catalog
    Questions(commands::questions::QuestionsArgs),
    /// Manage configuration
    Config(commands::config::ConfigArgs),
}

/// Default log filter.
fn default_filter(verbose: bool) -> &'static str {
    if verbose { "debug" } else { "info" }
}

/// Build the filter, or `None` when nothing may be logged.
///
/// Nothing is written to stderr while the TUI owns the terminal.
fn log_filter(verbose: bool, tui_on_stderr: bool) -> Option<EnvFilter> {
    if tui_on_stderr {
        return None;
    }
    Some(
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(default_filter(verbose))),
    )
}

fn init_logging(verbose: bool, log_file: Option<&Path>, is_tui: bool) -> Result<()> {
    let Some(env_filter) = log_filter(verbose, is_tui && log_file.is_none()) else {
        return Ok(());
    };

    match log_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create log file {}", path.display()))?;
            tracing_subscriber::fmt()
                .with_env_filter(env_filter)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .init();
        }
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(env_filter)
                .with_writer(std::io::stderr)
                .init();
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Commands::Tui(commands::tui::TuiArgs::default()));

    init_logging(
        cli.verbose,
        cli.log_file.as_deref(),
        matches!(command, Commands::Tui(_)),
    )?;

    match command {
        Commands::Tui(args) => commands::tui::run(args, &ConfigLoader::load()?),
        Commands::Questions(args) => commands::questions::run(args, &ConfigLoader::load()?),
        Commands::Config(args) => commands::config::run(args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn no_subcommand_means_tui() {
        let cli = Cli::try_parse_from(["checkup"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = Cli::try_parse_from([
            "checkup",
            "questions",
            "--json",
            "-v",
            "--log-file",
            "/tmp/checkup.log",
        ])
        .unwrap();
        assert!(cli.verbose);
        assert_eq!(cli.log_file, Some(PathBuf::from("/tmp/checkup.log")));
        assert!(matches!(
            cli.command,
            Some(Commands::Questions(ref args)) if args.json
        ));
    }

    #[test]
    fn tui_flags_parse() {
        let cli = Cli::try_parse_from([
            "checkup",
            "tui",
            "--theme",
            "high-contrast",
            "--catalog",
            "q.toml",
        ])
        .unwrap();
        let Some(Commands::Tui(args)) = cli.command else {
            panic!("expected tui command");
        };
        assert_eq!(args.theme.as_deref(), Some("high-contrast"));
        assert_eq!(args.catalog, Some(PathBuf::from("q.toml")));
    }

    #[test]
    fn default_filter_follows_verbose_flag() {
        assert_eq!(default_filter(false), "info");
        assert_eq!(default_filter(true), "debug");
    }

    #[test]
    fn tui_on_stderr_logs_nothing() {
        assert!(log_filter(false, true).is_none());
        assert!(log_filter(true, true).is_none());
        assert!(log_filter(false, false).is_some());
    }
}
