//! TUI command - launches the terminal user interface
//!
//! Runs one assessment session in a full-screen form. Nothing is
//! persisted; completed assessments live until the program exits.

use std::path::PathBuf;

use anyhow::{Result, anyhow};
use checkup_core::AssessmentSession;
use checkup_tui::{App, THEME_NAMES, Theme, theme_by_name};
use clap::Args;
use tracing::info;

use crate::config::CheckupConfig;

#[derive(Args, Debug, Default)]
#[command(after_long_help = "\
Examples:
  checkup                               Launch the TUI
  checkup tui --theme high-contrast     Use the high-contrast theme
  checkup tui --catalog questions.toml  Assess against a custom catalog
")]
pub struct TuiArgs {
    /// Use specific theme
    #[arg(long)]
    pub theme: Option<String>,

    /// Question catalog (TOML) to use instead of the builtin one
    #[arg(long)]
    pub catalog: Option<PathBuf>,
}

/// Resolve the theme from the flag, falling back to the configured one.
fn resolve_theme(args: &TuiArgs, config: &CheckupConfig) -> Result<Theme> {
    let name = args.theme.as_deref().unwrap_or(&config.ui.theme);
    theme_by_name(name).ok_or_else(|| {
        anyhow!(
            "Unknown theme '{}' (available: {})",
            name,
            THEME_NAMES.join(", ")
        )
    })
}

/// Build the app without touching the terminal.
fn build_app(args: &TuiArgs, config: &CheckupConfig) -> Result<App> {
    let theme = resolve_theme(args, config)?;
    let catalog = args.catalog.as_deref().or(config.catalog.path.as_deref());
    let bank = super::load_bank(catalog)?;

    Ok(App::new(AssessmentSession::new(bank))
        .with_theme(theme)
        .with_date_format(config.signature.date_format.clone()))
}

pub fn run(args: TuiArgs, config: &CheckupConfig) -> Result<()> {
    let mut app = build_app(&args, config)?;

    info!(theme = %app.theme.name, "Starting TUI...");
    checkup_tui::install_panic_hook();
    app.run()?;

    let completed = app.session.history().len();
    info!(completed, "TUI exited");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_flag_overrides_config() {
        let args = TuiArgs {
            theme: Some("high-contrast".into()),
            ..Default::default()
        };
        let theme = resolve_theme(&args, &CheckupConfig::default()).unwrap();
        assert_eq!(theme.name, "high-contrast");
    }

    #[test]
    fn unknown_theme_lists_available_ones() {
        let args = TuiArgs {
            theme: Some("neon".into()),
            ..Default::default()
        };
        let err = resolve_theme(&args, &CheckupConfig::default()).unwrap_err();
        assert!(err.to_string().contains("checkup, high-contrast"));
    }

    #[test]
    fn theme_flag_wins_over_unknown_configured_theme() {
        let mut config = CheckupConfig::default();
        config.ui.theme = "neon".into();

        let args = TuiArgs {
            theme: Some("checkup".into()),
            ..Default::default()
        };
        assert_eq!(resolve_theme(&args, &config).unwrap().name, "checkup");

        let err = resolve_theme(&TuiArgs::default(), &config).unwrap_err();
        assert!(err.to_string().contains("Unknown theme 'neon'"));
    }

    #[test]
    fn build_app_applies_config() {
        let mut config = CheckupConfig::default();
        config.signature.date_format = "%d/%m/%Y".into();

        let app = build_app(&TuiArgs::default(), &config).unwrap();
        assert_eq!(app.theme.name, "checkup");
        assert_eq!(app.date_format, "%d/%m/%Y");
        assert_eq!(app.session.bank().question_count(), 5);
    }
}
