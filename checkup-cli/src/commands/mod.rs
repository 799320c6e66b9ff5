pub mod config;
pub mod questions;
pub mod tui;

use std::path::Path;

use anyhow::{Context, Result};
use checkup_core::QuestionBank;
use tracing::info;

/// Load the catalog at `path`, or the builtin one when no path is given.
pub fn load_bank(path: Option<&Path>) -> Result<QuestionBank> {
    match path {
        Some(path) => {
            let bank = QuestionBank::load(path)
                .with_context(|| format!("Failed to load catalog {}", path.display()))?;
            info!(
                path = %path.display(),
                questions = bank.question_count(),
                "Loaded question catalog"
            );
            Ok(bank)
        }
        None => Ok(QuestionBank::builtin()),
    }
}
