use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Configuration as stored in TOML files (with optional fields for merging)
#[derive(Debug, Clone, Deserialize, Default)]
pub struct RawCheckupConfig {
    #[serde(default)]
    pub ui: RawUiConfig,

    #[serde(default)]
    pub catalog: CatalogConfig,

    #[serde(default)]
    pub signature: RawSignatureConfig,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct RawUiConfig {
    /// Colour theme name
    pub theme: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct RawSignatureConfig {
    /// strftime pattern for signature dates
    pub date_format: Option<String>,
}

/// Final configuration with defaults applied
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CheckupConfig {
    #[serde(default)]
    pub ui: UiConfig,

    #[serde(default)]
    pub catalog: CatalogConfig,

    #[serde(default)]
    pub signature: SignatureConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    pub theme: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            theme: DEFAULT_THEME.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CatalogConfig {
    /// Question catalog to load instead of the builtin one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignatureConfig {
    pub date_format: String,
}

impl Default for SignatureConfig {
    fn default() -> Self {
        Self {
            date_format: checkup_tui::DEFAULT_DATE_FORMAT.to_string(),
        }
    }
}

/// Theme used when none is configured
pub const DEFAULT_THEME: &str = "checkup";
