use super::types::{
    CatalogConfig, CheckupConfig, DEFAULT_THEME, RawCheckupConfig, RawSignatureConfig,
    RawUiConfig, SignatureConfig, UiConfig,
};
use anyhow::{Context, Result, bail};
use directories::ProjectDirs;
use std::path::{Path, PathBuf};
use tracing::debug;

pub struct ConfigLoader;

impl ConfigLoader {
    /// Load merged configuration (user + project)
    pub fn load() -> Result<CheckupConfig> {
        let user_path = Self::user_config_path();
        Self::load_layers(user_path.as_deref(), &Self::project_config_path())
    }

    /// Load and merge the given layers, later layers winning
    pub fn load_layers(user_path: Option<&Path>, project_path: &Path) -> Result<CheckupConfig> {
        let mut raw = RawCheckupConfig::default();

        // Layer 1: User config
        if let Some(user_path) = user_path
            && let Some(user_config) = Self::read_raw(user_path)?
        {
            raw = Self::merge_raw(raw, user_config);
        }

        // Layer 2: Project config
        if let Some(project_config) = Self::read_raw(project_path)? {
            raw = Self::merge_raw(raw, project_config);
        }

        Self::finalize(raw)
    }

    /// Get user config path (platform-specific)
    pub fn user_config_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "checkup").map(|dirs| dirs.config_dir().join("config.toml"))
    }

    /// Get project config path
    /// Can be overridden with CHECKUP_PROJECT_CONFIG_DIR env var (useful for isolated tests)
    pub fn project_config_path() -> PathBuf {
        if let Ok(dir) = std::env::var("CHECKUP_PROJECT_CONFIG_DIR") {
            PathBuf::from(dir).join("config.toml")
        } else {
            PathBuf::from(".checkup/config.toml")
        }
    }

    /// Read one layer. A relative catalog path is taken relative to the
    /// directory holding the file.
    fn read_raw(path: &Path) -> Result<Option<RawCheckupConfig>> {
        if !path.exists() {
            return Ok(None);
        }

        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        let mut raw: RawCheckupConfig = toml::from_str(&contents)
            .with_context(|| format!("Invalid config {}", path.display()))?;

        if let Some(catalog) = raw.catalog.path.take() {
            let base = path.parent().unwrap_or_else(|| Path::new(""));
            raw.catalog.path = Some(if catalog.is_relative() {
                base.join(catalog)
            } else {
                catalog
            });
        }

        debug!(path = %path.display(), "Loaded config layer");
        Ok(Some(raw))
    }

    /// Merge two raw configs (overlay values override base only if explicitly set)
    fn merge_raw(base: RawCheckupConfig, overlay: RawCheckupConfig) -> RawCheckupConfig {
        RawCheckupConfig {
            ui: RawUiConfig {
                theme: overlay.ui.theme.or(base.ui.theme),
            },
            catalog: CatalogConfig {
                path: overlay.catalog.path.or(base.catalog.path),
            },
            signature: RawSignatureConfig {
                date_format: overlay
                    .signature
                    .date_format
                    .or(base.signature.date_format),
            },
        }
    }

    /// Convert raw config to final config with defaults applied
    ///
    /// The theme name is left unchecked; `tui` checks it after `--theme`.
    fn finalize(raw: RawCheckupConfig) -> Result<CheckupConfig> {
        let theme = raw.ui.theme.unwrap_or_else(|| DEFAULT_THEME.to_string());

        let date_format = raw
            .signature
            .date_format
            .unwrap_or_else(|| SignatureConfig::default().date_format);
        if !checkup_tui::is_valid_date_format(&date_format) {
            bail!("Invalid signature date_format '{}'", date_format);
        }

        Ok(CheckupConfig {
            ui: UiConfig { theme },
            catalog: raw.catalog,
            signature: SignatureConfig { date_format },
        })
    }
}
