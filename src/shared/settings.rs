use serde::{Deserialize, Serialize};
use ts_rs::TS;
use tokio::fs;
use std::path::{Path, PathBuf};
use directories::ProjectDirs;

use crate::core::catalog::UnitCategory;
use crate::core::history::DEFAULT_DISPLAY_LIMIT;
use crate::shared::error::{AppError, AppResult};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct AppSettings {
    pub preferences: UserPreferences,
    pub history: HistorySettings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct UserPreferences {
    pub default_category: String,
    pub default_from_unit: String,
    pub default_to_unit: String,
    /// "dark" or "light"
    pub theme: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct HistorySettings {
    /// How many of the most recent conversions the history table shows
    pub display_limit: usize,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            preferences: UserPreferences {
                default_category: UnitCategory::Length.name().to_string(),
                default_from_unit: "meter".to_string(),
                default_to_unit: "kilometer".to_string(),
                theme: "dark".to_string(),
            },
            history: HistorySettings {
                display_limit: DEFAULT_DISPLAY_LIMIT,
            },
        }
    }
}

impl AppSettings {
    pub fn get_settings_path() -> AppResult<PathBuf> {
        ProjectDirs::from("com", "antigravity", "unit-converter")
            .map(|dirs| dirs.config_dir().join("settings.json"))
            .ok_or_else(|| AppError::Config("Failed to determine config directory".to_string()))
    }

    /// Load from the platform config directory, writing defaults on first run
    pub async fn load() -> AppResult<Self> {
        let path = Self::get_settings_path()?;
        Self::load_from(&path).await
    }

    pub async fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            let settings = Self::default();
            settings.save_to(path).await?;
            return Ok(settings);
        }

        let content = fs::read_to_string(path).await
            .map_err(|e| AppError::Io(format!("Failed to read settings file: {}", e)))?;

        let settings: Self = serde_json::from_str(&content)
            .map_err(|e| AppError::Config(format!("Failed to parse settings: {}", e)))?;
        settings.validate()?;
        Ok(settings)
    }

    pub async fn save_to(&self, path: &Path) -> AppResult<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).await
                .map_err(|e| AppError::Io(format!("Failed to create config directory: {}", e)))?;
        }

        let content = serde_json::to_string_pretty(self)?;

        fs::write(path, content).await
            .map_err(|e| AppError::Io(format!("Failed to write settings file: {}", e)))
    }

    pub fn default_category(&self) -> AppResult<UnitCategory> {
        self.preferences.default_category.parse()
            .map_err(|e: crate::core::catalog::UnknownCategory| AppError::Config(e.to_string()))
    }

    pub fn validate(&self) -> AppResult<()> {
        let category = self.default_category()?;
        for unit in [&self.preferences.default_from_unit, &self.preferences.default_to_unit] {
            if !category.contains(unit) {
                return Err(AppError::Config(format!(
                    "Default unit '{}' is not listed under {}", unit, category
                )));
            }
        }
        if !matches!(self.preferences.theme.as_str(), "dark" | "light") {
            return Err(AppError::Config(format!("Unknown theme: {}", self.preferences.theme)));
        }
        if self.history.display_limit == 0 {
            return Err(AppError::Config("History display limit must be at least 1".to_string()));
        }
        Ok(())
    }
}
