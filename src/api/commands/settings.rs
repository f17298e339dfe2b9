//! Settings command module
//!
//! Handles application settings persistence.

use std::path::Path;

use crate::shared::error::AppResult;
use crate::shared::settings::AppSettings;

/// Load settings from `path`, or from the platform config directory
pub async fn get_settings(path: Option<&Path>) -> AppResult<AppSettings> {
    match path {
        Some(path) => AppSettings::load_from(path).await,
        None => AppSettings::load().await,
    }
}

/// Validate and save settings
pub async fn save_settings(settings: &AppSettings, path: Option<&Path>) -> AppResult<()> {
    settings.validate()?;
    match path {
        Some(path) => settings.save_to(path).await,
        None => settings.save_to(&AppSettings::get_settings_path()?).await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_invalid_settings_are_not_saved() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");

        let mut settings = AppSettings::default();
        settings.preferences.theme = "solarized".to_string();

        assert!(save_settings(&settings, Some(&path)).await.is_err());
        assert!(!path.exists());
    }

    #[tokio::test]
    async fn test_save_then_get() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");

        let mut settings = AppSettings::default();
        settings.history.display_limit = 5;
        save_settings(&settings, Some(&path)).await.unwrap();

        assert_eq!(get_settings(Some(&path)).await.unwrap(), settings);
    }
}
