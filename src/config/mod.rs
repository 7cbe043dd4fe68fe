//! Configuration module for Image SearchMate
//!
//! Settings come from defaults, an optional YAML file and the process
//! environment. They are built once in `main` and passed down explicitly.

mod settings;

pub use settings::*;

use anyhow::Result;
use std::path::PathBuf;
use tracing::info;

/// Environment variable naming an explicit settings file
pub const SETTINGS_PATH_VAR: &str = "IMAGE_SEARCHMATE_SETTINGS_PATH";

/// Load settings from the first settings file found (or defaults), then
/// overlay the environment and validate.
pub fn load() -> Result<Settings> {
    let mut settings = match find_settings_file() {
        Some(path) => {
            info!("Loading settings from: {}", path.display());
            Settings::from_file(&path)?
        }
        None => {
            info!("No settings file found, using defaults");
            Settings::default()
        }
    };

    settings.merge_env();
    settings.validate()?;
    Ok(settings)
}

fn find_settings_file() -> Option<PathBuf> {
    if let Ok(path) = std::env::var(SETTINGS_PATH_VAR) {
        let path = PathBuf::from(path);
        if path.exists() {
            return Some(path);
        }
    }

    let mut paths = vec![
        PathBuf::from("settings.yml"),
        PathBuf::from("config/settings.yml"),
    ];
    if let Some(dir) = dirs::config_dir() {
        paths.push(dir.join("image-searchmate/settings.yml"));
    }

    paths.into_iter().find(|p| p.exists())
}
