//! Persisted user settings
//!
//! [`MentorSettings`] is stored as JSON in `settings.json` inside the user's
//! configuration directory (resolved with [`ProjectDirs`]), or in the current
//! directory when no configuration directory can be found.
//!
//! # Error Handling
//!
//! - [`MentorSettings::load_or_default`] never fails: a missing or unreadable
//!   file is logged and the defaults are used
//! - [`MentorSettings::load_from`] and [`MentorSettings::save_to`] return the
//!   underlying I/O or JSON error

use crate::ai::Difficulty;
use crate::error::MentorResult;
use crate::strategy::DEFAULT_TIP_COUNT;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

const SETTINGS_FILENAME: &str = "settings.json";

/// User preferences for the mentor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MentorSettings {
    /// Strength of the automated opponent
    pub difficulty: Difficulty,
    /// Print a strategy tip alongside automated moves
    pub show_tips: bool,
    /// Tips returned per catalog query
    pub tip_count: usize,
    /// Upper bound on plies for unattended self-play
    pub max_plies: usize,
}

impl Default for MentorSettings {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::Intermediate,
            show_tips: true,
            tip_count: DEFAULT_TIP_COUNT,
            max_plies: 200,
        }
    }
}

/// Path to `settings.json` in the user's config directory, or `./settings.json`
pub fn settings_path() -> PathBuf {
    if let Some(proj_dirs) = ProjectDirs::from("com", "trilltino", "ChessMentor") {
        proj_dirs.config_dir().join(SETTINGS_FILENAME)
    } else {
        PathBuf::from(SETTINGS_FILENAME)
    }
}

impl MentorSettings {
    /// Load from `path` (default location when `None`), falling back to defaults
    pub fn load_or_default(path: Option<&Path>) -> Self {
        let path = path.map(Path::to_path_buf).unwrap_or_else(settings_path);

        if !path.exists() {
            info!("[SETTINGS] No settings file found at {:?}. Using defaults.", path);
            return Self::default();
        }

        match Self::load_from(&path) {
            Ok(settings) => {
                info!("[SETTINGS] Loaded settings from {:?}", path);
                settings
            }
            Err(e) => {
                warn!(
                    "[SETTINGS] Failed to load settings file at {:?}: {}. Using defaults.",
                    path, e
                );
                Self::default()
            }
        }
    }

    pub fn load_from(path: &Path) -> MentorResult<Self> {
        let contents = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&contents)?)
    }

    /// Write as pretty JSON, creating parent directories as needed
    pub fn save_to(&self, path: &Path) -> MentorResult<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        info!("[SETTINGS] Saved settings to {:?}", path);
        Ok(())
    }
}
