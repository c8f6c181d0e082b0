//! User settings persisted between runs.
//!
//! Settings are loaded once at startup, passed by reference to whoever needs
//! them, and written back only when the user changes a value. There is no
//! process-wide settings state.

use std::{
    fmt, fs,
    path::{Path, PathBuf},
    str::FromStr,
};

use log::debug;
use serde::{Deserialize, Serialize};

use crate::{
    error::{Result, TrackerError},
    permissions::{Role, User},
    timeline::TimelineConfig,
};

/// Keys accepted by [`Settings::set`].
pub const SETTING_KEYS: [&str; 7] = [
    "theme",
    "user.name",
    "user.role",
    "timeline.padding_days",
    "timeline.fallback_window_days",
    "timeline.default_bar_width_days",
    "timeline.pixels_per_day",
];

/// Terminal color scheme.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            _ => Err(format!("Invalid theme: {s}")),
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Theme::Light => f.write_str("light"),
            Theme::Dark => f.write_str("dark"),
        }
    }
}

/// Everything the user can configure.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    pub theme: Theme,
    pub user: User,
    pub timeline: TimelineConfig,
}

impl Settings {
    /// Load settings from `path`, falling back to defaults when the file does
    /// not exist.
    ///
    /// # Errors
    ///
    /// Returns `TrackerError::FileSystem` if the file exists but cannot be
    /// read, and `TrackerError::Serialization` if it is not valid JSON.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!("No settings at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let text = fs::read_to_string(path).map_err(|source| TrackerError::FileSystem {
            path: path.to_path_buf(),
            source,
        })?;
        let settings: Self = serde_json::from_str(&text)?;
        settings.timeline.validate()?;
        Ok(settings)
    }

    /// Write settings to `path` as pretty-printed JSON, creating parent
    /// directories as needed.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|source| TrackerError::FileSystem {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        let text = serde_json::to_string_pretty(self)?;
        fs::write(path, text).map_err(|source| TrackerError::FileSystem {
            path: path.to_path_buf(),
            source,
        })?;
        debug!("Saved settings to {}", path.display());
        Ok(())
    }

    /// Change a single value by its dotted key.
    ///
    /// # Errors
    ///
    /// Returns `TrackerError::InvalidInput` for unknown keys and values that
    /// do not parse or fail validation. The settings are left unchanged on
    /// error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use shifted_core::settings::{Settings, Theme};
    ///
    /// let mut settings = Settings::default();
    /// settings.set("theme", "light")?;
    /// settings.set("timeline.padding_days", "5")?;
    /// assert_eq!(settings.theme, Theme::Light);
    /// assert_eq!(settings.timeline.padding_days, 5);
    /// assert!(settings.set("timeline.pixels_per_day", "0").is_err());
    /// # Ok::<(), shifted_core::TrackerError>(())
    /// ```
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let mut updated = self.clone();
        match key {
            "theme" => updated.theme = parse_value(key, value)?,
            "user.name" => {
                let name = value.trim();
                if name.is_empty() {
                    return Err(TrackerError::invalid_input(key).with_reason("Name cannot be empty"));
                }
                updated.user.name = name.to_string();
            }
            "user.role" => updated.user.role = parse_value::<Role>(key, value)?,
            "timeline.padding_days" => updated.timeline.padding_days = parse_number(key, value)?,
            "timeline.fallback_window_days" => {
                updated.timeline.fallback_window_days = parse_number(key, value)?;
            }
            "timeline.default_bar_width_days" => {
                updated.timeline.default_bar_width_days = parse_number(key, value)?;
            }
            "timeline.pixels_per_day" => updated.timeline.pixels_per_day = parse_number(key, value)?,
            _ => {
                return Err(TrackerError::invalid_input("key").with_reason(format!(
                    "Unknown setting '{key}'. Known settings: {}",
                    SETTING_KEYS.join(", ")
                )));
            }
        }
        updated.timeline.validate()?;
        *self = updated;
        Ok(())
    }

    /// Default settings file following the XDG Base Directory specification:
    /// `$XDG_CONFIG_HOME/shifted/settings.json`.
    pub fn default_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("shifted")
            .place_config_file("settings.json")
            .map_err(|e| TrackerError::XdgDirectory(e.to_string()))
    }
}

impl fmt::Display for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Settings")?;
        writeln!(f)?;
        writeln!(f, "- theme: {}", self.theme)?;
        writeln!(f, "- user.name: {}", self.user.name)?;
        writeln!(f, "- user.role: {}", self.user.role)?;
        writeln!(f, "- timeline.padding_days: {}", self.timeline.padding_days)?;
        writeln!(
            f,
            "- timeline.fallback_window_days: {}",
            self.timeline.fallback_window_days
        )?;
        writeln!(
            f,
            "- timeline.default_bar_width_days: {}",
            self.timeline.default_bar_width_days
        )?;
        writeln!(f, "- timeline.pixels_per_day: {}", self.timeline.pixels_per_day)
    }
}

fn parse_value<T>(key: &str, value: &str) -> Result<T>
where
    T: FromStr<Err = String>,
{
    value
        .parse::<T>()
        .map_err(|reason| TrackerError::invalid_input(key).with_reason(reason))
}

fn parse_number(key: &str, value: &str) -> Result<u32> {
    value.trim().parse::<u32>().map_err(|e| {
        TrackerError::invalid_input(key).with_reason(format!("Expected a whole number: {e}"))
    })
}
