//! Global calview configuration.

use std::path::{Path, PathBuf};

use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

use crate::error::{CalViewError, CalViewResult};
use crate::view::{ViewMode, WeekStart};

static DEFAULT_EVENTS_FILE: &str = "~/.local/share/calview/events.json";

fn default_events_file() -> PathBuf {
    PathBuf::from(DEFAULT_EVENTS_FILE)
}

fn is_default_events_file(p: &PathBuf) -> bool {
    *p == default_events_file()
}

fn default_view() -> ViewMode {
    ViewMode::Month
}

/// Configuration at ~/.config/calview/config.toml
///
/// Every key can be overridden with a `CALVIEW_` environment variable,
/// e.g. `CALVIEW_WEEK_START=sunday`.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct CalViewConfig {
    #[serde(default)]
    pub week_start: WeekStart,

    #[serde(default = "default_view")]
    pub default_view: ViewMode,

    #[serde(default = "default_events_file", skip_serializing_if = "is_default_events_file")]
    pub events_file: PathBuf,
}

impl Default for CalViewConfig {
    fn default() -> Self {
        CalViewConfig {
            week_start: WeekStart::default(),
            default_view: default_view(),
            events_file: default_events_file(),
        }
    }
}

impl CalViewConfig {
    pub fn config_path() -> CalViewResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| CalViewError::Config("Could not determine config directory".into()))?
            .join("calview");

        Ok(config_dir.join("config.toml"))
    }

    /// Load from the default location, creating a commented default file
    /// if none exists yet.
    pub fn load() -> CalViewResult<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            Self::create_default_config(&config_path)?;
        }

        Self::load_from(&config_path)
    }

    pub fn load_from(path: &Path) -> CalViewResult<Self> {
        Config::builder()
            .add_source(File::from(path).required(false))
            .add_source(Environment::with_prefix("CALVIEW"))
            .build()
            .map_err(|e| CalViewError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| CalViewError::Config(e.to_string()))
    }

    /// `events_file` with `~` expanded.
    pub fn events_path(&self) -> PathBuf {
        let full_path_str = shellexpand::tilde(&self.events_file.to_string_lossy()).into_owned();
        PathBuf::from(full_path_str)
    }

    pub fn save(&self, path: &Path) -> CalViewResult<()> {
        let content =
            toml::to_string_pretty(self).map_err(|e| CalViewError::Config(e.to_string()))?;

        std::fs::write(path, content)
            .map_err(|e| CalViewError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }

    /// Create a default config file with all options commented out.
    pub fn create_default_config(path: &Path) -> CalViewResult<()> {
        let contents = format!(
            "\
# calview configuration

# First day of the week view (monday or sunday):
# week_start = \"monday\"

# View shown on startup (day, week, month or year):
# default_view = \"month\"

# Where events are stored:
# events_file = \"{}\"
",
            DEFAULT_EVENTS_FILE
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                CalViewError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, contents)
            .map_err(|e| CalViewError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn commented_default_file_loads_as_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("calview/config.toml");

        CalViewConfig::create_default_config(&path).unwrap();
        let config = CalViewConfig::load_from(&path).unwrap();

        assert_eq!(config, CalViewConfig::default());
    }

    #[test]
    fn values_are_read_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "week_start = \"sunday\"\ndefault_view = \"week\"\nevents_file = \"/tmp/cal.json\"\n",
        )
        .unwrap();

        let config = CalViewConfig::load_from(&path).unwrap();

        assert_eq!(config.week_start, WeekStart::Sunday);
        assert_eq!(config.default_view, ViewMode::Week);
        assert_eq!(config.events_path(), PathBuf::from("/tmp/cal.json"));
    }

    #[test]
    fn unknown_view_is_a_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "default_view = \"agenda\"\n").unwrap();

        assert!(matches!(
            CalViewConfig::load_from(&path),
            Err(CalViewError::Config(_))
        ));
    }

    #[test]
    fn save_then_load_keeps_settings() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let config = CalViewConfig {
            week_start: WeekStart::Sunday,
            default_view: ViewMode::Day,
            ..CalViewConfig::default()
        };

        config.save(&path).unwrap();
        let content = std::fs::read_to_string(&path).unwrap();
        assert!(!content.contains("events_file"));

        assert_eq!(CalViewConfig::load_from(&path).unwrap(), config);
    }
}
