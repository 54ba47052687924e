use std::path::Path;

use anyhow::Result;
use calview_core::config::CalViewConfig;
use calview_core::view::{ViewMode, WeekStart};
use owo_colors::OwoColorize;

/// Print the active settings, saving any that were changed first.
pub fn run(
    config_path: &Path,
    mut config: CalViewConfig,
    week_start: Option<WeekStart>,
    default_view: Option<ViewMode>,
) -> Result<()> {
    let changed = week_start.is_some() || default_view.is_some();
    if let Some(week_start) = week_start {
        config.week_start = week_start;
    }
    if let Some(default_view) = default_view {
        config.default_view = default_view;
    }
    if changed {
        config.save(config_path)?;
        println!("{}", "Config saved".green());
    }

    println!("{}", "Paths".bold());
    println!("  Config:  {}", config_path.display());
    println!("  Events:  {}", config.events_path().display());
    println!("{}", "Settings".bold());
    println!("  Week starts on:  {}", config.week_start.weekday());
    println!("  Default view:    {}", config.default_view);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn changed_settings_are_written() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        run(
            &path,
            CalViewConfig::default(),
            Some(WeekStart::Sunday),
            Some(ViewMode::Week),
        )
        .unwrap();

        let saved = CalViewConfig::load_from(&path).unwrap();
        assert_eq!(saved.week_start, WeekStart::Sunday);
        assert_eq!(saved.default_view, ViewMode::Week);
    }

    #[test]
    fn no_flags_leaves_the_file_alone() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        run(&path, CalViewConfig::default(), None, None).unwrap();

        assert!(!path.exists());
    }
}
