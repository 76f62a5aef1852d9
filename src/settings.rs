//! Runtime settings: built-in defaults, an optional JSON file, CLI overrides.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;

use ratatui::style::Color;
use serde::Deserialize;

use crate::config::{
    BoardGeometry, DEFAULT_TICK_INTERVAL_MS, MAX_GRID_SIDE, MIN_GRID_SIDE, Palette,
};
use crate::error::ConfigError;

const APP_DIR_NAME: &str = "box-snake";
const SETTINGS_FILE_NAME: &str = "config.json";

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct SettingsFile {
    box_size: Option<u16>,
    cell_size: Option<u16>,
    tick_interval_ms: Option<u64>,
    colors: ColorsFile,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct ColorsFile {
    snake: Option<String>,
    food: Option<String>,
    board: Option<String>,
    overlay: Option<String>,
}

/// Values given on the command line; `None` keeps the file or default value.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub config_path: Option<PathBuf>,
    pub box_size: Option<u16>,
    pub cell_size: Option<u16>,
    pub tick_interval_ms: Option<u64>,
    pub seed: Option<u64>,
}

/// Fully resolved settings for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub geometry: BoardGeometry,
    pub tick_interval: Duration,
    pub palette: Palette,
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            geometry: BoardGeometry::default(),
            tick_interval: Duration::from_millis(DEFAULT_TICK_INTERVAL_MS),
            palette: Palette::default(),
            seed: None,
        }
    }
}

/// Returns the platform-correct settings file path.
#[must_use]
pub fn settings_path() -> PathBuf {
    let mut base = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    base.push(APP_DIR_NAME);
    base.push(SETTINGS_FILE_NAME);
    base
}

/// Resolves settings from the file named by `overrides` (or the default
/// location) and the CLI values.
///
/// A missing file at the default location is not an error; a missing file
/// that was named explicitly is.
pub fn load(overrides: &Overrides) -> Result<Settings, ConfigError> {
    let file = match &overrides.config_path {
        Some(path) => read_settings_file(path)?,
        None => read_optional_settings_file(&settings_path())?,
    };

    resolve(file, overrides)
}

fn read_optional_settings_file(path: &Path) -> Result<SettingsFile, ConfigError> {
    match read_settings_file(path) {
        Err(ConfigError::Read { source, .. }) if source.kind() == io::ErrorKind::NotFound => {
            Ok(SettingsFile::default())
        }
        other => other,
    }
}

fn read_settings_file(path: &Path) -> Result<SettingsFile, ConfigError> {
    let raw = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    parse_settings(&raw).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

fn parse_settings(raw: &str) -> Result<SettingsFile, serde_json::Error> {
    serde_json::from_str(raw)
}

fn resolve(file: SettingsFile, overrides: &Overrides) -> Result<Settings, ConfigError> {
    let defaults = Settings::default();

    let geometry = BoardGeometry {
        box_size: overrides
            .box_size
            .or(file.box_size)
            .unwrap_or(defaults.geometry.box_size),
        cell_size: overrides
            .cell_size
            .or(file.cell_size)
            .unwrap_or(defaults.geometry.cell_size),
    };
    if geometry.cell_size == 0 || geometry.cell_size > geometry.box_size {
        return Err(ConfigError::InvalidGeometry {
            box_size: geometry.box_size,
            cell_size: geometry.cell_size,
        });
    }
    let side = geometry.grid_side();
    if !(MIN_GRID_SIDE..=MAX_GRID_SIDE).contains(&side) {
        return Err(ConfigError::GridSide {
            side,
            min: MIN_GRID_SIDE,
            max: MAX_GRID_SIDE,
        });
    }

    let tick_ms = overrides
        .tick_interval_ms
        .or(file.tick_interval_ms)
        .unwrap_or(DEFAULT_TICK_INTERVAL_MS);
    if tick_ms == 0 {
        return Err(ConfigError::ZeroTickInterval);
    }

    let palette = Palette {
        snake: color("snake", file.colors.snake, defaults.palette.snake)?,
        food: color("food", file.colors.food, defaults.palette.food)?,
        board: color("board", file.colors.board, defaults.palette.board)?,
        overlay: color("overlay", file.colors.overlay, defaults.palette.overlay)?,
    };

    Ok(Settings {
        geometry,
        tick_interval: Duration::from_millis(tick_ms),
        palette,
        seed: overrides.seed,
    })
}

fn color(
    field: &'static str,
    value: Option<String>,
    fallback: Color,
) -> Result<Color, ConfigError> {
    let Some(value) = value else {
        return Ok(fallback);
    };

    Color::from_str(&value).map_err(|_| ConfigError::InvalidColor { field, value })
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::PathBuf;
    use std::time::{Duration, SystemTime, UNIX_EPOCH};

    use ratatui::style::Color;

    use crate::config::{
        BoardGeometry, INITIAL_DIRECTION, INITIAL_SNAKE, MAX_GRID_SIDE, MIN_GRID_SIDE,
    };
    use crate::error::ConfigError;
    use crate::renderer::board_size;

    use super::{Overrides, Settings, load, parse_settings, read_optional_settings_file, resolve};

    #[test]
    fn empty_file_resolves_to_defaults() {
        let file = parse_settings("{}").expect("empty object should parse");
        let settings = resolve(file, &Overrides::default()).expect("defaults are valid");

        assert_eq!(settings, Settings::default());
        assert_eq!(settings.tick_interval, Duration::from_millis(100));
        assert_eq!(settings.geometry.grid_side(), 23);
    }

    #[test]
    fn file_values_and_colors_are_applied() {
        let file = parse_settings(
            r##"{
                "box_size": 300,
                "cell_size": 20,
                "tick_interval_ms": 80,
                "colors": { "snake": "blue", "food": "#ffaa00" }
            }"##,
        )
        .expect("settings should parse");
        let settings = resolve(file, &Overrides::default()).expect("settings are valid");

        assert_eq!(
            settings.geometry,
            BoardGeometry {
                box_size: 300,
                cell_size: 20
            }
        );
        assert_eq!(settings.tick_interval, Duration::from_millis(80));
        assert_eq!(settings.palette.snake, Color::Blue);
        assert_eq!(settings.palette.food, Color::Rgb(0xff, 0xaa, 0x00));
        assert_eq!(settings.palette.board, Color::White);
    }

    #[test]
    fn cli_overrides_win_over_file() {
        let file = parse_settings(r#"{ "tick_interval_ms": 80, "cell_size": 10 }"#)
            .expect("settings should parse");
        let overrides = Overrides {
            tick_interval_ms: Some(150),
            seed: Some(9),
            ..Overrides::default()
        };

        let settings = resolve(file, &overrides).expect("settings are valid");

        assert_eq!(settings.tick_interval, Duration::from_millis(150));
        assert_eq!(settings.geometry.cell_size, 10);
        assert_eq!(settings.seed, Some(9));
    }

    #[test]
    fn unknown_fields_are_rejected() {
        assert!(parse_settings(r#"{ "speed": 3 }"#).is_err());
    }

    #[test]
    fn invalid_values_are_reported() {
        let zero_cell = Overrides {
            cell_size: Some(0),
            ..Overrides::default()
        };
        assert!(matches!(
            resolve(Default::default(), &zero_cell),
            Err(ConfigError::InvalidGeometry { cell_size: 0, .. })
        ));

        let zero_tick = Overrides {
            tick_interval_ms: Some(0),
            ..Overrides::default()
        };
        assert!(matches!(
            resolve(Default::default(), &zero_tick),
            Err(ConfigError::ZeroTickInterval)
        ));

        let file = parse_settings(r#"{ "colors": { "board": "not-a-color" } }"#)
            .expect("settings should parse");
        assert!(matches!(
            resolve(file, &Overrides::default()),
            Err(ConfigError::InvalidColor { field: "board", .. })
        ));
    }

    #[test]
    fn grid_too_small_for_the_initial_snake_is_rejected() {
        let file = parse_settings(r#"{ "box_size": 60, "cell_size": 15 }"#)
            .expect("settings should parse");
        assert!(matches!(
            resolve(file, &Overrides::default()),
            Err(ConfigError::GridSide { side: 4, .. })
        ));

        let smallest = Overrides {
            box_size: Some(105),
            ..Overrides::default()
        };
        let settings = resolve(Default::default(), &smallest).expect("7x7 grid is playable");
        assert_eq!(settings.geometry.grid_side(), MIN_GRID_SIDE);
        assert!(settings.geometry.contains(INITIAL_SNAKE[0].step(INITIAL_DIRECTION)));
    }

    #[test]
    fn grid_too_large_for_the_terminal_is_rejected() {
        let huge = Overrides {
            box_size: Some(u16::MAX),
            cell_size: Some(1),
            ..Overrides::default()
        };
        assert!(matches!(
            resolve(Default::default(), &huge),
            Err(ConfigError::GridSide { side: u16::MAX, .. })
        ));

        let largest = Overrides {
            box_size: Some(MAX_GRID_SIDE),
            cell_size: Some(1),
            ..Overrides::default()
        };
        let settings = resolve(Default::default(), &largest).expect("largest grid is accepted");
        assert_eq!(board_size(settings.geometry), (u16::MAX - 1, MAX_GRID_SIDE + 2));
    }

    #[test]
    fn missing_default_file_is_not_an_error() {
        let path = unique_test_path("missing");

        assert!(read_optional_settings_file(&path).is_ok());
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let overrides = Overrides {
            config_path: Some(unique_test_path("explicit")),
            ..Overrides::default()
        };

        assert!(matches!(load(&overrides), Err(ConfigError::Read { .. })));
    }

    #[test]
    fn explicit_file_is_loaded_from_disk() {
        let path = unique_test_path("on-disk");
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("test parent directory should be creatable");
        }
        fs::write(&path, r#"{ "box_size": 150 }"#).expect("test file write should succeed");

        let overrides = Overrides {
            config_path: Some(path.clone()),
            ..Overrides::default()
        };
        let settings = load(&overrides).expect("settings should load");

        assert_eq!(settings.geometry.grid_side(), 10);
        let _ = fs::remove_file(&path);
    }

    fn unique_test_path(label: &str) -> PathBuf {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("system time should be after epoch")
            .as_nanos();

        std::env::temp_dir()
            .join("box-snake-settings-tests")
            .join(format!("{label}-{nanos}.json"))
    }
}
