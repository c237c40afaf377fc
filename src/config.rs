use std::path::Path;

use log::warn;

use crate::error::ConfigError;
use crate::game::{Cell, GameState, Player};

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub game: GameConfig,
    pub display: DisplayConfig,
}

/// Rules that can vary between games.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Player who moves first, in every game and after every reset
    pub starting_player: Player,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            starting_player: Player::STARTING,
        }
    }
}

impl GameConfig {
    pub fn new_game(&self) -> GameState {
        GameState::with_starting_player(self.starting_player)
    }
}

/// Symbols for the plain-text board.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub empty: char,
    pub red: char,
    pub blue: char,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        DisplayConfig {
            empty: Cell::Empty.symbol(),
            red: Cell::Red.symbol(),
            blue: Cell::Blue.symbol(),
        }
    }
}

impl DisplayConfig {
    pub fn symbol(&self, cell: Cell) -> char {
        match cell {
            Cell::Empty => self.empty,
            Cell::Red => self.red,
            Cell::Blue => self.blue,
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_toml(&content)
    }

    /// Parse and validate configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: AppConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            warn!("config file '{}' not found, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let DisplayConfig { empty, red, blue } = self.display;

        for (name, symbol) in [("empty", empty), ("red", red), ("blue", blue)] {
            if symbol.is_whitespace() || symbol.is_control() {
                return Err(ConfigError::Validation(format!(
                    "display.{name} must be a visible character"
                )));
            }
        }
        if empty == red || empty == blue || red == blue {
            return Err(ConfigError::Validation(
                "display symbols must be distinct".into(),
            ));
        }

        Ok(())
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> String {
        toml::to_string_pretty(&AppConfig::default()).expect("default config serializes")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config_is_valid() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.game.starting_player, Player::Red);
        assert_eq!(config.display.symbol(Cell::Blue), 'B');
    }

    #[test]
    fn test_parse_toml() {
        let config = AppConfig::from_toml(
            r#"
            [game]
            starting_player = "blue"

            [display]
            red = "x"
            blue = "o"
            "#,
        )
        .unwrap();

        assert_eq!(config.game.starting_player, Player::Blue);
        assert_eq!(config.display.empty, '.');
        assert_eq!(config.display.symbol(Cell::Red), 'x');
        assert_eq!(config.game.new_game().current_player(), Player::Blue);
    }

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config = AppConfig::from_toml("").unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_duplicate_symbols_rejected() {
        let err = AppConfig::from_toml("[display]\nred = \"B\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
        assert_eq!(
            err.to_string(),
            "config validation error: display symbols must be distinct"
        );
    }

    #[test]
    fn test_whitespace_symbol_rejected() {
        let err = AppConfig::from_toml("[display]\nempty = \" \"\n").unwrap_err();
        assert_eq!(
            err.to_string(),
            "config validation error: display.empty must be a visible character"
        );
    }

    #[test]
    fn test_unknown_player_is_parse_error() {
        let err = AppConfig::from_toml("[game]\nstarting_player = \"green\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::TomlParse(_)));
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.toml");
        let config = AppConfig::load_or_default(&path).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("connect_four.toml");
        let mut f = std::fs::File::create(&path).unwrap();
        writeln!(
            f,
            r#"
[game]
starting_player = "blue"
"#
        )
        .unwrap();

        let config = AppConfig::load(&path).unwrap();
        assert_eq!(config.game.starting_player, Player::Blue);
        // Others are defaults
        assert_eq!(config.display, DisplayConfig::default());
    }

    #[test]
    fn test_load_reports_unreadable_path() {
        let dir = tempfile::tempdir().unwrap();
        let err = AppConfig::load(dir.path()).unwrap_err();
        assert!(matches!(err, ConfigError::FileRead { .. }));
    }

    #[test]
    fn test_default_toml_roundtrips() {
        let toml_str = AppConfig::default_toml();
        let config = AppConfig::from_toml(&toml_str).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_shipped_config_matches_defaults() {
        let config = AppConfig::from_toml(include_str!("../connect_four.toml")).unwrap();
        assert_eq!(config, AppConfig::default());
    }
}
