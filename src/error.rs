use std::path::PathBuf;

use crate::game::COLUMNS;

/// Reasons a coin drop is rejected. The game state is never modified when
/// one of these is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error, serde::Serialize, serde::Deserialize)]
pub enum MoveError {
    #[error("column {column} is out of range (expected 0..{})", COLUMNS)]
    InvalidColumn { column: usize },

    #[error("column {column} is full")]
    ColumnFull { column: usize },

    #[error("the game is over; reset to play again")]
    GameOver,
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_error_display() {
        assert_eq!(
            MoveError::InvalidColumn { column: 9 }.to_string(),
            "column 9 is out of range (expected 0..6)"
        );
        assert_eq!(
            MoveError::ColumnFull { column: 0 }.to_string(),
            "column 0 is full"
        );
        assert_eq!(
            MoveError::GameOver.to_string(),
            "the game is over; reset to play again"
        );
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::Validation("display symbols must be distinct".to_string());
        assert_eq!(
            err.to_string(),
            "config validation error: display symbols must be distinct"
        );
    }
}
