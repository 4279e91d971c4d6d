use std::path::PathBuf;

use crate::game::Position;

/// Errors raised while reading a turn from the referee.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("unexpected end of input")]
    UnexpectedEof,

    #[error("expected an integer, got '{token}'")]
    InvalidInt { token: String },

    #[error("invalid tile pattern '{token}' (expected 4 binary digits)")]
    InvalidTile { token: String },

    #[error("player position {position} is off the {size}x{size} grid")]
    PlayerOffGrid { position: Position, size: usize },

    #[error("unknown turn type {0}")]
    InvalidTurnType(i64),

    #[error("unknown player id {0}")]
    InvalidPlayerId(i64),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
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
