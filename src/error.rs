//! Error types for the FPL points engine and CLI

use thiserror::Error;


pub type Result<T> = std::result::Result<T, FplError>;

#[derive(Error, Debug)]
pub enum FplError {
    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid position: {position}")]
    InvalidPosition { position: String },

    #[error("Failed to parse id: {0}")]
    InvalidId(#[from] std::num::ParseIntError),

    #[error("Invalid team state for gameweek {gameweek}: {}", .errors.join("; "))]
    InvalidTeamState { gameweek: u16, errors: Vec<String> },

    #[error("Invalid input document: {message}")]
    InvalidInput { message: String },

    #[error("No team state provided for gameweek {gameweek}")]
    MissingTeamState { gameweek: u16 },
}
