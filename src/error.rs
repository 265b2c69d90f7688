//! Error types

use thiserror::Error;

/// Precondition failures when driving a run
#[derive(Debug, Error)]
pub enum GameError {
    /// A run was requested before the character-select step supplied a profile
    #[error("no character selected; a profile must be chosen before starting a run")]
    NoCharacterSelected,

    #[error("unknown character id: {0}")]
    UnknownCharacter(String),
}

/// Errors loading or saving settings
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("settings io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("settings parse error: {0}")]
    Parse(#[from] serde_json::Error),
}
