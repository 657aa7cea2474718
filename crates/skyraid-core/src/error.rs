//! Errors raised by the fallible outer surfaces (config, scripts, game loop).
//!
//! Gameplay itself never fails: edge cases resolve deterministically.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SkyraidError {
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("game loop failed: {0}")]
    GameLoop(String),
}

pub type Result<T> = std::result::Result<T, SkyraidError>;
