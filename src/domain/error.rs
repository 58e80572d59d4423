//! # Errors
//!
//! Failures that abort a turn or an assembly. "Nobody understood the user" is not
//! an error; it is resolved by the fallback path.

use crate::domain::message::DataKind;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BotError {
    /// A component ran on a message lacking data it declared as required.
    /// Signals a miswired pipeline, never bad user input.
    #[error("`{owner}` requires {kind} data but the message does not carry it")]
    MissingData { owner: String, kind: DataKind },

    #[error("invalid bot configuration: {0}")]
    Config(String),

    #[error("pipeline stage `{stage}` failed: {reason}")]
    Stage { stage: String, reason: String },
}

impl BotError {
    pub fn missing(owner: impl Into<String>, kind: DataKind) -> Self {
        Self::MissingData {
            owner: owner.into(),
            kind,
        }
    }

    pub fn config(reason: impl Into<String>) -> Self {
        Self::Config(reason.into())
    }
}

pub type Result<T> = std::result::Result<T, BotError>;
