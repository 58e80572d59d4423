//! # Deferred Actions
//!
//! State changes a responder schedules while proposing, applied only when the
//! dispatcher commits to its response.

use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Action {
    /// Take the floor.
    Activate,
    /// Give the floor back.
    Deactivate,
    StartTimer(Duration),
    /// Append an item to the responder's private collection.
    Remember(String),
    /// Drop the responder's private collection.
    Forget,
}

/// Floor request produced by a commit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Transition {
    #[default]
    None,
    Capture,
    Release,
}

/// Side effects leaving the core, executed by an [`EffectSink`](crate::domain::traits::EffectSink).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    StartTimer { owner: String, duration: Duration },
}

/// What one commit asks of the dispatcher.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Committed {
    pub transition: Transition,
    pub effects: Vec<Effect>,
}

impl Committed {
    pub fn is_empty(&self) -> bool {
        self.transition == Transition::None && self.effects.is_empty()
    }
}
