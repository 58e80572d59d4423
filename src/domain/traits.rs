//! # Domain Traits
//!
//! Abstract interfaces for the collaborators the dispatcher is assembled from
//! (pipeline stages, history recorders, effect handlers).
//! Responders have their own module, see [`crate::domain::responder`].

use crate::domain::action::Effect;
use crate::domain::error::Result;
use crate::domain::message::{DataKind, Message};
use crate::domain::types::ChatRecord;

/// A feature extractor in the NLU pipeline.
pub trait Stage: Send {
    /// Name used in logs and errors.
    fn name(&self) -> &str;

    /// Kinds that must already be on the message when this stage runs.
    /// Checked by the assembler, not by the stage itself.
    fn required_kinds(&self) -> &[DataKind] {
        &[]
    }

    /// Kinds this stage sets on every message it transforms.
    fn produced_kinds(&self) -> &[DataKind];

    /// Adds this stage's data to the message. Must not touch kinds it does not own.
    fn transform(&mut self, message: Message) -> Result<Message>;
}

/// Append-only sink for conversation history.
pub trait Recorder: Send {
    fn record(&mut self, record: &ChatRecord) -> anyhow::Result<()>;
}

/// Executes effects that leave the core (timers and the like).
pub trait EffectSink: Send {
    fn handle(&self, effect: Effect);
}
