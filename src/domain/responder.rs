//! # Responder
//!
//! A stateful dialogue unit. Each turn it either proposes a [`Response`] or declines.
//! Proposing only *schedules* [`Action`]s; they are applied by [`Responder::commit`]
//! when, and only when, the dispatcher picks that response.
//!
//! A responder is either idle or holds the floor (`activated`). Both directions
//! of that transition are expressed as scheduled `Activate`/`Deactivate` actions.

use crate::domain::action::{Action, Committed, Effect, Transition};
use crate::domain::error::{BotError, Result};
use crate::domain::message::{DataKind, Message};
use crate::domain::response::Response;

/// State every responder carries: its name, the floor flag and the pending schedule.
#[derive(Debug, Clone)]
pub struct ResponderCore {
    name: String,
    activated: bool,
    todo: Vec<Action>,
}

impl ResponderCore {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            activated: false,
            todo: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn activated(&self) -> bool {
        self.activated
    }

    pub fn schedule(&mut self, action: Action) {
        self.todo.push(action);
    }

    pub fn scheduled(&self) -> &[Action] {
        &self.todo
    }

    pub fn clear_schedule(&mut self) {
        self.todo.clear();
    }

    fn take_schedule(&mut self) -> Vec<Action> {
        std::mem::take(&mut self.todo)
    }

    /// Shorthand for a confident reply from this responder.
    pub fn reply(&self, text: impl Into<String>) -> Response {
        Response::certain(self.name.as_str(), text)
    }

    pub fn decline(&self) -> Response {
        Response::decline(self.name.as_str())
    }
}

pub trait Responder: Send {
    fn core(&self) -> &ResponderCore;

    fn core_mut(&mut self) -> &mut ResponderCore;

    /// Kinds that must be on the message before [`respond`](Self::respond) is called.
    fn required_kinds(&self) -> &[DataKind] {
        &[]
    }

    /// Propose a reply for the message, scheduling any state change through
    /// [`ResponderCore::schedule`]. Must not change `activated` directly.
    fn respond(&mut self, message: &Message) -> Result<Response>;

    /// Applies responder-private actions (`Remember`, `Forget`) on commit.
    fn apply(&mut self, action: Action) {
        tracing::debug!(
            "responder `{}` ignores action {:?}",
            self.core().name(),
            action
        );
    }

    /// Speak unprompted, e.g. to open a session. Not part of arbitration.
    fn proactive(&self) -> Option<Response> {
        None
    }

    fn name(&self) -> &str {
        self.core().name()
    }

    fn activated(&self) -> bool {
        self.core().activated()
    }

    /// Runs, in order, everything scheduled by the latest `respond`, then clears it.
    /// A second call without an intervening `respond` does nothing.
    fn commit(&mut self) -> Committed {
        let todo = self.core_mut().take_schedule();
        let mut committed = Committed::default();
        for action in todo {
            match action {
                Action::Activate => {
                    self.core_mut().activated = true;
                    committed.transition = Transition::Capture;
                }
                Action::Deactivate => {
                    self.core_mut().activated = false;
                    committed.transition = Transition::Release;
                }
                Action::StartTimer(duration) => committed.effects.push(Effect::StartTimer {
                    owner: self.name().to_string(),
                    duration,
                }),
                other => self.apply(other),
            }
        }
        committed
    }
}

/// Fails with [`BotError::MissingData`] when the message lacks a required kind.
pub fn ensure_required(owner: &str, required: &[DataKind], message: &Message) -> Result<()> {
    match message.missing(required).first() {
        Some(kind) => Err(BotError::missing(owner, *kind)),
        None => Ok(()),
    }
}

/// Asks a responder for a proposal the way the dispatcher does: validate inputs,
/// start from an empty schedule, and drop the schedule of a declining answer.
pub fn propose(responder: &mut dyn Responder, message: &Message) -> Result<Response> {
    ensure_required(responder.name(), responder.required_kinds(), message)?;
    responder.core_mut().clear_schedule();
    let response = responder.respond(message)?;
    if response.is_decline() {
        responder.core_mut().clear_schedule();
    }
    Ok(response)
}
