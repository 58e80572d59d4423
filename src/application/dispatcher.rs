//! # Dispatcher
//!
//! Runs one turn end to end: builds the [`Message`], feeds it through the NLU pipeline,
//! collects proposals, picks a winner, and commits the winner's deferred actions.
//!
//! If a responder holds the floor it is the only one asked, bypassing arbitration
//! until it releases the floor. Otherwise every responder proposes and the highest
//! confidence wins; ties go to the responder attached first. A winner below the
//! threshold is never committed; the fallback answers instead.

use crate::application::builder::DispatcherBuilder;
use crate::domain::action::{Committed, Transition};
use crate::domain::error::Result;
use crate::domain::message::Message;
use crate::domain::responder::{Responder, propose};
use crate::domain::response::{Confidence, Response};
use crate::domain::traits::{EffectSink, Recorder, Stage};
use crate::domain::types::{ChatRecord, TurnOutcome};

pub struct Dispatcher {
    pub(super) name: String,
    pub(super) pipeline: Vec<Box<dyn Stage>>,
    pub(super) responders: Vec<Box<dyn Responder>>,
    pub(super) fallback: Option<Box<dyn Responder>>,
    pub(super) threshold: Confidence,
    pub(super) effects: Box<dyn EffectSink>,
    pub(super) recorder: Option<Box<dyn Recorder>>,
    /// Index into `responders` of the floor holder.
    pub(super) floor: Option<usize>,
    pub(super) turn: u64,
}

impl Dispatcher {
    pub fn builder(name: impl Into<String>) -> DispatcherBuilder {
        DispatcherBuilder::new(name)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn threshold(&self) -> Confidence {
        self.threshold
    }

    /// Number of turns handled so far.
    pub fn turn(&self) -> u64 {
        self.turn
    }

    /// Name of the responder currently holding the floor.
    pub fn floor_holder(&self) -> Option<&str> {
        self.floor.map(|idx| self.responders[idx].name())
    }

    pub fn responder(&self, name: &str) -> Option<&dyn Responder> {
        self.responders
            .iter()
            .chain(self.fallback.iter())
            .find(|r| r.name() == name)
            .map(|r| &**r)
    }

    /// Proactive line of the named responder, for session openers and the like.
    pub fn utter(&self, name: &str) -> Option<Response> {
        self.responder(name).and_then(|r| r.proactive())
    }

    /// True iff the floor slot and the responders' `activated` flags agree.
    pub fn floor_is_consistent(&self) -> bool {
        self.responders
            .iter()
            .enumerate()
            .all(|(idx, r)| r.activated() == (self.floor == Some(idx)))
    }

    /// Handles one user utterance.
    ///
    /// Errors only on wiring problems (a stage failing, a responder missing its
    /// required data). Not understanding the user is a [`TurnOutcome`], not an error.
    /// A failed turn does not advance the turn counter.
    pub fn handle(&mut self, text: &str) -> Result<TurnOutcome> {
        let turn = self.turn + 1;
        tracing::info!("Turn {} received: {}", turn, text);

        let message = self.run_pipeline(text)?;
        let outcome = self.arbitrate(&message)?;
        self.turn = turn;

        match &outcome {
            TurnOutcome::Committed(rsp) => tracing::info!(
                "Turn {} committed `{}` ({}): {}",
                turn,
                rsp.responder,
                rsp.confidence,
                rsp.text
            ),
            TurnOutcome::Fallback(rsp) => {
                tracing::info!("Turn {} answered by fallback `{}`", turn, rsp.responder)
            }
            TurnOutcome::Silent => tracing::info!("Turn {} has no response", turn),
        }

        self.record(turn, &message, &outcome);
        Ok(outcome)
    }

    fn run_pipeline(&mut self, text: &str) -> Result<Message> {
        let mut message = Message::new(text);
        for stage in &mut self.pipeline {
            message = stage.transform(message)?;
            tracing::debug!("Stage `{}` done, kinds={:?}", stage.name(), message.kinds());
        }
        Ok(message)
    }

    fn arbitrate(&mut self, message: &Message) -> Result<TurnOutcome> {
        let candidate = match self.floor {
            Some(idx) => {
                tracing::debug!(
                    "Floor held by `{}`, skipping arbitration",
                    self.responders[idx].name()
                );
                let rsp = propose(self.responders[idx].as_mut(), message)?;
                Some((idx, rsp))
            }
            None => self.best_candidate(message)?,
        };

        if let Some((idx, rsp)) = candidate {
            if rsp.confidence >= self.threshold {
                self.discard_proposals(Some(idx));
                let committed = self.responders[idx].commit();
                self.apply(idx, committed);
                return Ok(TurnOutcome::Committed(rsp));
            }
            tracing::warn!(
                "Best confidence {} from `{}` is lower than {}",
                rsp.confidence,
                rsp.responder,
                self.threshold
            );
        }
        self.discard_proposals(None);

        let Some(fallback) = self.fallback.as_mut() else {
            return Ok(TurnOutcome::Silent);
        };
        let rsp = propose(fallback.as_mut(), message)?;
        fallback.core_mut().clear_schedule();
        Ok(TurnOutcome::Fallback(rsp))
    }

    /// Asks every responder; the earliest one with the highest confidence wins.
    fn best_candidate(&mut self, message: &Message) -> Result<Option<(usize, Response)>> {
        let mut best: Option<(usize, Response)> = None;
        for (idx, responder) in self.responders.iter_mut().enumerate() {
            let rsp = propose(responder.as_mut(), message)?;
            tracing::debug!("Candidate `{}` ({}): {}", rsp.responder, rsp.confidence, rsp.text);
            let better = best
                .as_ref()
                .is_none_or(|(_, current)| rsp.confidence > current.confidence);
            if better {
                best = Some((idx, rsp));
            }
        }
        Ok(best)
    }

    /// Losing proposals leave nothing behind.
    fn discard_proposals(&mut self, keep: Option<usize>) {
        for (idx, responder) in self.responders.iter_mut().enumerate() {
            if Some(idx) != keep {
                responder.core_mut().clear_schedule();
            }
        }
    }

    fn apply(&mut self, idx: usize, committed: Committed) {
        let name = self.responders[idx].name().to_string();
        match committed.transition {
            Transition::Capture => {
                self.floor = Some(idx);
                tracing::info!("`{}` took the floor", name);
            }
            Transition::Release => {
                if self.floor == Some(idx) {
                    self.floor = None;
                    tracing::info!("`{}` released the floor", name);
                }
            }
            Transition::None => {}
        }
        for effect in committed.effects {
            tracing::debug!("Effect from `{}`: {:?}", name, effect);
            self.effects.handle(effect);
        }
        debug_assert!(self.floor_is_consistent());
    }

    fn record(&mut self, turn: u64, message: &Message, outcome: &TurnOutcome) {
        let Some(recorder) = self.recorder.as_mut() else {
            return;
        };
        let mut records = vec![ChatRecord::user(turn, message)];
        if let Some(rsp) = outcome.response() {
            records.push(ChatRecord::bot(turn, rsp));
        }
        for record in &records {
            if let Err(e) = recorder.record(record) {
                tracing::warn!("Failed to record history for turn {}: {:#}", turn, e);
            }
        }
    }
}
