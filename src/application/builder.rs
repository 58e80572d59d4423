//! # Dispatcher Assembly
//!
//! Collects stages, responders and collaborators, and validates the wiring before
//! the first turn: responder names are unique, every stage's inputs come from an
//! earlier stage, every responder's inputs come from some stage.

use crate::application::dispatcher::Dispatcher;
use crate::application::effects::LogEffects;
use crate::domain::error::{BotError, Result};
use crate::domain::message::DataKind;
use crate::domain::responder::Responder;
use crate::domain::response::Confidence;
use crate::domain::traits::{EffectSink, Recorder, Stage};
use std::collections::{BTreeSet, HashSet};

pub const DEFAULT_THRESHOLD: f32 = 0.5;

pub struct DispatcherBuilder {
    name: String,
    pipeline: Vec<Box<dyn Stage>>,
    responders: Vec<Box<dyn Responder>>,
    fallback: Option<Box<dyn Responder>>,
    threshold: f32,
    effects: Option<Box<dyn EffectSink>>,
    recorder: Option<Box<dyn Recorder>>,
}

impl DispatcherBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            pipeline: Vec::new(),
            responders: Vec::new(),
            fallback: None,
            threshold: DEFAULT_THRESHOLD,
            effects: None,
            recorder: None,
        }
    }

    /// Appends a pipeline stage. Stages run in the order they are added.
    pub fn stage(self, stage: impl Stage + 'static) -> Self {
        self.boxed_stage(Box::new(stage))
    }

    pub fn boxed_stage(mut self, stage: Box<dyn Stage>) -> Self {
        self.pipeline.push(stage);
        self
    }

    /// Attaches a responder. Attachment order breaks confidence ties.
    pub fn responder(self, responder: impl Responder + 'static) -> Self {
        self.boxed_responder(Box::new(responder))
    }

    pub fn boxed_responder(mut self, responder: Box<dyn Responder>) -> Self {
        self.responders.push(responder);
        self
    }

    pub fn fallback(mut self, responder: impl Responder + 'static) -> Self {
        self.fallback = Some(Box::new(responder));
        self
    }

    pub fn threshold(mut self, threshold: f32) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn effects(mut self, sink: impl EffectSink + 'static) -> Self {
        self.effects = Some(Box::new(sink));
        self
    }

    pub fn recorder(mut self, recorder: impl Recorder + 'static) -> Self {
        self.recorder = Some(Box::new(recorder));
        self
    }

    pub fn build(self) -> Result<Dispatcher> {
        self.validate()?;
        tracing::debug!(
            "Assembled `{}`: {} stages, {} responders, fallback={}",
            self.name,
            self.pipeline.len(),
            self.responders.len(),
            self.fallback.is_some()
        );
        Ok(Dispatcher {
            name: self.name,
            pipeline: self.pipeline,
            responders: self.responders,
            fallback: self.fallback,
            threshold: Confidence::new(self.threshold),
            effects: self.effects.unwrap_or_else(|| Box::new(LogEffects)),
            recorder: self.recorder,
            floor: None,
            turn: 0,
        })
    }

    fn validate(&self) -> Result<()> {
        if !self.threshold.is_finite() || self.threshold < 0.0 {
            return Err(BotError::config(format!(
                "threshold must be a non-negative number, got {}",
                self.threshold
            )));
        }

        let mut names = HashSet::new();
        for responder in self.responders.iter().chain(self.fallback.iter()) {
            if !names.insert(responder.name()) {
                return Err(BotError::config(format!(
                    "responder name `{}` is used twice",
                    responder.name()
                )));
            }
        }

        let mut produced: BTreeSet<DataKind> = BTreeSet::new();
        for stage in &self.pipeline {
            if let Some(kind) = stage
                .required_kinds()
                .iter()
                .find(|kind| !produced.contains(*kind))
            {
                return Err(BotError::config(format!(
                    "stage `{}` requires {} but no earlier stage produces it",
                    stage.name(),
                    kind
                )));
            }
            produced.extend(stage.produced_kinds().iter().copied());
        }

        for responder in self.responders.iter().chain(self.fallback.iter()) {
            if let Some(kind) = responder
                .required_kinds()
                .iter()
                .find(|kind| !produced.contains(*kind))
            {
                return Err(BotError::config(format!(
                    "responder `{}` requires {} but no stage produces it",
                    responder.name(),
                    kind
                )));
            }
        }
        Ok(())
    }
}
