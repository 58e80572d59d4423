//! Greeting responder: hellos, goodbyes, and the session opener.

use super::keywords;
use crate::domain::error::Result;
use crate::domain::message::{DataKind, Message};
use crate::domain::responder::{Responder, ResponderCore};
use crate::domain::response::Response;
use crate::infrastructure::nlu::keywords::{FAREWELL, GREET};
use crate::strings::messages;

pub struct GreetResponder {
    core: ResponderCore,
}

impl GreetResponder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            core: ResponderCore::new(name),
        }
    }
}

impl Responder for GreetResponder {
    fn core(&self) -> &ResponderCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut ResponderCore {
        &mut self.core
    }

    fn required_kinds(&self) -> &[DataKind] {
        &[DataKind::Keywords]
    }

    fn respond(&mut self, message: &Message) -> Result<Response> {
        let hits = keywords(self.core.name(), message)?;
        if hits.contains(GREET) {
            Ok(self.core.reply(messages::GREET_REPLY))
        } else if hits.contains(FAREWELL) {
            Ok(self.core.reply(messages::FAREWELL_REPLY))
        } else {
            Ok(self.core.decline())
        }
    }

    fn proactive(&self) -> Option<Response> {
        Some(self.core.reply(messages::GREET_OPENING))
    }
}
