//! FAQ responder: answers anything phrased as a question.

use super::keywords;
use crate::domain::error::Result;
use crate::domain::message::{DataKind, Message};
use crate::domain::responder::{Responder, ResponderCore};
use crate::domain::response::Response;
use crate::infrastructure::nlu::keywords::QUESTION;
use crate::strings::messages;

pub struct FaqResponder {
    core: ResponderCore,
}

impl FaqResponder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            core: ResponderCore::new(name),
        }
    }
}

impl Responder for FaqResponder {
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
        if keywords(self.core.name(), message)?.contains(QUESTION) {
            return Ok(self.core.reply(messages::faq_answer(message.text())));
        }
        Ok(self.core.decline())
    }
}
