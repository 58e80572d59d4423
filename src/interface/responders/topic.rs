//! Topic responder: suggests things to talk about.

use super::keywords;
use crate::domain::error::Result;
use crate::domain::message::{DataKind, Message};
use crate::domain::responder::{Responder, ResponderCore};
use crate::domain::response::Response;
use crate::infrastructure::nlu::keywords::{BORED, CAPABILITIES};
use crate::strings::messages;

pub struct TopicResponder {
    core: ResponderCore,
}

impl TopicResponder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            core: ResponderCore::new(name),
        }
    }
}

impl Responder for TopicResponder {
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
        if hits.contains(CAPABILITIES) || hits.contains(BORED) {
            return Ok(self.core.reply(messages::TOPIC_CAPABILITIES));
        }
        Ok(self.core.decline())
    }

    fn proactive(&self) -> Option<Response> {
        Some(self.core.reply(messages::TOPIC_OPENING))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interface::responders::testing::analyzed;

    #[test]
    fn test_suggests_topics() {
        let mut topic = TopicResponder::new("topic");
        for text in ["What can you do?", "I have nothing to say", "你会什么"] {
            let rsp = topic.respond(&analyzed(text)).unwrap();
            assert_eq!(rsp.text, messages::TOPIC_CAPABILITIES, "input: {text}");
        }
        assert!(topic.respond(&analyzed("hello")).unwrap().is_decline());
    }
}
