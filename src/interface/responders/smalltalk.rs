//! Small-talk responder, used as the fallback.
//!
//! Always answers, always with low confidence, so it never wins arbitration on its own.

use crate::domain::error::{BotError, Result};
use crate::domain::message::{DataKind, Emotion, Message};
use crate::domain::responder::{Responder, ResponderCore};
use crate::domain::response::{Confidence, Response};
use crate::strings::messages;

pub const SMALLTALK_CONFIDENCE: Confidence = Confidence::new(0.1);

pub struct SmallTalkResponder {
    core: ResponderCore,
    opening: String,
}

impl SmallTalkResponder {
    pub fn new(name: impl Into<String>, opening: impl Into<String>) -> Self {
        Self {
            core: ResponderCore::new(name),
            opening: opening.into(),
        }
    }

    fn line(&self, message: &Message) -> Result<String> {
        let text = message.text().trim();
        let lower = text.to_lowercase();
        let emotion = message
            .emotion()
            .ok_or_else(|| BotError::missing(self.core.name(), DataKind::Emotion))?;

        let has_word = |words: &[&str]| {
            lower
                .split(|c: char| !c.is_alphanumeric())
                .any(|w| words.contains(&w))
        };

        let line = if text.contains("不错") || text.contains('你') || has_word(&["you", "nice"]) {
            messages::SMALLTALK_FRIEND.to_string()
        } else if text.contains('哈') || has_word(&["haha", "lol"]) {
            messages::SMALLTALK_LAUGH.to_string()
        } else if text.contains('哎') || has_word(&["sigh", "hmm"]) {
            messages::SMALLTALK_SIGH.to_string()
        } else if let Some(feeling) = emotion.dominant() {
            match feeling {
                Emotion::Happy => messages::SMALLTALK_LAUGH,
                Emotion::Sad => messages::SMALLTALK_SAD,
                Emotion::Angry => messages::SMALLTALK_ANGRY,
            }
            .to_string()
        } else if !text.is_empty() && text.chars().count() <= 2 {
            messages::smalltalk_echo(text)
        } else {
            messages::SMALLTALK_LOST.to_string()
        };
        Ok(line)
    }
}

impl Responder for SmallTalkResponder {
    fn core(&self) -> &ResponderCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut ResponderCore {
        &mut self.core
    }

    fn required_kinds(&self) -> &[DataKind] {
        &[DataKind::Emotion]
    }

    fn respond(&mut self, message: &Message) -> Result<Response> {
        let line = self.line(message)?;
        Ok(Response::new(self.core.name(), line, SMALLTALK_CONFIDENCE))
    }

    fn proactive(&self) -> Option<Response> {
        Some(self.core.reply(self.opening.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interface::responders::testing::analyzed;

    fn reply(text: &str) -> String {
        let mut r = SmallTalkResponder::new("simple", "...");
        let rsp = r.respond(&analyzed(text)).unwrap();
        assert_eq!(rsp.confidence, SMALLTALK_CONFIDENCE);
        rsp.text
    }

    #[test]
    fn test_heuristics() {
        assert_eq!(reply("you are nice"), messages::SMALLTALK_FRIEND);
        assert_eq!(reply("哈哈哈"), messages::SMALLTALK_LAUGH);
        assert_eq!(reply("sigh..."), messages::SMALLTALK_SIGH);
        assert_eq!(reply("I feel so sad today"), messages::SMALLTALK_SAD);
        assert_eq!(reply("ok"), messages::smalltalk_echo("ok"));
        assert_eq!(reply("purple elephants dance"), messages::SMALLTALK_LOST);
    }

    #[test]
    fn test_requires_emotion() {
        let mut r = SmallTalkResponder::new("simple", "...");
        let err = r.respond(&Message::new("hi")).unwrap_err();
        assert!(matches!(err, BotError::MissingData { kind: DataKind::Emotion, .. }));
    }

    #[test]
    fn test_proactive_line() {
        let r = SmallTalkResponder::new("simple", "Say something!");
        assert_eq!(r.proactive().unwrap().text, "Say something!");
    }
}
