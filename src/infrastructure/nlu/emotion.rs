//! Lexicon-based emotion classifier.

use super::lexicon_regex;
use crate::domain::config::EmotionConfig;
use crate::domain::error::Result;
use crate::domain::message::{DataKind, EmotionScores, Message, NluData};
use crate::domain::traits::Stage;
use regex::Regex;

pub struct EmotionClassifier {
    happy: Option<Regex>,
    sad: Option<Regex>,
    angry: Option<Regex>,
}

impl EmotionClassifier {
    /// Lexicon words match like keywords: whole words for ASCII, substrings otherwise.
    pub fn new(lexicon: &EmotionConfig) -> Result<Self> {
        Ok(Self {
            happy: lexicon_regex("emotion", "happy", &lexicon.happy)?,
            sad: lexicon_regex("emotion", "sad", &lexicon.sad)?,
            angry: lexicon_regex("emotion", "angry", &lexicon.angry)?,
        })
    }

    /// Counts lexicon matches per emotion, then normalizes.
    pub fn score(&self, text: &str) -> EmotionScores {
        let hits = |regex: &Option<Regex>| {
            regex
                .as_ref()
                .map_or(0, |regex| regex.find_iter(text).count())
        };
        EmotionScores::from_counts(hits(&self.happy), hits(&self.sad), hits(&self.angry))
    }
}

impl Stage for EmotionClassifier {
    fn name(&self) -> &str {
        "emotion"
    }

    fn produced_kinds(&self) -> &[DataKind] {
        &[DataKind::Emotion]
    }

    fn transform(&mut self, mut message: Message) -> Result<Message> {
        let scores = self.score(message.text());
        message.set(NluData::Emotion(scores));
        Ok(message)
    }
}
