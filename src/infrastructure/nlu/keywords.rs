//! Keyword featurizer: marks which configured keyword groups occur in the text.

use super::lexicon_regex;
use crate::domain::error::Result;
use crate::domain::message::{DataKind, KeywordHits, Message, NluData};
use crate::domain::traits::Stage;
use regex::Regex;
use std::collections::BTreeMap;

pub const GREET: &str = "greet";
pub const FAREWELL: &str = "farewell";
pub const QUESTION: &str = "question";
pub const CAPABILITIES: &str = "capabilities";
pub const TIMER: &str = "timer";
pub const BORED: &str = "bored";
pub const GRATITUDE: &str = "gratitude";

pub struct KeywordFeaturizer {
    groups: Vec<(String, Regex)>,
}

impl KeywordFeaturizer {
    /// Compiles one case-insensitive pattern per label. Labels without keywords are skipped.
    pub fn new(lexicon: &BTreeMap<String, Vec<String>>) -> Result<Self> {
        let mut groups = Vec::new();
        for (label, words) in lexicon {
            if let Some(regex) = lexicon_regex("keywords", label, words)? {
                groups.push((label.clone(), regex));
            }
        }
        Ok(Self { groups })
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.groups.iter().map(|(label, _)| label.as_str())
    }
}

impl Stage for KeywordFeaturizer {
    fn name(&self) -> &str {
        "keywords"
    }

    fn produced_kinds(&self) -> &[DataKind] {
        &[DataKind::Keywords]
    }

    fn transform(&mut self, mut message: Message) -> Result<Message> {
        let hits = KeywordHits::new(
            self.groups
                .iter()
                .filter(|(_, regex)| regex.is_match(message.text()))
                .map(|(label, _)| label.clone()),
        );
        message.set(NluData::Keywords(hits));
        Ok(message)
    }
}
