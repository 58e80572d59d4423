//! # Message
//!
//! One user utterance plus everything the NLU pipeline derives from it during a turn.
//! Payloads are stored in a closed tagged union keyed by [`DataKind`], at most one per kind.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};
use std::fmt;

/// Stable identifier of a payload kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum DataKind {
    Keywords,
    Tokens,
    Emotion,
}

impl fmt::Display for DataKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DataKind::Keywords => "keywords",
            DataKind::Tokens => "tokens",
            DataKind::Emotion => "emotion",
        };
        f.write_str(name)
    }
}

/// Labels of the keyword groups that matched the input text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordHits {
    labels: BTreeSet<String>,
}

impl KeywordHits {
    pub fn new<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            labels: labels.into_iter().map(Into::into).collect(),
        }
    }

    pub fn contains(&self, label: &str) -> bool {
        self.labels.contains(label)
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.labels.iter().map(String::as_str)
    }
}

/// Coarse emotion categories scored by the emotion classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Emotion {
    Happy,
    Sad,
    Angry,
}

/// Probability-like distribution over [`Emotion`]s.
///
/// Either sums to 1, or is all zero when nothing emotional was detected.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct EmotionScores {
    pub happy: f32,
    pub sad: f32,
    pub angry: f32,
}

impl EmotionScores {
    /// Normalizes raw hit counts. Zero hits yield the neutral (all-zero) distribution.
    pub fn from_counts(happy: usize, sad: usize, angry: usize) -> Self {
        let total = happy + sad + angry;
        if total == 0 {
            return Self::default();
        }
        #[allow(clippy::cast_precision_loss)]
        let share = |count: usize| count as f32 / total as f32;
        Self {
            happy: share(happy),
            sad: share(sad),
            angry: share(angry),
        }
    }

    pub fn is_neutral(&self) -> bool {
        self.happy == 0.0 && self.sad == 0.0 && self.angry == 0.0
    }

    /// The strongest emotion, if any was detected. Ties prefer happy, then sad.
    pub fn dominant(&self) -> Option<Emotion> {
        if self.is_neutral() {
            return None;
        }
        let mut best = (Emotion::Happy, self.happy);
        for candidate in [(Emotion::Sad, self.sad), (Emotion::Angry, self.angry)] {
            if candidate.1 > best.1 {
                best = candidate;
            }
        }
        Some(best.0)
    }
}

/// A payload produced by exactly one pipeline stage kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum NluData {
    Keywords(KeywordHits),
    Tokens(Vec<String>),
    Emotion(EmotionScores),
}

impl NluData {
    pub fn kind(&self) -> DataKind {
        match self {
            NluData::Keywords(_) => DataKind::Keywords,
            NluData::Tokens(_) => DataKind::Tokens,
            NluData::Emotion(_) => DataKind::Emotion,
        }
    }
}

/// A single turn's user input and its derived data.
#[derive(Debug, Clone, Serialize)]
pub struct Message {
    text: String,
    data: HashMap<DataKind, NluData>,
}

impl Message {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            data: HashMap::new(),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Stores a payload under its own kind, replacing any previous payload of that kind.
    pub fn set(&mut self, data: NluData) {
        self.data.insert(data.kind(), data);
    }

    pub fn get(&self, kind: DataKind) -> Option<&NluData> {
        self.data.get(&kind)
    }

    pub fn has_all(&self, kinds: &[DataKind]) -> bool {
        kinds.iter().all(|kind| self.data.contains_key(kind))
    }

    /// Required kinds that are not present, in request order.
    pub fn missing(&self, kinds: &[DataKind]) -> Vec<DataKind> {
        kinds
            .iter()
            .copied()
            .filter(|kind| !self.data.contains_key(kind))
            .collect()
    }

    /// Kinds currently stored, sorted.
    pub fn kinds(&self) -> Vec<DataKind> {
        let mut kinds: Vec<_> = self.data.keys().copied().collect();
        kinds.sort();
        kinds
    }

    pub fn keywords(&self) -> Option<&KeywordHits> {
        match self.data.get(&DataKind::Keywords) {
            Some(NluData::Keywords(hits)) => Some(hits),
            _ => None,
        }
    }

    pub fn tokens(&self) -> Option<&[String]> {
        match self.data.get(&DataKind::Tokens) {
            Some(NluData::Tokens(tokens)) => Some(tokens),
            _ => None,
        }
    }

    pub fn emotion(&self) -> Option<&EmotionScores> {
        match self.data.get(&DataKind::Emotion) {
            Some(NluData::Emotion(scores)) => Some(scores),
            _ => None,
        }
    }
}
