//! # Response
//!
//! A responder's proposal for the current turn: reply text, confidence, and the
//! name of the proposing responder.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// Self-reported willingness to answer. Totally ordered; zero means "declines".
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Confidence(f32);

impl Confidence {
    pub const DECLINE: Confidence = Confidence(0.0);
    pub const CERTAIN: Confidence = Confidence(1.0);

    pub const fn new(value: f32) -> Self {
        Self(value)
    }

    pub fn value(self) -> f32 {
        self.0
    }

    pub fn is_decline(self) -> bool {
        self <= Self::DECLINE
    }
}

impl From<f32> for Confidence {
    fn from(value: f32) -> Self {
        Self(value)
    }
}

impl PartialEq for Confidence {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Confidence {}

impl PartialOrd for Confidence {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Confidence {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Response {
    pub text: String,
    pub confidence: Confidence,
    /// Name of the proposing responder.
    pub responder: String,
}

impl Response {
    pub fn new(
        responder: impl Into<String>,
        text: impl Into<String>,
        confidence: impl Into<Confidence>,
    ) -> Self {
        Self {
            text: text.into(),
            confidence: confidence.into(),
            responder: responder.into(),
        }
    }

    /// Confidence 1 with the given text.
    pub fn certain(responder: impl Into<String>, text: impl Into<String>) -> Self {
        Self::new(responder, text, Confidence::CERTAIN)
    }

    /// The conventional "not for me" answer: empty text, confidence 0.
    pub fn decline(responder: impl Into<String>) -> Self {
        Self::new(responder, String::new(), Confidence::DECLINE)
    }

    pub fn is_decline(&self) -> bool {
        self.confidence.is_decline()
    }
}
