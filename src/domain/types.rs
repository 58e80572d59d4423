//! # Domain Types
//!
//! Turn outcomes and history records shared between the dispatcher and its collaborators.

use crate::domain::message::Message;
use crate::domain::response::{Confidence, Response};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// What a turn produced for the user.
#[derive(Debug, Clone, PartialEq)]
pub enum TurnOutcome {
    /// A responder cleared the threshold and its deferred actions ran.
    Committed(Response),
    /// Nobody cleared the threshold; the fallback answered and nothing was committed.
    Fallback(Response),
    /// Nobody cleared the threshold and no fallback is configured.
    Silent,
}

impl TurnOutcome {
    pub fn response(&self) -> Option<&Response> {
        match self {
            TurnOutcome::Committed(rsp) | TurnOutcome::Fallback(rsp) => Some(rsp),
            TurnOutcome::Silent => None,
        }
    }

    pub fn text(&self) -> Option<&str> {
        self.response().map(|rsp| rsp.text.as_str())
    }

    pub fn is_committed(&self) -> bool {
        matches!(self, TurnOutcome::Committed(_))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Bot,
}

/// One line of conversation history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatRecord {
    pub turn: u64,
    pub role: Role,
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub responder: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence: Option<Confidence>,
    pub at: DateTime<Utc>,
}

impl ChatRecord {
    pub fn user(turn: u64, message: &Message) -> Self {
        Self {
            turn,
            role: Role::User,
            text: message.text().to_string(),
            responder: None,
            confidence: None,
            at: Utc::now(),
        }
    }

    pub fn bot(turn: u64, response: &Response) -> Self {
        Self {
            turn,
            role: Role::Bot,
            text: response.text.clone(),
            responder: Some(response.responder.clone()),
            confidence: Some(response.confidence),
            at: Utc::now(),
        }
    }
}
