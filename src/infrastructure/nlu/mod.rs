//! # NLU Stages
//!
//! Concrete pipeline stages. Each one owns exactly one [`DataKind`](crate::domain::message::DataKind)
//! and leaves every other kind on the message untouched.

pub mod emotion;
pub mod keywords;
pub mod tokenizer;

pub use emotion::EmotionClassifier;
pub use keywords::KeywordFeaturizer;
pub use tokenizer::Tokenizer;

use crate::domain::error::{BotError, Result};
use regex::Regex;

/// Compiles a case-insensitive pattern matching any of `words`.
///
/// ASCII words only match whole words ("hi" does not fire on "this");
/// anything else (e.g. Chinese) matches as a plain substring.
/// Returns `None` when the list has no usable word.
pub(crate) fn lexicon_regex(stage: &str, label: &str, words: &[String]) -> Result<Option<Regex>> {
    let alternatives: Vec<String> = words
        .iter()
        .map(|w| w.trim())
        .filter(|w| !w.is_empty())
        .map(|w| {
            let escaped = regex::escape(w);
            if w.is_ascii() {
                format!(r"\b{escaped}\b")
            } else {
                escaped
            }
        })
        .collect();
    if alternatives.is_empty() {
        return Ok(None);
    }
    let pattern = format!("(?i){}", alternatives.join("|"));
    Regex::new(&pattern)
        .map(Some)
        .map_err(|e| BotError::Stage {
            stage: stage.to_string(),
            reason: format!("bad pattern for `{label}`: {e}"),
        })
}
