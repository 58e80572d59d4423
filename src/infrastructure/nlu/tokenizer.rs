//! Rule-based tokenizer. Han characters become single tokens, other
//! letter/digit runs become one token each. Punctuation and whitespace are dropped.

use crate::domain::error::{BotError, Result};
use crate::domain::message::{DataKind, Message, NluData};
use crate::domain::traits::Stage;
use regex::Regex;

pub struct Tokenizer {
    pattern: Regex,
}

impl Tokenizer {
    pub fn new() -> Result<Self> {
        let pattern = Regex::new(r"\p{Han}|[[\p{L}\p{N}_']&&[^\p{Han}]]+").map_err(|e| BotError::Stage {
            stage: "tokenizer".to_string(),
            reason: e.to_string(),
        })?;
        Ok(Self { pattern })
    }

    pub fn tokenize(&self, text: &str) -> Vec<String> {
        self.pattern
            .find_iter(text)
            .map(|m| m.as_str().to_string())
            .collect()
    }
}

impl Stage for Tokenizer {
    fn name(&self) -> &str {
        "tokenizer"
    }

    fn produced_kinds(&self) -> &[DataKind] {
        &[DataKind::Tokens]
    }

    fn transform(&mut self, mut message: Message) -> Result<Message> {
        let tokens = self.tokenize(message.text());
        message.set(NluData::Tokens(tokens));
        Ok(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latin_words_and_numbers() {
        let t = Tokenizer::new().unwrap();
        assert_eq!(
            t.tokenize("Set a timer for 10 seconds, please!"),
            vec!["Set", "a", "timer", "for", "10", "seconds", "please"]
        );
    }

    #[test]
    fn test_han_characters_split() {
        let t = Tokenizer::new().unwrap();
        assert_eq!(t.tokenize("定个闹钟 30秒"), vec!["定", "个", "闹", "钟", "30", "秒"]);
    }

    #[test]
    fn test_stage_sets_tokens() {
        let mut t = Tokenizer::new().unwrap();
        let msg = t.transform(Message::new("don't stop")).unwrap();
        assert_eq!(msg.tokens().unwrap(), ["don't", "stop"]);
    }
}
