//! # Configuration
//!
//! Manages the loading and parsing of the bot's configuration file (`config.yaml`).
//! Every field has a default, so an empty or missing file yields a working bot.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

pub const DEFAULT_CONFIG_PATH: &str = "data/config.yaml";

/// Main bot configuration structure.
/// Matches the layout of `data/config.yaml`.
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct BotConfig {
    pub name: String,
    /// Minimum confidence a proposal needs to skip the fallback path.
    pub threshold: f32,
    /// Responder whose proactive line opens a session.
    pub opening: Option<String>,
    /// Proactive line of the fallback responder.
    pub fallback_line: String,
    /// Keyword featurizer lexicon: label -> keywords.
    pub keywords: BTreeMap<String, Vec<String>>,
    pub emotion: EmotionConfig,
    pub history: HistoryConfig,
    pub logging: LoggingConfig,
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            name: "Mike".to_string(),
            threshold: default_threshold(),
            opening: Some("greet".to_string()),
            fallback_line: "I didn't quite get that~".to_string(),
            keywords: default_keywords(),
            emotion: EmotionConfig::default(),
            history: HistoryConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

fn default_threshold() -> f32 {
    0.5
}

fn default_keywords() -> BTreeMap<String, Vec<String>> {
    let groups: [(&str, &[&str]); 7] = [
        ("greet", &["hello", "hi", "你好"]),
        ("question", &["may i ask", "请问"]),
        ("capabilities", &["can you", "what can", "你会"]),
        ("timer", &["timer", "alarm", "闹钟"]),
        ("bored", &["nothing to say", "无话可说"]),
        ("gratitude", &["good things", "好事"]),
        ("farewell", &["bye", "goodbye", "再见"]),
    ];
    groups
        .into_iter()
        .map(|(label, words)| {
            (
                label.to_string(),
                words.iter().map(|w| (*w).to_string()).collect(),
            )
        })
        .collect()
}

/// Lexicons for the emotion classifier.
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct EmotionConfig {
    pub happy: Vec<String>,
    pub sad: Vec<String>,
    pub angry: Vec<String>,
}

impl Default for EmotionConfig {
    fn default() -> Self {
        let words = |list: &[&str]| list.iter().map(|w| (*w).to_string()).collect();
        Self {
            happy: words(&["happy", "glad", "joy", "高兴", "快乐", "开心"]),
            sad: words(&["sad", "miserable", "cry", "悲哀", "悲惨", "心里苦", "呜", "想哭"]),
            angry: words(&["angry", "annoyed", "hate", "气死了", "生气", "讨厌", "愤怒", "怒气"]),
        }
    }
}

/// Conversation history sink. No path means no recording.
#[derive(Debug, Default, Deserialize, Clone)]
#[serde(default)]
pub struct HistoryConfig {
    pub path: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct LoggingConfig {
    /// `EnvFilter` directive used when `RUST_LOG` is unset.
    pub filter: String,
    /// Console directive while a session log file takes the full output.
    pub console: String,
    /// Session log file, truncated at startup.
    pub file: Option<String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
            console: "warn".to_string(),
            file: Some("data/session.log".to_string()),
        }
    }
}

impl BotConfig {
    pub fn from_yaml(content: &str) -> Result<Self> {
        serde_yaml::from_str(content).context("Failed to parse YAML")
    }

    /// Loads the file if it exists, otherwise returns the defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            tracing::info!("{} not found, using default configuration", path.display());
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        Self::from_yaml(&content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let config = BotConfig::from_yaml("name: Ada\nthreshold: 0.7\n").unwrap();
        assert_eq!(config.name, "Ada");
        assert!((config.threshold - 0.7).abs() < f32::EPSILON);
        assert_eq!(config.opening.as_deref(), Some("greet"));
        assert!(config.keywords.contains_key("timer"));
        assert!(config.history.path.is_none());
        assert_eq!(config.logging.console, "warn");
    }

    #[test]
    fn test_keywords_override() {
        let yaml = "keywords:\n  greet: [howdy]\n";
        let config = BotConfig::from_yaml(yaml).unwrap();
        assert_eq!(config.keywords.len(), 1);
        assert_eq!(config.keywords["greet"], vec!["howdy".to_string()]);
    }

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let dir = tempfile::TempDir::new().unwrap();
        let config = BotConfig::load(dir.path().join("absent.yaml")).unwrap();
        assert_eq!(config.name, "Mike");
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "history:\n  path: /tmp/history.jsonl").unwrap();
        let config = BotConfig::load(file.path()).unwrap();
        assert_eq!(config.history.path.as_deref(), Some("/tmp/history.jsonl"));
    }

    #[test]
    fn test_invalid_yaml_is_error() {
        assert!(BotConfig::from_yaml("threshold: [not, a, number]").is_err());
    }
}
