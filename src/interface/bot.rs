//! # Demo Bot Assembly
//!
//! Wires the demo pipeline and responders from a [`BotConfig`]:
//! keywords, tokens and emotion stages, then faq, greet, topic, gratitude and timer,
//! with small talk as the fallback.

use crate::application::builder::DispatcherBuilder;
use crate::application::dispatcher::Dispatcher;
use crate::domain::config::BotConfig;
use crate::domain::error::{BotError, Result};
use crate::domain::response::Response;
use crate::infrastructure::nlu::{EmotionClassifier, KeywordFeaturizer, Tokenizer};
use crate::interface::responders::{
    FaqResponder, GratitudeResponder, GreetResponder, SmallTalkResponder, TimerResponder,
    TopicResponder,
};

pub const FALLBACK_NAME: &str = "simple";

/// Pipeline, responders, fallback and threshold. Effects and history are left to the caller.
pub fn assemble(config: &BotConfig) -> Result<DispatcherBuilder> {
    let builder = Dispatcher::builder(config.name.as_str())
        .stage(KeywordFeaturizer::new(&config.keywords)?)
        .stage(Tokenizer::new()?)
        .stage(EmotionClassifier::new(&config.emotion)?)
        .responder(FaqResponder::new("faq"))
        .responder(GreetResponder::new("greet"))
        .responder(TopicResponder::new("topic"))
        .responder(GratitudeResponder::new("gratitude"))
        .responder(TimerResponder::new("timer"))
        .fallback(SmallTalkResponder::new(
            FALLBACK_NAME,
            config.fallback_line.as_str(),
        ))
        .threshold(config.threshold);
    Ok(builder)
}

/// The configured session opener, if any.
pub fn opening(config: &BotConfig, bot: &Dispatcher) -> Result<Option<Response>> {
    let Some(name) = config.opening.as_deref() else {
        return Ok(None);
    };
    if bot.responder(name).is_none() {
        return Err(BotError::config(format!(
            "opening responder `{name}` is not attached"
        )));
    }
    Ok(bot.utter(name))
}
