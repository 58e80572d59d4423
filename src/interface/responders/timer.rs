//! Timer responder.
//!
//! "set a timer for 10 seconds" starts a timer right away. Without a duration it
//! takes the floor and asks for one; the next reply with a number starts the timer
//! and releases the floor.

use super::{is_stop, keywords};
use crate::domain::action::Action;
use crate::domain::error::{BotError, Result};
use crate::domain::message::{DataKind, Message};
use crate::domain::responder::{Responder, ResponderCore};
use crate::domain::response::Response;
use crate::infrastructure::nlu::keywords::TIMER;
use crate::strings::messages;
use std::time::Duration;

pub struct TimerResponder {
    core: ResponderCore,
}

impl TimerResponder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            core: ResponderCore::new(name),
        }
    }

    /// Leading digits of the first token that starts with one, read as seconds.
    /// "10s" and "10" both give 10.
    fn duration(&self, message: &Message) -> Result<Option<u64>> {
        let tokens = message
            .tokens()
            .ok_or_else(|| BotError::missing(self.core.name(), DataKind::Tokens))?;
        Ok(tokens.iter().find_map(|t| {
            let end = t
                .find(|c: char| !c.is_ascii_digit())
                .unwrap_or(t.len());
            t[..end].parse().ok()
        }))
    }

    fn start(&mut self, seconds: u64) -> Response {
        self.core
            .schedule(Action::StartTimer(Duration::from_secs(seconds)));
        if self.core.activated() {
            self.core.schedule(Action::Deactivate);
        }
        self.core.reply(messages::timer_set(seconds))
    }
}

impl Responder for TimerResponder {
    fn core(&self) -> &ResponderCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut ResponderCore {
        &mut self.core
    }

    fn required_kinds(&self) -> &[DataKind] {
        &[DataKind::Keywords, DataKind::Tokens]
    }

    fn respond(&mut self, message: &Message) -> Result<Response> {
        let asked = keywords(self.core.name(), message)?.contains(TIMER);
        let duration = self.duration(message)?;

        if self.core.activated() && is_stop(message.text()) {
            self.core.schedule(Action::Deactivate);
            return Ok(self.core.reply(messages::TIMER_CANCELLED));
        }

        match (asked, duration) {
            (_, Some(seconds)) if asked || self.core.activated() => Ok(self.start(seconds)),
            (true, None) => {
                if !self.core.activated() {
                    self.core.schedule(Action::Activate);
                }
                Ok(self.core.reply(messages::TIMER_ASK_DURATION))
            }
            // Holding the floor without a usable answer: ask again.
            (false, None) if self.core.activated() => {
                Ok(self.core.reply(messages::TIMER_ASK_DURATION))
            }
            _ => Ok(self.core.decline()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::action::{Effect, Transition};
    use crate::domain::responder::propose;
    use crate::interface::responders::testing::analyzed;

    #[test]
    fn test_duration_in_first_message() {
        let mut r = TimerResponder::new("timer");
        let rsp = propose(&mut r, &analyzed("set a timer for 10 seconds")).unwrap();
        assert_eq!(rsp.text, messages::timer_set(10));
        assert_eq!(
            r.core().scheduled(),
            &[Action::StartTimer(Duration::from_secs(10))]
        );
        let committed = r.commit();
        assert_eq!(committed.transition, Transition::None);
        assert_eq!(
            committed.effects,
            vec![Effect::StartTimer {
                owner: "timer".to_string(),
                duration: Duration::from_secs(10)
            }]
        );
    }

    #[test]
    fn test_asks_for_duration_then_starts() {
        let mut r = TimerResponder::new("timer");
        let rsp = propose(&mut r, &analyzed("闹钟")).unwrap();
        assert_eq!(rsp.text, messages::TIMER_ASK_DURATION);
        assert_eq!(r.commit().transition, Transition::Capture);

        let rsp = propose(&mut r, &analyzed("hmm")).unwrap();
        assert_eq!(rsp.text, messages::TIMER_ASK_DURATION);
        assert!(r.core().scheduled().is_empty());

        propose(&mut r, &analyzed("30")).unwrap();
        assert_eq!(
            r.core().scheduled(),
            &[
                Action::StartTimer(Duration::from_secs(30)),
                Action::Deactivate
            ]
        );
        let committed = r.commit();
        assert_eq!(committed.transition, Transition::Release);
        assert_eq!(committed.effects.len(), 1);
        assert!(!r.activated());
    }

    #[test]
    fn test_stop_while_waiting() {
        let mut r = TimerResponder::new("timer");
        propose(&mut r, &analyzed("alarm please")).unwrap();
        r.commit();
        let rsp = propose(&mut r, &analyzed("stop")).unwrap();
        assert_eq!(rsp.text, messages::TIMER_CANCELLED);
        assert_eq!(r.commit().transition, Transition::Release);
    }

    #[test]
    fn test_idle_ignores_numbers() {
        let mut r = TimerResponder::new("timer");
        assert!(propose(&mut r, &analyzed("42")).unwrap().is_decline());
    }

    #[test]
    fn test_duration_with_unit_suffix() {
        let mut r = TimerResponder::new("timer");
        let rsp = propose(&mut r, &analyzed("set a timer for 10s")).unwrap();
        assert_eq!(rsp.text, messages::timer_set(10));
        assert_eq!(r.commit().transition, Transition::None);

        propose(&mut r, &analyzed("timer please")).unwrap();
        r.commit();
        assert!(r.activated());
        let rsp = propose(&mut r, &analyzed("10s")).unwrap();
        assert_eq!(rsp.text, messages::timer_set(10));
        assert_eq!(r.commit().transition, Transition::Release);
        assert!(!r.activated());
    }
}
