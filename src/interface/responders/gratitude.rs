//! Three-good-things responder.
//!
//! Takes the floor when the user brings up good things, then collects one item per
//! turn. The third item completes the script: the summary is returned and the floor
//! released. "stop" abandons the script early.

use super::{is_stop, keywords};
use crate::domain::action::Action;
use crate::domain::error::Result;
use crate::domain::message::{DataKind, Message};
use crate::domain::responder::{Responder, ResponderCore};
use crate::domain::response::Response;
use crate::infrastructure::nlu::keywords::GRATITUDE;
use crate::strings::messages;

pub const ITEMS: usize = 3;

pub struct GratitudeResponder {
    core: ResponderCore,
    items: Vec<String>,
}

impl GratitudeResponder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            core: ResponderCore::new(name),
            items: Vec::new(),
        }
    }

    /// Items collected so far in the running script.
    pub fn items(&self) -> &[String] {
        &self.items
    }
}

impl Responder for GratitudeResponder {
    fn core(&self) -> &ResponderCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut ResponderCore {
        &mut self.core
    }

    fn required_kinds(&self) -> &[DataKind] {
        &[DataKind::Keywords]
    }

    fn respond(&mut self, message: &Message) -> Result<Response> {
        let hits = keywords(self.core.name(), message)?;

        if !self.core.activated() {
            if hits.contains(GRATITUDE) {
                self.core.schedule(Action::Forget);
                self.core.schedule(Action::Activate);
                return Ok(self.core.reply(messages::GRATITUDE_START));
            }
            return Ok(self.core.decline());
        }

        let text = message.text().trim();
        if is_stop(text) {
            self.core.schedule(Action::Forget);
            self.core.schedule(Action::Deactivate);
            return Ok(self.core.reply(messages::GRATITUDE_STOPPED));
        }

        if self.items.len() + 1 < ITEMS {
            self.core.schedule(Action::Remember(text.to_string()));
            return Ok(self.core.reply(messages::GRATITUDE_NEXT));
        }

        let mut all = self.items.clone();
        all.push(text.to_string());
        self.core.schedule(Action::Forget);
        self.core.schedule(Action::Deactivate);
        Ok(self.core.reply(messages::gratitude_summary(&all)))
    }

    fn apply(&mut self, action: Action) {
        match action {
            Action::Remember(item) => self.items.push(item),
            Action::Forget => self.items.clear(),
            other => tracing::debug!("gratitude ignores {:?}", other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::action::Transition;
    use crate::domain::responder::propose;
    use crate::interface::responders::testing::analyzed;

    fn turn(r: &mut GratitudeResponder, text: &str) -> (Response, Transition) {
        let rsp = propose(r, &analyzed(text)).unwrap();
        let committed = r.commit();
        (rsp, committed.transition)
    }

    #[test]
    fn test_full_script() {
        let mut r = GratitudeResponder::new("gratitude");
        let (rsp, t) = turn(&mut r, "let's do good things");
        assert_eq!(rsp.text, messages::GRATITUDE_START);
        assert_eq!(t, Transition::Capture);

        let (rsp, _) = turn(&mut r, "sunny day");
        assert_eq!(rsp.text, messages::GRATITUDE_NEXT);
        let (_, _) = turn(&mut r, "good coffee");
        assert_eq!(r.items(), ["sunny day", "good coffee"]);

        let (rsp, t) = turn(&mut r, "called mom");
        assert_eq!(rsp.text, "I remembered all three good things! sunny day, good coffee, called mom");
        assert_eq!(t, Transition::Release);
        assert!(!r.activated());
        assert!(r.items().is_empty());
    }

    #[test]
    fn test_uncommitted_items_are_not_kept() {
        let mut r = GratitudeResponder::new("gratitude");
        turn(&mut r, "good things");
        propose(&mut r, &analyzed("lost proposal")).unwrap();
        propose(&mut r, &analyzed("kept")).unwrap();
        r.commit();
        assert_eq!(r.items(), ["kept"]);
    }

    #[test]
    fn test_stop_abandons_script() {
        let mut r = GratitudeResponder::new("gratitude");
        turn(&mut r, "好事");
        turn(&mut r, "one");
        let (rsp, t) = turn(&mut r, "停止");
        assert_eq!(rsp.text, messages::GRATITUDE_STOPPED);
        assert_eq!(t, Transition::Release);
        assert!(r.items().is_empty());
    }

    #[test]
    fn test_idle_declines_unrelated_text() {
        let mut r = GratitudeResponder::new("gratitude");
        assert!(propose(&mut r, &analyzed("hello")).unwrap().is_decline());
        assert!(r.commit().is_empty());
    }
}
