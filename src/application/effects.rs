//! # Effect Sinks
//!
//! Default handling for effects when no runtime-backed sink is wired in.

use crate::domain::action::Effect;
use crate::domain::traits::EffectSink;

/// Logs effects and drops them.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogEffects;

impl EffectSink for LogEffects {
    fn handle(&self, effect: Effect) {
        tracing::warn!("No effect handler configured, dropping {:?}", effect);
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use std::sync::{Arc, Mutex};

    /// Keeps every effect it receives so tests can inspect them.
    #[derive(Debug, Default, Clone)]
    pub(crate) struct CollectEffects {
        effects: Arc<Mutex<Vec<Effect>>>,
    }

    impl CollectEffects {
        pub(crate) fn take(&self) -> Vec<Effect> {
            std::mem::take(&mut *self.effects.lock().unwrap())
        }
    }

    impl EffectSink for CollectEffects {
        fn handle(&self, effect: Effect) {
            self.effects.lock().unwrap().push(effect);
        }
    }
}
