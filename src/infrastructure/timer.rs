//! # Timer Effects
//!
//! Runs `StartTimer` effects on the tokio runtime and reports expiry through a channel,
//! so the REPL can print the alarm between turns.

use crate::domain::action::Effect;
use crate::domain::traits::EffectSink;
use tokio::runtime::Handle;
use tokio::sync::mpsc;

/// Fired when a timer started by a responder runs out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alarm {
    pub owner: String,
    pub seconds: u64,
}

pub struct TokioTimers {
    handle: Handle,
    alarms: mpsc::UnboundedSender<Alarm>,
}

impl TokioTimers {
    /// Must be called from within a tokio runtime.
    pub fn new() -> (Self, mpsc::UnboundedReceiver<Alarm>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let timers = Self {
            handle: Handle::current(),
            alarms: tx,
        };
        (timers, rx)
    }
}

impl EffectSink for TokioTimers {
    fn handle(&self, effect: Effect) {
        match effect {
            Effect::StartTimer { owner, duration } => {
                let alarms = self.alarms.clone();
                tracing::info!("Timer from `{}` started for {:?}", owner, duration);
                self.handle.spawn(async move {
                    tokio::time::sleep(duration).await;
                    let alarm = Alarm {
                        owner,
                        seconds: duration.as_secs(),
                    };
                    tracing::info!("Timer from `{}` fired", alarm.owner);
                    if alarms.send(alarm).is_err() {
                        tracing::warn!("Alarm receiver dropped before the timer fired");
                    }
                });
            }
        }
    }
}
