//! Cancellable delayed actions.
//!
//! Each scheduled action is a tokio task that sleeps and then posts a
//! [`TimerFired`] message on a channel. The owner drains the channel on its
//! own thread and applies the event, so game state is only ever touched from
//! one place.

use std::time::Duration;

use tokio::{
    sync::mpsc::{self, UnboundedReceiver, UnboundedSender},
    task::JoinHandle,
};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerEvent {
    /// Turn a mismatched pair back face down.
    FlipBack,
    /// Show the win banner after the last match.
    ShowWin,
}

/// Delivered when a scheduled action's delay has elapsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerFired {
    /// Session generation the action was scheduled for.
    pub generation: u64,
    pub event: TimerEvent,
}

pub struct Scheduler {
    tx: UnboundedSender<TimerFired>,
    pending: Vec<JoinHandle<()>>,
}

impl Scheduler {
    pub fn new() -> (Self, UnboundedReceiver<TimerFired>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (
            Self {
                tx,
                pending: Vec::new(),
            },
            rx,
        )
    }

    /// Post `event` after `delay`. Must be called from within a tokio runtime.
    pub fn schedule(&mut self, generation: u64, event: TimerEvent, delay: Duration) {
        self.pending.retain(|handle| !handle.is_finished());

        let tx = self.tx.clone();
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            // The receiver is gone once the UI shuts down; nothing left to notify.
            let _ = tx.send(TimerFired { generation, event });
        });

        debug!(generation, ?event, ?delay, "timer scheduled");
        self.pending.push(handle);
    }

    /// Abort every action that has not fired yet.
    pub fn cancel_all(&mut self) {
        let count = self.pending.len();
        for handle in self.pending.drain(..) {
            handle.abort();
        }
        if count > 0 {
            debug!(count, "timers cancelled");
        }
    }

    /// Number of actions still waiting to fire.
    pub fn outstanding(&self) -> usize {
        self.pending.iter().filter(|h| !h.is_finished()).count()
    }
}

impl Drop for Scheduler {
    fn drop(&mut self) {
        self.cancel_all();
    }
}
