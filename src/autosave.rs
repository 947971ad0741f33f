// src/autosave.rs - Periodic auto-save ticks and the single-save gate

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use log::debug;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

pub const DEFAULT_AUTO_SAVE_INTERVAL: Duration = Duration::from_secs(5);

/// Allows at most one save in flight. Clones share the same flag.
#[derive(Debug, Clone, Default)]
pub struct SaveGate {
    busy: Arc<AtomicBool>,
}

impl SaveGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim the gate, or `None` if a save already holds it.
    pub fn try_acquire(&self) -> Option<SaveGuard> {
        self.busy
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| SaveGuard {
                busy: Arc::clone(&self.busy),
            })
    }

    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::Acquire)
    }
}

/// Releases the gate when dropped.
#[derive(Debug)]
pub struct SaveGuard {
    busy: Arc<AtomicBool>,
}

impl Drop for SaveGuard {
    fn drop(&mut self) {
        self.busy.store(false, Ordering::Release);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AutoSaveTick;

/// Background task that emits an [`AutoSaveTick`] every interval. It never
/// touches the document itself; the event loop performs the save on receipt.
/// Ticks are skipped while the gate is held. Dropping the ticker stops it.
pub struct AutoSaveTicker {
    handle: JoinHandle<()>,
}

impl AutoSaveTicker {
    /// Must be called from within a tokio runtime.
    pub fn spawn(interval: Duration, gate: SaveGate) -> (Self, mpsc::UnboundedReceiver<AutoSaveTick>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let handle = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            // The first tick completes immediately; nothing to save yet.
            ticker.tick().await;
            loop {
                ticker.tick().await;
                if gate.is_busy() {
                    debug!("auto-save tick skipped, save in progress");
                    continue;
                }
                if tx.send(AutoSaveTick).is_err() {
                    break;
                }
            }
        });
        debug!("auto-save every {interval:?}");
        (Self { handle }, rx)
    }

    pub fn cancel(self) {
        drop(self);
    }
}

impl Drop for AutoSaveTicker {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
