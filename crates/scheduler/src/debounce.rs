//! Debounced save scheduling
//!
//! Collapses a stream of state snapshots into at most one save per
//! quiescence window, skips saves when nothing actually changed, and
//! suppresses the save that the very first observation would otherwise
//! trigger (freshly loaded state was never modified by the user).

use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use serde::Serialize;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::change::{ChangeDetector, Fingerprint, SerializedDetector};
use crate::config::AutosaveConfig;
use crate::error::SchedulerError;
use crate::sink::SaveSink;
use crate::Result;

/// Debounce-and-change-detection save scheduler
///
/// Owned by a single component (not `Clone`); dropping it cancels any
/// pending deferred save, so no save can fire after teardown.
///
/// `observe` is expected on every logical state transition, redundant calls
/// included. `save_now` is the manual flush: it always fires, bypassing
/// change detection, and cancels pending deferred work first.
pub struct AutosaveScheduler<T> {
    shared: Arc<Mutex<State<T>>>,
    detector: Arc<dyn ChangeDetector<T>>,
}

/// Mutable scheduler state, guarded by the instance's mutex
///
/// Invariants:
/// - at most one pending timer exists at any instant
/// - `last_saved` advances exactly when a save commits, never before
struct State<T> {
    sink: Arc<dyn SaveSink<T>>,
    delay: Duration,
    /// Baseline for change detection; `None` until the first observation
    last_saved: Option<Fingerprint>,
    /// Set by the first observation; gates first-save suppression
    initialized: bool,
    /// The one outstanding deferred-save timer, if any
    pending: Option<JoinHandle<()>>,
    /// Bumped on every cancel/reschedule; a woken timer task re-checks this
    /// under the lock so an abort that lost the race still cannot commit
    epoch: u64,
}

impl<T> State<T> {
    /// Abort the pending timer (if any) and invalidate in-flight epochs
    fn cancel_pending(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
        self.epoch = self.epoch.wrapping_add(1);
    }
}

impl<T: Serialize + Send + 'static> AutosaveScheduler<T> {
    /// Create a scheduler with the default serialize-and-compare detector
    pub fn new(sink: Arc<dyn SaveSink<T>>, config: AutosaveConfig) -> Self {
        Self::with_detector(sink, config, Arc::new(SerializedDetector))
    }
}

impl<T: Send + 'static> AutosaveScheduler<T> {
    /// Create a scheduler with a custom change detector
    pub fn with_detector(
        sink: Arc<dyn SaveSink<T>>,
        config: AutosaveConfig,
        detector: Arc<dyn ChangeDetector<T>>,
    ) -> Self {
        Self {
            shared: Arc::new(Mutex::new(State {
                sink,
                delay: config.delay,
                last_saved: None,
                initialized: false,
                pending: None,
                epoch: 0,
            })),
            detector,
        }
    }

    /// Feed the current snapshot to the scheduler
    ///
    /// The first observation only records the baseline. Afterwards, an
    /// unchanged snapshot is a no-op (a pending timer from an earlier change
    /// is left running), and a changed one restarts the quiescence window:
    /// the previous timer is cancelled and a new `delay` starts against this
    /// snapshot. When the window elapses the snapshot captured here is
    /// committed and handed to the sink.
    pub fn observe(&self, snapshot: T) -> Result<()> {
        let fingerprint = self.detector.fingerprint(&snapshot)?;
        let mut state = self.shared.lock();

        if !state.initialized {
            state.initialized = true;
            state.last_saved = Some(fingerprint);
            debug!("first observation recorded, save suppressed");
            return Ok(());
        }

        if state.last_saved.as_ref() == Some(&fingerprint) {
            debug!("snapshot unchanged, skipping");
            return Ok(());
        }

        state.cancel_pending();
        let epoch = state.epoch;
        let delay = state.delay;
        let shared = Arc::clone(&self.shared);

        state.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            commit_deferred(shared, epoch, fingerprint, snapshot).await;
        }));
        debug!(delay_ms = delay.as_millis() as u64, "deferred save scheduled");

        Ok(())
    }

    /// Immediate manual flush
    ///
    /// Cancels any pending deferred save, then invokes the sink with this
    /// snapshot right away — even if it equals the last saved one. Sink
    /// failures propagate to the caller; the baseline has already advanced
    /// either way (last-write-wins bookkeeping, no rollback).
    pub async fn save_now(&self, snapshot: T) -> Result<()> {
        let fingerprint = self.detector.fingerprint(&snapshot)?;
        let sink = {
            let mut state = self.shared.lock();
            state.cancel_pending();
            state.initialized = true;
            state.last_saved = Some(fingerprint);
            Arc::clone(&state.sink)
        };

        sink.save(snapshot).await.map_err(SchedulerError::Save)
    }

    /// Replace the quiescence window
    ///
    /// Cancels the pending timer: the old window must not fire against the
    /// old delay once the owner has rebound it.
    pub fn set_delay(&self, delay: Duration) {
        let mut state = self.shared.lock();
        state.cancel_pending();
        state.delay = delay;
    }

    /// Replace the save sink
    ///
    /// Cancels the pending timer so a stale timer can never invoke the old
    /// sink against an old closed-over snapshot.
    pub fn set_sink(&self, sink: Arc<dyn SaveSink<T>>) {
        let mut state = self.shared.lock();
        state.cancel_pending();
        state.sink = sink;
    }

    /// Cancel any pending deferred save
    ///
    /// Also runs on `Drop`; explicit calls are for owners that tear down
    /// before dropping.
    pub fn shutdown(&self) {
        self.shared.lock().cancel_pending();
    }

    /// Whether a deferred save is currently scheduled
    pub fn has_pending_save(&self) -> bool {
        self.shared.lock().pending.is_some()
    }
}

impl<T> Drop for AutosaveScheduler<T> {
    fn drop(&mut self) {
        self.shared.lock().cancel_pending();
    }
}

/// Commit path for a fired timer: advance the baseline under the lock, then
/// invoke the sink outside it
async fn commit_deferred<T: Send + 'static>(
    shared: Arc<Mutex<State<T>>>,
    epoch: u64,
    fingerprint: Fingerprint,
    snapshot: T,
) {
    let sink = {
        let mut state = shared.lock();
        if state.epoch != epoch {
            // Superseded between wake-up and lock acquisition
            return;
        }
        state.pending = None;
        state.last_saved = Some(fingerprint);
        Arc::clone(&state.sink)
    };

    if let Err(e) = sink.save(snapshot).await {
        warn!("deferred save failed: {e:#}");
    }
}
