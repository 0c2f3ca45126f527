//! Scheduler error types

use thiserror::Error;

/// Errors surfaced by the autosave scheduler
///
/// The scheduler itself performs no validation beyond what the type system
/// already rules out (the delay is a `Duration`, so a negative value is
/// unrepresentable). Everything here originates in a collaborator: the
/// snapshot's `Serialize` impl or the save sink.
#[derive(Error, Debug)]
pub enum SchedulerError {
    /// Snapshot could not be fingerprinted for change detection
    #[error("failed to fingerprint snapshot: {0}")]
    Fingerprint(#[from] serde_json::Error),

    /// Manual flush invoked the save sink and it failed
    ///
    /// Only `save_now` surfaces this; a deferred save that fails is logged
    /// and dropped (fire-and-forget, callers layer retries into their sink
    /// if they need them).
    #[error("save sink failed: {0}")]
    Save(#[source] anyhow::Error),
}
