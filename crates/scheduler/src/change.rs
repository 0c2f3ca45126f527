//! Snapshot change detection
//!
//! The scheduler decides whether a snapshot is "new" by comparing
//! fingerprints of its serialized form, not by identity. Two snapshots that
//! serialize to the same bytes are the same state as far as saving is
//! concerned.

use serde::Serialize;

/// Canonical serialized form of a snapshot, used as the comparison baseline
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fingerprint(String);

impl Fingerprint {
    /// The serialized form backing this fingerprint
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Strategy for deciding whether two snapshots represent the same state
///
/// Implementations must be deterministic: the same logical state must always
/// produce the same fingerprint, or change-skip degrades into spurious saves.
pub trait ChangeDetector<T>: Send + Sync {
    /// Compute the fingerprint of a snapshot
    fn fingerprint(&self, snapshot: &T) -> Result<Fingerprint, serde_json::Error>;
}

/// Default detector: serialize-and-compare via JSON
///
/// Serde derives emit struct fields in declaration order, so derived types
/// get stable fingerprints for free. A hand-written `Serialize` impl that
/// emits map entries in nondeterministic order will defeat change detection
/// (every observation looks new); such types need a custom detector.
#[derive(Debug, Clone, Copy, Default)]
pub struct SerializedDetector;

impl<T: Serialize> ChangeDetector<T> for SerializedDetector {
    fn fingerprint(&self, snapshot: &T) -> Result<Fingerprint, serde_json::Error> {
        Ok(Fingerprint(serde_json::to_string(snapshot)?))
    }
}
