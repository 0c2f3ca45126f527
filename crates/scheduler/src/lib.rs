//! Debounced autosave scheduling
//!
//! This crate provides the save scheduler used to persist application state:
//! - Change detection via snapshot fingerprinting (skip redundant saves)
//! - Full debounce: one save per quiescence window, never more
//! - First-observation suppression (freshly loaded state is not re-saved)
//! - Manual flush that bypasses change detection and cancels pending work
//!
//! The save effect itself is an opaque collaborator behind the [`SaveSink`]
//! trait; how and where data is persisted is the owner's concern.

pub mod change;
pub mod config;
pub mod debounce;
pub mod error;
pub mod sink;

// Re-exports
pub use change::{ChangeDetector, Fingerprint, SerializedDetector};
pub use config::AutosaveConfig;
pub use debounce::AutosaveScheduler;
pub use error::SchedulerError;
pub use sink::{SaveSink, SinkFn};

/// Result type for scheduler operations
pub type Result<T> = std::result::Result<T, SchedulerError>;
