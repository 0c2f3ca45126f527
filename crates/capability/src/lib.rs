//! Injected collaborator capabilities
//!
//! The utilities that sit around the autosave scheduler (preference flags,
//! sound playback, checkout) are modeled as explicit capabilities handed to
//! whatever component needs them, instead of process-wide mutable
//! singletons. Each seam ships a test-friendly in-memory or stub
//! implementation; real backends live with the embedding application.

pub mod audio;
pub mod checkout;
pub mod prefs;

// Re-exports
pub use audio::{AudioDevice, NullAudio, SoundEffect, SoundPlayer};
pub use checkout::{CheckoutError, CheckoutService, CheckoutSession, StubCheckout};
pub use prefs::{MemoryPrefs, PreferenceStore};
