//! Audio device capability
//!
//! Sound playback behind an injected device handle instead of a
//! lazily-constructed shared audio context, so the mute preference and the
//! device itself are both substitutable in tests.

use crate::prefs::PreferenceStore;
use anyhow::Result;
use parking_lot::Mutex;
use std::sync::Arc;
use tracing::debug;

/// Preference key consulted before any playback
pub const SOUND_ENABLED_KEY: &str = "sound_enabled";

/// Sound effects the application can trigger
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// State was saved
    SaveConfirm,
    /// User completed a gesture
    GestureComplete,
    /// Checkout finished
    PurchaseComplete,
}

/// Playback device handle
pub trait AudioDevice: Send + Sync {
    /// Play an effect to completion (fire-and-forget from the caller's view)
    fn play(&self, effect: SoundEffect) -> Result<()>;
}

/// Device fake that records what would have been played
#[derive(Default)]
pub struct NullAudio {
    played: Mutex<Vec<SoundEffect>>,
}

impl NullAudio {
    pub fn new() -> Self {
        Self::default()
    }

    /// Effects played so far, in order
    pub fn played(&self) -> Vec<SoundEffect> {
        self.played.lock().clone()
    }
}

impl AudioDevice for NullAudio {
    fn play(&self, effect: SoundEffect) -> Result<()> {
        self.played.lock().push(effect);
        Ok(())
    }
}

/// Playback gated by the user's sound preference
pub struct SoundPlayer {
    device: Arc<dyn AudioDevice>,
    prefs: Arc<dyn PreferenceStore>,
}

impl SoundPlayer {
    pub fn new(device: Arc<dyn AudioDevice>, prefs: Arc<dyn PreferenceStore>) -> Self {
        Self { device, prefs }
    }

    /// Play an effect unless the user has muted sounds
    ///
    /// Sound defaults to enabled when the preference was never set.
    pub fn play(&self, effect: SoundEffect) -> Result<()> {
        if !self.prefs.get_flag(SOUND_ENABLED_KEY, true) {
            debug!(?effect, "sound muted by preference");
            return Ok(());
        }
        self.device.play(effect)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prefs::MemoryPrefs;
    use serde_json::json;

    fn player() -> (Arc<NullAudio>, Arc<MemoryPrefs>, SoundPlayer) {
        let device = Arc::new(NullAudio::new());
        let prefs = Arc::new(MemoryPrefs::new());
        let player = SoundPlayer::new(device.clone(), prefs.clone());
        (device, prefs, player)
    }

    #[test]
    fn test_plays_when_preference_unset() {
        let (device, _prefs, player) = player();
        player.play(SoundEffect::SaveConfirm).unwrap();
        assert_eq!(device.played(), vec![SoundEffect::SaveConfirm]);
    }

    #[test]
    fn test_muted_preference_suppresses_playback() {
        let (device, prefs, player) = player();
        prefs.set(SOUND_ENABLED_KEY, json!(false)).unwrap();

        player.play(SoundEffect::GestureComplete).unwrap();
        assert!(device.played().is_empty());
    }

    #[test]
    fn test_unmuting_restores_playback() {
        let (device, prefs, player) = player();
        prefs.set(SOUND_ENABLED_KEY, json!(false)).unwrap();
        player.play(SoundEffect::SaveConfirm).unwrap();

        prefs.set(SOUND_ENABLED_KEY, json!(true)).unwrap();
        player.play(SoundEffect::PurchaseComplete).unwrap();

        assert_eq!(device.played(), vec![SoundEffect::PurchaseComplete]);
    }
}
