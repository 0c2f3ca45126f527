//! Scheduler configuration

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default quiescence window (1 second)
pub const DEFAULT_DELAY: Duration = Duration::from_millis(1000);

/// Configuration for an [`AutosaveScheduler`](crate::AutosaveScheduler)
///
/// A negative delay is unrepresentable (`Duration` is unsigned). A zero
/// delay is accepted and means the deferred save fires on the next timer
/// tick, which still preserves cancel-and-replace semantics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AutosaveConfig {
    /// Quiescence window: how long the snapshot stream must stay quiet
    /// before a deferred save fires
    #[serde(with = "duration_ms", default = "default_delay")]
    pub delay: Duration,
}

impl AutosaveConfig {
    /// Create a config with the default 1000ms delay
    pub fn new() -> Self {
        Self {
            delay: DEFAULT_DELAY,
        }
    }

    /// Set the quiescence window
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

impl Default for AutosaveConfig {
    fn default() -> Self {
        Self::new()
    }
}

fn default_delay() -> Duration {
    DEFAULT_DELAY
}

/// Serialize the delay as integer milliseconds so configs read naturally
/// (`delay = 1000`)
mod duration_ms {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S: Serializer>(d: &Duration, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_u64(d.as_millis() as u64)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Duration, D::Error> {
        let ms = u64::deserialize(d)?;
        Ok(Duration::from_millis(ms))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_delay_is_one_second() {
        let config = AutosaveConfig::default();
        assert_eq!(config.delay, Duration::from_millis(1000));
    }

    #[test]
    fn test_with_delay() {
        let config = AutosaveConfig::new().with_delay(Duration::from_millis(250));
        assert_eq!(config.delay, Duration::from_millis(250));
    }

    #[test]
    fn test_deserialize_millis() {
        let config: AutosaveConfig = serde_json::from_str(r#"{"delay": 250}"#).unwrap();
        assert_eq!(config.delay, Duration::from_millis(250));
    }

    #[test]
    fn test_deserialize_missing_delay_uses_default() {
        let config: AutosaveConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config.delay, DEFAULT_DELAY);
    }

    #[test]
    fn test_serialize_roundtrip() {
        let config = AutosaveConfig::new().with_delay(Duration::from_millis(42));
        let json = serde_json::to_string(&config).unwrap();
        let back: AutosaveConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back.delay, config.delay);
    }
}
