//! Cosmetic upload progress for long-running batch requests.
//!
//! The meter is not tied to real upload progress: it advances on a fixed
//! interval while the request is in flight, stops at a cap, and only
//! reaches 100% once a successful response has arrived.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Progress timing settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressSettings {
    /// Tick interval in milliseconds (default: 200)
    #[serde(default = "default_interval_ms")]
    pub interval_ms: u64,

    /// Percentage points added per tick (default: 5)
    #[serde(default = "default_step_percent")]
    pub step_percent: u8,

    /// Highest value reached before the response (default: 90)
    #[serde(default = "default_cap_percent")]
    pub cap_percent: u8,
}

fn default_interval_ms() -> u64 {
    200
}
fn default_step_percent() -> u8 {
    5
}
fn default_cap_percent() -> u8 {
    90
}

impl Default for ProgressSettings {
    fn default() -> Self {
        Self {
            interval_ms: default_interval_ms(),
            step_percent: default_step_percent(),
            cap_percent: default_cap_percent(),
        }
    }
}

impl ProgressSettings {
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms.max(1))
    }
}

/// Current position of the meter
#[derive(Debug, Clone)]
pub struct ProgressMeter {
    settings: ProgressSettings,
    percent: u8,
}

impl ProgressMeter {
    pub fn new(settings: ProgressSettings) -> Self {
        Self {
            settings,
            percent: 0,
        }
    }

    pub fn percent(&self) -> u8 {
        self.percent
    }

    pub fn settings(&self) -> &ProgressSettings {
        &self.settings
    }

    /// Advance one tick; `None` once the cap is reached
    pub fn advance(&mut self) -> Option<u8> {
        let cap = self.settings.cap_percent.min(99);
        if self.percent >= cap {
            return None;
        }
        self.percent = self.percent.saturating_add(self.settings.step_percent).min(cap);
        Some(self.percent)
    }

    /// Snap to 100% after a successful response
    pub fn complete(&mut self) -> u8 {
        self.percent = 100;
        self.percent
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = ProgressSettings::default();
        assert_eq!(settings.interval(), Duration::from_millis(200));
        assert_eq!(settings.step_percent, 5);
        assert_eq!(settings.cap_percent, 90);
    }

    #[test]
    fn test_meter_stops_at_cap() {
        let mut meter = ProgressMeter::new(ProgressSettings::default());
        let ticks: Vec<u8> = std::iter::from_fn(|| meter.advance()).collect();

        assert_eq!(ticks.len(), 18);
        assert_eq!(ticks.first(), Some(&5));
        assert_eq!(ticks.last(), Some(&90));
        assert_eq!(meter.advance(), None);
        assert_eq!(meter.percent(), 90);
    }

    #[test]
    fn test_uneven_step_clamps_to_cap() {
        let mut meter = ProgressMeter::new(ProgressSettings {
            step_percent: 40,
            ..Default::default()
        });

        assert_eq!(meter.advance(), Some(40));
        assert_eq!(meter.advance(), Some(80));
        assert_eq!(meter.advance(), Some(90));
        assert_eq!(meter.advance(), None);
    }

    #[test]
    fn test_cap_never_reaches_hundred() {
        let mut meter = ProgressMeter::new(ProgressSettings {
            cap_percent: 100,
            step_percent: 50,
            ..Default::default()
        });

        while meter.advance().is_some() {}
        assert_eq!(meter.percent(), 99);
        assert_eq!(meter.complete(), 100);
    }

    #[test]
    fn test_partial_yaml() {
        let settings: ProgressSettings = serde_yaml::from_str("interval_ms: 50").unwrap();
        assert_eq!(settings.interval_ms, 50);
        assert_eq!(settings.cap_percent, 90);
    }
}
