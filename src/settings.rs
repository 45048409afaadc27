//! Game settings and preferences
//!
//! Read once at startup: LocalStorage in the browser, an environment
//! variable natively. Both hold the same JSON object; missing fields take
//! their defaults.

use serde::{Deserialize, Serialize};

use crate::consts::TICK_RATE_HZ;

/// Accepted simulation rates
const TICK_RATE_RANGE: (u32, u32) = (10, 240);

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Simulation ticks per second
    pub tick_rate_hz: u32,
    /// Fixed session seed (None = time based)
    pub seed: Option<u64>,
    /// Show FPS counter
    pub show_fps: bool,
    /// Start with the autopilot driving
    pub idle_mode: bool,
    /// Native build only: how many ticks the headless demo runs
    pub demo_ticks: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            tick_rate_hz: TICK_RATE_HZ,
            seed: None,
            show_fps: false,
            idle_mode: false,
            demo_ticks: 60 * TICK_RATE_HZ as u64,
        }
    }
}

impl Settings {
    /// LocalStorage key / environment variable
    pub const STORAGE_KEY: &'static str = "tank_battle_settings";
    pub const ENV_VAR: &'static str = "TANK_BATTLE_SETTINGS";

    /// Parse from JSON and clamp out-of-range values
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let settings: Settings = serde_json::from_str(json)?;
        Ok(settings.sanitized())
    }

    /// Clamp values into their supported ranges
    pub fn sanitized(mut self) -> Self {
        let (lo, hi) = TICK_RATE_RANGE;
        if !(lo..=hi).contains(&self.tick_rate_hz) {
            log::warn!(
                "tick_rate_hz {} out of range, clamping to {}..={}",
                self.tick_rate_hz,
                lo,
                hi
            );
            self.tick_rate_hz = self.tick_rate_hz.clamp(lo, hi);
        }
        self
    }

    /// Parse if present, falling back to defaults on any error
    fn from_source(json: Option<String>) -> Self {
        match json {
            Some(json) => match Self::from_json(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings: {:?}", settings);
                    settings
                }
                Err(e) => {
                    log::warn!("Ignoring malformed settings ({}), using defaults", e);
                    Self::default()
                }
            },
            None => {
                log::info!("Using default settings");
                Self::default()
            }
        }
    }

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let json = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten()
            .and_then(|storage| storage.get_item(Self::STORAGE_KEY).ok())
            .flatten();
        Self::from_source(json)
    }

    /// Load settings from the environment (native)
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::from_source(std::env::var(Self::ENV_VAR).ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_uses_defaults() {
        let settings = Settings::from_json(r#"{ "seed": 42, "show_fps": true }"#).unwrap();
        assert_eq!(settings.seed, Some(42));
        assert!(settings.show_fps);
        assert_eq!(settings.tick_rate_hz, TICK_RATE_HZ);
        assert!(!settings.idle_mode);
    }

    #[test]
    fn test_tick_rate_clamped() {
        let settings = Settings::from_json(r#"{ "tick_rate_hz": 1000 }"#).unwrap();
        assert_eq!(settings.tick_rate_hz, 240);
        let settings = Settings::from_json(r#"{ "tick_rate_hz": 0 }"#).unwrap();
        assert_eq!(settings.tick_rate_hz, 10);
    }

    #[test]
    fn test_malformed_falls_back() {
        assert!(Settings::from_json("{ not json").is_err());
        assert_eq!(
            Settings::from_source(Some("[1, 2]".to_string())),
            Settings::default()
        );
        assert_eq!(Settings::from_source(None), Settings::default());
    }

    #[test]
    fn test_round_trip_defaults() {
        let json = serde_json::to_string(&Settings::default()).unwrap();
        assert_eq!(Settings::from_json(&json).unwrap(), Settings::default());
    }
}
