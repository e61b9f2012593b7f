//! Loader configuration.

use serde::Deserialize;
use thiserror::Error;

use crate::timeline::Timeline;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid loader config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("phase duration `{name}` must be a non-negative number of milliseconds, got {value}")]
    NegativeDuration { name: &'static str, value: f64 },
    #[error("grace delay must be a non-negative number of milliseconds, got {0}")]
    InvalidGrace(f64),
    #[error("cross-fade must be a non-negative number of milliseconds, got {0}")]
    InvalidFade(f64),
    #[error("trail factor must lie in (0, 1], got {0}")]
    InvalidTrailFactor(f64),
    #[error("device pixel ratio cap must be at least 1, got {0}")]
    InvalidDprCap(f64),
}

/// Longest cross-fade the host page will wait for before unmounting.
pub const MAX_FADE_MS: f64 = 60_000.0;

/// Tunables for one loader. Every field has a default, so partial JSON such
/// as `{"timeline": {"hold_ms": 0}}` is valid.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LoaderConfig {
    pub timeline: Timeline,
    /// Delay between the end of the timeline and the completion callback.
    pub grace_ms: f64,
    pub max_device_pixel_ratio: f64,
    /// Progress scale of the inner letterform copy.
    pub trail_factor: f64,
    /// Cross-fade between loader and hero, used by the host page.
    pub fade_ms: f64,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            timeline: Timeline::default(),
            grace_ms: 80.0,
            max_device_pixel_ratio: 2.0,
            trail_factor: 0.92,
            fade_ms: 700.0,
        }
    }
}

impl LoaderConfig {
    /// Parse and validate a JSON document.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] on malformed JSON or out-of-range values.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// # Errors
    ///
    /// Returns the first out-of-range value found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let t = &self.timeline;
        for (name, value) in [
            ("grid_ms", t.grid_ms),
            ("scaffold_ms", t.scaffold_ms),
            ("letterform_ms", t.letterform_ms),
            ("hold_ms", t.hold_ms),
        ] {
            if !(value.is_finite() && value >= 0.0) {
                return Err(ConfigError::NegativeDuration { name, value });
            }
        }
        if !(self.grace_ms.is_finite() && self.grace_ms >= 0.0) {
            return Err(ConfigError::InvalidGrace(self.grace_ms));
        }
        if !(self.fade_ms.is_finite() && self.fade_ms >= 0.0 && self.fade_ms <= MAX_FADE_MS) {
            return Err(ConfigError::InvalidFade(self.fade_ms));
        }
        if !(self.trail_factor > 0.0 && self.trail_factor <= 1.0) {
            return Err(ConfigError::InvalidTrailFactor(self.trail_factor));
        }
        if !(self.max_device_pixel_ratio.is_finite() && self.max_device_pixel_ratio >= 1.0) {
            return Err(ConfigError::InvalidDprCap(self.max_device_pixel_ratio));
        }
        Ok(())
    }
}
