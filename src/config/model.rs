use std::time::Duration;

use crate::foundation::error::{SlideshowError, SlideshowResult};

/// Slideshow configuration.
///
/// The serialized form is a flat mapping with camelCase keys. Unknown keys
/// are ignored and missing keys take the defaults documented per field.
/// A configuration is immutable once handed to [`crate::Slideshow::initialize`].
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Config {
    /// Stacking order of the active slot; the pending slot sits one below.
    /// Default `-9999`.
    pub z_index_base: i32,
    /// Drive autoplay from the ticker's completion instead of a fixed timer.
    /// Default `false`.
    pub show_ticker: bool,
    /// Start playing as soon as every image has loaded. Default `true`.
    pub autoplay: bool,
    /// Delay between the end of one transition and the start of the next.
    /// Default `3000`.
    pub autoplay_timeout_ms: u64,
    /// Effect used for images without a per-image override. Default `"fadeOut"`.
    pub default_effect_name: String,
    /// Duration of each visual transition. Default `1000`.
    pub effect_duration_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            z_index_base: -9999,
            show_ticker: false,
            autoplay: true,
            autoplay_timeout_ms: 3000,
            default_effect_name: "fadeOut".to_string(),
            effect_duration_ms: 1000,
        }
    }
}

impl Config {
    /// Parse a configuration from a JSON object.
    pub fn from_json(s: &str) -> SlideshowResult<Self> {
        serde_json::from_str(s).map_err(|e| SlideshowError::serde(e.to_string()))
    }

    /// Build from an already parsed JSON value.
    pub fn from_value(v: serde_json::Value) -> SlideshowResult<Self> {
        serde_json::from_value(v).map_err(|e| SlideshowError::serde(e.to_string()))
    }

    /// Set [`Config::z_index_base`].
    pub fn with_z_index_base(mut self, z: i32) -> Self {
        self.z_index_base = z;
        self
    }

    /// Set [`Config::show_ticker`].
    pub fn with_ticker(mut self, show: bool) -> Self {
        self.show_ticker = show;
        self
    }

    /// Set [`Config::autoplay`].
    pub fn with_autoplay(mut self, autoplay: bool) -> Self {
        self.autoplay = autoplay;
        self
    }

    /// Set [`Config::autoplay_timeout_ms`].
    pub fn with_autoplay_timeout_ms(mut self, ms: u64) -> Self {
        self.autoplay_timeout_ms = ms;
        self
    }

    /// Set [`Config::default_effect_name`].
    pub fn with_default_effect(mut self, name: impl Into<String>) -> Self {
        self.default_effect_name = name.into();
        self
    }

    /// Set [`Config::effect_duration_ms`].
    pub fn with_effect_duration_ms(mut self, ms: u64) -> Self {
        self.effect_duration_ms = ms;
        self
    }

    /// Autoplay delay as a [`Duration`].
    pub fn autoplay_timeout(&self) -> Duration {
        Duration::from_millis(self.autoplay_timeout_ms)
    }

    /// Transition duration as a [`Duration`].
    pub fn effect_duration(&self) -> Duration {
        Duration::from_millis(self.effect_duration_ms)
    }

    /// Reject values the controller cannot run with.
    ///
    /// The default effect name is only checked for blankness; whether it
    /// names a registered effect is decided when an advance first needs it.
    pub fn validate(&self) -> SlideshowResult<()> {
        if self.default_effect_name.trim().is_empty() {
            return Err(SlideshowError::invalid_input(
                "defaultEffectName must be non-empty",
            ));
        }
        if self.autoplay_timeout_ms == 0 {
            return Err(SlideshowError::invalid_input(
                "autoplayTimeoutMs must be > 0",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/config/model.rs"]
mod tests;
