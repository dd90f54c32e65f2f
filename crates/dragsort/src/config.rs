#![forbid(unsafe_code)]

//! Reorder configuration as data.
//!
//! Every tunable of the gesture controller lives in [`ReorderConfig`], which
//! can be loaded from TOML or JSON so hosts can adjust thresholds without a
//! rebuild. Durations are written as integer milliseconds.
//!
//! ```toml
//! axis = "vertical"
//! mouse_drag_threshold = 5.0
//! long_press_ms = 250
//!
//! [auto_scroll]
//! edge_band = 40.0
//! step = 8.0
//! ```
//!
//! # Defaults
//!
//! `ReorderConfig::default()` reproduces the control panel's behaviour:
//! 5 px mouse/pen threshold, 10 px touch threshold, 250 ms long press,
//! 300 ms double-press guard, 100 ms reflow.

use std::path::Path;
use std::time::Duration;

use dragsort_core::Axis;
use dragsort_core::animation::Easing;
use dragsort_core::logging::TARGET_CONFIG;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Default mouse/pen drag threshold in pixels.
pub const DEFAULT_MOUSE_DRAG_THRESHOLD: f32 = 5.0;
/// Default touch drag threshold in pixels.
pub const DEFAULT_TOUCH_DRAG_THRESHOLD: f32 = 10.0;
/// Default long-press delay.
pub const DEFAULT_LONG_PRESS: Duration = Duration::from_millis(250);
/// Default window in which a second press is treated as a double click.
pub const DEFAULT_DOUBLE_PRESS_WINDOW: Duration = Duration::from_millis(300);
/// Default window after a drag in which the host should swallow a click.
pub const DEFAULT_CLICK_SUPPRESS_WINDOW: Duration = Duration::from_millis(200);
/// Default reflow animation duration.
pub const DEFAULT_REFLOW_DURATION: Duration = Duration::from_millis(100);

/// Top-level configuration for a [`crate::ReorderController`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReorderConfig {
    /// List stacking direction.
    pub axis: Axis,

    /// Mouse/pen travel (px, exclusive) before a press becomes a drag.
    pub mouse_drag_threshold: f32,

    /// Touch travel (px, exclusive) that abandons a press as a scroll.
    pub touch_drag_threshold: f32,

    /// Minimum time since press before motion may start a drag.
    #[serde(rename = "min_press_ms", with = "millis")]
    pub min_press_duration: Duration,

    /// Hold time that promotes a press to a drag. `None` disables the long
    /// press, which also means touch input can never drag.
    #[serde(rename = "long_press_ms", with = "optional_millis")]
    pub long_press: Option<Duration>,

    /// A press this soon after the previous accepted press is ignored.
    #[serde(rename = "double_press_ms", with = "millis")]
    pub double_press_window: Duration,

    /// How long after a drag ends clicks should be suppressed.
    #[serde(rename = "click_suppress_ms", with = "millis")]
    pub click_suppress_window: Duration,

    /// Sibling reflow animation.
    pub reflow: ReflowConfig,

    /// Edge auto-scroll while dragging.
    pub auto_scroll: AutoScrollConfig,
}

impl Default for ReorderConfig {
    fn default() -> Self {
        Self {
            axis: Axis::Vertical,
            mouse_drag_threshold: DEFAULT_MOUSE_DRAG_THRESHOLD,
            touch_drag_threshold: DEFAULT_TOUCH_DRAG_THRESHOLD,
            min_press_duration: Duration::ZERO,
            long_press: Some(DEFAULT_LONG_PRESS),
            double_press_window: DEFAULT_DOUBLE_PRESS_WINDOW,
            click_suppress_window: DEFAULT_CLICK_SUPPRESS_WINDOW,
            reflow: ReflowConfig::default(),
            auto_scroll: AutoScrollConfig::default(),
        }
    }
}

/// Reflow animation parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReflowConfig {
    /// Time for a sibling to travel to a new target offset.
    #[serde(rename = "duration_ms", with = "millis")]
    pub duration: Duration,
    pub easing: Easing,
}

impl Default for ReflowConfig {
    fn default() -> Self {
        Self {
            duration: DEFAULT_REFLOW_DURATION,
            easing: Easing::EaseOut,
        }
    }
}

/// Auto-scroll parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AutoScrollConfig {
    pub enabled: bool,
    /// Distance from a viewport edge (px) that triggers scrolling.
    pub edge_band: f32,
    /// Time between scroll steps.
    #[serde(rename = "interval_ms", with = "millis")]
    pub interval: Duration,
    /// Scroll distance per step (px).
    pub step: f32,
}

impl Default for AutoScrollConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            edge_band: 40.0,
            interval: Duration::from_millis(16),
            step: 8.0,
        }
    }
}

impl ReorderConfig {
    /// Load from a TOML string and validate.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validated()
    }

    /// Load from a TOML file on disk and validate.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&content)
    }

    /// Load from a JSON string and validate.
    pub fn from_json_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(s)?;
        config.validated()
    }

    /// Load from a JSON file on disk and validate.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_json_str(&content)
    }

    /// Serialize to a single-line JSON string.
    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Check every parameter, collecting all violations.
    ///
    /// An empty list means the config is valid.
    #[must_use]
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if !(self.mouse_drag_threshold.is_finite() && self.mouse_drag_threshold >= 0.0) {
            errors.push(format!(
                "mouse_drag_threshold must be finite and >= 0, got {}",
                self.mouse_drag_threshold
            ));
        }
        if !(self.touch_drag_threshold.is_finite() && self.touch_drag_threshold >= 0.0) {
            errors.push(format!(
                "touch_drag_threshold must be finite and >= 0, got {}",
                self.touch_drag_threshold
            ));
        }
        if self.long_press.is_some_and(|d| d.is_zero()) {
            errors.push("long_press_ms must be > 0 when set".into());
        }
        if self.auto_scroll.enabled {
            if !(self.auto_scroll.edge_band.is_finite() && self.auto_scroll.edge_band >= 0.0) {
                errors.push(format!(
                    "auto_scroll.edge_band must be finite and >= 0, got {}",
                    self.auto_scroll.edge_band
                ));
            }
            if !(self.auto_scroll.step.is_finite() && self.auto_scroll.step > 0.0) {
                errors.push(format!(
                    "auto_scroll.step must be finite and > 0, got {}",
                    self.auto_scroll.step
                ));
            }
            if self.auto_scroll.interval.is_zero() {
                errors.push("auto_scroll.interval_ms must be > 0".into());
            }
        }

        errors
    }

    fn validated(self) -> Result<Self, ConfigError> {
        let errors = self.validate();
        if errors.is_empty() {
            tracing::debug!(
                target: TARGET_CONFIG,
                axis = ?self.axis,
                long_press_ms = self.long_press.map(|d| d.as_millis() as u64),
                "reorder config loaded"
            );
            Ok(self)
        } else {
            tracing::warn!(
                target: TARGET_CONFIG,
                error_count = errors.len(),
                "reorder config rejected"
            );
            Err(ConfigError::Validation(errors))
        }
    }

    /// Validate, returning the config unchanged on success.
    pub fn check(self) -> Result<Self, ConfigError> {
        self.validated()
    }
}

mod millis {
    use std::time::Duration;

    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u64(u64::try_from(value.as_millis()).unwrap_or(u64::MAX))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        u64::deserialize(deserializer).map(Duration::from_millis)
    }
}

mod optional_millis {
    use std::time::Duration;

    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(
        value: &Option<Duration>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match value {
            Some(d) => serializer.serialize_some(&u64::try_from(d.as_millis()).unwrap_or(u64::MAX)),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<Duration>, D::Error> {
        Option::<u64>::deserialize(deserializer).map(|ms| ms.map(Duration::from_millis))
    }
}
