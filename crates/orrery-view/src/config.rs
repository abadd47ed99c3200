use std::fs;
use std::path::Path;

use orrery_base::{Error, Result, ensure_positive};
use orrery_geometry::Easing;
use serde::{Deserialize, Serialize};

use super::controls::ControlsConfig;
use super::gesture::DEFAULT_CLICK_THRESHOLD;

/// Tunables for click-to-orbit. Every field has a default, so partial JSON
/// documents are accepted.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrbitConfig {
    /// Seconds from the click until the camera settles on the new orbit.
    pub transition_duration: f64,
    /// Resting distance between camera and target after a transition.
    pub zoom_distance: f64,
    pub easing: Easing,
    /// Max pointer travel in NDC for a press/release pair to count as a click.
    pub click_threshold: f64,
    pub max_click_duration: Option<f64>,
    pub controls: ControlsConfig,
}

impl Default for OrbitConfig {
    fn default() -> Self {
        Self {
            transition_duration: 1.0,
            zoom_distance: 2.0,
            easing: Easing::Smoothstep,
            click_threshold: DEFAULT_CLICK_THRESHOLD,
            max_click_duration: None,
            controls: ControlsConfig::default(),
        }
    }
}

impl OrbitConfig {
    pub fn validate(&self) -> Result<()> {
        ensure_positive("transition_duration", self.transition_duration)?;
        ensure_positive("zoom_distance", self.zoom_distance)?;
        ensure_positive("click_threshold", self.click_threshold)?;
        if let Some(duration) = self.max_click_duration {
            ensure_positive("max_click_duration", duration)?;
        }
        self.controls.validate()?;

        let above_max = self
            .controls
            .max_distance
            .is_some_and(|max| self.zoom_distance > max);
        if self.zoom_distance < self.controls.min_distance || above_max {
            return Err(Error::InvalidParameter(format!(
                "zoom_distance ({}) must lie within the controls' distance limits",
                self.zoom_distance
            )));
        }
        Ok(())
    }

    pub fn from_json_str(text: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
