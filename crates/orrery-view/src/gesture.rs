use orrery_base::{Result, ensure_positive};

use super::screen::Point2;

pub const DEFAULT_CLICK_THRESHOLD: f64 = 0.05;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Gesture {
    /// Press and release landed close together; carries the release point.
    Click(Point2),
    Drag,
}

#[derive(Clone, Copy, Debug)]
struct PressSample {
    position: Point2,
    time: f64,
}

/// Tells an intentional click from an orbit drag by pointer travel in NDC.
#[derive(Clone, Debug)]
pub struct GestureClassifier {
    threshold: f64,
    max_click_duration: Option<f64>,
    press: Option<PressSample>,
}

impl Default for GestureClassifier {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_CLICK_THRESHOLD,
            max_click_duration: None,
            press: None,
        }
    }
}

impl GestureClassifier {
    pub fn new(threshold: f64, max_click_duration: Option<f64>) -> Result<Self> {
        ensure_positive("click threshold", threshold)?;
        if let Some(duration) = max_click_duration {
            ensure_positive("max click duration", duration)?;
        }
        Ok(Self {
            threshold,
            max_click_duration,
            press: None,
        })
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn is_pressed(&self) -> bool {
        self.press.is_some()
    }

    pub fn on_press(&mut self, position: Point2, time: f64) {
        self.press = Some(PressSample { position, time });
    }

    pub fn on_release(&mut self, position: Point2, time: f64) -> Gesture {
        let Some(press) = self.press.take() else {
            return Gesture::Drag;
        };
        if !press.position.is_finite() || !position.is_finite() {
            return Gesture::Drag;
        }
        if let Some(max_hold) = self.max_click_duration {
            let held = time - press.time;
            if !held.is_finite() || held > max_hold {
                return Gesture::Drag;
            }
        }
        if position.distance(press.position) < self.threshold {
            Gesture::Click(position)
        } else {
            Gesture::Drag
        }
    }

    /// Forgets a pending press, e.g. when the pointer left the canvas.
    pub fn reset(&mut self) {
        self.press = None;
    }
}
