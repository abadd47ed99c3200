use serde::{Deserialize, Serialize};

/// Monotonic C¹ curves mapping progress in `[0, 1]` onto `[0, 1]`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Easing {
    #[default]
    Smoothstep,
    Smootherstep,
    SquaredSmoothstep,
}

impl Easing {
    /// Input is clamped to `[0, 1]`; NaN maps to 0.
    pub fn apply(self, t: f64) -> f64 {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        match self {
            Self::Smoothstep => smoothstep(t),
            Self::Smootherstep => t * t * t * (t * (t * 6.0 - 15.0) + 10.0),
            Self::SquaredSmoothstep => {
                let s = smoothstep(t);
                s * s
            }
        }
    }
}

fn smoothstep(t: f64) -> f64 {
    t * t * (3.0 - 2.0 * t)
}
