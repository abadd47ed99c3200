use super::screen::Point2;

/// Pointer press or release in client pixels. `time` is in seconds on the
/// host's clock.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerEvent {
    pub position: Point2,
    pub time: f64,
}

impl PointerEvent {
    pub const fn new(x: f64, y: f64, time: f64) -> Self {
        Self {
            position: Point2::new(x, y),
            time,
        }
    }
}
