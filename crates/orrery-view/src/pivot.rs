use orrery_geometry::{Quat, Vec3, identity};

/// Marker riding on the most recently picked orbit pivot. It copies the
/// camera orientation every frame so anything attached to it faces the viewer.
#[derive(Clone, Debug)]
pub struct PivotMarker {
    position: Vec3,
    orientation: Quat,
    placed: bool,
}

impl Default for PivotMarker {
    fn default() -> Self {
        Self {
            position: Vec3::new(0.0, 0.0, 0.0),
            orientation: identity(),
            placed: false,
        }
    }
}

impl PivotMarker {
    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn orientation(&self) -> Quat {
        self.orientation
    }

    pub fn is_placed(&self) -> bool {
        self.placed
    }

    pub fn set_pivot(&mut self, position: Vec3) {
        self.position = position;
        self.placed = true;
    }

    pub fn follow(&mut self, orientation: Quat) {
        self.orientation = orientation;
    }
}
