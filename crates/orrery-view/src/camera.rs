use orrery_base::{Error, Result, ensure_positive};
use orrery_geometry::{
    Quat, Ray, Rotation, Vec3, identity, is_finite_quat, is_finite_vec, look_rotation,
};

use super::screen::Point2;

/// World-space position and orientation of an orbitable object.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pose {
    pub position: Vec3,
    pub orientation: Quat,
}

impl Pose {
    pub fn new(position: Vec3, orientation: Quat) -> Self {
        Self {
            position,
            orientation,
        }
    }

    pub fn looking_at(position: Vec3, target: Vec3) -> Self {
        Self::new(position, look_rotation(position, target))
    }

    pub fn is_finite(&self) -> bool {
        is_finite_vec(self.position) && is_finite_quat(self.orientation)
    }
}

impl Default for Pose {
    fn default() -> Self {
        Self::new(Vec3::new(0.0, 0.0, 0.0), identity())
    }
}

/// Something the orbit machinery can move and turn: the camera itself, or
/// the tracking proxy that stands in for it during a transition.
pub trait OrbitSubject {
    fn position(&self) -> Vec3;
    fn set_position(&mut self, position: Vec3);
    fn orientation(&self) -> Quat;
    fn set_orientation(&mut self, orientation: Quat);

    /// Orientation facing `point` from the current position. Does not mutate.
    fn look_rotation(&self, point: Vec3) -> Quat {
        look_rotation(self.position(), point)
    }

    fn look_at(&mut self, point: Vec3) {
        let orientation = self.look_rotation(point);
        self.set_orientation(orientation);
    }

    fn pose(&self) -> Pose {
        Pose::new(self.position(), self.orientation())
    }
}

impl OrbitSubject for Pose {
    fn position(&self) -> Vec3 {
        self.position
    }

    fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }

    fn orientation(&self) -> Quat {
        self.orientation
    }

    fn set_orientation(&mut self, orientation: Quat) {
        self.orientation = orientation;
    }
}

/// Builds picking rays through normalized device coordinates.
pub trait RayCaster {
    fn ray_from_ndc(&self, ndc: Point2) -> Option<Ray>;

    /// Refits the projection to a canvas of the given width / height ratio.
    fn set_aspect_ratio(&mut self, aspect: f64) -> Result<()> {
        ensure_positive("aspect", aspect)
    }
}

#[derive(Clone, Debug)]
pub struct PerspectiveCamera {
    pose: Pose,
    fov_deg: f64,
    aspect: f64,
    near: f64,
    far: f64,
}

impl PerspectiveCamera {
    pub fn new(fov_deg: f64, aspect: f64, near: f64, far: f64) -> Result<Self> {
        ensure_positive("fov", fov_deg)?;
        if fov_deg >= 180.0 {
            return Err(Error::InvalidParameter(format!(
                "fov must be below 180 degrees, got {fov_deg}"
            )));
        }
        ensure_positive("aspect", aspect)?;
        ensure_positive("near", near)?;
        ensure_positive("far", far)?;
        if far <= near {
            return Err(Error::InvalidParameter(format!(
                "far plane ({far}) must lie beyond near plane ({near})"
            )));
        }
        Ok(Self {
            pose: Pose::default(),
            fov_deg,
            aspect,
            near,
            far,
        })
    }

    pub fn with_pose(mut self, pose: Pose) -> Self {
        self.pose = pose;
        self
    }

    pub fn fov_deg(&self) -> f64 {
        self.fov_deg
    }

    pub fn aspect(&self) -> f64 {
        self.aspect
    }

    pub fn set_aspect(&mut self, aspect: f64) -> Result<()> {
        ensure_positive("aspect", aspect)?;
        self.aspect = aspect;
        Ok(())
    }

    pub fn near(&self) -> f64 {
        self.near
    }

    pub fn far(&self) -> f64 {
        self.far
    }
}

impl OrbitSubject for PerspectiveCamera {
    fn position(&self) -> Vec3 {
        self.pose.position
    }

    fn set_position(&mut self, position: Vec3) {
        self.pose.position = position;
    }

    fn orientation(&self) -> Quat {
        self.pose.orientation
    }

    fn set_orientation(&mut self, orientation: Quat) {
        self.pose.orientation = orientation;
    }
}

impl RayCaster for PerspectiveCamera {
    fn ray_from_ndc(&self, ndc: Point2) -> Option<Ray> {
        if !ndc.is_finite() {
            return None;
        }
        let half = (self.fov_deg.to_radians() * 0.5).tan();
        let local = Vec3::new(ndc.x * half * self.aspect, ndc.y * half, -1.0);
        let direction = self.pose.orientation.rotate_vector(local);
        Ray::new(self.pose.position, direction)
    }

    fn set_aspect_ratio(&mut self, aspect: f64) -> Result<()> {
        self.set_aspect(aspect)
    }
}
