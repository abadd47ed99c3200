use std::f64::consts::PI;

use orrery_base::{Error, Result};
use orrery_geometry::{InnerSpace, Vec3, is_finite_vec};
use serde::{Deserialize, Serialize};

use super::camera::OrbitSubject;

const POLAR_EPSILON: f64 = 1.0e-6;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ControlFlags {
    pub pan: bool,
    pub zoom: bool,
    pub rotate: bool,
}

impl ControlFlags {
    pub const ALL: Self = Self {
        pan: true,
        zoom: true,
        rotate: true,
    };
    pub const NONE: Self = Self {
        pan: false,
        zoom: false,
        rotate: false,
    };
}

/// Which object the controls currently drive.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Attachment {
    Subject,
    Proxy,
}

/// Orbit-controls capability driven by the transition state machine.
///
/// Implementations own user orbit input and its damping. They never decide
/// when a transition starts or ends; the state machine flips the flags and the
/// attachment.
pub trait OrbitControl {
    fn target(&self) -> Vec3;
    fn set_target(&mut self, target: Vec3);
    fn flags(&self) -> ControlFlags;
    fn set_flags(&mut self, flags: ControlFlags);
    fn attachment(&self) -> Attachment;
    fn attach(&mut self, attachment: Attachment);
    /// Applies pending (damped) input to `tracked` and faces it at the target.
    fn update(&mut self, tracked: &mut dyn OrbitSubject);
    fn reset_damping(&mut self);

    /// Nearest offset from the target that `update` leaves in place once
    /// input has settled. Used to park transitions inside the control limits.
    fn clamp_offset(&self, offset: Vec3) -> Vec3 {
        offset
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ControlsConfig {
    /// Fraction of pending input applied per update; `None` applies it at once.
    pub damping: Option<f64>,
    pub min_distance: f64,
    pub max_distance: Option<f64>,
    pub min_polar: f64,
    pub max_polar: f64,
}

impl Default for ControlsConfig {
    fn default() -> Self {
        Self {
            damping: Some(0.05),
            min_distance: 0.0,
            max_distance: None,
            min_polar: 0.0,
            max_polar: PI,
        }
    }
}

impl ControlsConfig {
    pub fn validate(&self) -> Result<()> {
        if let Some(damping) = self.damping {
            if !(damping > 0.0 && damping <= 1.0) {
                return Err(Error::InvalidParameter(format!(
                    "damping must lie in (0, 1], got {damping}"
                )));
            }
        }
        if !self.min_distance.is_finite() || self.min_distance < 0.0 {
            return Err(Error::InvalidParameter(format!(
                "min_distance must be finite and non-negative, got {}",
                self.min_distance
            )));
        }
        if let Some(max) = self.max_distance {
            if max.is_nan() || max < self.min_distance {
                return Err(Error::InvalidParameter(format!(
                    "max_distance ({max}) must not be below min_distance ({})",
                    self.min_distance
                )));
            }
        }
        let polar_ok = (0.0..=PI).contains(&self.min_polar)
            && (0.0..=PI).contains(&self.max_polar)
            && self.min_polar <= self.max_polar;
        if !polar_ok {
            return Err(Error::InvalidParameter(format!(
                "polar limits must satisfy 0 <= min ({}) <= max ({}) <= pi",
                self.min_polar, self.max_polar
            )));
        }
        Ok(())
    }
}

/// Radius, polar angle from +Y, and azimuth around +Y measured from +Z.
#[derive(Clone, Copy, Debug)]
struct Spherical {
    radius: f64,
    phi: f64,
    theta: f64,
}

impl Spherical {
    fn from_offset(offset: Vec3) -> Self {
        let radius = offset.magnitude();
        if radius <= 0.0 || !radius.is_finite() {
            return Self {
                radius: 0.0,
                phi: 0.0,
                theta: 0.0,
            };
        }
        Self {
            radius,
            phi: (offset.y / radius).clamp(-1.0, 1.0).acos(),
            theta: offset.x.atan2(offset.z),
        }
    }

    fn to_offset(self) -> Vec3 {
        let sin_phi = self.phi.sin();
        Vec3::new(
            self.radius * sin_phi * self.theta.sin(),
            self.radius * self.phi.cos(),
            self.radius * sin_phi * self.theta.cos(),
        )
    }
}

/// Y-up orbit controls with optional exponential damping.
#[derive(Clone, Debug)]
pub struct OrbitControls {
    config: ControlsConfig,
    target: Vec3,
    flags: ControlFlags,
    attachment: Attachment,
    delta_theta: f64,
    delta_phi: f64,
    scale: f64,
    pan_offset: Vec3,
}

impl OrbitControls {
    pub fn new(config: ControlsConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            target: Vec3::new(0.0, 0.0, 0.0),
            flags: ControlFlags::ALL,
            attachment: Attachment::Subject,
            delta_theta: 0.0,
            delta_phi: 0.0,
            scale: 1.0,
            pan_offset: Vec3::new(0.0, 0.0, 0.0),
        })
    }

    pub fn with_target(mut self, target: Vec3) -> Self {
        self.target = target;
        self
    }

    pub fn config(&self) -> &ControlsConfig {
        &self.config
    }

    /// Queues an orbit around the target: azimuth about +Y, polar toward +Y.
    pub fn rotate(&mut self, azimuth: f64, polar: f64) {
        if !self.flags.rotate || !azimuth.is_finite() || !polar.is_finite() {
            return;
        }
        self.delta_theta += azimuth;
        self.delta_phi += polar;
    }

    /// Queues a distance change; factors above 1 move away from the target.
    pub fn dolly(&mut self, factor: f64) {
        if !self.flags.zoom || !factor.is_finite() || factor <= 0.0 {
            return;
        }
        self.scale *= factor;
    }

    /// Queues a world-space translation of the target and the tracked object.
    pub fn pan(&mut self, offset: Vec3) {
        if !self.flags.pan || !is_finite_vec(offset) {
            return;
        }
        self.pan_offset += offset;
    }

    pub fn has_pending_input(&self) -> bool {
        self.delta_theta != 0.0
            || self.delta_phi != 0.0
            || self.scale != 1.0
            || self.pan_offset.magnitude2() > 0.0
    }

    fn clamp_polar(&self, phi: f64) -> f64 {
        phi.clamp(self.config.min_polar, self.config.max_polar)
            .clamp(POLAR_EPSILON, PI - POLAR_EPSILON)
    }

    fn clamp_radius(&self, radius: f64) -> f64 {
        let radius = radius.max(self.config.min_distance);
        match self.config.max_distance {
            Some(max) => radius.min(max),
            None => radius,
        }
    }
}

impl OrbitControl for OrbitControls {
    fn target(&self) -> Vec3 {
        self.target
    }

    fn set_target(&mut self, target: Vec3) {
        self.target = target;
    }

    fn flags(&self) -> ControlFlags {
        self.flags
    }

    fn set_flags(&mut self, flags: ControlFlags) {
        self.flags = flags;
    }

    fn attachment(&self) -> Attachment {
        self.attachment
    }

    fn attach(&mut self, attachment: Attachment) {
        self.attachment = attachment;
    }

    fn update(&mut self, tracked: &mut dyn OrbitSubject) {
        let factor = self.config.damping.unwrap_or(1.0);
        let mut spherical = Spherical::from_offset(tracked.position() - self.target);

        spherical.theta += self.delta_theta * factor;
        spherical.phi = self.clamp_polar(spherical.phi + self.delta_phi * factor);
        spherical.radius = self.clamp_radius(spherical.radius * self.scale);

        self.target += self.pan_offset * factor;
        tracked.set_position(self.target + spherical.to_offset());
        tracked.look_at(self.target);

        if self.config.damping.is_some() {
            let keep = 1.0 - factor;
            self.delta_theta *= keep;
            self.delta_phi *= keep;
            self.pan_offset *= keep;
        } else {
            self.delta_theta = 0.0;
            self.delta_phi = 0.0;
            self.pan_offset = Vec3::new(0.0, 0.0, 0.0);
        }
        self.scale = 1.0;
    }

    fn reset_damping(&mut self) {
        self.delta_theta = 0.0;
        self.delta_phi = 0.0;
        self.scale = 1.0;
        self.pan_offset = Vec3::new(0.0, 0.0, 0.0);
    }

    fn clamp_offset(&self, offset: Vec3) -> Vec3 {
        let mut spherical = Spherical::from_offset(offset);
        spherical.phi = self.clamp_polar(spherical.phi);
        spherical.radius = self.clamp_radius(spherical.radius);
        spherical.to_offset()
    }
}
