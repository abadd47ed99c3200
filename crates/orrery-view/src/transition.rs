use orrery_base::{Error, Result, ensure_positive};
use orrery_geometry::{
    Easing, InnerSpace, Quat, Vec3, backward, is_finite_vec, lerp, safe_normalize,
    slerp_direction, up,
};
use tracing::{debug, trace, warn};

use super::camera::{OrbitSubject, Pose};
use super::config::OrbitConfig;
use super::controls::{Attachment, ControlFlags, OrbitControl, OrbitControls};

/// Targets closer than this to the current one count as unchanged.
const TARGET_EPSILON: f64 = 1.0e-9;

/// Snapshot taken when a transition starts.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TransitionState {
    pub elapsed: f64,
    pub start_orientation: Quat,
    pub start_distance: f64,
    /// Unit direction from the new target to the subject at start.
    pub start_direction: Vec3,
    /// Subject up axis at start; picks the turn when the subject has to swing
    /// to the opposite side of the new target.
    pub start_up: Vec3,
    pub desired_distance: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum OrbitPhase {
    /// The orbit controls drive the subject directly.
    Idle,
    /// The subject is animated; the controls drive the tracking proxy.
    Transitioning(TransitionState),
}

/// Animates an orbit subject onto a new orbit target.
///
/// While a transition runs, user orbit input is disabled and the controls are
/// attached to a tracking proxy parked at the destination orbit. Each update
/// blends the subject's distance toward the proxy's, swings its direction
/// along the great circle toward the proxy's and turns it to face the target.
/// The controls are handed back to the subject and re-enabled once the
/// configured duration has elapsed.
///
/// A new target arriving mid-transition restarts the blend from the subject's
/// current interpolated pose.
#[derive(Clone, Debug)]
pub struct OrbitTransition<S, C = OrbitControls> {
    subject: S,
    controls: C,
    proxy: Pose,
    phase: OrbitPhase,
    duration: f64,
    zoom_distance: f64,
    easing: Easing,
}

impl<S, C> OrbitTransition<S, C>
where
    S: OrbitSubject,
    C: OrbitControl,
{
    pub fn new(subject: S, mut controls: C, config: &OrbitConfig) -> Result<Self> {
        config.validate()?;
        let pose = subject.pose();
        if !pose.is_finite() {
            return Err(Error::NonFinite("orbit subject pose"));
        }
        if !is_finite_vec(controls.target()) {
            return Err(Error::NonFinite("orbit controls target"));
        }
        controls.attach(Attachment::Subject);
        controls.set_flags(ControlFlags::ALL);
        Ok(Self {
            subject,
            controls,
            proxy: pose,
            phase: OrbitPhase::Idle,
            duration: config.transition_duration,
            zoom_distance: config.zoom_distance,
            easing: config.easing,
        })
    }

    pub fn is_active(&self) -> bool {
        matches!(self.phase, OrbitPhase::Transitioning(_))
    }

    pub fn phase(&self) -> &OrbitPhase {
        &self.phase
    }

    pub fn target(&self) -> Vec3 {
        self.controls.target()
    }

    pub fn subject(&self) -> &S {
        &self.subject
    }

    pub(crate) fn subject_mut(&mut self) -> &mut S {
        &mut self.subject
    }

    pub fn controls(&self) -> &C {
        &self.controls
    }

    pub fn controls_mut(&mut self) -> &mut C {
        &mut self.controls
    }

    pub fn proxy(&self) -> Pose {
        self.proxy
    }

    pub fn duration(&self) -> f64 {
        self.duration
    }

    pub fn zoom_distance(&self) -> f64 {
        self.zoom_distance
    }

    pub fn set_zoom_distance(&mut self, distance: f64) -> Result<()> {
        ensure_positive("zoom_distance", distance)?;
        self.zoom_distance = distance;
        Ok(())
    }

    /// Starts a transition toward `new_target` at the configured zoom
    /// distance. Returns whether a transition was started.
    pub fn set_target(&mut self, new_target: Vec3) -> bool {
        self.set_target_at(new_target, self.zoom_distance)
    }

    /// Like [`set_target`](Self::set_target) with a one-off resting distance.
    pub fn set_target_at(&mut self, new_target: Vec3, zoom_distance: f64) -> bool {
        if !is_finite_vec(new_target) || !zoom_distance.is_finite() || zoom_distance <= 0.0 {
            warn!(?new_target, zoom_distance, "ignoring degenerate orbit target");
            return false;
        }
        let current = self.controls.target();
        if (new_target - current).magnitude2() <= TARGET_EPSILON * TARGET_EPSILON {
            trace!(?new_target, "orbit target unchanged");
            return false;
        }

        let position = self.subject.position();
        let orientation = self.subject.orientation();

        // Keep the viewing direction of the old orbit for the destination.
        let offset_direction = safe_normalize(position - current)
            .or_else(|| safe_normalize(backward(orientation)))
            .unwrap_or_else(Vec3::unit_z);
        let start_direction = safe_normalize(position - new_target).unwrap_or(offset_direction);

        let resting = self.controls.clamp_offset(offset_direction * zoom_distance);
        let desired_distance = resting.magnitude();
        if safe_normalize(resting).is_none() {
            warn!(?new_target, zoom_distance, "orbit limits leave no resting offset");
            return false;
        }
        self.proxy.position = new_target + resting;
        self.proxy.look_at(new_target);

        if self.controls.flags() != ControlFlags::NONE {
            self.controls.set_flags(ControlFlags::NONE);
        }
        self.controls.reset_damping();
        self.controls.set_target(new_target);
        self.controls.attach(Attachment::Proxy);

        let restarted = self.is_active();
        self.phase = OrbitPhase::Transitioning(TransitionState {
            elapsed: 0.0,
            start_orientation: orientation,
            start_distance: (position - new_target).magnitude(),
            start_direction,
            start_up: up(orientation),
            desired_distance,
        });
        debug!(
            ?new_target,
            desired_distance,
            restarted,
            "orbit transition started"
        );
        true
    }

    /// Advances one frame. Returns whether a transition is still running.
    pub fn update(&mut self, dt: f64) -> bool {
        match self.controls.attachment() {
            Attachment::Subject => self.controls.update(&mut self.subject),
            Attachment::Proxy => self.controls.update(&mut self.proxy),
        }

        let OrbitPhase::Transitioning(mut state) = self.phase else {
            return false;
        };

        state.elapsed += dt.max(0.0);
        let progress = (state.elapsed / self.duration).min(1.0);
        let alpha = self.easing.apply(progress);
        let target = self.controls.target();

        let distance = lerp(state.start_distance, state.desired_distance, alpha);
        match self.blend_direction(&state, target, alpha) {
            Some(direction) => self.subject.set_position(target + direction * distance),
            None => trace!("degenerate orbit direction, holding subject position"),
        }

        self.proxy.look_at(target);
        let goal = self.subject.look_rotation(target);
        self.subject
            .set_orientation(state.start_orientation.slerp(goal, alpha).normalize());

        if progress >= 1.0 {
            self.finish();
            false
        } else {
            self.phase = OrbitPhase::Transitioning(state);
            true
        }
    }

    /// Ends a running transition where the subject currently is.
    pub fn cancel(&mut self) {
        if self.is_active() {
            self.finish();
        }
    }

    fn blend_direction(&self, state: &TransitionState, target: Vec3, alpha: f64) -> Option<Vec3> {
        let proxy_direction = safe_normalize(self.proxy.position - target)?;
        slerp_direction(state.start_direction, proxy_direction, alpha, state.start_up)
            .or(Some(proxy_direction))
    }

    fn finish(&mut self) {
        self.controls.attach(Attachment::Subject);
        self.controls.reset_damping();
        self.controls.set_flags(ControlFlags::ALL);
        self.phase = OrbitPhase::Idle;
        debug!(target = ?self.controls.target(), "orbit transition complete");
    }
}
