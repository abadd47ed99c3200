use orrery_base::{Error, Result};
use orrery_geometry::Vec3;
use tracing::{debug, trace};

use super::camera::{OrbitSubject, Pose, RayCaster};
use super::config::OrbitConfig;
use super::controls::{OrbitControl, OrbitControls};
use super::gesture::{Gesture, GestureClassifier};
use super::hit::{Hit, HitTester};
use super::input::PointerEvent;
use super::pivot::PivotMarker;
use super::scene::Hittable;
use super::screen::Viewport;
use super::transition::OrbitTransition;

/// Wires pointer input, picking and the orbit transition together.
///
/// The host forwards pointer presses and releases as they arrive and calls
/// [`update`](Self::update) once per frame.
pub struct InteractionCoordinator<S, C = OrbitControls> {
    viewport: Viewport,
    gestures: GestureClassifier,
    hit_tester: HitTester,
    orbit: OrbitTransition<S, C>,
    pivot: PivotMarker,
    last_hit: Option<Hit>,
}

pub struct CoordinatorBuilder<S, C = OrbitControls> {
    subject: Option<S>,
    controls: Option<C>,
    viewport: Option<Viewport>,
    config: OrbitConfig,
}

impl<S, C> Default for CoordinatorBuilder<S, C> {
    fn default() -> Self {
        Self {
            subject: None,
            controls: None,
            viewport: None,
            config: OrbitConfig::default(),
        }
    }
}

impl<S, C> CoordinatorBuilder<S, C>
where
    S: OrbitSubject + RayCaster,
    C: OrbitControl,
{
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subject(mut self, subject: S) -> Self {
        self.subject = Some(subject);
        self
    }

    pub fn controls(mut self, controls: C) -> Self {
        self.controls = Some(controls);
        self
    }

    pub fn viewport(mut self, viewport: Viewport) -> Self {
        self.viewport = Some(viewport);
        self
    }

    pub fn config(mut self, config: OrbitConfig) -> Self {
        self.config = config;
        self
    }

    pub fn build(self) -> Result<InteractionCoordinator<S, C>> {
        let mut subject = self.subject.ok_or(Error::MissingCollaborator("orbit subject"))?;
        let controls = self
            .controls
            .ok_or(Error::MissingCollaborator("orbit controls"))?;
        let viewport = self.viewport.ok_or(Error::MissingCollaborator("viewport"))?;
        subject.set_aspect_ratio(viewport_aspect(&viewport)?)?;

        let gestures =
            GestureClassifier::new(self.config.click_threshold, self.config.max_click_duration)?;
        let orbit = OrbitTransition::new(subject, controls, &self.config)?;
        Ok(InteractionCoordinator {
            viewport,
            gestures,
            hit_tester: HitTester,
            orbit,
            pivot: PivotMarker::default(),
            last_hit: None,
        })
    }
}

fn viewport_aspect(viewport: &Viewport) -> Result<f64> {
    viewport.aspect().ok_or_else(|| {
        Error::InvalidParameter(format!(
            "viewport must have a positive size, got {:?}",
            viewport.rect()
        ))
    })
}

impl<S, C> InteractionCoordinator<S, C>
where
    S: OrbitSubject + RayCaster,
    C: OrbitControl,
{
    pub fn builder() -> CoordinatorBuilder<S, C> {
        CoordinatorBuilder::new()
    }

    pub fn on_pointer_down(&mut self, event: PointerEvent) {
        match self.viewport.to_ndc(event.position) {
            Some(ndc) => self.gestures.on_press(ndc, event.time),
            None => self.gestures.reset(),
        }
    }

    /// Classifies the release and, for a click, picks among `candidates`.
    /// A hit retargets the orbit and is returned.
    pub fn on_pointer_up<H: Hittable>(
        &mut self,
        event: PointerEvent,
        candidates: &[H],
    ) -> Option<Hit> {
        let Some(ndc) = self.viewport.to_ndc(event.position) else {
            self.gestures.reset();
            return None;
        };
        let Gesture::Click(pos) = self.gestures.on_release(ndc, event.time) else {
            trace!("pointer release classified as drag");
            return None;
        };

        let hit = self
            .hit_tester
            .test(pos, self.orbit.subject(), candidates)?;
        debug!(name = %hit.name, object = %hit.object, "clicked orbit target");
        self.orbit.set_target(hit.object_position);
        self.pivot.set_pivot(hit.object_position);
        self.last_hit = Some(hit.clone());
        Some(hit)
    }

    /// Advances the orbit by `dt` seconds and returns the subject pose for
    /// this frame.
    pub fn update(&mut self, dt: f64) -> Pose {
        self.orbit.update(dt);
        let pose = self.orbit.subject().pose();
        self.pivot.follow(pose.orientation);
        pose
    }

    pub fn cancel_interaction(&mut self) {
        self.gestures.reset();
        self.orbit.cancel();
    }

    /// Resizes the canvas and refits the subject's projection to it, so
    /// picking rays keep passing under the pointer.
    pub fn set_viewport(&mut self, viewport: Viewport) -> Result<()> {
        let aspect = viewport_aspect(&viewport)?;
        self.orbit.subject_mut().set_aspect_ratio(aspect)?;
        self.viewport = viewport;
        debug!(aspect, "viewport resized");
        Ok(())
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn is_transitioning(&self) -> bool {
        self.orbit.is_active()
    }

    pub fn target(&self) -> Vec3 {
        self.orbit.target()
    }

    pub fn subject(&self) -> &S {
        self.orbit.subject()
    }

    pub fn controls_mut(&mut self) -> &mut C {
        self.orbit.controls_mut()
    }

    pub fn orbit(&self) -> &OrbitTransition<S, C> {
        &self.orbit
    }

    pub fn pivot(&self) -> &PivotMarker {
        &self.pivot
    }

    pub fn last_hit(&self) -> Option<&Hit> {
        self.last_hit.as_ref()
    }
}
