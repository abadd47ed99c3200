use std::fs;
use std::path::Path;

use orrery_base::{Result, ensure_positive};
use orrery_geometry::{Quat, TriMesh, Vec3};
use orrery_view::{
    InteractionCoordinator, OrbitConfig, OrbitControls, OrbitSubject, PerspectiveCamera,
    PointerEvent, Pose, SceneObject, Shape, Viewport,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Scripted scene: camera, canvas size, pickable objects and pointer events.
#[derive(Clone, Debug, Deserialize)]
pub struct Scenario {
    pub viewport: ScenarioViewport,
    pub camera: ScenarioCamera,
    #[serde(default)]
    pub objects: Vec<ScenarioObject>,
    #[serde(default)]
    pub events: Vec<ScenarioEvent>,
}

#[derive(Clone, Copy, Debug, Deserialize)]
pub struct ScenarioViewport {
    pub width: f64,
    pub height: f64,
}

#[derive(Clone, Copy, Debug, Deserialize)]
pub struct ScenarioCamera {
    pub position: [f64; 3],
    #[serde(default)]
    pub target: [f64; 3],
    #[serde(default = "default_fov")]
    pub fov_deg: f64,
    #[serde(default = "default_near")]
    pub near: f64,
    #[serde(default = "default_far")]
    pub far: f64,
}

#[derive(Clone, Debug, Deserialize)]
pub struct ScenarioObject {
    pub name: String,
    pub position: [f64; 3],
    pub shape: ScenarioShape,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ScenarioShape {
    Sphere {
        radius: f64,
    },
    Cuboid {
        half_extents: [f64; 3],
    },
    Mesh {
        positions: Vec<[f64; 3]>,
        triangles: Vec<[usize; 3]>,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    Down,
    Up,
}

#[derive(Clone, Copy, Debug, Deserialize)]
pub struct ScenarioEvent {
    pub kind: EventKind,
    pub x: f64,
    pub y: f64,
    pub time: f64,
}

#[derive(Clone, Debug, Serialize)]
pub struct HitRecord {
    pub name: String,
    pub time: f64,
    pub object_position: [f64; 3],
    pub retargeted: bool,
}

#[derive(Clone, Copy, Debug, Serialize)]
pub struct PoseRecord {
    pub position: [f64; 3],
    /// `[x, y, z, w]`
    pub orientation: [f64; 4],
}

#[derive(Clone, Debug, Serialize)]
pub struct ScenarioReport {
    pub frames: usize,
    pub hits: Vec<HitRecord>,
    pub target: [f64; 3],
    pub transitioning: bool,
    pub final_pose: PoseRecord,
}

fn default_fov() -> f64 {
    70.0
}

fn default_near() -> f64 {
    0.1
}

fn default_far() -> f64 {
    100.0
}

fn vec3(v: [f64; 3]) -> Vec3 {
    Vec3::new(v[0], v[1], v[2])
}

fn array3(v: Vec3) -> [f64; 3] {
    [v.x, v.y, v.z]
}

fn array4(q: Quat) -> [f64; 4] {
    [q.v.x, q.v.y, q.v.z, q.s]
}

impl Scenario {
    pub fn from_json_str(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    pub fn build_objects(&self) -> Result<Vec<SceneObject>> {
        self.objects
            .iter()
            .map(|object| {
                let shape = match &object.shape {
                    ScenarioShape::Sphere { radius } => {
                        ensure_positive("sphere radius", *radius)?;
                        Shape::Sphere { radius: *radius }
                    }
                    ScenarioShape::Cuboid { half_extents } => Shape::Cuboid {
                        half_extents: vec3(*half_extents),
                    },
                    ScenarioShape::Mesh {
                        positions,
                        triangles,
                    } => Shape::Mesh(TriMesh::new(
                        positions.iter().copied().map(vec3).collect(),
                        triangles.clone(),
                    )?),
                };
                Ok(SceneObject::new(
                    object.name.clone(),
                    vec3(object.position),
                    shape,
                ))
            })
            .collect()
    }

    fn build_coordinator(
        &self,
        config: OrbitConfig,
    ) -> Result<InteractionCoordinator<PerspectiveCamera>> {
        let viewport = Viewport::new(self.viewport.width, self.viewport.height);
        let aspect = self.viewport.width / self.viewport.height;
        let target = vec3(self.camera.target);
        let camera = PerspectiveCamera::new(
            self.camera.fov_deg,
            aspect,
            self.camera.near,
            self.camera.far,
        )?
        .with_pose(Pose::looking_at(vec3(self.camera.position), target));
        let controls = OrbitControls::new(config.controls)?.with_target(target);

        InteractionCoordinator::builder()
            .subject(camera)
            .controls(controls)
            .viewport(viewport)
            .config(config)
            .build()
    }
}

/// Steps the scenario at a fixed frame rate, dispatching each pointer event
/// on the first frame at or after its timestamp.
pub fn run_scenario(
    scenario: &Scenario,
    config: OrbitConfig,
    fps: f64,
    seconds: f64,
) -> Result<ScenarioReport> {
    ensure_positive("fps", fps)?;
    ensure_positive("seconds", seconds)?;

    let objects = scenario.build_objects()?;
    let mut coordinator = scenario.build_coordinator(config)?;
    let mut events = scenario.events.clone();
    events.sort_by(|a, b| a.time.total_cmp(&b.time));

    let dt = 1.0 / fps;
    let frames = (seconds * fps).ceil() as usize;
    let mut pending = events.into_iter().peekable();
    let mut hits = Vec::new();

    info!(objects = objects.len(), frames, "running scenario");

    for frame in 0..frames {
        let now = frame as f64 * dt;
        while let Some(event) = pending.next_if(|event| event.time <= now) {
            let pointer = PointerEvent::new(event.x, event.y, event.time);
            match event.kind {
                EventKind::Down => coordinator.on_pointer_down(pointer),
                EventKind::Up => {
                    let before = coordinator.target();
                    if let Some(hit) = coordinator.on_pointer_up(pointer, &objects) {
                        let retargeted = coordinator.target() != before;
                        info!(name = %hit.name, time = event.time, retargeted, "hit");
                        hits.push(HitRecord {
                            name: hit.name,
                            time: event.time,
                            object_position: array3(hit.object_position),
                            retargeted,
                        });
                    }
                }
            }
        }

        let was_transitioning = coordinator.is_transitioning();
        coordinator.update(dt);
        if was_transitioning && !coordinator.is_transitioning() {
            debug!(frame, time = now + dt, "transition settled");
        }
    }

    let pose = coordinator.subject().pose();
    Ok(ScenarioReport {
        frames,
        hits,
        target: array3(coordinator.target()),
        transitioning: coordinator.is_transitioning(),
        final_pose: PoseRecord {
            position: array3(pose.position),
            orientation: array4(pose.orientation),
        },
    })
}
