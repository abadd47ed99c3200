//! Clicks on a sphere and prints the camera as it swings onto the new orbit.
//!
//! Run with `RUST_LOG=debug` to see the transition lifecycle.

use anyhow::{Context, Result};
use orrery_geometry::Vec3;
use orrery_view::{
    InteractionCoordinator, OrbitConfig, OrbitControls, PerspectiveCamera, PointerEvent, Pose,
    SceneObject, Viewport,
};

const WIDTH: f64 = 800.0;
const HEIGHT: f64 = 600.0;

fn main() -> Result<()> {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let origin = Vec3::new(0.0, 0.0, 0.0);
    let config = OrbitConfig::default();
    let camera = PerspectiveCamera::new(70.0, WIDTH / HEIGHT, 0.1, 100.0)?
        .with_pose(Pose::looking_at(Vec3::new(0.0, 0.0, 5.0), origin));
    let controls = OrbitControls::new(config.controls)?.with_target(origin);
    let mut coordinator = InteractionCoordinator::builder()
        .subject(camera)
        .controls(controls)
        .viewport(Viewport::new(WIDTH, HEIGHT))
        .config(config)
        .build()?;

    let objects = vec![
        SceneObject::sphere("sun", origin, 0.8),
        SceneObject::sphere("planet", Vec3::new(3.0, 0.0, 0.0), 0.5),
        SceneObject::cuboid("moon", Vec3::new(-2.5, 1.0, 0.0), Vec3::new(0.3, 0.3, 0.3)),
    ];

    // "planet" sits at roughly (657, 300) in an 800x600 canvas.
    coordinator.on_pointer_down(PointerEvent::new(657.0, 300.0, 0.0));
    let hit = coordinator
        .on_pointer_up(PointerEvent::new(658.0, 301.0, 0.12), &objects)
        .context("click missed every object")?;
    println!("picked {} at distance {:.3}", hit.name, hit.distance);

    let dt = 1.0 / 60.0;
    let mut frame = 0;
    while coordinator.is_transitioning() {
        let pose = coordinator.update(dt);
        if frame % 10 == 0 {
            let p = pose.position;
            println!("frame {frame:3}: [{:.3}, {:.3}, {:.3}]", p.x, p.y, p.z);
        }
        frame += 1;
    }

    let pose = coordinator.update(dt);
    let p = pose.position;
    println!("settled after {frame} frames at [{:.3}, {:.3}, {:.3}]", p.x, p.y, p.z);
    Ok(())
}
