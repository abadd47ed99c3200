pub mod camera;
pub mod config;
pub mod controls;
pub mod coordinator;
pub mod gesture;
pub mod hit;
pub mod input;
pub mod pivot;
pub mod scene;
pub mod screen;
pub mod transition;

pub use camera::{OrbitSubject, PerspectiveCamera, Pose, RayCaster};
pub use config::OrbitConfig;
pub use controls::{Attachment, ControlFlags, ControlsConfig, OrbitControl, OrbitControls};
pub use coordinator::{CoordinatorBuilder, InteractionCoordinator};
pub use gesture::{Gesture, GestureClassifier};
pub use hit::{Hit, HitTester};
pub use input::PointerEvent;
pub use pivot::PivotMarker;
pub use scene::{Hittable, SceneObject, Shape};
pub use screen::{Point2, Rect, Vec2, Viewport};
pub use transition::{OrbitPhase, OrbitTransition, TransitionState};
