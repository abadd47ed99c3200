pub mod bounds;
pub mod easing;
pub mod math;
pub mod mesh;
pub mod ray;

pub use bounds::Aabb;
pub use cgmath::{InnerSpace, Rotation};
pub use easing::Easing;
pub use math::{
    Quat, Vec3, angle_between, backward, forward, identity, is_finite_quat, is_finite_vec, lerp,
    look_rotation, safe_normalize, slerp_direction, up, world_up,
};
pub use mesh::TriMesh;
pub use ray::{Ray, ray_intersect_sphere, ray_intersect_triangle};
