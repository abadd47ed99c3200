use orrery_base::Result;
use orrery_geometry::{Aabb, Ray, TriMesh, Vec3, ray_intersect_sphere, ray_intersect_triangle};

fn ray(origin: [f64; 3], dir: [f64; 3]) -> Ray {
    Ray::new(
        Vec3::new(origin[0], origin[1], origin[2]),
        Vec3::new(dir[0], dir[1], dir[2]),
    )
    .expect("valid ray")
}

#[test]
fn degenerate_rays_are_rejected() {
    assert!(Ray::new(Vec3::new(0.0, 0.0, 0.0), Vec3::new(0.0, 0.0, 0.0)).is_none());
    assert!(Ray::new(Vec3::new(f64::NAN, 0.0, 0.0), Vec3::new(0.0, 0.0, 1.0)).is_none());
}

#[test]
fn triangle_hit_reports_distance() {
    let r = ray([0.25, 0.25, 5.0], [0.0, 0.0, -1.0]);
    let t = ray_intersect_triangle(
        &r,
        Vec3::new(0.0, 0.0, 0.0),
        Vec3::new(1.0, 0.0, 0.0),
        Vec3::new(0.0, 1.0, 0.0),
    );
    assert!((t.expect("hit") - 5.0).abs() < 1.0e-12);

    let miss = ray([2.0, 2.0, 5.0], [0.0, 0.0, -1.0]);
    assert!(
        ray_intersect_triangle(
            &miss,
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(0.0, 1.0, 0.0),
        )
        .is_none()
    );
}

#[test]
fn sphere_hit_front_and_inside() {
    let center = Vec3::new(3.0, 0.0, 0.0);
    let r = ray([3.0, 0.0, 5.0], [0.0, 0.0, -1.0]);
    let t = ray_intersect_sphere(&r, center, 0.5).expect("front hit");
    assert!((t - 4.5).abs() < 1.0e-12);

    let inside = ray([3.0, 0.0, 0.0], [0.0, 0.0, -1.0]);
    let t = ray_intersect_sphere(&inside, center, 0.5).expect("exit hit");
    assert!((t - 0.5).abs() < 1.0e-12);

    let behind = ray([3.0, 0.0, 5.0], [0.0, 0.0, 1.0]);
    assert!(ray_intersect_sphere(&behind, center, 0.5).is_none());
    assert!(ray_intersect_sphere(&r, center, 0.0).is_none());
}

#[test]
fn aabb_hit_picks_entry_face() {
    let bounds = Aabb::from_center_half_extents(Vec3::new(0.0, 0.0, 0.0), Vec3::new(1.0, 1.0, 1.0));
    let r = ray([0.0, 0.0, 5.0], [0.0, 0.0, -1.0]);
    assert!((bounds.ray_hit(&r).expect("hit") - 4.0).abs() < 1.0e-12);

    let parallel = ray([0.0, 3.0, 5.0], [0.0, 0.0, -1.0]);
    assert!(bounds.ray_hit(&parallel).is_none());
}

#[test]
fn mesh_pick_returns_nearest_triangle() -> Result<()> {
    let cube = TriMesh::cuboid(Vec3::new(1.0, 1.0, 1.0));
    let r = ray([0.2, 0.1, 5.0], [0.0, 0.0, -1.0]);
    let (t, point) = cube.ray_pick(&r).expect("cube hit");
    assert!((t - 4.0).abs() < 1.0e-9);
    assert!((point.z - 1.0).abs() < 1.0e-9);

    let mesh = TriMesh::new(
        vec![
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(0.0, 1.0, 0.0),
        ],
        vec![[0, 1, 2]],
    )?;
    assert!(mesh.ray_pick(&ray([5.0, 5.0, 5.0], [0.0, 0.0, -1.0])).is_none());
    Ok(())
}

#[test]
fn mesh_rejects_out_of_range_indices() {
    let result = TriMesh::new(vec![Vec3::new(0.0, 0.0, 0.0)], vec![[0, 1, 2]]);
    assert!(result.is_err());
}
