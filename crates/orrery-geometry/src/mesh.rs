use orrery_base::{Error, Result};

use crate::bounds::Aabb;
use crate::math::{Vec3, is_finite_vec};
use crate::ray::{Ray, ray_intersect_triangle};

/// Indexed triangle mesh in object-local coordinates.
#[derive(Clone, Debug)]
pub struct TriMesh {
    positions: Vec<Vec3>,
    triangles: Vec<[usize; 3]>,
    bounds: Option<Aabb>,
}

impl TriMesh {
    pub fn new(positions: Vec<Vec3>, triangles: Vec<[usize; 3]>) -> Result<Self> {
        if positions.iter().any(|p| !is_finite_vec(*p)) {
            return Err(Error::NonFinite("mesh vertex position"));
        }
        if let Some(tri) = triangles
            .iter()
            .find(|tri| tri.iter().any(|&idx| idx >= positions.len()))
        {
            return Err(Error::InvalidParameter(format!(
                "triangle {tri:?} references a vertex outside 0..{}",
                positions.len()
            )));
        }
        let bounds = Aabb::from_points(&positions);
        Ok(Self {
            positions,
            triangles,
            bounds,
        })
    }

    /// Axis-aligned box centred on the local origin, two triangles per face.
    pub fn cuboid(half: Vec3) -> Self {
        let positions = vec![
            Vec3::new(-half.x, -half.y, -half.z),
            Vec3::new(half.x, -half.y, -half.z),
            Vec3::new(half.x, half.y, -half.z),
            Vec3::new(-half.x, half.y, -half.z),
            Vec3::new(-half.x, -half.y, half.z),
            Vec3::new(half.x, -half.y, half.z),
            Vec3::new(half.x, half.y, half.z),
            Vec3::new(-half.x, half.y, half.z),
        ];
        let triangles = vec![
            [0, 2, 1],
            [0, 3, 2],
            [4, 5, 6],
            [4, 6, 7],
            [0, 1, 5],
            [0, 5, 4],
            [3, 7, 6],
            [3, 6, 2],
            [0, 4, 7],
            [0, 7, 3],
            [1, 2, 6],
            [1, 6, 5],
        ];
        let bounds = Aabb::from_points(&positions);
        Self {
            positions,
            triangles,
            bounds,
        }
    }

    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    pub fn triangles(&self) -> &[[usize; 3]] {
        &self.triangles
    }

    pub fn bounds(&self) -> Option<Aabb> {
        self.bounds
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty() || self.triangles.is_empty()
    }

    pub fn ray_pick(&self, ray: &Ray) -> Option<(f64, Vec3)> {
        if self.is_empty() {
            return None;
        }
        let bounds = self.bounds?;
        bounds.ray_interval(ray, f64::INFINITY)?;

        let mut best_t = f64::INFINITY;
        let mut best_point = None;
        for tri in &self.triangles {
            let p0 = self.positions[tri[0]];
            let p1 = self.positions[tri[1]];
            let p2 = self.positions[tri[2]];
            if let Some(t) = ray_intersect_triangle(ray, p0, p1, p2) {
                if t < best_t {
                    best_t = t;
                    best_point = Some(ray.at(t));
                }
            }
        }

        best_point.map(|point| (best_t, point))
    }
}
