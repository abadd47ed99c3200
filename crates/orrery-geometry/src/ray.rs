use cgmath::InnerSpace;

use crate::math::{Vec3, is_finite_vec, safe_normalize};

const RAY_EPSILON: f64 = 1.0e-9;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

impl Ray {
    /// Builds a ray with a unit direction. Rejects non-finite origins and
    /// zero-length directions.
    pub fn new(origin: Vec3, direction: Vec3) -> Option<Self> {
        if !is_finite_vec(origin) {
            return None;
        }
        let direction = safe_normalize(direction)?;
        Some(Self { origin, direction })
    }

    pub fn at(&self, t: f64) -> Vec3 {
        self.origin + self.direction * t
    }

    pub fn translated(&self, offset: Vec3) -> Self {
        Self {
            origin: self.origin + offset,
            direction: self.direction,
        }
    }
}

pub fn ray_intersect_triangle(ray: &Ray, a: Vec3, b: Vec3, c: Vec3) -> Option<f64> {
    let eps = RAY_EPSILON;
    let edge1 = b - a;
    let edge2 = c - a;
    let pvec = ray.direction.cross(edge2);
    let det = edge1.dot(pvec);
    if det.abs() < eps {
        return None;
    }
    let inv_det = 1.0 / det;
    let tvec = ray.origin - a;
    let u = tvec.dot(pvec) * inv_det;
    if !(0.0..=1.0).contains(&u) {
        return None;
    }
    let qvec = tvec.cross(edge1);
    let v = ray.direction.dot(qvec) * inv_det;
    if v < 0.0 || u + v > 1.0 {
        return None;
    }
    let t = edge2.dot(qvec) * inv_det;
    if t > eps { Some(t) } else { None }
}

/// Nearest positive hit against a sphere. From inside, the exit point.
pub fn ray_intersect_sphere(ray: &Ray, center: Vec3, radius: f64) -> Option<f64> {
    if radius.is_nan() || radius <= 0.0 {
        return None;
    }
    let oc = ray.origin - center;
    let b = oc.dot(ray.direction);
    let c = oc.magnitude2() - radius * radius;
    let disc = b * b - c;
    if disc < 0.0 {
        return None;
    }
    let root = disc.sqrt();
    let near = -b - root;
    if near > RAY_EPSILON {
        return Some(near);
    }
    let far = -b + root;
    if far > RAY_EPSILON { Some(far) } else { None }
}
