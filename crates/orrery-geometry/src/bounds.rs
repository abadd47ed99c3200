use crate::math::Vec3;
use crate::ray::Ray;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb {
    pub fn new(a: Vec3, b: Vec3) -> Self {
        Self {
            min: Vec3::new(a.x.min(b.x), a.y.min(b.y), a.z.min(b.z)),
            max: Vec3::new(a.x.max(b.x), a.y.max(b.y), a.z.max(b.z)),
        }
    }

    pub fn from_center_half_extents(center: Vec3, half: Vec3) -> Self {
        Self::new(center - half, center + half)
    }

    pub fn from_points(points: &[Vec3]) -> Option<Self> {
        let mut iter = points.iter().copied();
        let first = iter.next()?;
        let mut min = first;
        let mut max = first;
        for p in iter {
            min = Vec3::new(min.x.min(p.x), min.y.min(p.y), min.z.min(p.z));
            max = Vec3::new(max.x.max(p.x), max.y.max(p.y), max.z.max(p.z));
        }
        Some(Self { min, max })
    }

    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    pub fn translated(&self, offset: Vec3) -> Self {
        Self {
            min: self.min + offset,
            max: self.max + offset,
        }
    }

    /// Slab test. Returns the entry/exit parameters clipped to `[0, max_t]`.
    pub fn ray_interval(&self, ray: &Ray, max_t: f64) -> Option<(f64, f64)> {
        let origin = ray.origin;
        let dir = ray.direction;
        let mut tmin: f64 = 0.0;
        let mut tmax: f64 = max_t;

        let mut check_axis = |origin: f64, dir: f64, min: f64, max: f64| -> bool {
            if dir.abs() <= 1.0e-9 {
                return origin >= min && origin <= max;
            }
            let inv = 1.0 / dir;
            let t1 = (min - origin) * inv;
            let t2 = (max - origin) * inv;
            tmin = tmin.max(t1.min(t2));
            tmax = tmax.min(t1.max(t2));
            tmax >= tmin
        };

        if !check_axis(origin.x, dir.x, self.min.x, self.max.x) {
            return None;
        }
        if !check_axis(origin.y, dir.y, self.min.y, self.max.y) {
            return None;
        }
        if !check_axis(origin.z, dir.z, self.min.z, self.max.z) {
            return None;
        }
        if tmax < 0.0 {
            return None;
        }
        Some((tmin, tmax))
    }

    /// Nearest surface hit. From inside the box this is the exit point.
    pub fn ray_hit(&self, ray: &Ray) -> Option<f64> {
        let (tmin, tmax) = self.ray_interval(ray, f64::INFINITY)?;
        if tmin > 1.0e-9 {
            Some(tmin)
        } else if tmax > 1.0e-9 {
            Some(tmax)
        } else {
            None
        }
    }
}
