use orrery_base::ObjectId;
use orrery_geometry::Vec3;
use tracing::trace;

use super::camera::RayCaster;
use super::scene::Hittable;
use super::screen::Point2;

#[derive(Clone, Debug, PartialEq)]
pub struct Hit {
    pub object: ObjectId,
    pub name: String,
    pub object_position: Vec3,
    pub point: Vec3,
    pub distance: f64,
}

/// Nearest-object picking through a screen position.
#[derive(Clone, Copy, Debug, Default)]
pub struct HitTester;

impl HitTester {
    /// Casts a ray through `ndc` and returns the closest candidate hit.
    ///
    /// An empty candidate slice is a valid "nothing to pick" set. Candidates
    /// at exactly the same distance resolve to the earlier one in the slice.
    pub fn test<C, H>(&self, ndc: Point2, camera: &C, candidates: &[H]) -> Option<Hit>
    where
        C: RayCaster + ?Sized,
        H: Hittable,
    {
        if candidates.is_empty() {
            return None;
        }
        let ray = camera.ray_from_ndc(ndc)?;

        let mut best: Option<(usize, f64)> = None;
        for (idx, candidate) in candidates.iter().enumerate() {
            let Some(t) = candidate.intersect(&ray) else {
                continue;
            };
            if !t.is_finite() {
                continue;
            }
            match best {
                Some((_, best_t)) if t >= best_t => {}
                _ => best = Some((idx, t)),
            }
        }

        let (idx, t) = best?;
        let object = &candidates[idx];
        trace!(name = object.name(), distance = t, "pick hit");
        Some(Hit {
            object: object.id(),
            name: object.name().to_string(),
            object_position: object.position(),
            point: ray.at(t),
            distance: t,
        })
    }
}
