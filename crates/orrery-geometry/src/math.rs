use cgmath::{InnerSpace, Matrix3, Quaternion, Rad, Rotation, Rotation3, Vector3};

pub type Vec3 = Vector3<f64>;
pub type Quat = Quaternion<f64>;

const DEGENERATE_LENGTH: f64 = 1.0e-12;
/// Below this `|from x to|` two unit directions count as (anti)parallel.
const PARALLEL_SINE: f64 = 1.0e-9;

pub fn world_up() -> Vec3 {
    Vector3::new(0.0, 1.0, 0.0)
}

pub fn identity() -> Quat {
    Quaternion::new(1.0, 0.0, 0.0, 0.0)
}

pub fn is_finite_vec(v: Vec3) -> bool {
    v.x.is_finite() && v.y.is_finite() && v.z.is_finite()
}

pub fn is_finite_quat(q: Quat) -> bool {
    q.s.is_finite() && is_finite_vec(q.v)
}

/// Normalizes `v`, or returns `None` when it has no usable direction.
pub fn safe_normalize(v: Vec3) -> Option<Vec3> {
    if !is_finite_vec(v) {
        return None;
    }
    let len = v.magnitude();
    if len <= DEGENERATE_LENGTH {
        None
    } else {
        Some(v / len)
    }
}

pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Viewing direction of an oriented object (cameras look down -Z).
pub fn forward(orientation: Quat) -> Vec3 {
    orientation.rotate_vector(Vector3::new(0.0, 0.0, -1.0))
}

pub fn backward(orientation: Quat) -> Vec3 {
    orientation.rotate_vector(Vector3::new(0.0, 0.0, 1.0))
}

pub fn up(orientation: Quat) -> Vec3 {
    orientation.rotate_vector(world_up())
}

/// Turns `from` toward `to` along their great circle by the fraction `t`.
///
/// Opposite directions have no unique great circle; they turn about the
/// component of `hint` perpendicular to `from`, falling back to the world axes.
pub fn slerp_direction(from: Vec3, to: Vec3, t: f64, hint: Vec3) -> Option<Vec3> {
    let from = safe_normalize(from)?;
    let to = safe_normalize(to)?;
    let cross = from.cross(to);
    let sine = cross.magnitude();
    let cosine = from.dot(to);

    if sine <= PARALLEL_SINE && cosine > 0.0 {
        return safe_normalize(from + (to - from) * t).or(Some(to));
    }
    let axis = if sine > PARALLEL_SINE {
        cross / sine
    } else {
        perpendicular(from, hint)?
    };
    let turn = Quaternion::from_axis_angle(axis, Rad(sine.atan2(cosine) * t));
    safe_normalize(turn.rotate_vector(from))
}

fn perpendicular(v: Vec3, hint: Vec3) -> Option<Vec3> {
    [hint, world_up(), Vector3::unit_x(), Vector3::unit_z()]
        .into_iter()
        .map(|candidate| candidate - v * candidate.dot(v))
        .filter(|rest| rest.magnitude() > 1.0e-6)
        .find_map(safe_normalize)
}

/// Orientation that makes an object at `eye` face `target` with +Y kept up.
///
/// Coincident points yield the identity frame. When the view direction is
/// parallel to `world_up` the frame is nudged off the pole instead of
/// normalizing a zero cross product.
pub fn look_rotation(eye: Vec3, target: Vec3) -> Quat {
    let up = world_up();
    let mut z = match safe_normalize(eye - target) {
        Some(z) => z,
        None => Vector3::new(0.0, 0.0, 1.0),
    };

    let mut x = up.cross(z);
    if x.magnitude2() <= DEGENERATE_LENGTH {
        z.z += 1.0e-4;
        z = z.normalize();
        x = up.cross(z);
    }
    let x = x.normalize();
    let y = z.cross(x);

    Quaternion::from(Matrix3::from_cols(x, y, z)).normalize()
}

/// Smallest angle in radians between two orientations.
pub fn angle_between(a: Quat, b: Quat) -> f64 {
    let dot = a.normalize().dot(b.normalize()).abs().min(1.0);
    2.0 * dot.acos()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn look_rotation_faces_target() {
        let eye = Vector3::new(0.0, 0.0, 5.0);
        let q = look_rotation(eye, Vector3::new(0.0, 0.0, 0.0));
        let dir = forward(q);
        assert!((dir - Vector3::new(0.0, 0.0, -1.0)).magnitude() < 1.0e-9);

        let q = look_rotation(eye, Vector3::new(3.0, 0.0, 0.0));
        let expected = (Vector3::new(3.0, 0.0, 0.0) - eye).normalize();
        assert!((forward(q) - expected).magnitude() < 1.0e-9);
    }

    #[test]
    fn look_rotation_straight_down_stays_finite() {
        let q = look_rotation(Vector3::new(0.0, 4.0, 0.0), Vector3::new(0.0, 0.0, 0.0));
        assert!(is_finite_quat(q));
        assert!(forward(q).y < -0.999);
    }

    #[test]
    fn slerp_direction_follows_great_circle() {
        let from = Vector3::new(1.0, 0.0, 0.0);
        let to = Vector3::new(0.0, 1.0, 0.0);
        let half = slerp_direction(from, to, 0.5, world_up()).unwrap();
        let diagonal = Vector3::new(1.0, 1.0, 0.0).normalize();
        assert!((half - diagonal).magnitude() < 1.0e-12);
        let end = slerp_direction(from, to, 1.0, world_up()).unwrap();
        assert!((end - to).magnitude() < 1.0e-12);
    }

    #[test]
    fn slerp_direction_turns_opposites_about_hint() {
        let from = Vector3::new(0.0, 0.0, -1.0);
        let to = Vector3::new(0.0, 0.0, 1.0);
        let half = slerp_direction(from, to, 0.5, world_up()).unwrap();
        assert!(half.y.abs() < 1.0e-12);
        assert!((half.x.abs() - 1.0).abs() < 1.0e-12);

        // A hint along the directions themselves falls back to another axis.
        let half = slerp_direction(from, to, 0.5, from).unwrap();
        assert!(half.z.abs() < 1.0e-12);
    }

    #[test]
    fn safe_normalize_rejects_zero_and_nan() {
        assert!(safe_normalize(Vector3::new(0.0, 0.0, 0.0)).is_none());
        assert!(safe_normalize(Vector3::new(f64::NAN, 1.0, 0.0)).is_none());
        assert!(safe_normalize(Vector3::new(0.0, 2.0, 0.0)).is_some());
    }
}
