use orrery_base::ObjectId;
use orrery_geometry::{Aabb, Ray, TriMesh, Vec3, ray_intersect_sphere};

/// A world object eligible for click picking.
pub trait Hittable {
    fn id(&self) -> ObjectId;
    fn name(&self) -> &str;
    fn position(&self) -> Vec3;
    /// Ray parameter of the nearest hit in front of the ray origin.
    fn intersect(&self, ray: &Ray) -> Option<f64>;
}

impl<T: Hittable + ?Sized> Hittable for &T {
    fn id(&self) -> ObjectId {
        (**self).id()
    }

    fn name(&self) -> &str {
        (**self).name()
    }

    fn position(&self) -> Vec3 {
        (**self).position()
    }

    fn intersect(&self, ray: &Ray) -> Option<f64> {
        (**self).intersect(ray)
    }
}

impl<T: Hittable + ?Sized> Hittable for Box<T> {
    fn id(&self) -> ObjectId {
        (**self).id()
    }

    fn name(&self) -> &str {
        (**self).name()
    }

    fn position(&self) -> Vec3 {
        (**self).position()
    }

    fn intersect(&self, ray: &Ray) -> Option<f64> {
        (**self).intersect(ray)
    }
}

/// Geometry relative to the owning object's position.
#[derive(Clone, Debug)]
pub enum Shape {
    Sphere { radius: f64 },
    Cuboid { half_extents: Vec3 },
    Mesh(TriMesh),
}

#[derive(Clone, Debug)]
pub struct SceneObject {
    id: ObjectId,
    name: String,
    position: Vec3,
    shape: Shape,
}

impl SceneObject {
    pub fn new(name: impl Into<String>, position: Vec3, shape: Shape) -> Self {
        Self {
            id: ObjectId::new(),
            name: name.into(),
            position,
            shape,
        }
    }

    pub fn sphere(name: impl Into<String>, position: Vec3, radius: f64) -> Self {
        Self::new(name, position, Shape::Sphere { radius })
    }

    pub fn cuboid(name: impl Into<String>, position: Vec3, half_extents: Vec3) -> Self {
        Self::new(name, position, Shape::Cuboid { half_extents })
    }

    pub fn with_id(mut self, id: ObjectId) -> Self {
        self.id = id;
        self
    }

    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }

    pub fn shape(&self) -> &Shape {
        &self.shape
    }
}

impl Hittable for SceneObject {
    fn id(&self) -> ObjectId {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn position(&self) -> Vec3 {
        self.position
    }

    fn intersect(&self, ray: &Ray) -> Option<f64> {
        match &self.shape {
            Shape::Sphere { radius } => ray_intersect_sphere(ray, self.position, *radius),
            Shape::Cuboid { half_extents } => {
                Aabb::from_center_half_extents(self.position, *half_extents).ray_hit(ray)
            }
            Shape::Mesh(mesh) => {
                let local = ray.translated(-self.position);
                mesh.ray_pick(&local).map(|(t, _)| t)
            }
        }
    }
}
