use euclid::default::{Point3D, Vector3D};

// A rigid body owned by the physics engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BodyHandle(pub u32);

// Any object a ray can hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObjectHandle(pub u32);

/// Bit set of the 32 collision layers a raycast considers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayerMask(pub u32);

impl LayerMask {
    pub fn all() -> LayerMask {
        LayerMask(!0)
    }

    pub fn without(self, layer: u32) -> LayerMask {
        LayerMask(self.0 & !(1 << layer))
    }

    pub fn contains(self, layer: u32) -> bool {
        self.0 & (1 << layer) != 0
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    pub origin: Point3D<f32>,
    pub direction: Vector3D<f32>,
    // f32::INFINITY for an unbounded cast.
    pub max_distance: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RaycastHit {
    pub object: ObjectHandle,
    pub point: Point3D<f32>,
    pub distance: f32,
}

// The other party of an overlap event.
#[derive(Debug, Clone, PartialEq)]
pub struct Collider {
    pub tag: String,
    pub body: Option<BodyHandle>,
}

/// The rendering/physics engine, as seen by a controller.
pub trait VRScene {
    /// Closest hit along `ray` against colliders on layers in `layer_mask`.
    fn raycast(&self, ray: &Ray, layer_mask: LayerMask) -> Option<RaycastHit>;

    fn body_position(&self, body: BodyHandle) -> Option<Point3D<f32>>;

    /// Teleports a body; it is moved by physics again from the next step.
    fn move_body(&mut self, body: BodyHandle, position: Point3D<f32>);

    /// Name of the panorama image an object links to, if it carries one.
    fn image_metadata(&self, object: ObjectHandle) -> Option<String>;

    fn set_skybox(&mut self, image: &str);
}
