use euclid::default::Vector3D;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VRColor {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl VRColor {
    pub const BLUE: VRColor = VRColor { r: 0.0, g: 0.0, b: 1.0, a: 1.0 };
    pub const RED: VRColor = VRColor { r: 1.0, g: 0.0, b: 0.0, a: 1.0 };

    pub fn new(r: f32, g: f32, b: f32, a: f32) -> VRColor {
        VRColor { r: r, g: g, b: b, a: a }
    }
}

// The pointer beam drawn along the controller's forward axis.
// Scale and position are local to the controller; depth runs along Z.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VRCursor {
    pub local_scale: Vector3D<f32>,
    pub local_position: Vector3D<f32>,
    pub color: VRColor,
}

impl Default for VRCursor {
    fn default() -> VRCursor {
        VRCursor {
            local_scale: Vector3D::new(1.0, 1.0, 1.0),
            local_position: Vector3D::zero(),
            color: VRColor::BLUE,
        }
    }
}

impl VRCursor {
    /// Stretches the beam so it starts at the controller and ends `depth` units ahead.
    pub fn stretch_to(&mut self, depth: f32, color: VRColor) {
        self.local_scale.z = depth;
        self.local_position.z = depth / 2.0;
        self.color = color;
    }

    pub fn depth(&self) -> f32 {
        self.local_scale.z
    }
}
