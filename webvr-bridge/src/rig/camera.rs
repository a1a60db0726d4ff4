use euclid::default::{Point3D, Transform3D, Vector3D};
use crate::config::VRBridgeConfig;
use crate::{VREvent, VREventListener, VRPoseSample, VRState, VRTrackingSpace};

// One eye of the stereo camera pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VREyeCamera {
    pub projection: Transform3D<f32>,
    // Places the eye in the world: inverse view, then sit-to-stand, then the rig offset.
    pub camera_to_world: Transform3D<f32>,
}

impl VREyeCamera {
    pub fn position(&self) -> Point3D<f32> {
        let m = &self.camera_to_world;
        Point3D::new(m.m41, m.m42, m.m43)
    }
}

/// Drives the stereo cameras from headset updates while VR is enabled.
pub struct VRCameraRig {
    tracking_space: VRTrackingSpace,
    default_height: f32,
    state: VRState,
    left: Option<VREyeCamera>,
    right: Option<VREyeCamera>,
}

impl VRCameraRig {
    pub fn new(config: &VRBridgeConfig) -> VRCameraRig {
        VRCameraRig {
            tracking_space: config.tracking_space,
            default_height: config.default_height,
            state: VRState::Normal,
            left: None,
            right: None,
        }
    }

    pub fn is_presenting(&self) -> bool {
        self.state.is_enabled()
    }

    pub fn left_eye(&self) -> Option<&VREyeCamera> {
        self.left.as_ref()
    }

    pub fn right_eye(&self) -> Option<&VREyeCamera> {
        self.right.as_ref()
    }

    // Midpoint between the eyes, once both have been placed.
    pub fn head_position(&self) -> Option<Point3D<f32>> {
        match (self.left, self.right) {
            (Some(left), Some(right)) => Some(left.position().lerp(right.position(), 0.5)),
            _ => None,
        }
    }

    // Seated tracking has no floor, so the rig is lifted to the default height.
    pub fn rig_offset(&self) -> Vector3D<f32> {
        match self.tracking_space {
            VRTrackingSpace::Stationary => Vector3D::new(0.0, self.default_height, 0.0),
            VRTrackingSpace::RoomScale => Vector3D::zero(),
        }
    }

    fn apply_headset(&mut self, sample: &VRPoseSample) {
        let sit_stand = Transform3D::from_array(sample.sit_to_stand_matrix);
        let offset = self.rig_offset();
        let to_world = sit_stand.then(&Transform3D::translation(offset.x, offset.y, offset.z));

        self.left = eye_camera(&sample.left_view_matrix, &sample.left_projection_matrix, &to_world);
        self.right = eye_camera(&sample.right_view_matrix, &sample.right_projection_matrix, &to_world);
        if self.left.is_none() || self.right.is_none() {
            warn!("Headset update carried a singular view matrix");
        }
    }
}

fn eye_camera(view: &[f32; 16], projection: &[f32; 16], to_world: &Transform3D<f32>) -> Option<VREyeCamera> {
    let eye_to_standing = Transform3D::from_array(*view).inverse()?;
    Some(VREyeCamera {
        projection: Transform3D::from_array(*projection),
        camera_to_world: eye_to_standing.then(to_world),
    })
}

impl VREventListener for VRCameraRig {
    fn on_event(&mut self, event: &VREvent) {
        match *event {
            VREvent::StateChange(state) => self.state = state,
            VREvent::HeadsetUpdate(ref sample) if self.is_presenting() => self.apply_headset(sample),
            _ => {}
        }
    }
}
