use crate::VRSharedArray;

const LEFT_PROJECTION: usize = 0;
const RIGHT_PROJECTION: usize = 1;
const LEFT_VIEW: usize = 2;
const RIGHT_VIEW: usize = 3;
const SIT_STAND: usize = 4;

// Everything the headset reported for a single frame.
// Only the current frame's sample is meaningful; older ones are dropped by consumers.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde-serialization", derive(Deserialize, Serialize))]
pub struct VRPoseSample {
    // Time the sample was decoded, in milliseconds. Zero when unknown.
    pub timestamp: f64,

    // column major matrix describing the projection to be used for the left eye's rendering
    pub left_projection_matrix: [f32; 16],

    // column major matrix describing the projection to be used for the right eye's rendering
    pub right_projection_matrix: [f32; 16],

    // column major matrix describing the view transform to be used for the left eye's rendering
    pub left_view_matrix: [f32; 16],

    // column major matrix describing the view transform to be used for the right eye's rendering
    pub right_view_matrix: [f32; 16],

    // matrix that transforms the sitting-space view matrices to standing-space
    pub sit_to_stand_matrix: [f32; 16],
}

impl Default for VRPoseSample {
    fn default() -> VRPoseSample {
        VRPoseSample {
            timestamp: 0f64,
            left_projection_matrix: identity_matrix!(),
            right_projection_matrix: identity_matrix!(),
            left_view_matrix: identity_matrix!(),
            right_view_matrix: identity_matrix!(),
            sit_to_stand_matrix: identity_matrix!(),
        }
    }
}

impl VRPoseSample {
    /// Decodes the five consecutive 16 float blocks of a shared array snapshot.
    pub fn from_shared_array(array: &VRSharedArray) -> VRPoseSample {
        VRPoseSample {
            timestamp: 0f64,
            left_projection_matrix: array.block(LEFT_PROJECTION),
            right_projection_matrix: array.block(RIGHT_PROJECTION),
            left_view_matrix: array.block(LEFT_VIEW),
            right_view_matrix: array.block(RIGHT_VIEW),
            sit_to_stand_matrix: array.block(SIT_STAND),
        }
    }

    /// Lays the sample out the way the host writes it.
    pub fn to_shared_array(&self) -> VRSharedArray {
        let mut array = VRSharedArray::default();
        array.set_block(LEFT_PROJECTION, &self.left_projection_matrix);
        array.set_block(RIGHT_PROJECTION, &self.right_projection_matrix);
        array.set_block(LEFT_VIEW, &self.left_view_matrix);
        array.set_block(RIGHT_VIEW, &self.right_view_matrix);
        array.set_block(SIT_STAND, &self.sit_to_stand_matrix);
        array
    }

    pub fn with_timestamp(mut self, timestamp: f64) -> VRPoseSample {
        self.timestamp = timestamp;
        self
    }
}
