#[macro_use]
macro_rules! identity_matrix {
    () => ([1.0, 0.0, 0.0, 0.0,  0.0, 1.0, 0.0, 0.0,  0.0, 0.0, 1.0, 0.0,  0.0, 0.0, 0.0, 1.0]);
}

#[cfg(feature = "utils")]
extern crate time;

#[cfg(feature = "utils")]
pub mod utils;

#[cfg(feature = "serde-serialization")]
#[macro_use]
extern crate serde_derive;

pub mod vr_controller;
pub mod vr_display_capabilities;
pub mod vr_event;
pub mod vr_pose_sample;
pub mod vr_shared_array;
pub mod vr_state;
pub mod vr_tracking_space;

pub use vr_controller::{VRControllerButton, VRControllerHand, VRControllerSample};
pub use vr_display_capabilities::VRDisplayCapabilities;
pub use vr_event::{VREvent, VREventListener};
pub use vr_pose_sample::VRPoseSample;
pub use vr_shared_array::{VRSharedArray, MATRIX_LEN, SHARED_ARRAY_LEN, SHARED_MATRIX_COUNT};
pub use vr_state::VRState;
pub use vr_tracking_space::VRTrackingSpace;

/// Column-major 4x4 identity, as delivered by the host when no transform is known.
pub const IDENTITY_MATRIX: [f32; 16] = identity_matrix!();
