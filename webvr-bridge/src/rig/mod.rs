//! Consumers of bridge events that turn decoded samples into scene transforms.

mod camera;
mod controller;
mod input_map;

pub use self::camera::{VRCameraRig, VREyeCamera};
pub use self::controller::{VRController, VRControllerPtr};
pub use self::input_map::{VRInputBinding, VRInputMap, VRInputSource};
