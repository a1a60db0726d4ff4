//! Ray-based aiming and pickup for a tracked controller.

mod candidates;
mod controller_interaction;
mod cursor;
mod scene;

pub use self::candidates::VRCandidateSet;
pub use self::controller_interaction::{ControllerInteraction, FixedJoint, InteractionConfig};
pub use self::cursor::{VRColor, VRCursor};
pub use self::scene::{BodyHandle, Collider, LayerMask, ObjectHandle, Ray, RaycastHit, VRScene};
