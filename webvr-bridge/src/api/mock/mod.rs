mod host;

pub use self::host::{MockHostState, MockVRHost};

use crate::{VRPoseSample, VRSharedArray};

// Messages a test sends to drive a `MockVRHost` that the bridge owns.
pub enum MockHostMsg {
    // Publish a full headset frame to the shared array.
    SetFrame(VRPoseSample),
    SetSharedArray(VRSharedArray),
    // Simulate the user releasing a key.
    ReleaseKey(String),
}
