use crate::{VRControllerSample, VRDisplayCapabilities, VRPoseSample, VRState};

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde-serialization", derive(Deserialize, Serialize))]
pub enum VREvent {
    // The host reported what the headset can do.
    CapabilitiesUpdate(VRDisplayCapabilities),

    // Presentation was entered or left. Fired on every request, even when the state is unchanged.
    StateChange(VRState),

    // A new frame of headset matrices was read from the shared array.
    HeadsetUpdate(VRPoseSample),

    // A controller record was decoded from a device-state payload.
    ControllerUpdate(VRControllerSample),
}

/// Receives events published by the bridge.
///
/// Listeners are invoked synchronously, in registration order, on the thread
/// that drives the frame loop.
pub trait VREventListener {
    fn on_event(&mut self, event: &VREvent);
}
