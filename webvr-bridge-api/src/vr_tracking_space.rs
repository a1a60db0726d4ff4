// Size of the physical space available for VR.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde-serialization", derive(Deserialize, Serialize))]
pub enum VRTrackingSpace {
    // Standing experience; the sit-to-stand transform reported by the host is honoured.
    RoomScale,
    // Seated experience; the sit-to-stand transform is forced to identity.
    Stationary,
}

impl Default for VRTrackingSpace {
    fn default() -> VRTrackingSpace {
        VRTrackingSpace::RoomScale
    }
}
