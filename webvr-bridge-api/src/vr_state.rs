// Whether the scene is currently presenting to the headset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde-serialization", derive(Deserialize, Serialize))]
pub enum VRState {
    Enabled,
    Normal,
}

impl Default for VRState {
    fn default() -> VRState {
        VRState::Normal
    }
}

impl VRState {
    pub fn toggled(self) -> VRState {
        match self {
            VRState::Enabled => VRState::Normal,
            VRState::Normal => VRState::Enabled,
        }
    }

    pub fn is_enabled(self) -> bool {
        self == VRState::Enabled
    }
}
