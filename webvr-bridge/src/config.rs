use crate::error::{BridgeError, BridgeResult};
use crate::VRTrackingSpace;

/// Settings for the pose/capability bridge.
///
/// Every field is optional in JSON; missing ones take the defaults below.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct VRBridgeConfig {
    // Name of the key used to alternate between VR and normal mode. Empty disables it.
    pub toggle_vr_key_name: String,

    // Height of the camera when no room-scale transform is present.
    pub default_height: f32,

    #[serde(with = "tracking_space")]
    pub tracking_space: VRTrackingSpace,

    // Keep the bridge alive across scene loads. Not read here; the host's
    // scene loader honours it.
    pub dont_destroy_on_load: bool,
}

impl Default for VRBridgeConfig {
    fn default() -> VRBridgeConfig {
        VRBridgeConfig {
            toggle_vr_key_name: String::new(),
            default_height: 1.2,
            tracking_space: VRTrackingSpace::RoomScale,
            dont_destroy_on_load: true,
        }
    }
}

impl VRBridgeConfig {
    pub fn from_json(json: &str) -> BridgeResult<VRBridgeConfig> {
        serde_json::from_str(json).map_err(BridgeError::Config)
    }

    pub fn toggle_key(&self) -> Option<&str> {
        if self.toggle_vr_key_name.is_empty() {
            None
        } else {
            Some(&self.toggle_vr_key_name)
        }
    }
}

// The API crate only derives serde behind a feature, so the tracking space is
// read here from its textual form.
mod tracking_space {
    use serde::de::{self, Deserialize, Deserializer};
    use crate::VRTrackingSpace;

    pub fn deserialize<'de, D>(deserializer: D) -> Result<VRTrackingSpace, D::Error>
        where D: Deserializer<'de>
    {
        let name = String::deserialize(deserializer)?;
        match name.to_ascii_lowercase().replace(|c: char| c == '-' || c == '_', "").as_str() {
            "roomscale" => Ok(VRTrackingSpace::RoomScale),
            "stationary" | "seated" => Ok(VRTrackingSpace::Stationary),
            _ => Err(de::Error::unknown_variant(&name, &["roomScale", "stationary"])),
        }
    }
}
