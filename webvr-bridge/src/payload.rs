//! Wire format of the JSON messages the browser host posts to the bridge.

use crate::error::{BridgeError, BridgeResult};
use crate::{MATRIX_LEN, VRControllerButton, VRControllerHand, VRControllerSample, VRDisplayCapabilities};

// Per-update device state. Headset matrices travel through the shared array
// instead; only the sit-to-stand transform may be repeated here.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct VRDataPayload {
    pub sit_stand: Option<Vec<f32>>,
    pub controllers: Vec<VRControllerPayload>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct VRControllerPayload {
    #[serde(default)]
    pub index: u32,
    #[serde(default)]
    pub hand: Option<String>,
    // x, y, z, w
    pub orientation: [f32; 4],
    pub position: [f32; 3],
    #[serde(default)]
    pub axes: Vec<f32>,
    #[serde(default)]
    pub buttons: Vec<VRButtonPayload>,
}

#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(default)]
pub struct VRButtonPayload {
    pub pressed: bool,
    pub touched: bool,
    pub value: f32,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct VRCapabilitiesPayload {
    pub has_position: bool,
    pub has_orientation: bool,
    pub has_external_display: bool,
    pub can_present: bool,
    pub max_layers: u64,
}

impl VRDataPayload {
    pub fn from_json(json: &str) -> BridgeResult<VRDataPayload> {
        serde_json::from_str(json).map_err(BridgeError::payload("device state"))
    }

    /// The sit-to-stand transform carried by the payload, if it holds a full matrix.
    pub fn sit_stand(&self) -> Option<[f32; 16]> {
        match self.sit_stand {
            Some(ref values) if values.len() == MATRIX_LEN => {
                let mut matrix = [0f32; 16];
                matrix.copy_from_slice(values);
                Some(matrix)
            }
            _ => None,
        }
    }
}

impl VRControllerPayload {
    pub fn to_sample(&self, sit_stand: [f32; 16]) -> VRControllerSample {
        VRControllerSample {
            index: self.index,
            hand: self.hand.as_ref()
                            .map(|label| VRControllerHand::from_label(label))
                            .unwrap_or(VRControllerHand::Unknown),
            position: self.position,
            orientation: self.orientation,
            sit_to_stand_matrix: sit_stand,
            buttons: self.buttons.iter().map(|b| b.into()).collect(),
            axes: self.axes.clone(),
        }
    }
}

impl<'a> From<&'a VRButtonPayload> for VRControllerButton {
    fn from(button: &'a VRButtonPayload) -> VRControllerButton {
        VRControllerButton {
            pressed: button.pressed,
            touched: button.touched,
            value: button.value,
        }
    }
}

impl VRCapabilitiesPayload {
    pub fn from_json(json: &str) -> BridgeResult<VRCapabilitiesPayload> {
        serde_json::from_str(json).map_err(BridgeError::payload("capabilities"))
    }
}

impl From<VRCapabilitiesPayload> for VRDisplayCapabilities {
    fn from(payload: VRCapabilitiesPayload) -> VRDisplayCapabilities {
        VRDisplayCapabilities {
            has_position: payload.has_position,
            has_orientation: payload.has_orientation,
            has_external_display: payload.has_external_display,
            can_present: payload.can_present,
            max_layers: payload.max_layers,
        }
    }
}
