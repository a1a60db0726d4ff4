#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde-serialization", derive(Deserialize, Serialize))]
pub enum VRControllerHand {
    Unknown,
    Left,
    Right
}

impl Default for VRControllerHand {
    fn default() -> VRControllerHand {
        VRControllerHand::Unknown
    }
}

impl VRControllerHand {
    /// Parses the hand label sent by the browser ("left", "right", "" ...).
    pub fn from_label(label: &str) -> VRControllerHand {
        if label.eq_ignore_ascii_case("left") {
            VRControllerHand::Left
        } else if label.eq_ignore_ascii_case("right") {
            VRControllerHand::Right
        } else {
            VRControllerHand::Unknown
        }
    }

    pub fn label(&self) -> &'static str {
        match *self {
            VRControllerHand::Left => "left",
            VRControllerHand::Right => "right",
            VRControllerHand::Unknown => "",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde-serialization", derive(Deserialize, Serialize))]
pub struct VRControllerButton {
    pub pressed: bool,
    pub touched: bool,
    // Analog value in [0, 1]; digital buttons report 0 or 1.
    pub value: f32,
}

impl Default for VRControllerButton {
    fn default() -> VRControllerButton {
        VRControllerButton::new(false)
    }
}

impl VRControllerButton {
    pub fn new(pressed: bool) -> Self {
        Self {
            pressed: pressed,
            touched: pressed,
            value: if pressed { 1.0 } else { 0.0 },
        }
    }

    pub fn analog(value: f32, pressed: bool) -> Self {
        Self {
            pressed: pressed,
            touched: pressed || value > 0.0,
            value: value,
        }
    }
}

// The state of a single tracked controller for one update tick.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde-serialization", derive(Deserialize, Serialize))]
pub struct VRControllerSample {
    // Stable per physical controller.
    pub index: u32,

    pub hand: VRControllerHand,

    // Position in sitting space.
    pub position: [f32; 3],

    // Orientation quaternion, x/y/z/w.
    pub orientation: [f32; 4],

    // Sit-to-stand transform the bridge considered current when the sample was built.
    pub sit_to_stand_matrix: [f32; 16],

    pub buttons: Vec<VRControllerButton>,

    pub axes: Vec<f32>,
}

impl Default for VRControllerSample {
    fn default() -> VRControllerSample {
        VRControllerSample {
            index: 0,
            hand: VRControllerHand::Unknown,
            position: [0.0, 0.0, 0.0],
            orientation: [0.0, 0.0, 0.0, 1.0],
            sit_to_stand_matrix: identity_matrix!(),
            buttons: Vec::new(),
            axes: Vec::new(),
        }
    }
}

impl VRControllerSample {
    pub fn button(&self, index: usize) -> Option<&VRControllerButton> {
        self.buttons.get(index)
    }

    pub fn axis(&self, index: usize) -> Option<f32> {
        self.axes.get(index).cloned()
    }
}
