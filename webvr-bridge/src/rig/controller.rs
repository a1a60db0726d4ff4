use euclid::default::{Point3D, Rotation3D, Transform3D, Vector3D};
use std::cell::RefCell;
use std::rc::Rc;
use super::input_map::{VRInputMap, VRInputSource};
use crate::utils;
use crate::{VRControllerButton, VRControllerHand, VRControllerSample, VREvent, VREventListener};

pub type VRControllerPtr = Rc<RefCell<VRController>>;

// Axis bindings read as pressed beyond this value.
const AXIS_PRESS_THRESHOLD: f32 = 0.5;

/// Tracks one hand's controller from `ControllerUpdate` events.
///
/// The pose is kept in standing space: the sit-to-stand transform carried by
/// each sample is applied to its position and orientation. Button edges
/// (`button_down`, `button_up`) compare the latest sample with the one before.
pub struct VRController {
    hand: VRControllerHand,
    input_map: VRInputMap,
    index: Option<u32>,
    position: Point3D<f32>,
    rotation: Rotation3D<f32>,
    buttons: Vec<VRControllerButton>,
    previous_buttons: Vec<VRControllerButton>,
    axes: Vec<f32>,
    previous_axes: Vec<f32>,
}

impl VRController {
    pub fn new(hand: VRControllerHand) -> VRController {
        VRController::with_input_map(hand, VRInputMap::default())
    }

    pub fn with_input_map(hand: VRControllerHand, input_map: VRInputMap) -> VRController {
        VRController {
            hand: hand,
            input_map: input_map,
            index: None,
            position: Point3D::origin(),
            rotation: Rotation3D::identity(),
            buttons: Vec::new(),
            previous_buttons: Vec::new(),
            axes: Vec::new(),
            previous_axes: Vec::new(),
        }
    }

    pub fn new_ptr(hand: VRControllerHand) -> VRControllerPtr {
        Rc::new(RefCell::new(VRController::new(hand)))
    }

    pub fn hand(&self) -> VRControllerHand {
        self.hand
    }

    // Index of the physical controller last seen for this hand.
    pub fn index(&self) -> Option<u32> {
        self.index
    }

    pub fn position(&self) -> Point3D<f32> {
        self.position
    }

    pub fn rotation(&self) -> Rotation3D<f32> {
        self.rotation
    }

    // The controller's +Z axis in standing space.
    pub fn forward(&self) -> Vector3D<f32> {
        self.rotation.transform_vector3d(Vector3D::new(0.0, 0.0, 1.0))
    }

    pub fn update(&mut self, sample: &VRControllerSample) {
        let sit_stand = Transform3D::from_array(sample.sit_to_stand_matrix);
        let [px, py, pz] = sample.position;
        let local = Point3D::new(px, py, pz);
        self.position = sit_stand.transform_point3d(local).unwrap_or(local);

        let [sx, sy, sz, sw] = utils::matrix_to_quat(&sample.sit_to_stand_matrix);
        let [qx, qy, qz, qw] = sample.orientation;
        self.rotation = Rotation3D::quaternion(qx, qy, qz, qw)
            .then(&Rotation3D::quaternion(sx, sy, sz, sw));

        self.index = Some(sample.index);
        self.previous_buttons = ::std::mem::replace(&mut self.buttons, sample.buttons.clone());
        self.previous_axes = ::std::mem::replace(&mut self.axes, sample.axes.clone());
    }

    /// Whether the named input is held.
    pub fn button(&self, name: &str) -> bool {
        self.pressed(&self.buttons, &self.axes, name)
    }

    /// Whether the named input went from released to held on the last update.
    pub fn button_down(&self, name: &str) -> bool {
        self.pressed(&self.buttons, &self.axes, name) &&
            !self.pressed(&self.previous_buttons, &self.previous_axes, name)
    }

    /// Whether the named input went from held to released on the last update.
    pub fn button_up(&self, name: &str) -> bool {
        !self.pressed(&self.buttons, &self.axes, name) &&
            self.pressed(&self.previous_buttons, &self.previous_axes, name)
    }

    /// Analog value of the named input; button bindings report the button value.
    pub fn axis(&self, name: &str) -> f32 {
        match self.input_map.source(name) {
            Some(VRInputSource::Button(index)) => self.buttons.get(index).map_or(0.0, |b| b.value),
            Some(VRInputSource::Axis(index)) => self.axes.get(index).cloned().unwrap_or(0.0),
            None => 0.0,
        }
    }
}

impl VRController {
    fn pressed(&self, buttons: &[VRControllerButton], axes: &[f32], name: &str) -> bool {
        match self.input_map.source(name) {
            Some(VRInputSource::Button(index)) => buttons.get(index).map_or(false, |b| b.pressed),
            Some(VRInputSource::Axis(index)) => axes.get(index).map_or(false, |value| *value > AXIS_PRESS_THRESHOLD),
            None => false,
        }
    }
}

impl VREventListener for VRController {
    fn on_event(&mut self, event: &VREvent) {
        if let VREvent::ControllerUpdate(ref sample) = *event {
            if sample.hand == self.hand {
                self.update(sample);
            }
        }
    }
}
