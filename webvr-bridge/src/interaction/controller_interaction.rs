use euclid::default::Point3D;
use super::candidates::VRCandidateSet;
use super::cursor::{VRColor, VRCursor};
use super::scene::{BodyHandle, Collider, LayerMask, Ray, RaycastHit, VRScene};
use crate::rig::VRController;

#[derive(Debug, Clone, PartialEq)]
pub struct InteractionConfig {
    // Beam length when the ray hits nothing.
    pub cursor_draw_distance: f32,
    // Collision layer the aiming ray passes through (usually the hands themselves).
    pub ignored_layer: u32,
    // Only colliders with this tag become pickup candidates.
    pub interactable_tag: String,
    pub cursor_color: VRColor,
    pub cursor_over_color: VRColor,
    pub trigger_input: String,
    pub grip_input: String,
    // Animation state the hand pose blend is played through.
    pub hand_state: String,
}

impl Default for InteractionConfig {
    fn default() -> InteractionConfig {
        InteractionConfig {
            cursor_draw_distance: 100.0,
            ignored_layer: 8,
            interactable_tag: "Interactable".into(),
            cursor_color: VRColor::BLUE,
            cursor_over_color: VRColor::RED,
            trigger_input: "Trigger".into(),
            grip_input: "Grip".into(),
            hand_state: "Take".into(),
        }
    }
}

/// Physics constraint binding a body to the controller. The engine reads
/// `connected_body` each step and makes that body follow the controller.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FixedJoint {
    connected_body: Option<BodyHandle>,
}

impl FixedJoint {
    pub fn connect(&mut self, body: Option<BodyHandle>) {
        self.connected_body = body;
    }

    pub fn connected_body(&self) -> Option<BodyHandle> {
        self.connected_body
    }
}

/// Per-controller aiming, hand pose and pickup logic.
///
/// Holding is implicit: the controller holds a body exactly when
/// `held_body()` is set, and the joint is always connected to that same body.
pub struct ControllerInteraction {
    config: InteractionConfig,
    joint: FixedJoint,
    current_body: Option<BodyHandle>,
    candidates: VRCandidateSet,
    cursor: VRCursor,
    hand_pose: f32,
    aim: Option<RaycastHit>,
    // Trigger and grip as seen by the previous `update`, so a release fires once.
    trigger_held: bool,
    grip_held: bool,
}

impl ControllerInteraction {
    pub fn new(config: InteractionConfig) -> ControllerInteraction {
        ControllerInteraction {
            config: config,
            joint: FixedJoint::default(),
            current_body: None,
            candidates: VRCandidateSet::new(),
            cursor: VRCursor::default(),
            hand_pose: 0.0,
            aim: None,
            trigger_held: false,
            grip_held: false,
        }
    }

    pub fn config(&self) -> &InteractionConfig {
        &self.config
    }

    pub fn cursor(&self) -> &VRCursor {
        &self.cursor
    }

    pub fn joint(&self) -> &FixedJoint {
        &self.joint
    }

    pub fn candidates(&self) -> &VRCandidateSet {
        &self.candidates
    }

    // What the controller ray hit on the last update.
    pub fn aim(&self) -> Option<&RaycastHit> {
        self.aim.as_ref()
    }

    /// Normalized playback position for the hand animation state.
    pub fn hand_pose(&self) -> f32 {
        self.hand_pose
    }

    pub fn hand_animation(&self) -> (&str, f32) {
        (self.config.hand_state.as_str(), self.hand_pose)
    }

    pub fn held_body(&self) -> Option<BodyHandle> {
        self.current_body
    }

    pub fn is_holding(&self) -> bool {
        self.current_body.is_some()
    }

    // Runs once per frame with the controller's latest state.
    pub fn update(&mut self, scene: &mut dyn VRScene, controller: &VRController) {
        let trigger = controller.button(&self.config.trigger_input);
        let grip = controller.button(&self.config.grip_input);
        let released = (self.trigger_held && !trigger) || (self.grip_held && !grip);
        self.trigger_held = trigger;
        self.grip_held = grip;

        self.hand_pose = if trigger {
            1.0
        } else {
            controller.axis(&self.config.grip_input).max(0.0).min(1.0)
        };

        let ray = Ray {
            origin: controller.position(),
            direction: controller.forward(),
            max_distance: ::std::f32::INFINITY,
        };
        self.aim = scene.raycast(&ray, LayerMask::all().without(self.config.ignored_layer));

        match self.aim {
            Some(ref hit) => self.cursor.stretch_to(hit.distance, self.config.cursor_over_color),
            None => self.cursor.stretch_to(self.config.cursor_draw_distance, self.config.cursor_color),
        }

        if let (true, Some(hit)) = (released, self.aim) {
            match scene.image_metadata(hit.object) {
                Some(image) => {
                    debug!("Switching skybox to {}", image);
                    scene.set_skybox(&image);
                }
                None => warn!("Aimed object {:?} carries no image", hit.object),
            }
        }
    }

    pub fn on_overlap_begin(&mut self, other: &Collider) {
        if other.tag != self.config.interactable_tag {
            return;
        }
        match other.body {
            Some(body) => {
                self.candidates.insert(body);
            }
            None => warn!("Interactable collider without a rigid body"),
        }
    }

    pub fn on_overlap_end(&mut self, other: &Collider) {
        if other.tag != self.config.interactable_tag {
            return;
        }
        if let Some(body) = other.body {
            self.candidates.remove(body);
        }
    }

    /// Grabs the candidate nearest to `position`, the controller's current position.
    /// Does nothing when already holding or when no candidate overlaps.
    pub fn pickup(&mut self, scene: &mut dyn VRScene, position: Point3D<f32>) {
        if self.is_holding() {
            return;
        }

        let body = match self.candidates.nearest(position, |body| scene.body_position(body)) {
            Some(body) => body,
            None => return,
        };

        scene.move_body(body, position);
        self.joint.connect(Some(body));
        self.current_body = Some(body);
        debug!("Picked up {:?}", body);
    }

    pub fn drop_body(&mut self) {
        let body = match self.current_body.take() {
            Some(body) => body,
            None => return,
        };
        self.joint.connect(None);
        debug!("Dropped {:?}", body);
    }
}
