use std::cell::RefCell;
use std::rc::Rc;

use crate::config::VRBridgeConfig;
use crate::error::{BridgeError, BridgeResult};
use crate::payload::{VRCapabilitiesPayload, VRDataPayload};
use crate::vr_host::VRHost;
use crate::{utils, IDENTITY_MATRIX, SHARED_ARRAY_LEN};
use crate::{VRDisplayCapabilities, VREvent, VREventListener, VRPoseSample, VRState, VRTrackingSpace};

/// Handle returned when registering a listener, used to remove it again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u32);

type BoxedListener = Box<dyn FnMut(&VREvent)>;

// Single entry point for everything the browser host sends.
// Decodes headset and controller state and republishes it to listeners.
pub struct VRBridge {
    config: VRBridgeConfig,
    host: Box<dyn VRHost>,
    started: bool,
    state: VRState,
    // Last known sit-to-stand transform, applied to controller samples.
    sit_stand: [f32; 16],
    capabilities: Option<VRDisplayCapabilities>,
    listeners: Vec<(ListenerId, BoxedListener)>,
    next_listener_id: u32,
}

impl VRBridge {
    pub fn new(config: VRBridgeConfig, host: Box<dyn VRHost>) -> VRBridge {
        VRBridge {
            config: config,
            host: host,
            started: false,
            state: VRState::Normal,
            sit_stand: IDENTITY_MATRIX,
            capabilities: None,
            listeners: Vec::new(),
            next_listener_id: 0,
        }
    }

    pub fn config(&self) -> &VRBridgeConfig {
        &self.config
    }

    pub fn vr_state(&self) -> VRState {
        self.state
    }

    pub fn sit_stand(&self) -> [f32; 16] {
        self.sit_stand
    }

    pub fn capabilities(&self) -> Option<&VRDisplayCapabilities> {
        self.capabilities.as_ref()
    }

    // False until the host reports a display able to present.
    pub fn can_present(&self) -> bool {
        self.capabilities.as_ref().map_or(false, |caps| caps.can_present)
    }

    pub fn is_started(&self) -> bool {
        self.started
    }

    // Register a new listener
    pub fn add_listener<F>(&mut self, listener: F) -> ListenerId
        where F: FnMut(&VREvent) + 'static
    {
        let id = ListenerId(self.next_listener_id);
        self.next_listener_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    // Register a listener that other code keeps a handle to
    pub fn add_shared_listener<L>(&mut self, listener: Rc<RefCell<L>>) -> ListenerId
        where L: VREventListener + 'static
    {
        self.add_listener(move |event| listener.borrow_mut().on_event(event))
    }

    pub fn remove_listener(&mut self, id: ListenerId) -> BridgeResult<()> {
        match self.listeners.iter().position(|&(listener_id, _)| listener_id == id) {
            Some(index) => {
                let (_, listener) = self.listeners.remove(index);
                drop(listener);
                Ok(())
            }
            None => {
                warn!("Attempted to remove unknown listener {:?}", id);
                Err(BridgeError::UnknownListener(id))
            }
        }
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    // Hooks the bridge up to the host. Later calls are ignored.
    pub fn start(&mut self) {
        if self.started {
            return;
        }

        self.host.configure_toggle_key(&self.config.toggle_vr_key_name);
        self.host.init_shared_array(SHARED_ARRAY_LEN);
        self.host.listen_vr_data();
        self.started = true;

        info!("Tracking space: {:?}", self.config.tracking_space);
        match self.config.toggle_key() {
            Some(key) => info!("VR toggle key: {}", key),
            None => info!("VR toggle key disabled"),
        }
    }

    // Per-frame tick: polls the toggle key and publishes the latest headset matrices.
    pub fn update(&mut self) {
        let toggle_released = match self.config.toggle_key() {
            Some(key) => self.host.key_released(key),
            None => false,
        };
        if toggle_released {
            self.toggle_vr_state();
        }

        if self.listeners.is_empty() {
            return;
        }

        let snapshot = self.host.read_shared_array();
        let sample = VRPoseSample::from_shared_array(&snapshot).with_timestamp(utils::timestamp());
        self.sit_stand = sample.sit_to_stand_matrix;
        trace!("Headset update at {}", sample.timestamp);
        self.dispatch(&VREvent::HeadsetUpdate(sample));
    }

    // Handles a device-state message from the browser
    pub fn on_vr_data(&mut self, json: &str) -> BridgeResult<()> {
        let payload = VRDataPayload::from_json(json)?;
        self.handle_vr_data(&payload);
        Ok(())
    }

    pub fn handle_vr_data(&mut self, payload: &VRDataPayload) {
        match self.config.tracking_space {
            VRTrackingSpace::Stationary => self.sit_stand = IDENTITY_MATRIX,
            VRTrackingSpace::RoomScale => {
                if let Some(sit_stand) = payload.sit_stand() {
                    self.sit_stand = sit_stand;
                }
            }
        }

        for controller in &payload.controllers {
            let sample = controller.to_sample(self.sit_stand);
            trace!("Controller update {} ({:?})", sample.index, sample.hand);
            self.dispatch(&VREvent::ControllerUpdate(sample));
        }
    }

    // Handles a capabilities message from the browser
    pub fn on_vr_capabilities(&mut self, json: &str) -> BridgeResult<()> {
        let payload = VRCapabilitiesPayload::from_json(json)?;
        self.set_capabilities(payload.into());
        Ok(())
    }

    pub fn set_capabilities(&mut self, capabilities: VRDisplayCapabilities) {
        info!("VR capabilities: {:?}", capabilities);
        if !capabilities.can_present {
            warn!("VR display cannot present");
            self.host.display_element("novr");
        }

        self.capabilities = Some(capabilities.clone());
        self.dispatch(&VREvent::CapabilitiesUpdate(capabilities));
    }

    pub fn toggle_vr_state(&mut self) {
        let state = self.state.toggled();
        self.set_vr_state(state);
    }

    // Listeners are notified even if the state does not change.
    pub fn set_vr_state(&mut self, state: VRState) {
        debug!("VR state: {:?} -> {:?}", self.state, state);
        self.state = state;
        self.dispatch(&VREvent::StateChange(state));
    }

    // received start VR from the browser
    pub fn on_start_vr(&mut self) {
        self.set_vr_state(VRState::Enabled);
    }

    // received end VR from the browser
    pub fn on_end_vr(&mut self) {
        self.set_vr_state(VRState::Normal);
    }
}

impl VRBridge {
    fn dispatch(&mut self, event: &VREvent) {
        for &mut (_, ref mut listener) in self.listeners.iter_mut() {
            (*listener)(event);
        }
    }
}

#[cfg(all(test, feature = "mock"))]
mod tests {
    use super::*;
    use crate::api::{MockHostMsg, MockVRHost};
    use crate::{VRControllerHand, VRSharedArray};
    use std::sync::mpsc::Sender;

    const LEFT_CONTROLLER: &str = r#"{"controllers": [
        {"index": 0, "hand": "left", "orientation": [0,0,0,1], "position": [1,2,3]}
    ]}"#;

    fn bridge_with(config: VRBridgeConfig) -> (VRBridge, Sender<MockHostMsg>) {
        let (host, remote) = MockVRHost::new_with_remote();
        (VRBridge::new(config, Box::new(host)), remote)
    }

    fn recorder(bridge: &mut VRBridge) -> Rc<RefCell<Vec<VREvent>>> {
        let events = Rc::new(RefCell::new(Vec::new()));
        let sink = events.clone();
        bridge.add_listener(move |event| sink.borrow_mut().push(event.clone()));
        events
    }

    fn translation(x: f32, y: f32, z: f32) -> [f32; 16] {
        let mut m = IDENTITY_MATRIX;
        m[12] = x;
        m[13] = y;
        m[14] = z;
        m
    }

    #[test]
    fn start_configures_host_once() {
        let host = MockVRHost::new();
        let handle = host.state_handle();
        let mut config = VRBridgeConfig::default();
        config.toggle_vr_key_name = "v".into();
        let mut bridge = VRBridge::new(config, Box::new(host));

        bridge.start();
        bridge.start();

        let state = handle.lock().unwrap();
        assert_eq!(state.toggle_key.as_ref().map(|k| k.as_str()), Some("v"));
        assert_eq!(state.shared_array_len, SHARED_ARRAY_LEN);
        assert_eq!(state.listen_calls, 1);
        assert!(bridge.is_started());
    }

    #[test]
    fn headset_update_decodes_shared_array() {
        let (mut bridge, remote) = bridge_with(VRBridgeConfig::default());
        let events = recorder(&mut bridge);

        let mut frame = VRPoseSample::default();
        frame.left_view_matrix = translation(0.03, 0.0, 0.0);
        frame.sit_to_stand_matrix = translation(0.0, 1.5, 0.0);
        remote.send(MockHostMsg::SetFrame(frame)).unwrap();
        bridge.update();

        let events = events.borrow();
        assert_eq!(events.len(), 1);
        match events[0] {
            VREvent::HeadsetUpdate(ref sample) => {
                assert_eq!(sample.left_view_matrix, frame.left_view_matrix);
                assert_eq!(sample.sit_to_stand_matrix, frame.sit_to_stand_matrix);
                assert!(sample.timestamp > 0.0);
            }
            ref other => panic!("unexpected event {:?}", other),
        }
        assert_eq!(bridge.sit_stand(), translation(0.0, 1.5, 0.0));
    }

    #[test]
    fn update_without_listeners_skips_the_snapshot() {
        let host = MockVRHost::new();
        let handle = host.state_handle();
        let mut bridge = VRBridge::new(VRBridgeConfig::default(), Box::new(host));
        bridge.update();
        assert_eq!(handle.lock().unwrap().snapshot_reads, 0);
    }

    #[test]
    fn controllers_carry_the_last_headset_sit_stand() {
        let (mut bridge, remote) = bridge_with(VRBridgeConfig::default());
        let events = recorder(&mut bridge);

        let mut frame = VRSharedArray::default();
        frame.set_block(4, &translation(0.0, 1.7, 0.0));
        remote.send(MockHostMsg::SetSharedArray(frame)).unwrap();
        bridge.update();
        bridge.on_vr_data(LEFT_CONTROLLER).unwrap();

        match events.borrow()[1] {
            VREvent::ControllerUpdate(ref sample) => {
                assert_eq!(sample.hand, VRControllerHand::Left);
                assert_eq!(sample.position, [1.0, 2.0, 3.0]);
                assert_eq!(sample.sit_to_stand_matrix, translation(0.0, 1.7, 0.0));
            }
            ref other => panic!("unexpected event {:?}", other),
        };
    }

    #[test]
    fn stationary_tracking_resets_sit_stand() {
        let mut config = VRBridgeConfig::default();
        config.tracking_space = VRTrackingSpace::Stationary;
        let (mut bridge, remote) = bridge_with(config);
        let events = recorder(&mut bridge);

        let mut frame = VRSharedArray::default();
        frame.set_block(4, &translation(0.0, 1.7, 0.0));
        remote.send(MockHostMsg::SetSharedArray(frame)).unwrap();
        bridge.update();
        bridge.on_vr_data(LEFT_CONTROLLER).unwrap();

        match events.borrow()[1] {
            VREvent::ControllerUpdate(ref sample) => assert_eq!(sample.sit_to_stand_matrix, IDENTITY_MATRIX),
            ref other => panic!("unexpected event {:?}", other),
        }
        assert_eq!(bridge.sit_stand(), IDENTITY_MATRIX);
    }

    #[test]
    fn payload_sit_stand_is_adopted_in_room_scale() {
        let (mut bridge, _remote) = bridge_with(VRBridgeConfig::default());
        let mut payload = VRDataPayload::from_json(LEFT_CONTROLLER).unwrap();
        payload.sit_stand = Some(translation(0.0, 1.1, 0.0).to_vec());
        bridge.handle_vr_data(&payload);
        assert_eq!(bridge.sit_stand(), translation(0.0, 1.1, 0.0));
    }

    #[test]
    fn listeners_run_in_registration_order() {
        let (mut bridge, _remote) = bridge_with(VRBridgeConfig::default());
        let order = Rc::new(RefCell::new(Vec::new()));
        for tag in 0..3 {
            let order = order.clone();
            bridge.add_listener(move |_| order.borrow_mut().push(tag));
        }
        bridge.on_start_vr();
        assert_eq!(*order.borrow(), vec![0, 1, 2]);
    }

    #[test]
    fn removed_listener_is_not_called() {
        let (mut bridge, _remote) = bridge_with(VRBridgeConfig::default());
        let kept = recorder(&mut bridge);
        let removed = Rc::new(RefCell::new(0));
        let counter = removed.clone();
        let id = bridge.add_listener(move |_| *counter.borrow_mut() += 1);

        bridge.remove_listener(id).unwrap();
        assert_eq!(Rc::strong_count(&removed), 1);
        bridge.on_end_vr();

        assert_eq!(*removed.borrow(), 0);
        assert_eq!(kept.borrow().len(), 1);
        match bridge.remove_listener(id) {
            Err(BridgeError::UnknownListener(unknown)) => assert_eq!(unknown, id),
            other => panic!("unexpected result {:?}", other),
        }
    }

    #[test]
    fn repeated_state_requests_still_notify() {
        let (mut bridge, _remote) = bridge_with(VRBridgeConfig::default());
        let events = recorder(&mut bridge);

        bridge.set_vr_state(VRState::Enabled);
        bridge.set_vr_state(VRState::Enabled);
        bridge.on_end_vr();

        assert_eq!(*events.borrow(), vec![
            VREvent::StateChange(VRState::Enabled),
            VREvent::StateChange(VRState::Enabled),
            VREvent::StateChange(VRState::Normal),
        ]);
        assert_eq!(bridge.vr_state(), VRState::Normal);
    }

    #[test]
    fn toggle_key_flips_state() {
        let mut config = VRBridgeConfig::default();
        config.toggle_vr_key_name = "v".into();
        let (mut bridge, remote) = bridge_with(config);
        let events = recorder(&mut bridge);

        remote.send(MockHostMsg::ReleaseKey("v".into())).unwrap();
        bridge.update();
        assert_eq!(bridge.vr_state(), VRState::Enabled);
        bridge.update();
        assert_eq!(bridge.vr_state(), VRState::Enabled);
        remote.send(MockHostMsg::ReleaseKey("v".into())).unwrap();
        bridge.update();
        assert_eq!(bridge.vr_state(), VRState::Normal);

        let changes = events.borrow().iter().filter(|e| match **e {
            VREvent::StateChange(_) => true,
            _ => false,
        }).count();
        assert_eq!(changes, 2);
    }

    #[test]
    fn empty_toggle_key_ignores_keys() {
        let (mut bridge, remote) = bridge_with(VRBridgeConfig::default());
        remote.send(MockHostMsg::ReleaseKey("".into())).unwrap();
        bridge.update();
        assert_eq!(bridge.vr_state(), VRState::Normal);
    }

    #[test]
    fn cannot_present_reveals_notice() {
        let host = MockVRHost::new();
        let handle = host.state_handle();
        let mut bridge = VRBridge::new(VRBridgeConfig::default(), Box::new(host));
        let events = recorder(&mut bridge);

        bridge.on_vr_capabilities(r#"{"canPresent": false, "hasOrientation": true}"#).unwrap();

        assert!(!bridge.can_present());
        assert_eq!(handle.lock().unwrap().displayed_elements, vec!["novr".to_string()]);
        match events.borrow()[0] {
            VREvent::CapabilitiesUpdate(ref caps) => assert!(caps.has_orientation),
            ref other => panic!("unexpected event {:?}", other),
        };
    }

    #[test]
    fn presentable_display_keeps_notice_hidden() {
        let host = MockVRHost::new();
        let handle = host.state_handle();
        let mut bridge = VRBridge::new(VRBridgeConfig::default(), Box::new(host));
        bridge.set_capabilities(VRDisplayCapabilities { can_present: true, ..Default::default() });
        assert!(bridge.can_present());
        assert!(handle.lock().unwrap().displayed_elements.is_empty());
    }

    #[test]
    fn malformed_payload_dispatches_nothing() {
        let (mut bridge, _remote) = bridge_with(VRBridgeConfig::default());
        let events = recorder(&mut bridge);
        assert!(bridge.on_vr_data("{\"controllers\": 3}").is_err());
        assert!(bridge.on_vr_capabilities("not json").is_err());
        assert!(events.borrow().is_empty());
    }
}
