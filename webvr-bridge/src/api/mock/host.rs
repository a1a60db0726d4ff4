use crate::vr_host::VRHost;
use crate::VRSharedArray;
use std::sync::mpsc::{channel, Receiver, Sender};
use std::sync::{Arc, Mutex, MutexGuard};
use super::MockHostMsg;

// A scriptable stand-in for the browser plugin.
// Records what the bridge asked of it and serves whatever frame a test published.
pub struct MockVRHost {
    state: Arc<Mutex<MockHostState>>,
    receiver: Option<Receiver<MockHostMsg>>,
}

#[derive(Debug, Default)]
pub struct MockHostState {
    pub toggle_key: Option<String>,
    pub shared_array_len: usize,
    pub listen_calls: u32,
    pub displayed_elements: Vec<String>,
    pub shared_array: VRSharedArray,
    pub released_keys: Vec<String>,
    pub snapshot_reads: u32,
}

impl MockVRHost {
    pub fn new() -> MockVRHost {
        MockVRHost {
            state: Default::default(),
            receiver: None,
        }
    }

    pub fn new_with_remote() -> (MockVRHost, Sender<MockHostMsg>) {
        let (send, rcv) = channel();
        let host = MockVRHost {
            state: Default::default(),
            receiver: Some(rcv),
        };
        (host, send)
    }

    pub fn state_handle(&self) -> Arc<Mutex<MockHostState>> {
        self.state.clone()
    }

    // Applies every pending control message before answering the bridge.
    fn sync(&mut self) -> MutexGuard<MockHostState> {
        let mut state = self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        if let Some(ref receiver) = self.receiver {
            while let Ok(msg) = receiver.try_recv() {
                state.handle_msg(msg);
            }
        }
        state
    }
}

impl VRHost for MockVRHost {
    fn configure_toggle_key(&mut self, key_name: &str) {
        self.sync().toggle_key = Some(key_name.to_owned());
    }

    fn init_shared_array(&mut self, len: usize) {
        self.sync().shared_array_len = len;
    }

    fn listen_vr_data(&mut self) {
        self.sync().listen_calls += 1;
    }

    fn read_shared_array(&mut self) -> VRSharedArray {
        let mut state = self.sync();
        state.snapshot_reads += 1;
        state.shared_array
    }

    fn key_released(&mut self, key_name: &str) -> bool {
        let mut state = self.sync();
        match state.released_keys.iter().position(|key| key == key_name) {
            Some(index) => {
                state.released_keys.remove(index);
                true
            }
            None => false,
        }
    }

    fn display_element(&mut self, element_id: &str) {
        self.sync().displayed_elements.push(element_id.to_owned());
    }
}

impl MockHostState {
    pub fn handle_msg(&mut self, msg: MockHostMsg) {
        match msg {
            MockHostMsg::SetFrame(sample) => self.shared_array = sample.to_shared_array(),
            MockHostMsg::SetSharedArray(array) => self.shared_array = array,
            MockHostMsg::ReleaseKey(key) => self.released_keys.push(key),
        }
    }
}
