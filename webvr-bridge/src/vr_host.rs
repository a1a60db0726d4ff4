use crate::VRSharedArray;

/// The browser side of the bridge.
///
/// Implementations wrap whatever plugin the page exposes for WebVR. The bridge
/// only ever calls them from its own frame tick.
pub trait VRHost {
    /// Tells the page which key toggles presentation. Empty means none.
    fn configure_toggle_key(&mut self, key_name: &str);

    /// Allocates the buffer the page copies headset matrices into.
    fn init_shared_array(&mut self, len: usize);

    /// Starts forwarding device-state and capability messages.
    fn listen_vr_data(&mut self);

    /// Returns the latest fully written snapshot of the shared array.
    /// The host publishes all values at frame boundaries, so the snapshot
    /// never mixes two frames.
    fn read_shared_array(&mut self) -> VRSharedArray;

    /// True once for each release of `key_name` since the last call.
    fn key_released(&mut self, key_name: &str) -> bool;

    /// Reveals a page element, e.g. the "novr" notice.
    fn display_element(&mut self, element_id: &str);
}
