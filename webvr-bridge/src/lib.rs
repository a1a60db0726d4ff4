extern crate euclid;
#[macro_use]
extern crate log;
extern crate serde;
#[macro_use]
extern crate serde_derive;
extern crate serde_json;
extern crate thiserror;
extern crate webvr_bridge_api;

pub mod api;
pub mod config;
pub mod error;
pub mod interaction;
pub mod payload;
pub mod rig;
mod vr_bridge;
mod vr_host;

pub use webvr_bridge_api::*;
pub use config::VRBridgeConfig;
pub use error::{BridgeError, BridgeResult};
pub use vr_bridge::{ListenerId, VRBridge};
pub use vr_host::VRHost;
