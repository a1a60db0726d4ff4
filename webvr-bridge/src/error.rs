use thiserror::Error;

use crate::vr_bridge::ListenerId;

pub type BridgeResult<T> = Result<T, BridgeError>;

#[derive(Error, Debug)]
pub enum BridgeError {
    #[error("malformed {kind} payload: {source}")]
    Payload {
        kind: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid bridge configuration: {0}")]
    Config(#[source] serde_json::Error),

    #[error("no listener registered with id {0:?}")]
    UnknownListener(ListenerId),
}

impl BridgeError {
    pub(crate) fn payload(kind: &'static str) -> impl FnOnce(serde_json::Error) -> BridgeError {
        move |source| BridgeError::Payload { kind, source }
    }
}
