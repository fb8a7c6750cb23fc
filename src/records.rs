use crate::event_key::EventKey;
use serde::{Deserialize, Serialize};

/// One simulated vertex as delivered by the mixing provider.
///
/// The payload is opaque to the merge: it is copied into the flat output
/// collection unchanged, and the vertex's position in that collection becomes
/// its global index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VertexRecord {
    pub key: EventKey,
    pub payload: Vec<u8>,
}

impl VertexRecord {
    pub fn new(key: EventKey, payload: impl Into<Vec<u8>>) -> Self {
        Self {
            key,
            payload: payload.into(),
        }
    }
}

/// One simulated track as delivered by the mixing provider.
///
/// `vertex_ref` indexes the parent vertex within the track's own partition on
/// input and is rewritten to the global index by the merge. `None` marks a
/// track with no parent vertex; such tracks pass through untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackRecord {
    pub key: EventKey,
    pub vertex_ref: Option<u64>,
    pub payload: Vec<u8>,
}

impl TrackRecord {
    pub fn new(key: EventKey, vertex_ref: Option<u64>, payload: impl Into<Vec<u8>>) -> Self {
        Self {
            key,
            vertex_ref,
            payload: payload.into(),
        }
    }
}
