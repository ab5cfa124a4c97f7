//! Frame-change event payload.

use serde::{Deserialize, Serialize};

use crate::ids::SceneId;
use crate::marker::Marker;

/// Host scene state carried by one frame-change event, sampled fresh at call
/// time. Nothing here survives across invocations; the handler is a pure
/// reaction to this snapshot plus ambient context.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct SceneState {
    pub id: SceneId,
    /// Frame number at the time the event fired. Covers playback, scrubbing
    /// and programmatic frame-set alike.
    pub current_frame: i32,
    /// Markers in host enumeration order; selection sorts a copy and never
    /// reorders this list.
    #[serde(default)]
    pub markers: Vec<Marker>,
}

impl SceneState {
    pub fn new(id: SceneId, current_frame: i32) -> Self {
        Self {
            id,
            current_frame,
            markers: Vec::new(),
        }
    }

    pub fn with_markers(mut self, markers: Vec<Marker>) -> Self {
        self.markers = markers;
        self
    }
}
