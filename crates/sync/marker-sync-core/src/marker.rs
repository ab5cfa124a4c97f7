//! Timeline markers and active-marker selection.

use serde::{Deserialize, Serialize};

/// A named point on the host's animation timeline. Markers are host-owned
/// and read-only from this crate's perspective; several may share a frame.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Marker {
    pub name: String,
    pub frame: i32,
}

impl Marker {
    pub fn new(name: impl Into<String>, frame: i32) -> Self {
        Self {
            name: name.into(),
            frame,
        }
    }
}

/// Select the marker governing `current_frame`: the latest marker (by frame)
/// whose frame is <= the current frame.
///
/// Markers are ordered by a stable sort on frame, so same-frame markers keep
/// their enumeration order and the last of them wins. Returns `None` when
/// the set is empty or the current frame precedes every marker.
pub fn active_marker(markers: &[Marker], current_frame: i32) -> Option<&Marker> {
    let mut ordered: Vec<&Marker> = markers.iter().collect();
    ordered.sort_by_key(|m| m.frame);

    let mut active = None;
    for marker in ordered {
        if marker.frame <= current_frame {
            active = Some(marker);
        } else {
            // Sorted ascending: every remaining marker is beyond the frame
            // too. Early exit only; a full scan yields the same answer.
            break;
        }
    }
    active
}
