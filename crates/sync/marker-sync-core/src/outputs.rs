//! Output contracts for one handler invocation.
//!
//! Outputs carry the flag writes performed this invocation plus a separate
//! list of semantic events. Host adapters apply nothing from here (writes
//! already happened through the view layer); changes record what was
//! written and events transport signals the host may surface.

use serde::{Deserialize, Serialize};

/// One exclude-flag write on a top-level collection.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Change {
    pub collection: String,
    pub excluded: bool,
}

/// Why an invocation ended without touching any flag. Normal outcomes, not
/// failures; nothing here is retried or escalated.
#[derive(Copy, Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum SkipReason {
    /// The scene has no markers to sync against.
    NoMarkers,
    /// The current frame precedes every marker.
    BeforeFirstMarker,
    /// No active view layer was available (restricted context, e.g. a
    /// background render).
    NoActiveViewLayer,
    /// The event fired for a scene that is not the active one.
    InactiveScene,
}

/// Discrete signals emitted during an invocation.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[non_exhaustive]
pub enum SyncEvent {
    /// A sync pass ran to completion against the named marker. `writes` is
    /// zero when every flag already matched.
    Applied {
        marker: String,
        frame: i32,
        writes: usize,
    },
    /// The invocation ended early with no side effects.
    Skipped { reason: SkipReason },
    /// The active marker matched no top-level collection, leaving everything
    /// except the sentinel excluded.
    NoMatchingCollection { marker: String },
}

/// Outputs of one handler invocation.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct Outputs {
    #[serde(default)]
    pub changes: Vec<Change>,
    #[serde(default)]
    pub events: Vec<SyncEvent>,
}

impl Outputs {
    #[inline]
    pub fn clear(&mut self) {
        self.changes.clear();
        self.events.clear();
    }

    #[inline]
    pub fn push_change(&mut self, change: Change) {
        self.changes.push(change);
    }

    #[inline]
    pub fn push_event(&mut self, event: SyncEvent) {
        self.events.push(event);
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.changes.is_empty() && self.events.is_empty()
    }
}
