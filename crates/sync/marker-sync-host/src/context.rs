//! Ambient host state behind explicit seams.
//!
//! "The active view layer" and "the active scene" are global host state.
//! Adapters expose them through these traits instead of letting the handler
//! reach into the host, and unavailability is an `Option`, not an error: a
//! restricted execution context simply yields `None` and the handler stands
//! down for that call.

use marker_sync_core::{Collection, SceneId};

/// The active set of visible collections for a scene. Only the direct
/// children of the view layer's top-level collection list are reachable
/// through this trait; that list is the whole mutated surface.
pub trait ViewLayer {
    /// Current name/flag state of each top-level collection, in host order.
    fn collections(&self) -> Vec<Collection>;

    /// Write one exclude flag. Callers only invoke this for actual deltas;
    /// redundant writes can trigger host-side dependency updates.
    fn set_excluded(&mut self, name: &str, excluded: bool);
}

/// Ambient queries the handler needs at call time.
pub trait HostContext {
    /// Identity of the currently active scene, if one can be determined.
    fn active_scene(&self) -> Option<SceneId>;

    /// The active view layer, or `None` in restricted execution contexts
    /// (e.g. background rendering).
    fn active_view_layer(&mut self) -> Option<&mut dyn ViewLayer>;
}
