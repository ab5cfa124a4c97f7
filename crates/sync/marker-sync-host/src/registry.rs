//! Idempotent install/uninstall of frame-change handlers.
//!
//! An owned registry over the host's frame-change-pre callbacks, with
//! membership keyed by handler name. The registry lives in plugin lifecycle
//! state: created at load, dropped at unload. Handlers fire serially in
//! install order; there is no concurrency to guard against.

use log::info;

use marker_sync_core::{Outputs, SceneState};

use crate::context::HostContext;

/// A callback the host invokes once per frame change, before the frame is
/// evaluated.
pub trait FrameHandler {
    /// Stable identity in the registry; install/uninstall key off this.
    fn name(&self) -> &'static str;

    fn on_frame_change(&mut self, host: &mut dyn HostContext, scene: &SceneState) -> Outputs;
}

/// Owned list of frame-change-pre handlers.
#[derive(Default)]
pub struct HandlerRegistry {
    handlers: Vec<Box<dyn FrameHandler>>,
}

impl HandlerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `handler` unless one with the same name is already present.
    /// Returns whether the registry changed.
    pub fn install(&mut self, handler: Box<dyn FrameHandler>) -> bool {
        if self.is_installed(handler.name()) {
            info!("handler '{}' was already registered", handler.name());
            return false;
        }
        info!("handler '{}' added to frame-change list", handler.name());
        self.handlers.push(handler);
        true
    }

    /// Remove the handler registered under `name` if present. Returns
    /// whether the registry changed.
    pub fn uninstall(&mut self, name: &str) -> bool {
        let before = self.handlers.len();
        self.handlers.retain(|h| h.name() != name);
        let removed = self.handlers.len() != before;
        if removed {
            info!("handler '{name}' removed from frame-change list");
        }
        removed
    }

    pub fn is_installed(&self, name: &str) -> bool {
        self.handlers.iter().any(|h| h.name() == name)
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Fire every handler for one frame-change event, serially, in install
    /// order, merging their outputs. Each handler runs to completion before
    /// the next starts.
    pub fn dispatch_frame_change(
        &mut self,
        host: &mut dyn HostContext,
        scene: &SceneState,
    ) -> Outputs {
        let mut merged = Outputs::default();
        for handler in &mut self.handlers {
            let out = handler.on_frame_change(host, scene);
            merged.changes.extend(out.changes);
            merged.events.extend(out.events);
        }
        merged
    }
}
