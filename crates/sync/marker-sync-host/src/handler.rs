//! The frame-change handler: guards, marker selection, delta writes.

use log::{debug, trace};

use marker_sync_core::{
    active_marker, diff_changes, Config, Outputs, SceneState, SkipReason, SyncEvent,
};

use crate::context::HostContext;
use crate::registry::FrameHandler;

/// Name under which the default handler registers.
pub const HANDLER_NAME: &str = "marker_collection_sync";

fn push_event(outputs: &mut Outputs, cfg: &Config, event: SyncEvent) {
    if outputs.events.len() < cfg.max_events_per_tick {
        outputs.push_event(event);
    }
}

fn skip(mut outputs: Outputs, cfg: &Config, reason: SkipReason) -> Outputs {
    push_event(&mut outputs, cfg, SyncEvent::Skipped { reason });
    outputs
}

/// Run one sync pass for a frame-change event.
///
/// Selects the active marker for the event's current frame, then writes the
/// exclude flags that differ from the state that marker calls for. Every
/// ambiguous situation — no markers, frame before the first marker, missing
/// view layer, event for a background scene — is a silent skip with no side
/// effects. Never panics past those guards.
pub fn sync_collections(
    host: &mut dyn HostContext,
    scene: &SceneState,
    cfg: &Config,
) -> Outputs {
    trace!(
        "frame change: scene {:?} frame {}",
        scene.id,
        scene.current_frame
    );

    let mut outputs = Outputs::default();
    outputs.changes.reserve(cfg.change_capacity);

    if scene.markers.is_empty() {
        return skip(outputs, cfg, SkipReason::NoMarkers);
    }

    let marker = match active_marker(&scene.markers, scene.current_frame) {
        Some(marker) => marker,
        None => return skip(outputs, cfg, SkipReason::BeforeFirstMarker),
    };

    // Ambient scene identity is sampled before the view layer borrow starts;
    // the view-layer guard still runs first.
    let active_scene = host.active_scene();

    let view_layer = match host.active_view_layer() {
        Some(view_layer) => view_layer,
        None => return skip(outputs, cfg, SkipReason::NoActiveViewLayer),
    };

    // Only the active scene's visibility may be touched; background scenes
    // fire frame-change events too.
    if active_scene != Some(scene.id) {
        return skip(outputs, cfg, SkipReason::InactiveScene);
    }

    let current = view_layer.collections();
    let changes = diff_changes(&current, &marker.name);

    for change in &changes {
        debug!(
            "updating '{}': exclude = {}",
            change.collection, change.excluded
        );
        view_layer.set_excluded(&change.collection, change.excluded);
    }

    let matched = current
        .iter()
        .any(|c| !c.is_ignored() && c.name == marker.name);
    if !matched {
        push_event(
            &mut outputs,
            cfg,
            SyncEvent::NoMatchingCollection {
                marker: marker.name.clone(),
            },
        );
    }

    push_event(
        &mut outputs,
        cfg,
        SyncEvent::Applied {
            marker: marker.name.clone(),
            frame: marker.frame,
            writes: changes.len(),
        },
    );
    outputs.changes.extend(changes);
    outputs
}

/// The default frame-change handler. Stateless between invocations;
/// configuration only sizes output buffers.
#[derive(Debug, Default)]
pub struct MarkerSyncHandler {
    cfg: Config,
}

impl MarkerSyncHandler {
    pub fn new(cfg: Config) -> Self {
        Self { cfg }
    }
}

impl FrameHandler for MarkerSyncHandler {
    fn name(&self) -> &'static str {
        HANDLER_NAME
    }

    fn on_frame_change(&mut self, host: &mut dyn HostContext, scene: &SceneState) -> Outputs {
        sync_collections(host, scene, &self.cfg)
    }
}
