//! Plugin lifecycle: wiring the default handler into a registry.

use marker_sync_core::Config;

use crate::handler::{MarkerSyncHandler, HANDLER_NAME};
use crate::registry::HandlerRegistry;

/// Install the default marker-sync handler with default configuration.
/// Idempotent; returns whether the registry changed.
pub fn register(registry: &mut HandlerRegistry) -> bool {
    register_with_config(registry, Config::default())
}

/// Install the default marker-sync handler with an explicit configuration.
pub fn register_with_config(registry: &mut HandlerRegistry, cfg: Config) -> bool {
    registry.install(Box::new(MarkerSyncHandler::new(cfg)))
}

/// Remove the default handler if present. Idempotent.
pub fn unregister(registry: &mut HandlerRegistry) -> bool {
    registry.uninstall(HANDLER_NAME)
}
