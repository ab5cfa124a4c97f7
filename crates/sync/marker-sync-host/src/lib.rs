//! Host boundary for marker-collection sync.
//!
//! Everything ambient lives here: the context traits a host adapter
//! implements, the frame-change handler that guards and applies, the
//! handler registry with idempotent install/uninstall, and the descriptive
//! manifest block for the host's extension listing.

pub mod context;
pub mod handler;
pub mod manifest;
pub mod plugin;
pub mod registry;

pub use context::{HostContext, ViewLayer};
pub use handler::{sync_collections, MarkerSyncHandler, HANDLER_NAME};
pub use manifest::{manifest, Manifest, Version, VersionParseError};
pub use plugin::{register, register_with_config, unregister};
pub use registry::{FrameHandler, HandlerRegistry};
