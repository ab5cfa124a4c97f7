//! Marker Sync Core (host-agnostic)
//!
//! Decision logic for keeping scene-collection visibility in step with the
//! active timeline marker. This crate owns the data contracts (markers,
//! scene state, collection flags) and the pure selection/diff computation;
//! ambient host lookups and the flag writes themselves live in
//! `marker-sync-host`.

pub mod collections;
pub mod config;
pub mod ids;
pub mod marker;
pub mod outputs;
pub mod scene;
pub mod sync;

// Re-exports for consumers (host adapters, tests)
pub use collections::{Collection, IGNORED_COLLECTION};
pub use config::Config;
pub use ids::SceneId;
pub use marker::{active_marker, Marker};
pub use outputs::{Change, Outputs, SkipReason, SyncEvent};
pub use scene::SceneState;
pub use sync::{desired_exclusions, diff_changes, evaluate, Decision};
