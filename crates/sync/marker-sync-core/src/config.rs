//! Core configuration.

use serde::{Deserialize, Serialize};

/// Sizing for per-invocation output buffers. Keep this minimal; expand as
/// needed without breaking API.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Config {
    /// Initial capacity for the change list of one invocation.
    pub change_capacity: usize,
    /// Maximum events retained per invocation; extra events are dropped.
    pub max_events_per_tick: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            change_capacity: 16,
            max_events_per_tick: 64,
        }
    }
}
