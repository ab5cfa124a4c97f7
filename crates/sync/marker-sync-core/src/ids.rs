//! Identifiers for host-owned entities.

use serde::{Deserialize, Serialize};

/// Opaque identity of a host scene. Assigned by the host adapter when it
/// translates events; compared by equality only, never dereferenced here.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct SceneId(pub u32);
