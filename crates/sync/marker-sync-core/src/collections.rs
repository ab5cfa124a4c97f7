//! Top-level collection visibility state.

use serde::{Deserialize, Serialize};

/// Collections named exactly this are exempt from sync control entirely:
/// their flag is never read and never written.
pub const IGNORED_COLLECTION: &str = "MarkerSyncIgnore";

/// Visibility flag of one direct child of the view layer's top-level
/// collection list. `excluded == true` means hidden. Only these direct
/// children are ever touched; nested collections are out of reach.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Collection {
    pub name: String,
    pub excluded: bool,
}

impl Collection {
    pub fn new(name: impl Into<String>, excluded: bool) -> Self {
        Self {
            name: name.into(),
            excluded,
        }
    }

    /// Whether this collection carries the reserved sentinel name.
    #[inline]
    pub fn is_ignored(&self) -> bool {
        self.name == IGNORED_COLLECTION
    }
}
