//! Pure decision logic: desired exclusion state and delta computation.
//!
//! Everything here is a function of explicit inputs, so the selection
//! algorithm tests without any host plumbing. The apply step that performs
//! the writes lives in `marker-sync-host`.

use hashbrown::HashMap;

use crate::collections::{Collection, IGNORED_COLLECTION};
use crate::marker::{active_marker, Marker};
use crate::outputs::{Change, SkipReason};
use crate::scene::SceneState;

/// Outcome of evaluating one frame-change event against current collection
/// state.
#[derive(Clone, Debug, PartialEq)]
pub enum Decision {
    /// Nothing to do; no flag may be touched.
    Skip(SkipReason),
    /// Apply `changes` so visibility lines up with `marker`.
    Apply { marker: Marker, changes: Vec<Change> },
}

/// Desired exclude flag per collection name under `active_name`: a
/// collection stays visible iff its name equals the marker's. The sentinel
/// is absent from the map entirely.
pub fn desired_exclusions<'a, I>(names: I, active_name: &str) -> HashMap<String, bool>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut desired = HashMap::new();
    for name in names {
        if name == IGNORED_COLLECTION {
            continue;
        }
        desired.insert(name.to_string(), name != active_name);
    }
    desired
}

/// Deltas between current flags and the state `active_name` calls for.
/// Collections already in the right state produce no entry; the sentinel is
/// skipped before its flag is read.
pub fn diff_changes(collections: &[Collection], active_name: &str) -> Vec<Change> {
    let mut changes = Vec::new();
    for col in collections {
        if col.name == IGNORED_COLLECTION {
            continue;
        }
        let should_exclude = col.name != active_name;
        if col.excluded != should_exclude {
            changes.push(Change {
                collection: col.name.clone(),
                excluded: should_exclude,
            });
        }
    }
    changes
}

/// Evaluate one frame-change event: select the active marker for the scene's
/// current frame and compute the deltas that bring `collections` in line
/// with it. Host-free; ambient guards are the caller's business.
pub fn evaluate(scene: &SceneState, collections: &[Collection]) -> Decision {
    if scene.markers.is_empty() {
        return Decision::Skip(SkipReason::NoMarkers);
    }
    match active_marker(&scene.markers, scene.current_frame) {
        None => Decision::Skip(SkipReason::BeforeFirstMarker),
        Some(marker) => Decision::Apply {
            marker: marker.clone(),
            changes: diff_changes(collections, &marker.name),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collections::Collection;

    #[test]
    fn diff_writes_only_deltas() {
        let cols = vec![
            Collection::new("Intro", true),
            Collection::new("Battle", true),
            Collection::new("Ending", true),
        ];
        let changes = diff_changes(&cols, "Battle");
        assert_eq!(
            changes,
            vec![Change {
                collection: "Battle".into(),
                excluded: false,
            }]
        );
    }

    #[test]
    fn sentinel_never_appears_in_desired_state() {
        let names = ["Intro", IGNORED_COLLECTION, "Battle"];
        let desired = desired_exclusions(names, "Battle");
        assert_eq!(desired.len(), 2);
        assert!(!desired.contains_key(IGNORED_COLLECTION));
        assert!(!desired["Battle"]);
        assert!(desired["Intro"]);
    }
}
