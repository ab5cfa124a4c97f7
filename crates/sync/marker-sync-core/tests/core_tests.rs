use marker_sync_core::{
    active_marker, desired_exclusions, diff_changes, evaluate, Collection, Decision, Marker,
    Outputs, SceneId, SceneState, SkipReason, IGNORED_COLLECTION,
};

fn mk_scene(frame: i32, markers: &[(&str, i32)]) -> SceneState {
    SceneState::new(SceneId(0), frame).with_markers(
        markers
            .iter()
            .map(|(name, frame)| Marker::new(*name, *frame))
            .collect(),
    )
}

fn mk_collections(entries: &[(&str, bool)]) -> Vec<Collection> {
    entries
        .iter()
        .map(|(name, excluded)| Collection::new(*name, *excluded))
        .collect()
}

/// it should choose the marker with the greatest frame <= current frame
#[test]
fn active_marker_greatest_at_or_before() {
    let scene = mk_scene(60, &[("Intro", 1), ("Battle", 50), ("Ending", 120)]);
    let m = active_marker(&scene.markers, scene.current_frame).expect("marker");
    assert_eq!(m.name, "Battle");
    assert_eq!(m.frame, 50);
}

/// it should return none when the current frame precedes every marker
#[test]
fn active_marker_none_before_first() {
    let scene = mk_scene(0, &[("Intro", 1)]);
    assert!(active_marker(&scene.markers, scene.current_frame).is_none());
}

/// it should let the last same-frame marker in enumeration order win
#[test]
fn tie_same_frame_last_enumerated_wins() {
    let scene = mk_scene(10, &[("First", 10), ("Second", 10)]);
    let m = active_marker(&scene.markers, scene.current_frame).expect("marker");
    assert_eq!(m.name, "Second");

    // Enumeration order decides, not name order.
    let scene = mk_scene(10, &[("Second", 10), ("First", 10)]);
    let m = active_marker(&scene.markers, scene.current_frame).expect("marker");
    assert_eq!(m.name, "First");
}

/// it should exclude exactly the collections whose name differs from the marker
#[test]
fn evaluate_excludes_all_but_match() {
    let scene = mk_scene(60, &[("Intro", 1), ("Battle", 50), ("Ending", 120)]);
    let cols = mk_collections(&[("Intro", false), ("Battle", true), ("Ending", false)]);

    match evaluate(&scene, &cols) {
        Decision::Apply { marker, changes } => {
            assert_eq!(marker.name, "Battle");
            assert_eq!(changes.len(), 3);
            for change in &changes {
                assert_eq!(change.excluded, change.collection != "Battle");
            }
        }
        other => panic!("expected Apply, got {other:?}"),
    }
}

/// it should skip with NoMarkers when the scene has none
#[test]
fn evaluate_skips_empty_marker_set() {
    let scene = mk_scene(25, &[]);
    let cols = mk_collections(&[("Intro", false)]);
    assert_eq!(
        evaluate(&scene, &cols),
        Decision::Skip(SkipReason::NoMarkers)
    );
}

/// it should skip with BeforeFirstMarker when the frame precedes every marker
#[test]
fn evaluate_skips_before_first_marker() {
    let scene = mk_scene(0, &[("Intro", 1)]);
    let cols = mk_collections(&[("Intro", true)]);
    assert_eq!(
        evaluate(&scene, &cols),
        Decision::Skip(SkipReason::BeforeFirstMarker)
    );
}

/// it should produce zero deltas when flags already match the target state
#[test]
fn evaluate_idempotent_second_pass() {
    let scene = mk_scene(60, &[("Intro", 1), ("Battle", 50)]);
    let mut cols = mk_collections(&[("Intro", false), ("Battle", true)]);

    let first = match evaluate(&scene, &cols) {
        Decision::Apply { changes, .. } => changes,
        other => panic!("expected Apply, got {other:?}"),
    };
    assert!(!first.is_empty());
    for change in &first {
        let col = cols
            .iter_mut()
            .find(|c| c.name == change.collection)
            .expect("known collection");
        col.excluded = change.excluded;
    }

    match evaluate(&scene, &cols) {
        Decision::Apply { changes, .. } => assert!(changes.is_empty()),
        other => panic!("expected Apply, got {other:?}"),
    }
}

/// it should never emit a change for the sentinel collection
#[test]
fn sentinel_excluded_from_diffs() {
    let scene = mk_scene(60, &[("Battle", 50)]);
    // Sentinel sits in a state the sync would otherwise rewrite.
    let cols = mk_collections(&[
        ("Battle", true),
        (IGNORED_COLLECTION, false),
        ("Props", false),
    ]);

    match evaluate(&scene, &cols) {
        Decision::Apply { changes, .. } => {
            assert!(changes.iter().all(|c| c.collection != IGNORED_COLLECTION));
            assert_eq!(changes.len(), 2);
        }
        other => panic!("expected Apply, got {other:?}"),
    }
}

/// it should keep desired_exclusions and diff_changes consistent
#[test]
fn desired_state_matches_diff_target() {
    let cols = mk_collections(&[
        ("Intro", true),
        ("Battle", false),
        (IGNORED_COLLECTION, true),
        ("Ending", false),
    ]);
    let desired = desired_exclusions(cols.iter().map(|c| c.name.as_str()), "Intro");
    let changes = diff_changes(&cols, "Intro");

    for change in &changes {
        assert_eq!(desired[&change.collection], change.excluded);
    }
    // Collections absent from the change list already sit in desired state.
    for col in cols.iter().filter(|c| c.name != IGNORED_COLLECTION) {
        if changes.iter().all(|ch| ch.collection != col.name) {
            assert_eq!(desired[&col.name], col.excluded);
        }
    }
}

/// it should evaluate deterministically for identical inputs
#[test]
fn determinism_same_inputs_same_decision() {
    let scene = mk_scene(77, &[("A", 10), ("B", 70), ("C", 90)]);
    let cols = mk_collections(&[("A", false), ("B", true), ("C", false)]);

    let d1 = evaluate(&scene, &cols);
    let d2 = evaluate(&scene, &cols);
    let j1 = match &d1 {
        Decision::Apply { changes, .. } => serde_json::to_string(changes).unwrap(),
        Decision::Skip(reason) => serde_json::to_string(reason).unwrap(),
    };
    let j2 = match &d2 {
        Decision::Apply { changes, .. } => serde_json::to_string(changes).unwrap(),
        Decision::Skip(reason) => serde_json::to_string(reason).unwrap(),
    };
    assert_eq!(j1, j2);
}

/// it should exercise Outputs API basics: clear/empty/push
#[test]
fn outputs_api_basics() {
    let mut out = Outputs::default();
    assert!(out.is_empty());
    out.push_change(marker_sync_core::Change {
        collection: "Battle".into(),
        excluded: false,
    });
    assert!(!out.is_empty());
    out.clear();
    assert!(out.is_empty());
}

/// it should round-trip SceneState through serde
#[test]
fn scene_state_serde_roundtrip() {
    let scene = mk_scene(42, &[("Intro", 1), ("Battle", 50)]);
    let s = serde_json::to_string(&scene).unwrap();
    let back: SceneState = serde_json::from_str(&s).unwrap();
    assert_eq!(scene, back);
}
