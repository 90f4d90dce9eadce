use std::io::Write;

use easel_canvas::headless::HostCall;
use easel_common::{Event, FrameId, Length, ScenarioError};
use easel_config::EaselConfig;
use serde_json::json;

use super::patch::patch_from_values;
use super::*;

fn scenario(value: serde_json::Value) -> Scenario {
    serde_json::from_value(value).unwrap()
}

// =============================================================================
// PARSING
// =============================================================================

#[test]
fn parses_every_op() {
    let s = parse_scenario(
        r#"{
            "frame": { "x": 0, "y": "10%", "name": "Tablet" },
            "content_size": [768, 1024],
            "transition_ms": 250,
            "zoom": 1.5,
            "steps": [
                { "op": "set", "values": { "width": 320, "height": null } },
                { "op": "set", "values": { "x": 4 }, "silent": true },
                { "op": "loaded" },
                { "op": "render" },
                { "op": "drag_start", "at": [1, 2] },
                { "op": "drag_move", "dx": 3, "dy": 4 },
                { "op": "drag_end" },
                { "op": "transition_end", "event": "webkitTransitionEnd" },
                { "op": "scroll" },
                { "op": "advance", "ms": 16 },
                { "op": "remove" }
            ]
        }"#,
    )
    .unwrap();

    assert_eq!(s.frame.name, "Tablet");
    assert_eq!(s.frame.y, Some(Length::from("10%")));
    assert_eq!(s.content_size, Some([768.0, 1024.0]));
    assert_eq!(s.zoom, 1.5);
    let ops: Vec<_> = s.steps.iter().map(Step::op).collect();
    assert_eq!(
        ops,
        [
            "set",
            "set",
            "loaded",
            "render",
            "drag_start",
            "drag_move",
            "drag_end",
            "transition_end",
            "scroll",
            "advance",
            "remove"
        ]
    );
}

#[test]
fn defaults_apply_to_missing_fields() {
    let s = parse_scenario(r#"{ "steps": [] }"#).unwrap();
    assert_eq!(s.zoom, 1.0);
    assert_eq!(s.transition_ms, 0);
    assert!(s.content_size.is_none());
    assert!(s.frame.x.is_none());
}

#[test]
fn unknown_op_is_a_parse_error() {
    let err = parse_scenario(r#"{ "steps": [{ "op": "resize" }] }"#).unwrap_err();
    assert!(matches!(err, ScenarioError::ParseError(_)));
}

#[test]
fn missing_file_is_reported() {
    let err = load_scenario(std::path::Path::new("/nonexistent/scenario.json")).unwrap_err();
    assert!(matches!(err, ScenarioError::FileNotFound(_)));
}

#[test]
fn loads_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, r#"{{ "steps": [{{ "op": "loaded" }}] }}"#).unwrap();
    let s = load_scenario(file.path()).unwrap();
    assert_eq!(s.steps.len(), 1);
}

// =============================================================================
// PATCHES
// =============================================================================

#[test]
fn values_map_to_patch_fields() {
    let values = json!({ "x": 12, "y": "50%", "width": null, "name": "Phone" });
    let patch = patch_from_values(0, values.as_object().unwrap()).unwrap();
    let touched = patch.touched();
    assert!(touched.x && touched.y && touched.width && touched.name);
    assert!(!touched.height);
}

#[test]
fn unknown_attribute_names_the_step() {
    let values = json!({ "depth": 3 });
    let err = patch_from_values(4, values.as_object().unwrap()).unwrap_err();
    assert_eq!(err.to_string(), "step 4: unknown attribute 'depth'");
}

#[test]
fn non_length_value_is_rejected() {
    let values = json!({ "x": [1, 2] });
    let err = patch_from_values(0, values.as_object().unwrap()).unwrap_err();
    assert!(matches!(err, ScenarioError::InvalidStep { index: 0, .. }));
}

// =============================================================================
// REPLAY
// =============================================================================

#[test]
fn drag_replay_moves_by_zoomed_delta() {
    let s = scenario(json!({
        "frame": { "x": 10, "y": 20, "width": 100, "height": 100 },
        "zoom": 2,
        "steps": [
            { "op": "drag_start", "at": [50, 50] },
            { "op": "drag_move", "dx": 5, "dy": -3 },
            { "op": "drag_end" }
        ]
    }));
    let reports = run(&s, &EaselConfig::default()).unwrap();

    assert!(reports[0].dragging);
    assert_eq!(
        reports[0].host_calls,
        vec![HostCall::ToggleFramesEvents { enabled: false }]
    );

    let moved = &reports[1];
    assert_eq!(moved.styles.left, "20px");
    assert_eq!(moved.styles.top, "14px");
    assert_eq!(moved.attributes.x, Some(Length::Px(20.0)));
    assert!(moved.committed);

    assert!(!reports[2].dragging);
    assert_eq!(
        reports[2].host_calls,
        vec![HostCall::ToggleFramesEvents { enabled: true }]
    );
}

#[test]
fn drag_start_without_pointer_does_nothing() {
    let s = scenario(json!({ "steps": [{ "op": "drag_start" }] }));
    let reports = run(&s, &EaselConfig::default()).unwrap();
    assert!(!reports[0].dragging);
    assert!(reports[0].host_calls.is_empty());
}

#[test]
fn load_measures_unsized_frame() {
    let s = scenario(json!({
        "frame": { "x": 0, "y": 0 },
        "content_size": [1280, 720],
        "steps": [{ "op": "loaded" }, { "op": "scroll" }]
    }));
    let reports = run(&s, &EaselConfig::default()).unwrap();

    let loaded = &reports[0];
    assert_eq!(loaded.revision, 1);
    assert_eq!(loaded.attributes.width, Some(Length::Px(1280.0)));
    assert_eq!(loaded.attributes.height, Some(Length::Px(720.0)));
    assert!(loaded.committed);
    assert_eq!(loaded.events, vec![Event::FrameLoaded(FrameId(1))]);
    assert_eq!(reports[1].events[0].name(), "frame:scroll");
}

#[test]
fn resize_commits_after_transition_end() {
    let s = scenario(json!({
        "frame": { "x": 0, "y": 0, "width": 100, "height": 100 },
        "transition_ms": 300,
        "steps": [
            { "op": "set", "values": { "width": 400 } },
            { "op": "transition_end" }
        ]
    }));
    let reports = run(&s, &EaselConfig::default()).unwrap();

    assert_eq!(reports[0].styles.width, "400px");
    assert!(reports[0].animating);
    assert!(!reports[0].committed);
    assert!(!reports[1].animating);
    assert!(reports[1].committed);
}

#[test]
fn advance_past_fallback_commits() {
    let s = scenario(json!({
        "frame": { "width": 100, "height": 100 },
        "transition_ms": 300,
        "steps": [
            { "op": "set", "values": { "height": 200 } },
            { "op": "advance", "ms": 5000 }
        ]
    }));
    let reports = run(&s, &EaselConfig::default()).unwrap();
    assert!(!reports[0].committed);
    assert!(reports[1].committed);
}

#[test]
fn bad_transition_event_stops_replay() {
    let s = scenario(json!({
        "steps": [
            { "op": "loaded" },
            { "op": "transition_end", "event": "animationend" }
        ]
    }));
    let err = run(&s, &EaselConfig::default()).unwrap_err();
    assert!(matches!(err, ScenarioError::InvalidStep { index: 1, .. }));
}

#[test]
fn remove_publishes_and_silences() {
    let s = scenario(json!({
        "frame": { "x": 1, "y": 1 },
        "steps": [
            { "op": "render" },
            { "op": "remove" },
            { "op": "set", "values": { "x": 50 } }
        ]
    }));
    let reports = run(&s, &EaselConfig::default()).unwrap();
    assert_eq!(reports[1].events, vec![Event::FrameRemoved(FrameId(1))]);
    assert_eq!(reports[2].styles.left, "1px");
    assert_eq!(reports[2].attributes.x, Some(Length::Px(50.0)));
}
