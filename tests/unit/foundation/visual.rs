use super::*;

#[test]
fn merge_overlays_only_set_fields() {
    let mut base = VisualState {
        opacity: Some(0.4),
        translate: Some(Translate::y_px(20.0)),
        ..VisualState::default()
    };
    base.merge(VisualState {
        opacity: Some(1.0),
        rotation_deg: Some(90.0),
        ..VisualState::default()
    });
    assert_eq!(base.opacity, Some(1.0));
    assert_eq!(base.translate, Some(Translate::y_px(20.0)));
    assert_eq!(base.rotation_deg, Some(90.0));
}

#[test]
fn empty_state_serializes_to_empty_object() {
    let s = VisualState::default();
    assert!(s.is_empty());
    assert_eq!(serde_json::to_string(&s).unwrap(), "{}");
}

#[test]
fn sticky_mode_json_names() {
    let v = serde_json::to_value(VisualState {
        position: Some(StickyMode::PinnedBottom),
        anchor_offset_px: Some(12.0),
        ..VisualState::default()
    })
    .unwrap();
    assert_eq!(v["position"], "pinned_bottom");
    assert_eq!(v["anchor_offset_px"], 12.0);
}
