use super::*;

const DOC: &str = r#"{
  "viewport_height": 800,
  "layout": {
    "regions": [
      { "name": "hero", "top": 0, "width": 1200, "height": 600 },
      { "name": "title", "parent": "hero", "top": 200, "width": 1200, "height": 120 },
      { "name": "logo", "top": 900, "width": 200, "height": 200 }
    ]
  },
  "choreography": {
    "config": { "reveal_margin_px": 100 },
    "hero": { "region": "hero", "content": "title" },
    "scenes": [
      {
        "region": "logo",
        "animations": [
          { "target": "logo", "kind": "spin-wildly" },
          { "target": "logo", "kind": "zoom-in", "start": 0.1, "ease": "out-cubic" }
        ]
      }
    ]
  }
}"#;

#[test]
fn parses_with_defaults() {
    let doc = PageDocument::from_reader(DOC.as_bytes()).unwrap();
    assert_eq!(doc.viewport_height, 800.0);
    let c = &doc.choreography;
    assert_eq!(c.config.reveal_margin_px, 100.0);
    assert_eq!(c.config.completion_threshold, 0.99);
    assert!(c.parallax.is_empty());
    assert!(c.related.is_none());

    let anims = &c.scenes[0].animations;
    assert_eq!(anims[0].kind, AnimationKind::Passive);
    assert_eq!(anims[0].start, None);
    assert_eq!(anims[1].kind, AnimationKind::ZoomIn);
    assert_eq!(anims[1].ease, Ease::OutCubic);
}

#[test]
fn builds_layout_and_registry() {
    let doc = PageDocument::from_reader(DOC.as_bytes()).unwrap();
    let (layout, registry) = doc.build().unwrap();
    assert_eq!(layout.len(), 3);
    assert_eq!(registry.parallax().len(), 1);
    assert!(registry.parallax()[0].hero);
    assert_eq!(registry.parallax()[0].speed, 0.3);
    assert_eq!(doc.scroll_at(120.0), ScrollState::new(120.0, 800.0));
}

#[test]
fn malformed_json_is_a_serde_error() {
    let err = PageDocument::from_reader("{ not json".as_bytes()).unwrap_err();
    assert!(matches!(err, ChoreoError::Serde(_)));
}

#[test]
fn missing_file_is_reported() {
    let err = PageDocument::from_path("/definitely/not/here.json").unwrap_err();
    assert!(err.to_string().contains("not/here.json"));
}
