use super::*;
use crate::geometry::probe::probe;

#[test]
fn parses_json_with_forward_parent_references() {
    let layout: PageLayout = serde_json::from_value(serde_json::json!({
        "regions": [
            { "name": "card", "parent": "grid", "top": 40.0, "height": 200.0 },
            { "name": "grid", "top": 1000.0, "width": 960.0, "height": 800.0 }
        ]
    }))
    .unwrap();
    assert_eq!(layout.len(), 2);
    let card = layout.id("card").unwrap();
    assert_eq!(layout.name(card), Some("card"));
    assert_eq!(probe(&layout, card).top, 1040.0);
}

#[test]
fn rejects_duplicate_names() {
    let def = PageLayoutDef {
        regions: vec![
            RegionDef {
                name: "a".to_owned(),
                parent: None,
                top: 0.0,
                left: 0.0,
                width: 0.0,
                height: 10.0,
                detached: false,
            };
            2
        ],
    };
    let err = PageLayout::from_def(&def).unwrap_err();
    assert!(err.to_string().contains("declared twice"));
}

#[test]
fn rejects_unknown_parent() {
    let res: Result<PageLayout, _> = serde_json::from_value(serde_json::json!({
        "regions": [{ "name": "a", "parent": "nope", "top": 0.0, "height": 1.0 }]
    }));
    assert!(res.is_err());
}

#[test]
fn rejects_negative_height() {
    let res = PageLayout::from_reader(
        r#"{ "regions": [{ "name": "a", "top": 0.0, "height": -1.0 }] }"#.as_bytes(),
    );
    assert!(res.unwrap_err().to_string().contains("negative size"));
}

#[test]
fn insert_and_set_rect_update_geometry() {
    let mut layout = PageLayout::new();
    let root = layout.insert("root", None, Rect::new(0.0, 100.0, 800.0, 2100.0));
    let child = layout.insert("child", Some(root), Rect::new(0.0, 50.0, 800.0, 150.0));
    assert_eq!(probe(&layout, child).top, 150.0);

    layout.set_rect(root, Rect::new(0.0, 300.0, 800.0, 2300.0));
    assert_eq!(probe(&layout, child).top, 350.0);

    // Re-inserting an existing name reuses its handle.
    let again = layout.insert("child", Some(root), Rect::new(0.0, 0.0, 10.0, 10.0));
    assert_eq!(again, child);
    assert_eq!(layout.len(), 2);
}

#[test]
fn detached_flag_in_json() {
    let layout = PageLayout::from_reader(
        r#"{ "regions": [{ "name": "gone", "top": 10.0, "height": 5.0, "detached": true }] }"#
            .as_bytes(),
    )
    .unwrap();
    let gone = layout.id("gone").unwrap();
    assert_eq!(layout.offset_box(gone), None);
}
