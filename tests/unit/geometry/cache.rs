use super::*;
use crate::foundation::core::Rect;
use crate::geometry::layout::PageLayout;

#[test]
fn refresh_fills_tracked_regions_only() {
    let mut layout = PageLayout::new();
    let a = layout.insert("a", None, Rect::new(0.0, 10.0, 100.0, 60.0));
    let b = layout.insert("b", None, Rect::new(0.0, 500.0, 100.0, 700.0));

    let mut cache = GeometryCache::new([b, b]);
    assert_eq!(cache.tracked(), &[b]);
    assert_eq!(cache.refresh(&layout), 0);
    assert_eq!(cache.get(a), None);
    assert_eq!(cache.get(b), Some(Geometry::new(500.0, 200.0, 100.0)));
}

#[test]
fn refresh_reports_missing_regions() {
    let mut layout = PageLayout::new();
    let a = layout.insert("a", None, Rect::new(0.0, 10.0, 100.0, 60.0));
    let mut cache = GeometryCache::new([a]);
    cache.refresh(&layout);
    assert!(cache.get(a).is_some());

    layout.detach(a);
    assert_eq!(cache.refresh(&layout), 1);
    assert_eq!(cache.get(a), None);
}

#[test]
fn geometry_is_stale_until_refreshed() {
    let mut layout = PageLayout::new();
    let a = layout.insert("a", None, Rect::new(0.0, 10.0, 100.0, 60.0));
    let mut cache = GeometryCache::new([a]);
    cache.refresh(&layout);

    layout.set_rect(a, Rect::new(0.0, 40.0, 100.0, 90.0));
    assert_eq!(cache.get(a).unwrap().top, 10.0);
    cache.refresh(&layout);
    assert_eq!(cache.get(a).unwrap().top, 40.0);
}
