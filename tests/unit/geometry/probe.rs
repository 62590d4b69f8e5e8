use super::*;
use crate::geometry::layout::{PageLayout, PageLayoutDef, RegionDef};

fn region(name: &str, parent: Option<&str>, top: f64, height: f64) -> RegionDef {
    RegionDef {
        name: name.to_owned(),
        parent: parent.map(str::to_owned),
        top,
        left: 0.0,
        width: 640.0,
        height,
        detached: false,
    }
}

fn nested_layout() -> PageLayout {
    PageLayout::from_def(&PageLayoutDef {
        regions: vec![
            region("main", None, 80.0, 4000.0),
            region("article", Some("main"), 120.0, 3000.0),
            region("figure", Some("article"), 900.0, 300.0),
        ],
    })
    .unwrap()
}

#[test]
fn sums_offsets_up_the_ancestry_chain() {
    let layout = nested_layout();
    let figure = layout.id("figure").unwrap();
    let g = probe(&layout, figure);
    assert_eq!(g.top, 80.0 + 120.0 + 900.0);
    assert_eq!(g.height, 300.0);
    assert_eq!(g.width, 640.0);
}

#[test]
fn root_region_reports_its_own_offset() {
    let layout = nested_layout();
    let main = layout.id("main").unwrap();
    assert_eq!(probe(&layout, main).top, 80.0);
}

#[test]
fn detached_region_probes_as_zero() {
    let mut layout = nested_layout();
    let figure = layout.id("figure").unwrap();
    layout.detach(figure);
    assert_eq!(try_probe(&layout, figure), None);
    assert_eq!(probe(&layout, figure), Geometry::DETACHED);
}

#[test]
fn detached_ancestor_detaches_descendants() {
    let mut layout = nested_layout();
    let article = layout.id("article").unwrap();
    let figure = layout.id("figure").unwrap();
    layout.detach(article);
    assert_eq!(try_probe(&layout, figure), None);
}

#[test]
fn unknown_handle_probes_as_zero() {
    let layout = nested_layout();
    assert_eq!(probe(&layout, RegionId(99)), Geometry::DETACHED);
}

#[test]
fn parent_cycle_terminates() {
    let layout = PageLayout::from_def(&PageLayoutDef {
        regions: vec![region("a", Some("b"), 10.0, 5.0), region("b", Some("a"), 20.0, 5.0)],
    })
    .unwrap();
    let a = layout.id("a").unwrap();
    assert_eq!(probe(&layout, a).top, 30.0);
}
