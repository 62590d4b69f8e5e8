use super::*;
use crate::foundation::core::ScrollState;
use crate::foundation::ids::RegionId;

fn update(scroll_top: f64, opacity: f64) -> FrameUpdate {
    let mut u = FrameUpdate::new(ScrollState::new(scroll_top, 800.0));
    u.put(
        RegionId(1),
        VisualState {
            opacity: Some(opacity),
            ..VisualState::default()
        },
    );
    u
}

#[test]
fn ignores_the_scroll_snapshot() {
    assert_eq!(
        fingerprint_update(&update(0.0, 0.5)),
        fingerprint_update(&update(300.0, 0.5))
    );
}

#[test]
fn detects_state_changes() {
    assert_ne!(
        fingerprint_update(&update(0.0, 0.5)),
        fingerprint_update(&update(0.0, 0.6))
    );

    let mut a = update(0.0, 0.5);
    let b = a.clone();
    a.put(
        RegionId(1),
        VisualState {
            position: Some(StickyMode::Fixed),
            ..VisualState::default()
        },
    );
    assert_ne!(fingerprint_update(&a), fingerprint_update(&b));
}

#[test]
fn unset_and_zero_are_distinct() {
    let mut a = FrameUpdate::new(ScrollState::new(0.0, 800.0));
    a.put(
        RegionId(1),
        VisualState {
            scale: Some(0.0),
            ..VisualState::default()
        },
    );
    let mut b = FrameUpdate::new(ScrollState::new(0.0, 800.0));
    b.put(
        RegionId(1),
        VisualState {
            rotation_deg: Some(0.0),
            ..VisualState::default()
        },
    );
    assert_ne!(fingerprint_update(&a), fingerprint_update(&b));
}
