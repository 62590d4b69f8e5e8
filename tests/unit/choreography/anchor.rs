use super::*;

#[test]
fn target_clears_chrome_and_margin() {
    assert_eq!(anchor_scroll_target(1500.0, 64.0, 20.0), 1416.0);
}

#[test]
fn target_near_page_top_clamps_to_zero() {
    assert_eq!(anchor_scroll_target(50.0, 64.0, 20.0), 0.0);
    assert_eq!(anchor_scroll_target(0.0, 0.0, 0.0), 0.0);
}
