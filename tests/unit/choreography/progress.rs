use super::*;

const CONTENT: Geometry = Geometry {
    top: 600.0,
    height: 5000.0,
    width: 720.0,
};

fn at(scroll_top: f64) -> ReadingProgress {
    reading_progress(CONTENT, ScrollState::new(scroll_top, 1000.0), 0.99)
}

#[test]
fn zero_before_and_at_content_top() {
    assert_eq!(at(0.0), ReadingProgress::ZERO);
    assert_eq!(at(599.0).fraction, 0.0);
    assert_eq!(at(600.0).fraction, 0.0);
}

#[test]
fn one_after_scrolling_through_the_scrollable_height() {
    // scrollable = 5000 - 1000
    let p = at(600.0 + 4000.0);
    assert_eq!(p.fraction, 1.0);
    assert_eq!(p.percent, 100);
    assert!(p.completed);
    assert_eq!(at(100_000.0).fraction, 1.0);
}

#[test]
fn midpoint_and_percent_rounding() {
    let p = at(600.0 + 2000.0);
    assert_eq!(p.fraction, 0.5);
    assert_eq!(p.percent, 50);
    assert!(!p.completed);

    let p = at(600.0 + 4000.0 * 0.1234);
    assert_eq!(p.percent, 12);
}

#[test]
fn completion_threshold_is_inclusive() {
    let p = at(600.0 + 4000.0 * 0.99);
    assert!(p.completed);
    let p = at(600.0 + 4000.0 * 0.98);
    assert!(!p.completed);
}

#[test]
fn monotonic_in_scroll_top() {
    let mut prev = 0.0;
    for i in 0..=600 {
        let f = at(f64::from(i) * 10.0).fraction;
        assert!(f >= prev);
        prev = f;
    }
}

#[test]
fn short_content_never_progresses() {
    let short = Geometry::new(600.0, 800.0, 720.0);
    let p = reading_progress(short, ScrollState::new(5000.0, 1000.0), 0.99);
    assert_eq!(p, ReadingProgress::ZERO);
    let exact = Geometry::new(600.0, 1000.0, 720.0);
    let p = reading_progress(exact, ScrollState::new(5000.0, 1000.0), 0.99);
    assert_eq!(p.fraction, 0.0);
}

#[test]
fn bar_state_scales_horizontally() {
    let s = at(600.0 + 1000.0).bar_state();
    assert_eq!(s.scale_x, Some(0.25));
    assert_eq!(s.opacity, None);
}
