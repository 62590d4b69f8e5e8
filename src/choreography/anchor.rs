/// Scroll offset that brings an in-page anchor target just below the page chrome.
///
/// Never negative.
pub fn anchor_scroll_target(target_top: f64, chrome_height: f64, margin: f64) -> f64 {
    (target_top - chrome_height - margin).max(0.0)
}

#[cfg(test)]
#[path = "../../tests/unit/choreography/anchor.rs"]
mod tests;
