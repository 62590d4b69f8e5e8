pub use kurbo::{Rect, Vec2};

/// Immutable per-tick scroll snapshot.
///
/// Every component evaluated within one tick reads the same snapshot; nothing in the crate reads
/// ambient scroll state.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ScrollState {
    /// Distance the visible window has moved from the top of the page, in pixels.
    pub scroll_top: f64,
    /// Height of the visible window, in pixels.
    pub viewport_height: f64,
}

impl ScrollState {
    /// Build a snapshot, replacing non-finite inputs with `0` and negative viewports with `0`.
    pub fn new(scroll_top: f64, viewport_height: f64) -> Self {
        let scroll_top = if scroll_top.is_finite() {
            scroll_top
        } else {
            0.0
        };
        let viewport_height = if viewport_height.is_finite() {
            viewport_height.max(0.0)
        } else {
            0.0
        };
        Self {
            scroll_top,
            viewport_height,
        }
    }

    /// Page coordinate of the bottom edge of the visible window.
    pub fn window_bottom(self) -> f64 {
        self.scroll_top + self.viewport_height
    }

    /// Same scroll offset with a different viewport height.
    pub fn with_viewport(self, viewport_height: f64) -> Self {
        Self::new(self.scroll_top, viewport_height)
    }
}

/// Absolute geometry of a region, as reported by the geometry probe.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Geometry {
    /// Distance from the top of the page to the region's top edge.
    pub top: f64,
    /// Rendered height.
    pub height: f64,
    /// Rendered width.
    pub width: f64,
}

impl Geometry {
    /// Geometry reported for a region that is not attached to the page.
    pub const DETACHED: Self = Self {
        top: 0.0,
        height: 0.0,
        width: 0.0,
    };

    /// Build geometry from its components.
    pub fn new(top: f64, height: f64, width: f64) -> Self {
        Self { top, height, width }
    }

    /// Page coordinate of the region's bottom edge.
    pub fn bottom(self) -> f64 {
        self.top + self.height
    }

    /// Top edge relative to the visible window (the bounding-rect `top`).
    pub fn top_in_viewport(self, scroll: ScrollState) -> f64 {
        self.top - scroll.scroll_top
    }

    /// `true` when at least part of the region lies inside the visible window.
    pub fn intersects_viewport(self, scroll: ScrollState) -> bool {
        let top = self.top_in_viewport(scroll);
        let bottom = top + self.height;
        bottom > 0.0 && top < scroll.viewport_height
    }

    /// Fraction of the region's height currently inside the visible window, in `[0, 1]`.
    ///
    /// Zero-height regions report `1` while their top edge is inside the window.
    pub fn visible_fraction(self, scroll: ScrollState) -> f64 {
        let top = self.top.max(scroll.scroll_top);
        let bottom = self.bottom().min(scroll.window_bottom());
        if self.height <= 0.0 {
            let inside = self.top >= scroll.scroll_top && self.top <= scroll.window_bottom();
            return if inside { 1.0 } else { 0.0 };
        }
        ((bottom - top) / self.height).clamp(0.0, 1.0)
    }
}

/// Unit attached to a translation offset.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LengthUnit {
    /// CSS pixels.
    Px,
    /// Percentage of the target's own size.
    Percent,
}

/// Translation along one or both axes.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Translate {
    /// Offset; `y` grows downward.
    pub offset: Vec2,
    /// Unit of both offset components.
    pub unit: LengthUnit,
}

impl Translate {
    /// Vertical pixel translation.
    pub fn y_px(y: f64) -> Self {
        Self {
            offset: Vec2::new(0.0, y),
            unit: LengthUnit::Px,
        }
    }

    /// Vertical percentage translation.
    pub fn y_percent(y: f64) -> Self {
        Self {
            offset: Vec2::new(0.0, y),
            unit: LengthUnit::Percent,
        }
    }

    /// Horizontal percentage translation.
    pub fn x_percent(x: f64) -> Self {
        Self {
            offset: Vec2::new(x, 0.0),
            unit: LengthUnit::Percent,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
