use crate::foundation::core::{Geometry, Rect};
use crate::foundation::ids::RegionId;

/// Geometry collaborator: the host's view of the rendered page.
///
/// Implementations report each region's box relative to its nearest positioned ancestor (its
/// offset parent), the same shape browsers expose through `offsetTop`/`offsetParent`.
pub trait GeometrySource {
    /// Box of `region` relative to its offset parent, or `None` when the region has no backing
    /// node (removed from the page, never inserted).
    fn offset_box(&self, region: RegionId) -> Option<Rect>;

    /// Nearest positioned ancestor of `region`; `None` at the page root.
    fn offset_parent(&self, region: RegionId) -> Option<RegionId>;
}

/// Name lookup for the regions a [`GeometrySource`] knows about.
///
/// Choreography documents address regions by name; the registry resolves them through this.
pub trait RegionNames {
    /// Handle for a region name.
    fn region_id(&self, name: &str) -> Option<RegionId>;

    /// Name of a region handle.
    fn region_name(&self, region: RegionId) -> Option<&str>;
}

/// Absolute geometry of `region`, or `None` when it (or any ancestor) is detached.
///
/// Offsets are summed up the whole offset-parent chain so nested positioned ancestors are
/// accounted for. A cyclic chain is cut at the first repeated region.
pub fn try_probe<S>(source: &S, region: RegionId) -> Option<Geometry>
where
    S: GeometrySource + ?Sized,
{
    let own = source.offset_box(region)?;
    let mut top = own.y0;
    let mut visited = vec![region];
    let mut cursor = source.offset_parent(region);

    while let Some(ancestor) = cursor {
        if visited.contains(&ancestor) {
            tracing::debug!(region = region.0, ancestor = ancestor.0, "offset-parent cycle");
            break;
        }
        let rect = source.offset_box(ancestor)?;
        top += rect.y0;
        visited.push(ancestor);
        cursor = source.offset_parent(ancestor);
    }

    Some(Geometry {
        top,
        height: own.height(),
        width: own.width(),
    })
}

/// Absolute geometry of `region`; detached regions report [`Geometry::DETACHED`].
pub fn probe<S>(source: &S, region: RegionId) -> Geometry
where
    S: GeometrySource + ?Sized,
{
    try_probe(source, region).unwrap_or(Geometry::DETACHED)
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/probe.rs"]
mod tests;
