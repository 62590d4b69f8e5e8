use crate::foundation::core::Geometry;
use crate::foundation::ids::RegionId;
use crate::geometry::probe::{GeometrySource, try_probe};

/// Cached absolute geometry for every tracked region.
///
/// Written only by [`GeometryCache::refresh`] (startup, resize, load); read by every tick. `None`
/// marks a region the source could not describe at the last refresh.
#[derive(Debug, Default, Clone)]
pub struct GeometryCache {
    by_region: Vec<Option<Geometry>>,
    tracked: Vec<RegionId>,
}

impl GeometryCache {
    /// Cache that will track `regions` (duplicates are ignored).
    pub fn new(regions: impl IntoIterator<Item = RegionId>) -> Self {
        let mut tracked: Vec<RegionId> = regions.into_iter().collect();
        tracked.sort_unstable();
        tracked.dedup();
        let len = tracked.last().map_or(0, |id| id.index() + 1);
        Self {
            by_region: vec![None; len],
            tracked,
        }
    }

    /// Re-probe every tracked region. Returns how many are currently missing.
    pub fn refresh<S>(&mut self, source: &S) -> usize
    where
        S: GeometrySource + ?Sized,
    {
        let mut missing = 0;
        for &id in &self.tracked {
            let g = try_probe(source, id);
            if g.is_none() {
                missing += 1;
            }
            self.by_region[id.index()] = g;
        }
        missing
    }

    /// Cached geometry for `id`, if tracked and present.
    pub fn get(&self, id: RegionId) -> Option<Geometry> {
        self.by_region.get(id.index()).copied().flatten()
    }

    /// Tracked regions in handle order.
    pub fn tracked(&self) -> &[RegionId] {
        &self.tracked
    }
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/cache.rs"]
mod tests;
