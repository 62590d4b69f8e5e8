use std::collections::HashMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::foundation::core::Rect;
use crate::foundation::error::{ChoreoError, ChoreoResult};
use crate::foundation::ids::RegionId;
use crate::geometry::probe::{GeometrySource, RegionNames};

/// JSON-facing description of one page region.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct RegionDef {
    /// Unique region name referenced by the choreography registry.
    pub name: String,
    /// Name of the offset parent; omitted for regions positioned against the page root.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<String>,
    /// Offset from the parent's top edge.
    pub top: f64,
    /// Offset from the parent's left edge.
    #[serde(default)]
    pub left: f64,
    /// Rendered width.
    #[serde(default)]
    pub width: f64,
    /// Rendered height.
    pub height: f64,
    /// `true` for regions declared but not currently attached to the page.
    #[serde(default)]
    pub detached: bool,
}

/// JSON-facing description of a whole page.
#[derive(Clone, Debug, Default, serde::Serialize, serde::Deserialize)]
pub struct PageLayoutDef {
    /// Regions in any order; parents may be declared after their children.
    pub regions: Vec<RegionDef>,
}

#[derive(Clone, Debug)]
struct LayoutNode {
    name: String,
    parent: Option<RegionId>,
    rect: Option<Rect>,
}

/// In-memory page layout: an arena of named regions with offset-parent links.
///
/// This is the reference [`GeometrySource`]. Hosts that own a real layout engine implement the
/// trait directly; tests and the CLI describe pages with a [`PageLayoutDef`].
#[derive(Clone, Debug, Default, serde::Deserialize)]
#[serde(try_from = "PageLayoutDef")]
pub struct PageLayout {
    nodes: Vec<LayoutNode>,
    ids_by_name: HashMap<String, RegionId>,
}

impl TryFrom<PageLayoutDef> for PageLayout {
    type Error = ChoreoError;

    fn try_from(def: PageLayoutDef) -> ChoreoResult<Self> {
        Self::from_def(&def)
    }
}

impl PageLayout {
    /// Create an empty layout.
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve a layout description, rejecting duplicate names and unknown parents.
    pub fn from_def(def: &PageLayoutDef) -> ChoreoResult<Self> {
        let mut out = Self::new();
        for r in &def.regions {
            if out.ids_by_name.contains_key(&r.name) {
                return Err(ChoreoError::validation(format!(
                    "layout region '{}' is declared twice",
                    r.name
                )));
            }
            let rect = region_rect(r)?;
            out.push_node(&r.name, None, (!r.detached).then_some(rect));
        }

        for (i, r) in def.regions.iter().enumerate() {
            let Some(parent) = r.parent.as_deref() else {
                continue;
            };
            let Some(pid) = out.id(parent) else {
                return Err(ChoreoError::validation(format!(
                    "layout region '{}' references unknown parent '{parent}'",
                    r.name
                )));
            };
            out.nodes[i].parent = Some(pid);
        }
        Ok(out)
    }

    /// Parse a layout description from JSON.
    pub fn from_reader<R: std::io::Read>(r: R) -> ChoreoResult<Self> {
        let def: PageLayoutDef = serde_json::from_reader(r)
            .map_err(|e| ChoreoError::serde(format!("parse page layout JSON: {e}")))?;
        Self::from_def(&def)
    }

    /// Parse a layout description from a JSON file.
    pub fn from_path(path: impl AsRef<Path>) -> ChoreoResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            ChoreoError::geometry(format!("open page layout '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Add a region; returns the existing handle if `name` is already present.
    pub fn insert(&mut self, name: &str, parent: Option<RegionId>, rect: Rect) -> RegionId {
        if let Some(id) = self.id(name) {
            let node = &mut self.nodes[id.index()];
            node.parent = parent;
            node.rect = Some(rect);
            return id;
        }
        self.push_node(name, parent, Some(rect))
    }

    /// Replace a region's box (dynamic content, image load, resize).
    pub fn set_rect(&mut self, id: RegionId, rect: Rect) {
        if let Some(node) = self.nodes.get_mut(id.index()) {
            node.rect = Some(rect);
        }
    }

    /// Mark a region as removed from the page; its handle stays valid.
    pub fn detach(&mut self, id: RegionId) {
        if let Some(node) = self.nodes.get_mut(id.index()) {
            node.rect = None;
        }
    }

    /// Handle for a region name.
    pub fn id(&self, name: &str) -> Option<RegionId> {
        self.ids_by_name.get(name).copied()
    }

    /// Name of a region handle.
    pub fn name(&self, id: RegionId) -> Option<&str> {
        self.nodes.get(id.index()).map(|n| n.name.as_str())
    }

    /// Number of regions, attached or not.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// `true` when no region has been declared.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    fn push_node(&mut self, name: &str, parent: Option<RegionId>, rect: Option<Rect>) -> RegionId {
        let id = RegionId(u32::try_from(self.nodes.len()).unwrap_or(u32::MAX));
        self.nodes.push(LayoutNode {
            name: name.to_owned(),
            parent,
            rect,
        });
        self.ids_by_name.insert(name.to_owned(), id);
        id
    }
}

impl GeometrySource for PageLayout {
    fn offset_box(&self, region: RegionId) -> Option<Rect> {
        self.nodes.get(region.index())?.rect
    }

    fn offset_parent(&self, region: RegionId) -> Option<RegionId> {
        self.nodes.get(region.index())?.parent
    }
}

impl RegionNames for PageLayout {
    fn region_id(&self, name: &str) -> Option<RegionId> {
        self.id(name)
    }

    fn region_name(&self, region: RegionId) -> Option<&str> {
        self.name(region)
    }
}

fn region_rect(r: &RegionDef) -> ChoreoResult<Rect> {
    let values = [r.top, r.left, r.width, r.height];
    if values.iter().any(|v| !v.is_finite()) {
        return Err(ChoreoError::validation(format!(
            "layout region '{}' has a non-finite box",
            r.name
        )));
    }
    if r.width < 0.0 || r.height < 0.0 {
        return Err(ChoreoError::validation(format!(
            "layout region '{}' has a negative size",
            r.name
        )));
    }
    Ok(Rect::new(r.left, r.top, r.left + r.width, r.top + r.height))
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/layout.rs"]
mod tests;
