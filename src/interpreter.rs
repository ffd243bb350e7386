//! Turns a coordinate sequence into the tiles a renderer draws: straight runs become edges,
//! turns and endpoints become nodes.
use crate::coordinate::Coordinate;
use crate::error::Result;
use crate::grid_map::GridMap;
use crate::path::Path;
use crate::terrain::Terrain;
use log::debug;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SegmentKind {
    HorizontalSegment,
    VerticalSegment,
    Node,
}

/// Classifies `curr` from its neighbours on the path. Without a `next` the path ends at `curr`,
/// which is always a node.
pub fn classify(prev: Coordinate, curr: Coordinate, next: Option<Coordinate>) -> SegmentKind {
    let Some(next) = next else {
        return SegmentKind::Node;
    };
    if prev.y == curr.y && curr.y == next.y {
        SegmentKind::HorizontalSegment
    } else if prev.x == curr.x && curr.x == next.x {
        SegmentKind::VerticalSegment
    } else {
        SegmentKind::Node
    }
}

/// Paints every interior coordinate of `path` with its segment marker and returns the
/// coordinates it touched, in path order. Start and goal keep their terrain. Nothing is
/// remembered here; pass the returned list to [clear_path] to undo.
pub fn apply_path(map: &mut GridMap, path: &Path) -> Result<Vec<Coordinate>> {
    for p in path {
        map.check_in_bounds(*p)?;
    }
    let mut touched = Vec::with_capacity(path.len().saturating_sub(2));
    for (p, kind) in path.interior() {
        map.set_terrain(p, kind.into())?;
        touched.push(p);
    }
    debug!(
        "Painted {} interior tiles of path {} -> {}",
        touched.len(),
        path.start(),
        path.goal()
    );
    Ok(touched)
}

/// Restores path markers at `touched` to open ground. Cells whose terrain is no longer a path
/// marker (a start or end placed since, for instance) are left alone.
pub fn clear_path(map: &mut GridMap, touched: &[Coordinate]) -> Result<()> {
    for &p in touched {
        if map.terrain_at(p)?.is_path_marker() {
            map.set_terrain(p, Terrain::OpenGround)?;
        }
    }
    Ok(())
}
