//! Terrain classification and the traversability policy shared by every search strategy.
use crate::coordinate::Coordinate;
use crate::interpreter::SegmentKind;
use crate::error::{Error, Result};

/// What occupies a cell. Obstacles block movement; path markers are drawn over open ground
/// and stay walkable so a new search can cross an old route.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Terrain {
    #[default]
    OpenGround,
    Tree,
    Water,
    Node,
    HorizontalEdge,
    VerticalEdge,
    Start,
    End,
}

impl Terrain {
    pub const ALL: [Terrain; 8] = [
        Terrain::OpenGround,
        Terrain::Tree,
        Terrain::Water,
        Terrain::Node,
        Terrain::HorizontalEdge,
        Terrain::VerticalEdge,
        Terrain::Start,
        Terrain::End,
    ];

    pub fn is_traversable(self) -> bool {
        match self {
            Terrain::OpenGround
            | Terrain::Node
            | Terrain::HorizontalEdge
            | Terrain::VerticalEdge
            | Terrain::Start
            | Terrain::End => true,
            Terrain::Tree | Terrain::Water => false,
        }
    }

    /// Markers written by the path interpreter.
    pub fn is_path_marker(self) -> bool {
        matches!(
            self,
            Terrain::Node | Terrain::HorizontalEdge | Terrain::VerticalEdge
        )
    }

    /// Single character used by the text form of a [GridMap](crate::grid_map::GridMap).
    pub fn glyph(self) -> char {
        match self {
            Terrain::OpenGround => '.',
            Terrain::Tree => 'T',
            Terrain::Water => '~',
            Terrain::Node => '+',
            Terrain::HorizontalEdge => '-',
            Terrain::VerticalEdge => '|',
            Terrain::Start => 'S',
            Terrain::End => 'E',
        }
    }

    pub fn from_glyph(glyph: char) -> Option<Terrain> {
        Terrain::ALL.into_iter().find(|t| t.glyph() == glyph)
    }
}

impl From<SegmentKind> for Terrain {
    fn from(kind: SegmentKind) -> Terrain {
        match kind {
            SegmentKind::HorizontalSegment => Terrain::HorizontalEdge,
            SegmentKind::VerticalSegment => Terrain::VerticalEdge,
            SegmentKind::Node => Terrain::Node,
        }
    }
}

/// A grid slot. The position is fixed at construction; only the terrain changes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cell {
    position: Coordinate,
    terrain: Terrain,
}

impl Cell {
    pub fn new(position: Coordinate, terrain: Terrain) -> Cell {
        Cell { position, terrain }
    }
    pub fn position(&self) -> Coordinate {
        self.position
    }
    pub fn terrain(&self) -> Terrain {
        self.terrain
    }
    pub(crate) fn set_terrain(&mut self, terrain: Terrain) -> Terrain {
        std::mem::replace(&mut self.terrain, terrain)
    }
    /// Checks the cell against the slot it is stored in.
    pub(crate) fn check_slot(&self, slot: Coordinate) -> Result<()> {
        if self.position == slot {
            Ok(())
        } else {
            Err(Error::InconsistentCell {
                slot,
                reported: self.position,
            })
        }
    }
}

/// Whether a search may enter `cell`.
pub fn is_traversable(cell: &Cell) -> bool {
    cell.terrain().is_traversable()
}
