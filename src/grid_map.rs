use crate::coordinate::Coordinate;
use crate::error::{Error, Result};
use crate::terrain::{is_traversable, Cell, Terrain};
use crate::UNIT_COST;
use core::fmt;
use smallvec::SmallVec;
use std::str::FromStr;

/// A fixed-size rectangle of [Cell]s stored row-major. The dimensions never change; build a new
/// map to resize. Every `(x, y)` inside the bounds holds exactly one cell whose position is
/// `(x, y)`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GridMap {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Default for GridMap {
    fn default() -> GridMap {
        GridMap::new(0, 0)
    }
}

impl GridMap {
    /// A map of open ground.
    pub fn new(width: usize, height: usize) -> GridMap {
        GridMap::from_fn(width, height, |_| Terrain::OpenGround)
    }

    /// Builds a map by asking `terrain` for the classification of every position.
    pub fn from_fn<F>(width: usize, height: usize, mut terrain: F) -> GridMap
    where
        F: FnMut(Coordinate) -> Terrain,
    {
        let cells = (0..height)
            .flat_map(|y| (0..width).map(move |x| Coordinate::new(x as i32, y as i32)))
            .map(|position| Cell::new(position, terrain(position)))
            .collect();
        GridMap {
            width,
            height,
            cells,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }
    pub fn height(&self) -> usize {
        self.height
    }

    pub fn in_bounds(&self, point: Coordinate) -> bool {
        point.x >= 0
            && point.y >= 0
            && (point.x as usize) < self.width
            && (point.y as usize) < self.height
    }

    /// Fails fast with [Error::OutOfBounds] for coordinates off the map.
    pub fn check_in_bounds(&self, point: Coordinate) -> Result<()> {
        if self.in_bounds(point) {
            Ok(())
        } else {
            Err(Error::OutOfBounds {
                coordinate: point,
                width: self.width,
                height: self.height,
            })
        }
    }

    fn get_ix(&self, point: Coordinate) -> Result<usize> {
        self.check_in_bounds(point)?;
        Ok(point.y as usize * self.width + point.x as usize)
    }

    pub fn cell_at(&self, x: i32, y: i32) -> Result<&Cell> {
        self.cell(Coordinate::new(x, y))
    }

    pub fn cell(&self, point: Coordinate) -> Result<&Cell> {
        let cell = &self.cells[self.get_ix(point)?];
        debug_assert_eq!(cell.position(), point);
        Ok(cell)
    }

    pub fn terrain_at(&self, point: Coordinate) -> Result<Terrain> {
        self.cell(point).map(Cell::terrain)
    }

    /// Overwrites the terrain at `point`, returning what was there before.
    pub fn set_terrain(&mut self, point: Coordinate, terrain: Terrain) -> Result<Terrain> {
        let ix = self.get_ix(point)?;
        Ok(self.cells[ix].set_terrain(terrain))
    }

    /// Sets every in-bounds cell of the `width` x `height` rectangle with top-left corner
    /// `corner`. Parts of the rectangle outside the map are ignored.
    pub fn fill_rect(&mut self, corner: Coordinate, width: usize, height: usize, terrain: Terrain) {
        for dy in 0..height as i32 {
            for dx in 0..width as i32 {
                let p = Coordinate::new(corner.x + dx, corner.y + dy);
                if let Ok(ix) = self.get_ix(p) {
                    self.cells[ix].set_terrain(terrain);
                }
            }
        }
    }

    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    /// In bounds and traversable.
    pub fn can_move_to(&self, point: Coordinate) -> bool {
        self.cell(point).map_or(false, is_traversable)
    }

    /// Traversable 4-neighbours of `point` with their move cost.
    pub fn neighborhood_points_and_cost(
        &self,
        point: &Coordinate,
    ) -> SmallVec<[(Coordinate, u32); 4]> {
        point
            .neumann_neighborhood()
            .into_iter()
            .filter(|p| self.can_move_to(*p))
            .map(|p| (p, UNIT_COST))
            .collect()
    }

    /// Checks that every cell sits in the slot matching its position.
    pub fn validate(&self) -> Result<()> {
        debug_assert_eq!(self.cells.len(), self.width * self.height);
        for (ix, cell) in self.cells.iter().enumerate() {
            let slot = Coordinate::new((ix % self.width) as i32, (ix / self.width) as i32);
            cell.check_slot(slot)?;
        }
        Ok(())
    }
}

/// One glyph per cell, one line per row, see [Terrain::glyph].
impl fmt::Display for GridMap {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in self.cells.chunks(self.width.max(1)) {
            let line: String = row.iter().map(|c| c.terrain().glyph()).collect();
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

/// Parses the [Display](fmt::Display) form. Blank lines and surrounding whitespace are ignored.
impl FromStr for GridMap {
    type Err = Error;

    fn from_str(s: &str) -> Result<GridMap> {
        let rows: Vec<&str> = s
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .collect();
        let width = rows.first().map_or(0, |r| r.chars().count());
        let mut terrain = Vec::with_capacity(width * rows.len());
        for (y, row) in rows.iter().enumerate() {
            let found = row.chars().count();
            if found != width {
                return Err(Error::RaggedRows {
                    row: y,
                    found,
                    expected: width,
                });
            }
            for (x, glyph) in row.chars().enumerate() {
                let t = Terrain::from_glyph(glyph).ok_or(Error::UnknownGlyph {
                    glyph,
                    row: y,
                    column: x,
                })?;
                terrain.push(t);
            }
        }
        let mut cells = terrain.into_iter();
        Ok(GridMap::from_fn(width, rows.len(), |_| {
            cells.next().unwrap_or_default()
        }))
    }
}
