use crate::coordinate::Coordinate;
use crate::error::{Error, Result};
use crate::grid_map::GridMap;
use crate::terrain::Terrain;
use log::debug;

/// Where the user put the start and end markers. Owned by the application and passed to the
/// map explicitly; the solver never sees it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Markers {
    start: Option<Coordinate>,
    end: Option<Coordinate>,
}

impl Markers {
    pub fn new() -> Markers {
        Markers::default()
    }

    pub fn start(&self) -> Option<Coordinate> {
        self.start
    }
    pub fn end(&self) -> Option<Coordinate> {
        self.end
    }

    /// Both markers, once both are placed.
    pub fn endpoints(&self) -> Option<(Coordinate, Coordinate)> {
        self.start.zip(self.end)
    }

    /// Markers go on open ground or over an existing marker.
    fn check_placeable(map: &GridMap, point: Coordinate) -> Result<()> {
        let terrain = map.terrain_at(point)?;
        match terrain {
            Terrain::OpenGround | Terrain::Start | Terrain::End => Ok(()),
            _ => Err(Error::MarkerBlocked {
                coordinate: point,
                terrain,
            }),
        }
    }

    /// Checks that every cell a placement or clear would write lies on `map`, so that nothing
    /// is written unless everything can be.
    fn check_writable(map: &GridMap, points: &[Option<Coordinate>]) -> Result<()> {
        points
            .iter()
            .flatten()
            .try_for_each(|point| map.check_in_bounds(*point))
    }

    /// Moves the start marker to `point`. Taking over the end marker's cell removes the end.
    /// On error neither the markers nor the map change.
    pub fn place_start(&mut self, map: &mut GridMap, point: Coordinate) -> Result<()> {
        Markers::check_placeable(map, point)?;
        Markers::check_writable(map, &[self.start])?;
        if let Some(previous) = self.start {
            map.set_terrain(previous, Terrain::OpenGround)?;
        }
        map.set_terrain(point, Terrain::Start)?;
        if self.end == Some(point) {
            self.end = None;
        }
        self.start = Some(point);
        debug!("Start marker placed at {point}");
        Ok(())
    }

    /// Moves the end marker to `point`. Requires a start marker; taking over the start marker's
    /// cell removes the start. On error neither the markers nor the map change.
    pub fn place_end(&mut self, map: &mut GridMap, point: Coordinate) -> Result<()> {
        if self.start.is_none() {
            return Err(Error::MissingStart);
        }
        Markers::check_placeable(map, point)?;
        Markers::check_writable(map, &[self.end])?;
        if let Some(previous) = self.end {
            map.set_terrain(previous, Terrain::OpenGround)?;
        }
        map.set_terrain(point, Terrain::End)?;
        if self.start == Some(point) {
            self.start = None;
        }
        self.end = Some(point);
        debug!("End marker placed at {point}");
        Ok(())
    }

    /// Turns both markers back into open ground and forgets them. On error neither the markers
    /// nor the map change.
    pub fn clear(&mut self, map: &mut GridMap) -> Result<()> {
        let placed = [self.start, self.end];
        Markers::check_writable(map, &placed)?;
        for point in placed.into_iter().flatten() {
            map.set_terrain(point, Terrain::OpenGround)?;
        }
        self.reset();
        Ok(())
    }

    /// Forgets both markers without touching any map, e.g. after the map was replaced.
    pub fn reset(&mut self) {
        *self = Markers::default();
    }
}
