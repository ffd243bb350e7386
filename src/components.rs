use crate::coordinate::Coordinate;
use crate::grid_map::GridMap;
use log::debug;
use petgraph::unionfind::UnionFind;

/// [Connected components](https://en.wikipedia.org/wiki/Component_(graph_theory)) of the
/// traversable cells of a [GridMap] under 4-connectivity. A snapshot: rebuild it after the map
/// changes.
#[derive(Clone, Debug)]
pub struct Components {
    width: usize,
    height: usize,
    components: UnionFind<usize>,
}

impl Components {
    /// Links up every traversable cell with its traversable right and lower neighbours.
    pub fn new(map: &GridMap) -> Components {
        let (w, h) = (map.width(), map.height());
        let mut components = UnionFind::new(w * h);
        for y in 0..h as i32 {
            for x in 0..w as i32 {
                let point = Coordinate::new(x, y);
                if !map.can_move_to(point) {
                    continue;
                }
                let parent_ix = y as usize * w + x as usize;
                [Coordinate::new(x + 1, y), Coordinate::new(x, y + 1)]
                    .into_iter()
                    .filter(|p| map.can_move_to(*p))
                    .for_each(|p| {
                        components.union(parent_ix, p.y as usize * w + p.x as usize);
                    });
            }
        }
        debug!("Generated connected components for {w}x{h} map");
        Components {
            width: w,
            height: h,
            components,
        }
    }

    fn get_ix(&self, point: &Coordinate) -> Option<usize> {
        let in_bounds = point.x >= 0
            && point.y >= 0
            && (point.x as usize) < self.width
            && (point.y as usize) < self.height;
        in_bounds.then(|| point.y as usize * self.width + point.x as usize)
    }

    /// Retrieves the component id a given [Coordinate] belongs to.
    pub fn get_component(&self, point: &Coordinate) -> Option<usize> {
        self.get_ix(point).map(|ix| self.components.find(ix))
    }

    /// Checks if start and goal are on the same component. Off-map points reach nothing.
    ///
    /// Only traversable cells are linked, so a blocked cell is reachable from itself alone.
    pub fn reachable(&self, start: &Coordinate, goal: &Coordinate) -> bool {
        match (self.get_ix(start), self.get_ix(goal)) {
            (Some(s), Some(g)) => self.components.equiv(s, g),
            _ => false,
        }
    }

    /// Checks if start and goal are not on the same component.
    pub fn unreachable(&self, start: &Coordinate, goal: &Coordinate) -> bool {
        !self.reachable(start, goal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Tests whether points are correctly mapped to different connected components
    #[test]
    fn test_component_generation() {
        // Corresponds to the following 3x2 grid:
        //  ___
        // | # |
        // | # |
        //  ___
        let map: GridMap = ".T.\n.~.".parse().unwrap();
        let components = Components::new(&map);
        let p1 = Coordinate::new(0, 0);
        let p2 = Coordinate::new(1, 1);
        let p3 = Coordinate::new(0, 1);
        let p4 = Coordinate::new(2, 0);
        assert!(components.unreachable(&p1, &p2));
        assert!(components.reachable(&p1, &p3));
        assert!(components.unreachable(&p1, &p4));
        assert_eq!(components.get_component(&p1), components.get_component(&p3));
    }

    /// Asserts that the two corners are connected around a centre obstacle on a 4-grid.
    #[test]
    fn reachable_without_diagonals() {
        let map: GridMap = "...\n.T.\n...".parse().unwrap();
        let components = Components::new(&map);
        assert!(components.reachable(&Coordinate::new(0, 0), &Coordinate::new(2, 2)));
    }

    #[test]
    fn diagonal_contact_does_not_connect() {
        let map: GridMap = ".T\nT.".parse().unwrap();
        let components = Components::new(&map);
        assert!(components.unreachable(&Coordinate::new(0, 0), &Coordinate::new(1, 1)));
        assert!(components.unreachable(&Coordinate::new(0, 0), &Coordinate::new(5, 5)));
        assert_eq!(components.get_component(&Coordinate::new(-1, 0)), None);
    }
}
