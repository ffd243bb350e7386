use crate::coordinate::Coordinate;
use crate::error::Result;
use crate::grid_map::GridMap;
use crate::path::Path;
use crate::search::best_first;
use core::fmt;
use log::info;
use std::time::{Duration, Instant};

/// The two search strategies. They share the traversal, neighbour order and tie-breaking and
/// differ only in the heuristic added to the accumulated cost, so both always find paths of
/// equal length and only the choice among equally short routes may differ.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// Uniform-cost search: priority is the accumulated cost alone.
    #[default]
    Dijkstra,
    /// Accumulated cost plus the
    /// [Manhattan distance](https://en.wikipedia.org/wiki/Taxicab_geometry) to the goal, which is
    /// admissible and consistent on a 4-connected unit-cost grid.
    AStar,
}

impl Strategy {
    pub const ALL: [Strategy; 2] = [Strategy::Dijkstra, Strategy::AStar];

    /// Estimated remaining cost from `point` to `goal`.
    pub fn heuristic(self, point: &Coordinate, goal: &Coordinate) -> u32 {
        match self {
            Strategy::Dijkstra => 0,
            Strategy::AStar => point.manhattan_distance(goal),
        }
    }

    pub fn find_path(
        self,
        map: &GridMap,
        start: Coordinate,
        goal: Coordinate,
    ) -> Result<Option<Path>> {
        find_path(map, start, goal, self)
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Strategy::Dijkstra => write!(f, "Dijkstra"),
            Strategy::AStar => write!(f, "A*"),
        }
    }
}

/// A search result together with the effort it took.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchReport {
    /// `None` when the goal cannot be reached from the start.
    pub path: Option<Path>,
    /// Nodes taken off the frontier and expanded, not counting the goal.
    pub expanded: usize,
    pub elapsed: Duration,
}

/// Computes a shortest 4-connected path from `start` to `goal`.
///
/// Returns `Ok(None)` if the goal is unreachable and
/// [Error::OutOfBounds](crate::Error::OutOfBounds) if either endpoint lies off the map. The
/// terrain of the endpoints themselves is not checked.
pub fn find_path(
    map: &GridMap,
    start: Coordinate,
    goal: Coordinate,
    strategy: Strategy,
) -> Result<Option<Path>> {
    search(map, start, goal, strategy).map(|report| report.path)
}

/// Like [find_path] but also reports how many nodes were expanded and how long it took.
pub fn search(
    map: &GridMap,
    start: Coordinate,
    goal: Coordinate,
    strategy: Strategy,
) -> Result<SearchReport> {
    map.check_in_bounds(start)?;
    map.check_in_bounds(goal)?;
    let timer = Instant::now();
    let outcome = best_first(
        &start,
        |node| map.neighborhood_points_and_cost(node),
        |node| strategy.heuristic(node, &goal),
        |node| *node == goal,
    );
    let elapsed = timer.elapsed();
    let path = outcome.path.map(|(steps, _cost)| Path::from_search(steps));
    match &path {
        Some(path) => info!(
            "{strategy}: {} moves from {start} to {goal}, expanded {} nodes in {:.2} ms",
            path.moves(),
            outcome.expanded,
            elapsed.as_secs_f64() * 1000.0
        ),
        None => info!(
            "{strategy}: {goal} is not reachable from {start}, expanded {} nodes",
            outcome.expanded
        ),
    }
    Ok(SearchReport {
        path,
        expanded: outcome.expanded,
        elapsed,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::terrain::Terrain;

    /// Asserts that the case in which start and goal are equal is handled correctly.
    #[test]
    fn equal_start_goal() {
        for strategy in Strategy::ALL {
            let map = GridMap::new(1, 1);
            let start = Coordinate::new(0, 0);
            let path = find_path(&map, start, start, strategy).unwrap().unwrap();
            assert_eq!(path.as_slice(), &[start]);
        }
    }

    /// Asserts that the optimal 4 move solution is found around a centre obstacle.
    #[test]
    fn solve_simple_problem() {
        //  ___
        // |S  |
        // | # |
        // |  E|
        //  ___
        let mut map = GridMap::new(3, 3);
        map.set_terrain(Coordinate::new(1, 1), Terrain::Tree).unwrap();
        for strategy in Strategy::ALL {
            let path = find_path(&map, Coordinate::new(0, 0), Coordinate::new(2, 2), strategy)
                .unwrap()
                .unwrap();
            assert_eq!(path.len(), 5);
        }
    }

    #[test]
    fn test_complex() {
        let mut map = GridMap::new(10, 10);
        map.fill_rect(Coordinate::new(1, 1), 1, 1, Terrain::Tree);
        map.fill_rect(Coordinate::new(5, 0), 1, 1, Terrain::Water);
        map.fill_rect(Coordinate::new(0, 5), 1, 1, Terrain::Water);
        map.fill_rect(Coordinate::new(8, 8), 1, 1, Terrain::Tree);
        for strategy in Strategy::ALL {
            let path = find_path(&map, Coordinate::new(0, 0), Coordinate::new(7, 7), strategy)
                .unwrap()
                .unwrap();
            assert_eq!(path.len(), 15);
        }
    }

    /// Diagonal neighbours never connect on a 4-grid.
    #[test]
    fn no_diagonal_moves() {
        //  __
        // |.T|
        // |T.|
        //  __
        let map: GridMap = ".T\nT.".parse().unwrap();
        for strategy in Strategy::ALL {
            let path = find_path(&map, Coordinate::new(0, 0), Coordinate::new(1, 1), strategy);
            assert_eq!(path, Ok(None));
        }
    }

    #[test]
    fn endpoints_out_of_bounds() {
        let map = GridMap::new(3, 3);
        let outside = Coordinate::new(3, 0);
        for strategy in Strategy::ALL {
            let expected = Err(Error::OutOfBounds {
                coordinate: outside,
                width: 3,
                height: 3,
            });
            assert_eq!(find_path(&map, outside, Coordinate::new(0, 0), strategy), expected);
            assert_eq!(find_path(&map, Coordinate::new(0, 0), outside, strategy), expected);
        }
    }

    /// A blocked start is searched from as usual; a blocked goal can never be entered.
    #[test]
    fn blocked_endpoints_are_not_special_cased() {
        let map: GridMap = "T..T".parse().unwrap();
        let blocked_start = Coordinate::new(0, 0);
        let blocked_goal = Coordinate::new(3, 0);
        for strategy in Strategy::ALL {
            let path = find_path(&map, blocked_start, Coordinate::new(2, 0), strategy).unwrap();
            assert_eq!(path.map(|p| p.len()), Some(3));
            let path = find_path(&map, Coordinate::new(1, 0), blocked_goal, strategy).unwrap();
            assert_eq!(path, None);
            let path = find_path(&map, blocked_start, blocked_start, strategy).unwrap();
            assert_eq!(path.map(|p| p.len()), Some(1));
        }
    }

    /// Drawn path markers and placed endpoints stay walkable.
    #[test]
    fn markers_are_walkable() {
        let map: GridMap = "S-+|E".parse().unwrap();
        for strategy in Strategy::ALL {
            let path = find_path(&map, Coordinate::new(0, 0), Coordinate::new(4, 0), strategy)
                .unwrap()
                .unwrap();
            assert_eq!(path.moves(), 4);
        }
    }

    /// On open ground Dijkstra settles every closer cell before the goal; A* goes straight.
    #[test]
    fn astar_expands_fewer_nodes() {
        let map = GridMap::new(20, 20);
        let start = Coordinate::new(0, 0);
        let goal = Coordinate::new(19, 0);
        let dijkstra = search(&map, start, goal, Strategy::Dijkstra).unwrap();
        let astar = search(&map, start, goal, Strategy::AStar).unwrap();
        assert_eq!(dijkstra.path.as_ref().map(Path::len), Some(20));
        assert_eq!(astar.path.as_ref().map(Path::len), Some(20));
        assert_eq!(astar.expanded, 19);
        assert!(dijkstra.expanded > astar.expanded);
    }

    /// Tie-breaking is deterministic: repeated searches return the same route.
    #[test]
    fn repeatable() {
        let map = GridMap::new(6, 6);
        for strategy in Strategy::ALL {
            let first = find_path(&map, Coordinate::new(0, 0), Coordinate::new(5, 5), strategy);
            for _ in 0..5 {
                let again =
                    find_path(&map, Coordinate::new(0, 0), Coordinate::new(5, 5), strategy);
                assert_eq!(first, again);
            }
        }
    }
}
