//! # grid_route
//!
//! Shortest walkable routes on a 4-connected terrain grid. Two interchangeable strategies,
//! uniform-cost search ([Dijkstra](https://en.wikipedia.org/wiki/Dijkstra%27s_algorithm)) and
//! heuristic-guided search ([A*](https://en.wikipedia.org/wiki/A*_search_algorithm)) with the
//! Manhattan distance, always agree on path length. Found paths can be turned into tile markers
//! (straight horizontal and vertical segments, and nodes where the route turns) and walked step
//! by step.
//!
//! ```
//! use grid_route::{find_path, Coordinate, GridMap, Strategy};
//!
//! let map: GridMap = "....\n.TT.\n....".parse().unwrap();
//! let path = find_path(&map, Coordinate::new(0, 1), Coordinate::new(3, 1), Strategy::AStar)
//!     .unwrap()
//!     .expect("the trees can be walked around");
//! assert_eq!(path.moves(), 5);
//! ```
mod search;

pub mod components;
pub mod coordinate;
pub mod error;
pub mod grid_map;
pub mod interpreter;
pub mod markers;
pub mod path;
pub mod playback;
pub mod solver;
pub mod terrain;

pub use components::Components;
pub use coordinate::Coordinate;
pub use error::{Error, Result};
pub use grid_map::GridMap;
pub use interpreter::{apply_path, classify, clear_path, SegmentKind};
pub use markers::Markers;
pub use path::Path;
pub use playback::{Playback, PlaybackConfig, Step};
pub use solver::{find_path, search, SearchReport, Strategy};
pub use terrain::{is_traversable, Cell, Terrain};

/// Cost of a single orthogonal move.
pub const UNIT_COST: u32 = 1;
/// Default time between two playback steps, in milliseconds.
pub const DEFAULT_STEP_MILLIS: u64 = 200;
