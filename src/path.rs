use crate::coordinate::Coordinate;
use crate::error::{Error, Result};
use crate::interpreter::{classify, SegmentKind};
use fxhash::FxHashSet;
use itertools::Itertools;
use std::ops::Index;

/// An ordered walk from start to goal, both inclusive. Never empty, never revisits a
/// coordinate, and every step moves exactly one cell along one axis.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Path(Vec<Coordinate>);

impl Path {
    /// Validates `steps` before wrapping them.
    pub fn new(steps: Vec<Coordinate>) -> Result<Path> {
        if steps.is_empty() {
            return Err(Error::EmptyPath);
        }
        for (index, (from, to)) in steps.iter().tuple_windows().enumerate() {
            if !from.is_adjacent(to) {
                return Err(Error::NonContiguousPath {
                    index: index + 1,
                    from: *from,
                    to: *to,
                });
            }
        }
        let mut seen = FxHashSet::default();
        if let Some(coordinate) = steps.iter().find(|c| !seen.insert(**c)) {
            return Err(Error::RepeatedCoordinate {
                coordinate: *coordinate,
            });
        }
        Ok(Path(steps))
    }

    /// Wraps search output, which upholds the invariants by construction.
    pub(crate) fn from_search(steps: Vec<Coordinate>) -> Path {
        debug_assert!(Path::new(steps.clone()).is_ok());
        Path(steps)
    }

    pub fn start(&self) -> Coordinate {
        self.0[0]
    }
    pub fn goal(&self) -> Coordinate {
        self.0[self.0.len() - 1]
    }
    /// Number of coordinates, including start and goal.
    pub fn len(&self) -> usize {
        self.0.len()
    }
    /// Always false; kept for the `len`/`is_empty` pairing.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    /// Number of unit moves, which is also the path cost.
    pub fn moves(&self) -> usize {
        self.0.len() - 1
    }
    pub fn as_slice(&self) -> &[Coordinate] {
        &self.0
    }
    pub fn iter(&self) -> std::slice::Iter<'_, Coordinate> {
        self.0.iter()
    }
    pub fn into_inner(self) -> Vec<Coordinate> {
        self.0
    }

    /// Every coordinate with the tile it should be drawn as. Endpoints are always nodes.
    pub fn segments(&self) -> impl Iterator<Item = (Coordinate, SegmentKind)> + '_ {
        let last = self.0.len() - 1;
        self.0.iter().enumerate().map(move |(i, &curr)| {
            let kind = if i == 0 || i == last {
                SegmentKind::Node
            } else {
                classify(self.0[i - 1], curr, Some(self.0[i + 1]))
            };
            (curr, kind)
        })
    }

    /// Coordinates strictly between start and goal with their tiles.
    pub fn interior(&self) -> impl Iterator<Item = (Coordinate, SegmentKind)> + '_ {
        self.0
            .iter()
            .tuple_windows()
            .map(|(&prev, &curr, &next)| (curr, classify(prev, curr, Some(next))))
    }
}

impl Index<usize> for Path {
    type Output = Coordinate;

    fn index(&self, index: usize) -> &Coordinate {
        &self.0[index]
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a Coordinate;
    type IntoIter = std::slice::Iter<'a, Coordinate>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl IntoIterator for Path {
    type Item = Coordinate;
    type IntoIter = std::vec::IntoIter<Coordinate>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coords(v: &[(i32, i32)]) -> Vec<Coordinate> {
        v.iter().map(|&p| p.into()).collect()
    }

    #[test]
    fn rejects_malformed_paths() {
        assert_eq!(Path::new(vec![]), Err(Error::EmptyPath));
        assert_eq!(
            Path::new(coords(&[(0, 0), (1, 0), (2, 1)])),
            Err(Error::NonContiguousPath {
                index: 2,
                from: Coordinate::new(1, 0),
                to: Coordinate::new(2, 1),
            })
        );
        assert_eq!(
            Path::new(coords(&[(0, 0), (1, 0), (1, 1), (0, 1), (0, 0)])),
            Err(Error::RepeatedCoordinate {
                coordinate: Coordinate::new(0, 0)
            })
        );
    }

    #[test]
    fn single_coordinate_path() {
        let path = Path::new(coords(&[(3, 3)])).unwrap();
        assert_eq!(path.start(), path.goal());
        assert_eq!(path.moves(), 0);
        assert_eq!(path.interior().count(), 0);
        assert_eq!(
            path.segments().collect::<Vec<_>>(),
            vec![(Coordinate::new(3, 3), SegmentKind::Node)]
        );
    }

    #[test]
    fn segments_mark_endpoints_as_nodes() {
        let path = Path::new(coords(&[(0, 0), (1, 0), (2, 0), (2, 1), (2, 2)])).unwrap();
        let kinds: Vec<SegmentKind> = path.segments().map(|(_, k)| k).collect();
        assert_eq!(
            kinds,
            vec![
                SegmentKind::Node,
                SegmentKind::HorizontalSegment,
                SegmentKind::Node,
                SegmentKind::VerticalSegment,
                SegmentKind::Node,
            ]
        );
        let interior: Vec<SegmentKind> = path.interior().map(|(_, k)| k).collect();
        assert_eq!(interior, kinds[1..4]);
    }
}
