//! Nearest-sample queries over a sampled path.
//!
//! The index is a brute-force linear scan. At the scale this engine
//! runs at (N ≈ 50 samples, one query per pointer move) that is the
//! whole requirement; the contract below stays the same if an
//! implementation ever swaps in a grid or k-d tree.

use serde::{Deserialize, Serialize};

use crate::types::Point;

/// The result of a nearest-sample query.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Nearest {
    /// Index of the nearest sample point.
    pub index: usize,
    /// Euclidean distance to it, in the samples' coordinate space.
    pub distance: f64,
}

/// Answers "which sample point is closest to (x, y)" for a fixed
/// sample sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProximityIndex {
    samples: Vec<Point>,
}

impl ProximityIndex {
    /// Wrap a sample sequence for repeated nearest-point queries.
    #[must_use]
    pub const fn new(samples: Vec<Point>) -> Self {
        Self { samples }
    }

    /// The wrapped sample points, in path order.
    #[must_use]
    pub fn samples(&self) -> &[Point] {
        &self.samples
    }

    /// Number of sample points.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.samples.len()
    }

    /// Returns `true` if there are no sample points.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// The Euclidean-nearest sample to `point` and its distance.
    ///
    /// Ties keep the earliest index. Returns `None` only for an empty
    /// sample sequence.
    #[must_use]
    pub fn nearest(&self, point: Point) -> Option<Nearest> {
        let mut best: Option<(usize, f64)> = None;
        for (index, &sample) in self.samples.iter().enumerate() {
            let d2 = point.distance_squared(sample);
            if best.is_none_or(|(_, best_d2)| d2 < best_d2) {
                best = Some((index, d2));
            }
        }
        best.map(|(index, d2)| Nearest {
            index,
            distance: d2.sqrt(),
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn index_of(coords: &[(f64, f64)]) -> ProximityIndex {
        ProximityIndex::new(coords.iter().map(|&(x, y)| Point::new(x, y)).collect())
    }

    #[test]
    fn empty_index_has_no_nearest() {
        let index = ProximityIndex::new(Vec::new());
        assert!(index.is_empty());
        assert!(index.nearest(Point::new(0.0, 0.0)).is_none());
    }

    #[test]
    fn single_sample_is_always_nearest() {
        let index = index_of(&[(10.0, 10.0)]);
        let nearest = index.nearest(Point::new(13.0, 14.0)).unwrap();
        assert_eq!(nearest.index, 0);
        assert!((nearest.distance - 5.0).abs() < 1e-12);
    }

    #[test]
    fn picks_the_closest_of_many() {
        let index = index_of(&[(0.0, 0.0), (50.0, 0.0), (100.0, 0.0)]);
        let nearest = index.nearest(Point::new(60.0, 5.0)).unwrap();
        assert_eq!(nearest.index, 1);
    }

    #[test]
    fn exact_hit_has_zero_distance() {
        let index = index_of(&[(0.0, 0.0), (50.0, 0.0)]);
        let nearest = index.nearest(Point::new(50.0, 0.0)).unwrap();
        assert_eq!(nearest.index, 1);
        assert!(nearest.distance.abs() < f64::EPSILON);
    }

    #[test]
    fn ties_keep_the_earliest_index() {
        let index = index_of(&[(0.0, 0.0), (10.0, 0.0)]);
        let nearest = index.nearest(Point::new(5.0, 0.0)).unwrap();
        assert_eq!(nearest.index, 0);
    }

    #[test]
    fn distance_is_euclidean() {
        let index = index_of(&[(0.0, 0.0)]);
        let nearest = index.nearest(Point::new(3.0, 4.0)).unwrap();
        assert!((nearest.distance - 5.0).abs() < 1e-12);
    }
}
