// proximity.rs - Distance-threshold graph over a point set
//
// Every unordered pair is tested once. N stays in the tens, and the graph
// is built once per scene instance, never per frame.

use glam::Vec3;

/// Undirected edge between two point indices, always `a < b`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Edge {
    pub a: usize,
    pub b: usize,
}

impl Edge {
    /// Orders the endpoints. Returns None for a self-loop.
    pub fn new(i: usize, j: usize) -> Option<Self> {
        match i.cmp(&j) {
            std::cmp::Ordering::Less => Some(Self { a: i, b: j }),
            std::cmp::Ordering::Greater => Some(Self { a: j, b: i }),
            std::cmp::Ordering::Equal => None,
        }
    }

    pub fn as_pair(self) -> (usize, usize) {
        (self.a, self.b)
    }
}

/// All pairs `(i, j)`, `i < j`, whose distance is strictly below `threshold`.
///
/// Output is sorted by `(i, j)`. A non-positive (or NaN) threshold yields
/// no edges, as does a set of fewer than two points.
pub fn proximity_edges(points: &[Vec3], threshold: f32) -> Vec<Edge> {
    let mut edges = Vec::new();
    if points.len() < 2 || !(threshold > 0.0) {
        return edges;
    }

    for (i, p) in points.iter().enumerate() {
        for (j, q) in points.iter().enumerate().skip(i + 1) {
            if p.distance(*q) < threshold {
                edges.push(Edge { a: i, b: j });
            }
        }
    }
    edges
}
