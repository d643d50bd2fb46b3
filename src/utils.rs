use std::cmp::Ordering;

/// Distance of a node that has not been reached.
pub const INFINITY: f64 = f64::INFINITY;

/// Heap entry for the binary-heap engine: a tentative distance for a node index.
///
/// Orders by distance, then by node index, so `Reverse<VertexDistance>` in a
/// `BinaryHeap` pops the nearest node and, among equals, the one enumerated first.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VertexDistance {
    pub vertex: usize,
    pub distance: f64,
}

impl VertexDistance {
    pub fn new(vertex: usize, distance: f64) -> Self {
        VertexDistance { vertex, distance }
    }
}

impl Eq for VertexDistance {}

impl PartialOrd for VertexDistance {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for VertexDistance {
    fn cmp(&self, other: &Self) -> Ordering {
        self.distance
            .total_cmp(&other.distance)
            .then_with(|| self.vertex.cmp(&other.vertex))
    }
}
