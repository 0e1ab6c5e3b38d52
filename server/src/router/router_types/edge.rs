//! Definition of the `Edge` type.
use ordered_float::OrderedFloat;
use serde::Serialize;

/// An edge is an undirected connection between two campus places,
/// referenced by their index in the [`Campus`](`crate::campus::Campus`)
/// location list. The cost represents the "weight" of the edge in
/// meters.
#[derive(Debug, PartialEq, Hash, Eq, Copy, Clone, Serialize)]
pub struct Edge {
    /// One end of the edge.
    pub from: usize,

    /// The other end of the edge.
    pub to: usize,

    /// The weight of the edge.
    pub cost: OrderedFloat<f64>,
}

impl Edge {
    /// Whether this edge joins `a` and `b`, in either direction.
    pub fn joins(&self, a: usize, b: usize) -> bool {
        (self.from == a && self.to == b) || (self.from == b && self.to == a)
    }

    /// The end of the edge opposite to `index`, if `index` is an end.
    pub fn other(&self, index: usize) -> Option<usize> {
        if self.from == index {
            Some(self.to)
        } else if self.to == index {
            Some(self.from)
        } else {
            None
        }
    }
}
