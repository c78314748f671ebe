//! Undirected weighted edge type.

use serde::{Deserialize, Serialize};

/// An undirected edge between two vertices, as inserted into a graph.
///
/// The endpoints are kept in insertion order; `Edge::new(a, b, w)` and
/// `Edge::new(b, a, w)` describe the same connection.
///
/// # Examples
///
/// ```
/// use u_postman::models::Edge;
///
/// let e = Edge::new("A", "B", 3.0);
/// assert!(e.connects(&"B", &"A"));
/// assert_eq!(e.other(&"A"), Some(&"B"));
/// assert!(!e.is_loop());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge<V> {
    /// First endpoint.
    pub u: V,
    /// Second endpoint.
    pub v: V,
    /// Traversal cost.
    pub weight: f64,
}

impl<V: PartialEq> Edge<V> {
    /// Creates a new edge.
    pub fn new(u: V, v: V, weight: f64) -> Self {
        Self { u, v, weight }
    }

    /// Returns `true` if this edge joins `a` and `b` in either direction.
    pub fn connects(&self, a: &V, b: &V) -> bool {
        (self.u == *a && self.v == *b) || (self.u == *b && self.v == *a)
    }

    /// Returns the endpoint opposite to `x`, or `None` if `x` is not an endpoint.
    pub fn other(&self, x: &V) -> Option<&V> {
        if self.u == *x {
            Some(&self.v)
        } else if self.v == *x {
            Some(&self.u)
        } else {
            None
        }
    }

    /// Returns `true` if both endpoints are the same vertex.
    pub fn is_loop(&self) -> bool {
        self.u == self.v
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_connects_both_directions() {
        let e = Edge::new(1, 2, 4.0);
        assert!(e.connects(&1, &2));
        assert!(e.connects(&2, &1));
        assert!(!e.connects(&1, &3));
    }

    #[test]
    fn test_other_endpoint() {
        let e = Edge::new(1, 2, 4.0);
        assert_eq!(e.other(&1), Some(&2));
        assert_eq!(e.other(&2), Some(&1));
        assert_eq!(e.other(&9), None);
    }

    #[test]
    fn test_self_loop() {
        let e = Edge::new(7, 7, 1.0);
        assert!(e.is_loop());
        assert_eq!(e.other(&7), Some(&7));
    }
}
