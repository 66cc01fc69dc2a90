/*!
A cycle, as the sequence of vertices visited from the [start](crate::structures::vertex::START).

A cycle is displayed as its arcs, including the arc back to the start:

```rust
# use hcp_sat::structures::cycle::Cycle;
let cycle = Cycle::new(vec![1, 3, 2]);
assert_eq!(cycle.to_string(), "(1, 3) (3, 2) (2, 1)");
assert_eq!(cycle.arcs().last(), Some((2, 1)));
```

A cycle does not know which graph it belongs to.
Cycles returned by the [decoder](crate::decoder) are Hamiltonian cycles of the graph encoded, and any other sequence may be checked against an encoding when building a [witness](crate::encoder::witness).
*/

use crate::structures::{graph::Edge, rank::Rank, vertex::Vertex};

/// A sequence of vertices, read as a cycle.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Cycle {
    order: Vec<Vertex>,
}

impl Cycle {
    /// The cycle visiting `order`, and returning to the first vertex of `order`.
    pub fn new(order: Vec<Vertex>) -> Self {
        Cycle { order }
    }

    /// The vertices of the cycle in order of visit.
    pub fn order(&self) -> &[Vertex] {
        &self.order
    }

    /// The number of vertices of the cycle.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Whether the cycle has no vertices.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// An iterator over each arc of the cycle, ending with the arc back to the first vertex.
    pub fn arcs(&self) -> impl Iterator<Item = Edge> + '_ {
        self.order
            .iter()
            .zip(self.order.iter().cycle().skip(1))
            .map(|(i, j)| (*i, *j))
    }

    /// The rank of `vertex` on the cycle, counting from 1, if the vertex is on the cycle.
    pub fn rank_of(&self, vertex: Vertex) -> Option<Rank> {
        self.order
            .iter()
            .position(|v| *v == vertex)
            .map(|index| index as Rank + 1)
    }
}

impl std::fmt::Display for Cycle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut first = true;
        for (i, j) in self.arcs() {
            if !first {
                write!(f, " ")?;
            }
            write!(f, "({i}, {j})")?;
            first = false;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ranks() {
        let cycle = Cycle::new(vec![1, 4, 2, 3]);
        assert_eq!(cycle.rank_of(1), Some(1));
        assert_eq!(cycle.rank_of(3), Some(4));
        assert_eq!(cycle.rank_of(5), None);
    }

    #[test]
    fn two_cycle() {
        let cycle = Cycle::new(vec![1, 2]);
        assert_eq!(cycle.arcs().collect::<Vec<_>>(), vec![(1, 2), (2, 1)]);
    }
}
