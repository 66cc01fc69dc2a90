/*!
Graphs, as a count of vertices and a set of directed edges.

A graph on *n* vertices has vertices 1..=*n*, and every edge is an ordered pair of distinct vertices.
Both requirements are checked when the graph is built, so a [Graph] is always a valid instance.

```rust
# use hcp_sat::structures::graph::Graph;
# use hcp_sat::types::err::ConstructionError;
let graph = Graph::new(3, [(1, 2), (2, 3), (3, 1), (1, 2)]).unwrap();
assert_eq!(graph.edge_count(), 3);
assert!(graph.has_edge(3, 1));
assert!(!graph.has_edge(1, 3));

assert_eq!(Graph::new(3, [(2, 2)]), Err(ConstructionError::SelfLoop(2)));
```

Undirected graphs are built by expanding each edge to both directions, see [Graph::undirected].
Whether a source describes a directed or undirected graph is a matter for whatever reads the source, and the rest of the library only sees directed edges.
*/

use std::collections::BTreeSet;

use crate::{
    structures::vertex::Vertex,
    types::err::{self},
};

/// An edge, from the first vertex to the second.
pub type Edge = (Vertex, Vertex);

/// A graph on vertices 1..=vertex_count.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Graph {
    vertex_count: Vertex,

    /// Edges, ordered lexicographically.
    edges: BTreeSet<Edge>,

    /// The edges, each reversed, to support lookup of predecessors.
    reversed: BTreeSet<Edge>,
}

impl Graph {
    /// A graph on `vertex_count` vertices with the given (directed) edges.
    ///
    /// Duplicate edges are harmless.
    pub fn new(
        vertex_count: Vertex,
        edges: impl IntoIterator<Item = Edge>,
    ) -> Result<Self, err::ConstructionError> {
        if vertex_count < 1 {
            return Err(err::ConstructionError::NoVertices);
        }

        let mut graph = Graph {
            vertex_count,
            edges: BTreeSet::default(),
            reversed: BTreeSet::default(),
        };

        for edge in edges {
            graph.add_edge(edge)?;
        }

        Ok(graph)
    }

    /// A graph on `vertex_count` vertices with each given edge in both directions.
    pub fn undirected(
        vertex_count: Vertex,
        edges: impl IntoIterator<Item = Edge>,
    ) -> Result<Self, err::ConstructionError> {
        Graph::new(
            vertex_count,
            edges.into_iter().flat_map(|(i, j)| [(i, j), (j, i)]),
        )
    }

    fn add_edge(&mut self, (i, j): Edge) -> Result<(), err::ConstructionError> {
        for vertex in [i, j] {
            if !(1..=self.vertex_count).contains(&vertex) {
                return Err(err::ConstructionError::VertexOutOfRange {
                    edge: (i, j),
                    vertex_count: self.vertex_count,
                });
            }
        }

        if i == j {
            return Err(err::ConstructionError::SelfLoop(i));
        }

        self.edges.insert((i, j));
        self.reversed.insert((j, i));
        Ok(())
    }

    /// A count of vertices in the graph.
    pub fn vertex_count(&self) -> Vertex {
        self.vertex_count
    }

    /// A count of (distinct, directed) edges in the graph.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// An iterator over all vertices, in order.
    pub fn vertices(&self) -> impl Iterator<Item = Vertex> {
        1..=self.vertex_count
    }

    /// An iterator over all edges, in lexicographic order.
    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.edges.iter().copied()
    }

    /// Whether the edge from `i` to `j` is present.
    pub fn has_edge(&self, i: Vertex, j: Vertex) -> bool {
        self.edges.contains(&(i, j))
    }

    /// An iterator over vertices `j` such that the edge (`i`, `j`) is present, in order.
    pub fn successors(&self, i: Vertex) -> impl Iterator<Item = Vertex> + '_ {
        self.edges.range((i, 0)..=(i, Vertex::MAX)).map(|(_, j)| *j)
    }

    /// An iterator over vertices `i` such that the edge (`i`, `j`) is present, in order.
    pub fn predecessors(&self, j: Vertex) -> impl Iterator<Item = Vertex> + '_ {
        self.reversed
            .range((j, 0)..=(j, Vertex::MAX))
            .map(|(_, i)| *i)
    }

    /// The number of edges leaving `i`.
    pub fn out_degree(&self, i: Vertex) -> usize {
        self.successors(i).count()
    }

    /// The number of edges entering `j`.
    pub fn in_degree(&self, j: Vertex) -> usize {
        self.predecessors(j).count()
    }
}
