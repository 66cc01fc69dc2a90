/*!
Arc constraints, that each vertex has exactly one outgoing and exactly one incoming chosen arc.

Exactly one is written as at least one, a clause of every arc variable, together with at most one, a binary clause for each pair of arc variables.

```rust
# use hcp_sat::structures::graph::Graph;
# use hcp_sat::encoder::Encoder;
let graph = Graph::new(3, [(1, 2), (1, 3), (2, 3), (3, 1)]).unwrap();
let mut encoder = Encoder::new(&graph);
encoder.allocate_variables().unwrap();

encoder.exactly_one_out().unwrap();
// Vertex 1 has two arcs out, so one clause for at least one and one for at most one.
// Vertices 2 and 3 have a single arc out each.
assert_eq!(encoder.clause_count(), 4);
```

A vertex with no arc out (or in) gets the empty clause, and so the formula is unsatisfiable.
This is not an error, as a graph with such a vertex has no Hamiltonian cycle.
*/

use crate::{
    encoder::Encoder,
    misc::log::targets::{self},
    structures::{clause::CClause, literal::Lit, vertex::Vertex},
    types::err::{self},
};

impl Encoder<'_> {
    /// Writes that each vertex has exactly one outgoing chosen arc.
    pub fn exactly_one_out(&mut self) -> Result<(), err::RegistryError> {
        let graph = self.graph();
        for i in graph.vertices() {
            let mut arcs = Vec::with_capacity(graph.out_degree(i));
            for j in graph.successors(i) {
                arcs.push(self.arc(i, j)?);
            }
            self.exactly_one(i, arcs, "out");
        }
        Ok(())
    }

    /// Writes that each vertex has exactly one incoming chosen arc.
    pub fn exactly_one_in(&mut self) -> Result<(), err::RegistryError> {
        let graph = self.graph();
        for j in graph.vertices() {
            let mut arcs = Vec::with_capacity(graph.in_degree(j));
            for i in graph.predecessors(j) {
                arcs.push(self.arc(i, j)?);
            }
            self.exactly_one(j, arcs, "in");
        }
        Ok(())
    }

    fn exactly_one(&mut self, vertex: Vertex, arcs: Vec<Lit>, direction: &str) {
        if arcs.is_empty() {
            log::warn!(target: targets::ARCS, "No arc {direction} of {vertex}");
        }

        self.add_clause(arcs.clone());
        for clause in at_most_one(&arcs) {
            self.add_clause(clause);
        }
    }
}

/// Binary clauses forbidding any two of `literals` from being true together.
pub fn at_most_one(literals: &[Lit]) -> impl Iterator<Item = CClause> + '_ {
    literals.iter().enumerate().flat_map(move |(index, a)| {
        literals[index + 1..].iter().map(move |b| vec![-a, -b])
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{config::Strategy, structures::graph::Graph};

    #[test]
    fn pairs() {
        let clauses = at_most_one(&[1, 2, 3]).collect::<Vec<_>>();
        assert_eq!(clauses, vec![vec![-1, -2], vec![-1, -3], vec![-2, -3]]);
        assert_eq!(at_most_one(&[4]).count(), 0);
    }

    #[test]
    fn complete_counts() {
        let n = 5;
        let edges = (1..=n).flat_map(|i| (1..=n).filter(move |j| *j != i).map(move |j| (i, j)));
        let graph = Graph::new(n, edges).unwrap();
        let mut encoder = Encoder::new(&graph);
        encoder.allocate_variables().unwrap();

        encoder.exactly_one_out().unwrap();
        encoder.exactly_one_in().unwrap();

        // For each vertex and direction, one clause of four arcs and six pairs.
        assert_eq!(encoder.clause_count(), 2 * 5 * (1 + 6));
    }

    #[test]
    fn isolated_vertex_gives_empty_clause() {
        let graph = Graph::undirected(4, [(1, 2), (2, 3), (3, 1)]).unwrap();
        let mut encoder = Encoder::new(&graph);
        encoder.allocate_variables().unwrap();
        encoder.exactly_one_out().unwrap();
        encoder.exactly_one_in().unwrap();

        let encoding = encoder.finish(Strategy::RippleCarry);
        assert!(encoding.formula.contains_empty());
        assert_eq!(
            encoding
                .formula
                .clauses()
                .iter()
                .filter(|clause| clause.is_empty())
                .count(),
            2
        );
    }

    #[test]
    fn at_least_one_lists_arcs() {
        let graph = Graph::new(3, [(1, 2), (1, 3), (2, 1), (3, 1)]).unwrap();
        let mut encoder = Encoder::new(&graph);
        encoder.allocate_variables().unwrap();
        encoder.exactly_one_in().unwrap();
        let encoding = encoder.finish(Strategy::RippleCarry);

        let h21 = encoding.arc(2, 1).unwrap() as Lit;
        let h31 = encoding.arc(3, 1).unwrap() as Lit;
        assert!(encoding.formula.clauses().contains(&vec![h21, h31]));
        assert!(encoding.formula.clauses().contains(&vec![-h21, -h31]));
    }
}
