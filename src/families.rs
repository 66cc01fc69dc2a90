/*!
Families of graphs, for tests and experiments.

Each family returns a [Graph], and fails only when the graph requested has no vertices.

| Family       | Directed | Hamiltonian                  |
|--------------|----------|------------------------------|
| [complete]   | both ways | when *n* ≥ 2                |
| [cycle]      | yes      | when *n* ≥ 2                 |
| [petersen]   | no       | never                        |
| [planted]    | yes      | when *n* ≥ 2                 |
| [random]     | yes      | perhaps                      |

Random families are seeded, and the same seed always gives the same graph.

```rust
# use hcp_sat::families::{complete, planted};
assert_eq!(complete(5).unwrap().edge_count(), 20);

let a = planted(12, 0.2, 7).unwrap();
let b = planted(12, 0.2, 7).unwrap();
assert_eq!(a, b);
```
*/

use rand::{rngs::SmallRng, seq::SliceRandom, Rng, SeedableRng};

use crate::{
    structures::{
        graph::{Edge, Graph},
        vertex::{Vertex, START},
    },
    types::err::{self},
};

/// The complete directed graph on `n` vertices, with an edge each way between any two vertices.
pub fn complete(n: Vertex) -> Result<Graph, err::ConstructionError> {
    Graph::new(
        n,
        (1..=n).flat_map(|i| (1..=n).filter(move |j| *j != i).map(move |j| (i, j))),
    )
}

/// The directed cycle 1 → 2 → … → `n` → 1.
pub fn cycle(n: Vertex) -> Result<Graph, err::ConstructionError> {
    Graph::new(n, cycle_arcs(&(1..=n).collect::<Vec<_>>()))
}

/// The (undirected) Petersen graph, on ten vertices.
///
/// The outer five-cycle is on vertices 1..=5, the inner pentagram on vertices 6..=10, and each outer vertex i is joined to inner vertex i + 5.
pub fn petersen() -> Result<Graph, err::ConstructionError> {
    let outer = (1..=5).map(|i| (i, i % 5 + 1));
    let inner = (6..=10).map(|i| (i, (i - 6 + 2) % 5 + 6));
    let spokes = (1..=5).map(|i| (i, i + 5));

    Graph::undirected(10, outer.chain(inner).chain(spokes))
}

/// A directed graph on `n` vertices containing a Hamiltonian cycle through a random ordering of vertices, and each other arc with probability `density`.
pub fn planted(n: Vertex, density: f64, seed: u64) -> Result<Graph, err::ConstructionError> {
    let mut rng = SmallRng::seed_from_u64(seed);

    let mut order = (START + 1..=n).collect::<Vec<_>>();
    order.shuffle(&mut rng);
    order.insert(0, START);

    let planted = cycle_arcs(&order);
    let extra = random_arcs(n, density, &mut rng);
    Graph::new(n, planted.into_iter().chain(extra))
}

/// A directed graph on `n` vertices with each arc present with probability `density`.
pub fn random(n: Vertex, density: f64, seed: u64) -> Result<Graph, err::ConstructionError> {
    let mut rng = SmallRng::seed_from_u64(seed);
    let arcs = random_arcs(n, density, &mut rng);
    Graph::new(n, arcs)
}

/// The arcs of the cycle through `order`, and nothing for fewer than two vertices.
fn cycle_arcs(order: &[Vertex]) -> Vec<Edge> {
    match order.len() {
        0 | 1 => Vec::default(),
        _ => order
            .iter()
            .zip(order.iter().cycle().skip(1))
            .map(|(i, j)| (*i, *j))
            .collect(),
    }
}

fn random_arcs(n: Vertex, density: f64, rng: &mut impl Rng) -> Vec<Edge> {
    let p = match density.is_nan() {
        true => 0.0,
        false => density.clamp(0.0, 1.0),
    };

    let mut arcs = Vec::default();
    for i in 1..=n {
        for j in 1..=n {
            if i != j && rng.random_bool(p) {
                arcs.push((i, j));
            }
        }
    }
    arcs
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn petersen_is_cubic() {
        let graph = petersen().unwrap();
        assert_eq!(graph.edge_count(), 30);
        for vertex in graph.vertices() {
            assert_eq!(graph.out_degree(vertex), 3);
            assert_eq!(graph.in_degree(vertex), 3);
        }
        assert!(graph.has_edge(6, 8));
        assert!(graph.has_edge(10, 7));
    }

    #[test]
    fn planted_contains_a_cycle() {
        for seed in 0..20 {
            let graph = planted(9, 0.0, seed).unwrap();
            assert_eq!(graph.edge_count(), 9);
            for vertex in graph.vertices() {
                assert_eq!(graph.out_degree(vertex), 1);
                assert_eq!(graph.in_degree(vertex), 1);
            }
        }
    }

    #[test]
    fn densities() {
        assert_eq!(random(6, 0.0, 1).unwrap().edge_count(), 0);
        assert_eq!(random(6, 1.0, 1).unwrap(), complete(6).unwrap());
        assert_eq!(random(6, 7.5, 1).unwrap(), complete(6).unwrap());
        assert_eq!(random(6, f64::NAN, 1).unwrap().edge_count(), 0);
    }

    #[test]
    fn small() {
        assert_eq!(cycle(1).unwrap().edge_count(), 0);
        assert_eq!(cycle(2).unwrap().edge_count(), 2);
        assert_eq!(cycle(0), Err(err::ConstructionError::NoVertices));
    }
}
