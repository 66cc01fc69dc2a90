/*!
The decoder, which reads a Hamiltonian cycle from a model of an encoding.

Decoding proceeds in stages, and stops at the first failure:
1. The model is checked to have a value for every variable of the encoding.
2. Each true arc variable is read as a successor, and each vertex is checked to have exactly one successor.
3. The successors are walked from the [start](crate::structures::vertex::START), and the walk is checked to return to the start after visiting every vertex.
4. The rank register of each vertex is checked against the position of the vertex along the walk.

A model of an encoding always passes each check, and so a failure indicates either a model of some other formula, or a flaw in an encoding.
In either case no cycle is returned, partial or otherwise.

```rust
# use hcp_sat::config::Strategy;
# use hcp_sat::decoder::decode;
# use hcp_sat::encoder::encode;
# use hcp_sat::structures::{cycle::Cycle, graph::Graph};
let graph = Graph::undirected(3, [(1, 2), (2, 3), (3, 1)]).unwrap();
let encoding = encode(&graph, Strategy::RippleCarry).unwrap();

let cycle = Cycle::new(vec![1, 3, 2]);
let witness = encoding.witness(&cycle).unwrap();
assert_eq!(decode(&encoding, &witness), Ok(cycle));
```
*/

use crate::{
    encoder::Encoding,
    misc::log::targets::{self},
    structures::{
        cycle::Cycle,
        literal::Var,
        model::Model,
        rank::{from_bits, Rank},
        vertex::{Vertex, START},
    },
    types::err::{self},
};

/// Reads the Hamiltonian cycle given by `model` of `encoding`.
pub fn decode(encoding: &Encoding, model: &Model) -> Result<Cycle, err::DecodeError> {
    check_complete(encoding, model)?;

    let successors = successors(encoding, model)?;
    let cycle = walk(encoding.vertex_count, &successors)?;
    check_ranks(encoding, model, &cycle)?;

    log::info!(target: targets::DECODE, "Decoded {cycle}");
    Ok(cycle)
}

fn check_complete(encoding: &Encoding, model: &Model) -> Result<(), err::DecodeError> {
    let variable_count = encoding.variable_count();
    if model.variable_count() < variable_count {
        let variable = (model.variable_count() + 1) as Var;
        log::error!(target: targets::DECODE, "No value for {variable} of {variable_count}");
        return Err(err::DecodeError::IncompleteModel {
            variable,
            variable_count,
        });
    }
    Ok(())
}

/// The successor of each vertex, indexed by vertex, with index 0 unused.
fn successors(encoding: &Encoding, model: &Model) -> Result<Vec<Option<Vertex>>, err::DecodeError> {
    let mut successors: Vec<Option<Vertex>> = vec![None; encoding.vertex_count as usize + 1];

    for ((i, j), var) in encoding.registry.arcs() {
        if model.value_of(var) != Some(true) {
            continue;
        }

        match successors[i as usize] {
            None => successors[i as usize] = Some(j),
            Some(k) => {
                log::error!(target: targets::DECODE, "Successors {k} and {j} of {i}");
                return Err(err::DecodeError::MultipleSuccessors {
                    vertex: i,
                    successors: (k, j),
                });
            }
        }
    }

    for vertex in 1..=encoding.vertex_count {
        if successors[vertex as usize].is_none() {
            log::error!(target: targets::DECODE, "No successor of {vertex}");
            return Err(err::DecodeError::NoSuccessor(vertex));
        }
    }

    Ok(successors)
}

fn walk(vertex_count: Vertex, successors: &[Option<Vertex>]) -> Result<Cycle, err::DecodeError> {
    let mut visited = vec![false; vertex_count as usize + 1];
    let mut order = Vec::with_capacity(vertex_count as usize);

    let mut vertex = START;
    loop {
        visited[vertex as usize] = true;
        order.push(vertex);

        let next = match successors.get(vertex as usize).copied().flatten() {
            Some(next) => next,
            None => return Err(err::DecodeError::NoSuccessor(vertex)),
        };

        if next == START {
            break;
        }

        if visited[next as usize] {
            log::error!(target: targets::DECODE, "{next} met twice, after {order:?}");
            return Err(err::DecodeError::RepeatedVertex(next));
        }

        vertex = next;
    }

    if order.len() != vertex_count as usize {
        log::error!(target: targets::DECODE, "Returned to start after {order:?}");
        return Err(err::DecodeError::PrematureReturn {
            length: order.len(),
            vertex_count,
        });
    }

    Ok(Cycle::new(order))
}

fn check_ranks(encoding: &Encoding, model: &Model, cycle: &Cycle) -> Result<(), err::DecodeError> {
    for (index, vertex) in cycle.order().iter().enumerate() {
        let expected = index as Rank + 1;
        let found = register_value(encoding, model, *vertex);

        if found != expected {
            log::error!(target: targets::DECODE, "Rank {found} of {vertex}, expected {expected}");
            return Err(err::DecodeError::RankMismatch {
                vertex: *vertex,
                expected,
                found,
            });
        }
    }
    Ok(())
}

/// The rank held by the register of `vertex` on `model`.
pub fn register_value(encoding: &Encoding, model: &Model, vertex: Vertex) -> Rank {
    from_bits((0..encoding.width).map(|bit| {
        encoding
            .rank_bit(vertex, bit)
            .and_then(|var| model.value_of(var))
            .unwrap_or(false)
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{config::Strategy, encoder::encode, structures::graph::Graph};

    fn square() -> Encoding {
        let graph = Graph::undirected(4, [(1, 2), (2, 3), (3, 4), (4, 1), (1, 3), (2, 4)]).unwrap();
        encode(&graph, Strategy::RippleCarry).unwrap()
    }

    fn with_arcs(encoding: &Encoding, arcs: &[(Vertex, Vertex)]) -> Model {
        let mut model = encoding.witness(&Cycle::new(vec![1, 2, 3, 4])).unwrap();
        for (edge, var) in encoding.registry.arcs() {
            model.set(var, arcs.contains(&edge));
        }
        model
    }

    #[test]
    fn witness_decodes() {
        let encoding = square();
        let cycle = Cycle::new(vec![1, 4, 2, 3]);
        let witness = encoding.witness(&cycle).unwrap();
        assert_eq!(decode(&encoding, &witness), Ok(cycle));
    }

    #[test]
    fn incomplete() {
        let encoding = square();
        let model = Model::new(5);
        assert_eq!(
            decode(&encoding, &model),
            Err(err::DecodeError::IncompleteModel {
                variable: 6,
                variable_count: encoding.variable_count()
            })
        );
    }

    #[test]
    fn multiple_successors() {
        let encoding = square();
        let model = with_arcs(&encoding, &[(1, 2), (1, 3), (2, 3), (3, 4), (4, 1)]);
        assert_eq!(
            decode(&encoding, &model),
            Err(err::DecodeError::MultipleSuccessors {
                vertex: 1,
                successors: (2, 3)
            })
        );
    }

    #[test]
    fn no_successor() {
        let encoding = square();
        let model = with_arcs(&encoding, &[(1, 2), (2, 3), (3, 4)]);
        assert_eq!(
            decode(&encoding, &model),
            Err(err::DecodeError::NoSuccessor(4))
        );
    }

    #[test]
    fn sub_cycles() {
        let encoding = square();
        let model = with_arcs(&encoding, &[(1, 2), (2, 1), (3, 4), (4, 3)]);
        assert_eq!(
            decode(&encoding, &model),
            Err(err::DecodeError::PrematureReturn {
                length: 2,
                vertex_count: 4
            })
        );
    }

    #[test]
    fn lasso() {
        let encoding = square();
        let model = with_arcs(&encoding, &[(1, 2), (2, 3), (3, 4), (4, 2)]);
        assert_eq!(
            decode(&encoding, &model),
            Err(err::DecodeError::RepeatedVertex(2))
        );
    }

    #[test]
    fn rank_mismatch() {
        let encoding = square();
        let mut model = encoding.witness(&Cycle::new(vec![1, 2, 3, 4])).unwrap();

        // Rank 3 = 0b011 at vertex 3, so clearing bit 1 reads as 1.
        model.set(encoding.rank_bit(3, 1).unwrap(), false);
        assert_eq!(
            decode(&encoding, &model),
            Err(err::DecodeError::RankMismatch {
                vertex: 3,
                expected: 3,
                found: 1
            })
        );
    }
}
