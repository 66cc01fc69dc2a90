/*!
Witnesses, the model of an encoding given by a known Hamiltonian cycle.

A witness sets:
- Each arc variable true exactly when the arc is on the cycle.
- The rank register of each vertex to its position along the cycle.
- Each auxiliary variable from the definition given by its [gadget](crate::encoder::successor), whether or not the arc of the gadget is on the cycle.

Every clause of an encoding is satisfied by the witness of any Hamiltonian cycle of the graph encoded, and so witnesses are useful to check an encoding admits every cycle it should.

```rust
# use hcp_sat::config::Strategy;
# use hcp_sat::encoder::encode;
# use hcp_sat::structures::{cycle::Cycle, graph::Graph};
let graph = Graph::undirected(4, [(1, 2), (2, 3), (3, 4), (4, 1), (1, 3)]).unwrap();
let encoding = encode(&graph, Strategy::BitPropagation).unwrap();

let witness = encoding.witness(&Cycle::new(vec![1, 4, 3, 2])).unwrap();
assert_eq!(encoding.formula.evaluate(&witness), None);

assert!(encoding.witness(&Cycle::new(vec![1, 3, 2, 4])).is_err());
```
*/

use std::collections::HashSet;

use crate::{
    encoder::Encoding,
    misc::log::targets::{self},
    structures::{
        cycle::Cycle,
        model::Model,
        rank::{bit_of, Rank},
        vertex::START,
    },
    types::err::{self},
};

impl Encoding {
    /// The model of the encoding given by `cycle`, or an error if `cycle` is not a Hamiltonian cycle of the graph encoded.
    pub fn witness(&self, cycle: &Cycle) -> Result<Model, err::DecodeError> {
        self.check_cycle(cycle)?;

        let mut model = Model::new(self.variable_count());

        let on_cycle = cycle.arcs().collect::<HashSet<_>>();
        for (edge, var) in self.registry.arcs() {
            model.set(var, on_cycle.contains(&edge));
        }

        let mut ranks: Vec<Rank> = vec![0; self.vertex_count as usize + 1];
        for (index, vertex) in cycle.order().iter().enumerate() {
            let rank = index as Rank + 1;
            ranks[*vertex as usize] = rank;

            for bit in 0..self.width {
                if let Some(var) = self.rank_bit(*vertex, bit) {
                    model.set(var, bit_of(rank, bit));
                }
            }
        }

        let gadget = self.strategy.gadget();
        for ((i, j), _) in self.registry.arcs() {
            if i != START && j != START {
                let chosen = on_cycle.contains(&(i, j));
                gadget.assign_auxiliaries(
                    &self.registry,
                    self.width,
                    (i, j),
                    ranks[i as usize],
                    chosen,
                    &mut model,
                );
            }
        }

        log::trace!(target: targets::WITNESS, "Witness of {cycle}: {}", model.as_dimacs());
        Ok(model)
    }

    /// Checks `cycle` is a Hamiltonian cycle of the graph encoded.
    pub fn check_cycle(&self, cycle: &Cycle) -> Result<(), err::DecodeError> {
        match cycle.order().first() {
            Some(&START) => {}
            Some(other) => return Err(err::DecodeError::WrongStart(*other)),
            None => {
                return Err(err::DecodeError::WrongLength {
                    length: 0,
                    vertex_count: self.vertex_count,
                })
            }
        }

        if cycle.len() != self.vertex_count as usize {
            return Err(err::DecodeError::WrongLength {
                length: cycle.len(),
                vertex_count: self.vertex_count,
            });
        }

        let mut seen = HashSet::with_capacity(cycle.len());
        for vertex in cycle.order() {
            if !(1..=self.vertex_count).contains(vertex) {
                return Err(err::DecodeError::UnknownVertex(*vertex));
            }
            if !seen.insert(*vertex) {
                return Err(err::DecodeError::RepeatedVertex(*vertex));
            }
        }

        for (i, j) in cycle.arcs() {
            if self.arc(i, j).is_none() {
                return Err(err::DecodeError::MissingArc((i, j)));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{config::Strategy, encoder::encode, structures::graph::Graph};

    fn complete(n: u32) -> Graph {
        Graph::new(
            n,
            (1..=n).flat_map(|i| (1..=n).filter(move |j| *j != i).map(move |j| (i, j))),
        )
        .unwrap()
    }

    #[test]
    fn every_rotation_of_complete_graphs() {
        for strategy in [Strategy::RippleCarry, Strategy::BitPropagation] {
            for n in 2..=9 {
                let encoding = encode(&complete(n), strategy).unwrap();

                let forward = Cycle::new((1..=n).collect());
                let backward = Cycle::new(std::iter::once(1).chain((2..=n).rev()).collect());

                for cycle in [forward, backward] {
                    let witness = encoding.witness(&cycle).unwrap();
                    assert_eq!(encoding.formula.evaluate(&witness), None, "{strategy} {cycle}");
                }
            }
        }
    }

    #[test]
    fn power_of_two_vertices() {
        // Rank n sets the top bit alone, and so no bit below may be assumed set.
        let graph = Graph::new(8, [(1, 5), (5, 2), (2, 7), (7, 3), (3, 8), (8, 4), (4, 6), (6, 1)]).unwrap();

        for strategy in [Strategy::RippleCarry, Strategy::BitPropagation] {
            let encoding = encode(&graph, strategy).unwrap();
            let witness = encoding.witness(&Cycle::new(vec![1, 5, 2, 7, 3, 8, 4, 6])).unwrap();
            assert_eq!(encoding.formula.evaluate(&witness), None);
        }
    }

    #[test]
    fn not_cycles() {
        let graph = Graph::new(4, [(1, 2), (2, 3), (3, 4), (4, 1), (2, 4)]).unwrap();
        let encoding = encode(&graph, Strategy::RippleCarry).unwrap();

        assert_eq!(
            encoding.check_cycle(&Cycle::new(vec![2, 3, 4, 1])),
            Err(err::DecodeError::WrongStart(2))
        );
        assert_eq!(
            encoding.check_cycle(&Cycle::new(vec![1, 2, 4])),
            Err(err::DecodeError::WrongLength {
                length: 3,
                vertex_count: 4
            })
        );
        assert_eq!(
            encoding.check_cycle(&Cycle::new(vec![1, 2, 2, 4])),
            Err(err::DecodeError::RepeatedVertex(2))
        );
        assert_eq!(
            encoding.check_cycle(&Cycle::new(vec![1, 2, 5, 4])),
            Err(err::DecodeError::UnknownVertex(5))
        );
        assert_eq!(
            encoding.check_cycle(&Cycle::new(vec![1, 2, 4, 3])),
            Err(err::DecodeError::MissingArc((4, 3)))
        );
        assert_eq!(encoding.check_cycle(&Cycle::new(vec![1, 2, 3, 4])), Ok(()));
    }

    #[test]
    fn off_cycle_gadgets_are_satisfied() {
        let graph = Graph::undirected(5, [(1, 2), (2, 3), (3, 4), (4, 5), (5, 1), (2, 4), (3, 5)]).unwrap();
        let encoding = encode(&graph, Strategy::RippleCarry).unwrap();

        let witness = encoding.witness(&Cycle::new(vec![1, 2, 3, 4, 5])).unwrap();
        assert_eq!(encoding.formula.evaluate(&witness), None);
        assert_eq!(witness.value_of(encoding.arc(2, 4).unwrap()), Some(false));
    }
}
