/*!
Successor constraints, that choosing an arc (i, j) increments the rank of i to the rank of j.

The constraint is written for each edge (i, j) where neither i nor j is the [start](crate::structures::vertex::START), as the ranks on either side of the start are fixed by [position](crate::encoder::position) constraints.

Each [Strategy] has a gadget, an implementation of [SuccessorEncoding].
A gadget writes clauses which are all satisfied when the arc is not chosen, and which are together equivalent to

> rank(j) = rank(i) + 1 (mod 2<sup>width</sup>)

when the arc is chosen.

As the width of a register is enough to hold the number of vertices, and no path of at most *n* vertices can wrap around, the modular constraint rules out any cycle of chosen arcs which avoids the start.

# Ripple-carry

See [ripple_carry].
A sum variable for each bit, and a carry variable for each bit but the last, with each defined by its truth table.
The carry into bit 0 is the arc literal, so nothing is added when the arc is not chosen.

# Bit propagation

See [bit_propagation].
No auxiliary variables, and instead the carry into a bit is read from the bit below:
- The carry into bit 1 is the value of bit 0 at i.
- The carry into bit b ≥ 2 is whether bit b − 1 is set at i and unset at j, as only a carry flips a set bit to unset.
*/

pub mod bit_propagation;
pub mod ripple_carry;

use crate::{
    config::Strategy,
    db::registry::VariableRegistry,
    encoder::Encoder,
    structures::{
        graph::Edge,
        model::Model,
        rank::{Bit, Rank},
    },
    types::err::{self},
};

/// A gadget for writing successor constraints.
pub trait SuccessorEncoding {
    /// Writes the constraint that choosing `edge` increments the rank of the first vertex to the rank of the second.
    fn increment(&self, encoder: &mut Encoder, edge: Edge) -> Result<(), err::RegistryError>;

    /// Sets any auxiliary variables of the gadget on `edge` in `model`, given the register width, the rank of the first vertex, and whether the edge is chosen.
    ///
    /// The default is to do nothing, for gadgets without auxiliary variables.
    fn assign_auxiliaries(
        &self,
        _registry: &VariableRegistry,
        _width: Bit,
        _edge: Edge,
        _rank: Rank,
        _chosen: bool,
        _model: &mut Model,
    ) {
    }
}

impl Strategy {
    /// The gadget of the strategy.
    pub fn gadget(&self) -> &'static dyn SuccessorEncoding {
        match self {
            Self::RippleCarry => &ripple_carry::RippleCarry,
            Self::BitPropagation => &bit_propagation::BitPropagation,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::structures::{graph::Graph, literal::Var, rank::bit_of};

    // Every assignment to the arc and both registers, checked against modular increment.
    fn exhaust(strategy: Strategy) {
        let graph = Graph::new(5, [(2, 3)]).unwrap();
        let mut encoder = Encoder::new(&graph);
        encoder.allocate_variables().unwrap();
        strategy.gadget().increment(&mut encoder, (2, 3)).unwrap();
        let encoding = encoder.finish(strategy);

        let width = encoding.width;
        let modulus: Rank = 1 << width;
        let arc = encoding.arc(2, 3).unwrap();
        let fixed = 1 + 5 * width as usize;
        let auxiliaries = (fixed + 1..=encoding.variable_count()).map(|v| v as Var).collect::<Vec<_>>();

        for chosen in [false, true] {
            for p in 0..modulus {
                for q in 0..modulus {
                    let mut model = Model::new(encoding.variable_count());
                    model.set(arc, chosen);
                    for bit in 0..width {
                        model.set(encoding.rank_bit(2, bit).unwrap(), bit_of(p, bit));
                        model.set(encoding.rank_bit(3, bit).unwrap(), bit_of(q, bit));
                    }

                    let satisfiable = (0..1_u64 << auxiliaries.len()).any(|values| {
                        for (index, var) in auxiliaries.iter().enumerate() {
                            model.set(*var, bit_of(values, index as Bit));
                        }
                        encoding.formula.evaluate(&model).is_none()
                    });

                    let expected = !chosen || q == (p + 1) % modulus;
                    assert_eq!(satisfiable, expected, "{strategy}: {chosen} {p} {q}");

                    if expected {
                        strategy.gadget().assign_auxiliaries(
                            &encoding.registry,
                            width,
                            (2, 3),
                            p,
                            chosen,
                            &mut model,
                        );
                        assert_eq!(encoding.formula.evaluate(&model), None);
                    }
                }
            }
        }
    }

    #[test]
    fn ripple_carry_is_increment() {
        exhaust(Strategy::RippleCarry);
    }

    #[test]
    fn bit_propagation_is_increment() {
        exhaust(Strategy::BitPropagation);
    }
}
