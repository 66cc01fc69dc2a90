/*!
A direct encoding of which bits flip when a register is incremented.

Incrementing flips bit 0, and flips each higher bit exactly when every bit below is set.
So, for an edge (i, j) with p<sub>b</sub> = P(i, b) and q<sub>b</sub> = P(j, b), and every clause guarded by ¬H(i, j):
- Bit 0: q<sub>0</sub> ↔ ¬p<sub>0</sub>, as two clauses.
- Bit 1: q<sub>1</sub> ↔ p<sub>1</sub> ⊕ p<sub>0</sub>, as four clauses.
- Bit b ≥ 2: q<sub>b</sub> ↔ p<sub>b</sub> ⊕ (p<sub>b−1</sub> ∧ ¬q<sub>b−1</sub>), as six clauses.

The carry into bit b ≥ 2 is read from bit b − 1 alone, as bit b − 1 goes from set to unset exactly when a carry reaches it.

Per edge, no auxiliary variables and 6 · width − 6 clauses (two when the width is one), none longer than five literals.
*/

use crate::{
    encoder::{successor::SuccessorEncoding, Encoder},
    misc::log::targets::{self},
    structures::{graph::Edge, literal::Literal},
    types::err::{self},
};

/// The bit-propagation gadget.
pub struct BitPropagation;

impl SuccessorEncoding for BitPropagation {
    fn increment(&self, encoder: &mut Encoder, edge: Edge) -> Result<(), err::RegistryError> {
        let (i, j) = edge;
        let h = encoder.arc(i, j)?.negate();

        let p0 = encoder.rank_bit(i, 0)?;
        let q0 = encoder.rank_bit(j, 0)?;

        encoder.add_clause(vec![h, p0, q0]);
        encoder.add_clause(vec![h, -p0, -q0]);

        for bit in 1..encoder.width() {
            let p = encoder.rank_bit(i, bit)?;
            let q = encoder.rank_bit(j, bit)?;

            match bit {
                1 => {
                    encoder.add_clause(vec![h, p0, -p, q]);
                    encoder.add_clause(vec![h, p0, p, -q]);
                    encoder.add_clause(vec![h, -p0, -p, -q]);
                    encoder.add_clause(vec![h, -p0, p, q]);
                }

                _ => {
                    let p_below = encoder.rank_bit(i, bit - 1)?;
                    let q_below = encoder.rank_bit(j, bit - 1)?;

                    // No carry.
                    encoder.add_clause(vec![h, p_below, -p, q]);
                    encoder.add_clause(vec![h, p_below, p, -q]);
                    encoder.add_clause(vec![h, -q_below, -p, q]);
                    encoder.add_clause(vec![h, -q_below, p, -q]);

                    // Carry.
                    encoder.add_clause(vec![h, -p_below, q_below, -p, -q]);
                    encoder.add_clause(vec![h, -p_below, q_below, p, q]);
                }
            }
        }

        log::trace!(target: targets::SUCCESSOR, "Bit propagation on ({i}, {j})");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        config::Strategy,
        structures::{graph::Graph, model::Model},
    };

    #[test]
    fn counts() {
        for (n, expected) in [(2, 6), (3, 6), (4, 12), (7, 12), (8, 18), (17, 24)] {
            let graph = Graph::new(n, [(1, 2)]).unwrap();
            let mut encoder = Encoder::new(&graph);
            encoder.allocate_variables().unwrap();

            BitPropagation.increment(&mut encoder, (1, 2)).unwrap();
            let encoding = encoder.finish(Strategy::BitPropagation);

            assert_eq!(encoding.clause_count(), expected, "n = {n}");
            assert_eq!(encoding.variable_count(), 1 + n as usize * encoding.width as usize);
            assert!(encoding.formula.clauses().iter().all(|clause| clause.len() <= 5));
        }
    }

    #[test]
    fn no_auxiliaries_to_assign() {
        let graph = Graph::new(5, [(2, 3)]).unwrap();
        let mut encoder = Encoder::new(&graph);
        encoder.allocate_variables().unwrap();
        BitPropagation.increment(&mut encoder, (2, 3)).unwrap();
        let encoding = encoder.finish(Strategy::BitPropagation);

        let mut model = Model::new(encoding.variable_count());
        model.set(encoding.arc(2, 3).unwrap(), true);
        let before = model.clone();

        BitPropagation.assign_auxiliaries(&encoding.registry, encoding.width, (2, 3), 3, true, &mut model);
        assert_eq!(model, before);
    }
}
