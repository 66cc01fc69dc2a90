/*!
A ripple-carry adder, adding the arc literal to the rank register of the first vertex of an edge.

For an edge (i, j) and each bit b, with c<sub>0</sub> the arc literal H(i, j):
- A sum variable s<sub>b</sub> with s<sub>b</sub> ↔ c<sub>b</sub> ⊕ P(i, b).
- For each bit but the last, a carry variable c<sub>b+1</sub> with c<sub>b+1</sub> ↔ c<sub>b</sub> ∧ P(i, b).
- The binding H(i, j) → (s<sub>b</sub> ↔ P(j, b)).

The carry out of the last bit is dropped, and so addition is modulo 2<sup>width</sup>.

Each definition is written as its full truth table, so every auxiliary variable is fixed by the rank of i and the arc literal whether or not the arc is chosen.
And, only the binding mentions the rank of j, so an unchosen arc places no constraint on j.

Per edge, 2 · width − 1 auxiliary variables and 10 · width − 4 clauses, none longer than three literals.
*/

use crate::{
    db::registry::{VarKey, VariableRegistry},
    encoder::{successor::SuccessorEncoding, Encoder},
    misc::log::targets::{self},
    structures::{
        graph::Edge,
        model::Model,
        rank::{bit_of, Bit, Rank},
    },
    types::err::{self},
};

/// The ripple-carry gadget.
pub struct RippleCarry;

impl SuccessorEncoding for RippleCarry {
    fn increment(&self, encoder: &mut Encoder, edge: Edge) -> Result<(), err::RegistryError> {
        let (i, j) = edge;
        let width = encoder.width();
        let arc = encoder.arc(i, j)?;

        let mut carry = arc;
        for bit in 0..width {
            let p = encoder.rank_bit(i, bit)?;
            let q = encoder.rank_bit(j, bit)?;
            let sum = encoder.literal(VarKey::AdderSum(edge, bit))?;

            encoder.add_clause(vec![-carry, -p, -sum]);
            encoder.add_clause(vec![-carry, p, sum]);
            encoder.add_clause(vec![carry, -p, sum]);
            encoder.add_clause(vec![carry, p, -sum]);

            if bit + 1 < width {
                let carry_out = encoder.literal(VarKey::AdderCarry(edge, bit))?;

                encoder.add_clause(vec![-carry, -p, carry_out]);
                encoder.add_clause(vec![-carry, p, -carry_out]);
                encoder.add_clause(vec![carry, -p, -carry_out]);
                encoder.add_clause(vec![carry, p, -carry_out]);

                carry = carry_out;
            }

            encoder.add_clause(vec![-arc, -sum, q]);
            encoder.add_clause(vec![-arc, sum, -q]);
        }

        log::trace!(target: targets::SUCCESSOR, "Ripple-carry on ({i}, {j})");
        Ok(())
    }

    fn assign_auxiliaries(
        &self,
        registry: &VariableRegistry,
        width: Bit,
        edge: Edge,
        rank: Rank,
        chosen: bool,
        model: &mut Model,
    ) {
        let mut carry = chosen;
        for bit in 0..width {
            let p = bit_of(rank, bit);

            if let Some(sum) = registry.get(VarKey::AdderSum(edge, bit)) {
                model.set(sum, p ^ carry);
            }

            if bit + 1 < width {
                carry = p && carry;
                if let Some(carry_out) = registry.get(VarKey::AdderCarry(edge, bit)) {
                    model.set(carry_out, carry);
                }
            }
        }
    }
}
