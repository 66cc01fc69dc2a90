/*!
Ways to encode that traversing an arc increments the rank of a vertex.

Both strategies write clauses equivalent to rank(j) = rank(i) + 1 (modulo 2<sup>width</sup>) whenever the arc (i, j) is chosen, and nothing when the arc is not chosen.
They differ in the auxiliary structure used to get there.

| Strategy           | Auxiliary variables per edge | Clauses per edge         | Longest clause |
|--------------------|------------------------------|--------------------------|----------------|
| [RippleCarry]      | 2 · width − 1                | 10 · width − 4           | 3              |
| [BitPropagation]   | 0                            | 6 · width − 6 (width ≥ 2) | 5              |

See [successor](crate::encoder::successor) for details.

[RippleCarry]: Strategy::RippleCarry
[BitPropagation]: Strategy::BitPropagation
*/

use std::str::FromStr;

/// Supported successor strategies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Strategy {
    /// A ripple-carry adder gadget, with a sum and carry variable for each edge and bit.
    ///
    /// The carry into the least significant bit is the arc variable itself, so the gadget adds one exactly when the arc is chosen.
    RippleCarry = 0,

    /// A direct encoding of which bits flip when a register is incremented, with no auxiliary variables.
    BitPropagation,
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::RippleCarry => write!(f, "RippleCarry"),
            Self::BitPropagation => write!(f, "BitPropagation"),
        }
    }
}

impl Strategy {
    /// The minimum Strategy type.
    pub const MIN: Strategy = Strategy::RippleCarry;

    /// The maximum Strategy type.
    pub const MAX: Strategy = Strategy::BitPropagation;
}

impl FromStr for Strategy {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "RippleCarry" | "ripple" => Ok(Self::RippleCarry),

            "BitPropagation" | "direct" => Ok(Self::BitPropagation),

            _unkown_string => Err(()),
        }
    }
}
