/*!
Ranks, and their representation as registers of bits.

The rank of a vertex is its position along a cycle, counting from 1 at the [start](crate::structures::vertex::START).
So, on a graph with *n* vertices ranks run 1..=*n*.

A rank register holds a rank as an unsigned binary number, with bit 0 the least significant.
The width of every register for a graph is the number of bits of *n* itself, as the vertex before the start has rank *n*:

```rust
# use hcp_sat::structures::rank::width;
assert_eq!(width(3), 2);
assert_eq!(width(4), 3);
assert_eq!(width(5), 3);
assert_eq!(width(8), 4);
```

Note, this is one more bit than *n − 1* would need when *n* is a power of two.
The successor relation is arithmetic modulo 2<sup>width</sup>, and as *n* < 2<sup>width</sup> no path of at most *n* vertices wraps around.
*/

use crate::structures::vertex::Vertex;

/// The index of a bit in a rank register, with 0 the least significant.
pub type Bit = u32;

/// A rank, as read from or written to a register.
pub type Rank = u64;

/// The width of a rank register on a graph with `vertex_count` vertices.
///
/// That is, the minimum number of bits able to represent `vertex_count`.
pub fn width(vertex_count: Vertex) -> Bit {
    Vertex::BITS - vertex_count.leading_zeros()
}

/// Whether `bit` is set in `rank`.
pub fn bit_of(rank: Rank, bit: Bit) -> bool {
    (rank >> bit) & 1 == 1
}

/// The rank held by a register, given the value of each bit from least to most significant.
pub fn from_bits(bits: impl IntoIterator<Item = bool>) -> Rank {
    bits.into_iter()
        .enumerate()
        .fold(0, |rank, (index, value)| rank | ((value as Rank) << index))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn width_at_powers_of_two() {
        assert_eq!(width(1), 1);
        assert_eq!(width(2), 2);
        assert_eq!(width(4), 3);
        assert_eq!(width(7), 3);
        assert_eq!(width(16), 5);
        assert_eq!(width(17), 5);
    }

    #[test]
    fn every_rank_fits() {
        for n in 1..200 {
            let w = width(n);
            assert!((n as Rank) < (1 << w));
            assert!((n as Rank) >= (1 << (w - 1)));
        }
    }

    #[test]
    fn bits_round() {
        let five = [true, false, true];
        assert_eq!(from_bits(five), 5);
        assert!(bit_of(5, 0));
        assert!(!bit_of(5, 1));
        assert!(bit_of(5, 2));
        assert!(!bit_of(5, 3));
    }
}
