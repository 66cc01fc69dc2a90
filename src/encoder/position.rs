/*!
Position constraints, fixing ranks at and around the [start](crate::structures::vertex::START).

- The rank of the start is 1, as a unit clause for each bit of the register.
- For each edge (1, j), choosing the edge fixes the rank of j to 2, as a binary clause for each bit.
- For each edge (i, 1), choosing the edge fixes the rank of i to *n*, as a binary clause for each bit.

Together with [successor](crate::encoder::successor) constraints, which apply to every other edge, the rank of each vertex is its position along the cycle.

For example, on four vertices the register width is three, and so:

```rust
# use hcp_sat::structures::graph::Graph;
# use hcp_sat::encoder::Encoder;
let graph = Graph::new(4, [(1, 2), (4, 1)]).unwrap();
let mut encoder = Encoder::new(&graph);
encoder.allocate_variables().unwrap();

encoder.fix_start().unwrap();
encoder.bound_start_neighbours().unwrap();
assert_eq!(encoder.clause_count(), 3 + 3 + 3);
```
*/

use crate::{
    encoder::Encoder,
    misc::log::targets::{self},
    structures::{
        literal::Literal,
        rank::{bit_of, Rank},
        vertex::{Vertex, START},
    },
    types::err::{self},
};

impl Encoder<'_> {
    /// Writes that the rank of the start is 1.
    pub fn fix_start(&mut self) -> Result<(), err::RegistryError> {
        for bit in 0..self.width() {
            let p = self.rank_bit(START, bit)?;
            let value = match bit_of(1, bit) {
                true => p,
                false => p.negate(),
            };
            self.add_clause(vec![value]);
        }
        Ok(())
    }

    /// Writes that the vertex after the start has rank 2, and the vertex before the start has rank *n*.
    pub fn bound_start_neighbours(&mut self) -> Result<(), err::RegistryError> {
        let graph = self.graph();
        let last = graph.vertex_count() as Rank;

        for j in graph.successors(START) {
            self.implies_rank(START, j, j, 2)?;
        }

        for i in graph.predecessors(START) {
            self.implies_rank(i, START, i, last)?;
        }

        Ok(())
    }

    /// Writes that choosing the arc (`i`, `j`) fixes the rank of `vertex` to `rank`.
    fn implies_rank(
        &mut self,
        i: Vertex,
        j: Vertex,
        vertex: Vertex,
        rank: Rank,
    ) -> Result<(), err::RegistryError> {
        let arc = self.arc(i, j)?;
        for bit in 0..self.width() {
            let p = self.rank_bit(vertex, bit)?;
            let value = match bit_of(rank, bit) {
                true => p,
                false => p.negate(),
            };
            self.add_clause(vec![arc.negate(), value]);
        }
        log::trace!(target: targets::POSITION, "({i}, {j}) fixes the rank of {vertex} to {rank}");
        Ok(())
    }
}
