/*!
The context, which owns a configuration and runs graphs through encoding, solving, and decoding.

Strictly, a [GenericContext] and a [Context].

The generic context is generic over the [backend](crate::backend) used to solve formulas, and a fresh backend is made for each graph.
A [Context] fixes the backend to [VarisatBackend](crate::backend::solver::VarisatBackend).

# Example
```rust
# use hcp_sat::config::{Config, Strategy};
# use hcp_sat::context::{Context, Outcome};
# use hcp_sat::families::{complete, petersen};
let mut config = Config::default();
config.strategy.value = Strategy::BitPropagation;
let mut the_context = Context::from_config(config);

let cycles = the_context.find_cycles(&complete(4).unwrap(), 100).unwrap();
assert_eq!(cycles.len(), 6);

assert_eq!(the_context.find_cycle(&petersen().unwrap()), Ok(Outcome::NonHamiltonian));
```
*/

mod counters;
pub use counters::Counters;
mod generic;
pub use generic::GenericContext;
mod specific;
pub use specific::Context;

use crate::structures::cycle::Cycle;

/// The outcome of asking whether a graph has a Hamiltonian cycle.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// The graph has a Hamiltonian cycle, and here is one.
    Hamiltonian(Cycle),

    /// The graph has no Hamiltonian cycle.
    NonHamiltonian,
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Hamiltonian(_) => write!(f, "HAMILTONIAN"),
            Self::NonHamiltonian => write!(f, "NON-HAMILTONIAN"),
        }
    }
}
