/*!
Backends, which decide the satisfiability of a formula.

A backend is anything which implements [SatBackend]: clauses go in, a [Verdict] comes out.
The library itself never searches for a model, and instead:
- [solver] implements [SatBackend] by delegating to [varisat](https://docs.rs/varisat/latest/varisat/).
- [dimacs] reads the output of any solver run separately on a DIMACS file written by the [formula](crate::db::formula).

Backends are incremental to the extent that clauses may be added after a call to [solve](SatBackend::solve), and a later call to solve considers every clause added so far.
This is all that is required to [enumerate](crate::context::GenericContext::find_cycles) cycles, and no use is made of assumptions.

A formula containing the empty clause is unsatisfiable, and each backend reports so without consulting any solver.

```rust
# use hcp_sat::backend::{SatBackend, Verdict, solver::VarisatBackend};
let mut backend = VarisatBackend::default();
backend.add_clause(&[1, 2]);
backend.add_clause(&[-1]);

match backend.solve(2) {
    Ok(Verdict::Satisfiable(model)) => assert_eq!(model.as_dimacs(), "-1 2 0"),
    _ => panic!("satisfiable"),
}

backend.add_clause(&[-2]);
assert_eq!(backend.solve(2), Ok(Verdict::Unsatisfiable));
```
*/

pub mod dimacs;
pub mod solver;

use crate::{
    db::formula::Formula,
    structures::{literal::Lit, model::Model},
    types::err::{self},
};

/// The verdict of a backend on the clauses given.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Verdict {
    /// The clauses are satisfiable, with a model total on the variables requested.
    Satisfiable(Model),

    /// The clauses are unsatisfiable.
    Unsatisfiable,
}

/// Something which decides the satisfiability of a collection of clauses.
pub trait SatBackend {
    /// Adds a clause to those to be decided.
    fn add_clause(&mut self, clause: &[Lit]);

    /// Decides the satisfiability of every clause added so far.
    ///
    /// On a satisfiable verdict the model has a value for each variable 1..=`variable_count`, with variables the solver did not see false.
    fn solve(&mut self, variable_count: usize) -> Result<Verdict, err::BackendError>;

    /// Adds every clause of `formula`.
    fn add_formula(&mut self, formula: &Formula) {
        for clause in formula.clauses() {
            self.add_clause(clause);
        }
    }
}
