/*!
The formula of an encoding, as an append-only sequence of clauses.

Clauses are kept in the order they were added, as given.
No clause is removed as a duplicate, simplified, or checked for a tautology, as doing so is left to whatever solver receives the formula.

The count of variables is not kept by the formula, and is instead the count of the [registry](crate::db::registry) the formula was written against.

```rust
# use hcp_sat::db::formula::Formula;
# use hcp_sat::structures::model::Model;
let mut formula = Formula::default();
formula.add_clause(vec![1, 2]);
formula.add_clause(vec![-1]);

assert_eq!(formula.clause_count(), 2);
assert_eq!(formula.evaluate(&Model::from_literals(2, [-1, 2])), None);
assert_eq!(formula.evaluate(&Model::from_literals(2, [1, 2])), Some(1));

let mut dimacs = vec![];
formula.write_dimacs(&mut dimacs, 2).unwrap();
assert_eq!(String::from_utf8(dimacs).unwrap(), "p cnf 2 2\n1 2 0\n-1 0\n");
```
*/

use std::io::Write;

use crate::{
    misc::log::targets::{self},
    structures::{
        clause::{CClause, Clause},
        model::Model,
    },
};

/// An append-only sequence of clauses.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Formula {
    clauses: Vec<CClause>,
}

impl Formula {
    /// Appends a clause to the formula.
    pub fn add_clause(&mut self, clause: CClause) {
        log::trace!(target: targets::FORMULA, "{}: {}", self.clauses.len(), clause.as_dimacs(true));
        self.clauses.push(clause);
    }

    /// A count of clauses in the formula.
    pub fn clause_count(&self) -> usize {
        self.clauses.len()
    }

    /// The clauses of the formula, in the order added.
    pub fn clauses(&self) -> &[CClause] {
        &self.clauses
    }

    /// Whether the formula contains the empty clause, and so is unsatisfiable.
    pub fn contains_empty(&self) -> bool {
        self.clauses.iter().any(|clause| clause.is_empty())
    }

    /// The index of the first clause not satisfied by `model`, if any.
    pub fn evaluate(&self, model: &Model) -> Option<usize> {
        self.clauses
            .iter()
            .position(|clause| !clause.satisfied_on(model))
    }

    /// Writes the formula in DIMACS form, with a preamble of `variable_count` variables.
    pub fn write_dimacs(&self, writer: &mut impl Write, variable_count: usize) -> std::io::Result<()> {
        writeln!(writer, "p cnf {variable_count} {}", self.clauses.len())?;
        for clause in &self.clauses {
            writeln!(writer, "{}", clause.as_dimacs(true))?;
        }
        Ok(())
    }
}
