//! A backend delegating to the [varisat](https://docs.rs/varisat/latest/varisat/) CDCL solver.
//!
//! Literals are passed to varisat in their DIMACS form, so variables keep their ids across the boundary.

use varisat::ExtendFormula;

use crate::{
    backend::{SatBackend, Verdict},
    misc::log::targets::{self},
    structures::{clause::Clause, literal::Lit, model::Model},
    types::err::{self},
};

/// A backend holding an instance of the varisat solver.
pub struct VarisatBackend<'a> {
    solver: varisat::solver::Solver<'a>,

    /// Whether the empty clause has been added.
    refuted: bool,

    /// A count of clauses added.
    clause_count: usize,
}

impl Default for VarisatBackend<'_> {
    fn default() -> Self {
        VarisatBackend {
            solver: varisat::solver::Solver::new(),
            refuted: false,
            clause_count: 0,
        }
    }
}

impl SatBackend for VarisatBackend<'_> {
    fn add_clause(&mut self, clause: &[Lit]) {
        self.clause_count += 1;

        if clause.is_empty() {
            log::info!(target: targets::BACKEND, "Empty clause added, {}", self.clause_count);
            self.refuted = true;
            return;
        }

        let literals = clause
            .literals()
            .map(|literal| varisat::Lit::from_dimacs(*literal as isize))
            .collect::<Vec<_>>();
        self.solver.add_clause(&literals);
    }

    fn solve(&mut self, variable_count: usize) -> Result<Verdict, err::BackendError> {
        if self.refuted {
            return Ok(Verdict::Unsatisfiable);
        }

        log::info!(target: targets::BACKEND, "Solving {} clauses over {variable_count} variables", self.clause_count);

        match self.solver.solve() {
            Ok(true) => {}
            Ok(false) => {
                log::info!(target: targets::BACKEND, "Unsatisfiable");
                return Ok(Verdict::Unsatisfiable);
            }
            Err(e) => {
                log::error!(target: targets::BACKEND, "{e:?}");
                return Err(err::BackendError::Solver(format!("{e:?}")));
            }
        }

        let literals = match self.solver.model() {
            Some(literals) => literals,
            None => return Err(err::BackendError::MissingModel),
        };

        let model = Model::from_literals(
            variable_count,
            literals
                .into_iter()
                .map(|literal| literal.to_dimacs() as Lit)
                .filter(|literal| literal.unsigned_abs() as usize <= variable_count),
        );

        log::info!(target: targets::BACKEND, "Satisfiable");
        Ok(Verdict::Satisfiable(model))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_clause_refutes() {
        let mut backend = VarisatBackend::default();
        backend.add_clause(&[1]);
        backend.add_clause(&[]);
        assert_eq!(backend.solve(1), Ok(Verdict::Unsatisfiable));
    }

    #[test]
    fn unseen_variables_are_false() {
        let mut backend = VarisatBackend::default();
        backend.add_clause(&[2]);

        match backend.solve(4) {
            Ok(Verdict::Satisfiable(model)) => {
                assert_eq!(model.variable_count(), 4);
                assert_eq!(model.value_of(2), Some(true));
                assert_eq!(model.value_of(4), Some(false));
            }
            other => panic!("{other:?}"),
        }
    }

    #[test]
    fn blocking() {
        let mut backend = VarisatBackend::default();
        backend.add_clause(&[1, 2]);
        backend.add_clause(&[-1, -2]);

        let mut found = 0;
        while let Ok(Verdict::Satisfiable(model)) = backend.solve(2) {
            found += 1;
            let block = model.literals().map(|literal| -literal).collect::<Vec<_>>();
            backend.add_clause(&block);
        }
        assert_eq!(found, 2);
    }
}
