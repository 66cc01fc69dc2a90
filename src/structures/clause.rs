//! Clauses, aka. a collection of literals, interpreted as the disjunction of those literals.
//!
//! The canonical representation of a clause is as a vector of literals.
//!
//! ```rust
//! # use hcp_sat::structures::clause::Clause;
//! # use hcp_sat::structures::model::Model;
//! let clause = vec![-1, 2, 3];
//!
//! assert_eq!(clause.size(), 3);
//! assert_eq!(clause.as_dimacs(true), "-1 2 3 0");
//!
//! let model = Model::from_literals(3, [1, -2, -3]);
//! assert!(!clause.satisfied_on(&model));
//! ```
//!
//! - The empty clause is always false (never true).
//! - Clauses are written as given: no literal is removed as a duplicate, and tautologies are kept.

use crate::structures::{
    literal::{Lit, Literal, Var},
    model::Model,
};

/// The clause trait.
pub trait Clause {
    /// A string of the clause in DIMACS form, with the terminating `0` as optional.
    fn as_dimacs(&self, zero: bool) -> String;

    /// An iterator over all literals in the clause, in the order given.
    fn literals(&self) -> impl Iterator<Item = &Lit>;

    /// The number of literals in the clause.
    fn size(&self) -> usize;

    /// An iterator over all variables in the clause.
    fn vars(&self) -> impl Iterator<Item = Var>;

    /// Whether some literal of the clause is true on the model.
    ///
    /// A literal whose variable has no value on the model does not satisfy the clause.
    fn satisfied_on(&self, model: &Model) -> bool;
}

/// The canonical implementation of a clause.
pub type CClause = Vec<Lit>;

impl Clause for [Lit] {
    fn as_dimacs(&self, zero: bool) -> String {
        let mut the_string = String::default();
        for literal in self {
            the_string.push_str(&format!("{literal} "));
        }
        match zero {
            true => the_string.push('0'),
            false => {
                the_string.pop();
            }
        }
        the_string
    }

    fn literals(&self) -> impl Iterator<Item = &Lit> {
        self.iter()
    }

    fn size(&self) -> usize {
        self.len()
    }

    fn vars(&self) -> impl Iterator<Item = Var> {
        self.iter().map(|literal| literal.var())
    }

    fn satisfied_on(&self, model: &Model) -> bool {
        self.iter()
            .any(|literal| model.value_of(literal.var()) == Some(literal.polarity()))
    }
}
