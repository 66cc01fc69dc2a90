//! Key structures, such as graphs, literals, clauses, and models.
//!
//! # Other structures without an implementation.
//!
//! ## Formulas
//!
//! A formula 𝐅 is a sequence of [clauses](clause), interpreted as the conjunction of those clauses.
//! The formula written for a graph is stored in a [Formula](crate::db::formula::Formula), alongside the [registry](crate::db::registry) which records what each variable of the formula stands for.
//!
//! ## Arcs and edges
//!
//! An *edge* is an ordered pair of distinct vertices present in a [graph].
//! An *arc* is an edge as chosen (or not) by some assignment, and each edge has exactly one arc variable.

pub mod clause;
pub mod cycle;
pub mod graph;
pub mod literal;
pub mod model;
pub mod rank;
pub mod vertex;
