//! A library for deciding whether a graph has a Hamiltonian cycle by compiling the question to a boolean formula in conjunctive normal form.
//!
//! hcp_sat takes a graph on vertices 1..n, writes a formula whose satisfying assignments correspond exactly to the Hamiltonian cycles of the graph, hands the formula to a SAT solver, and reads any cycle back out of the model the solver returns.
//!
//! # Orientation
//!
//! The encoding is built from three families of clauses:
//! - [Arc constraints](crate::encoder::arcs): each vertex leaves along exactly one arc and is entered along exactly one arc.
//!   By themselves these describe a cover of the graph by disjoint cycles.
//! - [Positions](crate::encoder::position): each vertex carries a *rank register*, a binary number of width ⌈log₂(n + 1)⌉ giving the position of the vertex along the cycle.
//!   The start vertex (vertex 1) is fixed at rank 1, the vertex after it at rank 2, and the vertex before it at rank n.
//! - [Successors](crate::encoder::successor): whenever an arc (i, j) between two non-start vertices is chosen, rank(j) = rank(i) + 1.
//!   As a cycle avoiding the start vertex would need to increment a rank back to itself, only the cycle through vertex 1 survives, and it must visit every vertex.
//!
//! The successor constraint is available as two [strategies](crate::config::Strategy):
//! - A ripple-carry adder, with auxiliary sum and carry variables for each edge and bit.
//! - A direct propagation of bit flips, with no auxiliary variables and longer clauses.
//!
//! Useful starting points, then, may be:
//! - The [context] to run the whole pipeline.
//! - The [encoder] to inspect the clauses written for a graph.
//! - The [decoder] to see which models are accepted as cycles.
//! - The [backend] to plug in a different SAT solver.
//!
//! # Examples
//!
//! + Find a Hamiltonian cycle.
//!
//! ```rust
//! # use hcp_sat::config::Config;
//! # use hcp_sat::context::{Context, Outcome};
//! # use hcp_sat::structures::graph::Graph;
//! let mut the_context = Context::from_config(Config::default());
//!
//! let square = Graph::new(4, [(1, 2), (2, 3), (3, 4), (4, 1)]).unwrap();
//!
//! match the_context.find_cycle(&square) {
//!     Ok(Outcome::Hamiltonian(cycle)) => assert_eq!(cycle.to_string(), "(1, 2) (2, 3) (3, 4) (4, 1)"),
//!     _ => panic!("a square has a cycle"),
//! }
//! ```
//!
//! + Read a DIMACS graph and show there is no cycle.
//!
//! ```rust
//! # use hcp_sat::config::Config;
//! # use hcp_sat::context::{Context, Outcome};
//! let mut the_context = Context::from_config(Config::default());
//!
//! let col = "
//! p edge 4 3
//! e 1 2
//! e 2 3
//! e 3 1
//! ";
//!
//! let graph = the_context.read_graph(col.as_bytes()).unwrap();
//! assert_eq!(the_context.find_cycle(&graph), Ok(Outcome::NonHamiltonian));
//! ```
//!
//! # Logs
//!
//! Calls to [log!](log) are made throughout the encoder with targets listed in [misc::log].
//! No logger is installed by the library.
//! For example, when used with [env_logger](https://docs.rs/env_logger/latest/env_logger/):
//! - The clauses written for successor constraints can be seen with `RUST_LOG=successor=trace …` or,
//! - Summary counts for each stage of the encoding with `RUST_LOG=info …`

#![allow(clippy::single_match)]
#![allow(clippy::collapsible_else_if)]

pub mod backend;
pub mod config;
pub mod context;
pub mod db;
pub mod decoder;
pub mod encoder;
pub mod families;
pub mod io;
pub mod misc;
pub mod structures;
pub mod types;
