//! Error types used in the library.
//!
//! - Construction errors are external: the graph given is not a graph on vertices 1..n.
//! - Registry errors are internal and should never occur during use.
//! - Decode errors indicate a model which is not a Hamiltonian cycle, and so either a backend which returned something other than a model of the formula, or an issue with the encoding.
//!
//! Note, an unsatisfiable formula is *not* an error.
//! Instead, see [Outcome::NonHamiltonian](crate::context::Outcome::NonHamiltonian).
//!
//! Names of the error enums --- for the most part --- overlap with corresponding structs.
//  As such, throughout the library err::{self} is often used to prefix use of the types with `err::`.

use crate::structures::{
    graph::Edge,
    literal::Var,
    rank::Rank,
    vertex::Vertex,
};

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    Backend(BackendError),
    Construction(ConstructionError),
    Decode(DecodeError),
    Parse(ParseError),
    Registry(RegistryError),
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Backend(e) => write!(f, "Backend error: {e}"),
            Self::Construction(e) => write!(f, "Construction error: {e}"),
            Self::Decode(e) => write!(f, "Decode error: {e}"),
            Self::Parse(e) => write!(f, "Parse error: {e}"),
            Self::Registry(e) => write!(f, "Registry error: {e}"),
        }
    }
}

impl std::error::Error for ErrorKind {}

/// Errors from a SAT backend.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum BackendError {
    /// The solver failed, with some message from the solver.
    Solver(String),

    /// The solver reported satisfiable but did not provide a model.
    MissingModel,

    /// The model returned falsifies the clause at the given index of the formula.
    InvalidModel { clause: usize },
}

impl std::fmt::Display for BackendError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Solver(message) => write!(f, "the solver failed: {message}"),
            Self::MissingModel => write!(f, "a satisfiable verdict was returned without a model"),
            Self::InvalidModel { clause } => {
                write!(f, "the model returned falsifies clause {clause}")
            }
        }
    }
}

impl From<BackendError> for ErrorKind {
    fn from(e: BackendError) -> Self {
        ErrorKind::Backend(e)
    }
}

/// Noted errors when constructing a graph.
///
/// These are raised before any clause is written.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ConstructionError {
    /// A graph requires at least one vertex.
    NoVertices,

    /// An edge mentions a vertex outside 1..=vertex_count.
    VertexOutOfRange { edge: Edge, vertex_count: Vertex },

    /// An edge from a vertex to itself.
    SelfLoop(Vertex),
}

impl std::fmt::Display for ConstructionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoVertices => write!(f, "a graph requires at least one vertex"),
            Self::VertexOutOfRange {
                edge: (i, j),
                vertex_count,
            } => write!(f, "edge ({i}, {j}) is not within vertices 1..={vertex_count}"),
            Self::SelfLoop(vertex) => write!(f, "self-loop at vertex {vertex}"),
        }
    }
}

impl From<ConstructionError> for ErrorKind {
    fn from(e: ConstructionError) -> Self {
        ErrorKind::Construction(e)
    }
}

/// Noted errors when reading a cycle from a model, or checking a cycle against an encoding.
///
/// On any of these no cycle is returned, as no cycle can be trusted.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DecodeError {
    /// The model has no value for some variable of the encoding.
    IncompleteModel { variable: Var, variable_count: usize },

    /// No arc leaving the vertex is true.
    NoSuccessor(Vertex),

    /// At least two arcs leaving the vertex are true.
    MultipleSuccessors {
        vertex: Vertex,
        successors: (Vertex, Vertex),
    },

    /// The walk from the start vertex returned to the start after visiting only `length` vertices.
    PrematureReturn { length: usize, vertex_count: Vertex },

    /// The walk from the start vertex met a vertex twice without returning to the start.
    RepeatedVertex(Vertex),

    /// The rank register of a vertex does not hold the position of the vertex on the cycle.
    RankMismatch {
        vertex: Vertex,
        expected: Rank,
        found: Rank,
    },

    /// A sequence given as a cycle does not begin at the start vertex.
    WrongStart(Vertex),

    /// A sequence given as a cycle has the wrong number of vertices.
    WrongLength { length: usize, vertex_count: Vertex },

    /// A sequence given as a cycle mentions a vertex outside the graph.
    UnknownVertex(Vertex),

    /// A sequence given as a cycle uses an arc with no arc variable.
    MissingArc(Edge),
}

impl std::fmt::Display for DecodeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::IncompleteModel {
                variable,
                variable_count,
            } => write!(
                f,
                "the model has no value for variable {variable} of {variable_count}"
            ),
            Self::NoSuccessor(vertex) => write!(f, "vertex {vertex} has no successor"),
            Self::MultipleSuccessors {
                vertex,
                successors: (a, b),
            } => write!(f, "vertex {vertex} has successors {a} and {b}"),
            Self::PrematureReturn {
                length,
                vertex_count,
            } => write!(
                f,
                "the walk from the start returned after {length} of {vertex_count} vertices"
            ),
            Self::RepeatedVertex(vertex) => {
                write!(f, "vertex {vertex} was met twice before the start")
            }
            Self::RankMismatch {
                vertex,
                expected,
                found,
            } => write!(f, "vertex {vertex} has rank {found}, expected {expected}"),
            Self::WrongStart(vertex) => write!(f, "the cycle begins at {vertex}, not 1"),
            Self::WrongLength {
                length,
                vertex_count,
            } => write!(f, "the cycle has {length} vertices, expected {vertex_count}"),
            Self::UnknownVertex(vertex) => write!(f, "vertex {vertex} is not in the graph"),
            Self::MissingArc((i, j)) => write!(f, "there is no arc ({i}, {j})"),
        }
    }
}

impl From<DecodeError> for ErrorKind {
    fn from(e: DecodeError) -> Self {
        ErrorKind::Decode(e)
    }
}

/// Errors during parsing, of graphs or of solver output.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ParseError {
    /// Some issue with the problem specification at the given line.
    ProblemSpecification(usize),

    /// No problem specification was found.
    MissingProblem,

    /// A problem specification, or an edge, before or after its place, at the given line.
    MisplacedProblem(usize),

    /// Some unspecific problem at a specific line.
    Line(usize),

    /// A status line which is not understood, at the given line.
    Status(usize),

    /// Solver output without any status line.
    MissingStatus,

    /// A token which is not a literal, at the given line.
    Literal(usize),
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ProblemSpecification(line) => {
                write!(f, "malformed problem specification at line {line}")
            }
            Self::MissingProblem => write!(f, "no problem specification was found"),
            Self::MisplacedProblem(line) => write!(f, "misplaced line {line}"),
            Self::Line(line) => write!(f, "malformed line {line}"),
            Self::Status(line) => write!(f, "unknown status at line {line}"),
            Self::MissingStatus => write!(f, "no status line was found"),
            Self::Literal(line) => write!(f, "malformed literal at line {line}"),
        }
    }
}

impl From<ParseError> for ErrorKind {
    fn from(e: ParseError) -> Self {
        ErrorKind::Parse(e)
    }
}

/// Errors in the variable registry.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum RegistryError {
    /// There are no more fresh variables.
    IdsExhausted,
}

impl std::fmt::Display for RegistryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::IdsExhausted => write!(f, "no fresh variable ids remain"),
        }
    }
}

impl From<RegistryError> for ErrorKind {
    fn from(e: RegistryError) -> Self {
        ErrorKind::Registry(e)
    }
}
