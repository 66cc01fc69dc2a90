use std::time::Duration;

/// Counts for various things which count, roughly.
#[derive(Clone, Debug, Default)]
pub struct Counters {
    /// A count of graphs encoded.
    pub encodings: usize,

    /// A count of calls to a backend.
    pub solves: usize,

    /// A count of cycles decoded.
    pub cycles: usize,

    /// A count of variables in the most recent encoding.
    pub variables: usize,

    /// A count of clauses in the most recent encoding.
    pub clauses: usize,

    /// The time taken by calls to a backend.
    pub time: Duration,
}
