use crate::backend::solver::VarisatBackend;

use super::GenericContext;

/// A context which uses [VarisatBackend] to solve formulas.
pub type Context = GenericContext<VarisatBackend<'static>>;
