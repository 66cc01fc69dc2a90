use std::{io::BufRead, marker::PhantomData, time::Instant};

use crate::{
    backend::{dimacs::read_solution, SatBackend, Verdict},
    config::Config,
    decoder::decode,
    encoder::{encode, Encoding},
    io::col::read_col,
    misc::log::targets::{self},
    structures::{
        clause::CClause,
        cycle::Cycle,
        graph::Graph,
        literal::{Lit, Literal},
        model::Model,
    },
    types::err::{self},
};

use super::{Counters, Outcome};

/// A generic context, parameterised to a backend.
///
/// Requires a [backend](SatBackend) which (also) implements [Default], as a fresh backend is made for each graph.
///
/// # Example
///
/// ```rust
/// # use hcp_sat::context::GenericContext;
/// # use hcp_sat::backend::solver::VarisatBackend;
/// # use hcp_sat::config::Config;
/// let context = GenericContext::<VarisatBackend>::from_config(Config::default());
/// ```
pub struct GenericContext<B: SatBackend + Default> {
    /// The configuration of a context.
    pub config: Config,

    /// Counters related to a context.
    pub counters: Counters,

    backend: PhantomData<B>,
}

impl<B: SatBackend + Default> GenericContext<B> {
    /// Creates a context from some given configuration.
    pub fn from_config(config: Config) -> Self {
        GenericContext {
            config,
            counters: Counters::default(),
            backend: PhantomData,
        }
    }

    /// Reads a graph in the DIMACS `.col` format, expanding edges to both directions if the context is configured for undirected graphs.
    pub fn read_graph(&self, reader: impl BufRead) -> Result<Graph, err::ErrorKind> {
        read_col(reader, self.config.undirected.value)
    }

    /// Encodes `graph` with the configured strategy.
    pub fn encode(&mut self, graph: &Graph) -> Result<Encoding, err::ErrorKind> {
        let encoding = encode(graph, self.config.strategy.value)?;

        self.counters.encodings += 1;
        self.counters.variables = encoding.variable_count();
        self.counters.clauses = encoding.clause_count();

        Ok(encoding)
    }

    /// Whether `graph` has a Hamiltonian cycle, and if so some cycle.
    pub fn find_cycle(&mut self, graph: &Graph) -> Result<Outcome, err::ErrorKind> {
        let encoding = self.encode(graph)?;

        let mut backend = B::default();
        backend.add_formula(&encoding.formula);

        match self.solve(&mut backend, &encoding)? {
            Verdict::Unsatisfiable => Ok(Outcome::NonHamiltonian),
            Verdict::Satisfiable(model) => Ok(Outcome::Hamiltonian(self.read_cycle(&encoding, &model)?)),
        }
    }

    /// Up to `limit` distinct Hamiltonian cycles of `graph`.
    ///
    /// After each cycle is found a clause is added to block the arcs of the cycle, and the formula is solved again.
    /// So, fewer than `limit` cycles are returned only if `graph` has no other cycle.
    pub fn find_cycles(&mut self, graph: &Graph, limit: usize) -> Result<Vec<Cycle>, err::ErrorKind> {
        let mut encoding = self.encode(graph)?;

        let mut backend = B::default();
        backend.add_formula(&encoding.formula);

        let mut cycles = Vec::default();

        'enumeration: while cycles.len() < limit {
            let model = match self.solve(&mut backend, &encoding)? {
                Verdict::Unsatisfiable => break 'enumeration,
                Verdict::Satisfiable(model) => model,
            };

            let cycle = self.read_cycle(&encoding, &model)?;
            let block = blocking_clause(&encoding, &cycle)?;

            log::info!(target: targets::CONTEXT, "Cycle {}: {cycle}", cycles.len() + 1);
            backend.add_clause(&block);
            encoding.formula.add_clause(block);
            cycles.push(cycle);
        }

        Ok(cycles)
    }

    /// Reads the output of a solver run on the DIMACS form of the encoding of `graph`, and decodes any cycle.
    pub fn decode_solution(&mut self, graph: &Graph, reader: impl BufRead) -> Result<Outcome, err::ErrorKind> {
        let encoding = self.encode(graph)?;

        match read_solution(reader, encoding.variable_count())? {
            Verdict::Unsatisfiable => Ok(Outcome::NonHamiltonian),
            Verdict::Satisfiable(model) => Ok(Outcome::Hamiltonian(self.read_cycle(&encoding, &model)?)),
        }
    }

    fn solve(&mut self, backend: &mut B, encoding: &Encoding) -> Result<Verdict, err::ErrorKind> {
        let start = Instant::now();
        let verdict = backend.solve(encoding.variable_count());
        self.counters.time += start.elapsed();
        self.counters.solves += 1;

        verdict.map_err(err::ErrorKind::from)
    }

    /// Checks `model` against the formula of `encoding`, if configured to, and decodes the cycle of `model`.
    fn read_cycle(&mut self, encoding: &Encoding, model: &Model) -> Result<Cycle, err::ErrorKind> {
        if self.config.verify_model.value {
            if let Some(clause) = encoding.formula.evaluate(model) {
                log::error!(target: targets::CONTEXT, "Model falsifies clause {clause}");
                return Err(err::ErrorKind::from(err::BackendError::InvalidModel { clause }));
            }
        }

        let cycle = decode(encoding, model)?;
        self.counters.cycles += 1;
        Ok(cycle)
    }
}

/// The clause forbidding every arc of `cycle` from being chosen together.
fn blocking_clause(encoding: &Encoding, cycle: &Cycle) -> Result<CClause, err::DecodeError> {
    let mut clause = Vec::with_capacity(cycle.len());
    for (i, j) in cycle.arcs() {
        match encoding.arc(i, j) {
            Some(var) => clause.push(Lit::new(var, false)),
            None => return Err(err::DecodeError::MissingArc((i, j))),
        }
    }
    Ok(clause)
}

#[cfg(test)]
mod tests {
    use crate::{
        config::{Config, Strategy},
        context::{Context, Outcome},
        families::{complete, cycle},
        structures::graph::Graph,
        types::err,
    };

    #[test]
    fn enumerate_complete() {
        for strategy in [Strategy::RippleCarry, Strategy::BitPropagation] {
            let mut config = Config::default();
            config.strategy.value = strategy;
            let mut the_context = Context::from_config(config);

            assert_eq!(the_context.find_cycles(&complete(4).unwrap(), 100).unwrap().len(), 6);
            assert_eq!(the_context.find_cycles(&complete(5).unwrap(), 100).unwrap().len(), 24);
            assert_eq!(the_context.find_cycles(&complete(5).unwrap(), 5).unwrap().len(), 5);
        }
    }

    #[test]
    fn distinct_cycles() {
        let mut the_context = Context::from_config(Config::default());
        let cycles = the_context.find_cycles(&complete(5).unwrap(), 24).unwrap();
        let distinct = cycles.iter().collect::<std::collections::HashSet<_>>();
        assert_eq!(distinct.len(), 24);
    }

    #[test]
    fn undirected_pentagon() {
        let mut the_context = Context::from_config(Config::default());
        let col = "p edge 5 5\ne 1 2\ne 2 3\ne 3 4\ne 4 5\ne 5 1\n";
        let graph = the_context.read_graph(col.as_bytes()).unwrap();
        assert_eq!(the_context.find_cycles(&graph, 10).unwrap().len(), 2);
    }

    #[test]
    fn directed_cycle() {
        let mut the_context = Context::from_config(Config::default());
        match the_context.find_cycle(&cycle(6).unwrap()) {
            Ok(Outcome::Hamiltonian(found)) => assert_eq!(found.order(), &[1, 2, 3, 4, 5, 6]),
            other => panic!("{other:?}"),
        }
        assert_eq!(the_context.counters.cycles, 1);
        assert_eq!(the_context.counters.solves, 1);
    }

    #[test]
    fn external_solution() {
        let mut the_context = Context::from_config(Config::default());
        let graph = Graph::new(3, [(1, 2), (2, 3), (3, 1)]).unwrap();
        let encoding = the_context.encode(&graph).unwrap();

        let witness = encoding.witness(&crate::structures::cycle::Cycle::new(vec![1, 2, 3])).unwrap();
        let output = format!("s SATISFIABLE\nv {}\n", witness.as_dimacs());
        match the_context.decode_solution(&graph, output.as_bytes()) {
            Ok(Outcome::Hamiltonian(found)) => assert_eq!(found.order(), &[1, 2, 3]),
            other => panic!("{other:?}"),
        }

        let mut broken = witness.clone();
        broken.set(encoding.arc(1, 2).unwrap(), false);
        let output = format!("s SATISFIABLE\nv {}\n", broken.as_dimacs());
        assert!(matches!(
            the_context.decode_solution(&graph, output.as_bytes()),
            Err(err::ErrorKind::Backend(err::BackendError::InvalidModel { .. }))
        ));

        the_context.config.verify_model.value = false;
        assert!(matches!(
            the_context.decode_solution(&graph, output.as_bytes()),
            Err(err::ErrorKind::Decode(err::DecodeError::NoSuccessor(1)))
        ));

        assert_eq!(
            the_context.decode_solution(&graph, "s UNSATISFIABLE\n".as_bytes()),
            Ok(Outcome::NonHamiltonian)
        );
    }
}
