/*!
The encoder, which writes the formula for a graph.

An [Encoder] borrows a graph, and fills a fresh [registry](crate::db::registry) and [formula](crate::db::formula) in a fixed order:

1. Variables.
   + An arc variable for each edge, in lexicographic order of edges.
   + A register of [width](crate::structures::rank::width) bits for each vertex, vertex by vertex.
2. [Arc constraints](arcs), each vertex has exactly one outgoing and exactly one incoming arc.
3. [Position constraints](position), fixing the rank of the start and the vertices on either side of the start.
4. [Successor constraints](successor), for each edge between two vertices other than the start, using the configured [Strategy].
   Any auxiliary variables are issued here.

So, encoding is deterministic: the same graph and strategy always give the same variables and the same clauses in the same order.

The result is an [Encoding], which keeps the registry and formula together with what is needed to read them back.

```rust
# use hcp_sat::config::Strategy;
# use hcp_sat::encoder::encode;
# use hcp_sat::structures::graph::Graph;
let square = Graph::new(4, [(1, 2), (2, 3), (3, 4), (4, 1)]).unwrap();
let encoding = encode(&square, Strategy::RippleCarry).unwrap();

assert_eq!(encoding.width, 3);
// Four arcs, twelve rank bits, and five adder variables on each of (2, 3) and (3, 4).
assert_eq!(encoding.variable_count(), 4 + 12 + 10);
```
*/

pub mod arcs;
pub mod position;
pub mod successor;
pub mod witness;

use crate::{
    config::Strategy,
    db::{
        formula::Formula,
        registry::{VarKey, VariableRegistry},
    },
    misc::log::targets::{self},
    structures::{
        clause::CClause,
        graph::{Edge, Graph},
        literal::{Lit, Literal, Var},
        rank::{width, Bit},
        vertex::{Vertex, START},
    },
    types::err::{self},
};

/// The variables and clauses written for a graph.
#[derive(Clone, Debug)]
pub struct Encoding {
    /// The number of vertices of the graph encoded.
    pub vertex_count: Vertex,

    /// The width of each rank register.
    pub width: Bit,

    /// The strategy used for successor constraints.
    pub strategy: Strategy,

    /// What each variable stands for.
    pub registry: VariableRegistry,

    /// The clauses written.
    pub formula: Formula,
}

impl Encoding {
    /// A count of variables of the encoding.
    pub fn variable_count(&self) -> usize {
        self.registry.count()
    }

    /// A count of clauses of the encoding.
    pub fn clause_count(&self) -> usize {
        self.formula.clause_count()
    }

    /// The arc variable of the edge from `i` to `j`, if the edge is part of the graph.
    pub fn arc(&self, i: Vertex, j: Vertex) -> Option<Var> {
        self.registry.get(VarKey::Arc((i, j)))
    }

    /// The variable of `bit` in the rank register of `vertex`, if both are part of the encoding.
    pub fn rank_bit(&self, vertex: Vertex, bit: Bit) -> Option<Var> {
        self.registry.get(VarKey::Rank(vertex, bit))
    }
}

/// A graph, and the registry and formula being written for the graph.
pub struct Encoder<'g> {
    graph: &'g Graph,

    width: Bit,

    registry: VariableRegistry,

    formula: Formula,
}

impl<'g> Encoder<'g> {
    /// An encoder for `graph`, with nothing written.
    pub fn new(graph: &'g Graph) -> Self {
        Encoder {
            graph,
            width: width(graph.vertex_count()),
            registry: VariableRegistry::default(),
            formula: Formula::default(),
        }
    }

    /// The graph being encoded.
    pub fn graph(&self) -> &'g Graph {
        self.graph
    }

    /// The width of each rank register.
    pub fn width(&self) -> Bit {
        self.width
    }

    /// The (positive) literal of the arc variable from `i` to `j`.
    pub fn arc(&mut self, i: Vertex, j: Vertex) -> Result<Lit, err::RegistryError> {
        self.literal(VarKey::Arc((i, j)))
    }

    /// The (positive) literal of `bit` of the rank register of `vertex`.
    pub fn rank_bit(&mut self, vertex: Vertex, bit: Bit) -> Result<Lit, err::RegistryError> {
        self.literal(VarKey::Rank(vertex, bit))
    }

    /// The (positive) literal of the variable issued for `key`.
    pub fn literal(&mut self, key: VarKey) -> Result<Lit, err::RegistryError> {
        let var = self.registry.allocate(key)?;
        Ok(Lit::new(var, true))
    }

    /// Appends `clause` to the formula.
    pub fn add_clause(&mut self, clause: CClause) {
        self.formula.add_clause(clause);
    }

    /// A count of clauses written so far.
    pub fn clause_count(&self) -> usize {
        self.formula.clause_count()
    }

    /// Issues every arc variable, and then every rank bit.
    pub fn allocate_variables(&mut self) -> Result<(), err::RegistryError> {
        let graph = self.graph;
        for (i, j) in graph.edges() {
            self.arc(i, j)?;
        }

        for vertex in graph.vertices() {
            for bit in 0..self.width {
                self.rank_bit(vertex, bit)?;
            }
        }

        log::info!(target: targets::REGISTRY, "{} arc and {} rank variables", graph.edge_count(), self.registry.count() - graph.edge_count());
        Ok(())
    }

    /// Edges subject to a successor constraint, those with neither vertex the start.
    pub fn interior_edges(&self) -> impl Iterator<Item = Edge> + 'g {
        self.graph
            .edges()
            .filter(|(i, j)| *i != START && *j != START)
    }

    /// Completes the encoding.
    pub fn finish(self, strategy: Strategy) -> Encoding {
        Encoding {
            vertex_count: self.graph.vertex_count(),
            width: self.width,
            strategy,
            registry: self.registry,
            formula: self.formula,
        }
    }
}

/// Writes the formula for `graph`, using `strategy` for successor constraints.
///
/// As a [Graph] is valid by construction, the only error is exhausting the supply of variables.
pub fn encode(graph: &Graph, strategy: Strategy) -> Result<Encoding, err::ErrorKind> {
    let mut encoder = Encoder::new(graph);
    log::info!(target: targets::CONTEXT, "Encoding {} vertices and {} edges with {strategy}, width {}", graph.vertex_count(), graph.edge_count(), encoder.width());

    encoder.allocate_variables()?;

    encoder.exactly_one_out()?;
    encoder.exactly_one_in()?;

    encoder.fix_start()?;
    encoder.bound_start_neighbours()?;

    let gadget = strategy.gadget();
    let interior = encoder.interior_edges().collect::<Vec<_>>();
    for edge in &interior {
        gadget.increment(&mut encoder, *edge)?;
    }
    log::info!(target: targets::SUCCESSOR, "{} successor constraints", interior.len());

    let encoding = encoder.finish(strategy);
    log::info!(target: targets::CONTEXT, "{} variables and {} clauses", encoding.variable_count(), encoding.clause_count());
    Ok(encoding)
}
