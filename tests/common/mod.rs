#![allow(dead_code)]

use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
};

use hcp_sat::{
    config::{Config, Strategy},
    context::{Context, Outcome},
    structures::{graph::Graph, vertex::Vertex},
    types::err,
};
use xz2::read::XzDecoder;

pub fn load_graph(context: &Context, path: &PathBuf) -> Result<Graph, err::ErrorKind> {
    let file = match File::open(path) {
        Err(_) => panic!("Could not load {path:?}"),
        Ok(f) => f,
    };

    match &path.extension() {
        Some(extension) if *extension == "xz" => {
            context.read_graph(BufReader::new(XzDecoder::new(&file)))
        }
        Some(_) | None => context.read_graph(BufReader::new(&file)),
    }
}

pub fn graphs_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests").join("graphs")
}

pub fn with_strategy(strategy: Strategy) -> Config {
    let mut config = Config::default();
    config.strategy.value = strategy;
    config
}

/// Whether the graph at `path` is Hamiltonian, checking any cycle found is a cycle of the graph.
pub fn silent_graph_report(path: &PathBuf, config: &Config) -> bool {
    let mut ctx = Context::from_config(config.clone());
    let graph = match load_graph(&ctx, path) {
        Ok(graph) => graph,
        Err(e) => panic!("c Error loading {path:?}: {e}"),
    };

    silent_report(&mut ctx, &graph)
}

pub fn silent_report(ctx: &mut Context, graph: &Graph) -> bool {
    match ctx.find_cycle(graph) {
        Ok(Outcome::Hamiltonian(cycle)) => {
            assert!(is_hamiltonian_cycle(graph, cycle.order()));
            true
        }
        Ok(Outcome::NonHamiltonian) => false,
        Err(e) => panic!("{e:?}"),
    }
}

pub fn is_hamiltonian_cycle(graph: &Graph, order: &[Vertex]) -> bool {
    let mut sorted = order.to_vec();
    sorted.sort_unstable();

    order.first() == Some(&1)
        && sorted == graph.vertices().collect::<Vec<_>>()
        && (0..order.len()).all(|k| graph.has_edge(order[k], order[(k + 1) % order.len()]))
}

/// A count of Hamiltonian cycles of `graph`, by trying every ordering of vertices from 1.
pub fn brute_force_count(graph: &Graph) -> usize {
    let n = graph.vertex_count();
    let mut order = vec![1];
    let mut used = vec![false; n as usize + 1];
    used[1] = true;
    extend(graph, &mut order, &mut used)
}

fn extend(graph: &Graph, order: &mut Vec<Vertex>, used: &mut [bool]) -> usize {
    let n = graph.vertex_count() as usize;
    let last = *order.last().unwrap_or(&1);

    if order.len() == n {
        return match n > 1 && graph.has_edge(last, 1) {
            true => 1,
            false => 0,
        };
    }

    let mut count = 0;
    for next in graph.successors(last).collect::<Vec<_>>() {
        if !used[next as usize] {
            used[next as usize] = true;
            order.push(next);
            count += extend(graph, order, used);
            order.pop();
            used[next as usize] = false;
        }
    }
    count
}
