use std::{fs::File, io::BufWriter};

use hcp_sat::{
    context::{Context, Outcome},
    structures::{cycle::Cycle, graph::Graph},
};

use config::CliConfig;
use parse_args::parse_args;
use read::{open, read_graph};

mod config;
mod parse_args;
mod read;

fn main() {
    #[cfg(feature = "logger")]
    env_logger::init();

    let mut cli_options = CliConfig::default();

    let args: Vec<String> = std::env::args().collect();

    let config = match parse_args(&args, &mut cli_options) {
        Ok(config) => config,
        Err(e) => {
            println!("c {e}");
            std::process::exit(1);
        }
    };

    let mut the_context = Context::from_config(config);

    let graph = match args.len() {
        0 | 1 => None,
        _ => args.last(),
    };

    let graph = match read_graph(graph, &the_context) {
        Ok(graph) => graph,
        Err(e) => {
            println!("c {e}");
            std::process::exit(1);
        }
    };

    if let Some(path) = cli_options.dimacs.take() {
        write_dimacs(&mut the_context, &graph, &path);
        report_stats(&the_context, &cli_options);
        return;
    }

    let cycles = match cli_options.solution.take() {
        Some(path) => {
            println!("c Reading solution from {path:?}");
            let reader = match open(&path) {
                Ok(reader) => reader,
                Err(e) => {
                    println!("c {e}");
                    std::process::exit(1);
                }
            };
            the_context.decode_solution(&graph, reader).map(outcome_cycles)
        }

        None if cli_options.enumerate => {
            let limit = the_context.config.cycle_limit.value;
            the_context.find_cycles(&graph, limit)
        }

        None => the_context.find_cycle(&graph).map(outcome_cycles),
    };

    let cycles = match cycles {
        Ok(cycles) => cycles,
        Err(e) => {
            println!("c {e}");
            std::process::exit(2);
        }
    };

    if cli_options.enumerate {
        println!("c Found {} cycles", cycles.len());
    }

    match cycles.first() {
        None => println!("s {}", Outcome::NonHamiltonian),

        Some(first) => {
            println!("s HAMILTONIAN");
            for cycle in &cycles {
                println!("{cycle}");
            }

            if cli_options.model {
                write_model(&mut the_context, &graph, first);
            }
        }
    }

    report_stats(&the_context, &cli_options);
}

fn outcome_cycles(outcome: Outcome) -> Vec<Cycle> {
    match outcome {
        Outcome::Hamiltonian(cycle) => vec![cycle],
        Outcome::NonHamiltonian => Vec::default(),
    }
}

fn write_dimacs(context: &mut Context, graph: &Graph, path: &std::path::Path) {
    let encoding = match context.encode(graph) {
        Ok(encoding) => encoding,
        Err(e) => {
            println!("c {e}");
            std::process::exit(2);
        }
    };

    let mut writer = match File::create(path) {
        Ok(file) => BufWriter::new(file),
        Err(_) => {
            println!("c Failed to create {path:?}");
            std::process::exit(1);
        }
    };

    match encoding.formula.write_dimacs(&mut writer, encoding.variable_count()) {
        Ok(()) => println!("c Encoding written to {path:?}"),
        Err(e) => {
            println!("c Failed to write {path:?}: {e}");
            std::process::exit(1);
        }
    }
}

/// Writes the model given by `cycle`, which is the only model of the encoding with the arcs of `cycle`.
fn write_model(context: &mut Context, graph: &Graph, cycle: &Cycle) {
    let model = context
        .encode(graph)
        .and_then(|encoding| encoding.witness(cycle).map_err(Into::into));

    match model {
        Ok(model) => println!("v {}", model.as_dimacs()),
        Err(e) => {
            println!("c {e}");
            std::process::exit(2);
        }
    }
}

fn report_stats(context: &Context, cli_options: &CliConfig) {
    if cli_options.stats {
        println!("c Variables:        {}", context.counters.variables);
        println!("c Clauses:          {}", context.counters.clauses);
        println!("c Solves:           {}", context.counters.solves);
        println!("c Solve time:       {:.2?}", context.counters.time);
    }
}
