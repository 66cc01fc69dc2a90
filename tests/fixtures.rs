use hcp_sat::config::Strategy;

mod common;
use common::{graphs_dir, silent_graph_report, with_strategy};

fn on_directory(strategy: Strategy) -> (usize, usize) {
    let mut hamiltonian = 0;
    let mut non_hamiltonian = 0;

    let pattern = graphs_dir().join("*.col*");
    let graphs = match glob::glob(&pattern.to_string_lossy()) {
        Ok(graphs) => graphs,
        Err(_) => panic!("graphs missing"),
    };

    for graph_path in graphs.flatten() {
        let graph_name = match graph_path.file_name().and_then(|name| name.to_str()) {
            Some(name) => name.to_owned(),
            None => continue,
        };

        if graph_name.contains("yes") {
            assert!(
                silent_graph_report(&graph_path, &with_strategy(strategy)),
                "{graph_name}"
            );
            hamiltonian += 1;
        }

        if graph_name.contains("no") {
            assert!(
                !silent_graph_report(&graph_path, &with_strategy(strategy)),
                "{graph_name}"
            );
            non_hamiltonian += 1;
        }
    }

    (hamiltonian, non_hamiltonian)
}

#[test]
fn ripple_carry() {
    assert_eq!(on_directory(Strategy::RippleCarry), (5, 5));
}

#[test]
fn bit_propagation() {
    assert_eq!(on_directory(Strategy::BitPropagation), (5, 5));
}

mod directed {
    use super::*;
    use hcp_sat::context::{Context, Outcome};

    #[test]
    fn square_one_way() {
        let mut config = with_strategy(Strategy::RippleCarry);
        config.undirected.value = false;
        let mut ctx = Context::from_config(config);

        let graph = common::load_graph(&ctx, &graphs_dir().join("square_yes.col")).unwrap();
        assert_eq!(graph.edge_count(), 4);
        match ctx.find_cycles(&graph, usize::MAX) {
            Ok(cycles) => assert_eq!(cycles.len(), 1),
            Err(e) => panic!("{e:?}"),
        }

        let graph = common::load_graph(&ctx, &graphs_dir().join("wheel_yes.col")).unwrap();
        assert_eq!(ctx.find_cycle(&graph), Ok(Outcome::NonHamiltonian));
    }
}
