use hcp_sat::{
    config::Strategy,
    context::{Context, Outcome},
    families::complete,
    structures::{cycle::Cycle, graph::Graph},
};

mod common;
use common::{brute_force_count, is_hamiltonian_cycle, with_strategy};

/// Every subgraph of `base`, given by each subset of its edges.
fn subgraphs(base: &Graph) -> impl Iterator<Item = Graph> + '_ {
    let edges = base.edges().collect::<Vec<_>>();
    (0..1_u64 << edges.len()).map(move |mask| {
        let chosen = edges
            .iter()
            .enumerate()
            .filter(|(index, _)| mask & (1 << index) != 0)
            .map(|(_, edge)| *edge);
        Graph::new(base.vertex_count(), chosen).unwrap()
    })
}

fn agree_on_subgraphs(base: &Graph) {
    let mut ripple = Context::from_config(with_strategy(Strategy::RippleCarry));
    let mut direct = Context::from_config(with_strategy(Strategy::BitPropagation));

    for graph in subgraphs(base) {
        let expected = brute_force_count(&graph) > 0;

        for ctx in [&mut ripple, &mut direct] {
            match ctx.find_cycle(&graph) {
                Ok(Outcome::Hamiltonian(cycle)) => {
                    assert!(expected, "{graph:?}");
                    assert!(is_hamiltonian_cycle(&graph, cycle.order()));
                }
                Ok(Outcome::NonHamiltonian) => assert!(!expected, "{graph:?}"),
                Err(e) => panic!("{e:?}"),
            }
        }
    }
}

#[test]
fn directed_four() {
    agree_on_subgraphs(&complete(4).unwrap());
}

#[test]
#[ignore = "expensive"]
fn undirected_five() {
    let base = Graph::new(5, (1..=5).flat_map(|i| (i + 1..=5).map(move |j| (i, j)))).unwrap();

    let mut ripple = Context::from_config(with_strategy(Strategy::RippleCarry));
    let mut direct = Context::from_config(with_strategy(Strategy::BitPropagation));

    for subgraph in subgraphs(&base) {
        let graph = Graph::undirected(5, subgraph.edges()).unwrap();
        let expected = brute_force_count(&graph);

        for ctx in [&mut ripple, &mut direct] {
            assert_eq!(ctx.find_cycles(&graph, usize::MAX).unwrap().len(), expected);
        }
    }
}

#[test]
fn counts_agree() {
    for graph in subgraphs(&complete(4).unwrap()).step_by(37) {
        let expected = brute_force_count(&graph);

        for strategy in [Strategy::RippleCarry, Strategy::BitPropagation] {
            let mut ctx = Context::from_config(with_strategy(strategy));
            assert_eq!(ctx.find_cycles(&graph, usize::MAX).unwrap().len(), expected);
        }
    }
}

#[test]
fn every_cycle_has_a_witness() {
    let graph = complete(5).unwrap();

    for strategy in [Strategy::RippleCarry, Strategy::BitPropagation] {
        let mut ctx = Context::from_config(with_strategy(strategy));
        let encoding = ctx.encode(&graph).unwrap();

        let mut witnessed = 0;
        for a in 2..=5 {
            for b in 2..=5 {
                for c in 2..=5 {
                    for d in 2..=5 {
                        let order = vec![1, a, b, c, d];
                        if is_hamiltonian_cycle(&graph, &order) {
                            let witness = encoding.witness(&Cycle::new(order)).unwrap();
                            assert_eq!(encoding.formula.evaluate(&witness), None);
                            witnessed += 1;
                        }
                    }
                }
            }
        }
        assert_eq!(witnessed, 24);
    }
}
