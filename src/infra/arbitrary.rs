use arbitrary::{Arbitrary, Unstructured};

use crate::{
    core::{marker::EdgeType, Vertex},
    storage::AdjList,
};

// Keeps generated graphs dense enough to contain cycles.
const MAX_KEYS: u8 = 32;

impl<'a, Ty: EdgeType> Arbitrary<'a> for AdjList<String, Ty> {
    fn arbitrary(u: &mut Unstructured<'a>) -> arbitrary::Result<Self> {
        let mut graph = AdjList::new();

        while !u.is_empty() {
            // Choose a kind of operation with different weights.
            let kind = u.choose(&[
                OpKind::Vertex,
                OpKind::Edge,
                OpKind::Edge,
                OpKind::Edge,
                OpKind::Edge,
            ])?;

            match kind {
                OpKind::Vertex => {
                    graph.add_vertex(arbitrary_vertex(u)?);
                }
                OpKind::Edge => {
                    let from = arbitrary_vertex(u)?;
                    let to = arbitrary_vertex(u)?;
                    graph.add_edge(from, to);
                }
            }
        }

        Ok(graph)
    }
}

fn arbitrary_vertex(u: &mut Unstructured<'_>) -> arbitrary::Result<Vertex<String>> {
    let key = u.int_in_range(0..=MAX_KEYS - 1)?;
    Ok(Vertex::from_key(key.to_string()))
}

#[derive(Debug, Clone, Copy)]
enum OpKind {
    Vertex,
    Edge,
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::{
        algo::{
            Bipartite, DirectedCycle, DirectedEulerianCycle, DirectedEulerianPath,
            StronglyConnectedComponents, TopologicalOrder,
        },
        storage::{Digraph, UndirectedGraph},
    };

    fn random_bytes(rng: &mut fastrand::Rng, len: usize) -> Vec<u8> {
        (0..len).map(|_| rng.u8(..)).collect()
    }

    #[test]
    fn is_arbitrary() {
        fn assert_arbitrary<'a, T: Arbitrary<'a>>() {}

        assert_arbitrary::<Digraph<String>>();
        assert_arbitrary::<UndirectedGraph<String>>();
    }

    #[test]
    fn analyses_on_arbitrary_graphs() {
        let mut rng = fastrand::Rng::with_seed(7);

        for _ in 0..64 {
            let bytes = random_bytes(&mut rng, 256);

            let graph = Digraph::<String>::arbitrary(&mut Unstructured::new(&bytes))
                .expect("arbitrary digraph");

            let cycle = DirectedCycle::on(&graph).run();
            let order = TopologicalOrder::on(&graph).run();
            assert_eq!(cycle.has_cycle(), !order.has_order());

            let scc = StronglyConnectedComponents::on(&graph).run();
            assert!(scc.count() <= graph.vertex_count());

            let euler_cycle = DirectedEulerianCycle::new(&graph);
            let euler_path = DirectedEulerianPath::new(&graph);
            if euler_cycle.has_eulerian_cycle() {
                assert!(euler_path.has_eulerian_path());
            }

            let graph = UndirectedGraph::<String>::arbitrary(&mut Unstructured::new(&bytes))
                .expect("arbitrary undirected graph");

            let bipartite = Bipartite::new(&graph);
            assert_eq!(bipartite.is_bipartite(), bipartite.odd_cycle().is_empty());
        }
    }
}
