use crate::{
    algo::{cycle::dfs_find, depth_first_order::Orders},
    core::{marker::Directed, VertexId},
    storage::AdjList,
};

use super::{kahn::peel, Algo, TopologicalOrder};

/// Builder for [`TopologicalOrder`].
pub struct TopologicalOrderBuilder<'a, V> {
    graph: &'a AdjList<V, Directed>,
    algo: Option<Algo>,
}

impl<V> TopologicalOrder<V> {
    /// Starts building the analysis on given graph.
    pub fn on(graph: &AdjList<V, Directed>) -> TopologicalOrderBuilder<'_, V> {
        TopologicalOrderBuilder { graph, algo: None }
    }
}

impl<'a, V> TopologicalOrderBuilder<'a, V> {
    /// Chooses [Kahn's algorithm](Algo::Kahn).
    pub fn kahn(self) -> Self {
        self.using(Algo::Kahn)
    }

    /// Chooses [depth-first search](Algo::Dfs).
    pub fn dfs(self) -> Self {
        self.using(Algo::Dfs)
    }

    /// Chooses the algorithm explicitly.
    pub fn using(self, algo: Algo) -> Self {
        self.using_opt(Some(algo))
    }

    /// Chooses the algorithm explicitly, `None` meaning the default one.
    pub fn using_opt(self, algo: Option<Algo>) -> Self {
        Self { algo, ..self }
    }

    /// Runs the algorithm.
    pub fn run(self) -> TopologicalOrder<V> {
        let graph = self.graph;
        let algo = self.algo.unwrap_or_default();

        tracing::debug!(
            vertices = graph.vertex_count(),
            edges = graph.edge_count(),
            ?algo,
            "computing topological order"
        );

        let order = match algo {
            Algo::Kahn => kahn_order(graph),
            Algo::Dfs => dfs_order(graph),
        };

        if order.is_none() {
            tracing::debug!("graph has a cycle, no topological order");
        }

        TopologicalOrder::new(graph, order)
    }
}

fn kahn_order<V>(graph: &AdjList<V, Directed>) -> Option<Vec<VertexId>> {
    let peeling = peel(graph);
    peeling.is_complete().then_some(peeling.order)
}

fn dfs_order<V>(graph: &AdjList<V, Directed>) -> Option<Vec<VertexId>> {
    if dfs_find(graph).is_some() {
        return None;
    }

    let mut order = Orders::traverse(graph).post;
    order.reverse();
    Some(order)
}
