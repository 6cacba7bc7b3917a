use crate::{algo::to_vertices, core::marker::Directed, storage::AdjList};

use super::{dfs::dfs_find, kahn::kahn_find, Algo, DirectedCycle};

/// Builder for [`DirectedCycle`].
pub struct DirectedCycleBuilder<'a, V> {
    graph: &'a AdjList<V, Directed>,
    algo: Option<Algo>,
}

impl<V> DirectedCycle<V> {
    /// Starts building the analysis on given graph.
    pub fn on(graph: &AdjList<V, Directed>) -> DirectedCycleBuilder<'_, V> {
        DirectedCycleBuilder { graph, algo: None }
    }
}

impl<'a, V> DirectedCycleBuilder<'a, V> {
    /// Chooses [depth-first search](Algo::Dfs).
    pub fn dfs(self) -> Self {
        self.using(Algo::Dfs)
    }

    /// Chooses [Kahn's elimination](Algo::Kahn).
    pub fn kahn(self) -> Self {
        self.using(Algo::Kahn)
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
    pub fn run(self) -> DirectedCycle<V> {
        let graph = self.graph;
        let algo = self.algo.unwrap_or_default();

        tracing::debug!(
            vertices = graph.vertex_count(),
            edges = graph.edge_count(),
            ?algo,
            "searching directed cycle"
        );

        let cycle = match algo {
            Algo::Dfs => dfs_find(graph),
            Algo::Kahn => kahn_find(graph),
        }
        .unwrap_or_default();

        tracing::debug!(length = cycle.len(), "directed cycle search finished");

        DirectedCycle {
            cycle: to_vertices(graph, &cycle),
        }
    }
}
