use crate::{core::marker::Directed, storage::AdjList};

use super::{
    gabow::gabow, kosaraju::kosaraju_sharir, tarjan::tarjan, Algo, StronglyConnectedComponents,
};

/// Builder for [`StronglyConnectedComponents`].
pub struct StronglyConnectedComponentsBuilder<'a, V> {
    graph: &'a AdjList<V, Directed>,
    algo: Option<Algo>,
}

impl<V> StronglyConnectedComponents<V> {
    /// Starts building the analysis on given graph.
    pub fn on(graph: &AdjList<V, Directed>) -> StronglyConnectedComponentsBuilder<'_, V> {
        StronglyConnectedComponentsBuilder { graph, algo: None }
    }
}

impl<'a, V> StronglyConnectedComponentsBuilder<'a, V> {
    /// Chooses [Tarjan's algorithm](Algo::Tarjan).
    pub fn tarjan(self) -> Self {
        self.using(Algo::Tarjan)
    }

    /// Chooses [Kosaraju-Sharir algorithm](Algo::KosarajuSharir).
    pub fn kosaraju_sharir(self) -> Self {
        self.using(Algo::KosarajuSharir)
    }

    /// Chooses [Gabow's algorithm](Algo::Gabow).
    pub fn gabow(self) -> Self {
        self.using(Algo::Gabow)
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
    pub fn run(self) -> StronglyConnectedComponents<V> {
        let graph = self.graph;
        let algo = self.algo.unwrap_or_default();

        tracing::debug!(
            vertices = graph.vertex_count(),
            edges = graph.edge_count(),
            ?algo,
            "computing strongly connected components"
        );

        let components = match algo {
            Algo::Tarjan => tarjan(graph),
            Algo::KosarajuSharir => kosaraju_sharir(graph),
            Algo::Gabow => gabow(graph),
        };

        tracing::debug!(count = components.count, "strongly connected components found");

        StronglyConnectedComponents::new(graph, components)
    }
}
