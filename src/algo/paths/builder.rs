use crate::{
    core::{marker::Directed, VertexSet},
    storage::AdjList,
    visit::{raw::RawEvent, Bfs, Dfs},
};

use super::{Algo, DirectedPaths};

/// Builder for [`DirectedPaths`].
pub struct DirectedPathsBuilder<'a, V> {
    graph: &'a AdjList<V, Directed>,
    algo: Option<Algo>,
}

impl<V> DirectedPaths<V> {
    /// Starts building the analysis on given graph.
    pub fn on(graph: &AdjList<V, Directed>) -> DirectedPathsBuilder<'_, V> {
        DirectedPathsBuilder { graph, algo: None }
    }
}

impl<'a, V> DirectedPathsBuilder<'a, V> {
    /// Chooses [breadth-first search](Algo::Bfs).
    pub fn bfs(self) -> Self {
        self.using(Algo::Bfs)
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

    /// Runs the search from a single source.
    pub fn run(self, source: impl AsRef<str>) -> DirectedPaths<V> {
        self.run_multi([source])
    }

    /// Runs the search from all given sources at once.
    ///
    /// A vertex gets a path from the source it is discovered from first.
    /// Sources that are not in the graph are ignored.
    pub fn run_multi<I, K>(self, sources: I) -> DirectedPaths<V>
    where
        I: IntoIterator<Item = K>,
        K: AsRef<str>,
    {
        let graph = self.graph;
        let algo = self.algo.unwrap_or_default();
        let index = graph.key_index();

        let roots = sources
            .into_iter()
            .filter_map(|source| {
                let id = index.get(source.as_ref());
                if id.is_none() {
                    tracing::trace!(source = source.as_ref(), "ignoring unknown source");
                }
                id
            })
            .collect::<Vec<_>>();

        tracing::debug!(
            vertices = graph.vertex_count(),
            edges = graph.edge_count(),
            sources = roots.len(),
            ?algo,
            "searching directed paths"
        );

        let mut edge_to = vec![None; graph.vertex_count()];
        let mut record = |event: RawEvent| {
            if let RawEvent::Push { vertex, from } = event {
                edge_to[vertex.as_usize()] = Some(from);
            }
        };

        let marked = match algo {
            Algo::Bfs => {
                let mut bfs = Bfs::new(graph);
                let mut visitor = bfs.start_multi(roots);
                while visitor.visit_next_with(graph, &mut record).is_some() {}
                bfs.visited().clone()
            }
            Algo::Dfs => {
                let mut dfs = Dfs::new(graph);
                let mut visitor = dfs.start_multi(roots);
                while visitor.visit_next_with(graph, &mut record).is_some() {}
                dfs.visited().clone()
            }
        };

        DirectedPaths {
            index: index.clone(),
            vertices: graph.vertices().cloned().collect(),
            marked,
            edge_to,
        }
    }
}
