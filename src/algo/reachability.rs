//! Determine which vertices are reachable from given sources, or from every
//! vertex ([transitive closure]).
//!
//! [transitive closure]: https://en.wikipedia.org/wiki/Transitive_closure#In_graph_theory
//!
//! # Examples
//!
//! ```
//! use keygraph::{
//!     algo::{Reachability, TransitiveClosure},
//!     storage::Digraph,
//! };
//!
//! let graph = Digraph::from_edge_keys([("a", "b"), ("b", "c"), ("d", "a")]);
//!
//! let reachability = Reachability::new(&graph, ["b"]);
//! assert!(reachability.marked("c"));
//! assert!(!reachability.marked("a"));
//! assert_eq!(reachability.count(), 2);
//!
//! let closure = TransitiveClosure::new(&graph);
//! assert!(closure.reachable("d", "c"));
//! assert!(!closure.reachable("c", "d"));
//! ```

use crate::{
    core::{marker::Directed, KeyIndex, Neighbors, VertexId, VertexSet},
    storage::AdjList,
    visit::{Dfs, TypedBitSet, VisitSet, Visitor},
};

/// Vertices reachable from a set of sources.
///
/// Every source is reachable from itself. Sources that are not in the graph
/// are ignored.
///
/// See [module](self) documentation for more details and example.
#[derive(Debug, Clone)]
pub struct Reachability {
    index: KeyIndex,
    marked: TypedBitSet<VertexId>,
}

impl Reachability {
    /// Runs a depth-first search from all sources.
    pub fn new<V, I, K>(graph: &AdjList<V, Directed>, sources: I) -> Self
    where
        I: IntoIterator<Item = K>,
        K: AsRef<str>,
    {
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
            "computing reachability"
        );

        let mut dfs = Dfs::new(graph);
        dfs.start_multi(roots).into_iter(graph).for_each(drop);

        Self {
            index: index.clone(),
            marked: dfs.visited().clone(),
        }
    }

    /// Returns `true` if the vertex is reachable from a source.
    pub fn marked(&self, v: impl AsRef<str>) -> bool {
        self.index
            .get(v.as_ref())
            .is_some_and(|id| self.marked.is_visited(&id))
    }

    /// Returns the number of reachable vertices, sources included.
    pub fn count(&self) -> usize {
        self.marked.visited_count()
    }
}

/// Reachability between all pairs of vertices.
///
/// Computed by a depth-first search from every vertex, which takes
/// *O(V (V + E))* time and *O(V²)* space. Suitable for small or dense graphs
/// queried many times.
///
/// Every vertex with an incident edge reaches itself. An isolated vertex
/// reaches itself only through a self-loop.
///
/// See [module](self) documentation for more details and example.
#[derive(Debug, Clone)]
pub struct TransitiveClosure {
    index: KeyIndex,
    rows: Vec<TypedBitSet<VertexId>>,
}

impl TransitiveClosure {
    /// Computes the closure of the graph.
    pub fn new<V>(graph: &AdjList<V, Directed>) -> Self {
        tracing::debug!(
            vertices = graph.vertex_count(),
            edges = graph.edge_count(),
            "computing transitive closure"
        );

        let mut dfs = Dfs::new(graph);
        let mut rows = Vec::with_capacity(graph.vertex_count());

        for v in graph.vertex_ids() {
            dfs.reset();
            dfs.start(v).into_iter(graph).for_each(drop);

            let mut row = dfs.visited().clone();
            if graph.neighbors(v).is_empty() && graph.indegree_by_id(v) == 0 {
                row.set(v.as_usize(), false);
            }
            rows.push(row);
        }

        Self {
            index: graph.key_index().clone(),
            rows,
        }
    }

    /// Returns `true` if there is a path from `v` to `w`.
    ///
    /// Returns `false` if either vertex is not known.
    pub fn reachable(&self, v: impl AsRef<str>, w: impl AsRef<str>) -> bool {
        match (self.index.get(v.as_ref()), self.index.get(w.as_ref())) {
            (Some(v), Some(w)) => self.rows[v.as_usize()].is_visited(&w),
            _ => false,
        }
    }
}
