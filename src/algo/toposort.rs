//! Find a [topological order] of the vertices of a directed acyclic graph.
//!
//! See available parameters [here](TopologicalOrderBuilder#implementations).
//!
//! [topological order]: https://en.wikipedia.org/wiki/Topological_sorting
//!
//! # Examples
//!
//! ```
//! use keygraph::{algo::TopologicalOrder, storage::Digraph};
//!
//! let graph = Digraph::from_edge_keys([
//!     ("parse", "typecheck"),
//!     ("typecheck", "codegen"),
//!     ("parse", "lint"),
//! ]);
//!
//! let toposort = TopologicalOrder::on(&graph).run();
//!
//! let order = toposort
//!     .order()
//!     .unwrap()
//!     .iter()
//!     .map(|v| v.key())
//!     .collect::<Vec<_>>();
//!
//! assert_eq!(order, vec!["parse", "typecheck", "lint", "codegen"]);
//! assert_eq!(toposort.rank("lint"), Some(2));
//! ```

use crate::{
    algo::to_vertices,
    core::{marker::Directed, KeyIndex, Vertex, VertexId, VertexSet},
    storage::AdjList,
};

mod builder;
pub(crate) mod kahn;

pub use builder::TopologicalOrderBuilder;

/// Topological order of a directed graph, if it has one.
///
/// An order exists if and only if the graph has no directed cycle.
///
/// See [module](self) documentation for more details and example.
#[derive(Debug, Clone)]
pub struct TopologicalOrder<V> {
    index: KeyIndex,
    order: Option<Vec<Vertex<V>>>,
    ranks: Vec<Option<usize>>,
}

impl<V> TopologicalOrder<V> {
    fn new(graph: &AdjList<V, Directed>, order: Option<Vec<VertexId>>) -> Self {
        let mut ranks = vec![None; graph.vertex_count()];

        if let Some(order) = order.as_ref() {
            for (rank, v) in order.iter().enumerate() {
                ranks[v.as_usize()] = Some(rank);
            }
        }

        Self {
            index: graph.key_index().clone(),
            order: order.map(|order| to_vertices(graph, &order)),
            ranks,
        }
    }

    /// Returns `true` if the graph has a topological order.
    pub fn has_order(&self) -> bool {
        self.order.is_some()
    }

    /// Returns the vertices in topological order, `None` if the graph has a
    /// cycle.
    pub fn order(&self) -> Option<&[Vertex<V>]> {
        self.order.as_deref()
    }

    /// Returns the position of the vertex in the order.
    ///
    /// Returns `None` if the graph has a cycle or the vertex is not known.
    pub fn rank(&self, v: impl AsRef<str>) -> Option<usize> {
        self.index
            .get(v.as_ref())
            .and_then(|id| self.ranks[id.as_usize()])
    }
}

/// Algorithm for [`TopologicalOrder`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[non_exhaustive]
pub enum Algo {
    /// [Kahn's
    /// algorithm](https://en.wikipedia.org/wiki/Topological_sorting#Kahn's_algorithm).
    ///
    /// Repeatedly removes the vertices without incoming edges. Among those
    /// available at the same time, the ones removed earlier are served first,
    /// so the order tends to be "layered".
    #[default]
    Kahn,

    /// Reverse postorder of the [depth-first
    /// search](https://en.wikipedia.org/wiki/Topological_sorting#Depth-first_search).
    ///
    /// # Use cases
    ///
    /// * When the order should keep chains of dependent vertices together.
    Dfs,
}
