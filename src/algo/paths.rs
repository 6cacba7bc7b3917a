//! Find paths from one or more source vertices to all vertices reachable from
//! them in a directed graph.
//!
//! See available parameters [here](DirectedPathsBuilder#implementations).
//!
//! # Examples
//!
//! ```
//! use keygraph::{algo::DirectedPaths, storage::Digraph};
//!
//! let graph = Digraph::from_edge_keys([
//!     ("home", "station"),
//!     ("station", "airport"),
//!     ("home", "bus stop"),
//!     ("bus stop", "station"),
//! ]);
//!
//! let paths = DirectedPaths::on(&graph).bfs().run("home");
//!
//! let path = paths.path_to("airport");
//! let route = path
//!     .iter()
//!     .map(|v| v.key())
//!     .collect::<Vec<_>>();
//!
//! assert_eq!(route, vec!["home", "station", "airport"]);
//! assert!(!paths.has_path_to("nowhere"));
//! ```

use crate::{
    core::{KeyIndex, Vertex, VertexId},
    visit::{TypedBitSet, VisitSet},
};

mod builder;

pub use builder::DirectedPathsBuilder;

/// Paths from the sources to every reachable vertex.
///
/// See [module](self) documentation for more details and example.
#[derive(Debug, Clone)]
pub struct DirectedPaths<V> {
    index: KeyIndex,
    vertices: Vec<Vertex<V>>,
    marked: TypedBitSet<VertexId>,
    // Predecessor on the discovered path, `None` for sources and unreached
    // vertices.
    edge_to: Vec<Option<VertexId>>,
}

impl<V> DirectedPaths<V> {
    /// Returns `true` if there is a path from a source to the vertex.
    ///
    /// Every source has a (trivial) path to itself.
    pub fn has_path_to(&self, v: impl AsRef<str>) -> bool {
        self.index
            .get(v.as_ref())
            .is_some_and(|id| self.marked.is_visited(&id))
    }

    /// Returns the vertices of the path from a source to the vertex, starting
    /// with the source and ending with the vertex.
    ///
    /// Returns an empty sequence if there is no such path. With
    /// [breadth-first search](Algo::Bfs), the path has the fewest edges
    /// among all paths from any source.
    pub fn path_to(&self, v: impl AsRef<str>) -> Vec<Vertex<V>> {
        let Some(id) = self.index.get(v.as_ref()) else {
            return Vec::new();
        };

        if !self.marked.is_visited(&id) {
            return Vec::new();
        }

        let mut path = vec![self.vertices[id.as_usize()].clone()];
        let mut current = id;

        while let Some(prev) = self.edge_to[current.as_usize()] {
            path.push(self.vertices[prev.as_usize()].clone());
            current = prev;
        }

        path.reverse();
        path
    }
}

/// Algorithm for [`DirectedPaths`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[non_exhaustive]
pub enum Algo {
    /// [Breadth-first
    /// search](https://en.wikipedia.org/wiki/Breadth-first_search).
    ///
    /// Discovers vertices in the order of their distance from the sources, so
    /// the reported paths have the fewest possible edges.
    ///
    /// # Use cases
    ///
    /// * Shortest routes in unweighted graphs.
    #[default]
    Bfs,

    /// A stack-based variation on the [depth-first
    /// search](https://en.wikipedia.org/wiki/Depth-first_search).
    ///
    /// Reports some path to every reachable vertex, not necessarily the
    /// shortest.
    ///
    /// # Use cases
    ///
    /// * Reachability witnesses when the path length does not matter.
    Dfs,
}
