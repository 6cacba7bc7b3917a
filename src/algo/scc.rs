//! Find [strongly connected components] of a directed graph.
//!
//! Two vertices are strongly connected if each is reachable from the other.
//! This is an equivalence relation, and its classes are the components. All
//! algorithms induce the same partition, but may number the components
//! differently.
//!
//! See available parameters [here](StronglyConnectedComponentsBuilder#implementations).
//!
//! [strongly connected components]: https://en.wikipedia.org/wiki/Strongly_connected_component
//!
//! # Examples
//!
//! ```
//! use keygraph::{algo::StronglyConnectedComponents, storage::Digraph};
//!
//! let graph = Digraph::from_edge_keys([
//!     ("a", "b"),
//!     ("b", "a"),
//!     ("b", "c"),
//!     ("c", "d"),
//!     ("d", "c"),
//! ]);
//!
//! let scc = StronglyConnectedComponents::on(&graph).run();
//!
//! assert_eq!(scc.count(), 2);
//! assert!(scc.strongly_connected("a", "b"));
//! assert!(!scc.strongly_connected("b", "c"));
//! ```

use crate::{
    core::{marker::Directed, KeyIndex, Vertex, VertexSet},
    storage::AdjList,
};

mod builder;
mod gabow;
mod kosaraju;
mod tarjan;

pub use builder::StronglyConnectedComponentsBuilder;

pub(crate) struct Components {
    // Component number for every vertex id.
    pub ids: Vec<usize>,
    pub count: usize,
}

/// Strongly connected components of a directed graph.
///
/// See [module](self) documentation for more details and example.
#[derive(Debug, Clone)]
pub struct StronglyConnectedComponents<V> {
    index: KeyIndex,
    vertices: Vec<Vertex<V>>,
    ids: Vec<usize>,
    count: usize,
}

impl<V> StronglyConnectedComponents<V> {
    fn new(graph: &AdjList<V, Directed>, components: Components) -> Self {
        Self {
            index: graph.key_index().clone(),
            vertices: graph.vertices().cloned().collect(),
            ids: components.ids,
            count: components.count,
        }
    }

    /// Returns the number of components.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Returns the number of the component containing the vertex, in range
    /// `0..count()`, or `None` for an unknown vertex.
    pub fn id(&self, v: impl AsRef<str>) -> Option<usize> {
        self.index.get(v.as_ref()).map(|id| self.ids[id.as_usize()])
    }

    /// Returns `true` if the vertices are in the same component.
    ///
    /// Unknown vertices are not connected to anything.
    pub fn strongly_connected(&self, v: impl AsRef<str>, w: impl AsRef<str>) -> bool {
        match (self.id(v), self.id(w)) {
            (Some(v), Some(w)) => v == w,
            _ => false,
        }
    }

    /// Returns the vertices of every component, indexed by the component
    /// number. Vertices of a component are in insertion order.
    pub fn components(&self) -> Vec<Vec<Vertex<V>>> {
        let mut components = vec![Vec::new(); self.count];

        for (v, &id) in self.vertices.iter().zip(self.ids.iter()) {
            components[id].push(v.clone());
        }

        components
    }
}

/// Algorithm for [`StronglyConnectedComponents`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[non_exhaustive]
pub enum Algo {
    /// [Tarjan's
    /// algorithm](https://en.wikipedia.org/wiki/Tarjan%27s_strongly_connected_components_algorithm).
    ///
    /// A single depth-first search tracking the lowest preorder number
    /// reachable from every vertex. Components are numbered in the order in
    /// which their roots finish, which is a reverse topological order of the
    /// condensation.
    #[default]
    Tarjan,

    /// [Kosaraju-Sharir
    /// algorithm](https://en.wikipedia.org/wiki/Kosaraju%27s_algorithm).
    ///
    /// Two passes: postorder of the reversed graph, then plain searches of
    /// the original graph in reverse of that order. Components are numbered
    /// in a reverse topological order of the condensation.
    ///
    /// # Use cases
    ///
    /// * When the simplicity of the implementation matters more than the
    ///   cost of building the reversed graph.
    KosarajuSharir,

    /// [Path-based strong component
    /// algorithm](https://en.wikipedia.org/wiki/Path-based_strong_component_algorithm)
    /// by Gabow.
    ///
    /// A single depth-first search keeping an explicit stack of candidate
    /// roots instead of lowlink numbers.
    Gabow,
}
