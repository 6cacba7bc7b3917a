//! Implementations of graph traversal methods.
//!
//! All traversal implementations in this module are **iterative**, that is,
//! they don't use recursion. This means that
//!
//! * &#128077; visitor is lazy and can be stopped without tricks,
//! * &#128077; visitor state is independent on the graph itself,
//! * &#128077; traversal is not limited by the size of the program stack,
//! * &#128078; there is some extra cost for [depth-first
//!   events](DfsEvents) that must respect the recursive traversal order.
//!
//! Neighbors of a vertex are always discovered in the order in which the
//! connecting edges were added to the graph, so every traversal is
//! deterministic for a given graph.

pub mod bfs;
pub mod dfs;

pub(crate) mod raw;
mod visit_set;

#[doc(inline)]
pub use self::{
    bfs::Bfs,
    dfs::{Dfs, DfsEvents},
    visit_set::{TypedBitSet, VisitSet},
};

use crate::{
    core::{id::VertexIds, marker::EdgeType, Vertex, VertexId, VertexSet},
    storage::AdjList,
};

/// Trait for a specific graph traversal approach.
#[doc(alias = "Walker")]
pub trait Visitor<G> {
    /// The type of the elements being visited.
    type Item;

    /// Advances the visitor and returns the next visited element in given
    /// graph.
    ///
    /// The difference from the [`Iterator::next`] is that the visitor doesn't
    /// hold a reference to the graph, so it can be passed around without
    /// lifetime problems.
    ///
    /// # Examples
    ///
    /// ```
    /// use keygraph::{
    ///     storage::Digraph,
    ///     visit::{DfsEvent, DfsEvents, Visitor},
    /// };
    ///
    /// let graph = Digraph::from_edge_keys([("a", "b"), ("b", "c"), ("c", "a")]);
    ///
    /// let root = graph.vertex_id("a").unwrap();
    ///
    /// let mut dfs = DfsEvents::new(&graph);
    /// let mut visitor = dfs.start(root);
    ///
    /// let mut back_edges = 0;
    /// while let Some(event) = visitor.visit_next(&graph) {
    ///     if let DfsEvent::BackEdge { .. } = event {
    ///         back_edges += 1;
    ///     }
    /// }
    ///
    /// assert_eq!(back_edges, 1);
    /// ```
    fn visit_next(&mut self, graph: &G) -> Option<Self::Item>;

    /// Returns an [iterator](Iterator) that uses the visitor to iterate over
    /// the elements in given graph.
    fn iter<'a>(&'a mut self, graph: &'a G) -> Iter<'a, Self, G>
    where
        Self: Sized,
    {
        Iter {
            visitor: self,
            graph,
        }
    }

    /// Converts the visitor into an [iterator](Iterator) to visit the elements
    /// in given graph.
    fn into_iter(self, graph: &G) -> IntoIter<'_, Self, G>
    where
        Self: Sized,
    {
        IntoIter {
            visitor: self,
            graph,
        }
    }
}

/// Visitor iterator returned from [`Visitor::iter`].
pub struct Iter<'a, V, G> {
    visitor: &'a mut V,
    graph: &'a G,
}

impl<'a, V, G> Iterator for Iter<'a, V, G>
where
    V: Visitor<G>,
{
    type Item = V::Item;

    fn next(&mut self) -> Option<Self::Item> {
        self.visitor.visit_next(self.graph)
    }
}

/// Visitor iterator returned from [`Visitor::into_iter`].
pub struct IntoIter<'a, V, G> {
    visitor: V,
    graph: &'a G,
}

impl<'a, V, G> Iterator for IntoIter<'a, V, G>
where
    V: Visitor<G>,
{
    type Item = V::Item;

    fn next(&mut self) -> Option<Self::Item> {
        self.visitor.visit_next(self.graph)
    }
}

/// A collection of starting vertices for a graph traversal.
///
/// This trait is implemented for any [`Iterator`] of vertex ids.
pub trait VisitRoots {
    /// Returns next id to start the traversal from.
    ///
    /// Note that the returned id might have already been visited. It is the
    /// responsibility of the visitor to ignore such elements.
    fn next_root(&mut self) -> Option<VertexId>;

    /// Returns `true` if the collection can determine that all remaining roots
    /// have already been visited based on the currently visited set.
    ///
    /// By default, `false` is returned which effectively delegates the
    /// indication of being done for [`VisitRoots::next_root`] by returning
    /// `None`.
    fn is_done(&mut self, _visited: &impl VisitSet<VertexId>) -> bool {
        false
    }
}

impl<T> VisitRoots for T
where
    T: Iterator<Item = VertexId>,
{
    fn next_root(&mut self) -> Option<VertexId> {
        self.next()
    }
}

/// A [`VisitRoots`] collection for visiting all vertices in a graph, in
/// insertion order.
pub struct VisitAll {
    ids: VertexIds,
    count: usize,
}

impl VisitAll {
    /// Creates the collection from the given graph.
    pub fn new<G: VertexSet>(graph: &G) -> Self {
        Self {
            ids: graph.vertex_ids(),
            count: graph.vertex_count(),
        }
    }
}

impl VisitRoots for VisitAll {
    fn next_root(&mut self) -> Option<VertexId> {
        self.ids.next()
    }

    fn is_done(&mut self, visited: &impl VisitSet<VertexId>) -> bool {
        visited.visited_count() == self.count
    }
}

/// Strictly monotonically increasing numbering of graph traversal events.
///
/// This is useful to some algorithms that base their decision on the event time
/// comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Time(pub usize);

/// Depth-first search visitor event.
///
/// Events are reported in exactly the order in which a recursive depth-first
/// search examining neighbors in adjacency order would encounter them.
///
/// Use [`DfsEvents`] visitor to traverse a graph by reporting DFS events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DfsEvent {
    /// A new vertex was discovered.
    Open {
        /// Discovered vertex.
        vertex: VertexId,

        /// Discovering time.
        time: Time,
    },

    /// An edge of the tree formed by the traversal.
    ///
    /// Always followed by the [`Open`](DfsEvent::Open) event of its target.
    TreeEdge {
        /// Source endpoint of the edge.
        from: VertexId,

        /// Target endpoint of the edge.
        to: VertexId,
    },

    /// An edge to an already [discovered](DfsEvent::Open) but not yet
    /// [closed](DfsEvent::Close) vertex, that is, to a vertex on the current
    /// traversal path.
    ///
    /// Presence of a back edge indicates a cycle in the graph. A self-loop is
    /// a back edge.
    BackEdge {
        /// Source endpoint of the edge.
        from: VertexId,

        /// Target (open) endpoint of the edge.
        to: VertexId,
    },

    /// An edge to an already [closed](DfsEvent::Close) vertex.
    ///
    /// Cross edge is an edge between vertices in different "branches" of the
    /// traversal tree. Forward edge is an edge between vertices in the same
    /// "branch" of the traversal tree.
    CrossForwardEdge {
        /// Source endpoint of the edge.
        from: VertexId,

        /// Target (closed) endpoint of the edge.
        to: VertexId,
    },

    /// All edges from the vertex have been reported.
    Close {
        /// Closed vertex.
        vertex: VertexId,

        /// Closing time.
        time: Time,
    },
}

/// Worklist discipline of [`search`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Traversal {
    /// First-in first-out worklist.
    #[default]
    Bfs,
    /// Last-in first-out worklist.
    Dfs,
}

/// Visits every vertex reachable from the source exactly once.
///
/// The source is visited first. Then vertices are pulled from a worklist
/// ([`Traversal::Bfs`] uses a queue, [`Traversal::Dfs`] a stack) and visited,
/// while their not yet discovered neighbors are pushed to it. Nothing is
/// visited if the source is not in the graph.
///
/// # Examples
///
/// ```
/// use keygraph::{
///     storage::Digraph,
///     visit::{search, Traversal},
/// };
///
/// let graph = Digraph::from_edge_keys([("a", "b"), ("a", "c"), ("b", "d"), ("x", "a")]);
///
/// let mut visited = Vec::new();
/// search(&graph, "a", Traversal::Bfs, |v| visited.push(v.key().to_string()));
///
/// assert_eq!(visited, vec!["a", "b", "c", "d"]);
/// ```
pub fn search<V, Ty, F>(graph: &AdjList<V, Ty>, source: impl AsRef<str>, traversal: Traversal, mut visit: F)
where
    Ty: EdgeType,
    F: FnMut(&Vertex<V>),
{
    let Some(root) = graph.vertex_id(source.as_ref()) else {
        tracing::trace!(source = source.as_ref(), "search source not in graph");
        return;
    };

    match traversal {
        Traversal::Bfs => Bfs::new(graph)
            .start(root)
            .into_iter(graph)
            .for_each(|id| visit(graph.vertex_at(id))),
        Traversal::Dfs => Dfs::new(graph)
            .start(root)
            .into_iter(graph)
            .for_each(|id| visit(graph.vertex_at(id))),
    }
}

#[cfg(test)]
mod tests {
    use crate::storage::{Digraph, UndirectedGraph};

    use super::*;

    macro_rules! dfs_event {
        (open, $v:expr, $t:expr) => {
            DfsEvent::Open {
                vertex: VertexId::from($v),
                time: Time($t),
            }
        };
        (tree, ($u:expr, $v:expr)) => {
            DfsEvent::TreeEdge {
                from: VertexId::from($u),
                to: VertexId::from($v),
            }
        };
        (back, ($u:expr, $v:expr)) => {
            DfsEvent::BackEdge {
                from: VertexId::from($u),
                to: VertexId::from($v),
            }
        };
        (cross_forward, ($u:expr, $v:expr)) => {
            DfsEvent::CrossForwardEdge {
                from: VertexId::from($u),
                to: VertexId::from($v),
            }
        };
        (close, $v:expr, $t:expr) => {
            DfsEvent::Close {
                vertex: VertexId::from($v),
                time: Time($t),
            }
        };
    }

    fn ids(raw: &[usize]) -> Vec<VertexId> {
        raw.iter().copied().map(VertexId::from).collect()
    }

    fn connected() -> UndirectedGraph<String> {
        UndirectedGraph::from_edge_keys([
            ("0", "1"),
            ("1", "2"),
            ("1", "3"),
            ("1", "4"),
            ("2", "5"),
            ("5", "4"),
        ])
    }

    #[test]
    fn bfs_connected() {
        let graph = connected();

        let vertices = Bfs::new(&graph)
            .start(VertexId::from(0))
            .iter(&graph)
            .collect::<Vec<_>>();

        assert_eq!(vertices, ids(&[0, 1, 2, 3, 4, 5]));
    }

    #[test]
    fn dfs_connected() {
        let graph = connected();

        let vertices = Dfs::new(&graph)
            .start(VertexId::from(0))
            .iter(&graph)
            .collect::<Vec<_>>();

        // Marked on push, so the last pushed neighbor is expanded first.
        assert_eq!(vertices, ids(&[0, 1, 4, 5, 3, 2]));
    }

    #[test]
    fn bfs_multi_seeded() {
        let graph = Digraph::from_edge_keys([("a", "b"), ("c", "d"), ("b", "d")]);

        let vertices = Bfs::new(&graph)
            .start_multi(ids(&[0, 2]))
            .iter(&graph)
            .collect::<Vec<_>>();

        // Ids: a = 0, b = 1, c = 2, d = 3.
        assert_eq!(vertices, ids(&[0, 2, 1, 3]));
    }

    #[test]
    fn dfs_events_order() {
        // 0 -> 1, 1 -> 2, 2 -> 0, 0 -> 2, 3 -> 2
        let graph =
            Digraph::from_edge_keys([("0", "1"), ("1", "2"), ("2", "0"), ("0", "2"), ("3", "2")]);

        let events = DfsEvents::new(&graph)
            .start_all(&graph)
            .iter(&graph)
            .collect::<Vec<_>>();

        assert_eq!(
            events,
            vec![
                dfs_event!(open, 0, 0),
                dfs_event!(tree, (0, 1)),
                dfs_event!(open, 1, 1),
                dfs_event!(tree, (1, 2)),
                dfs_event!(open, 2, 2),
                dfs_event!(back, (2, 0)),
                dfs_event!(close, 2, 3),
                dfs_event!(close, 1, 4),
                dfs_event!(cross_forward, (0, 2)),
                dfs_event!(close, 0, 5),
                dfs_event!(open, 3, 6),
                dfs_event!(cross_forward, (3, 2)),
                dfs_event!(close, 3, 7),
            ]
        );
    }

    #[test]
    fn dfs_events_self_loop() {
        let graph = Digraph::from_edge_keys([("a", "a")]);

        let events = DfsEvents::new(&graph)
            .start(VertexId::from(0))
            .iter(&graph)
            .collect::<Vec<_>>();

        assert_eq!(
            events,
            vec![
                dfs_event!(open, 0, 0),
                dfs_event!(back, (0, 0)),
                dfs_event!(close, 0, 1),
            ]
        );
    }

    #[test]
    fn search_orders() {
        let graph = Digraph::from_edge_keys([("a", "b"), ("a", "c"), ("b", "d"), ("c", "d")]);

        let mut bfs = Vec::new();
        search(&graph, "a", Traversal::Bfs, |v| bfs.push(v.key().to_string()));
        assert_eq!(bfs, vec!["a", "b", "c", "d"]);

        let mut dfs = Vec::new();
        search(&graph, "a", Traversal::Dfs, |v| dfs.push(v.key().to_string()));
        assert_eq!(dfs, vec!["a", "c", "d", "b"]);
    }

    #[test]
    fn search_unknown_source() {
        let graph = Digraph::from_edge_keys([("a", "b")]);

        let mut count = 0;
        search(&graph, "x", Traversal::Dfs, |_| count += 1);
        assert_eq!(count, 0);
    }
}
