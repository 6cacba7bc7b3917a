//! Preorder, postorder and reverse postorder of a [depth-first
//! search](https://en.wikipedia.org/wiki/Depth-first_search#Vertex_orderings)
//! of a whole directed graph.
//!
//! The search starts a new tree from every vertex not yet discovered, in
//! insertion order, and examines neighbors in adjacency order.
//!
//! # Examples
//!
//! ```
//! use keygraph::{algo::DepthFirstOrder, storage::Digraph};
//!
//! let graph = Digraph::from_edge_keys([("shirt", "tie"), ("tie", "jacket"), ("pants", "jacket")]);
//!
//! let order = DepthFirstOrder::new(&graph);
//!
//! let post = order.post().iter().map(|v| v.key()).collect::<Vec<_>>();
//! assert_eq!(post, vec!["jacket", "tie", "shirt", "pants"]);
//!
//! let dressing = order.reverse_post().map(|v| v.key()).collect::<Vec<_>>();
//! assert_eq!(dressing, vec!["pants", "shirt", "tie", "jacket"]);
//! ```

use crate::{
    algo::to_vertices,
    core::{marker::Directed, KeyIndex, Neighbors, Vertex, VertexId, VertexSet},
    storage::AdjList,
    visit::{DfsEvent, DfsEvents, Visitor},
};

/// Vertex orderings of a depth-first search.
///
/// See [module](self) documentation for more details and example.
#[derive(Debug, Clone)]
pub struct DepthFirstOrder<V> {
    index: KeyIndex,
    pre: Vec<Vertex<V>>,
    post: Vec<Vertex<V>>,
    pre_numbers: Vec<Option<usize>>,
    post_numbers: Vec<Option<usize>>,
}

impl<V> DepthFirstOrder<V> {
    /// Runs the search on the whole graph.
    pub fn new(graph: &AdjList<V, Directed>) -> Self {
        tracing::debug!(
            vertices = graph.vertex_count(),
            edges = graph.edge_count(),
            "computing depth-first orders"
        );

        let orders = Orders::traverse(graph);

        let mut pre_numbers = vec![None; graph.vertex_count()];
        for (number, v) in orders.pre.iter().enumerate() {
            pre_numbers[v.as_usize()] = Some(number);
        }

        let mut post_numbers = vec![None; graph.vertex_count()];
        for (number, v) in orders.post.iter().enumerate() {
            post_numbers[v.as_usize()] = Some(number);
        }

        Self {
            index: graph.key_index().clone(),
            pre: to_vertices(graph, &orders.pre),
            post: to_vertices(graph, &orders.post),
            pre_numbers,
            post_numbers,
        }
    }

    /// Returns the position of the vertex in the preorder, `None` for an
    /// unknown vertex.
    pub fn preorder_number(&self, v: impl AsRef<str>) -> Option<usize> {
        self.index
            .get(v.as_ref())
            .and_then(|id| self.pre_numbers[id.as_usize()])
    }

    /// Returns the position of the vertex in the postorder, `None` for an
    /// unknown vertex.
    pub fn postorder_number(&self, v: impl AsRef<str>) -> Option<usize> {
        self.index
            .get(v.as_ref())
            .and_then(|id| self.post_numbers[id.as_usize()])
    }

    /// Vertices in the order of discovery.
    pub fn pre(&self) -> &[Vertex<V>] {
        &self.pre
    }

    /// Vertices in the order in which the search finished them.
    pub fn post(&self) -> &[Vertex<V>] {
        &self.post
    }

    /// Vertices in reverse postorder, which is a topological order if the
    /// graph is acyclic.
    pub fn reverse_post(&self) -> impl DoubleEndedIterator<Item = &Vertex<V>> + ExactSizeIterator {
        self.post.iter().rev()
    }
}

pub(crate) struct Orders {
    pub pre: Vec<VertexId>,
    pub post: Vec<VertexId>,
}

impl Orders {
    pub fn traverse<G>(graph: &G) -> Self
    where
        G: Neighbors + VertexSet,
    {
        let mut pre = Vec::with_capacity(graph.vertex_count());
        let mut post = Vec::with_capacity(graph.vertex_count());

        for event in DfsEvents::new(graph).start_all(graph).into_iter(graph) {
            match event {
                DfsEvent::Open { vertex, .. } => pre.push(vertex),
                DfsEvent::Close { vertex, .. } => post.push(vertex),
                _ => {}
            }
        }

        Self { pre, post }
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::{
        infra::{
            proptest::digraph,
            testing::{keys, TINY_DAG},
        },
        storage::Digraph,
    };

    use super::*;

    #[test]
    fn tiny_dag() {
        let graph = Digraph::from_edge_keys(TINY_DAG);
        let order = DepthFirstOrder::new(&graph);

        assert_eq!(
            keys(order.pre()),
            vec!["2", "3", "5", "4", "0", "6", "9", "12", "10", "11", "1", "8", "7"]
        );
        assert_eq!(
            keys(order.post()),
            vec!["4", "5", "3", "12", "10", "11", "9", "6", "1", "0", "2", "7", "8"]
        );
        assert_eq!(
            order.reverse_post().map(|v| v.key()).collect::<Vec<_>>(),
            vec!["8", "7", "2", "0", "1", "6", "9", "11", "10", "12", "3", "5", "4"]
        );
    }

    #[test]
    fn numbers() {
        let graph = Digraph::from_edge_keys(TINY_DAG);
        let order = DepthFirstOrder::new(&graph);

        assert_eq!(order.preorder_number("2"), Some(0));
        assert_eq!(order.preorder_number("8"), Some(11));
        assert_eq!(order.postorder_number("4"), Some(0));
        assert_eq!(order.postorder_number("8"), Some(12));
        assert_eq!(order.preorder_number("13"), None);
        assert_eq!(order.postorder_number("13"), None);
    }

    #[test]
    fn cycle_and_self_loop() {
        let graph = Digraph::from_edge_keys([("a", "b"), ("b", "a"), ("b", "b"), ("c", "a")]);
        let order = DepthFirstOrder::new(&graph);

        assert_eq!(keys(order.pre()), vec!["a", "b", "c"]);
        assert_eq!(keys(order.post()), vec!["b", "a", "c"]);
    }

    proptest! {
        #[test]
        #[ignore = "run property-based tests with `cargo test proptest_ -- --ignored`"]
        fn proptest_orders_are_permutations(graph in digraph(16)) {
            let order = DepthFirstOrder::new(&graph);

            prop_assert_eq!(order.pre().len(), graph.vertex_count());
            prop_assert_eq!(order.post().len(), graph.vertex_count());

            for v in graph.vertices() {
                let pre = order.preorder_number(v).unwrap();
                let post = order.postorder_number(v).unwrap();
                prop_assert_eq!(&order.pre()[pre], v);
                prop_assert_eq!(&order.post()[post], v);
            }
        }
    }
}
