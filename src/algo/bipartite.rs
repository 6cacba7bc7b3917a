//! Check whether an undirected graph is [bipartite], that is, whether its
//! vertices can be colored by two colors so that no edge connects two
//! vertices of the same color.
//!
//! A graph is bipartite if and only if it has no cycle of odd length. If it
//! is not bipartite, such a cycle is provided as a certificate.
//!
//! [bipartite]: https://en.wikipedia.org/wiki/Bipartite_graph
//!
//! # Examples
//!
//! ```
//! use keygraph::{
//!     algo::bipartite::{Bipartite, Color, Error},
//!     core::Vertex,
//!     storage::UndirectedGraph,
//! };
//!
//! let mut graph = UndirectedGraph::from_edge_keys([("a", "b"), ("b", "c"), ("c", "d")]);
//!
//! let bipartite = Bipartite::new(&graph);
//! assert!(bipartite.is_bipartite());
//! assert_eq!(bipartite.color("a"), Ok(Some(Color::White)));
//! assert_eq!(bipartite.color("b"), Ok(Some(Color::Black)));
//!
//! graph.add_edge(Vertex::from_key("c"), Vertex::from_key("a"));
//!
//! let bipartite = Bipartite::new(&graph);
//! assert!(!bipartite.is_bipartite());
//! assert_eq!(bipartite.odd_cycle().len(), 3);
//! assert_eq!(bipartite.color("a"), Err(Error::NotBipartite));
//! ```

use std::ops::Not;

use thiserror::Error;

use crate::{
    algo::to_vertices,
    core::{KeyIndex, Vertex, VertexId, VertexSet},
    storage::UndirectedGraph,
    visit::{raw::RawEvent, Bfs, VisitSet},
};

/// One of the two sides of a bipartite graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    /// The color of the first vertex of every connected component.
    White,
    /// The other color.
    Black,
}

impl Not for Color {
    type Output = Color;

    fn not(self) -> Self::Output {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }
}

/// The error encountered when querying a [`Bipartite`] analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// The graph is not bipartite, so there is no valid coloring.
    #[error("graph is not bipartite")]
    NotBipartite,
}

/// Two-coloring of an undirected graph, or an odd cycle.
///
/// Computed by a breadth-first search from every vertex not yet colored, in
/// insertion order. The search stops at the first edge connecting two
/// vertices of the same color.
///
/// See [module](self) documentation for more details and example.
#[derive(Debug, Clone)]
pub struct Bipartite<V> {
    index: KeyIndex,
    colors: Vec<Color>,
    odd_cycle: Vec<Vertex<V>>,
}

impl<V> Bipartite<V> {
    /// Runs the analysis on the graph.
    pub fn new(graph: &UndirectedGraph<V>) -> Self {
        tracing::debug!(
            vertices = graph.vertex_count(),
            edges = graph.edge_count(),
            "checking bipartiteness"
        );

        let vertex_count = graph.vertex_count();

        let mut colors = vec![Color::White; vertex_count];
        let mut edge_to = vec![None; vertex_count];
        let mut conflict = None;
        let mut bfs = Bfs::new(graph);

        for root in graph.vertex_ids() {
            if conflict.is_some() {
                break;
            }

            if bfs.visited().is_visited(&root) {
                continue;
            }

            colors[root.as_usize()] = Color::White;
            let mut visitor = bfs.start(root);

            loop {
                let next = visitor.visit_next_with(graph, |event| match event {
                    RawEvent::Push { vertex, from } => {
                        colors[vertex.as_usize()] = !colors[from.as_usize()];
                        edge_to[vertex.as_usize()] = Some(from);
                    }
                    RawEvent::Skip { vertex, from } => {
                        if conflict.is_none() && colors[vertex.as_usize()] == colors[from.as_usize()]
                        {
                            conflict = Some((from, vertex));
                        }
                    }
                    RawEvent::Popped { .. } => {}
                });

                if next.is_none() || conflict.is_some() {
                    break;
                }
            }
        }

        let odd_cycle = conflict
            .and_then(|(v, w)| odd_cycle(&edge_to, v, w))
            .unwrap_or_default();

        tracing::debug!(odd_cycle = odd_cycle.len(), "bipartiteness check finished");

        Self {
            index: graph.key_index().clone(),
            colors,
            odd_cycle: to_vertices(graph, &odd_cycle),
        }
    }

    /// Returns `true` if the graph is bipartite.
    pub fn is_bipartite(&self) -> bool {
        self.odd_cycle.is_empty()
    }

    /// Returns the color of the vertex, `None` for an unknown vertex.
    ///
    /// Vertices of the same color are never adjacent.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotBipartite`] if the graph is not bipartite.
    pub fn color(&self, v: impl AsRef<str>) -> Result<Option<Color>, Error> {
        if !self.is_bipartite() {
            return Err(Error::NotBipartite);
        }

        Ok(self
            .index
            .get(v.as_ref())
            .map(|id| self.colors[id.as_usize()]))
    }

    /// Returns the distinct vertices of a cycle of odd length, empty if the
    /// graph is bipartite.
    ///
    /// Every two consecutive vertices are adjacent, and so are the last and
    /// the first one. A self-loop is a cycle of length one.
    pub fn odd_cycle(&self) -> &[Vertex<V>] {
        &self.odd_cycle
    }
}

// The endpoints of a conflicting edge found by breadth-first search have the
// same distance from the root, so walking up the tree from both of them
// reaches their lowest common ancestor at the same time.
fn odd_cycle(edge_to: &[Option<VertexId>], v: VertexId, w: VertexId) -> Option<Vec<VertexId>> {
    let mut v_side = Vec::new();
    let mut w_side = Vec::new();
    let (mut x, mut y) = (v, w);

    while x != y {
        v_side.push(x);
        w_side.push(y);
        x = edge_to[x.as_usize()]?;
        y = edge_to[y.as_usize()]?;
    }

    let mut cycle = w_side;
    cycle.push(x);
    cycle.extend(v_side.into_iter().rev());

    Some(cycle)
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use proptest::prelude::*;

    use crate::infra::{
        proptest::undirected_graph,
        testing::{keys, BIPARTITE, NON_BIPARTITE, TINY_CG},
    };

    use super::*;

    fn assert_odd_cycle<V>(graph: &UndirectedGraph<V>, cycle: &[Vertex<V>]) {
        assert_eq!(cycle.len() % 2, 1, "cycle is not odd");

        let adjacent = |v: &Vertex<V>, w: &Vertex<V>| graph.adjacent(v).any(|u| u == w);

        for pair in cycle.windows(2) {
            assert!(adjacent(&pair[0], &pair[1]));
        }

        if let (Some(first), Some(last)) = (cycle.first(), cycle.last()) {
            assert!(adjacent(last, first), "cycle is not closed");
        }
    }

    #[test]
    fn bipartite() {
        let graph = UndirectedGraph::from_edge_keys(BIPARTITE);
        let bipartite = Bipartite::new(&graph);

        assert!(bipartite.is_bipartite());
        assert!(bipartite.odd_cycle().is_empty());

        for v in ["0", "1", "2"] {
            assert_eq!(bipartite.color(v), Ok(Some(Color::White)));
        }
        for v in ["3", "4", "5"] {
            assert_eq!(bipartite.color(v), Ok(Some(Color::Black)));
        }

        for (v, w) in graph.edges() {
            assert_ne!(bipartite.color(v), bipartite.color(w));
        }
    }

    #[test]
    fn non_bipartite() {
        let graph = UndirectedGraph::from_edge_keys(NON_BIPARTITE);
        let bipartite = Bipartite::new(&graph);

        assert!(!bipartite.is_bipartite());
        assert_eq!(keys(bipartite.odd_cycle()), vec!["6", "0", "5"]);
        assert_odd_cycle(&graph, bipartite.odd_cycle());
        assert_matches!(bipartite.color("0"), Err(Error::NotBipartite));
        assert_matches!(bipartite.color("13"), Err(Error::NotBipartite));
    }

    #[test]
    fn tiny_cg() {
        let graph = UndirectedGraph::from_edge_keys(TINY_CG);
        let bipartite = Bipartite::new(&graph);

        assert_eq!(keys(bipartite.odd_cycle()), vec!["2", "0", "1"]);
        assert_odd_cycle(&graph, bipartite.odd_cycle());
    }

    #[test]
    fn triangle() {
        let graph = UndirectedGraph::from_edge_keys([("a", "b"), ("b", "c"), ("c", "a")]);
        let bipartite = Bipartite::new(&graph);

        assert_eq!(keys(bipartite.odd_cycle()), vec!["c", "a", "b"]);
    }

    #[test]
    fn self_loop() {
        let graph = UndirectedGraph::from_edge_keys([("a", "b"), ("b", "b")]);
        let bipartite = Bipartite::new(&graph);

        assert_eq!(keys(bipartite.odd_cycle()), vec!["b"]);
    }

    #[test]
    fn components_start_white() {
        let graph = UndirectedGraph::from_edge_keys([("a", "b"), ("c", "d"), ("e", "d")]);
        let bipartite = Bipartite::new(&graph);

        assert_eq!(bipartite.color("a"), Ok(Some(Color::White)));
        assert_eq!(bipartite.color("c"), Ok(Some(Color::White)));
        assert_eq!(bipartite.color("d"), Ok(Some(Color::Black)));
        assert_eq!(bipartite.color("e"), Ok(Some(Color::White)));
        assert_matches!(bipartite.color("x"), Ok(None));
    }

    #[test]
    fn parallel_edges_are_fine() {
        let graph = UndirectedGraph::from_edge_keys([("a", "b"), ("a", "b")]);

        assert!(Bipartite::new(&graph).is_bipartite());
    }

    #[test]
    fn error_message() {
        assert_eq!(Error::NotBipartite.to_string(), "graph is not bipartite");
    }

    proptest! {
        #[test]
        #[ignore = "run property-based tests with `cargo test proptest_ -- --ignored`"]
        fn proptest_coloring_or_odd_cycle(graph in undirected_graph(16)) {
            let bipartite = Bipartite::new(&graph);

            if bipartite.is_bipartite() {
                for (v, w) in graph.edges() {
                    prop_assert_ne!(bipartite.color(v), bipartite.color(w));
                }
            } else {
                assert_odd_cycle(&graph, bipartite.odd_cycle());
            }
        }
    }
}
