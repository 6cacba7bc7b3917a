//! Find an [Eulerian cycle or path] in a directed graph, that is, a walk that
//! uses every edge exactly once.
//!
//! Both analyses use the nonrecursive version of Hierholzer's algorithm with
//! one adjacency cursor per vertex. Isolated vertices do not matter.
//!
//! [Eulerian cycle or path]: https://en.wikipedia.org/wiki/Eulerian_path
//!
//! # Examples
//!
//! ```
//! use keygraph::{
//!     algo::{DirectedEulerianCycle, DirectedEulerianPath},
//!     storage::Digraph,
//! };
//!
//! let graph = Digraph::from_edge_keys([("a", "b"), ("b", "c"), ("c", "a"), ("c", "d")]);
//!
//! assert!(!DirectedEulerianCycle::new(&graph).has_eulerian_cycle());
//!
//! let path = DirectedEulerianPath::new(&graph);
//! let keys = path
//!     .path()
//!     .unwrap()
//!     .iter()
//!     .map(|v| v.key())
//!     .collect::<Vec<_>>();
//!
//! assert_eq!(keys, vec!["c", "a", "b", "c", "d"]);
//! ```

use crate::{
    algo::to_vertices,
    core::{marker::Directed, Neighbors, Vertex, VertexId, VertexSet},
    storage::AdjList,
};

/// Eulerian cycle of a directed graph, if it has one.
///
/// A cycle exists if the graph has at least one edge, every vertex has the
/// same indegree and outdegree, and all edges are in one weakly connected
/// component. The cycle starts and ends at the first vertex (in insertion
/// order) with an outgoing edge.
///
/// See [module](self) documentation for more details and example.
#[derive(Debug, Clone)]
pub struct DirectedEulerianCycle<V> {
    cycle: Option<Vec<Vertex<V>>>,
}

impl<V> DirectedEulerianCycle<V> {
    /// Searches the graph for an Eulerian cycle.
    pub fn new(graph: &AdjList<V, Directed>) -> Self {
        tracing::debug!(
            vertices = graph.vertex_count(),
            edges = graph.edge_count(),
            "searching eulerian cycle"
        );

        let balanced = graph
            .vertex_ids()
            .all(|v| graph.neighbors(v).len() == graph.indegree_by_id(v));

        let cycle = if graph.edge_count() > 0 && balanced {
            first_non_isolated(graph).and_then(|start| walk(graph, start))
        } else {
            None
        };

        tracing::debug!(found = cycle.is_some(), "eulerian cycle search finished");

        Self {
            cycle: cycle.map(|cycle| to_vertices(graph, &cycle)),
        }
    }

    /// Returns `true` if the graph has an Eulerian cycle.
    pub fn has_eulerian_cycle(&self) -> bool {
        self.cycle.is_some()
    }

    /// Returns the vertices of the cycle, `None` if there is none.
    ///
    /// The cycle has one more vertex than the graph has edges.
    pub fn cycle(&self) -> Option<&[Vertex<V>]> {
        self.cycle.as_deref()
    }
}

/// Eulerian path of a directed graph, if it has one.
///
/// A path exists if the graph has at least one edge, at most one vertex has
/// outdegree greater than its indegree and only by one, and all edges are
/// in one weakly connected component. The path starts at that vertex, or at
/// the first vertex with an outgoing edge if all vertices are balanced (in
/// which case it is a cycle).
///
/// See [module](self) documentation for more details and example.
#[derive(Debug, Clone)]
pub struct DirectedEulerianPath<V> {
    path: Option<Vec<Vertex<V>>>,
}

impl<V> DirectedEulerianPath<V> {
    /// Searches the graph for an Eulerian path.
    pub fn new(graph: &AdjList<V, Directed>) -> Self {
        tracing::debug!(
            vertices = graph.vertex_count(),
            edges = graph.edge_count(),
            "searching eulerian path"
        );

        let path = if graph.edge_count() > 0 {
            path_start(graph).and_then(|start| walk(graph, start))
        } else {
            None
        };

        tracing::debug!(found = path.is_some(), "eulerian path search finished");

        Self {
            path: path.map(|path| to_vertices(graph, &path)),
        }
    }

    /// Returns `true` if the graph has an Eulerian path.
    pub fn has_eulerian_path(&self) -> bool {
        self.path.is_some()
    }

    /// Returns the vertices of the path, `None` if there is none.
    ///
    /// The path has one more vertex than the graph has edges.
    pub fn path(&self) -> Option<&[Vertex<V>]> {
        self.path.as_deref()
    }
}

fn first_non_isolated<V>(graph: &AdjList<V, Directed>) -> Option<VertexId> {
    graph
        .vertex_ids()
        .find(|&v| !graph.neighbors(v).is_empty())
}

fn path_start<V>(graph: &AdjList<V, Directed>) -> Option<VertexId> {
    let mut deficit = 0;
    let mut start = first_non_isolated(graph);

    for v in graph.vertex_ids() {
        let outdegree = graph.neighbors(v).len();
        let indegree = graph.indegree_by_id(v);

        if outdegree > indegree {
            deficit += outdegree - indegree;
            start = Some(v);
        }
    }

    if deficit > 1 {
        None
    } else {
        start
    }
}

// Hierholzer's algorithm. The walk uses every edge only if the graph is
// connected (ignoring isolated vertices), which is checked by its length.
fn walk<V>(graph: &AdjList<V, Directed>, start: VertexId) -> Option<Vec<VertexId>> {
    let mut cursors = vec![0; graph.vertex_count()];
    let mut stack = vec![start];
    let mut walk = Vec::with_capacity(graph.edge_count() + 1);

    while let Some(mut v) = stack.pop() {
        while let Some(&w) = graph.neighbors(v).get(cursors[v.as_usize()]) {
            cursors[v.as_usize()] += 1;
            stack.push(v);
            v = w;
        }

        walk.push(v);
    }

    if walk.len() != graph.edge_count() + 1 {
        return None;
    }

    walk.reverse();
    Some(walk)
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::{
        infra::{
            proptest::digraph,
            testing::{create_digraph, is_closed_walk, keys},
        },
        storage::Digraph,
    };

    use super::*;

    fn assert_uses_every_edge(graph: &Digraph<String>, walk: &[Vertex<String>]) {
        assert_eq!(walk.len(), graph.edge_count() + 1);

        let mut remaining = graph
            .edges()
            .map(|(from, to)| (from.key().to_string(), to.key().to_string()))
            .collect::<Vec<_>>();

        for pair in walk.windows(2) {
            let edge = (pair[0].key().to_string(), pair[1].key().to_string());
            let position = remaining
                .iter()
                .position(|e| *e == edge)
                .expect("walk uses a missing edge");
            remaining.swap_remove(position);
        }

        assert!(remaining.is_empty());
    }

    #[test]
    fn cycle_first() {
        let graph = create_digraph(&[(0, 2), (0, 3), (1, 0), (2, 1), (3, 4), (4, 0)]);
        let euler = DirectedEulerianCycle::new(&graph);

        assert!(euler.has_eulerian_cycle());
        assert_eq!(
            keys(euler.cycle().unwrap()),
            vec!["0", "2", "1", "0", "3", "4", "0"]
        );
        assert!(is_closed_walk(&graph, euler.cycle().unwrap()));
    }

    #[test]
    fn cycle_second() {
        let graph = create_digraph(&[
            (0, 6),
            (1, 6),
            (2, 1),
            (3, 5),
            (4, 3),
            (5, 0),
            (6, 2),
            (6, 4),
        ]);
        let euler = DirectedEulerianCycle::new(&graph);

        assert_eq!(
            keys(euler.cycle().unwrap()),
            vec!["0", "6", "2", "1", "6", "4", "3", "5", "0"]
        );
        assert_uses_every_edge(&graph, euler.cycle().unwrap());
    }

    #[test]
    fn path_first() {
        let graph = create_digraph(&[(0, 1), (1, 2), (2, 3), (2, 0), (3, 1)]);

        assert!(!DirectedEulerianCycle::new(&graph).has_eulerian_cycle());

        let euler = DirectedEulerianPath::new(&graph);

        assert!(euler.has_eulerian_path());
        assert_eq!(
            keys(euler.path().unwrap()),
            vec!["2", "3", "1", "2", "0", "1"]
        );
        assert_uses_every_edge(&graph, euler.path().unwrap());
    }

    #[test]
    fn path_through_back_and_forth() {
        let graph = create_digraph(&[(0, 1), (1, 0), (1, 2)]);

        assert!(!DirectedEulerianCycle::new(&graph).has_eulerian_cycle());

        let euler = DirectedEulerianPath::new(&graph);

        assert!(euler.has_eulerian_path());
        assert_eq!(keys(euler.path().unwrap()), vec!["1", "0", "1", "2"]);
        assert_uses_every_edge(&graph, euler.path().unwrap());
    }

    #[test]
    fn cycle_is_also_path() {
        let graph = create_digraph(&[(0, 2), (0, 3), (1, 0), (2, 1), (3, 4), (4, 0)]);

        let cycle = DirectedEulerianCycle::new(&graph);
        let path = DirectedEulerianPath::new(&graph);

        assert_eq!(cycle.cycle(), path.path());
    }

    #[test]
    fn disconnected_edges() {
        let graph = create_digraph(&[(0, 1), (1, 0), (2, 3), (3, 2)]);

        assert!(!DirectedEulerianCycle::new(&graph).has_eulerian_cycle());
        assert!(!DirectedEulerianPath::new(&graph).has_eulerian_path());
    }

    #[test]
    fn too_unbalanced() {
        let graph = create_digraph(&[(0, 1), (0, 2)]);

        assert!(!DirectedEulerianPath::new(&graph).has_eulerian_path());
    }

    #[test]
    fn isolated_vertices_do_not_matter() {
        let mut graph = create_digraph(&[(1, 2), (2, 1)]);
        graph.add_vertex(Vertex::from_key("0"));
        graph.add_vertex(Vertex::from_key("3"));

        let euler = DirectedEulerianCycle::new(&graph);
        assert_eq!(keys(euler.cycle().unwrap()), vec!["1", "2", "1"]);
    }

    #[test]
    fn self_loop() {
        let graph = create_digraph(&[(0, 0)]);

        let euler = DirectedEulerianCycle::new(&graph);
        assert_eq!(keys(euler.cycle().unwrap()), vec!["0", "0"]);
    }

    #[test]
    fn no_edges() {
        let mut graph = Digraph::new();
        graph.add_vertex(Vertex::from_key("0"));

        assert!(!DirectedEulerianCycle::new(&graph).has_eulerian_cycle());
        assert!(DirectedEulerianCycle::new(&graph).cycle().is_none());
        assert!(!DirectedEulerianPath::new(&graph).has_eulerian_path());
        assert!(DirectedEulerianPath::new(&graph).path().is_none());
    }

    proptest! {
        #[test]
        #[ignore = "run property-based tests with `cargo test proptest_ -- --ignored`"]
        fn proptest_walks_use_every_edge(graph in digraph(8)) {
            if let Some(cycle) = DirectedEulerianCycle::new(&graph).cycle() {
                prop_assert!(is_closed_walk(&graph, cycle));
                assert_uses_every_edge(&graph, cycle);
            }

            if let Some(path) = DirectedEulerianPath::new(&graph).path() {
                assert_uses_every_edge(&graph, path);
            }
        }
    }
}
