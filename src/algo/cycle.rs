//! Find a [cycle] in a directed graph.
//!
//! See available parameters [here](DirectedCycleBuilder#implementations).
//!
//! [cycle]: https://en.wikipedia.org/wiki/Cycle_(graph_theory)
//!
//! # Examples
//!
//! ```
//! use keygraph::{
//!     algo::{is_cyclic, DirectedCycle},
//!     core::Vertex,
//!     storage::Digraph,
//! };
//!
//! let mut graph = Digraph::from_edge_keys([("a", "b"), ("b", "c"), ("c", "d")]);
//!
//! assert!(!is_cyclic(&graph));
//!
//! graph.add_edge(Vertex::from_key("d"), Vertex::from_key("b"));
//!
//! let cycle = DirectedCycle::on(&graph).dfs().run();
//! let keys = cycle.cycle().iter().map(|v| v.key()).collect::<Vec<_>>();
//!
//! assert_eq!(keys, vec!["d", "b", "c", "d"]);
//! ```

use crate::{core::Vertex, storage::Digraph};

mod builder;
mod dfs;
mod kahn;

pub use builder::DirectedCycleBuilder;

pub(crate) use dfs::dfs_find;

/// A directed cycle, if the graph has one.
///
/// The cycle is closed: its first and last vertex are the same and every two
/// consecutive vertices are connected by an edge of the graph.
///
/// See [module](self) documentation for more details and example.
#[derive(Debug, Clone)]
pub struct DirectedCycle<V> {
    cycle: Vec<Vertex<V>>,
}

impl<V> DirectedCycle<V> {
    /// Returns `true` if a cycle was found.
    pub fn has_cycle(&self) -> bool {
        !self.cycle.is_empty()
    }

    /// Returns the vertices of the cycle, empty if there is none.
    pub fn cycle(&self) -> &[Vertex<V>] {
        &self.cycle
    }
}

/// Algorithm for [`DirectedCycle`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[non_exhaustive]
pub enum Algo {
    /// Recursive [depth-first
    /// search](https://en.wikipedia.org/wiki/Depth-first_search) (simulated
    /// with an explicit stack).
    ///
    /// Reports the cycle closed by the first [back
    /// edge](crate::visit::DfsEvent::BackEdge).
    Dfs,

    /// Elimination of vertices without incoming edges as in [Kahn's
    /// algorithm](https://en.wikipedia.org/wiki/Topological_sorting#Kahn's_algorithm).
    ///
    /// The vertices that cannot be eliminated lie on a cycle or are reachable
    /// from one. The cycle is then found by following incoming edges among
    /// them until a vertex repeats.
    ///
    /// # Use cases
    ///
    /// * When a topological order is computed as well, since they share the
    ///   elimination phase.
    #[default]
    Kahn,
}

/// Returns `true` if the graph has a directed cycle.
pub fn is_cyclic<V>(graph: &Digraph<V>) -> bool {
    DirectedCycle::on(graph).run().has_cycle()
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::infra::{
        proptest::{acyclic_digraph, digraph},
        testing::{is_closed_walk, keys, TINY_DAG, TINY_DG},
    };

    use super::*;

    fn triangle() -> Digraph<String> {
        Digraph::from_edge_keys([("0", "1"), ("1", "2"), ("2", "0"), ("2", "3")])
    }

    #[test]
    fn dfs_triangle() {
        let graph = triangle();
        let cycle = DirectedCycle::on(&graph).dfs().run();

        assert!(cycle.has_cycle());
        assert_eq!(keys(cycle.cycle()), vec!["2", "0", "1", "2"]);
    }

    #[test]
    fn kahn_triangle() {
        let graph = triangle();
        let cycle = DirectedCycle::on(&graph).kahn().run();

        assert!(cycle.has_cycle());
        assert_eq!(keys(cycle.cycle()), vec!["2", "0", "1", "2"]);
    }

    #[test]
    fn dfs_tiny_dg() {
        let graph = Digraph::from_edge_keys(TINY_DG);
        let cycle = DirectedCycle::on(&graph).using(Algo::Dfs).run();

        assert_eq!(keys(cycle.cycle()), vec!["3", "2", "3"]);
    }

    #[test]
    fn kahn_tiny_dg() {
        let graph = Digraph::from_edge_keys(TINY_DG);
        let cycle = DirectedCycle::on(&graph).using(Algo::Kahn).run();

        assert_eq!(keys(cycle.cycle()), vec!["8", "6", "8"]);
        assert!(is_closed_walk(&graph, cycle.cycle()));
    }

    #[test]
    fn tiny_dag_acyclic() {
        let graph = Digraph::from_edge_keys(TINY_DAG);

        for algo in [Algo::Dfs, Algo::Kahn] {
            let cycle = DirectedCycle::on(&graph).using(algo).run();
            assert!(!cycle.has_cycle());
            assert!(cycle.cycle().is_empty());
        }

        assert!(!is_cyclic(&graph));
    }

    #[test]
    fn self_loop() {
        let graph = Digraph::from_edge_keys([("x", "a"), ("a", "a")]);

        for algo in [Algo::Dfs, Algo::Kahn] {
            let cycle = DirectedCycle::on(&graph).using(algo).run();
            assert_eq!(keys(cycle.cycle()), vec!["a", "a"]);
        }
    }

    #[test]
    fn empty_graph() {
        let graph = Digraph::<String>::new();

        assert!(!DirectedCycle::on(&graph).dfs().run().has_cycle());
        assert!(!DirectedCycle::on(&graph).kahn().run().has_cycle());
    }

    #[test]
    fn default_is_kahn() {
        let graph = Digraph::from_edge_keys(TINY_DG);

        let default = DirectedCycle::on(&graph).using_opt(None).run();
        let kahn = DirectedCycle::on(&graph).kahn().run();

        assert_eq!(keys(default.cycle()), keys(kahn.cycle()));
    }

    proptest! {
        #[test]
        #[ignore = "run property-based tests with `cargo test proptest_ -- --ignored`"]
        fn proptest_algorithms_agree(graph in digraph(16)) {
            let dfs = DirectedCycle::on(&graph).dfs().run();
            let kahn = DirectedCycle::on(&graph).kahn().run();

            prop_assert_eq!(dfs.has_cycle(), kahn.has_cycle());

            for cycle in [&dfs, &kahn] {
                if cycle.has_cycle() {
                    prop_assert!(is_closed_walk(&graph, cycle.cycle()));
                }
            }
        }

        #[test]
        #[ignore = "run property-based tests with `cargo test proptest_ -- --ignored`"]
        fn proptest_acyclic_has_no_cycle(graph in acyclic_digraph(16)) {
            prop_assert!(!DirectedCycle::on(&graph).dfs().run().has_cycle());
            prop_assert!(!DirectedCycle::on(&graph).kahn().run().has_cycle());
        }
    }
}
