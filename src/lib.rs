//! Directed and undirected graphs whose vertices are identified by string
//! keys, with a family of analyses computed over them.
//!
//! Graphs are built incrementally in the [storage] module. Analyses in the
//! [algo] module are computed from a snapshot of a graph in one go and then
//! answer queries about it:
//!
//! * [paths](algo::DirectedPaths) and [reachability](algo::Reachability) from
//!   source vertices, [transitive closure](algo::TransitiveClosure),
//! * [cycle detection](algo::DirectedCycle), [topological
//!   ordering](algo::TopologicalOrder), [depth-first
//!   orders](algo::DepthFirstOrder),
//! * [strongly connected components](algo::StronglyConnectedComponents),
//! * [Eulerian cycles](algo::DirectedEulerianCycle) and
//!   [paths](algo::DirectedEulerianPath),
//! * [bipartiteness](algo::Bipartite) of undirected graphs.
//!
//! All traversals are iterative, so the size of the graph is not limited by
//! the program stack.
//!
//! # Examples
//!
//! ```
//! use keygraph::prelude::*;
//!
//! let mut graph = Digraph::new();
//!
//! graph.add_edge(Vertex::new("compile", 10), Vertex::new("test", 5));
//! graph.add_edge(Vertex::new("compile", 10), Vertex::new("package", 3));
//! graph.add_edge(Vertex::new("test", 5), Vertex::new("package", 3));
//!
//! let order = TopologicalOrder::on(&graph).run();
//! let steps = order
//!     .order()
//!     .unwrap()
//!     .iter()
//!     .map(|v| v.key())
//!     .collect::<Vec<_>>();
//!
//! assert_eq!(steps, vec!["compile", "test", "package"]);
//!
//! let scc = StronglyConnectedComponents::on(&graph).run();
//! assert_eq!(scc.count(), 3);
//! ```

pub mod algo;
pub mod core;
pub mod infra;
pub mod storage;
pub mod visit;

pub mod prelude {
    pub use crate::{
        algo::{
            Bipartite, DepthFirstOrder, DirectedCycle, DirectedEulerianCycle,
            DirectedEulerianPath, DirectedPaths, Reachability, StronglyConnectedComponents,
            TopologicalOrder, TransitiveClosure,
        },
        core::Vertex,
        storage::{Digraph, UndirectedGraph},
        visit::Visitor,
    };
}
