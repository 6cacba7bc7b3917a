//! Analyses computed over a snapshot of a graph.
//!
//! Every analysis does all of its work when it is constructed and afterwards
//! only answers queries from its cached state. It does not borrow the graph,
//! so the graph can be modified after the analysis is built. The analysis is
//! then silently stale: it keeps describing the graph as it was, and vertices
//! added later are unknown to it.
//!
//! Queries about vertices the analysis does not know never fail. They return
//! `false`, `None` or an empty sequence.

pub mod bipartite;
pub mod cycle;
pub mod depth_first_order;
pub mod eulerian;
pub mod paths;
pub mod reachability;
pub mod scc;
pub mod toposort;

pub use bipartite::Bipartite;
pub use cycle::{is_cyclic, DirectedCycle};
pub use depth_first_order::DepthFirstOrder;
pub use eulerian::{DirectedEulerianCycle, DirectedEulerianPath};
pub use paths::DirectedPaths;
pub use reachability::{Reachability, TransitiveClosure};
pub use scc::StronglyConnectedComponents;
pub use toposort::TopologicalOrder;

use crate::{
    core::{marker::EdgeType, Vertex, VertexId},
    storage::AdjList,
};

// Resolves ids produced by an analysis into owned vertices of the graph.
fn to_vertices<V, Ty: EdgeType>(graph: &AdjList<V, Ty>, ids: &[VertexId]) -> Vec<Vertex<V>> {
    ids.iter().map(|&id| graph.vertex_at(id).clone()).collect()
}
