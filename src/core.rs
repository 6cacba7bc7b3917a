//! Core traits and types of the graph model.
//!
//! Vertices are identified by their [keys](Vertex::key). Internally, graphs
//! store vertices in an arena and refer to them by [`VertexId`]s, which is what
//! the traits in this module operate on. The traits are the seam between the
//! graph storage and the [traversals](crate::visit) running on top of it.

pub mod id;
pub mod marker;
pub mod vertex;

#[doc(inline)]
pub use self::{
    id::{KeyIndex, VertexId, VertexIds},
    vertex::{Vertex, VerticesPair},
};

use marker::EdgeType;

/// Basic properties of a graph.
pub trait GraphBase {
    /// Directionality of the edges.
    type EdgeType: EdgeType;

    /// Returns the number of vertices in the graph.
    fn vertex_count(&self) -> usize;

    /// Returns the number of edges in the graph.
    fn edge_count(&self) -> usize;

    /// Returns `true` if the graph is directed.
    fn is_directed(&self) -> bool {
        Self::EdgeType::is_directed()
    }
}

/// A graph whose vertices are identified by dense [`VertexId`]s.
pub trait VertexSet: GraphBase {
    /// Returns an iterator over all vertex ids in insertion order.
    fn vertex_ids(&self) -> VertexIds {
        VertexIds::new(self.vertex_count())
    }

    /// Returns `true` if the id belongs to a vertex of the graph.
    fn contains_vertex_id(&self, id: VertexId) -> bool {
        id.as_usize() < self.vertex_count()
    }

    /// Returns the mapping from vertex keys to vertex ids.
    fn key_index(&self) -> &KeyIndex;
}

/// Access to the outgoing neighbors of a vertex.
pub trait Neighbors: GraphBase {
    /// Returns the neighbors of a vertex in the order in which the connecting
    /// edges were added.
    ///
    /// Parallel edges make a neighbor appear multiple times.
    ///
    /// # Panics
    ///
    /// Panics if the vertex does not belong to the graph.
    fn neighbors(&self, from: VertexId) -> &[VertexId];

    /// Returns the number of outgoing edges of a vertex.
    fn degree(&self, from: VertexId) -> usize {
        self.neighbors(from).len()
    }
}
