use super::*;

use super::raw::{RawBfs, RawEvent, RawVisit};

use crate::core::{GraphBase, Neighbors};

/// Breadth-first traversal.
///
/// Vertices are visited in the order of their distance (number of edges)
/// from the roots.
pub struct Bfs {
    raw: RawVisit<RawBfs>,
}

pub struct BfsRooted<'a> {
    raw: &'a mut RawVisit<RawBfs>,
}

impl Bfs {
    pub fn new<G: GraphBase>(graph: &G) -> Self {
        Self {
            raw: RawVisit::new(graph.vertex_count()),
        }
    }

    pub fn start(&mut self, root: VertexId) -> BfsRooted<'_> {
        self.raw.start(root);
        BfsRooted { raw: &mut self.raw }
    }

    /// Starts the traversal from all given roots at once.
    ///
    /// All roots are at distance zero, so they are visited before any other
    /// vertex.
    pub fn start_multi<I>(&mut self, roots: I) -> BfsRooted<'_>
    where
        I: IntoIterator<Item = VertexId>,
    {
        self.raw.start_seeded(roots);
        BfsRooted { raw: &mut self.raw }
    }

    pub fn reset(&mut self) {
        self.raw.reset();
    }

    pub fn visited(&self) -> &TypedBitSet<VertexId> {
        &self.raw.visited
    }
}

impl<'a> BfsRooted<'a> {
    // Advances the traversal, reporting every examined edge to the callback.
    pub(crate) fn visit_next_with<G, F>(&mut self, graph: &G, f: F) -> Option<VertexId>
    where
        G: Neighbors,
        F: FnMut(RawEvent),
    {
        self.raw.next(graph, f)
    }
}

impl<'a, G> Visitor<G> for BfsRooted<'a>
where
    G: Neighbors,
{
    type Item = VertexId;

    fn visit_next(&mut self, graph: &G) -> Option<Self::Item> {
        self.raw.next(graph, |_| {})
    }
}
