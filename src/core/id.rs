//! Identifiers of vertices and the index resolving vertex keys to them.
//!
//! Graphs store their vertices in an arena and refer to them by [`VertexId`]
//! internally. Every "pointer" between vertices (adjacency lists, predecessor
//! maps in analyses) is such an id, so there is no shared ownership between
//! vertices.

use std::{fmt, iter::FusedIterator, ops::Range, rc::Rc};

use rustc_hash::FxHashMap;

/// Position of a vertex in the arena of its graph.
///
/// Ids are assigned densely in the order of vertex insertion and never change,
/// because vertices are never removed from a graph. An id is only meaningful
/// together with the graph (or an analysis of the graph) that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VertexId(usize);

impl VertexId {
    /// Returns the id as an index into a contiguous array.
    #[inline]
    pub fn as_usize(self) -> usize {
        self.0
    }
}

impl From<usize> for VertexId {
    #[inline]
    fn from(index: usize) -> Self {
        Self(index)
    }
}

impl From<VertexId> for usize {
    #[inline]
    fn from(id: VertexId) -> Self {
        id.0
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Iterator over all vertex ids of a graph, in insertion order.
#[derive(Debug, Clone)]
pub struct VertexIds {
    range: Range<usize>,
}

impl VertexIds {
    pub(crate) fn new(count: usize) -> Self {
        Self { range: 0..count }
    }
}

impl Iterator for VertexIds {
    type Item = VertexId;

    fn next(&mut self) -> Option<Self::Item> {
        self.range.next().map(VertexId)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.range.size_hint()
    }
}

impl DoubleEndedIterator for VertexIds {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.range.next_back().map(VertexId)
    }
}

impl ExactSizeIterator for VertexIds {}

impl FusedIterator for VertexIds {}

/// Mapping from vertex keys to vertex ids.
///
/// The mapping is shared between a graph and all analyses computed from it
/// and is copied only when the graph gets a new vertex while the mapping is
/// still shared. An analysis therefore keeps resolving keys exactly as they
/// were at the time it was computed; vertices added afterwards are unknown to
/// it.
#[derive(Debug, Clone, Default)]
pub struct KeyIndex {
    map: Rc<FxHashMap<Rc<str>, VertexId>>,
}

impl KeyIndex {
    /// Returns the id of the vertex with given key, if there is such vertex.
    pub fn get(&self, key: &str) -> Option<VertexId> {
        self.map.get(key).copied()
    }

    /// Returns `true` if there is a vertex with given key.
    pub fn contains(&self, key: &str) -> bool {
        self.map.contains_key(key)
    }

    /// Returns the number of keys in the index.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Returns `true` if the index has no keys.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    pub(crate) fn insert(&mut self, key: Rc<str>, id: VertexId) {
        Rc::make_mut(&mut self.map).insert(key, id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vertex_ids_in_order() {
        let ids = VertexIds::new(3).collect::<Vec<_>>();
        assert_eq!(ids, vec![VertexId(0), VertexId(1), VertexId(2)]);
        assert_eq!(VertexIds::new(4).len(), 4);
    }

    #[test]
    fn key_index_copy_on_write() {
        let mut index = KeyIndex::default();
        index.insert(Rc::from("a"), VertexId(0));

        let snapshot = index.clone();
        index.insert(Rc::from("b"), VertexId(1));

        assert_eq!(index.get("b"), Some(VertexId(1)));
        assert_eq!(snapshot.get("a"), Some(VertexId(0)));
        assert_eq!(snapshot.get("b"), None);
        assert_eq!(snapshot.len(), 1);
    }
}
