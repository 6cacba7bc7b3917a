use std::{fmt, iter::FusedIterator, marker::PhantomData, slice};

use crate::core::{
    id::{KeyIndex, VertexId},
    marker::{Directed, EdgeType, Undirected},
    GraphBase, Neighbors, Vertex, VertexSet, VerticesPair,
};

/// Directed graph stored as adjacency lists.
pub type Digraph<V> = AdjList<V, Directed>;

/// Undirected graph stored as adjacency lists.
pub type UndirectedGraph<V> = AdjList<V, Undirected>;

/// Graph storage keeping, for every vertex, the list of its adjacent vertices
/// in the order in which the edges were added.
///
/// Vertices are identified by their keys and are never removed. Multi-edges
/// and self-loops are allowed and each is counted as a separate edge. All
/// operations take constant (amortized) time except enumerating vertices,
/// edges or adjacency, which is linear in the size of the enumeration, and
/// [`reverse`](AdjList::reverse), which is linear in the size of the graph.
///
/// # Examples
///
/// ```
/// use keygraph::{core::Vertex, storage::Digraph};
///
/// let mut graph = Digraph::new();
///
/// graph.add_edge(Vertex::new("a", 1), Vertex::new("b", 2));
/// graph.add_edge(Vertex::new("a", 1), Vertex::new("c", 3));
///
/// assert_eq!(graph.vertex_count(), 3);
/// assert_eq!(graph.edge_count(), 2);
/// assert_eq!(graph.outdegree("a"), 2);
/// assert_eq!(graph.indegree("c"), 1);
///
/// let adjacent = graph.adjacent("a").map(|v| v.key()).collect::<Vec<_>>();
/// assert_eq!(adjacent, vec!["b", "c"]);
/// ```
pub struct AdjList<V, Ty> {
    nodes: Vec<Node<V>>,
    index: KeyIndex,
    indegrees: Vec<usize>,
    edge_count: usize,
    ty: PhantomData<fn() -> Ty>,
}

struct Node<V> {
    vertex: Vertex<V>,
    adjacent: Vec<VertexId>,
}

impl<V> Clone for Node<V> {
    fn clone(&self) -> Self {
        Self {
            vertex: self.vertex.clone(),
            adjacent: self.adjacent.clone(),
        }
    }
}

impl<V, Ty: EdgeType> AdjList<V, Ty> {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            index: KeyIndex::default(),
            indegrees: Vec::new(),
            edge_count: 0,
            ty: PhantomData,
        }
    }

    /// Creates a graph from a sequence of edges.
    ///
    /// Endpoints are added as vertices in the order of their first
    /// appearance.
    pub fn from_edges<I>(edges: I) -> Self
    where
        I: IntoIterator<Item = VerticesPair<V>>,
    {
        let mut graph = Self::new();
        graph.extend(edges);
        graph
    }

    /// Adds a vertex to the graph and returns its id.
    ///
    /// If there already is a vertex with the same key, the graph is left
    /// unchanged (the existing payload is kept) and the id of the existing
    /// vertex is returned.
    pub fn add_vertex(&mut self, vertex: Vertex<V>) -> VertexId {
        if let Some(id) = self.index.get(vertex.key()) {
            tracing::trace!(key = %vertex, "vertex already present");
            return id;
        }

        let id = VertexId::from(self.nodes.len());
        self.index.insert(vertex.shared_key(), id);
        self.nodes.push(Node {
            vertex,
            adjacent: Vec::new(),
        });
        self.indegrees.push(0);
        id
    }

    /// Adds an edge between two vertices.
    ///
    /// Endpoints not yet present in the graph are added first (`from` before
    /// `to`). In undirected graphs, each endpoint gets the other one appended
    /// to its adjacency. A self-loop thus appears twice in the adjacency of
    /// its vertex in an undirected graph.
    pub fn add_edge(&mut self, from: Vertex<V>, to: Vertex<V>) {
        let from = self.add_vertex(from);
        let to = self.add_vertex(to);
        self.connect(from, to);
    }

    fn connect(&mut self, from: VertexId, to: VertexId) {
        self.nodes[from.as_usize()].adjacent.push(to);
        if Ty::is_directed() {
            self.indegrees[to.as_usize()] += 1;
        } else {
            self.nodes[to.as_usize()].adjacent.push(from);
        }
        self.edge_count += 1;
    }

    /// Returns the number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.nodes.len()
    }

    /// Returns the number of edges.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Returns the vertices adjacent to given vertex in the order of edge
    /// insertion.
    ///
    /// The iterator is empty for a vertex not in the graph.
    pub fn adjacent(&self, key: impl AsRef<str>) -> Adjacent<'_, V> {
        let ids = match self.index.get(key.as_ref()) {
            Some(id) => self.nodes[id.as_usize()].adjacent.iter(),
            None => <&[VertexId]>::default().iter(),
        };

        Adjacent {
            nodes: &self.nodes,
            ids,
        }
    }

    /// Returns the number of edges incident to a vertex (outgoing edges in
    /// directed graphs). Returns 0 for a vertex not in the graph.
    pub fn degree(&self, key: impl AsRef<str>) -> usize {
        self.index
            .get(key.as_ref())
            .map(|id| self.nodes[id.as_usize()].adjacent.len())
            .unwrap_or(0)
    }

    /// Returns the vertex with given key.
    pub fn vertex(&self, key: impl AsRef<str>) -> Option<&Vertex<V>> {
        self.index
            .get(key.as_ref())
            .map(|id| &self.nodes[id.as_usize()].vertex)
    }

    /// Returns `true` if there is a vertex with given key.
    pub fn contains_vertex(&self, key: impl AsRef<str>) -> bool {
        self.index.contains(key.as_ref())
    }

    /// Returns the id of the vertex with given key.
    pub fn vertex_id(&self, key: impl AsRef<str>) -> Option<VertexId> {
        self.index.get(key.as_ref())
    }

    /// Returns the vertex with given id.
    pub fn vertex_by_id(&self, id: VertexId) -> Option<&Vertex<V>> {
        self.nodes.get(id.as_usize()).map(|node| &node.vertex)
    }

    // Ids handed out by analyses always come from this graph.
    pub(crate) fn vertex_at(&self, id: VertexId) -> &Vertex<V> {
        &self.nodes[id.as_usize()].vertex
    }

    /// Returns an iterator over all vertices in insertion order.
    pub fn vertices(&self) -> Vertices<'_, V> {
        Vertices {
            nodes: self.nodes.iter(),
        }
    }

    /// Returns an iterator over all edges.
    ///
    /// Edges are reported vertex by vertex in insertion order, and for every
    /// vertex in the order of its adjacency. An undirected edge is reported
    /// once, from the endpoint that was added to the graph first. Parallel
    /// edges are reported with their multiplicity.
    pub fn edges(&self) -> Edges<'_, V, Ty> {
        Edges {
            nodes: &self.nodes,
            vertex: 0,
            cursor: 0,
            loops: 0,
            ty: PhantomData,
        }
    }
}

impl<V> AdjList<V, Directed> {
    /// Returns the number of edges leaving a vertex, 0 for a vertex not in the
    /// graph.
    pub fn outdegree(&self, key: impl AsRef<str>) -> usize {
        self.degree(key)
    }

    /// Returns the number of edges entering a vertex, 0 for a vertex not in the
    /// graph.
    pub fn indegree(&self, key: impl AsRef<str>) -> usize {
        self.index
            .get(key.as_ref())
            .map(|id| self.indegrees[id.as_usize()])
            .unwrap_or(0)
    }

    pub(crate) fn indegree_by_id(&self, id: VertexId) -> usize {
        self.indegrees[id.as_usize()]
    }

    /// Returns an independent graph with the same vertices and all edges
    /// flipped.
    ///
    /// Vertices keep their insertion order, so every vertex has the same
    /// [id](VertexId) in both graphs.
    pub fn reverse(&self) -> Self {
        let mut reversed = Self::new();

        for node in self.nodes.iter() {
            reversed.add_vertex(node.vertex.clone());
        }

        for (v, node) in self.nodes.iter().enumerate() {
            for &w in node.adjacent.iter() {
                reversed.connect(w, VertexId::from(v));
            }
        }

        reversed
    }
}

impl AdjList<String, Directed> {
    /// Creates a digraph from pairs of keys, using each key as the payload of
    /// its vertex.
    pub fn from_edge_keys<I, K>(edges: I) -> Self
    where
        I: IntoIterator<Item = (K, K)>,
        K: AsRef<str>,
    {
        Self::from_edges(
            edges
                .into_iter()
                .map(|(from, to)| (Vertex::from_key(from), Vertex::from_key(to))),
        )
    }
}

impl AdjList<String, Undirected> {
    /// Creates an undirected graph from pairs of keys, using each key as the
    /// payload of its vertex.
    pub fn from_edge_keys<I, K>(edges: I) -> Self
    where
        I: IntoIterator<Item = (K, K)>,
        K: AsRef<str>,
    {
        Self::from_edges(
            edges
                .into_iter()
                .map(|(v, w)| (Vertex::from_key(v), Vertex::from_key(w))),
        )
    }
}

impl<V, Ty: EdgeType> Default for AdjList<V, Ty> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V, Ty> Clone for AdjList<V, Ty> {
    fn clone(&self) -> Self {
        Self {
            nodes: self.nodes.clone(),
            index: self.index.clone(),
            indegrees: self.indegrees.clone(),
            edge_count: self.edge_count,
            ty: PhantomData,
        }
    }
}

impl<V: fmt::Debug, Ty: EdgeType> fmt::Debug for AdjList<V, Ty> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AdjList")
            .field("directed", &Ty::is_directed())
            .field("vertices", &self.vertices().collect::<Vec<_>>())
            .field("edge_count", &self.edge_count)
            .finish()
    }
}

impl<V, Ty: EdgeType> fmt::Display for AdjList<V, Ty> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{} vertices, {} edges ",
            self.vertex_count(),
            self.edge_count()
        )?;

        for node in self.nodes.iter() {
            write!(f, "{}:", node.vertex)?;
            for w in node.adjacent.iter() {
                write!(f, " {}", self.nodes[w.as_usize()].vertex)?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}

impl<V, Ty: EdgeType> Extend<VerticesPair<V>> for AdjList<V, Ty> {
    fn extend<I: IntoIterator<Item = VerticesPair<V>>>(&mut self, iter: I) {
        for (from, to) in iter {
            self.add_edge(from, to);
        }
    }
}

impl<V, Ty: EdgeType> FromIterator<VerticesPair<V>> for AdjList<V, Ty> {
    fn from_iter<I: IntoIterator<Item = VerticesPair<V>>>(iter: I) -> Self {
        Self::from_edges(iter)
    }
}

impl<V, Ty: EdgeType> GraphBase for AdjList<V, Ty> {
    type EdgeType = Ty;

    fn vertex_count(&self) -> usize {
        self.nodes.len()
    }

    fn edge_count(&self) -> usize {
        self.edge_count
    }
}

impl<V, Ty: EdgeType> VertexSet for AdjList<V, Ty> {
    fn key_index(&self) -> &KeyIndex {
        &self.index
    }
}

impl<V, Ty: EdgeType> Neighbors for AdjList<V, Ty> {
    fn neighbors(&self, from: VertexId) -> &[VertexId] {
        &self.nodes[from.as_usize()].adjacent
    }
}

/// Iterator returned from [`AdjList::adjacent`].
pub struct Adjacent<'a, V> {
    nodes: &'a [Node<V>],
    ids: slice::Iter<'a, VertexId>,
}

impl<'a, V> Iterator for Adjacent<'a, V> {
    type Item = &'a Vertex<V>;

    fn next(&mut self) -> Option<Self::Item> {
        self.ids
            .next()
            .map(|id| &self.nodes[id.as_usize()].vertex)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.ids.size_hint()
    }
}

impl<V> ExactSizeIterator for Adjacent<'_, V> {}

impl<V> FusedIterator for Adjacent<'_, V> {}

/// Iterator returned from [`AdjList::vertices`].
pub struct Vertices<'a, V> {
    nodes: slice::Iter<'a, Node<V>>,
}

impl<'a, V> Iterator for Vertices<'a, V> {
    type Item = &'a Vertex<V>;

    fn next(&mut self) -> Option<Self::Item> {
        self.nodes.next().map(|node| &node.vertex)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.nodes.size_hint()
    }
}

impl<V> ExactSizeIterator for Vertices<'_, V> {}

impl<V> FusedIterator for Vertices<'_, V> {}

/// Iterator returned from [`AdjList::edges`].
pub struct Edges<'a, V, Ty> {
    nodes: &'a [Node<V>],
    vertex: usize,
    cursor: usize,
    // Number of self-loop occurrences seen in the adjacency of the current
    // vertex.
    loops: usize,
    ty: PhantomData<fn() -> Ty>,
}

impl<'a, V, Ty: EdgeType> Iterator for Edges<'a, V, Ty> {
    type Item = (&'a Vertex<V>, &'a Vertex<V>);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let node = self.nodes.get(self.vertex)?;

            let Some(&w) = node.adjacent.get(self.cursor) else {
                self.vertex += 1;
                self.cursor = 0;
                self.loops = 0;
                continue;
            };

            self.cursor += 1;

            let report = if Ty::is_directed() {
                true
            } else if self.vertex == w.as_usize() {
                // An undirected self-loop occupies two consecutive positions.
                self.loops += 1;
                self.loops % 2 == 1
            } else {
                self.vertex < w.as_usize()
            };

            if report {
                return Some((&node.vertex, &self.nodes[w.as_usize()].vertex));
            }
        }
    }
}

impl<V, Ty: EdgeType> FusedIterator for Edges<'_, V, Ty> {}
