use crate::{
    core::{marker::EdgeType, Vertex},
    storage::{AdjList, Digraph},
};

/// Sedgewick's `tinyDG`: 13 vertices, 22 edges, 5 strongly connected
/// components.
pub const TINY_DG: [(&str, &str); 22] = [
    ("4", "2"),
    ("2", "3"),
    ("3", "2"),
    ("6", "0"),
    ("0", "1"),
    ("2", "0"),
    ("11", "12"),
    ("12", "9"),
    ("9", "10"),
    ("9", "11"),
    ("7", "9"),
    ("10", "12"),
    ("11", "4"),
    ("4", "3"),
    ("3", "5"),
    ("6", "8"),
    ("8", "6"),
    ("5", "4"),
    ("0", "5"),
    ("6", "4"),
    ("6", "9"),
    ("7", "6"),
];

/// Sedgewick's `tinyDAG`: 13 vertices, 15 edges, no cycle.
pub const TINY_DAG: [(&str, &str); 15] = [
    ("2", "3"),
    ("0", "6"),
    ("0", "1"),
    ("2", "0"),
    ("11", "12"),
    ("9", "12"),
    ("9", "10"),
    ("9", "11"),
    ("3", "5"),
    ("8", "7"),
    ("5", "4"),
    ("0", "5"),
    ("6", "4"),
    ("6", "9"),
    ("7", "6"),
];

/// Undirected bipartite graph: 6 vertices, 7 edges.
pub const BIPARTITE: [(&str, &str); 7] = [
    ("0", "3"),
    ("0", "5"),
    ("1", "3"),
    ("1", "4"),
    ("2", "3"),
    ("2", "4"),
    ("2", "5"),
];

/// Undirected graph with odd cycles: 8 vertices, 12 edges.
pub const NON_BIPARTITE: [(&str, &str); 12] = [
    ("0", "3"),
    ("0", "5"),
    ("0", "6"),
    ("0", "7"),
    ("1", "3"),
    ("1", "4"),
    ("2", "3"),
    ("2", "4"),
    ("2", "5"),
    ("4", "7"),
    ("5", "6"),
    ("6", "7"),
];

/// Sedgewick's `tinyCG` (undirected): 6 vertices, 8 edges.
pub const TINY_CG: [(&str, &str); 8] = [
    ("0", "5"),
    ("2", "4"),
    ("2", "3"),
    ("1", "2"),
    ("0", "1"),
    ("3", "4"),
    ("3", "5"),
    ("0", "2"),
];

/// Creates a graph with vertices `"0"` to `"n-1"` and an edge between every
/// ordered pair of distinct vertices (every unordered pair if undirected).
pub fn create_complete<Ty: EdgeType>(vertex_count: usize) -> AdjList<String, Ty> {
    let mut graph = AdjList::new();

    for u in 0..vertex_count {
        graph.add_vertex(Vertex::from_key(u.to_string()));
    }

    for u in 0..vertex_count {
        for v in 0..vertex_count {
            if u == v {
                continue;
            }

            if !Ty::is_directed() && v > u {
                break;
            }

            graph.add_edge(Vertex::from_key(u.to_string()), Vertex::from_key(v.to_string()));
        }
    }

    graph
}

/// Creates a directed graph from edges given by numeric endpoints.
pub fn create_digraph(edges: &[(usize, usize)]) -> Digraph<String> {
    Digraph::from_edge_keys(
        edges
            .iter()
            .map(|(from, to)| (from.to_string(), to.to_string())),
    )
}

/// Returns `true` if the sequence is a closed walk along edges of the graph.
pub fn is_closed_walk<V>(graph: &Digraph<V>, walk: &[Vertex<V>]) -> bool {
    match (walk.first(), walk.last()) {
        (Some(first), Some(last)) if first == last && walk.len() > 1 => walk
            .windows(2)
            .all(|pair| graph.adjacent(&pair[0]).any(|w| *w == pair[1])),
        _ => false,
    }
}

/// Returns the keys of the vertices.
pub fn keys<V>(vertices: &[Vertex<V>]) -> Vec<&str> {
    vertices.iter().map(|v| v.key()).collect()
}
