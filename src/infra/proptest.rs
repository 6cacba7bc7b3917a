use proptest::{
    collection::vec,
    strategy::{Just, Strategy},
};

use crate::{
    core::{marker::EdgeType, Vertex},
    storage::{AdjList, Digraph, UndirectedGraph},
};

fn build<Ty: EdgeType>(vertex_count: usize, edges: Vec<(usize, usize)>) -> AdjList<String, Ty> {
    let mut graph = AdjList::new();

    for v in 0..vertex_count {
        graph.add_vertex(Vertex::from_key(v.to_string()));
    }

    for (from, to) in edges {
        graph.add_edge(
            Vertex::from_key(from.to_string()),
            Vertex::from_key(to.to_string()),
        );
    }

    graph
}

fn edges_strategy(max_vertices: usize) -> impl Strategy<Value = (usize, Vec<(usize, usize)>)> {
    (1..=max_vertices.max(1)).prop_flat_map(|vertex_count| {
        let edge = (0..vertex_count, 0..vertex_count);
        (Just(vertex_count), vec(edge, 0..=vertex_count * 3))
    })
}

/// Directed graphs with vertices `"0"` to `"n-1"`, self-loops and parallel
/// edges included.
pub fn digraph(max_vertices: usize) -> impl Strategy<Value = Digraph<String>> {
    edges_strategy(max_vertices).prop_map(|(vertex_count, edges)| build(vertex_count, edges))
}

/// Directed graphs without cycles. Every edge goes from a lower number to a
/// higher one, while the insertion order of the edges is arbitrary.
pub fn acyclic_digraph(max_vertices: usize) -> impl Strategy<Value = Digraph<String>> {
    edges_strategy(max_vertices).prop_map(|(vertex_count, edges)| {
        let edges = edges
            .into_iter()
            .filter(|(from, to)| from != to)
            .map(|(from, to)| (from.min(to), from.max(to)))
            .collect();
        build(vertex_count, edges)
    })
}

/// Undirected graphs with vertices `"0"` to `"n-1"`, self-loops and parallel
/// edges included.
pub fn undirected_graph(max_vertices: usize) -> impl Strategy<Value = UndirectedGraph<String>> {
    edges_strategy(max_vertices).prop_map(|(vertex_count, edges)| build(vertex_count, edges))
}
