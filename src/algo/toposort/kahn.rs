use std::collections::VecDeque;

use crate::{
    core::{marker::Directed, Neighbors, VertexId, VertexSet},
    storage::AdjList,
};

/// Result of repeatedly removing vertices without incoming edges.
pub(crate) struct Peeling {
    /// Removed vertices in the order of removal.
    pub order: Vec<VertexId>,
    /// Indegree of every vertex counting only edges from vertices that were
    /// not removed. Positive exactly for the vertices left in the graph.
    pub indegree: Vec<usize>,
}

impl Peeling {
    pub fn is_complete(&self) -> bool {
        self.order.len() == self.indegree.len()
    }
}

pub(crate) fn peel<V>(graph: &AdjList<V, Directed>) -> Peeling {
    let mut indegree = Vec::with_capacity(graph.vertex_count());
    let mut queue = VecDeque::new();

    for v in graph.vertex_ids() {
        let deg = graph.indegree_by_id(v);
        indegree.push(deg);

        if deg == 0 {
            queue.push_back(v);
        }
    }

    let mut order = Vec::with_capacity(indegree.len());

    while let Some(v) = queue.pop_front() {
        order.push(v);

        for &w in graph.neighbors(v) {
            let deg = &mut indegree[w.as_usize()];
            *deg -= 1;

            if *deg == 0 {
                queue.push_back(w);
            }
        }
    }

    Peeling { order, indegree }
}
