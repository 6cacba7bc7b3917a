use crate::{
    algo::toposort::kahn::peel,
    core::{marker::Directed, Neighbors, VertexId, VertexSet},
    storage::AdjList,
    visit::{TypedBitSet, VisitSet},
};

pub(crate) fn kahn_find<V>(graph: &AdjList<V, Directed>) -> Option<Vec<VertexId>> {
    let peeling = peel(graph);

    if peeling.is_complete() {
        return None;
    }

    let residual = |v: &VertexId| peeling.indegree[v.as_usize()] > 0;

    // Every residual vertex has an incoming edge from another residual vertex.
    let mut edge_to = vec![None; graph.vertex_count()];
    let mut root = None;

    for v in graph.vertex_ids().filter(residual) {
        root = Some(v);

        for w in graph.neighbors(v).iter().filter(|&w| residual(w)) {
            edge_to[w.as_usize()] = Some(v);
        }
    }

    // Walking the predecessors must eventually repeat a vertex, which then
    // lies on a cycle.
    let mut root = root?;
    let mut visited = TypedBitSet::with_capacity(graph.vertex_count());

    while visited.visit(root) {
        root = edge_to[root.as_usize()]?;
    }

    let mut cycle = vec![root];
    let mut current = edge_to[root.as_usize()]?;

    while current != root {
        cycle.push(current);
        current = edge_to[current.as_usize()]?;
    }

    cycle.push(root);
    cycle.reverse();

    Some(cycle)
}
