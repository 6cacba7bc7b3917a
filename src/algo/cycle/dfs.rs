use crate::{
    core::{Neighbors, VertexId, VertexSet},
    visit::{DfsEvent, DfsEvents, Visitor},
};

// Returns the closed cycle closed by the first back edge, if any.
pub(crate) fn dfs_find<G>(graph: &G) -> Option<Vec<VertexId>>
where
    G: Neighbors + VertexSet,
{
    let mut edge_to = vec![None; graph.vertex_count()];

    let (from, to) = DfsEvents::new(graph)
        .start_all(graph)
        .into_iter(graph)
        .find_map(|event| match event {
            DfsEvent::TreeEdge { from, to } => {
                edge_to[to.as_usize()] = Some(from);
                None
            }
            DfsEvent::BackEdge { from, to } => Some((from, to)),
            _ => None,
        })?;

    // The target of a back edge is an ancestor of its source in the DFS tree.
    let mut cycle = Vec::new();
    let mut current = from;

    while current != to {
        cycle.push(current);
        current = edge_to[current.as_usize()]?;
    }

    cycle.push(to);
    cycle.push(from);
    cycle.reverse();

    Some(cycle)
}
