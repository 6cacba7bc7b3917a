use crate::{
    core::{Neighbors, VertexSet},
    visit::{DfsEvent, DfsEvents, Visitor},
};

use super::Components;

pub(crate) fn gabow<G>(graph: &G) -> Components
where
    G: Neighbors + VertexSet,
{
    let vertex_count = graph.vertex_count();

    let mut pre = vec![0; vertex_count];
    let mut ids = vec![None; vertex_count];
    let mut counter = 0;
    let mut count = 0;

    // Visited vertices not yet assigned to a component.
    let mut unassigned = Vec::new();
    // Candidate roots of the components being built.
    let mut roots = Vec::new();

    for event in DfsEvents::new(graph).start_all(graph).into_iter(graph) {
        match event {
            DfsEvent::Open { vertex, .. } => {
                pre[vertex.as_usize()] = counter;
                counter += 1;
                unassigned.push(vertex);
                roots.push(vertex);
            }
            DfsEvent::TreeEdge { .. } => {}
            DfsEvent::BackEdge { to, .. } | DfsEvent::CrossForwardEdge { to, .. } => {
                if ids[to.as_usize()].is_none() {
                    let bound = pre[to.as_usize()];
                    while roots.last().is_some_and(|top| pre[top.as_usize()] > bound) {
                        roots.pop();
                    }
                }
            }
            DfsEvent::Close { vertex, .. } => {
                if roots.last() == Some(&vertex) {
                    roots.pop();

                    while let Some(w) = unassigned.pop() {
                        ids[w.as_usize()] = Some(count);

                        if w == vertex {
                            break;
                        }
                    }

                    count += 1;
                }
            }
        }
    }

    Components {
        // Every vertex is closed, so every vertex is assigned.
        ids: ids.into_iter().map(Option::unwrap_or_default).collect(),
        count,
    }
}
