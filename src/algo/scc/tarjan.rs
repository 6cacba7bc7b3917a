use std::cmp::min;

use crate::{
    core::{Neighbors, VertexSet},
    visit::{DfsEvent, DfsEvents, Visitor},
};

use super::Components;

pub(crate) fn tarjan<G>(graph: &G) -> Components
where
    G: Neighbors + VertexSet,
{
    let vertex_count = graph.vertex_count();

    let mut pre = vec![0; vertex_count];
    let mut low = vec![0; vertex_count];
    let mut ids = vec![0; vertex_count];
    let mut counter = 0;
    let mut count = 0;

    // Vertices not yet assigned to a component, in the order of discovery.
    let mut stack = Vec::new();
    // Open vertices, that is, the simulated recursion stack.
    let mut path = Vec::new();

    for event in DfsEvents::new(graph).start_all(graph).into_iter(graph) {
        match event {
            DfsEvent::Open { vertex, .. } => {
                let v = vertex.as_usize();
                pre[v] = counter;
                low[v] = counter;
                counter += 1;
                stack.push(vertex);
                path.push(vertex);
            }
            DfsEvent::TreeEdge { .. } => {}
            DfsEvent::BackEdge { from, to } | DfsEvent::CrossForwardEdge { from, to } => {
                low[from.as_usize()] = min(low[from.as_usize()], low[to.as_usize()]);
            }
            DfsEvent::Close { vertex, .. } => {
                path.pop();

                let v = vertex.as_usize();

                if low[v] >= pre[v] {
                    // Members never lower an ancestor again.
                    while let Some(w) = stack.pop() {
                        ids[w.as_usize()] = count;
                        low[w.as_usize()] = vertex_count;

                        if w == vertex {
                            break;
                        }
                    }

                    count += 1;
                }

                if let Some(parent) = path.last() {
                    let parent = parent.as_usize();
                    low[parent] = min(low[parent], low[v]);
                }
            }
        }
    }

    Components { ids, count }
}
