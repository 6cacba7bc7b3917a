use crate::{
    algo::depth_first_order::Orders,
    core::marker::Directed,
    storage::AdjList,
    visit::{Dfs, VisitSet, Visitor},
};

use super::Components;

pub(crate) fn kosaraju_sharir<V>(graph: &AdjList<V, Directed>) -> Components {
    // Reversing keeps vertex ids.
    let finished = Orders::traverse(&graph.reverse()).post;

    let mut ids = vec![0; graph.vertex_count()];
    let mut count = 0;
    let mut dfs = Dfs::new(graph);

    for &root in finished.iter().rev() {
        if dfs.visited().is_visited(&root) {
            continue;
        }

        for v in dfs.start(root).into_iter(graph) {
            ids[v.as_usize()] = count;
        }

        count += 1;
    }

    Components { ids, count }
}
