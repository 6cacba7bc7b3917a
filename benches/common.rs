#![allow(dead_code)]

use fastrand::Rng;
use keygraph::{core::Vertex, storage::Digraph};

pub const RANDOM_SEED: u64 = 0xef6f79ed30ba75a;

// Enumerates the pairs `(v, w)` with `w < v` of the Gilbert random graph,
// skipping over the pairs that are not edges with geometric jumps.
pub struct RandomEdges {
    v: usize,
    w: usize,
    n: usize,
    p: f32,
}

impl RandomEdges {
    pub fn new(vertex_bound: usize, p: f32) -> Self {
        Self {
            v: 1,
            w: usize::MAX,
            n: vertex_bound,
            p,
        }
    }

    pub fn next_edge(&mut self, rng: &mut Rng) -> Option<(usize, usize)> {
        let Self { v, w, .. } = self;
        let n = self.n;
        let p = self.p;

        if *v >= n {
            return None;
        }

        let r = rng.f32();
        *w = w.wrapping_add(1) + ((1.0 - r).log10() / (1.0 - p).log10()).floor() as usize;

        while *w >= *v && *v < n {
            *w -= *v;
            *v += 1;
        }

        if *v < n {
            Some((*v, *w))
        } else {
            None
        }
    }
}

fn vertex(id: usize) -> Vertex<u32> {
    Vertex::new(id.to_string(), id as u32)
}

fn random(vertex_count: usize, density: f32, rng: &mut Rng, acyclic: bool) -> Digraph<u32> {
    let mut graph = Digraph::new();

    for v in 0..vertex_count {
        graph.add_vertex(vertex(v));
    }

    let mut edges = RandomEdges::new(vertex_count, density);

    while let Some((v, w)) = edges.next_edge(rng) {
        if acyclic || rng.bool() {
            graph.add_edge(vertex(v), vertex(w));
        } else {
            graph.add_edge(vertex(w), vertex(v));
        }
    }

    graph
}

/// Random digraph with edges in both directions.
pub fn random_directed(vertex_count: usize, density: f32, rng: &mut Rng) -> Digraph<u32> {
    random(vertex_count, density, rng, false)
}

/// Random digraph with edges only from higher to lower numbered vertices.
pub fn random_acyclic(vertex_count: usize, density: f32, rng: &mut Rng) -> Digraph<u32> {
    random(vertex_count, density, rng, true)
}
