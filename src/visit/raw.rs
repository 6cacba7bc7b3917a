use std::{collections::VecDeque, marker::PhantomData};

use crate::core::{Neighbors, VertexId};

use super::{TypedBitSet, VisitRoots, VisitSet};

pub trait TraversalCollection<T>: Default {
    fn push(&mut self, value: T);
    fn pop(&mut self) -> Option<T>;
    fn clear(&mut self);
}

pub struct Queue<T>(pub VecDeque<T>);

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self(VecDeque::new())
    }
}

impl<T> TraversalCollection<T> for Queue<T> {
    fn push(&mut self, value: T) {
        self.0.push_back(value);
    }

    fn pop(&mut self) -> Option<T> {
        self.0.pop_front()
    }

    fn clear(&mut self) {
        self.0.clear();
    }
}

#[derive(Debug)]
pub struct Stack<T>(pub Vec<T>);

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self(Vec::new())
    }
}

impl<T> TraversalCollection<T> for Stack<T> {
    fn push(&mut self, value: T) {
        self.0.push(value);
    }

    fn pop(&mut self) -> Option<T> {
        self.0.pop()
    }

    fn clear(&mut self) {
        self.0.clear();
    }
}

pub(crate) trait RawAlgo {
    type Item;
    type Collection: TraversalCollection<Self::Item>;

    fn id(item: &Self::Item) -> VertexId;
    fn start(id: VertexId) -> Self::Item;
    fn visit_on_start() -> bool;
}

pub(crate) struct RawVisit<A: RawAlgo> {
    pub collection: A::Collection,
    pub visited: TypedBitSet<VertexId>,
}

impl<A: RawAlgo> RawVisit<A> {
    pub fn new(vertex_count: usize) -> Self {
        Self {
            collection: A::Collection::default(),
            visited: TypedBitSet::with_capacity(vertex_count),
        }
    }

    pub fn start(&mut self, root: A::Item) {
        if A::visit_on_start() {
            self.visited.visit(A::id(&root));
        }

        self.collection.clear();
        self.collection.push(root);
    }

    // Seeds the collection with all roots at once, so that they are all
    // discovered before any other vertex.
    pub fn start_seeded<I>(&mut self, roots: I)
    where
        I: IntoIterator<Item = VertexId>,
    {
        self.collection.clear();

        for root in roots {
            if A::visit_on_start() {
                if self.visited.visit(root) {
                    self.collection.push(A::start(root));
                }
            } else if !self.visited.is_visited(&root) {
                self.collection.push(A::start(root));
            }
        }
    }

    pub fn reset(&mut self) {
        self.collection.clear();
        self.visited.reset_visited();
    }
}

pub(crate) struct RawVisitMulti<A, S> {
    pub roots: S,
    ty: PhantomData<A>,
}

impl<A: RawAlgo, S: VisitRoots> RawVisitMulti<A, S> {
    pub fn new(roots: S) -> Self {
        Self {
            roots,
            ty: PhantomData,
        }
    }

    pub fn next_multi<F, R>(&mut self, raw: &mut RawVisit<A>, mut get_next: F) -> Option<R>
    where
        F: FnMut(&mut RawVisit<A>) -> Option<R>,
    {
        match get_next(raw) {
            Some(next) => Some(next),
            None => {
                if self.roots.is_done(&raw.visited) {
                    return None;
                }

                let root = std::iter::from_fn(|| self.roots.next_root())
                    .find(|v| !raw.visited.is_visited(v))?;

                raw.start(A::start(root));
                get_next(raw)
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RawEvent {
    Popped { vertex: VertexId },
    Push { vertex: VertexId, from: VertexId },
    Skip { vertex: VertexId, from: VertexId },
}

pub enum RawBfs {}

impl RawAlgo for RawBfs {
    type Item = VertexId;
    type Collection = Queue<VertexId>;

    fn id(item: &VertexId) -> VertexId {
        *item
    }

    fn start(id: VertexId) -> VertexId {
        id
    }

    fn visit_on_start() -> bool {
        true
    }
}

pub enum RawDfs {}

impl RawAlgo for RawDfs {
    type Item = VertexId;
    type Collection = Stack<VertexId>;

    fn id(item: &VertexId) -> VertexId {
        *item
    }

    fn start(id: VertexId) -> VertexId {
        id
    }

    fn visit_on_start() -> bool {
        true
    }
}

// Both worklist traversals mark a vertex when it is pushed, so every vertex
// enters the collection at most once. They differ only in the collection.
fn worklist_next<A, G, F>(raw: &mut RawVisit<A>, graph: &G, mut f: F) -> Option<VertexId>
where
    A: RawAlgo<Item = VertexId>,
    G: Neighbors,
    F: FnMut(RawEvent),
{
    let v = raw.collection.pop()?;
    f(RawEvent::Popped { vertex: v });

    for &u in graph.neighbors(v) {
        if raw.visited.visit(u) {
            f(RawEvent::Push { vertex: u, from: v });
            raw.collection.push(u);
        } else {
            f(RawEvent::Skip { vertex: u, from: v });
        }
    }

    Some(v)
}

impl RawVisit<RawBfs> {
    pub fn next<G, F>(&mut self, graph: &G, f: F) -> Option<VertexId>
    where
        G: Neighbors,
        F: FnMut(RawEvent),
    {
        worklist_next(self, graph, f)
    }
}

impl RawVisit<RawDfs> {
    pub fn next<G, F>(&mut self, graph: &G, f: F) -> Option<VertexId>
    where
        G: Neighbors,
        F: FnMut(RawEvent),
    {
        worklist_next(self, graph, f)
    }
}

pub enum RawDfsExtra {}

// A frame of the simulated call stack of recursive DFS: the vertex and the
// position of the next neighbor to examine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawDfsExtraItem {
    vertex: VertexId,
    cursor: usize,
}

impl RawDfsExtraItem {
    pub fn start(root: VertexId) -> Self {
        Self {
            vertex: root,
            cursor: 0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RawDfsExtraEvent {
    Open(VertexId),
    Close(VertexId),
}

// Stack of "iterators" as described in
// https://11011110.github.io/blog/2013/12/17/stack-based-graph-traversal.html.
// This is needed to report events in exactly the order of recursive DFS
// (neighbors examined in adjacency order, a vertex closed only after all its
// descendants), which is what lowlink-based algorithms rely on.
impl RawAlgo for RawDfsExtra {
    type Item = RawDfsExtraItem;
    type Collection = Stack<RawDfsExtraItem>;

    fn id(item: &RawDfsExtraItem) -> VertexId {
        item.vertex
    }

    fn start(id: VertexId) -> RawDfsExtraItem {
        RawDfsExtraItem::start(id)
    }

    fn visit_on_start() -> bool {
        false
    }
}

impl RawVisit<RawDfsExtra> {
    pub fn next<G, F>(&mut self, graph: &G, mut f: F) -> Option<RawDfsExtraEvent>
    where
        G: Neighbors,
        F: FnMut(RawEvent),
    {
        let mut item = self.collection.pop()?;
        let v = item.vertex;

        if self.visited.visit(v) {
            // Non-root vertices are marked when discovered, so only a root
            // that has not been expanded yet gets here.
            self.collection.push(item);
            return Some(RawDfsExtraEvent::Open(v));
        }

        let neighbors = graph.neighbors(v);

        while let Some(&u) = neighbors.get(item.cursor) {
            item.cursor += 1;

            if self.visited.visit(u) {
                f(RawEvent::Push { vertex: u, from: v });

                // Not all neighbors processed yet. Return the vertex back to
                // the stack before descending into its neighbor.
                self.collection.push(item);
                self.collection.push(RawDfsExtraItem::start(u));
                return Some(RawDfsExtraEvent::Open(u));
            } else {
                f(RawEvent::Skip { vertex: u, from: v });
            }
        }

        // All neighbors exhausted.
        Some(RawDfsExtraEvent::Close(v))
    }
}
