use std::collections::VecDeque;

use super::*;

use super::raw::{
    RawDfs, RawDfsExtra, RawDfsExtraEvent, RawDfsExtraItem, RawEvent, RawVisit, RawVisitMulti,
};

use crate::core::{GraphBase, Neighbors};

/// Depth-first traversal driven by a plain stack.
///
/// Vertices are marked when pushed to the stack, so the visiting order is
/// not the order of a recursive depth-first search. Use [`DfsEvents`] when
/// that matters.
pub struct Dfs {
    raw: RawVisit<RawDfs>,
}

pub struct DfsRooted<'a> {
    raw: &'a mut RawVisit<RawDfs>,
}

impl Dfs {
    pub fn new<G: GraphBase>(graph: &G) -> Self {
        Self {
            raw: RawVisit::new(graph.vertex_count()),
        }
    }

    pub fn start(&mut self, root: VertexId) -> DfsRooted<'_> {
        self.raw.start(root);
        DfsRooted { raw: &mut self.raw }
    }

    /// Starts the traversal with all given roots pushed to the stack at once.
    pub fn start_multi<I>(&mut self, roots: I) -> DfsRooted<'_>
    where
        I: IntoIterator<Item = VertexId>,
    {
        self.raw.start_seeded(roots);
        DfsRooted { raw: &mut self.raw }
    }

    pub fn reset(&mut self) {
        self.raw.reset();
    }

    pub fn visited(&self) -> &TypedBitSet<VertexId> {
        &self.raw.visited
    }
}

impl<'a> DfsRooted<'a> {
    // Advances the traversal, reporting every examined edge to the callback.
    pub(crate) fn visit_next_with<G, F>(&mut self, graph: &G, f: F) -> Option<VertexId>
    where
        G: Neighbors,
        F: FnMut(RawEvent),
    {
        self.raw.next(graph, f)
    }
}

impl<'a, G> Visitor<G> for DfsRooted<'a>
where
    G: Neighbors,
{
    type Item = VertexId;

    fn visit_next(&mut self, graph: &G) -> Option<Self::Item> {
        self.raw.next(graph, |_| {})
    }
}

/// Depth-first traversal reporting [events](DfsEvent).
///
/// The traversal simulates the call stack of the recursive algorithm, so the
/// events come in the same order as if reported by recursive depth-first
/// search.
///
/// Only directed edge classification is provided. In an undirected graph,
/// the edge back to the parent is reported as a [back
/// edge](DfsEvent::BackEdge).
pub struct DfsEvents {
    raw: RawVisit<RawDfsExtra>,
    closed: TypedBitSet<VertexId>,
}

pub struct DfsEventsRooted<'a> {
    raw: &'a mut RawVisit<RawDfsExtra>,
    closed: &'a mut TypedBitSet<VertexId>,
    queue: VecDeque<DfsEvent>,
    time: usize,
}

pub struct DfsEventsMulti<'a, S>
where
    S: VisitRoots,
{
    raw: &'a mut RawVisit<RawDfsExtra>,
    multi: RawVisitMulti<RawDfsExtra, S>,
    closed: &'a mut TypedBitSet<VertexId>,
    queue: VecDeque<DfsEvent>,
    time: usize,
}

impl DfsEvents {
    pub fn new<G: GraphBase>(graph: &G) -> Self {
        let count = graph.vertex_count();

        Self {
            raw: RawVisit::new(count),
            closed: TypedBitSet::with_capacity(count),
        }
    }

    pub fn start(&mut self, root: VertexId) -> DfsEventsRooted<'_> {
        self.raw.start(RawDfsExtraItem::start(root));
        DfsEventsRooted {
            raw: &mut self.raw,
            closed: &mut self.closed,
            queue: VecDeque::new(),
            time: 0,
        }
    }

    /// Traverses the whole graph, starting a new traversal tree from every
    /// vertex not yet visited, in insertion order.
    pub fn start_all<G: VertexSet>(&mut self, graph: &G) -> DfsEventsMulti<'_, VisitAll> {
        self.start_multi(VisitAll::new(graph))
    }

    pub fn start_multi<S>(&mut self, roots: S) -> DfsEventsMulti<'_, S>
    where
        S: VisitRoots,
    {
        DfsEventsMulti {
            raw: &mut self.raw,
            multi: RawVisitMulti::new(roots),
            closed: &mut self.closed,
            queue: VecDeque::new(),
            time: 0,
        }
    }

    pub fn reset(&mut self) {
        self.raw.reset();
        self.closed.reset_visited();
    }

    pub fn visited(&self) -> &TypedBitSet<VertexId> {
        &self.raw.visited
    }

    fn process_raw_event(
        raw_event: RawEvent,
        closed: &TypedBitSet<VertexId>,
        queue: &mut VecDeque<DfsEvent>,
    ) {
        match raw_event {
            RawEvent::Popped { .. } => {}
            RawEvent::Push { vertex, from } => {
                queue.push_back(DfsEvent::TreeEdge { from, to: vertex });
            }
            RawEvent::Skip { vertex, from } => {
                if closed.is_visited(&vertex) {
                    queue.push_back(DfsEvent::CrossForwardEdge { from, to: vertex });
                } else {
                    queue.push_back(DfsEvent::BackEdge { from, to: vertex });
                }
            }
        }
    }

    fn process_extra_event(
        raw_extra_event: RawDfsExtraEvent,
        closed: &mut TypedBitSet<VertexId>,
        queue: &mut VecDeque<DfsEvent>,
        time: &mut usize,
    ) {
        let event = match raw_extra_event {
            RawDfsExtraEvent::Open(vertex) => DfsEvent::Open {
                vertex,
                time: Time(*time),
            },
            RawDfsExtraEvent::Close(vertex) => {
                closed.visit(vertex);
                DfsEvent::Close {
                    vertex,
                    time: Time(*time),
                }
            }
        };

        *time += 1;
        queue.push_back(event);
    }
}

impl<'a, G> Visitor<G> for DfsEventsRooted<'a>
where
    G: Neighbors,
{
    type Item = DfsEvent;

    fn visit_next(&mut self, graph: &G) -> Option<Self::Item> {
        if let Some(event) = self.queue.pop_front() {
            return Some(event);
        }

        let closed = &mut *self.closed;
        let queue = &mut self.queue;

        if let Some(raw_extra_event) = self
            .raw
            .next(graph, |raw_event| DfsEvents::process_raw_event(raw_event, closed, queue))
        {
            DfsEvents::process_extra_event(raw_extra_event, closed, queue, &mut self.time);
        }

        self.queue.pop_front()
    }
}

impl<'a, S, G> Visitor<G> for DfsEventsMulti<'a, S>
where
    G: Neighbors,
    S: VisitRoots,
{
    type Item = DfsEvent;

    fn visit_next(&mut self, graph: &G) -> Option<Self::Item> {
        if let Some(event) = self.queue.pop_front() {
            return Some(event);
        }

        let closed = &mut *self.closed;
        let queue = &mut self.queue;

        if let Some(raw_extra_event) = self.multi.next_multi(self.raw, |raw| {
            raw.next(graph, |raw_event| {
                DfsEvents::process_raw_event(raw_event, closed, queue)
            })
        }) {
            DfsEvents::process_extra_event(raw_extra_event, closed, queue, &mut self.time);
        }

        self.queue.pop_front()
    }
}
