use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

use ordered_float::OrderedFloat;
use rustc_hash::FxHashMap;

use crate::state::{PuzzleError, State};

#[derive(Clone, Debug)]
struct Entry {
    priority: OrderedFloat<f32>,
    seq: u64,
    state: State,
}

impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.priority == other.priority && self.seq == other.seq
    }
}

impl Eq for Entry {}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Equal priorities resolve in insertion order.
        self.priority
            .cmp(&other.priority)
            .then_with(|| self.seq.cmp(&other.seq))
    }
}

/// Min-priority queue with decrease-key by lazy invalidation: re-pushing a
/// state supersedes its old entry, which stays in the heap until pop skips
/// it. At most one live entry exists per canonical key.
#[derive(Default)]
pub struct PriorityQueue {
    heap: BinaryHeap<Reverse<Entry>>,
    live: FxHashMap<String, u64>,
    counter: u64,
}

impl PriorityQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, state: State, priority: f32) {
        let seq = self.counter;
        self.counter += 1;

        self.live.insert(state.key().to_string(), seq);
        self.heap.push(Reverse(Entry {
            priority: OrderedFloat(priority),
            seq,
            state,
        }));
    }

    pub fn pop(&mut self) -> Result<(f32, State), PuzzleError> {
        while let Some(Reverse(entry)) = self.heap.pop() {
            match self.live.get(entry.state.key()) {
                Some(&seq) if seq == entry.seq => {
                    self.live.remove(entry.state.key());
                    return Ok((entry.priority.into_inner(), entry.state));
                }
                // Superseded entry, discard and keep looking.
                _ => continue,
            }
        }

        Err(PuzzleError::EmptyQueue)
    }

    pub fn is_empty(&self) -> bool {
        self.live.is_empty()
    }

    pub fn len(&self) -> usize {
        self.live.len()
    }
}
