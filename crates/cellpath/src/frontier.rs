use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::node::NodeId;

/// Heap entry ordered by `(heuristic, seq)`.
#[derive(Clone, Copy, Eq, PartialEq)]
struct Entry {
    heuristic: i32,
    seq: u64,
    node: NodeId,
}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed so BinaryHeap (max-heap) pops the smallest heuristic
        // first, and among equal heuristics the earliest discovered node.
        other
            .heuristic
            .cmp(&self.heuristic)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Open list of a best-first search.
///
/// Pops nodes by ascending heuristic; ties go to the node pushed first.
#[derive(Default)]
pub(crate) struct Frontier {
    heap: BinaryHeap<Entry>,
    seq: u64,
}

impl Frontier {
    pub(crate) fn clear(&mut self) {
        self.heap.clear();
        self.seq = 0;
    }

    pub(crate) fn push(&mut self, node: NodeId, heuristic: i32) {
        self.heap.push(Entry {
            heuristic,
            seq: self.seq,
            node,
        });
        self.seq += 1;
    }

    pub(crate) fn pop(&mut self) -> Option<NodeId> {
        self.heap.pop().map(|e| e.node)
    }

    pub(crate) fn len(&self) -> usize {
        self.heap.len()
    }
}
