//! Frontier for Dijkstra: a binary min-heap of vertex labels with a
//! label→slot index, so membership and key lookups are O(1) and
//! decrease-key / extract-min are O(log n).
use crate::error::DecreaseKeyError;
use crate::{Distance, Node};

#[derive(Clone, Debug, Default)]
pub struct IndexedMinHeap {
    heap: Vec<Node>,
    pos: Vec<Option<usize>>,
    keys: Vec<Distance>,
}

impl IndexedMinHeap {
    /// Queues every vertex `0..keys.len()` with its initial key. O(n) heapify.
    pub fn init(keys: Vec<Distance>) -> Self {
        let n = keys.len();
        let mut h = Self { heap: (0..n).collect(), pos: (0..n).map(Some).collect(), keys };
        for i in (0..n / 2).rev() { h.sift_down(i); }
        h
    }

    pub fn len(&self) -> usize { self.heap.len() }
    pub fn is_empty(&self) -> bool { self.heap.is_empty() }

    pub fn contains(&self, label: Node) -> bool {
        matches!(self.pos.get(label), Some(Some(_)))
    }

    /// Key of `label` itself, or `None` once it has left the frontier.
    pub fn key(&self, label: Node) -> Option<Distance> {
        if self.contains(label) { Some(self.keys[label]) } else { None }
    }

    pub fn peek_min(&self) -> Option<(Node, Distance)> {
        self.heap.first().map(|&v| (v, self.keys[v]))
    }

    /// Removes the vertex with the smallest key; equal keys go lowest label first.
    pub fn extract_min(&mut self) -> Option<(Node, Distance)> {
        let last = self.heap.len().checked_sub(1)?;
        self.swap(0, last);
        let v = self.heap.pop()?;
        self.pos[v] = None;
        if !self.heap.is_empty() { self.sift_down(0); }
        Some((v, self.keys[v]))
    }

    /// Lowers the key of a queued vertex. Leaves the heap untouched unless
    /// `key` is strictly smaller than the current one.
    pub fn decrease_key(&mut self, label: Node, key: Distance) -> Result<(), DecreaseKeyError> {
        let slot = match self.pos.get(label) {
            Some(&Some(slot)) => slot,
            _ => return Err(DecreaseKeyError::NotQueued(label)),
        };
        let current = self.keys[label];
        if key >= current {
            return Err(DecreaseKeyError::NotSmaller { label, current, requested: key });
        }
        self.keys[label] = key;
        self.sift_up(slot);
        Ok(())
    }

    fn less(&self, a: Node, b: Node) -> bool {
        (self.keys[a], a) < (self.keys[b], b)
    }

    fn swap(&mut self, i: usize, j: usize) {
        self.heap.swap(i, j);
        self.pos[self.heap[i]] = Some(i);
        self.pos[self.heap[j]] = Some(j);
    }

    fn sift_up(&mut self, mut i: usize) {
        while i > 0 {
            let parent = (i - 1) / 2;
            if !self.less(self.heap[i], self.heap[parent]) { break; }
            self.swap(i, parent);
            i = parent;
        }
    }

    fn sift_down(&mut self, mut i: usize) {
        let n = self.heap.len();
        loop {
            let (l, r) = (2 * i + 1, 2 * i + 2);
            let mut smallest = i;
            if l < n && self.less(self.heap[l], self.heap[smallest]) { smallest = l; }
            if r < n && self.less(self.heap[r], self.heap[smallest]) { smallest = r; }
            if smallest == i { break; }
            self.swap(i, smallest);
            i = smallest;
        }
    }
}
