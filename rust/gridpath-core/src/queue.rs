//! Indexed binary min-heap over a fixed universe of node ids.
//!
//! A plain heap cannot answer "is this node queued?" or re-key an entry
//! without a scan, so the heap carries an `id -> slot` index alongside it.
//! Membership and priority lookups are O(1); insert, delete-min and re-key
//! are O(log n). Ties between equal priorities are broken by heap shape
//! only, which is deterministic for identical input sequences.

use std::cmp::Ordering;

const ABSENT: u32 = u32::MAX;

#[derive(Clone, Copy, Debug)]
struct Entry {
    id: u32,
    priority: f64,
}

pub struct IndexedQueue {
    heap: Vec<Entry>,
    position: Vec<u32>,
}

impl IndexedQueue {
    /// Queue over node ids `0..universe`.
    pub fn new(universe: usize) -> Self {
        Self { heap: Vec::new(), position: vec![ABSENT; universe] }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    #[inline]
    pub fn exists(&self, id: u32) -> bool {
        self.position[id as usize] != ABSENT
    }

    pub fn priority_of(&self, id: u32) -> Option<f64> {
        let slot = self.position[id as usize];
        if slot == ABSENT {
            return None;
        }
        Some(self.heap[slot as usize].priority)
    }

    /// Add `id` with the given priority. The id must not be resident.
    pub fn insert(&mut self, id: u32, priority: f64) {
        debug_assert!(!self.exists(id), "insert of resident id {id}");
        let slot = self.heap.len();
        self.heap.push(Entry { id, priority });
        self.position[id as usize] = slot as u32;
        self.sift_up(slot);
    }

    /// Peek the lowest-priority entry.
    pub fn find_min(&self) -> Option<(u32, f64)> {
        self.heap.first().map(|e| (e.id, e.priority))
    }

    /// Remove and return the lowest-priority entry.
    pub fn delete_min(&mut self) -> Option<(u32, f64)> {
        let top = *self.heap.first()?;
        let last = self.heap.len() - 1;
        self.heap.swap(0, last);
        self.position[self.heap[0].id as usize] = 0;
        self.heap.pop();
        self.position[top.id as usize] = ABSENT;
        if !self.heap.is_empty() {
            self.sift_down(0);
        }
        Some((top.id, top.priority))
    }

    /// Re-key a resident entry, sifting whichever way the change demands.
    pub fn change_priority(&mut self, id: u32, priority: f64) {
        let slot = self.position[id as usize];
        debug_assert!(slot != ABSENT, "change_priority of absent id {id}");
        let slot = slot as usize;
        let old = self.heap[slot].priority;
        self.heap[slot].priority = priority;
        if less(priority, old) {
            self.sift_up(slot);
        } else {
            self.sift_down(slot);
        }
    }

    /// Drop every resident entry; O(len). Used to reuse the queue across
    /// queries without reallocating the position index.
    pub fn clear(&mut self) {
        for e in &self.heap {
            self.position[e.id as usize] = ABSENT;
        }
        self.heap.clear();
    }

    /// Grow or shrink the id universe, clearing any resident entries.
    pub fn reset_universe(&mut self, universe: usize) {
        self.heap.clear();
        self.position.clear();
        self.position.resize(universe, ABSENT);
    }

    fn sift_up(&mut self, mut slot: usize) {
        while slot > 0 {
            let parent = (slot - 1) / 2;
            if !less(self.heap[slot].priority, self.heap[parent].priority) {
                break;
            }
            self.swap_slots(slot, parent);
            slot = parent;
        }
    }

    fn sift_down(&mut self, mut slot: usize) {
        let len = self.heap.len();
        loop {
            let left = 2 * slot + 1;
            let right = left + 1;
            let mut smallest = slot;
            if left < len && less(self.heap[left].priority, self.heap[smallest].priority) {
                smallest = left;
            }
            if right < len && less(self.heap[right].priority, self.heap[smallest].priority) {
                smallest = right;
            }
            if smallest == slot {
                break;
            }
            self.swap_slots(slot, smallest);
            slot = smallest;
        }
    }

    #[inline]
    fn swap_slots(&mut self, a: usize, b: usize) {
        self.heap.swap(a, b);
        self.position[self.heap[a].id as usize] = a as u32;
        self.position[self.heap[b].id as usize] = b as u32;
    }
}

#[inline]
fn less(a: f64, b: f64) -> bool {
    a.partial_cmp(&b).unwrap_or(Ordering::Equal) == Ordering::Less
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basic_operations() {
        let mut q = IndexedQueue::new(8);
        assert!(q.is_empty());
        assert_eq!(q.find_min(), None);
        assert_eq!(q.delete_min(), None);

        q.insert(3, 5.0);
        assert_eq!(q.len(), 1);
        assert!(q.exists(3));
        assert_eq!(q.priority_of(3), Some(5.0));
        assert_eq!(q.find_min(), Some((3, 5.0)));

        assert_eq!(q.delete_min(), Some((3, 5.0)));
        assert!(!q.exists(3));
        assert!(q.is_empty());
    }

    #[test]
    fn orders_by_priority() {
        let mut q = IndexedQueue::new(16);
        q.insert(4, 10.0);
        q.insert(9, 5.0);
        q.insert(1, 7.5);
        q.insert(12, 6.0);

        assert_eq!(q.delete_min().unwrap().0, 9);
        assert_eq!(q.delete_min().unwrap().0, 12);
        assert_eq!(q.delete_min().unwrap().0, 1);
        assert_eq!(q.delete_min().unwrap().0, 4);
        assert!(q.is_empty());
    }

    #[test]
    fn change_priority_sifts_both_ways() {
        let mut q = IndexedQueue::new(8);
        q.insert(0, 1.0);
        q.insert(1, 2.0);
        q.insert(2, 3.0);

        // Decrease to new minimum.
        q.change_priority(2, 0.5);
        assert_eq!(q.find_min(), Some((2, 0.5)));

        // Increase past everything else.
        q.change_priority(2, 9.0);
        assert_eq!(q.find_min(), Some((0, 1.0)));
        assert_eq!(q.priority_of(2), Some(9.0));

        assert_eq!(q.delete_min().unwrap().0, 0);
        assert_eq!(q.delete_min().unwrap().0, 1);
        assert_eq!(q.delete_min().unwrap().0, 2);
    }

    #[test]
    fn position_index_survives_mixed_churn() {
        let mut q = IndexedQueue::new(32);
        for id in 0..32u32 {
            q.insert(id, f64::from((id * 7) % 13));
        }
        for id in (0..32u32).step_by(3) {
            q.change_priority(id, f64::from(id) * 0.1);
        }

        let mut last = f64::NEG_INFINITY;
        let mut seen = 0;
        while let Some((id, pri)) = q.delete_min() {
            assert!(pri >= last);
            assert!(!q.exists(id));
            last = pri;
            seen += 1;
        }
        assert_eq!(seen, 32);
    }

    #[test]
    fn clear_resets_membership() {
        let mut q = IndexedQueue::new(4);
        q.insert(0, 1.0);
        q.insert(2, 2.0);
        q.clear();
        assert!(q.is_empty());
        assert!(!q.exists(0));
        assert!(!q.exists(2));

        // Ids are insertable again after the reset.
        q.insert(0, 4.0);
        assert_eq!(q.find_min(), Some((0, 4.0)));
    }

    #[test]
    fn reset_universe_accepts_new_range() {
        let mut q = IndexedQueue::new(2);
        q.insert(1, 3.0);
        q.reset_universe(100);
        assert!(q.is_empty());
        q.insert(99, 1.0);
        assert!(q.exists(99));
    }
}
