//! Free-slot allocator backed by an index-based binary min-heap
//!
//! The heap lives in a flat `Vec<usize>`: the children of node `i` sit at
//! `2i + 1` and `2i + 2`. A parallel bitmap records which slots are currently
//! free so membership checks and the double-release guard stay O(1).

use crate::error::AllocatorError;

/// Min-priority set of free slot numbers in `1..=capacity`
#[derive(Debug, Clone)]
pub struct SlotAllocator {
    heap: Vec<usize>,
    /// `free[slot]` is true while `slot` sits in the heap; index 0 is unused
    free: Vec<bool>,
}

impl SlotAllocator {
    /// Create an allocator holding every slot from 1 to `capacity`
    ///
    /// # Panics
    /// If memory for `capacity` slots cannot be reserved. Use
    /// [`SlotAllocator::try_new`] where `capacity` comes from user input.
    pub fn new(capacity: usize) -> Self {
        match Self::try_new(capacity) {
            Ok(allocator) => allocator,
            Err(e) => panic!("cannot allocate {capacity} slots: {e}"),
        }
    }

    /// Create an allocator holding every slot from 1 to `capacity`
    ///
    /// Builds the heap bottom-up in O(n).
    ///
    /// # Returns
    /// * `Ok(SlotAllocator)` - Every slot is free
    /// * `Err(AllocatorError::CapacityTooLarge)` - The slot tables do not fit in memory
    pub fn try_new(capacity: usize) -> Result<Self, AllocatorError> {
        let too_large = |_| AllocatorError::CapacityTooLarge(capacity);
        let bitmap_len = capacity
            .checked_add(1)
            .ok_or(AllocatorError::CapacityTooLarge(capacity))?;

        let mut heap = Vec::new();
        heap.try_reserve_exact(capacity).map_err(too_large)?;
        let mut free = Vec::new();
        free.try_reserve_exact(bitmap_len).map_err(too_large)?;

        heap.extend(1..=capacity);
        free.push(false);
        free.resize(bitmap_len, true);

        let mut allocator = Self { heap, free };
        allocator.heapify();
        Ok(allocator)
    }

    /// Total number of slots this allocator manages
    pub fn capacity(&self) -> usize {
        self.free.len() - 1
    }

    /// Number of free slots
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Whether `slot` is currently free
    pub fn contains(&self, slot: usize) -> bool {
        self.free.get(slot).copied().unwrap_or(false)
    }

    /// Smallest free slot without removing it
    pub fn peek(&self) -> Option<usize> {
        self.heap.first().copied()
    }

    /// Remove and return the smallest free slot
    ///
    /// # Returns
    /// * `Ok(slot)` - The lowest-numbered free slot
    /// * `Err(AllocatorError::Empty)` - Every slot is taken
    pub fn take_smallest(&mut self) -> Result<usize, AllocatorError> {
        let last = self.heap.len().checked_sub(1).ok_or(AllocatorError::Empty)?;
        self.heap.swap(0, last);
        let slot = self.heap.pop().ok_or(AllocatorError::Empty)?;
        if !self.heap.is_empty() {
            self.sift_down(0);
        }
        self.free[slot] = false;
        Ok(slot)
    }

    /// Return a previously taken slot to the free set
    ///
    /// # Panics
    /// If `slot` is outside `1..=capacity` or is already free. Either case
    /// means the caller lost track of which slots it holds.
    pub fn release(&mut self, slot: usize) {
        assert!(
            (1..=self.capacity()).contains(&slot),
            "slot {slot} is outside 1..={}",
            self.capacity()
        );
        assert!(!self.free[slot], "slot {slot} released twice");

        self.free[slot] = true;
        self.heap.push(slot);
        self.sift_up(self.heap.len() - 1);
    }

    fn heapify(&mut self) {
        for i in (0..self.heap.len() / 2).rev() {
            self.sift_down(i);
        }
    }

    fn sift_up(&mut self, mut i: usize) {
        while i > 0 {
            let parent = (i - 1) / 2;
            if self.heap[parent] <= self.heap[i] {
                break;
            }
            self.heap.swap(parent, i);
            i = parent;
        }
    }

    fn sift_down(&mut self, mut i: usize) {
        let len = self.heap.len();
        loop {
            let left = 2 * i + 1;
            let right = left + 1;
            let mut smallest = i;

            if left < len && self.heap[left] < self.heap[smallest] {
                smallest = left;
            }
            if right < len && self.heap[right] < self.heap[smallest] {
                smallest = right;
            }
            if smallest == i {
                break;
            }
            self.heap.swap(i, smallest);
            i = smallest;
        }
    }
}
