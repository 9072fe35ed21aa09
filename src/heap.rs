use crate::error::HeapError;
use std::fmt;

pub const DEFAULT_CAPACITY: usize = 2;
pub const DEFAULT_GROWTH_FACTOR: usize = 2;

/// Array-backed binary max-heap.
///
/// Positions are 1-based: the root is position 1, the parent of `p` is `p / 2`
/// and its children are `2p` and `2p + 1`. Position `p` is stored at `data[p - 1]`,
/// so there is no placeholder slot for the unused position 0.
#[derive(Clone, Debug)]
pub struct MaxHeap<T: Ord> {
    data: Vec<T>,
    // Logical slot count, grown by `growth_factor` when full. `data.len() <= capacity`.
    capacity: usize,
    growth_factor: usize,
}

pub type MinHeap<T> = MaxHeap<std::cmp::Reverse<T>>;

#[inline]
fn parent(pos: usize) -> usize {
    pos / 2
}

impl<T: Ord> MaxHeap<T> {
    /// O(1)
    #[inline]
    pub fn new() -> Self {
        Self::with_growth(DEFAULT_CAPACITY, DEFAULT_GROWTH_FACTOR)
    }

    /// O(1)
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_growth(capacity, DEFAULT_GROWTH_FACTOR)
    }

    /// Capacity is at least 1 and the growth factor at least 2, so a full heap always gains room.
    pub fn with_growth(capacity: usize, growth_factor: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            data: Vec::with_capacity(capacity),
            capacity,
            growth_factor: growth_factor.max(2),
        }
    }

    /// O(1)
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Same as [`len`](Self::len).
    #[inline]
    pub fn size(&self) -> usize {
        self.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[inline]
    pub fn growth_factor(&self) -> usize {
        self.growth_factor
    }

    /// O(1)
    #[inline]
    pub fn peek_max(&self) -> Option<&T> {
        self.data.first()
    }

    /// Elements in heap-array order (positions `1..=len`), not sorted order.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    #[inline]
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Keeps the current capacity.
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// O(log n) amortized.
    ///
    /// # Panics
    ///
    /// Panics with the `AllocationFailure` message if the storage cannot grow,
    /// either because the allocator refused or the capacity is already at `usize::MAX`.
    pub fn insert(&mut self, value: T) {
        if self.len() == self.capacity {
            self.grow();
        }
        self.data.push(value);
        self.sift_up(self.len());
    }

    /// O(log n) amortized. On `AllocationFailure` the heap is left unchanged.
    pub fn try_insert(&mut self, value: T) -> Result<(), HeapError> {
        if self.len() == self.capacity {
            self.try_grow()?;
        }
        self.data.push(value);
        self.sift_up(self.len());
        Ok(())
    }

    /// O(log n)
    pub fn remove_max(&mut self) -> Result<T, HeapError> {
        use std::mem;

        let mut res = self.data.pop().ok_or(HeapError::Empty)?;
        if let Some(root) = self.data.first_mut() {
            res = mem::replace(root, res);
            self.sift_down(1);
        }

        Ok(res)
    }

    /// O(n log n). Ascending order.
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut sorted = Vec::with_capacity(self.len());
        while let Ok(max) = self.remove_max() {
            sorted.push(max);
        }
        sorted.reverse();
        sorted
    }

    /// Checks `element(p) <= element(p / 2)` for every position `p` in `2..=len`.
    pub fn is_valid(&self) -> bool {
        (2..=self.len()).all(|pos| self.at(pos) <= self.at(parent(pos)))
    }

    #[inline]
    fn at(&self, pos: usize) -> &T {
        &self.data[pos - 1]
    }

    #[inline]
    fn swap(&mut self, a: usize, b: usize) {
        self.data.swap(a - 1, b - 1);
    }

    #[inline]
    fn next_capacity(&self) -> usize {
        self.capacity.saturating_mul(self.growth_factor)
    }

    fn grow(&mut self) {
        if let Err(err) = self.try_grow() {
            panic!("{}", err);
        }
    }

    fn try_grow(&mut self) -> Result<(), HeapError> {
        let new_capacity = self.next_capacity();
        if new_capacity == self.capacity {
            return Err(HeapError::AllocationFailure {
                requested: Some(new_capacity),
            });
        }
        self.data.try_reserve_exact(new_capacity - self.len())?;
        self.capacity = new_capacity;
        Ok(())
    }

    /// The larger child of `pos`, ties going to the left one. `None` for a leaf.
    fn child(&self, pos: usize) -> Option<usize> {
        let left = 2 * pos;
        let right = left + 1;

        if left > self.len() {
            None
        } else if right > self.len() || self.at(left) >= self.at(right) {
            Some(left)
        } else {
            Some(right)
        }
    }

    /// O(log n)
    fn sift_up(&mut self, mut pos: usize) {
        while pos > 1 {
            let parent = parent(pos);

            if self.at(pos) > self.at(parent) {
                self.swap(pos, parent);
                pos = parent;
            } else {
                break;
            }
        }
    }

    /// O(log n)
    fn sift_down(&mut self, mut pos: usize) {
        while let Some(child) = self.child(pos) {
            if self.at(pos) < self.at(child) {
                self.swap(pos, child);
                pos = child;
            } else {
                break;
            }
        }
    }
}

impl<T: Ord> Default for MaxHeap<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord> std::iter::FromIterator<T> for MaxHeap<T> {
    /// O(n) bottom-up heapify.
    fn from_iter<Iter: IntoIterator<Item = T>>(iter: Iter) -> Self {
        let mut data: Vec<T> = iter.into_iter().collect();
        let capacity = data.len().max(DEFAULT_CAPACITY);
        data.reserve_exact(capacity - data.len());

        let mut heap = Self {
            data,
            capacity,
            growth_factor: DEFAULT_GROWTH_FACTOR,
        };

        for pos in (1..=heap.len() / 2).rev() {
            heap.sift_down(pos);
        }

        heap
    }
}

impl<T: Ord> Extend<T> for MaxHeap<T> {
    fn extend<Iter: IntoIterator<Item = T>>(&mut self, iter: Iter) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<'a, T: Ord> IntoIterator for &'a MaxHeap<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: Ord + fmt::Display> fmt::Display for MaxHeap<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut iter = self.iter();
        if let Some(first) = iter.next() {
            write!(f, "{}", first)?;
            for value in iter {
                write!(f, " {}", value)?;
            }
        }
        Ok(())
    }
}
