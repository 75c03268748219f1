//! N-way merge of already-ascending input ranges, built on top of a heap
//! of range cursors keyed by each range's current head element.
//!
//! Grounded in the same "heap of cursors" idea as a k-way-merge-over-a-
//! heap-of-iterators implementation, adapted to this crate's explicit
//! decrease-fix protocol instead of a swap-and-reinsert one.
//!
//! Like [`crate::heap`], this comes in a `*_by` form taking an explicit
//! comparator and a plain form for `T: Ord`.

use crate::heap::make_heap_by;
use crate::heap::restore_heap_after_item_decrease_by;

/// A non-empty, ascending-sorted input range for [`nway_merge_by`].
///
/// Wraps a caller-owned slice with a `begin` cursor that advances toward
/// `end` as the merge consumes it; `end` is simply the slice's length.
pub struct InputRange<'a, T> {
    data: &'a [T],
    begin: usize,
}

impl<'a, T> InputRange<'a, T> {
    /// Wraps `data` as an input range.
    ///
    /// # Precondition
    /// `data` is non-empty and already sorted ascending under the
    /// comparator `nway_merge_by` will be called with.
    pub fn new(data: &'a [T]) -> Self {
        debug_assert!(!data.is_empty(), "nway_merge input ranges must be non-empty");
        InputRange { data, begin: 0 }
    }

    #[inline(always)]
    fn head(&self) -> &T {
        &self.data[self.begin]
    }

    #[inline(always)]
    fn is_exhausted(&self) -> bool {
        self.begin >= self.data.len()
    }

    #[inline(always)]
    fn advance(&mut self) {
        self.begin += 1;
    }
}

/// Merges `ranges` into `out` in ascending order under `less`.
///
/// `out` must have room for exactly the sum of the input ranges'
/// lengths; only that many slots are written.
///
/// # Precondition
/// `ranges` is non-empty and every range in it is non-empty.
///
/// ```
/// use dpheap::merge::{nway_merge_by, InputRange};
///
/// let a = [1, 4, 7];
/// let b = [2, 5, 8];
/// let c = [3, 6, 9];
/// let mut ranges = vec![InputRange::new(&a), InputRange::new(&b), InputRange::new(&c)];
/// let mut out = [0; 9];
/// nway_merge_by::<_, _, 2, 1>(&mut ranges, &mut out, |x: &i32, y: &i32| x < y);
/// assert_eq!(out, [1, 2, 3, 4, 5, 6, 7, 8, 9]);
/// ```
pub fn nway_merge_by<T, L, const F: usize, const P: usize>(
    ranges: &mut [InputRange<'_, T>],
    out: &mut [T],
    mut less: L,
) where
    T: Clone,
    L: FnMut(&T, &T) -> bool,
{
    debug_assert!(!ranges.is_empty(), "nway_merge needs at least one input range");
    for r in ranges.iter() {
        debug_assert!(!r.is_exhausted(), "nway_merge input ranges must be non-empty on entry");
    }

    // Range-of-ranges comparator: compares by current head, reversed, so
    // the heap rooted at index 0 holds the range whose head is
    // smallest.
    let mut rless = |a: &InputRange<'_, T>, b: &InputRange<'_, T>| less(b.head(), a.head());

    make_heap_by::<_, _, F, P>(ranges, &mut rless);

    let mut heap_len = ranges.len();
    let mut out_pos = 0usize;

    while heap_len > 0 {
        let head_value = ranges[0].head().clone();
        out[out_pos] = head_value;
        out_pos += 1;
        ranges[0].advance();

        if ranges[0].is_exhausted() {
            ranges.swap(0, heap_len - 1);
            heap_len -= 1;
            if heap_len == 0 {
                break;
            }
        }
        // Either the root range's head just grew (a "decrease" of its
        // heap key from the reversed comparator's point of view), or a
        // different range was just swapped into the root and needs to
        // sift into place — both are a plain sift-down from 0.
        restore_heap_after_item_decrease_by::<_, _, F, P>(&mut ranges[..heap_len], 0, &mut rless);
    }

    debug_assert_eq!(out_pos, out.len());
}

/// [`nway_merge_by`] using `T`'s natural order.
///
/// ```
/// use dpheap::merge::{nway_merge, InputRange};
///
/// let a = [1, 4, 7];
/// let b = [2, 5, 8];
/// let c = [3, 6, 9];
/// let mut ranges = vec![InputRange::new(&a), InputRange::new(&b), InputRange::new(&c)];
/// let mut out = [0; 9];
/// nway_merge::<_, 2, 1>(&mut ranges, &mut out);
/// assert_eq!(out, [1, 2, 3, 4, 5, 6, 7, 8, 9]);
/// ```
pub fn nway_merge<T, const F: usize, const P: usize>(ranges: &mut [InputRange<'_, T>], out: &mut [T])
where
    T: Ord + Clone,
{
    nway_merge_by::<T, _, F, P>(ranges, out, |a, b| a < b)
}
