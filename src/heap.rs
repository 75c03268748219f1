//! Public heap operations: verify, build, push, pop, sort, remove, and the
//! two "fix after an in-place update" primitives.
//!
//! Every operation works in place on `[T]` — Rust's own container-agnostic
//! random-access sequence. Any `Vec<T>`, boxed slice, or external buffer
//! that derefs to `[T]` can be handed in without this crate committing to
//! a concrete container, matching the library's deliberately narrow
//! scope: it owns no element, it only moves values within the range the
//! caller already owns.
//!
//! Every operation comes in two forms, matching the `*_by`/default-`Ord`
//! convention: a `*_by` form taking an explicit `less: FnMut(&T, &T) ->
//! bool` strict-weak-ordering comparator, and a plain form for `T: Ord`
//! that defers to the `*_by` form with `|a, b| a < b`.
//!
//! Failures here are contract violations, not recoverable errors: every
//! precondition is a `debug_assert!`, elided in release builds, exactly
//! like the intrusive heap this crate's index arithmetic was generalized
//! from. There is no `Result`, no panic-as-API.

use core::intrinsics::unlikely;

use crate::index::HeapLayout;
use crate::sift::sift_down;
use crate::sift::sift_up;

/// Returns the first position at which `data` stops being a max-heap under
/// `less`, or `data.len()` if it's a heap throughout.
///
/// O(n) comparisons.
pub fn is_heap_until_by<T, L, const F: usize, const P: usize>(data: &[T], mut less: L) -> usize
where
    L: FnMut(&T, &T) -> bool,
{
    for u in 1..data.len() {
        let p = HeapLayout::<F, P>::parent(u);
        if less(&data[p], &data[u]) {
            return u;
        }
    }
    data.len()
}

/// [`is_heap_until_by`] using `T`'s natural order.
pub fn is_heap_until<T, const F: usize, const P: usize>(data: &[T]) -> usize
where
    T: Ord,
{
    is_heap_until_by::<T, _, F, P>(data, |a, b| a < b)
}

/// Whether `data` is a max-heap under `less`.
///
/// ```
/// use dpheap::heap::{is_heap_by, make_heap_by};
///
/// let mut data = vec![3, 1, 4, 1, 5, 9, 2, 6];
/// make_heap_by::<_, _, 4, 1>(&mut data, |a: &i32, b: &i32| a < b);
/// assert!(is_heap_by::<_, _, 4, 1>(&data, |a: &i32, b: &i32| a < b));
/// ```
pub fn is_heap_by<T, L, const F: usize, const P: usize>(data: &[T], less: L) -> bool
where
    L: FnMut(&T, &T) -> bool,
{
    is_heap_until_by::<T, L, F, P>(data, less) == data.len()
}

/// [`is_heap_by`] using `T`'s natural order.
///
/// ```
/// use dpheap::heap::{is_heap, make_heap};
///
/// let mut data = vec![3, 1, 4, 1, 5, 9, 2, 6];
/// make_heap::<_, 4, 1>(&mut data);
/// assert!(is_heap::<_, 4, 1>(&data));
/// ```
pub fn is_heap<T, const F: usize, const P: usize>(data: &[T]) -> bool
where
    T: Ord,
{
    is_heap_by::<T, _, F, P>(data, |a, b| a < b)
}

/// The index `make_heap_by` starts its sift-downs from.
///
/// For `P == 1` this skips the trailing run of pure leaves, which have no
/// children to sift down into. Paging breaks the "leaves are a
/// contiguous tail" assumption the shortcut relies on, so paged heaps
/// conservatively visit every internal slot; a tighter paged leaf test is
/// possible but not required for correctness (spec-equivalent: the
/// postcondition is `is_heap`, however it's reached).
#[inline(always)]
fn make_heap_start_index<const F: usize, const P: usize>(n: usize) -> usize {
    if P == 1 { (n - 2) / F } else { n - 2 }
}

/// Reorders `data` in place into a max-heap under `less`.
///
/// O(n) comparisons and moves.
pub fn make_heap_by<T, L, const F: usize, const P: usize>(data: &mut [T], mut less: L)
where
    L: FnMut(&T, &T) -> bool,
{
    let n = data.len();
    if n <= 1 {
        return;
    }
    let start = make_heap_start_index::<F, P>(n);
    for i in (0..=start).rev() {
        sift_down::<T, _, F, P>(data, &mut less, i);
    }
    debug_assert!(is_heap_by::<T, _, F, P>(data, &mut less));
}

/// [`make_heap_by`] using `T`'s natural order.
pub fn make_heap<T, const F: usize, const P: usize>(data: &mut [T])
where
    T: Ord,
{
    make_heap_by::<T, _, F, P>(data, |a, b| a < b)
}

/// Inserts the element already sitting at `data[last - 1]` into the heap
/// formed by `data[..last - 1]`.
///
/// # Precondition
/// `data[..data.len() - 1]` is a heap under `less`.
pub fn push_heap_by<T, L, const F: usize, const P: usize>(data: &mut [T], mut less: L)
where
    L: FnMut(&T, &T) -> bool,
{
    let n = data.len();
    if n <= 1 {
        return;
    }
    debug_assert!(is_heap_by::<T, _, F, P>(&data[..n - 1], &mut less));
    sift_up::<T, _, F, P>(data, &mut less, 0, n - 1);
    debug_assert!(is_heap_by::<T, _, F, P>(data, &mut less));
}

/// [`push_heap_by`] using `T`'s natural order.
pub fn push_heap<T, const F: usize, const P: usize>(data: &mut [T])
where
    T: Ord,
{
    push_heap_by::<T, _, F, P>(data, |a, b| a < b)
}

/// Moves the current maximum to `data[data.len() - 1]` and restores the
/// heap property over `data[..data.len() - 1]`.
///
/// # Precondition
/// `data` is a heap under `less`.
pub fn pop_heap_by<T, L, const F: usize, const P: usize>(data: &mut [T], mut less: L)
where
    L: FnMut(&T, &T) -> bool,
{
    let n = data.len();
    debug_assert!(is_heap_by::<T, _, F, P>(data, &mut less));
    if unlikely(n <= 1) {
        return;
    }
    let last = n - 1;
    data.swap(0, last);
    sift_down::<T, _, F, P>(&mut data[..last], &mut less, 0);
    debug_assert!(is_heap_by::<T, _, F, P>(&data[..last], &mut less));
}

/// [`pop_heap_by`] using `T`'s natural order.
pub fn pop_heap<T, const F: usize, const P: usize>(data: &mut [T])
where
    T: Ord,
{
    pop_heap_by::<T, _, F, P>(data, |a, b| a < b)
}

/// Sorts `data` into ascending order under `less`, consuming the heap
/// property one maximum at a time.
///
/// # Precondition
/// `data` is a heap under `less`.
///
/// ```
/// use dpheap::heap::{make_heap_by, sort_heap_by};
///
/// let mut data = vec![9, 8, 7, 6, 5, 4, 3, 2, 1];
/// make_heap_by::<_, _, 2, 1>(&mut data, |a: &i32, b: &i32| a < b);
/// sort_heap_by::<_, _, 2, 1>(&mut data, |a: &i32, b: &i32| a < b);
/// assert_eq!(data, vec![1, 2, 3, 4, 5, 6, 7, 8, 9]);
/// ```
pub fn sort_heap_by<T, L, const F: usize, const P: usize>(data: &mut [T], mut less: L)
where
    L: FnMut(&T, &T) -> bool,
{
    let n = data.len();
    debug_assert!(is_heap_by::<T, _, F, P>(data, &mut less));
    for end in (2..=n).rev() {
        data.swap(0, end - 1);
        sift_down::<T, _, F, P>(&mut data[..end - 1], &mut less, 0);
    }
}

/// [`sort_heap_by`] using `T`'s natural order.
///
/// ```
/// use dpheap::heap::{make_heap, sort_heap};
///
/// let mut data = vec![9, 8, 7, 6, 5, 4, 3, 2, 1];
/// make_heap::<_, 2, 1>(&mut data);
/// sort_heap::<_, 2, 1>(&mut data);
/// assert_eq!(data, vec![1, 2, 3, 4, 5, 6, 7, 8, 9]);
/// ```
pub fn sort_heap<T, const F: usize, const P: usize>(data: &mut [T])
where
    T: Ord,
{
    sort_heap_by::<T, _, F, P>(data, |a, b| a < b)
}

/// Restores the heap property after `data[item]` has **grown**
/// (`less(old, new)` held).
///
/// # Precondition
/// `data[..item]` is a heap under `less`.
pub fn restore_heap_after_item_increase_by<T, L, const F: usize, const P: usize>(
    data: &mut [T],
    item: usize,
    mut less: L,
) where
    L: FnMut(&T, &T) -> bool,
{
    debug_assert!(item < data.len());
    debug_assert!(is_heap_by::<T, _, F, P>(&data[..item], &mut less));
    sift_up::<T, _, F, P>(data, &mut less, 0, item);
    debug_assert!(is_heap_by::<T, _, F, P>(data, &mut less));
}

/// [`restore_heap_after_item_increase_by`] using `T`'s natural order.
pub fn restore_heap_after_item_increase<T, const F: usize, const P: usize>(data: &mut [T], item: usize)
where
    T: Ord,
{
    restore_heap_after_item_increase_by::<T, _, F, P>(data, item, |a, b| a < b)
}

/// Restores the heap property after `data[item]` has **shrunk**.
///
/// # Precondition
/// `item < data.len()`.
pub fn restore_heap_after_item_decrease_by<T, L, const F: usize, const P: usize>(
    data: &mut [T],
    item: usize,
    mut less: L,
) where
    L: FnMut(&T, &T) -> bool,
{
    debug_assert!(item < data.len());
    sift_down::<T, _, F, P>(data, &mut less, item);
    debug_assert!(is_heap_by::<T, _, F, P>(data, &mut less));
}

/// [`restore_heap_after_item_decrease_by`] using `T`'s natural order.
pub fn restore_heap_after_item_decrease<T, const F: usize, const P: usize>(data: &mut [T], item: usize)
where
    T: Ord,
{
    restore_heap_after_item_decrease_by::<T, _, F, P>(data, item, |a, b| a < b)
}

/// Excises `data[item]`, leaves its value at `data[data.len() - 1]`, and
/// restores the heap property over `data[..data.len() - 1]`.
///
/// # Precondition
/// `data` is a heap under `less` and `item < data.len()`.
pub fn remove_from_heap_by<T, L, const F: usize, const P: usize>(data: &mut [T], item: usize, mut less: L)
where
    L: FnMut(&T, &T) -> bool,
{
    let n = data.len();
    debug_assert!(item < n);
    debug_assert!(is_heap_by::<T, _, F, P>(data, &mut less));

    let k = n - 1;
    if item == k {
        // The removed element is already the last slot; nothing to fix.
        return;
    }

    // Swapping puts the removed value at `k` (satisfying the
    // postcondition) and the former last element — the "displaced"
    // value — at `item`, ready for `Hole::new` to pick up.
    data.swap(item, k);

    // `data[k]` now holds the removed value, `data[item]` the displaced
    // one. If the removed value was larger than what displaced it, the
    // displaced value may now be too small for its ancestors' children
    // to respect — sift it down. Otherwise it may now exceed some
    // ancestor — sift it up.
    let removed_is_larger = less(&data[item], &data[k]);
    let heap = &mut data[..k];
    if removed_is_larger {
        sift_down::<T, _, F, P>(heap, &mut less, item);
    } else {
        sift_up::<T, _, F, P>(heap, &mut less, 0, item);
    }
    debug_assert!(is_heap_by::<T, _, F, P>(&data[..k], &mut less));
}

/// [`remove_from_heap_by`] using `T`'s natural order.
pub fn remove_from_heap<T, const F: usize, const P: usize>(data: &mut [T], item: usize)
where
    T: Ord,
{
    remove_from_heap_by::<T, _, F, P>(data, item, |a, b| a < b)
}
