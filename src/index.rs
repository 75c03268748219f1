//! Index arithmetic for a paged, d-ary implicit heap.
//!
//! A heap is a tree-like structure where every subtree's root has a better
//! score than all the other nodes in the subtree. It's stored as a flat
//! array traversed in a non-linear way; this module is the map between a
//! node's position in the tree and its index in that array.
//!
//! With `P == 1` this is the textbook d-ary layout:
//!
//!                           0
//!              1     2     3     4           <- F = 4
//!        5 6 7 8  9 10 11 12  ...
//!
//!   - Up:          (i-1) / F
//!   - First child:  i*F + 1
//!
//! With `P > 1`, indices `1 ..= F*P` (page 0) are laid out so that slots
//! `[0, P)` are nodes whose children live on the *next* page, while slots
//! `[P, F*P)` hold `F`-wide runs of children for parents on the *same*
//! page. That's the whole point of paging: a sift-down that stays within
//! one page never leaves a handful of cache lines.

/// Sentinel returned by [`HeapLayout::first_child`] when the true child
/// index would overflow `usize`. Callers descending the tree always
/// compare the result against the heap length before using it, so this
/// never needs to be distinguishable from a "real" index by any other
/// means.
pub const NO_CHILD: usize = usize::MAX;

/// The index arithmetic for a heap of fanout `F` and page factor `P`.
///
/// `HeapLayout` carries no state; `F` and `P` are compile-time constants
/// so the division/modulo chains below collapse to shifts and multiplies
/// for the common choices (`F` a power of two).
pub struct HeapLayout<const F: usize, const P: usize>;

impl<const F: usize, const P: usize> HeapLayout<F, P> {
    /// Slots per page beyond the root.
    pub const PAGE_SIZE: usize = F * P;
    /// Leaves per page that receive a child page.
    pub const PAGE_LEAVES: usize = (F - 1) * P + 1;

    /// Forces the `F >= 2`/`P >= 1` compile-time check below to run.
    const CHECK_PARAMS: () = {
        assert!(F >= 2, "fanout F must be at least 2");
        assert!(P >= 1, "page factor P must be at least 1");
    };

    /// The parent of `u`.
    ///
    /// # Precondition
    /// `u > 0`; the root has no parent.
    ///
    /// ```
    /// use dpheap::index::HeapLayout;
    ///
    /// type Heap4 = HeapLayout<4, 1>;
    /// assert_eq!(Heap4::parent(1), 0);
    /// assert_eq!(Heap4::parent(4), 0);
    /// assert_eq!(Heap4::parent(5), 1);
    /// ```
    #[inline(always)]
    #[must_use]
    pub fn parent(u: usize) -> usize {
        let _ = Self::CHECK_PARAMS;
        debug_assert!(u > 0, "index_parent: root has no parent");

        if P == 1 {
            return (u - 1) / F;
        }

        let u1 = u - 1;
        if u1 < F {
            return 0;
        }
        let v = u1 % Self::PAGE_SIZE;
        if v >= F {
            // Parent and child share a page.
            u1 - v + v / F
        } else {
            // Parent lives on the previous page.
            let w = u1 / Self::PAGE_SIZE - 1;
            (w / Self::PAGE_LEAVES + 1) * Self::PAGE_SIZE + (w % Self::PAGE_LEAVES) - Self::PAGE_LEAVES + 1
        }
    }

    /// The index of the first of `u`'s `F` children, or [`NO_CHILD`] if
    /// that index would overflow.
    ///
    /// Callers walking downward must compare against the heap length
    /// before dereferencing, which they naturally do anyway.
    ///
    /// ```
    /// use dpheap::index::HeapLayout;
    ///
    /// type Heap4 = HeapLayout<4, 1>;
    /// assert_eq!(Heap4::first_child(0), 1);
    /// assert_eq!(Heap4::first_child(1), 5);
    /// ```
    #[inline(always)]
    #[must_use]
    pub fn first_child(u: usize) -> usize {
        let _ = Self::CHECK_PARAMS;

        if P == 1 {
            if u > (usize::MAX - 1) / F {
                return NO_CHILD;
            }
            return u * F + 1;
        }

        if u == 0 {
            return 1;
        }
        let u1 = u - 1;
        let v = (u1 % Self::PAGE_SIZE) + 1;
        if v < Self::PAGE_SIZE / F {
            // Children share the page.
            let v1 = v * (F - 1);
            if u1 > usize::MAX - 2 - v1 {
                return NO_CHILD;
            }
            u1 + v1 + 2
        } else {
            // Children live on a later page.
            let v2 = v + (u1 / Self::PAGE_SIZE + 1) * Self::PAGE_LEAVES - Self::PAGE_SIZE;
            if v2 > (usize::MAX - 1) / Self::PAGE_SIZE {
                return NO_CHILD;
            }
            v2 * Self::PAGE_SIZE + 1
        }
    }
}

/// A plain, non-paged 4-ary heap. A strong general-purpose default.
pub type Heap4 = HeapLayout<4, 1>;
/// A plain binary heap (`F = 2, P = 1`).
pub type Heap2 = HeapLayout<2, 1>;
/// A binary heap laid out in 512-slot cache pages.
pub type PagedHeap2x512 = HeapLayout<2, 512>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn simple_layout_round_trips() {
        type H = HeapLayout<4, 1>;
        for u in 1..1000usize {
            let c = H::first_child(u);
            if c == NO_CHILD {
                continue;
            }
            for j in 0..4 {
                assert_eq!(H::parent(c + j), u, "u={u} c={c} j={j}");
            }
        }
    }

    #[test]
    fn binary_layout_matches_textbook() {
        type H = HeapLayout<2, 1>;
        assert_eq!(H::parent(1), 0);
        assert_eq!(H::parent(2), 0);
        assert_eq!(H::parent(3), 1);
        assert_eq!(H::parent(4), 1);
        assert_eq!(H::first_child(0), 1);
        assert_eq!(H::first_child(1), 3);
    }

    #[test]
    fn paged_layout_round_trips() {
        // page_size = 4, page_leaves = 3.
        type H = HeapLayout<2, 2>;
        assert_eq!(H::PAGE_SIZE, 4);
        assert_eq!(H::PAGE_LEAVES, 3);
        assert_eq!(H::first_child(0), 1);

        for u in 0..1000usize {
            let c = H::first_child(u);
            if c == NO_CHILD {
                continue;
            }
            assert_eq!(H::parent(c), u, "fast/slow path mismatch at u={u}, c={c}");
        }
    }

    #[test]
    fn paged_fast_and_slow_paths_both_exercised() {
        type H = HeapLayout<2, 2>;
        // u=1: child (3) shares page 0 with parent 1.
        let fast = H::first_child(1);
        assert!(fast < 1 + H::PAGE_SIZE);
        // u=3: child lands on the next page.
        let slow = H::first_child(3);
        assert!(slow >= 1 + H::PAGE_SIZE);
    }

    #[test]
    fn first_child_overflows_to_sentinel() {
        type H = HeapLayout<4, 1>;
        assert_eq!(H::first_child(usize::MAX), NO_CHILD);
        assert_eq!(H::first_child(usize::MAX / 2), NO_CHILD);
    }
}
