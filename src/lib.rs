#![allow(internal_features)]
#![feature(core_intrinsics)]

//! A generalized d-ary, page-aware max-heap.
//!
//! The heap is parameterised by a fanout `F` (children per node) and a page
//! factor `P` (how many `F`-slot chunks are grouped per page). `F == 2, P ==
//! 1` is a classic binary heap; larger `F` trades comparisons for moves,
//! and `P > 1` clusters a parent with its children inside the same run of
//! cache lines so sift-down stays on a handful of pages instead of walking
//! the whole backing array.
//!
//! Every operation works in place on a caller-supplied `&mut [T]`: there is
//! no bundled container, no allocation, and no thread-safety of its own
//! (see [`heap`] for the borrowing contract).

// Index arithmetic
// ----------------
pub mod index;

// Sift primitives (hole propagation)
// -----------------------------------
pub mod sift;

// Public heap operations
// -----------------------
pub mod heap;

// N-way merge
// -----------
pub mod merge;

pub use heap::is_heap;
pub use heap::is_heap_by;
pub use heap::is_heap_until;
pub use heap::is_heap_until_by;
pub use heap::make_heap;
pub use heap::make_heap_by;
pub use heap::pop_heap;
pub use heap::pop_heap_by;
pub use heap::push_heap;
pub use heap::push_heap_by;
pub use heap::remove_from_heap;
pub use heap::remove_from_heap_by;
pub use heap::restore_heap_after_item_decrease;
pub use heap::restore_heap_after_item_decrease_by;
pub use heap::restore_heap_after_item_increase;
pub use heap::restore_heap_after_item_increase_by;
pub use heap::sort_heap;
pub use heap::sort_heap_by;
pub use index::HeapLayout;
pub use merge::InputRange;
pub use merge::nway_merge;
pub use merge::nway_merge_by;
