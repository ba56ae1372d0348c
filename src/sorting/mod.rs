//! Ordering algorithms instrumented with comparison counting.
//!
//! Comparison sorts are generic over an `Ordering`-returning comparator
//! and count exactly one comparison per comparator invocation. The radix
//! variants order by extracted keys and never invoke a comparator.

pub mod bubble_sort;
pub mod heap_sort;
pub mod insertion_sort;
pub mod merge_sort;
pub mod quick_sort;
pub mod radix_sort;
pub mod selection_sort;
pub mod shell_sort;
pub mod tree_sort;

pub use bubble_sort::bubble_sort;
pub use heap_sort::heap_sort;
pub use insertion_sort::insertion_sort;
pub use merge_sort::merge_sort;
pub use quick_sort::{quick_sort, quick_sort_median};
pub use radix_sort::{counting_sort_by_byte, radix_sort_by_key, radix_sort_by_name};
pub use selection_sort::selection_sort;
pub use shell_sort::{shell_sort, GapSequence};
pub use tree_sort::{avl_tree_sort, tree_sort};
