//! Search trees with counted comparisons.

pub mod avl;
pub mod bst;

pub use avl::Avl;
pub use bst::Bst;
