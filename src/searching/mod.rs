//! Lookup algorithms instrumented with comparison counting.

pub mod binary_search;
pub mod linear_search;
pub mod table;

pub use binary_search::binary_search;
pub use linear_search::linear_search;
