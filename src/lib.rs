//! # Algolab Crate
//!
//! Comparison-counted data structures and algorithms, organized by
//! category, with benchmark drivers that pit them against each other
//! on generated or CSV-loaded datasets.
//!
//! ## Modules
//!
//! - `metrics` – Comparison and auxiliary-memory counters threaded through every algorithm
//! - `student` – The shared CSV record, its comparators and loader
//! - `dataset` – Seeded random and deterministic dataset generators
//! - `grammar` – Parenthesized binary-tree grammar (precheck, validator, builder)
//! - `tree_array` – Array-backed binary tree with iterative traversals
//! - `searching` – Lookup algorithms (linear, binary, counted table ops)
//! - `trees` – Binary search tree & AVL tree with counted operations
//! - `sorting` – Ordering algorithms (bubble through radix and tree sort)
//! - `graph` – Adjacency matrix/list comparison & BFS shortest paths
//! - `harness` – Benchmark drivers aggregating counts into reports
//!
//! ---
//!
//! ## Usage Example
//!
//! ```rust
//! use algolab::metrics::Metrics;
//! use algolab::sorting::merge_sort;
//!
//! let mut data = vec![3, 1, 2];
//! let mut metrics = Metrics::new();
//! merge_sort(&mut data, &|a: &i32, b: &i32| a.cmp(b), &mut metrics);
//! assert_eq!(data, vec![1, 2, 3]);
//! assert!(metrics.comparisons > 0);
//! ```

pub mod dataset;
pub mod grammar;
pub mod graph;
pub mod harness;
pub mod metrics;
pub mod searching;
pub mod sorting;
pub mod student;
pub mod tree_array;
pub mod trees;
