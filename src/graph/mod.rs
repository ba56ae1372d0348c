//! Undirected graph representations with counted operations, and BFS
//! shortest paths over the matrix form.

pub mod adj_list;
pub mod adj_matrix;
pub mod bfs;

pub use adj_list::AdjList;
pub use adj_matrix::AdjMatrix;
pub use bfs::{shortest_paths, BfsTree};
