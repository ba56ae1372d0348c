//! Breadth-first shortest paths on an unweighted graph.
//!
//! Variables:
//!   dist[v]   = edge count on a shortest path src..v, None if unreachable
//!   parent[v] = predecessor of v on that path, None for src and
//!               unreachable vertices
//!
//! Equations:
//!   dist[src] = 0
//!   dist[v]   = dist[parent[v]] + 1
//!   runtime     O(V^2) over the matrix form

use std::collections::VecDeque;

use serde::Serialize;

use super::adj_matrix::AdjMatrix;
use crate::metrics::Metrics;

#[derive(Debug, Serialize)]
pub struct BfsTree {
    pub source: usize,
    pub dist: Vec<Option<u32>>,
    pub parent: Vec<Option<usize>>,
}

impl BfsTree {
    /// Reconstruct the vertex sequence src..=target by walking parent
    /// links backwards. None when target is unreachable.
    pub fn path_to(&self, target: usize) -> Option<Vec<usize>> {
        if target >= self.dist.len() || self.dist[target].is_none() {
            return None;
        }
        let mut path = vec![target];
        let mut cur = target;
        while let Some(p) = self.parent[cur] {
            path.push(p);
            cur = p;
        }
        path.reverse();
        Some(path)
    }
}

pub fn shortest_paths(graph: &AdjMatrix, source: usize, metrics: &mut Metrics) -> BfsTree {
    let n = graph.vertex_count();
    let mut dist: Vec<Option<u32>> = vec![None; n];
    let mut parent: Vec<Option<usize>> = vec![None; n];
    let mut queue = VecDeque::new();

    if source < n {
        dist[source] = Some(0);
        queue.push_back(source);
    }

    while let Some(u) = queue.pop_front() {
        let d = dist[u].unwrap_or(0);
        for v in graph.neighbors(u, metrics) {
            if dist[v].is_none() {
                dist[v] = Some(d + 1);
                parent[v] = Some(u);
                queue.push_back(v);
            }
        }
    }

    BfsTree {
        source,
        dist,
        parent,
    }
}
