//! Adjacency list representation.
//!
//! Variables:
//!   V       = number of vertices
//!   adj[u]  = Vec<usize> of neighbours of vertex u
//!
//! Equations:
//!   add_edge(u,v):    push into both lists          O(1), 1 check
//!   remove_edge(u,v): linear scan of both lists     O(deg)
//!   is_connected:     scan adj[u]                   O(deg)
//!   memory            grows with E, unlike the matrix form
//!
//! Counted cost: one comparison per bounds check plus one per list
//! entry inspected.

use crate::metrics::Metrics;

pub struct AdjList {
    adj: Vec<Vec<usize>>,
}

impl AdjList {
    pub fn new(vertices: usize) -> Self {
        Self {
            adj: vec![Vec::new(); vertices],
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.adj.len()
    }

    fn in_bounds(&self, u: usize, v: usize, metrics: &mut Metrics) -> bool {
        metrics.record_comparison();
        u < self.adj.len() && v < self.adj.len()
    }

    pub fn add_edge(&mut self, u: usize, v: usize, metrics: &mut Metrics) {
        if self.in_bounds(u, v, metrics) {
            self.adj[u].push(v);
            self.adj[v].push(u);
        }
    }

    /// Remove from a single list, counting one comparison per entry
    /// inspected (the scan stops at the first match).
    fn remove_from(list: &mut Vec<usize>, target: usize, metrics: &mut Metrics) -> bool {
        for i in 0..list.len() {
            metrics.record_comparison();
            if list[i] == target {
                list.remove(i);
                return true;
            }
        }
        false
    }

    pub fn remove_edge(&mut self, u: usize, v: usize, metrics: &mut Metrics) -> bool {
        if !self.in_bounds(u, v, metrics) {
            return false;
        }
        let a = Self::remove_from(&mut self.adj[u], v, metrics);
        let b = Self::remove_from(&mut self.adj[v], u, metrics);
        a && b
    }

    pub fn is_connected(&self, u: usize, v: usize, metrics: &mut Metrics) -> bool {
        if !self.in_bounds(u, v, metrics) {
            return false;
        }
        for &n in &self.adj[u] {
            metrics.record_comparison();
            if n == v {
                return true;
            }
        }
        false
    }

    pub fn neighbors(&self, u: usize, metrics: &mut Metrics) -> Vec<usize> {
        if !self.in_bounds(u, u, metrics) {
            return Vec::new();
        }
        let mut out = Vec::with_capacity(self.adj[u].len());
        for &n in &self.adj[u] {
            metrics.record_comparison();
            out.push(n);
        }
        out
    }

    /// Footprint estimate: the spine plus every stored entry.
    pub fn memory_bytes(&self) -> usize {
        let spine = self.adj.len() * std::mem::size_of::<Vec<usize>>();
        let entries: usize = self.adj.iter().map(|l| l.len()).sum();
        std::mem::size_of::<Self>() + spine + entries * std::mem::size_of::<usize>()
    }
}
