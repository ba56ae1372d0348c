//! Adjacency matrix representation.
//!
//! Variables:
//!   V      = number of vertices
//!   cells  : Vec<bool>, row-major V×V, cells[u*V + v] iff edge (u,v)
//!
//! Equations:
//!   add/remove(u,v): set both mirror cells           O(1), 1 probe
//!   is_connected:    read one cell                   O(1)
//!   neighbors(u):    scan row u                      O(V)
//!   memory           = V*V cells regardless of E
//!
//! Counted cost: one comparison per bounds check plus one per cell probe.

use crate::metrics::Metrics;

pub struct AdjMatrix {
    vertices: usize,
    cells: Vec<bool>,
}

impl AdjMatrix {
    pub fn new(vertices: usize) -> Self {
        Self {
            vertices,
            cells: vec![false; vertices * vertices],
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices
    }

    fn in_bounds(&self, u: usize, v: usize, metrics: &mut Metrics) -> bool {
        metrics.record_comparison();
        u < self.vertices && v < self.vertices
    }

    fn at(&self, u: usize, v: usize) -> usize {
        u * self.vertices + v
    }

    pub fn add_edge(&mut self, u: usize, v: usize, metrics: &mut Metrics) {
        if self.in_bounds(u, v, metrics) {
            let (a, b) = (self.at(u, v), self.at(v, u));
            self.cells[a] = true;
            self.cells[b] = true;
        }
    }

    pub fn remove_edge(&mut self, u: usize, v: usize, metrics: &mut Metrics) {
        if self.in_bounds(u, v, metrics) {
            let (a, b) = (self.at(u, v), self.at(v, u));
            self.cells[a] = false;
            self.cells[b] = false;
        }
    }

    pub fn is_connected(&self, u: usize, v: usize, metrics: &mut Metrics) -> bool {
        if !self.in_bounds(u, v, metrics) {
            return false;
        }
        metrics.record_comparison();
        self.cells[self.at(u, v)]
    }

    /// Row scan; every cell probe counts.
    pub fn neighbors(&self, u: usize, metrics: &mut Metrics) -> Vec<usize> {
        if !self.in_bounds(u, u, metrics) {
            return Vec::new();
        }
        let mut out = Vec::new();
        for v in 0..self.vertices {
            metrics.record_comparison();
            if self.cells[self.at(u, v)] {
                out.push(v);
            }
        }
        out
    }

    /// Occupancy-independent footprint of the cell storage.
    pub fn memory_bytes(&self) -> usize {
        std::mem::size_of::<Self>() + self.cells.len() * std::mem::size_of::<bool>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edges_are_mirrored() {
        let mut m = Metrics::new();
        let mut g = AdjMatrix::new(5);
        g.add_edge(1, 3, &mut m);
        assert!(g.is_connected(1, 3, &mut m));
        assert!(g.is_connected(3, 1, &mut m));
        g.remove_edge(3, 1, &mut m);
        assert!(!g.is_connected(1, 3, &mut m));
    }

    #[test]
    fn neighbor_scan_costs_v_probes() {
        let mut m = Metrics::new();
        let mut g = AdjMatrix::new(8);
        g.add_edge(0, 2, &mut m);
        g.add_edge(0, 5, &mut m);
        m.reset();
        assert_eq!(g.neighbors(0, &mut m), vec![2, 5]);
        assert_eq!(m.comparisons, 1 + 8);
    }

    #[test]
    fn memory_does_not_depend_on_edges() {
        let mut m = Metrics::new();
        let empty = AdjMatrix::new(100);
        let mut full = AdjMatrix::new(100);
        for u in 0..100 {
            for v in u + 1..100 {
                full.add_edge(u, v, &mut m);
            }
        }
        assert_eq!(empty.memory_bytes(), full.memory_bytes());
    }

    #[test]
    fn out_of_bounds_is_ignored() {
        let mut m = Metrics::new();
        let mut g = AdjMatrix::new(3);
        g.add_edge(0, 9, &mut m);
        assert!(!g.is_connected(0, 9, &mut m));
    }
}
