//! Matrix-versus-list comparison on a sparse and a dense random graph:
//! counted edge inserts, one delete, one connectivity probe, one
//! neighbour listing, plus the byte footprint of each representation.

use serde::Serialize;

use crate::dataset;
use crate::graph::{AdjList, AdjMatrix};
use crate::metrics::Metrics;

const VERTICES: usize = 100;
const SPARSE_EDGES: usize = 100;
const DENSE_EDGES: usize = 4000;

#[derive(Debug, Serialize)]
pub struct GraphCase {
    pub density: &'static str,
    pub representation: &'static str,
    pub vertices: usize,
    pub edges: usize,
    pub memory_bytes: usize,
    pub insert_comparisons: u64,
    pub delete_comparisons: u64,
    pub connect_comparisons: u64,
    pub neighbor_comparisons: u64,
}

#[derive(Debug, Serialize)]
pub struct GraphBenchReport {
    pub cases: Vec<GraphCase>,
}

fn matrix_case(density: &'static str, edges: &[(usize, usize)]) -> GraphCase {
    let mut g = AdjMatrix::new(VERTICES);

    let mut m = Metrics::new();
    for &(u, v) in edges {
        g.add_edge(u, v, &mut m);
    }
    let insert = m.comparisons;

    let mut m = Metrics::new();
    g.is_connected(0, 1, &mut m);
    let connect = m.comparisons;

    let mut m = Metrics::new();
    g.neighbors(0, &mut m);
    let neighbor = m.comparisons;

    let mut m = Metrics::new();
    let (u, v) = edges[0];
    g.remove_edge(u, v, &mut m);
    let delete = m.comparisons;

    GraphCase {
        density,
        representation: "adjacency-matrix",
        vertices: VERTICES,
        edges: edges.len(),
        memory_bytes: g.memory_bytes(),
        insert_comparisons: insert,
        delete_comparisons: delete,
        connect_comparisons: connect,
        neighbor_comparisons: neighbor,
    }
}

fn list_case(density: &'static str, edges: &[(usize, usize)]) -> GraphCase {
    let mut g = AdjList::new(VERTICES);

    let mut m = Metrics::new();
    for &(u, v) in edges {
        g.add_edge(u, v, &mut m);
    }
    let insert = m.comparisons;

    let mut m = Metrics::new();
    g.is_connected(0, 1, &mut m);
    let connect = m.comparisons;

    let mut m = Metrics::new();
    g.neighbors(0, &mut m);
    let neighbor = m.comparisons;

    let mut m = Metrics::new();
    let (u, v) = edges[0];
    g.remove_edge(u, v, &mut m);
    let delete = m.comparisons;

    GraphCase {
        density,
        representation: "adjacency-list",
        vertices: VERTICES,
        edges: edges.len(),
        memory_bytes: g.memory_bytes(),
        insert_comparisons: insert,
        delete_comparisons: delete,
        connect_comparisons: connect,
        neighbor_comparisons: neighbor,
    }
}

pub fn run(seed: Option<u64>) -> GraphBenchReport {
    let mut rng = dataset::rng(seed);
    let sparse = dataset::random_edges(&mut rng, VERTICES, SPARSE_EDGES);
    let dense = dataset::random_edges(&mut rng, VERTICES, DENSE_EDGES);

    GraphBenchReport {
        cases: vec![
            matrix_case("sparse", &sparse),
            list_case("sparse", &sparse),
            matrix_case("dense", &dense),
            list_case("dense", &dense),
        ],
    }
}
