//! Synthetic input generation for the benchmark drivers.
//!
//! Every generator takes the RNG from the caller so drivers can run
//! seeded (reproducible reports) or from entropy.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// Seeded RNG for reproducible benchmark runs; entropy when `seed` is None.
pub fn rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_entropy(),
    }
}

/// Distinct values 0..bound in shuffled order.
pub fn random_unique(rng: &mut StdRng, n: usize, bound: u32) -> Vec<u32> {
    let mut pool: Vec<u32> = (0..bound).collect();
    pool.shuffle(rng);
    pool.truncate(n);
    pool
}

pub fn sorted_ascending(n: usize) -> Vec<u32> {
    (0..n as u32).collect()
}

pub fn sorted_descending(n: usize) -> Vec<u32> {
    (0..n as u32).rev().collect()
}

/// i * (i mod 2 + 2): even slots doubled, odd slots tripled.
pub fn interleaved(n: usize) -> Vec<u32> {
    (0..n as u32).map(|i| i * (i % 2 + 2)).collect()
}

/// Uniform values in 0..=max, repetition allowed.
pub fn random_values(rng: &mut StdRng, n: usize, max: u32) -> Vec<u32> {
    (0..n).map(|_| rng.gen_range(0..=max)).collect()
}

/// Distinct undirected edges, normalized to src < dest, no self-loops.
pub fn random_edges(rng: &mut StdRng, vertices: usize, count: usize) -> Vec<(usize, usize)> {
    assert!(
        count <= vertices * vertices.saturating_sub(1) / 2,
        "requested more edges than the graph can hold"
    );
    let mut edges: Vec<(usize, usize)> = Vec::with_capacity(count);
    while edges.len() < count {
        let a = rng.gen_range(0..vertices);
        let b = rng.gen_range(0..vertices);
        if a == b {
            continue;
        }
        let edge = (a.min(b), a.max(b));
        if !edges.contains(&edge) {
            edges.push(edge);
        }
    }
    edges
}
