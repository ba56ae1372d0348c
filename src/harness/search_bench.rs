//! Search benchmark: four dataset shapes loaded into a flat array, a
//! plain BST and an AVL tree, then probed with 1000 random lookups.
//! The array side uses linear search, so the interesting spread is
//! between the two trees on adversarial (sorted) input.

use rand::Rng;
use serde::Serialize;

use crate::dataset;
use crate::metrics::Metrics;
use crate::searching::linear_search;
use crate::trees::{Avl, Bst};

const STRUCTURE_SIZE: usize = 1000;
const LOOKUPS: usize = 1000;
const VALUE_BOUND: u32 = 10_001;

#[derive(Debug, Clone, Copy, Serialize)]
pub enum Shape {
    RandomUnique,
    Ascending,
    Descending,
    Interleaved,
}

impl Shape {
    pub fn label(self) -> &'static str {
        match self {
            Shape::RandomUnique => "random-unique",
            Shape::Ascending => "ascending",
            Shape::Descending => "descending",
            Shape::Interleaved => "interleaved",
        }
    }

    pub const ALL: [Shape; 4] = [
        Shape::RandomUnique,
        Shape::Ascending,
        Shape::Descending,
        Shape::Interleaved,
    ];
}

#[derive(Debug, Serialize)]
pub struct SearchCase {
    pub shape: &'static str,
    pub array_avg: f64,
    pub bst_avg: f64,
    pub avl_avg: f64,
}

#[derive(Debug, Serialize)]
pub struct SearchBenchReport {
    pub structure_size: usize,
    pub lookups: usize,
    pub cases: Vec<SearchCase>,
}

pub fn run(seed: Option<u64>) -> SearchBenchReport {
    let mut rng = dataset::rng(seed);
    let cmp = |a: &u32, b: &u32| a.cmp(b);
    let mut cases = Vec::with_capacity(Shape::ALL.len());

    for shape in Shape::ALL {
        let values = match shape {
            Shape::RandomUnique => dataset::random_unique(&mut rng, STRUCTURE_SIZE, VALUE_BOUND),
            Shape::Ascending => dataset::sorted_ascending(STRUCTURE_SIZE),
            Shape::Descending => dataset::sorted_descending(STRUCTURE_SIZE),
            Shape::Interleaved => dataset::interleaved(STRUCTURE_SIZE),
        };

        let mut build = Metrics::new();
        let mut bst = Bst::new();
        let mut avl = Avl::new();
        for &v in &values {
            bst.insert(v, &cmp, &mut build);
            avl.insert(v, &cmp, &mut build);
        }

        let targets: Vec<u32> = (0..LOOKUPS).map(|_| rng.gen_range(0..VALUE_BOUND)).collect();

        let mut array_total: u64 = 0;
        let mut bst_total: u64 = 0;
        let mut avl_total: u64 = 0;

        for target in &targets {
            let mut m = Metrics::new();
            linear_search(&values, target, &cmp, &mut m);
            array_total += m.comparisons;

            let mut m = Metrics::new();
            bst.search(target, &cmp, &mut m);
            bst_total += m.comparisons;

            let mut m = Metrics::new();
            avl.search_by(|v: &u32| target.cmp(v), &mut m);
            avl_total += m.comparisons;
        }

        cases.push(SearchCase {
            shape: shape.label(),
            array_avg: array_total as f64 / LOOKUPS as f64,
            bst_avg: bst_total as f64 / LOOKUPS as f64,
            avl_avg: avl_total as f64 / LOOKUPS as f64,
        });
    }

    SearchBenchReport {
        structure_size: STRUCTURE_SIZE,
        lookups: LOOKUPS,
        cases,
    }
}
