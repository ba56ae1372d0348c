//! Product-score lookup: a random key probed by sequential search on
//! the raw score array, then by quicksort plus binary search, with the
//! sort's comparisons charged to the binary total.

use rand::Rng;
use serde::Serialize;

use crate::dataset;
use crate::metrics::Metrics;
use crate::searching::{binary_search, linear_search};
use crate::sorting::quick_sort;
use crate::student::Student;

const KEY_BOUND: i64 = 1_000_000;
const MAX_TRIES: usize = 100;

#[derive(Debug, Serialize)]
pub struct ScoreSearchReport {
    pub target: i64,
    pub attempts: usize,
    pub sequential_comparisons: u64,
    pub sort_comparisons: u64,
    pub binary_comparisons: u64,
    pub combined_comparisons: u64,
}

/// Draw random keys until one hits the score array, then compare the
/// two strategies on that key. None when no draw hits within the
/// attempt budget.
pub fn run(students: &[Student], seed: Option<u64>) -> Option<ScoreSearchReport> {
    run_bounded(students, seed, KEY_BOUND)
}

fn run_bounded(students: &[Student], seed: Option<u64>, key_bound: i64) -> Option<ScoreSearchReport> {
    let scores: Vec<i64> = students.iter().map(Student::product_score).collect();
    let mut rng = dataset::rng(seed);
    let cmp = |a: &i64, b: &i64| a.cmp(b);

    let mut hit = None;
    for attempt in 1..=MAX_TRIES {
        let target = rng.gen_range(0..key_bound);
        let mut m = Metrics::new();
        if linear_search(&scores, &target, &cmp, &mut m).is_some() {
            hit = Some((target, attempt, m.comparisons));
            break;
        }
    }
    let (target, attempts, sequential_comparisons) = hit?;

    let mut sorted = scores;
    let mut sort_metrics = Metrics::new();
    quick_sort(&mut sorted, &cmp, &mut sort_metrics);

    let mut bin_metrics = Metrics::new();
    binary_search(&sorted, &target, &cmp, &mut bin_metrics);

    Some(ScoreSearchReport {
        target,
        attempts,
        sequential_comparisons,
        sort_comparisons: sort_metrics.comparisons,
        binary_comparisons: bin_metrics.comparisons,
        combined_comparisons: sort_metrics.comparisons + bin_metrics.comparisons,
    })
}
