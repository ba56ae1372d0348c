//! Gap-sequence benchmark: insertion sort against the three shell sort
//! schedules, averaged over repeated trials on fresh random data.

use serde::Serialize;

use crate::dataset;
use crate::metrics::Metrics;
use crate::sorting::{insertion_sort, shell_sort, GapSequence};

pub const DEFAULT_TRIALS: usize = 100;
const DATA_SIZE: usize = 10_000;
const MAX_VALUE: u32 = 1_000_000;

#[derive(Debug, Serialize)]
pub struct ShellRow {
    pub algorithm: &'static str,
    pub avg_comparisons: f64,
}

#[derive(Debug, Serialize)]
pub struct ShellBenchReport {
    pub trials: usize,
    pub data_size: usize,
    pub rows: Vec<ShellRow>,
}

pub fn run(seed: Option<u64>, trials: usize) -> ShellBenchReport {
    let mut rng = dataset::rng(seed);
    let trials = trials.max(1);
    let cmp = |a: &u32, b: &u32| a.cmp(b);

    let mut totals = [0u64; 4];
    for _ in 0..trials {
        let values = dataset::random_values(&mut rng, DATA_SIZE, MAX_VALUE);

        let mut copy = values.clone();
        let mut m = Metrics::new();
        insertion_sort(&mut copy, &cmp, &mut m);
        totals[0] += m.comparisons;

        for (slot, seq) in [
            (1, GapSequence::Halving),
            (2, GapSequence::Knuth),
            (3, GapSequence::Sedgewick),
        ] {
            let mut copy = values.clone();
            let mut m = Metrics::new();
            shell_sort(&mut copy, seq, &cmp, &mut m);
            totals[slot] += m.comparisons;
        }
    }

    let avg = |t: u64| t as f64 / trials as f64;
    ShellBenchReport {
        trials,
        data_size: DATA_SIZE,
        rows: vec![
            ShellRow { algorithm: "insertion", avg_comparisons: avg(totals[0]) },
            ShellRow { algorithm: "shell-halving", avg_comparisons: avg(totals[1]) },
            ShellRow { algorithm: "shell-knuth", avg_comparisons: avg(totals[2]) },
            ShellRow { algorithm: "shell-sedgewick", avg_comparisons: avg(totals[3]) },
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shell_schedules_beat_plain_insertion() {
        // one trial keeps the test quick; 10k random values are far
        // beyond any plausible tie
        let report = run(Some(3), 1);
        let insertion = report.rows[0].avg_comparisons;
        for row in &report.rows[1..] {
            assert!(
                row.avg_comparisons < insertion,
                "{} should beat insertion",
                row.algorithm
            );
        }
    }

    #[test]
    fn trial_count_is_clamped_to_one() {
        let report = run(Some(5), 0);
        assert_eq!(report.trials, 1);
        assert_eq!(report.rows.len(), 4);
    }
}
