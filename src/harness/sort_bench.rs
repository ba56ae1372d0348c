//! Sorting benchmark matrix: every algorithm against every criterion,
//! averaged over repeated runs on copies of the loaded dataset.
//!
//! Gating rules:
//!   - gender criteria admit stable sorts only (a two-value key makes
//!     instability visible immediately),
//!   - heap and tree sort rows are skipped when the dataset holds
//!     fully duplicate records,
//!   - radix rows dispatch to the per-key distribution variant and
//!     ignore the direction (the key walk is ascending by nature).

use serde::Serialize;

use crate::metrics::Metrics;
use crate::sorting::{
    avl_tree_sort, bubble_sort, counting_sort_by_byte, heap_sort, insertion_sort, merge_sort,
    quick_sort, quick_sort_median, radix_sort_by_key, radix_sort_by_name, selection_sort,
    shell_sort, tree_sort, GapSequence,
};
use crate::student::{comparator, has_duplicates, Direction, SortKey, Student};

#[derive(Debug, Clone, Copy)]
enum SortKind {
    Bubble,
    Selection,
    Insertion,
    Shell(GapSequence),
    Quick,
    QuickMedian,
    Heap,
    Merge,
    Radix,
    Tree,
    AvlTree,
}

pub struct SortAlgorithm {
    pub name: &'static str,
    kind: SortKind,
    pub stable: bool,
    pub requires_unique: bool,
}

pub const ALGORITHMS: [SortAlgorithm; 12] = [
    SortAlgorithm { name: "bubble", kind: SortKind::Bubble, stable: true, requires_unique: false },
    SortAlgorithm { name: "selection", kind: SortKind::Selection, stable: false, requires_unique: false },
    SortAlgorithm { name: "insertion", kind: SortKind::Insertion, stable: true, requires_unique: false },
    SortAlgorithm { name: "shell", kind: SortKind::Shell(GapSequence::Halving), stable: false, requires_unique: false },
    SortAlgorithm { name: "shell-sedgewick", kind: SortKind::Shell(GapSequence::Sedgewick), stable: false, requires_unique: false },
    SortAlgorithm { name: "quick", kind: SortKind::Quick, stable: false, requires_unique: false },
    SortAlgorithm { name: "quick-median", kind: SortKind::QuickMedian, stable: false, requires_unique: false },
    SortAlgorithm { name: "heap", kind: SortKind::Heap, stable: false, requires_unique: true },
    SortAlgorithm { name: "merge", kind: SortKind::Merge, stable: true, requires_unique: false },
    SortAlgorithm { name: "radix", kind: SortKind::Radix, stable: true, requires_unique: false },
    SortAlgorithm { name: "tree", kind: SortKind::Tree, stable: false, requires_unique: true },
    SortAlgorithm { name: "avl-tree", kind: SortKind::AvlTree, stable: false, requires_unique: true },
];

pub struct Criterion {
    pub key: SortKey,
    pub direction: Direction,
    pub stable_only: bool,
}

pub const CRITERIA: [Criterion; 8] = [
    Criterion { key: SortKey::Id, direction: Direction::Asc, stable_only: false },
    Criterion { key: SortKey::Id, direction: Direction::Desc, stable_only: false },
    Criterion { key: SortKey::Name, direction: Direction::Asc, stable_only: false },
    Criterion { key: SortKey::Name, direction: Direction::Desc, stable_only: false },
    Criterion { key: SortKey::Gender, direction: Direction::Asc, stable_only: true },
    Criterion { key: SortKey::Gender, direction: Direction::Desc, stable_only: true },
    Criterion { key: SortKey::Total, direction: Direction::Asc, stable_only: false },
    Criterion { key: SortKey::Total, direction: Direction::Desc, stable_only: false },
];

#[derive(Debug, Serialize)]
pub struct SortCell {
    pub algorithm: &'static str,
    pub key: &'static str,
    pub direction: &'static str,
    pub avg_comparisons: Option<f64>,
    pub avg_aux_bytes: Option<f64>,
    pub skipped: Option<&'static str>,
}

#[derive(Debug, Serialize)]
pub struct SortBenchReport {
    pub records: usize,
    pub repetitions: usize,
    pub has_duplicates: bool,
    pub cells: Vec<SortCell>,
}

fn run_once(kind: SortKind, arr: &mut [Student], key: SortKey, dir: Direction, metrics: &mut Metrics) {
    let cmp = comparator(key, dir);
    match kind {
        SortKind::Bubble => bubble_sort(arr, &cmp, metrics),
        SortKind::Selection => selection_sort(arr, &cmp, metrics),
        SortKind::Insertion => insertion_sort(arr, &cmp, metrics),
        SortKind::Shell(seq) => shell_sort(arr, seq, &cmp, metrics),
        SortKind::Quick => quick_sort(arr, &cmp, metrics),
        SortKind::QuickMedian => quick_sort_median(arr, &cmp, metrics),
        SortKind::Heap => heap_sort(arr, &cmp, metrics),
        SortKind::Merge => merge_sort(arr, &cmp, metrics),
        SortKind::Tree => tree_sort(arr, &cmp, metrics),
        SortKind::AvlTree => avl_tree_sort(arr, &cmp, metrics),
        SortKind::Radix => match key {
            SortKey::Id => radix_sort_by_key(arr, &|s: &Student| s.id, metrics),
            SortKey::Total => radix_sort_by_key(arr, &|s: &Student| s.total as u32, metrics),
            SortKey::Gender => counting_sort_by_byte(arr, &|s: &Student| s.gender as u8, metrics),
            SortKey::Name => radix_sort_by_name(arr, &|s: &Student| s.name.as_str(), metrics),
        },
    }
}

/// Run the full algorithm x criterion matrix, `repetitions` trials per
/// cell, each trial sorting a fresh copy of the input.
pub fn run(students: &[Student], repetitions: usize) -> SortBenchReport {
    let duplicates = has_duplicates(students);
    let reps = repetitions.max(1);
    let mut cells = Vec::with_capacity(ALGORITHMS.len() * CRITERIA.len());

    for algo in &ALGORITHMS {
        for crit in &CRITERIA {
            let skipped = if duplicates && algo.requires_unique {
                Some("dataset holds duplicate records")
            } else if crit.stable_only && !algo.stable {
                Some("unstable sort on a stable-only criterion")
            } else {
                None
            };

            let (avg_comparisons, avg_aux_bytes) = if skipped.is_some() {
                (None, None)
            } else {
                let mut total_cmp: u64 = 0;
                let mut total_aux: u64 = 0;
                for _ in 0..reps {
                    let mut copy = students.to_vec();
                    let mut metrics = Metrics::new();
                    run_once(algo.kind, &mut copy, crit.key, crit.direction, &mut metrics);
                    total_cmp += metrics.comparisons;
                    total_aux += metrics.aux_bytes as u64;
                }
                (
                    Some(total_cmp as f64 / reps as f64),
                    Some(total_aux as f64 / reps as f64),
                )
            };

            cells.push(SortCell {
                algorithm: algo.name,
                key: crit.key.label(),
                direction: crit.direction.label(),
                avg_comparisons,
                avg_aux_bytes,
                skipped,
            });
        }
    }

    SortBenchReport {
        records: students.len(),
        repetitions: reps,
        has_duplicates: duplicates,
        cells,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roster() -> Vec<Student> {
        vec![
            Student::new(3, "Cho", 'F', 90, 80, 70),
            Student::new(1, "Ahn", 'M', 60, 60, 60),
            Student::new(4, "Bae", 'F', 70, 70, 70),
            Student::new(2, "Dae", 'M', 80, 90, 100),
        ]
    }

    #[test]
    fn matrix_covers_every_pair() {
        let report = run(&roster(), 2);
        assert_eq!(report.cells.len(), ALGORITHMS.len() * CRITERIA.len());
        assert_eq!(report.repetitions, 2);
        assert!(!report.has_duplicates);
    }

    #[test]
    fn gender_rows_admit_stable_sorts_only() {
        let report = run(&roster(), 1);
        for cell in report.cells.iter().filter(|c| c.key == "gender") {
            let stable = ALGORITHMS
                .iter()
                .find(|a| a.name == cell.algorithm)
                .map(|a| a.stable)
                .unwrap_or(false);
            if stable {
                assert!(cell.skipped.is_none(), "{} should run", cell.algorithm);
            } else {
                assert!(cell.skipped.is_some(), "{} should be gated", cell.algorithm);
            }
        }
    }

    #[test]
    fn duplicates_gate_the_unique_only_rows() {
        let mut data = roster();
        data.push(data[0].clone());
        let report = run(&data, 1);
        assert!(report.has_duplicates);
        for cell in &report.cells {
            let unique_only = ALGORITHMS
                .iter()
                .find(|a| a.name == cell.algorithm)
                .map(|a| a.requires_unique)
                .unwrap_or(false);
            if unique_only {
                assert!(cell.skipped.is_some());
            }
        }
    }

    #[test]
    fn radix_rows_report_zero_comparisons() {
        let report = run(&roster(), 1);
        for cell in report.cells.iter().filter(|c| c.algorithm == "radix") {
            if cell.skipped.is_none() {
                assert_eq!(cell.avg_comparisons, Some(0.0));
            }
        }
    }
}
