use std::cmp::Ordering;

use serde::Serialize;

use crate::metrics::Metrics;

/// Diminishing-gap schedule for shell sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum GapSequence {
    /// n/2, n/4, ..., 1.
    Halving,
    /// 3k+1: ..., 40, 13, 4, 1 (largest below n/3).
    Knuth,
    /// 4^i + 3*2^(i-1) + 1 with a leading 1: 1, 8, 23, 77, 281, ...
    Sedgewick,
}

impl GapSequence {
    pub fn label(self) -> &'static str {
        match self {
            GapSequence::Halving => "halving",
            GapSequence::Knuth => "knuth",
            GapSequence::Sedgewick => "sedgewick",
        }
    }

    /// Gaps in descending application order, all below `n`.
    fn gaps(self, n: usize) -> Vec<usize> {
        match self {
            GapSequence::Halving => {
                let mut gaps = Vec::new();
                let mut gap = n / 2;
                while gap > 0 {
                    gaps.push(gap);
                    gap /= 2;
                }
                gaps
            }
            GapSequence::Knuth => {
                let mut gap = 1;
                while gap < n / 3 {
                    gap = 3 * gap + 1;
                }
                let mut gaps = Vec::new();
                while gap > 0 {
                    gaps.push(gap);
                    gap /= 3;
                }
                gaps
            }
            GapSequence::Sedgewick => {
                let mut ascending = vec![1usize];
                let mut i = 1u32;
                loop {
                    let gap = (1usize << (2 * i)) + 3 * (1usize << (i - 1)) + 1;
                    if gap >= n {
                        break;
                    }
                    ascending.push(gap);
                    i += 1;
                }
                ascending.reverse();
                ascending
            }
        }
    }
}

/// Gapped insertion passes; one comparison per probe. Unstable.
pub fn shell_sort<T, F>(arr: &mut [T], seq: GapSequence, cmp: &F, metrics: &mut Metrics)
where
    F: Fn(&T, &T) -> Ordering,
{
    let n = arr.len();
    if n <= 1 {
        return;
    }
    for gap in seq.gaps(n) {
        for i in gap..n {
            let mut j = i;
            while j >= gap {
                if metrics.compare(&arr[j - gap], &arr[j], cmp) == Ordering::Greater {
                    arr.swap(j - gap, j);
                    j -= gap;
                } else {
                    break;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset;

    #[test]
    fn all_sequences_sort() {
        let mut rng = dataset::rng(Some(11));
        let original = dataset::random_values(&mut rng, 500, 10_000);
        let mut expected = original.clone();
        expected.sort_unstable();

        for seq in [GapSequence::Halving, GapSequence::Knuth, GapSequence::Sedgewick] {
            let mut data = original.clone();
            let mut m = Metrics::new();
            shell_sort(&mut data, seq, &u32::cmp, &mut m);
            assert_eq!(data, expected, "{} failed", seq.label());
            assert!(m.comparisons > 0);
        }
    }

    #[test]
    fn sedgewick_gaps_match_formula() {
        assert_eq!(GapSequence::Sedgewick.gaps(300), vec![281, 77, 23, 8, 1]);
        assert_eq!(GapSequence::Sedgewick.gaps(2), vec![1]);
    }

    #[test]
    fn knuth_gaps_stay_below_a_third() {
        assert_eq!(GapSequence::Knuth.gaps(100), vec![40, 13, 4, 1]);
    }
}
