use std::cmp::Ordering;

use crate::metrics::Metrics;

/// Lomuto partition with the last element as pivot; the smaller side is
/// recursed first so the pending side never stacks deeper than log2 n.
/// The estimated recursion footprint is charged as auxiliary memory.
pub fn quick_sort<T, F>(arr: &mut [T], cmp: &F, metrics: &mut Metrics)
where
    F: Fn(&T, &T) -> Ordering,
{
    if arr.len() <= 1 {
        return;
    }
    metrics.charge_aux(64 * integer_log2(arr.len()));
    sort(arr, cmp, metrics, false);
}

/// Median-of-three pivot selection; its three ordering comparisons count.
pub fn quick_sort_median<T, F>(arr: &mut [T], cmp: &F, metrics: &mut Metrics)
where
    F: Fn(&T, &T) -> Ordering,
{
    if arr.len() <= 1 {
        return;
    }
    metrics.charge_aux(64 * integer_log2(arr.len()));
    sort(arr, cmp, metrics, true);
}

fn sort<T, F>(mut arr: &mut [T], cmp: &F, metrics: &mut Metrics, median: bool)
where
    F: Fn(&T, &T) -> Ordering,
{
    while arr.len() > 1 {
        if median {
            pivot_to_last(arr, cmp, metrics);
        }
        let p = partition(arr, cmp, metrics);
        let (left, rest) = arr.split_at_mut(p);
        let right = &mut rest[1..];
        if left.len() < right.len() {
            sort(left, cmp, metrics, median);
            arr = right;
        } else {
            sort(right, cmp, metrics, median);
            arr = left;
        }
    }
}

fn partition<T, F>(arr: &mut [T], cmp: &F, metrics: &mut Metrics) -> usize
where
    F: Fn(&T, &T) -> Ordering,
{
    let hi = arr.len() - 1;
    let mut i = 0;
    for j in 0..hi {
        if metrics.compare(&arr[j], &arr[hi], cmp) != Ordering::Greater {
            arr.swap(i, j);
            i += 1;
        }
    }
    arr.swap(i, hi);
    i
}

/// Order first/middle/last in place, then park the median at the pivot
/// slot the partition expects.
fn pivot_to_last<T, F>(arr: &mut [T], cmp: &F, metrics: &mut Metrics)
where
    F: Fn(&T, &T) -> Ordering,
{
    let hi = arr.len() - 1;
    if hi < 2 {
        return;
    }
    let mid = hi / 2;
    if metrics.compare(&arr[0], &arr[mid], cmp) == Ordering::Greater {
        arr.swap(0, mid);
    }
    if metrics.compare(&arr[0], &arr[hi], cmp) == Ordering::Greater {
        arr.swap(0, hi);
    }
    if metrics.compare(&arr[mid], &arr[hi], cmp) == Ordering::Greater {
        arr.swap(mid, hi);
    }
    arr.swap(mid, hi);
}

fn integer_log2(mut n: usize) -> usize {
    let mut log = 0;
    while n > 1 {
        n >>= 1;
        log += 1;
    }
    log
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset;

    #[test]
    fn sorts_random_input() {
        let mut rng = dataset::rng(Some(3));
        let mut data = dataset::random_values(&mut rng, 1000, 100_000);
        let mut expected = data.clone();
        expected.sort_unstable();
        let mut m = Metrics::new();
        quick_sort(&mut data, &u32::cmp, &mut m);
        assert_eq!(data, expected);
        assert!(m.comparisons >= 999);
    }

    #[test]
    fn median_variant_handles_sorted_input_cheaply() {
        let mut plain: Vec<u32> = (0..512).collect();
        let mut median = plain.clone();
        let mut m_plain = Metrics::new();
        let mut m_median = Metrics::new();
        quick_sort(&mut plain, &u32::cmp, &mut m_plain);
        quick_sort_median(&mut median, &u32::cmp, &mut m_median);
        assert_eq!(plain, median);
        // last-element pivot degenerates on sorted data, median does not
        assert!(m_median.comparisons < m_plain.comparisons);
    }

    #[test]
    fn charges_logarithmic_stack_estimate() {
        let mut data: Vec<u32> = (0..1024).rev().collect();
        let mut m = Metrics::new();
        quick_sort(&mut data, &u32::cmp, &mut m);
        assert_eq!(m.aux_bytes, 64 * 10);
    }
}
