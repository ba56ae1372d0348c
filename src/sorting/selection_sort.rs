use std::cmp::Ordering;

use crate::metrics::Metrics;

/// Min-scan selection; always n(n-1)/2 comparisons. Unstable.
pub fn selection_sort<T, F>(arr: &mut [T], cmp: &F, metrics: &mut Metrics)
where
    F: Fn(&T, &T) -> Ordering,
{
    let n = arr.len();
    for i in 0..n.saturating_sub(1) {
        let mut min = i;
        for j in i + 1..n {
            if metrics.compare(&arr[j], &arr[min], cmp) == Ordering::Less {
                min = j;
            }
        }
        if min != i {
            arr.swap(i, min);
        }
    }
}
