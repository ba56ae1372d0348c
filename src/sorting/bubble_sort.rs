use std::cmp::Ordering;

use crate::metrics::Metrics;

/// Adjacent-swap passes with early exit once a pass makes no swap. Stable.
pub fn bubble_sort<T, F>(arr: &mut [T], cmp: &F, metrics: &mut Metrics)
where
    F: Fn(&T, &T) -> Ordering,
{
    let n = arr.len();
    for i in 0..n.saturating_sub(1) {
        let mut swapped = false;
        for j in 0..n - 1 - i {
            if metrics.compare(&arr[j], &arr[j + 1], cmp) == Ordering::Greater {
                arr.swap(j, j + 1);
                swapped = true;
            }
        }
        if !swapped {
            break;
        }
    }
}
