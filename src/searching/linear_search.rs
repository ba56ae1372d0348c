use std::cmp::Ordering;

use crate::metrics::Metrics;

/// Scan front to back; one comparison is counted per element inspected.
pub fn linear_search<T, F>(arr: &[T], target: &T, cmp: &F, metrics: &mut Metrics) -> Option<usize>
where
    F: Fn(&T, &T) -> Ordering,
{
    for (i, v) in arr.iter().enumerate() {
        if metrics.compare(v, target, cmp) == Ordering::Equal {
            return Some(i);
        }
    }
    None
}
