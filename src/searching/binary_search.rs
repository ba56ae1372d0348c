use std::cmp::Ordering;

use crate::metrics::Metrics;

/// Halving search over a slice sorted by `cmp`; one comparison is
/// counted per probe of the middle element.
pub fn binary_search<T, F>(arr: &[T], target: &T, cmp: &F, metrics: &mut Metrics) -> Option<usize>
where
    F: Fn(&T, &T) -> Ordering,
{
    let (mut l, mut r) = (0, arr.len());
    while l < r {
        let m = (l + r) / 2;
        match metrics.compare(target, &arr[m], cmp) {
            Ordering::Equal => return Some(m),
            Ordering::Greater => l = m + 1,
            Ordering::Less => r = m,
        }
    }
    None
}
