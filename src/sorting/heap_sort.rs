use std::cmp::Ordering;

use crate::metrics::Metrics;

/// Max-heap build then repeated extraction. Unstable.
pub fn heap_sort<T, F>(arr: &mut [T], cmp: &F, metrics: &mut Metrics)
where
    F: Fn(&T, &T) -> Ordering,
{
    let len = arr.len();
    if len <= 1 {
        return;
    }
    for i in (0..len / 2).rev() {
        sift_down(arr, len, i, cmp, metrics);
    }
    for i in (1..len).rev() {
        arr.swap(0, i);
        sift_down(arr, i, 0, cmp, metrics);
    }
}

fn sift_down<T, F>(arr: &mut [T], n: usize, mut i: usize, cmp: &F, metrics: &mut Metrics)
where
    F: Fn(&T, &T) -> Ordering,
{
    loop {
        let mut largest = i;
        let l = 2 * i + 1;
        let r = 2 * i + 2;

        if l < n && metrics.compare(&arr[l], &arr[largest], cmp) == Ordering::Greater {
            largest = l;
        }
        if r < n && metrics.compare(&arr[r], &arr[largest], cmp) == Ordering::Greater {
            largest = r;
        }
        if largest == i {
            break;
        }
        arr.swap(i, largest);
        i = largest;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset;

    #[test]
    fn sorts_random_input() {
        let mut rng = dataset::rng(Some(5));
        let mut data = dataset::random_values(&mut rng, 2000, 50_000);
        let mut expected = data.clone();
        expected.sort_unstable();
        let mut m = Metrics::new();
        heap_sort(&mut data, &u32::cmp, &mut m);
        assert_eq!(data, expected);
    }

    #[test]
    fn comparison_count_is_n_log_n_scale() {
        let mut data: Vec<u32> = (0..1024).collect();
        let mut m = Metrics::new();
        heap_sort(&mut data, &u32::cmp, &mut m);
        // 2 n log2 n generous ceiling
        assert!(m.comparisons <= 2 * 1024 * 10 + 2 * 1024);
    }
}
