use std::cmp::Ordering;

use crate::metrics::Metrics;

/// Swap-based insertion into the sorted prefix; the probe that finds an
/// element in place still counts, matching the shift formulation. Stable.
pub fn insertion_sort<T, F>(arr: &mut [T], cmp: &F, metrics: &mut Metrics)
where
    F: Fn(&T, &T) -> Ordering,
{
    for i in 1..arr.len() {
        for j in (1..=i).rev() {
            if metrics.compare(&arr[j - 1], &arr[j], cmp) == Ordering::Greater {
                arr.swap(j - 1, j);
            } else {
                break;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sorted_input_costs_n_minus_one() {
        let mut data: Vec<u32> = (0..8).collect();
        let mut m = Metrics::new();
        insertion_sort(&mut data, &u32::cmp, &mut m);
        assert_eq!(m.comparisons, 7);
    }

    #[test]
    fn reversed_input_costs_quadratic() {
        let mut data: Vec<u32> = (0..8).rev().collect();
        let mut m = Metrics::new();
        insertion_sort(&mut data, &u32::cmp, &mut m);
        assert_eq!(data, (0..8).collect::<Vec<u32>>());
        assert_eq!(m.comparisons, 28); // 8 * 7 / 2
    }

    #[test]
    fn is_stable() {
        let mut data = vec![(3u32, 0usize), (1, 1), (3, 2), (1, 3)];
        let mut m = Metrics::new();
        insertion_sort(&mut data, &|a: &(u32, usize), b: &(u32, usize)| a.0.cmp(&b.0), &mut m);
        assert_eq!(data, vec![(1, 1), (1, 3), (3, 0), (3, 2)]);
    }
}
