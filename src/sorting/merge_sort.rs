use std::cmp::Ordering;

use crate::metrics::Metrics;

/// Top-down merge sort; ties take the left element, so it is stable.
/// The merge buffer (n records) is charged as auxiliary memory once.
pub fn merge_sort<T, F>(arr: &mut [T], cmp: &F, metrics: &mut Metrics)
where
    T: Clone,
    F: Fn(&T, &T) -> Ordering,
{
    if arr.len() <= 1 {
        return;
    }
    metrics.charge_aux(arr.len() * std::mem::size_of::<T>());
    split(arr, cmp, metrics);
}

fn split<T, F>(arr: &mut [T], cmp: &F, metrics: &mut Metrics)
where
    T: Clone,
    F: Fn(&T, &T) -> Ordering,
{
    if arr.len() <= 1 {
        return;
    }
    let mid = arr.len() / 2;
    split(&mut arr[..mid], cmp, metrics);
    split(&mut arr[mid..], cmp, metrics);
    merge(arr, mid, cmp, metrics);
}

fn merge<T, F>(arr: &mut [T], mid: usize, cmp: &F, metrics: &mut Metrics)
where
    T: Clone,
    F: Fn(&T, &T) -> Ordering,
{
    let left: Vec<T> = arr[..mid].to_vec();
    let right: Vec<T> = arr[mid..].to_vec();

    let (mut i, mut j) = (0, 0);
    for slot in arr.iter_mut() {
        let take_left = if i == left.len() {
            false
        } else if j == right.len() {
            true
        } else {
            metrics.compare(&left[i], &right[j], cmp) != Ordering::Greater
        };
        if take_left {
            *slot = left[i].clone();
            i += 1;
        } else {
            *slot = right[j].clone();
            j += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset;

    #[test]
    fn sorts_random_input() {
        let mut rng = dataset::rng(Some(13));
        let mut data = dataset::random_values(&mut rng, 1500, 9999);
        let mut expected = data.clone();
        expected.sort();
        let mut m = Metrics::new();
        merge_sort(&mut data, &u32::cmp, &mut m);
        assert_eq!(data, expected);
    }

    #[test]
    fn is_stable() {
        let mut data = vec![(1u32, 'x'), (0, 'a'), (1, 'y'), (0, 'b'), (1, 'z')];
        let mut m = Metrics::new();
        merge_sort(&mut data, &|a: &(u32, char), b: &(u32, char)| a.0.cmp(&b.0), &mut m);
        assert_eq!(data, vec![(0, 'a'), (0, 'b'), (1, 'x'), (1, 'y'), (1, 'z')]);
    }

    #[test]
    fn charges_buffer_bytes() {
        let mut data: Vec<u32> = (0..64).rev().collect();
        let mut m = Metrics::new();
        merge_sort(&mut data, &u32::cmp, &mut m);
        assert_eq!(m.aux_bytes, 64 * std::mem::size_of::<u32>());
    }
}
