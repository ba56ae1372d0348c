//! Distribution sorts: no comparator is ever invoked, so the comparison
//! count of a run is 0 by construction. All variants are stable and sort
//! ascending by the extracted key.

use crate::metrics::Metrics;

/// LSD base-10 radix sort over an integer key.
pub fn radix_sort_by_key<T, K>(arr: &mut [T], key: &K, metrics: &mut Metrics)
where
    T: Clone,
    K: Fn(&T) -> u32,
{
    if arr.len() <= 1 {
        return;
    }
    metrics.charge_aux(arr.len() * std::mem::size_of::<T>() + 10 * std::mem::size_of::<u32>());

    let max = arr.iter().map(key).max().unwrap_or(0);
    let mut exp: u32 = 1;
    loop {
        counting_pass(arr, |t| ((key(t) / exp) % 10) as usize, 10);
        match exp.checked_mul(10) {
            Some(next) if max / exp >= 10 => exp = next,
            _ => break,
        }
    }
}

/// One stable counting pass over a byte-sized key. Used directly for the
/// gender column and per character column for names.
pub fn counting_sort_by_byte<T, K>(arr: &mut [T], key: &K, metrics: &mut Metrics)
where
    T: Clone,
    K: Fn(&T) -> u8,
{
    if arr.len() <= 1 {
        return;
    }
    metrics.charge_aux(arr.len() * std::mem::size_of::<T>() + 256 * std::mem::size_of::<u32>());
    counting_pass(arr, |t| key(t) as usize, 256);
}

/// Byte-column radix over a string key: counting passes from the last
/// column of the longest name toward the first, absent bytes keying 0.
pub fn radix_sort_by_name<T, K>(arr: &mut [T], key: &K, metrics: &mut Metrics)
where
    T: Clone,
    K: Fn(&T) -> &str,
{
    if arr.len() <= 1 {
        return;
    }
    let max_len = arr.iter().map(|t| key(t).len()).max().unwrap_or(0);
    metrics.charge_aux(arr.len() * std::mem::size_of::<T>() + 256 * std::mem::size_of::<u32>());

    for col in (0..max_len).rev() {
        counting_pass(
            arr,
            |t| key(t).as_bytes().get(col).copied().unwrap_or(0) as usize,
            256,
        );
    }
}

/// Stable counting sort by a bucket index in 0..buckets.
fn counting_pass<T, B>(arr: &mut [T], bucket: B, buckets: usize)
where
    T: Clone,
    B: Fn(&T) -> usize,
{
    let mut count = vec![0usize; buckets];
    for item in arr.iter() {
        count[bucket(item)] += 1;
    }
    for b in 1..buckets {
        count[b] += count[b - 1];
    }

    let mut output: Vec<Option<T>> = vec![None; arr.len()];
    for item in arr.iter().rev() {
        let b = bucket(item);
        count[b] -= 1;
        output[count[b]] = Some(item.clone());
    }
    for (slot, item) in arr.iter_mut().zip(output) {
        *slot = item.expect("every output slot is filled");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset;

    #[test]
    fn integer_radix_sorts_without_comparisons() {
        let mut rng = dataset::rng(Some(17));
        let mut data = dataset::random_values(&mut rng, 1000, 999_999);
        let mut expected = data.clone();
        expected.sort_unstable();
        let mut m = Metrics::new();
        radix_sort_by_key(&mut data, &|v: &u32| *v, &mut m);
        assert_eq!(data, expected);
        assert_eq!(m.comparisons, 0);
        assert!(m.aux_bytes > 0);
    }

    #[test]
    fn zero_keys_terminate() {
        let mut data = vec![0u32, 0, 0];
        let mut m = Metrics::new();
        radix_sort_by_key(&mut data, &|v: &u32| *v, &mut m);
        assert_eq!(data, vec![0, 0, 0]);
    }

    #[test]
    fn name_radix_orders_like_string_compare() {
        let mut names = vec!["kim", "an", "park", "ahn", "lee", "an"];
        let mut expected = names.clone();
        expected.sort();
        let mut m = Metrics::new();
        radix_sort_by_name(&mut names, &|s: &&str| *s, &mut m);
        assert_eq!(names, expected);
        assert_eq!(m.comparisons, 0);
    }

    #[test]
    fn byte_pass_is_stable() {
        let mut data = vec![(b'M', 0usize), (b'F', 1), (b'M', 2), (b'F', 3)];
        let mut m = Metrics::new();
        counting_sort_by_byte(&mut data, &|t: &(u8, usize)| t.0, &mut m);
        assert_eq!(data, vec![(b'F', 1), (b'F', 3), (b'M', 0), (b'M', 2)]);
    }
}
