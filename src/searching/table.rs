//! Student-table operations keyed by id, over an unsorted and a sorted
//! array. Every probe of a record counts as one comparison.

use std::cmp::Ordering;

use crate::metrics::Metrics;
use crate::student::Student;

fn by_id(a: &Student, b: &Student) -> Ordering {
    a.id.cmp(&b.id)
}

/// Position of `id` in the sorted array, or the insertion point.
fn locate(arr: &[Student], id: u32, metrics: &mut Metrics) -> Result<usize, usize> {
    let (mut l, mut r) = (0, arr.len());
    while l < r {
        let m = (l + r) / 2;
        metrics.record_comparison();
        match id.cmp(&arr[m].id) {
            Ordering::Equal => return Ok(m),
            Ordering::Greater => l = m + 1,
            Ordering::Less => r = m,
        }
    }
    Err(l)
}

pub fn unsorted_search<'a>(arr: &'a [Student], id: u32, metrics: &mut Metrics) -> Option<&'a Student> {
    for s in arr {
        metrics.record_comparison();
        if s.id == id {
            return Some(s);
        }
    }
    None
}

/// Append; no ordering to maintain, so no comparisons.
pub fn unsorted_insert(arr: &mut Vec<Student>, s: Student) {
    arr.push(s);
}

pub fn unsorted_delete(arr: &mut Vec<Student>, id: u32, metrics: &mut Metrics) -> bool {
    for i in 0..arr.len() {
        metrics.record_comparison();
        if arr[i].id == id {
            arr.remove(i);
            return true;
        }
    }
    false
}

pub fn sorted_search<'a>(arr: &'a [Student], id: u32, metrics: &mut Metrics) -> Option<&'a Student> {
    locate(arr, id, metrics).ok().map(|i| &arr[i])
}

/// Reverse scan shifting greater ids right; one comparison per slot
/// inspected, so appending past the largest id costs a single probe.
pub fn sorted_insert(arr: &mut Vec<Student>, s: Student, metrics: &mut Metrics) {
    let mut at = arr.len();
    while at > 0 {
        metrics.record_comparison();
        if s.id < arr[at - 1].id {
            at -= 1;
        } else {
            break;
        }
    }
    arr.insert(at, s);
}

/// Binary-search the record, then shift left.
pub fn sorted_delete(arr: &mut Vec<Student>, id: u32, metrics: &mut Metrics) -> bool {
    match locate(arr, id, metrics) {
        Ok(i) => {
            arr.remove(i);
            true
        }
        Err(_) => false,
    }
}

/// Sort a freshly loaded table by id so the binary-search ops apply.
pub fn sort_by_id(arr: &mut [Student]) {
    arr.sort_by(by_id);
}
