//! One search, insert and delete against three table layouts: an
//! unsorted array (shuffled), an id-sorted array and an AVL tree keyed
//! by id, each op reporting its own comparison count.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::Serialize;

use crate::dataset;
use crate::metrics::Metrics;
use crate::searching::table;
use crate::student::{comparator, Direction, SortKey, Student};
use crate::trees::Avl;

#[derive(Debug, Serialize)]
pub struct OpResult {
    pub ok: bool,
    pub comparisons: u64,
}

#[derive(Debug, Serialize)]
pub struct StructureOps {
    pub structure: &'static str,
    pub search: OpResult,
    pub insert: OpResult,
    pub delete: OpResult,
}

#[derive(Debug, Serialize)]
pub struct TableOpsReport {
    pub records: usize,
    pub target_id: u32,
    pub inserted_id: u32,
    pub structures: Vec<StructureOps>,
}

fn op(ok: bool, metrics: &Metrics) -> OpResult {
    OpResult {
        ok,
        comparisons: metrics.comparisons,
    }
}

pub fn run(students: &[Student], target_id: u32, seed: Option<u64>) -> TableOpsReport {
    let mut rng = dataset::rng(seed);
    let inserted = Student::new(
        rng.gen_range(100_001..=999_999),
        "New Test Student",
        'M',
        85,
        90,
        88,
    );
    let inserted_id = inserted.id;
    let by_id = comparator(SortKey::Id, Direction::Asc);

    let mut unsorted = students.to_vec();
    unsorted.shuffle(&mut rng);

    let mut sorted = students.to_vec();
    table::sort_by_id(&mut sorted);

    let mut avl = Avl::new();
    let mut build = Metrics::new();
    for s in students {
        avl.insert(s.clone(), &by_id, &mut build);
    }

    // unsorted array
    let mut m = Metrics::new();
    let found = table::unsorted_search(&unsorted, target_id, &mut m).is_some();
    let u_search = op(found, &m);
    let mut m = Metrics::new();
    table::unsorted_insert(&mut unsorted, inserted.clone());
    let u_insert = op(true, &m);
    let mut m = Metrics::new();
    let deleted = table::unsorted_delete(&mut unsorted, target_id, &mut m);
    let u_delete = op(deleted, &m);

    // sorted array
    let mut m = Metrics::new();
    let found = table::sorted_search(&sorted, target_id, &mut m).is_some();
    let s_search = op(found, &m);
    let mut m = Metrics::new();
    table::sorted_insert(&mut sorted, inserted.clone(), &mut m);
    let s_insert = op(true, &m);
    let mut m = Metrics::new();
    let deleted = table::sorted_delete(&mut sorted, target_id, &mut m);
    let s_delete = op(deleted, &m);

    // avl tree
    let mut m = Metrics::new();
    let found = avl.search_by(|s: &Student| target_id.cmp(&s.id), &mut m).is_some();
    let a_search = op(found, &m);
    let mut m = Metrics::new();
    let inserted_ok = avl.insert(inserted, &by_id, &mut m);
    let a_insert = op(inserted_ok, &m);
    let mut m = Metrics::new();
    let deleted = avl.remove_by(|s: &Student| target_id.cmp(&s.id), &mut m).is_some();
    let a_delete = op(deleted, &m);

    TableOpsReport {
        records: students.len(),
        target_id,
        inserted_id,
        structures: vec![
            StructureOps { structure: "unsorted-array", search: u_search, insert: u_insert, delete: u_delete },
            StructureOps { structure: "sorted-array", search: s_search, insert: s_insert, delete: s_delete },
            StructureOps { structure: "avl-tree", search: a_search, insert: a_insert, delete: a_delete },
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roster(n: u32) -> Vec<Student> {
        (1..=n)
            .map(|i| Student::new(i, format!("s{i}"), 'F', 50, 60, 70))
            .collect()
    }

    #[test]
    fn every_structure_finds_and_deletes_the_target() {
        let report = run(&roster(200), 137, Some(1));
        assert_eq!(report.structures.len(), 3);
        for s in &report.structures {
            assert!(s.search.ok, "{} search", s.structure);
            assert!(s.insert.ok, "{} insert", s.structure);
            assert!(s.delete.ok, "{} delete", s.structure);
        }
    }

    #[test]
    fn unsorted_insert_is_free() {
        let report = run(&roster(50), 25, Some(2));
        let unsorted = &report.structures[0];
        assert_eq!(unsorted.insert.comparisons, 0);
    }

    #[test]
    fn sorted_and_avl_search_stay_logarithmic() {
        let report = run(&roster(1000), 990, Some(3));
        let sorted = &report.structures[1];
        let avl = &report.structures[2];
        // ceil(log2(1001)) = 10; AVL height is bounded by 1.44 log2(n)
        assert!(sorted.search.comparisons <= 10);
        assert!(avl.search.comparisons <= 15);
    }

    #[test]
    fn missing_target_reports_not_found() {
        let report = run(&roster(10), 9999, Some(4));
        for s in &report.structures {
            assert!(!s.search.ok);
            assert!(!s.delete.ok);
        }
    }
}
