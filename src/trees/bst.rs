//! Unbalanced binary search tree.
//!
//! Variables:
//!   root : Option<Box<Node<T>>>
//!   len  : usize, stored values
//!
//! Equations:
//!   insert: descend by comparator, attach at the None slot   O(h)
//!   search: iterative descent, one comparison per node       O(h)
//!   h ranges from log2(len) to len-1 (sorted insertion order).

use std::cmp::Ordering;

use crate::metrics::Metrics;

struct Node<T> {
    value: T,
    left: Option<Box<Node<T>>>,
    right: Option<Box<Node<T>>>,
}

pub struct Bst<T> {
    root: Option<Box<Node<T>>>,
    len: usize,
}

impl<T> Default for Bst<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Bst<T> {
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Insert, ignoring values that compare equal to an existing one.
    /// One comparison is counted per node visited.
    pub fn insert<F>(&mut self, value: T, cmp: &F, metrics: &mut Metrics)
    where
        F: Fn(&T, &T) -> Ordering,
    {
        let mut cur = &mut self.root;
        while let Some(node) = cur {
            match metrics.compare(&value, &node.value, cmp) {
                Ordering::Less => cur = &mut node.left,
                Ordering::Greater => cur = &mut node.right,
                Ordering::Equal => return,
            }
        }
        *cur = Some(Box::new(Node {
            value,
            left: None,
            right: None,
        }));
        self.len += 1;
    }

    /// Tree-sort insert: equal values descend right so duplicates survive.
    pub fn insert_duplicate<F>(&mut self, value: T, cmp: &F, metrics: &mut Metrics)
    where
        F: Fn(&T, &T) -> Ordering,
    {
        let mut cur = &mut self.root;
        while let Some(node) = cur {
            match metrics.compare(&value, &node.value, cmp) {
                Ordering::Less => cur = &mut node.left,
                _ => cur = &mut node.right,
            }
        }
        *cur = Some(Box::new(Node {
            value,
            left: None,
            right: None,
        }));
        self.len += 1;
    }

    /// Iterative descent; one comparison per node visited.
    pub fn search<F>(&self, target: &T, cmp: &F, metrics: &mut Metrics) -> Option<&T>
    where
        F: Fn(&T, &T) -> Ordering,
    {
        let mut cur = self.root.as_deref();
        while let Some(node) = cur {
            match metrics.compare(target, &node.value, cmp) {
                Ordering::Equal => return Some(&node.value),
                Ordering::Less => cur = node.left.as_deref(),
                Ordering::Greater => cur = node.right.as_deref(),
            }
        }
        None
    }

    /// Consuming inorder drain; iterative so degenerate trees cannot
    /// exhaust the call stack.
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut out = Vec::with_capacity(self.len);
        let mut stack: Vec<Box<Node<T>>> = Vec::new();
        let mut cur = self.root.take();
        while cur.is_some() || !stack.is_empty() {
            while let Some(mut node) = cur {
                cur = node.left.take();
                stack.push(node);
            }
            if let Some(mut node) = stack.pop() {
                cur = node.right.take();
                out.push(node.value);
            }
        }
        out
    }

    pub fn height(&self) -> usize {
        fn depth<T>(node: &Option<Box<Node<T>>>) -> usize {
            match node {
                None => 0,
                Some(n) => 1 + depth(&n.left).max(depth(&n.right)),
            }
        }
        depth(&self.root)
    }
}

impl<T> Drop for Bst<T> {
    // iterative teardown; a sorted insertion order builds a chain as deep
    // as len and the default recursive drop would overflow on it
    fn drop(&mut self) {
        let mut stack = Vec::new();
        if let Some(root) = self.root.take() {
            stack.push(root);
        }
        while let Some(mut node) = stack.pop() {
            if let Some(l) = node.left.take() {
                stack.push(l);
            }
            if let Some(r) = node.right.take() {
                stack.push(r);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled(values: &[u32]) -> Bst<u32> {
        let mut t = Bst::new();
        let mut m = Metrics::new();
        for &v in values {
            t.insert(v, &u32::cmp, &mut m);
        }
        t
    }

    #[test]
    fn search_counts_nodes_on_the_path() {
        let t = filled(&[50, 30, 70, 20, 40]);
        let mut m = Metrics::new();
        assert_eq!(t.search(&40, &u32::cmp, &mut m), Some(&40));
        // path 50 -> 30 -> 40
        assert_eq!(m.comparisons, 3);
    }

    #[test]
    fn duplicate_insert_is_ignored() {
        let mut t = filled(&[5, 3]);
        let mut m = Metrics::new();
        t.insert(3, &u32::cmp, &mut m);
        assert_eq!(t.len(), 2);
    }

    #[test]
    fn sorted_input_degenerates_to_a_chain() {
        let t = filled(&[1, 2, 3, 4, 5]);
        assert_eq!(t.height(), 5);
    }

    #[test]
    fn inorder_drain_is_sorted_with_duplicates() {
        let mut t = Bst::new();
        let mut m = Metrics::new();
        for v in [4u32, 1, 4, 3] {
            t.insert_duplicate(v, &u32::cmp, &mut m);
        }
        assert_eq!(t.into_sorted_vec(), vec![1, 3, 4, 4]);
    }

    #[test]
    fn deep_chain_drops_without_overflow() {
        // build the right-chain directly; inserting would walk it each time
        let mut root = None;
        for v in (0..200_000u32).rev() {
            root = Some(Box::new(Node {
                value: v,
                left: None,
                right: root,
            }));
        }
        drop(Bst { root, len: 200_000 });
    }
}
