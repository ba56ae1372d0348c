//! AVL tree: height-balanced binary search tree.
//!
//! Variables:
//!   height(n) : i32, stored per node, leaf = 1, empty link = 0
//!   bf(n)     = height(left) - height(right)
//!
//! Invariant: bf(n) in {-1, 0, 1} at every node after insert and delete,
//! restored by single or double rotations on the way back up.

use std::cmp::Ordering;

use crate::metrics::Metrics;

type Link<T> = Option<Box<AvlNode<T>>>;

struct AvlNode<T> {
    value: T,
    height: i32,
    left: Link<T>,
    right: Link<T>,
}

pub struct Avl<T> {
    root: Link<T>,
    len: usize,
}

fn height<T>(link: &Link<T>) -> i32 {
    link.as_ref().map_or(0, |n| n.height)
}

fn balance_factor<T>(link: &Link<T>) -> i32 {
    link.as_ref().map_or(0, |n| height(&n.left) - height(&n.right))
}

fn update_height<T>(node: &mut AvlNode<T>) {
    node.height = 1 + height(&node.left).max(height(&node.right));
}

fn rotate_right<T>(link: &mut Link<T>) {
    let mut y = link.take().expect("rotate_right on empty link");
    let mut x = y.left.take().expect("rotate_right without left child");
    y.left = x.right.take();
    update_height(&mut y);
    x.right = Some(y);
    update_height(&mut x);
    *link = Some(x);
}

fn rotate_left<T>(link: &mut Link<T>) {
    let mut x = link.take().expect("rotate_left on empty link");
    let mut y = x.right.take().expect("rotate_left without right child");
    x.right = y.left.take();
    update_height(&mut x);
    y.left = Some(x);
    update_height(&mut y);
    *link = Some(y);
}

/// Refresh the height at `link` and rotate if the balance invariant broke.
fn rebalance<T>(link: &mut Link<T>) {
    let Some(node) = link.as_deref_mut() else {
        return;
    };
    update_height(node);
    let bf = height(&node.left) - height(&node.right);
    if bf > 1 {
        if balance_factor(&node.left) < 0 {
            rotate_left(&mut node.left);
        }
        rotate_right(link);
    } else if bf < -1 {
        if balance_factor(&node.right) > 0 {
            rotate_right(&mut node.right);
        }
        rotate_left(link);
    }
}

fn insert_at<T, F>(link: &mut Link<T>, value: T, cmp: &F, metrics: &mut Metrics) -> bool
where
    F: Fn(&T, &T) -> Ordering,
{
    match link {
        None => {
            *link = Some(Box::new(AvlNode {
                value,
                height: 1,
                left: None,
                right: None,
            }));
            true
        }
        Some(node) => {
            let inserted = match metrics.compare(&value, &node.value, cmp) {
                Ordering::Less => insert_at(&mut node.left, value, cmp, metrics),
                Ordering::Greater => insert_at(&mut node.right, value, cmp, metrics),
                Ordering::Equal => false,
            };
            if inserted {
                rebalance(link);
            }
            inserted
        }
    }
}

/// Detach the minimum of a non-empty subtree, rebalancing the path.
fn take_min<T>(link: &mut Link<T>) -> T {
    let has_left = link.as_ref().is_some_and(|n| n.left.is_some());
    if has_left {
        let value = take_min(&mut link.as_mut().expect("checked above").left);
        rebalance(link);
        value
    } else {
        let node = link.take().expect("take_min on empty link");
        *link = node.right;
        node.value
    }
}

fn remove_at<T, F>(link: &mut Link<T>, probe: &F, metrics: &mut Metrics) -> Option<T>
where
    F: Fn(&T) -> Ordering,
{
    let ord = match link.as_deref() {
        None => return None,
        Some(node) => {
            metrics.record_comparison();
            probe(&node.value)
        }
    };

    let removed = match ord {
        Ordering::Less => remove_at(&mut link.as_mut().expect("probed above").left, probe, metrics),
        Ordering::Greater => {
            remove_at(&mut link.as_mut().expect("probed above").right, probe, metrics)
        }
        Ordering::Equal => {
            let node = link.as_deref_mut().expect("probed above");
            if node.left.is_some() && node.right.is_some() {
                // two children: the inorder successor replaces the value
                let successor = take_min(&mut node.right);
                Some(std::mem::replace(&mut node.value, successor))
            } else {
                let mut node = link.take().expect("probed above");
                *link = node.left.take().or_else(|| node.right.take());
                Some(node.value)
            }
        }
    };
    if removed.is_some() {
        rebalance(link);
    }
    removed
}

impl<T> Default for Avl<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Avl<T> {
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn height(&self) -> i32 {
        height(&self.root)
    }

    /// Insert; values comparing equal to a stored one are dropped.
    /// Returns whether the tree grew.
    pub fn insert<F>(&mut self, value: T, cmp: &F, metrics: &mut Metrics) -> bool
    where
        F: Fn(&T, &T) -> Ordering,
    {
        let inserted = insert_at(&mut self.root, value, cmp, metrics);
        if inserted {
            self.len += 1;
        }
        inserted
    }

    /// Iterative descent guided by `probe`, which orders the wanted key
    /// against a stored value. One comparison per node visited.
    pub fn search_by<F>(&self, probe: F, metrics: &mut Metrics) -> Option<&T>
    where
        F: Fn(&T) -> Ordering,
    {
        let mut cur = self.root.as_deref();
        while let Some(node) = cur {
            metrics.record_comparison();
            match probe(&node.value) {
                Ordering::Equal => return Some(&node.value),
                Ordering::Less => cur = node.left.as_deref(),
                Ordering::Greater => cur = node.right.as_deref(),
            }
        }
        None
    }

    /// Remove the value the probe locates, returning it.
    pub fn remove_by<F>(&mut self, probe: F, metrics: &mut Metrics) -> Option<T>
    where
        F: Fn(&T) -> Ordering,
    {
        let removed = remove_at(&mut self.root, &probe, metrics);
        if removed.is_some() {
            self.len -= 1;
        }
        removed
    }

    /// Consuming inorder drain used by the AVL tree-sort variant.
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut out = Vec::with_capacity(self.len);
        let mut stack: Vec<Box<AvlNode<T>>> = Vec::new();
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

    /// Invariant check for tests: every stored height is consistent and
    /// every balance factor is within [-1, 1].
    pub fn is_balanced(&self) -> bool {
        fn check<T>(link: &Link<T>) -> Option<i32> {
            match link {
                None => Some(0),
                Some(node) => {
                    let l = check(&node.left)?;
                    let r = check(&node.right)?;
                    let h = 1 + l.max(r);
                    ((l - r).abs() <= 1 && node.height == h).then_some(h)
                }
            }
        }
        check(&self.root).is_some()
    }

    /// Invariant check for tests: inorder traversal is strictly increasing
    /// under `cmp`.
    pub fn is_bst<F>(&self, cmp: &F) -> bool
    where
        F: Fn(&T, &T) -> Ordering,
    {
        fn walk<'a, T>(link: &'a Link<T>, out: &mut Vec<&'a T>) {
            if let Some(node) = link {
                walk(&node.left, out);
                out.push(&node.value);
                walk(&node.right, out);
            }
        }
        let mut inorder = Vec::with_capacity(self.len);
        walk(&self.root, &mut inorder);
        inorder.windows(2).all(|w| cmp(w[0], w[1]) == Ordering::Less)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled(values: impl IntoIterator<Item = u32>) -> Avl<u32> {
        let mut t = Avl::new();
        let mut m = Metrics::new();
        for v in values {
            t.insert(v, &u32::cmp, &mut m);
        }
        t
    }

    #[test]
    fn sorted_insertion_stays_balanced() {
        let t = filled(0..1024);
        assert!(t.is_balanced());
        assert!(t.is_bst(&u32::cmp));
        assert_eq!(t.len(), 1024);
        // perfectly balanced would be 10; AVL guarantees < 1.44 log2 n
        assert!(t.height() <= 14, "height {}", t.height());
    }

    #[test]
    fn all_rotation_shapes_rebalance() {
        // LL, RR, LR, RL insertion orders
        for order in [[3u32, 2, 1], [1, 2, 3], [3, 1, 2], [1, 3, 2]] {
            let t = filled(order);
            assert!(t.is_balanced());
            assert_eq!(t.height(), 2);
        }
    }

    #[test]
    fn search_counts_path_length() {
        let t = filled([40u32, 20, 60, 10, 30]);
        let mut m = Metrics::new();
        assert_eq!(t.search_by(|v| 30.cmp(v), &mut m), Some(&30));
        assert_eq!(m.comparisons, 3);
        m.reset();
        assert_eq!(t.search_by(|v| 99.cmp(v), &mut m), None);
        assert!(m.comparisons >= 1);
    }

    #[test]
    fn delete_keeps_balance_and_order() {
        let mut t = filled(0..64);
        let mut m = Metrics::new();
        for target in [0u32, 31, 63, 40, 12] {
            assert_eq!(t.remove_by(|v| target.cmp(v), &mut m), Some(target));
            assert!(t.is_balanced(), "unbalanced after removing {target}");
        }
        assert_eq!(t.len(), 59);
        let drained = t.into_sorted_vec();
        assert!(drained.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(drained.len(), 59);
    }

    #[test]
    fn delete_of_two_child_node_uses_successor() {
        let mut t = filled([50u32, 25, 75, 60, 90]);
        let mut m = Metrics::new();
        assert_eq!(t.remove_by(|v| 75.cmp(v), &mut m), Some(75));
        assert!(t.is_balanced());
        assert_eq!(t.into_sorted_vec(), vec![25, 50, 60, 90]);
    }

    #[test]
    fn duplicate_insert_is_dropped() {
        let mut t = filled([5u32, 3, 7]);
        let mut m = Metrics::new();
        assert!(!t.insert(3, &u32::cmp, &mut m));
        assert_eq!(t.len(), 3);
    }
}
