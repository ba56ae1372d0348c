/// Owned binary-tree node built from a validated grammar string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub label: String,
    pub left: Option<Box<Node>>,
    pub right: Option<Box<Node>>,
}

impl Node {
    pub fn leaf(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            left: None,
            right: None,
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// Edge height: a leaf is 0.
    pub fn height(&self) -> i32 {
        if self.is_leaf() {
            return 0;
        }
        let l = self.left.as_deref().map_or(-1, Node::height);
        let r = self.right.as_deref().map_or(-1, Node::height);
        1 + l.max(r)
    }

    pub fn node_count(&self) -> usize {
        1 + self.left.as_deref().map_or(0, Node::node_count)
            + self.right.as_deref().map_or(0, Node::node_count)
    }

    pub fn leaf_count(&self) -> usize {
        if self.is_leaf() {
            return 1;
        }
        self.left.as_deref().map_or(0, Node::leaf_count)
            + self.right.as_deref().map_or(0, Node::leaf_count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grammar::build;

    #[test]
    fn metrics_of_single_node() {
        let tree = build("(a)").unwrap();
        assert_eq!(tree.height(), 0);
        assert_eq!(tree.node_count(), 1);
        assert_eq!(tree.leaf_count(), 1);
    }

    #[test]
    fn metrics_of_nested_tree() {
        // a -> (b -> (c, d), e)
        let tree = build("(a (b (c d) e))").unwrap();
        assert_eq!(tree.height(), 2);
        assert_eq!(tree.node_count(), 5);
        assert_eq!(tree.leaf_count(), 3);
    }

    #[test]
    fn one_child_chain_counts_one_leaf() {
        let tree = build("(a (b (c)))").unwrap();
        assert_eq!(tree.height(), 2);
        assert_eq!(tree.node_count(), 3);
        assert_eq!(tree.leaf_count(), 1);
    }
}
