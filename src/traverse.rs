//! Tree traversal over any [`TreeNode`] shape.

use crate::ordered::TreeNode;

/// Visits `start` and all its descendants in pre-order.
///
/// `start` is usually a tree's head but can be any node, in which case only
/// that sub-tree is visited.
///
/// ```
/// use classic_collections::{traverse, AvlTree, TreeNode};
///
/// let mut tree = AvlTree::new();
/// tree.insert(2).insert(1).insert(3);
///
/// let values: Vec<i32> = traverse::preorder(tree.head()).map(|n| *n.value()).collect();
/// assert_eq!(values, [2, 1, 3]);
/// ```
pub fn preorder<'a, N: TreeNode<'a>>(start: Option<N>) -> Preorder<N> {
    Preorder {
        stack: start.into_iter().collect(),
    }
}

/// Pre-order iterator returned by [`preorder`].
pub struct Preorder<N> {
    stack: Vec<N>,
}

impl<'a, N: TreeNode<'a>> Iterator for Preorder<N> {
    type Item = N;

    fn next(&mut self) -> Option<N> {
        let node = self.stack.pop()?;
        // Right goes first so that the left sub tree is popped next.
        if let Some(right) = node.right() {
            self.stack.push(right);
        }
        if let Some(left) = node.left() {
            self.stack.push(left);
        }
        Some(node)
    }
}
