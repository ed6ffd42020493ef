use std::cmp::{self, Ordering};
use std::fmt;
use std::ptr;

use crate::arena::{Arena, NodeId};
use crate::ordered::{OrderedTree, TreeNode};

/// A self-balancing binary search tree (AVL tree).
///
/// Inserting a value that is already present bumps the count of its node
/// instead of adding a node, so [`size`](AvlTree::size) is the number of
/// insertions still standing, not the number of nodes.
///
/// ```
/// use classic_collections::AvlTree;
///
/// let mut tree = AvlTree::new();
/// tree.insert(10).insert(20).insert(30).insert(20);
///
/// let head = tree.head().unwrap();
/// assert_eq!(*head.value(), 20);
/// assert_eq!(head.count(), 2);
/// assert_eq!(tree.size(), 4);
///
/// tree.remove(&20).remove(&20);
/// assert!(!tree.contains(&20));
/// ```
#[derive(Clone)]
pub struct AvlTree<T> {
    nodes: Arena<Node<T>>,
    root: Link,
    size: usize,
}

type Link = Option<NodeId>;

#[derive(Clone)]
struct Node<T> {
    value: T,
    count: usize,
    height: usize,
    balance_factor: isize,
    parent: Link,
    left: Link,
    right: Link,
}

impl<T> Node<T> {
    fn new(parent: Link, value: T) -> Self {
        Self {
            value,
            count: 1,
            height: 1,
            balance_factor: 0,
            parent,
            left: None,
            right: None,
        }
    }
}

impl<T> AvlTree<T> {
    /// Creates an empty tree.
    /// No memory is allocated until the first value is inserted.
    pub fn new() -> Self {
        Self {
            nodes: Arena::new(),
            root: None,
            size: 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Returns the number of values in the tree, duplicates included.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns the number of distinct values in the tree.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn height(&self) -> usize {
        match self.root {
            None => 0,
            Some(root) => self.nodes[root].height,
        }
    }

    /// Removes all values, deallocating all nodes.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.root = None;
        self.size = 0;
    }

    pub fn head(&self) -> Option<NodeRef<'_, T>> {
        self.node_ref(self.root)
    }

    fn node_ref(&self, link: Link) -> Option<NodeRef<'_, T>> {
        link.map(|id| NodeRef { tree: self, id })
    }
}

impl<T: Ord> AvlTree<T> {
    /// Returns the node holding `value`, or the node under which `value`
    /// would be attached. Returns `None` only for an empty tree.
    pub fn find_closest(&self, value: &T) -> Option<NodeRef<'_, T>> {
        self.node_ref(self.find_closest_id(value))
    }

    /// Returns the node holding `value`.
    pub fn find(&self, value: &T) -> Option<NodeRef<'_, T>> {
        self.node_ref(self.find_id(value))
    }

    pub fn contains(&self, value: &T) -> bool {
        self.find_id(value).is_some()
    }

    /// Adds one instance of `value` and restores balance.
    pub fn insert(&mut self, value: T) -> &mut Self {
        match self.find_closest_id(&value) {
            None => self.root = Some(self.nodes.alloc(Node::new(None, value))),
            Some(closest) => match value.cmp(&self.nodes[closest].value) {
                Ordering::Equal => self.nodes[closest].count += 1,
                ordering => {
                    let node = self.nodes.alloc(Node::new(Some(closest), value));
                    if ordering == Ordering::Less {
                        self.nodes[closest].left = Some(node);
                    } else {
                        self.nodes[closest].right = Some(node);
                    }
                    self.rebalance(Some(closest));
                }
            },
        }
        self.size += 1;
        self
    }

    /// Removes one instance of `value`. Does nothing if `value` is absent.
    pub fn remove(&mut self, value: &T) -> &mut Self {
        if let Some(node) = self.find_id(value) {
            debug_assert!(self.size >= 1);
            if self.nodes[node].count > 1 {
                self.nodes[node].count -= 1;
            } else {
                self.unlink_node(node);
                self.nodes.release(node);
            }
            self.size -= 1;
        }
        self
    }

    /// Panics if any structural invariant is broken.
    #[cfg(any(test, feature = "consistency_check"))]
    pub fn check_consistency(&self) {
        // Check root link
        if let Some(root) = self.root {
            assert!(self.nodes[root].parent.is_none());
        }

        // Check tree nodes
        let mut num_nodes = 0;
        let mut size = 0;
        for node in crate::traverse::preorder(self.head()) {
            let mut left_height = 0;
            let mut right_height = 0;

            // Check link for left child node
            if let Some(left) = node.left() {
                assert!(left.parent() == Some(node));
                assert!(left.value() < node.value());
                left_height = left.height();
            }

            // Check link for right child node
            if let Some(right) = node.right() {
                assert!(right.parent() == Some(node));
                assert!(right.value() > node.value());
                right_height = right.height();
            }

            // Check height and balance factor
            assert_eq!(node.height(), 1 + cmp::max(left_height, right_height));
            assert_eq!(
                node.balance_factor(),
                left_height as isize - right_height as isize
            );

            // Check AVL condition (nearly balance)
            assert!(node.balance_factor().abs() <= 1);

            assert!(node.count() >= 1);
            num_nodes += 1;
            size += node.count();
        }

        // Check number of nodes and values
        assert_eq!(num_nodes, self.nodes.len());
        assert_eq!(size, self.size);
    }

    fn find_closest_id(&self, value: &T) -> Link {
        let mut current = self.root?;
        loop {
            let node = &self.nodes[current];
            let next = match value.cmp(&node.value) {
                Ordering::Less => node.left,
                Ordering::Greater => node.right,
                Ordering::Equal => None,
            };
            match next {
                Some(child) => current = child,
                None => return Some(current),
            }
        }
    }

    fn find_id(&self, value: &T) -> Link {
        self.find_closest_id(value)
            .filter(|&closest| self.nodes[closest].value == *value)
    }

    fn unlink_node(&mut self, node: NodeId) {
        let Node {
            left,
            right,
            parent,
            balance_factor,
            ..
        } = self.nodes[node];

        match (left, right) {
            (Some(left), Some(right)) => {
                // Replace node by its in-order neighbour from the taller side
                let from_left = balance_factor >= 0;
                let replacement = if from_left {
                    self.max_descendant(left)
                } else {
                    self.min_descendant(right)
                };
                let replacement_parent = self.nodes[replacement]
                    .parent
                    .expect("descendant without parent");
                let replacement_child = if from_left {
                    self.nodes[replacement].left
                } else {
                    self.nodes[replacement].right
                };

                // Neighbour is stem or leaf, unlink from tree
                self.replace_in_parent(replacement, replacement_child);

                // Replace node by neighbour (re-read children, one may have been the neighbour)
                let (left, right) = (self.nodes[node].left, self.nodes[node].right);
                self.set_left(replacement, left);
                self.set_right(replacement, right);
                self.replace_in_parent(node, Some(replacement));

                // Lowest node whose sub tree height may have changed
                let rebalance_from = match replacement_child {
                    Some(child) => child,
                    None if replacement_parent == node => replacement,
                    None => replacement_parent,
                };
                self.rebalance(Some(rebalance_from));
            }
            (child, None) | (None, child) => {
                self.replace_in_parent(node, child);
                self.rebalance(parent);
            }
        }
    }

    fn max_descendant(&self, mut node: NodeId) -> NodeId {
        while let Some(right) = self.nodes[node].right {
            node = right;
        }
        node
    }

    fn min_descendant(&self, mut node: NodeId) -> NodeId {
        while let Some(left) = self.nodes[node].left {
            node = left;
        }
        node
    }

    // Points the slot holding `node` (parent's child link or root) at `new_child`.
    fn replace_in_parent(&mut self, node: NodeId, new_child: Link) {
        let parent = self.nodes[node].parent;
        match parent {
            None => self.root = new_child,
            Some(parent) => {
                if self.nodes[parent].left == Some(node) {
                    self.nodes[parent].left = new_child;
                } else {
                    self.nodes[parent].right = new_child;
                }
            }
        }
        if let Some(child) = new_child {
            self.nodes[child].parent = parent;
        }
    }

    fn set_left(&mut self, node: NodeId, child: Link) {
        self.nodes[node].left = child;
        if let Some(child) = child {
            self.nodes[child].parent = Some(node);
        }
    }

    fn set_right(&mut self, node: NodeId, child: Link) {
        self.nodes[node].right = child;
        if let Some(child) = child {
            self.nodes[child].parent = Some(node);
        }
    }

    fn link_height(&self, link: Link) -> usize {
        match link {
            None => 0,
            Some(node) => self.nodes[node].height,
        }
    }

    fn adjust_height(&mut self, node: NodeId) {
        let left_height = self.link_height(self.nodes[node].left);
        let right_height = self.link_height(self.nodes[node].right);
        let node = &mut self.nodes[node];
        node.height = 1 + cmp::max(left_height, right_height);
        node.balance_factor = left_height as isize - right_height as isize;
    }

    fn rotate_left(&mut self, node: NodeId) {
        let right = self.nodes[node].right.expect("rotate left without right child");
        let right_left = self.nodes[right].left;
        self.set_right(node, right_left);
        self.replace_in_parent(node, Some(right));
        self.set_left(right, Some(node));

        self.adjust_height(node);
        self.adjust_height(right);
    }

    fn rotate_right(&mut self, node: NodeId) {
        let left = self.nodes[node].left.expect("rotate right without left child");
        let left_right = self.nodes[left].right;
        self.set_left(node, left_right);
        self.replace_in_parent(node, Some(left));
        self.set_right(left, Some(node));

        self.adjust_height(node);
        self.adjust_height(left);
    }

    // Rebalance nodes starting from given position up to the root node.
    // Does not stop after the first rotation, removals may need one per level.
    fn rebalance(&mut self, start_from: Link) {
        let mut current = start_from;
        while let Some(node) = current {
            self.rebalance_node(node);
            current = self.nodes[node].parent;
        }
    }

    fn rebalance_node(&mut self, node: NodeId) {
        self.adjust_height(node);
        let balance_factor = self.nodes[node].balance_factor;
        if balance_factor > 1 {
            // Rebalance right
            let left = self.nodes[node].left.expect("left heavy without left child");
            if self.nodes[left].balance_factor < 0 {
                self.rotate_left(left);
            }
            self.rotate_right(node);
        } else if balance_factor < -1 {
            // Rebalance left
            let right = self.nodes[node].right.expect("right heavy without right child");
            if self.nodes[right].balance_factor > 0 {
                self.rotate_right(right);
            }
            self.rotate_left(node);
        }
    }
}

impl<T> Default for AvlTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for AvlTree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Flat pre-order listing, a degenerate tree must not recurse per level
        let nodes = crate::traverse::preorder(self.head());
        f.debug_list()
            .entries(nodes.map(|node| (node.value(), node.count())))
            .finish()
    }
}

impl<T: Ord> Extend<T> for AvlTree<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<T: Ord> FromIterator<T> for AvlTree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<T: Ord> OrderedTree<T> for AvlTree<T> {
    type Node<'a>
        = NodeRef<'a, T>
    where
        T: 'a;

    fn insert(&mut self, value: T) -> &mut Self {
        AvlTree::insert(self, value)
    }

    fn remove(&mut self, value: &T) -> &mut Self {
        AvlTree::remove(self, value)
    }

    fn find(&self, value: &T) -> Option<NodeRef<'_, T>> {
        AvlTree::find(self, value)
    }

    fn contains(&self, value: &T) -> bool {
        AvlTree::contains(self, value)
    }

    fn size(&self) -> usize {
        self.size
    }

    fn head(&self) -> Option<NodeRef<'_, T>> {
        AvlTree::head(self)
    }
}

/// A view of one node of an [`AvlTree`].
pub struct NodeRef<'a, T> {
    tree: &'a AvlTree<T>,
    id: NodeId,
}

impl<'a, T> NodeRef<'a, T> {
    fn node(&self) -> &'a Node<T> {
        &self.tree.nodes[self.id]
    }

    pub fn value(&self) -> &'a T {
        &self.node().value
    }

    pub fn count(&self) -> usize {
        self.node().count
    }

    /// Height of the sub tree rooted here; leaves have height 1.
    pub fn height(&self) -> usize {
        self.node().height
    }

    /// Left sub tree height minus right sub tree height.
    pub fn balance_factor(&self) -> isize {
        self.node().balance_factor
    }

    pub fn parent(&self) -> Option<Self> {
        self.tree.node_ref(self.node().parent)
    }

    pub fn left(&self) -> Option<Self> {
        self.tree.node_ref(self.node().left)
    }

    pub fn right(&self) -> Option<Self> {
        self.tree.node_ref(self.node().right)
    }
}

impl<T> Clone for NodeRef<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for NodeRef<'_, T> {}

impl<T> PartialEq for NodeRef<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        ptr::eq(self.tree, other.tree) && self.id == other.id
    }
}

impl<T> Eq for NodeRef<'_, T> {}

impl<T: fmt::Debug> fmt::Debug for NodeRef<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("value", self.value())
            .field("count", &self.count())
            .field("height", &self.height())
            .field("left", &self.left().map(|left| left.value()))
            .field("right", &self.right().map(|right| right.value()))
            .finish()
    }
}

impl<'a, T> TreeNode<'a> for NodeRef<'a, T> {
    type Value = T;

    fn value(&self) -> &'a T {
        NodeRef::value(self)
    }

    fn count(&self) -> usize {
        NodeRef::count(self)
    }

    fn parent(&self) -> Option<Self> {
        NodeRef::parent(self)
    }

    fn left(&self) -> Option<Self> {
        NodeRef::left(self)
    }

    fn right(&self) -> Option<Self> {
        NodeRef::right(self)
    }
}
