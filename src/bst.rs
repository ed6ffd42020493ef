//! A plain binary search tree without any balancing.
//!
//! Shares the node layout and the [`OrderedTree`] contract of
//! [`AvlTree`](crate::AvlTree), minus heights. Sorted input degrades it to a
//! list; it exists as the baseline the AVL tree is measured against.

use std::cmp::Ordering;
use std::fmt;
use std::ptr;

use crate::arena::{Arena, NodeId};
use crate::ordered::{OrderedTree, TreeNode};

type Link = Option<NodeId>;

/// An unbalanced binary search tree counting duplicate values.
#[derive(Clone)]
pub struct UnbalancedTree<T> {
    nodes: Arena<Node<T>>,
    root: Link,
    size: usize,
}

#[derive(Clone)]
struct Node<T> {
    value: T,
    count: usize,
    parent: Link,
    left: Link,
    right: Link,
}

impl<T> UnbalancedTree<T> {
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

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

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

impl<T: Ord> UnbalancedTree<T> {
    pub fn find_closest(&self, value: &T) -> Option<NodeRef<'_, T>> {
        self.node_ref(self.find_closest_id(value))
    }

    pub fn find(&self, value: &T) -> Option<NodeRef<'_, T>> {
        self.node_ref(self.find_id(value))
    }

    pub fn contains(&self, value: &T) -> bool {
        self.find_id(value).is_some()
    }

    pub fn insert(&mut self, value: T) -> &mut Self {
        match self.find_closest_id(&value) {
            None => self.root = Some(self.nodes.alloc(Node::new(value))),
            Some(closest) => {
                if self.nodes[closest].value == value {
                    self.nodes[closest].count += 1;
                } else {
                    let node = self.nodes.alloc(Node::new(value));
                    self.attach(closest, node);
                }
            }
        }
        self.size += 1;
        self
    }

    pub fn remove(&mut self, value: &T) -> &mut Self {
        if let Some(node) = self.find_id(value) {
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

    /// Panics if a link or the ordering is broken.
    #[cfg(any(test, feature = "consistency_check"))]
    pub fn check_consistency(&self) {
        if let Some(root) = self.root {
            assert!(self.nodes[root].parent.is_none());
        }

        let mut num_nodes = 0;
        let mut size = 0;
        for node in crate::traverse::preorder(self.head()) {
            if let Some(left) = node.left() {
                assert!(left.parent() == Some(node));
                assert!(left.value() < node.value());
            }
            if let Some(right) = node.right() {
                assert!(right.parent() == Some(node));
                assert!(right.value() > node.value());
            }
            assert!(node.count() >= 1);
            num_nodes += 1;
            size += node.count();
        }
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

    // Hangs `node` (and whatever hangs below it) under `parent` on the side its value sorts to.
    fn attach(&mut self, parent: NodeId, node: NodeId) {
        if self.nodes[node].value < self.nodes[parent].value {
            self.nodes[parent].left = Some(node);
        } else {
            self.nodes[parent].right = Some(node);
        }
        self.nodes[node].parent = Some(parent);
    }

    fn unlink_node(&mut self, node: NodeId) {
        let Node { left, right, .. } = self.nodes[node];
        match right {
            Some(right) => {
                // Promote the right sub tree, then hang the left sub tree back
                // wherever a search for its root ends.
                self.nodes[node].left = None;
                self.replace_in_parent(node, Some(right));
                if let Some(left) = left {
                    self.nodes[left].parent = None;
                    let closest = self
                        .find_closest_id(&self.nodes[left].value)
                        .expect("right sub tree was just promoted");
                    self.attach(closest, left);
                }
            }
            None => self.replace_in_parent(node, left),
        }
    }

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
}

impl<T> Node<T> {
    fn new(value: T) -> Self {
        Self {
            value,
            count: 1,
            parent: None,
            left: None,
            right: None,
        }
    }
}

impl<T> Default for UnbalancedTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for UnbalancedTree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Flat pre-order listing, a degenerate tree must not recurse per level
        let nodes = crate::traverse::preorder(self.head());
        f.debug_list()
            .entries(nodes.map(|node| (node.value(), node.count())))
            .finish()
    }
}

impl<T: Ord> Extend<T> for UnbalancedTree<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        iter.into_iter().for_each(|value| {
            self.insert(value);
        });
    }
}

impl<T: Ord> FromIterator<T> for UnbalancedTree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<T: Ord> OrderedTree<T> for UnbalancedTree<T> {
    type Node<'a>
        = NodeRef<'a, T>
    where
        T: 'a;

    fn insert(&mut self, value: T) -> &mut Self {
        UnbalancedTree::insert(self, value)
    }

    fn remove(&mut self, value: &T) -> &mut Self {
        UnbalancedTree::remove(self, value)
    }

    fn find(&self, value: &T) -> Option<NodeRef<'_, T>> {
        UnbalancedTree::find(self, value)
    }

    fn contains(&self, value: &T) -> bool {
        UnbalancedTree::contains(self, value)
    }

    fn size(&self) -> usize {
        self.size
    }

    fn head(&self) -> Option<NodeRef<'_, T>> {
        UnbalancedTree::head(self)
    }
}

/// A view of one node of an [`UnbalancedTree`].
pub struct NodeRef<'a, T> {
    tree: &'a UnbalancedTree<T>,
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
