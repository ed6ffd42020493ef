//! The capability shared by [`AvlTree`](crate::AvlTree) and
//! [`UnbalancedTree`](crate::UnbalancedTree).

/// Read-only view of a node in an ordered tree.
///
/// Views are cheap to copy. Two views are equal when they designate the
/// same node of the same tree.
pub trait TreeNode<'a>: Copy + PartialEq {
    type Value: 'a;

    /// The value stored in the node.
    fn value(&self) -> &'a Self::Value;

    /// How many insertions collapsed onto this value.
    fn count(&self) -> usize;

    fn parent(&self) -> Option<Self>;

    fn left(&self) -> Option<Self>;

    fn right(&self) -> Option<Self>;
}

/// An ordered container of values with per-value multiplicity.
///
/// Both tree variants implement this identically, so callers and test
/// suites can be written once against either.
pub trait OrderedTree<T: Ord> {
    type Node<'a>: TreeNode<'a, Value = T>
    where
        Self: 'a,
        T: 'a;

    /// Adds one instance of `value`.
    fn insert(&mut self, value: T) -> &mut Self;

    /// Removes one instance of `value`. Missing values are ignored.
    fn remove(&mut self, value: &T) -> &mut Self;

    /// Returns the node holding `value`, if any.
    fn find(&self, value: &T) -> Option<Self::Node<'_>>;

    fn contains(&self, value: &T) -> bool {
        self.find(value).is_some()
    }

    /// Sum of all node counts.
    fn size(&self) -> usize;

    /// The root node, if the tree is not empty.
    fn head(&self) -> Option<Self::Node<'_>>;
}
