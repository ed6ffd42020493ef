//! A singly linked list addressed through node handles.

use std::fmt;

use crate::arena::{Arena, NodeId};

/// Handle of a node in a [`LinkedList`].
///
/// A handle stays valid until its node is removed. Using it afterwards is a
/// bug in the caller and panics (or, once the slot is reused, designates
/// another node).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ListHandle(NodeId);

/// A place in the list where a node can be added or removed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Position {
    /// In front of the head.
    Start,
    /// Right behind the given node.
    After(ListHandle),
}

/// A singly linked list.
///
/// ```
/// use classic_collections::{LinkedList, Position};
///
/// let mut list = LinkedList::new();
/// let c = list.add_to_start('c');
/// list.add_to_start('a');
/// list.add_after(c, 'd');
///
/// let before_c = list.find_node_before(|&e, _| e == 'c').unwrap();
/// list.add_at(before_c, 'b');
/// assert_eq!(list.iter().collect::<String>(), "abcd");
///
/// assert_eq!(list.remove_at(Position::Start), Some('a'));
/// assert_eq!(list.peek(), Some(&'b'));
/// ```
#[derive(Clone)]
pub struct LinkedList<T> {
    nodes: Arena<Node<T>>,
    head: Option<NodeId>,
    size: usize,
}

#[derive(Clone)]
struct Node<T> {
    element: T,
    next: Option<NodeId>,
}

impl<T> LinkedList<T> {
    pub fn new() -> Self {
        Self {
            nodes: Arena::new(),
            head: None,
            size: 0,
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    pub fn head(&self) -> Option<ListHandle> {
        self.head.map(ListHandle)
    }

    pub fn next(&self, node: ListHandle) -> Option<ListHandle> {
        self.nodes[node.0].next.map(ListHandle)
    }

    pub fn element(&self, node: ListHandle) -> &T {
        &self.nodes[node.0].element
    }

    pub fn element_mut(&mut self, node: ListHandle) -> &mut T {
        &mut self.nodes[node.0].element
    }

    /// Returns the first element.
    pub fn peek(&self) -> Option<&T> {
        self.head.map(|head| &self.nodes[head].element)
    }

    pub fn add_to_start(&mut self, element: T) -> ListHandle {
        self.add_at(Position::Start, element)
    }

    pub fn unshift(&mut self, element: T) -> ListHandle {
        self.add_to_start(element)
    }

    pub fn add_after(&mut self, node: ListHandle, element: T) -> ListHandle {
        self.add_at(Position::After(node), element)
    }

    pub fn add_at(&mut self, position: Position, element: T) -> ListHandle {
        let next = *self.link(position);
        let id = self.nodes.alloc(Node { element, next });
        *self.link_mut(position) = Some(id);
        self.size += 1;
        ListHandle(id)
    }

    pub fn remove_from_start(&mut self) -> Option<T> {
        self.remove_at(Position::Start)
    }

    pub fn shift(&mut self) -> Option<T> {
        self.remove_from_start()
    }

    /// Removes the node following `node`, if there is one.
    pub fn remove_after(&mut self, node: ListHandle) -> Option<T> {
        self.remove_at(Position::After(node))
    }

    /// Removes the node at `position`, i.e. the head for
    /// [`Position::Start`] or the successor of the given node.
    pub fn remove_at(&mut self, position: Position) -> Option<T> {
        let id = (*self.link(position))?;
        let removed = self.nodes.release(id);
        *self.link_mut(position) = removed.next;
        self.size -= 1;
        Some(removed.element)
    }

    /// Returns the first node whose element satisfies `predicate`, which
    /// also receives the element's index.
    pub fn find_node<F>(&self, mut predicate: F) -> Option<ListHandle>
    where
        F: FnMut(&T, usize) -> bool,
    {
        self.iter_nodes()
            .enumerate()
            .find(|&(index, node)| predicate(&self.nodes[node].element, index))
            .map(|(_, node)| ListHandle(node))
    }

    /// Returns the position just before the first matching node, so that
    /// [`remove_at`](LinkedList::remove_at) removes the match.
    pub fn find_node_before<F>(&self, mut predicate: F) -> Option<Position>
    where
        F: FnMut(&T, usize) -> bool,
    {
        let mut before = Position::Start;
        for (index, node) in self.iter_nodes().enumerate() {
            if predicate(&self.nodes[node].element, index) {
                return Some(before);
            }
            before = Position::After(ListHandle(node));
        }
        None
    }

    pub fn contains(&self, element: &T) -> bool
    where
        T: PartialEq,
    {
        self.find_node(|e, _| e == element).is_some()
    }

    /// Iterates elements from the head.
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        self.iter_nodes().map(move |node| &self.nodes[node].element)
    }

    pub fn clear(&mut self) {
        self.nodes.clear();
        self.head = None;
        self.size = 0;
    }

    fn iter_nodes(&self) -> impl Iterator<Item = NodeId> + '_ {
        std::iter::successors(self.head, move |&node| self.nodes[node].next)
    }

    fn link(&self, position: Position) -> &Option<NodeId> {
        match position {
            Position::Start => &self.head,
            Position::After(node) => &self.nodes[node.0].next,
        }
    }

    fn link_mut(&mut self, position: Position) -> &mut Option<NodeId> {
        match position {
            Position::Start => &mut self.head,
            Position::After(node) => &mut self.nodes[node.0].next,
        }
    }
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for LinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::{LinkedList, Position};

    fn abc() -> LinkedList<&'static str> {
        let mut list = LinkedList::new();
        list.add_to_start("c");
        list.add_to_start("b");
        list.add_to_start("a");
        list
    }

    #[test]
    fn test_empty() {
        let mut list = LinkedList::<i32>::new();
        assert!(list.is_empty());
        assert_eq!(list.size(), 0);
        assert_eq!(list.peek(), None);
        assert_eq!(list.shift(), None);
        assert_eq!(list.find_node(|_, _| true), None);
        assert_eq!(list.find_node_before(|_, _| true), None);
    }

    #[test]
    fn test_add_to_start() {
        let list = abc();
        assert_eq!(list.size(), 3);
        assert_eq!(list.peek(), Some(&"a"));
        assert_eq!(list.iter().copied().collect::<Vec<_>>(), ["a", "b", "c"]);
    }

    #[test]
    fn test_add_after() {
        let mut list = abc();
        let b = list.find_node(|&e, _| e == "b").unwrap();
        let b2 = list.add_after(b, "b2");
        assert_eq!(list.next(b), Some(b2));
        assert_eq!(*list.element(b2), "b2");
        assert_eq!(list.iter().copied().collect::<Vec<_>>(), ["a", "b", "b2", "c"]);
        assert_eq!(list.size(), 4);
    }

    #[test]
    fn test_remove() {
        let mut list = abc();
        let a = list.head().unwrap();
        assert_eq!(list.remove_after(a), Some("b"));
        assert_eq!(list.iter().copied().collect::<Vec<_>>(), ["a", "c"]);

        let c = list.next(a).unwrap();
        assert_eq!(list.remove_after(c), None);
        assert_eq!(list.size(), 2);

        assert_eq!(list.remove_from_start(), Some("a"));
        assert_eq!(list.unshift("z"), list.head().unwrap());
        assert_eq!(list.iter().copied().collect::<Vec<_>>(), ["z", "c"]);
    }

    #[test]
    fn test_find_node_passes_index() {
        let list = abc();
        let second = list.find_node(|_, index| index == 1).unwrap();
        assert_eq!(*list.element(second), "b");
        assert_eq!(list.find_node(|&e, _| e == "x"), None);
    }

    #[test]
    fn test_find_node_before() {
        let mut list = abc();
        assert_eq!(list.find_node_before(|&e, _| e == "a"), Some(Position::Start));

        let before_c = list.find_node_before(|&e, _| e == "c").unwrap();
        let b = list.find_node(|&e, _| e == "b").unwrap();
        assert_eq!(before_c, Position::After(b));
        assert_eq!(list.remove_at(before_c), Some("c"));
        assert_eq!(list.find_node_before(|&e, _| e == "c"), None);
    }

    #[test]
    fn test_contains() {
        let mut list = abc();
        assert!(list.contains(&"b"));
        assert!(!list.contains(&"d"));
        *list.element_mut(list.head().unwrap()) = "d";
        assert!(list.contains(&"d"));
        assert!(!list.contains(&"a"));
    }
}
