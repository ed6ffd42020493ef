//! Index-addressed node storage.
//!
//! Every node-based structure in this crate keeps its nodes in an [`Arena`]
//! and links them by [`NodeId`]. Parent back-references are plain indices,
//! so there is no ownership cycle: the arena owns all nodes and a link never
//! keeps a node alive.

use std::ops::{Index, IndexMut};

/// Handle of a node inside an [`Arena`].
pub(crate) type NodeId = usize;

/// A growable table of nodes with slot recycling.
#[derive(Clone, Debug)]
pub(crate) struct Arena<N> {
    slots: Vec<Option<N>>,
    free_list: Vec<NodeId>,
}

impl<N> Arena<N> {
    pub(crate) fn new() -> Self {
        Self {
            slots: Vec::new(),
            free_list: Vec::new(),
        }
    }

    /// Stores a node and returns its handle, reusing a released slot if any.
    pub(crate) fn alloc(&mut self, node: N) -> NodeId {
        if let Some(id) = self.free_list.pop() {
            debug_assert!(self.slots[id].is_none());
            self.slots[id] = Some(node);
            id
        } else {
            self.slots.push(Some(node));
            self.slots.len() - 1
        }
    }

    /// Takes a node out of the arena. Its handle may be handed out again.
    pub(crate) fn release(&mut self, id: NodeId) -> N {
        let node = self.slots[id].take().expect("released a vacant arena slot");
        self.free_list.push(id);
        node
    }

    /// Number of live nodes.
    pub(crate) fn len(&self) -> usize {
        self.slots.len() - self.free_list.len()
    }

    pub(crate) fn clear(&mut self) {
        self.slots.clear();
        self.free_list.clear();
    }
}

impl<N> Default for Arena<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N> Index<NodeId> for Arena<N> {
    type Output = N;

    fn index(&self, id: NodeId) -> &N {
        self.slots[id].as_ref().expect("dangling node handle")
    }
}

impl<N> IndexMut<NodeId> for Arena<N> {
    fn index_mut(&mut self, id: NodeId) -> &mut N {
        self.slots[id].as_mut().expect("dangling node handle")
    }
}

#[cfg(test)]
mod tests {
    use super::Arena;

    #[test]
    fn test_alloc_release_reuse() {
        let mut arena = Arena::new();
        let a = arena.alloc("a");
        let b = arena.alloc("b");
        assert_eq!(arena.len(), 2);
        assert_eq!(arena[a], "a");
        assert_eq!(arena[b], "b");

        assert_eq!(arena.release(a), "a");
        assert_eq!(arena.len(), 1);

        let c = arena.alloc("c");
        assert_eq!(c, a);
        assert_eq!(arena[c], "c");
        assert_eq!(arena.len(), 2);

        arena.clear();
        assert_eq!(arena.len(), 0);
    }

    #[test]
    #[should_panic]
    fn test_released_handle_panics() {
        let mut arena = Arena::new();
        let a = arena.alloc(1);
        arena.release(a);
        let _value: i32 = arena[a];
    }
}
