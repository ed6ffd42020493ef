//! Classic in-memory data structures.
//!
//! The centerpiece is [`AvlTree`], a self-balancing binary search tree with
//! parent links and per-value multiplicity. [`UnbalancedTree`] implements the
//! same [`OrderedTree`] contract without balancing. Next to them live a
//! comparator-driven [`BinaryHeap`], a [`PriorityQueue`] built on it, a singly
//! [`LinkedList`], and two [`BloomFilter`] variants.
//!
//! Tree nodes, like list nodes, are stored in an index-addressed arena, so
//! parent back-references never own anything.
//!
//! ```
//! use classic_collections::{AvlTree, OrderedTree, UnbalancedTree};
//!
//! fn fill<T: OrderedTree<i32>>(tree: &mut T) {
//!     for value in 1..=7 {
//!         tree.insert(value);
//!     }
//! }
//!
//! let mut avl = AvlTree::new();
//! let mut bst = UnbalancedTree::new();
//! fill(&mut avl);
//! fill(&mut bst);
//! assert_eq!(avl.height(), 3);
//! assert_eq!(*bst.head().unwrap().value(), 1);
//! ```

mod arena;
pub mod bloom;
pub mod bst;
pub mod heap;
pub mod linked_list;
mod ordered;
pub mod priority_queue;
pub mod traverse;
pub mod tree;

pub use bloom::{
    BloomFilter, BloomFilterConfig, BloomFilterError, MembershipFilter, MicroOptimizedBloomFilter,
};
pub use bst::UnbalancedTree;
pub use heap::{BinaryHeap, BinaryMinHeap, Comparator, MaxFirst, MinFirst};
pub use linked_list::{LinkedList, ListHandle, Position};
pub use ordered::{OrderedTree, TreeNode};
pub use priority_queue::PriorityQueue;
pub use tree::AvlTree;
