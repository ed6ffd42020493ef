use std::fmt;

use crate::heap::{BinaryHeap, Comparator};

/// A queue handing out the element with the highest priority first.
///
/// ```
/// use classic_collections::PriorityQueue;
///
/// let mut queue = PriorityQueue::new();
/// queue.enqueue("low", 1);
/// queue.enqueue("high", 10);
/// assert_eq!(queue.peek(), Some(&"high"));
/// assert_eq!(queue.dequeue(), Some("high"));
/// assert_eq!(queue.dequeue(), Some("low"));
/// assert_eq!(queue.dequeue(), None);
/// ```
pub struct PriorityQueue<T, P> {
    entries: BinaryHeap<Entry<T, P>, ByPriority>,
}

struct Entry<T, P> {
    element: T,
    priority: P,
}

#[derive(Clone, Copy, Default)]
struct ByPriority;

impl<T, P: Ord> Comparator<Entry<T, P>> for ByPriority {
    fn precedes(&self, a: &Entry<T, P>, b: &Entry<T, P>) -> bool {
        a.priority > b.priority
    }
}

impl<T, P: Ord> PriorityQueue<T, P> {
    pub fn new() -> Self {
        Self {
            entries: BinaryHeap::with_comparator(ByPriority),
        }
    }

    pub fn enqueue(&mut self, element: T, priority: P) {
        self.entries.push(Entry { element, priority });
    }

    pub fn add(&mut self, element: T, priority: P) {
        self.enqueue(element, priority);
    }

    /// Removes and returns the element with the highest priority.
    pub fn dequeue(&mut self) -> Option<T> {
        self.entries.pop().map(|entry| entry.element)
    }

    pub fn remove(&mut self) -> Option<T> {
        self.dequeue()
    }

    /// Returns what the next [`dequeue`](PriorityQueue::dequeue) would return.
    pub fn peek(&self) -> Option<&T> {
        self.entries.peek().map(|entry| &entry.element)
    }

    pub fn size(&self) -> usize {
        self.entries.size()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<T, P: Ord> Default for PriorityQueue<T, P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, P: Ord> fmt::Debug for PriorityQueue<T, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PriorityQueue")
            .field("size", &self.entries.size())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::PriorityQueue;

    const N: usize = 500;

    fn filled() -> PriorityQueue<String, usize> {
        use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};

        let mut priorities: Vec<usize> = (0..N).collect();
        priorities.shuffle(&mut StdRng::seed_from_u64(0));

        let mut queue = PriorityQueue::new();
        for priority in priorities {
            queue.add(format!("element {priority}"), priority);
        }
        queue
    }

    #[test]
    fn test_empty() {
        let mut queue = PriorityQueue::<i32, i32>::new();
        assert_eq!(queue.peek(), None);
        assert_eq!(queue.dequeue(), None);
        assert_eq!(queue.size(), 0);
    }

    #[test]
    fn test_peek_does_not_remove() {
        let queue = filled();
        let first = queue.peek().cloned();
        assert_eq!(queue.peek().cloned(), first);
        assert_eq!(queue.peek().cloned(), first);
        assert_eq!(queue.size(), N);
    }

    #[test]
    fn test_dequeue_by_descending_priority() {
        let mut queue = filled();
        for priority in (0..N).rev() {
            let peeked = queue.peek().cloned();
            let dequeued = queue.remove();
            assert_eq!(peeked, dequeued);
            assert_eq!(dequeued, Some(format!("element {priority}")));
            assert_eq!(queue.size(), priority);
        }
        assert!(queue.is_empty());
        assert_eq!(queue.dequeue(), None);
    }

    #[test]
    fn test_equal_priorities_order() {
        // A newcomer moves above an equal parent
        let mut queue = PriorityQueue::new();
        queue.enqueue("a", 1);
        queue.enqueue("b", 1);
        queue.enqueue("c", 1);
        assert_eq!(queue.peek(), Some(&"c"));
        assert_eq!(queue.dequeue(), Some("c"));
        assert_eq!(queue.dequeue(), Some("b"));
        assert_eq!(queue.dequeue(), Some("a"));
    }

    #[test]
    fn test_elements_need_no_ordering() {
        #[derive(Debug, PartialEq)]
        struct Job(&'static str);

        let mut queue = PriorityQueue::new();
        queue.enqueue(Job("write"), 2);
        queue.enqueue(Job("read"), 5);
        queue.enqueue(Job("sleep"), 0);
        assert_eq!(queue.dequeue(), Some(Job("read")));
        assert_eq!(queue.dequeue(), Some(Job("write")));
        assert_eq!(queue.dequeue(), Some(Job("sleep")));
    }
}
