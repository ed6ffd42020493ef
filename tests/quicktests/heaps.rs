use classic_collections::{BinaryHeap, BinaryMinHeap, PriorityQueue};
use quickcheck_macros::quickcheck;

#[quickcheck]
fn max_heap_pops_sorted_descending(xs: Vec<i32>) -> bool {
    let mut heap = BinaryHeap::new();
    for x in &xs {
        heap.push(*x);
    }

    let mut sorted = xs;
    sorted.sort_unstable_by(|a, b| b.cmp(a));
    let popped: Vec<i32> = std::iter::from_fn(|| heap.pop()).collect();
    popped == sorted
}

#[quickcheck]
fn min_heap_matches_std_reverse_heap(ops: Vec<Option<u16>>) -> bool {
    use std::cmp::Reverse;

    // `Some` pushes, `None` pops
    let mut heap = BinaryMinHeap::default();
    let mut model = std::collections::BinaryHeap::new();
    ops.into_iter().all(|op| match op {
        Some(x) => {
            heap.push(x);
            model.push(Reverse(x));
            heap.peek() == model.peek().map(|r| &r.0)
        }
        None => heap.pop() == model.pop().map(|r| r.0) && heap.size() == model.len(),
    })
}

#[quickcheck]
fn priority_queue_dequeues_by_priority(priorities: Vec<u8>) -> bool {
    let mut queue = PriorityQueue::new();
    for (element, priority) in priorities.iter().enumerate() {
        queue.enqueue(element, *priority);
    }

    let mut dequeued = Vec::new();
    while let Some(&peeked) = queue.peek() {
        if queue.dequeue() != Some(peeked) {
            return false;
        }
        dequeued.push(priorities[peeked]);
    }
    dequeued.len() == priorities.len() && dequeued.windows(2).all(|w| w[0] >= w[1])
}
