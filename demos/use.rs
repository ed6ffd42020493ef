use classic_collections::{AvlTree, BloomFilter, LinkedList, PriorityQueue};

fn main() {
    let mut tree = AvlTree::new();
    tree.insert(30).insert(10).insert(20).insert(20);
    assert!(tree.contains(&20));
    assert_eq!(tree.find(&20).map(|n| n.count()), Some(2));
    tree.remove(&10);
    assert!(!tree.contains(&10));

    let head = tree.head().unwrap();
    println!("head {} with height {}", head.value(), tree.height());

    let mut queue = PriorityQueue::new();
    queue.enqueue("write", 2);
    queue.enqueue("read", 5);
    queue.enqueue("sleep", 1);
    while let Some(task) = queue.dequeue() {
        println!("{task}");
    }

    let mut list = LinkedList::new();
    let last = list.add_to_start(3);
    list.add_to_start(1);
    list.add_after(last, 4);
    print!("[ ");
    for x in list.iter() {
        print!("{x}, ");
    }
    println!("]");

    let mut filter = BloomFilter::new();
    filter.insert("apple");
    assert!(filter.test("apple"));
    println!("banana probably seen: {}", filter.test("banana"));
}
