use classic_collections::{traverse, AvlTree};

fn main() {
    let tree: AvlTree<i32> = (1..=6).collect();

    println!("Pre-order traversal:");
    for node in traverse::preorder(tree.head()) {
        println!(
            "Value: {}, Height: {}, Balance: {}",
            node.value(),
            node.height(),
            node.balance_factor()
        );
    }
}
