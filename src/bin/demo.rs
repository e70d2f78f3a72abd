//! Demonstration driver: builds both tree layouts from one key set, dumps
//! them as structural JSON, and exercises every operation of the library.

use bintree::tree::Tree;

fn main() -> serde_json::Result<()> {
    let keys = vec![5, 3, 8, 2, 9, 1, 4, 7, 6];

    let ordered = Tree::from_ordered(keys.clone());
    println!("ordered tree: {}", serde_json::to_string(&ordered)?);

    let complete = Tree::from_complete(keys);
    println!("complete tree: {}", serde_json::to_string(&complete)?);

    let mut preorder = Vec::new();
    ordered.preorder(|node| preorder.push(*node.key()));
    println!("preorder: {:?}", preorder);

    let mut inorder = Vec::new();
    ordered.inorder(|node| inorder.push(*node.key()));
    println!("inorder: {:?}", inorder);

    let mut postorder = Vec::new();
    ordered.postorder(|node| postorder.push(*node.key()));
    println!("postorder: {:?}", postorder);

    if let Some(min) = ordered.min() {
        println!("min: {}", min.key());
    }
    if let Some(max) = ordered.max() {
        println!("max: {}", max.key());
    }

    match ordered.find(&5) {
        Some(node) => println!("find 5: {}", serde_json::to_string(node)?),
        None => println!("find 5: not found"),
    }

    let ordered = ordered.remove(&5);
    println!("after removing 5: {}", serde_json::to_string(&ordered)?);

    let mut sorted = Vec::new();
    ordered.inorder(|node| sorted.push(*node.key()));
    println!("inorder: {:?}", sorted);

    Ok(())
}
