//! Walks a collection through its basic operations, printing each step.
//!
//! Run with:
//!   cargo run --bin collection_demo

use nexus_collection::{Collection, OutOfRange};

fn main() -> Result<(), OutOfRange> {
    let mut collection = Collection::<i32>::new();
    println!("Current collection: {collection}");
    println!("Collection capacity: {}", collection.capacity());
    println!("Collection count: {}", collection.len());

    collection.add(5);
    println!("Current collection: {collection}");

    collection.add_range([6, 7, 8]);
    println!("Current collection: {collection}");
    println!("Print the first element: {}", collection.get(0)?);

    collection.insert_at(2, 666)?;
    println!("Current collection: {collection}");

    collection.exchange(1, 2)?;
    println!("Current collection: {collection}");

    collection.clear();
    println!("Current collection: {collection}");

    Ok(())
}
