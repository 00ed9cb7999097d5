//! Basic usage of the ShoppingList builder API
//!
//! This example demonstrates the two main use cases:
//! 1. Recipe directory → text shopping list grouped by aisle
//! 2. Recipe files → JSON written straight to a file
//!
//! Run it from a directory holding `recipes/*.cook` and `config/aisle.conf`.

use cooklang_shopping::{OutputFormat, ShoppingList};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    // Use Case 1: directory → text
    println!("=== Use Case 1: directory → text ===");
    let list = ShoppingList::builder()
        .file("recipes")
        .aisle("config/aisle.conf")
        .build()
        .await?;
    print!("{}", list);

    // Use Case 2: files → JSON file
    println!("\n=== Use Case 2: files → shopping-list.json ===");
    let output = std::fs::File::create("shopping-list.json")?;
    ShoppingList::builder()
        .files(["recipes/pancakes.cook", "recipes/omelette.cook"])
        .format(OutputFormat::Json)
        .write_to(output)
        .await?;
    println!("written to shopping-list.json");

    Ok(())
}
