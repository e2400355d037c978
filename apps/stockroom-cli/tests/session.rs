//! Scripted sessions driven through the public `Session` API.

use std::io::Cursor;

use stockroom_cli::command::MENU;
use stockroom_cli::{CliConfig, Session};
use stockroom_core::{Inventory, Product};

fn run(script: &str, inventory: Inventory) -> (String, Inventory) {
    let mut session = Session::with_inventory(
        Cursor::new(script.as_bytes().to_vec()),
        Vec::new(),
        CliConfig::default(),
        inventory,
    );
    session.run().unwrap();

    let inventory = session.inventory().clone();
    (String::from_utf8(session.into_output()).unwrap(), inventory)
}

fn menu() -> String {
    format!("\n{MENU}\nEnter command: ")
}

#[test]
fn test_widget_lifecycle_transcript() {
    let script = "\
add
Widget
AcmeCo
Gadget
9.99
10
transaction
Widget
3
transaction
Widget
10
find
Widget
delete
Widget
find
Widget
exit
";

    let (output, inventory) = run(script, Inventory::new());

    let expected = [
        menu(),
        "Enter product name: Enter product brand: Enter product type: \
         Enter product price: Enter product stock: Product added successfully.\n"
            .to_string(),
        menu(),
        "Enter product name for transaction: Enter quantity: \
         Transaction recorded successfully.\n"
            .to_string(),
        menu(),
        "Enter product name for transaction: Enter quantity: \
         Insufficient stock for Widget: available 7, requested 10\n\
         Transaction failed.\n"
            .to_string(),
        menu(),
        "Enter product name to find: Product found: {Widget AcmeCo Gadget 9.99 7}\n".to_string(),
        menu(),
        "Enter product name to delete: Product deleted successfully.\n".to_string(),
        menu(),
        "Enter product name to find: Product not found.\n".to_string(),
        menu(),
        "Exiting...\n".to_string(),
    ]
    .concat();

    assert_eq!(output, expected);
    assert!(inventory.is_empty());
}

#[test]
fn test_transaction_on_missing_product() {
    let (output, _) = run("transaction\nGhost\n1\nexit\n", Inventory::new());

    assert!(output.contains("Product not found: Ghost\nTransaction failed.\n"));
}

#[test]
fn test_update_then_sort_then_display() {
    let inventory: Inventory = vec![
        Product::new("Lamp", "Brite", "Lighting", 24.5, 3),
        Product::new("Bolt", "Fasten", "Hardware", 0.25, 500),
    ]
    .into();

    let script = "\
update
Lamp
Desk Lamp
Brite
Lighting
19
4
update
Missing
x
x
x
1
1
sort
price
display
exit
";

    let (output, inventory) = run(script, inventory);

    assert!(output.contains("Product updated successfully.\n"));
    assert!(output.contains("Enter new product stock: Product not found.\n"));
    assert!(output.contains("Products sorted successfully.\n"));

    let names: Vec<&str> = inventory.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["Bolt", "Desk Lamp"]);

    let table = "\
┌───────────┬────────┬──────────┬───────┬───────┐
│ Name      │ Brand  │ Type     │ Price │ Stock │
├───────────┼────────┼──────────┼───────┼───────┤
│ Bolt      │ Fasten │ Hardware │ 0.25  │ 500   │
│ Desk Lamp │ Brite  │ Lighting │ 19.00 │ 4     │
└───────────┴────────┴──────────┴───────┴───────┘
";
    assert!(output.contains(&format!("Enter command: {table}")));
}

#[test]
fn test_negative_quantity_restocks_in_lenient_mode() {
    let inventory: Inventory = vec![Product::new("Bolt", "Fasten", "Hardware", 0.25, 5)].into();

    let (output, inventory) = run("transaction\nBolt\n-5\nexit\n", inventory);

    assert!(output.contains("Transaction recorded successfully.\n"));
    assert_eq!(inventory.find("Bolt").unwrap().stock, 10);
}

#[test]
fn test_non_numeric_quantity_is_zero_in_lenient_mode() {
    let inventory: Inventory = vec![Product::new("Bolt", "Fasten", "Hardware", 0.25, 5)].into();

    let (output, inventory) = run("transaction\nBolt\nfive\nexit\n", inventory);

    assert!(output.contains("Transaction recorded successfully.\n"));
    assert_eq!(inventory.find("Bolt").unwrap().stock, 5);
}

#[test]
fn test_restock_past_stock_limit_fails_without_panicking() {
    let script = "\
add
Big
B
T
1
9223372036854775807
transaction
Big
-1
add
W
B
T
1
5
transaction
W
-9223372036854775808
display
exit
";

    let (output, inventory) = run(script, Inventory::new());

    assert!(output.contains(
        "Stock for Big would overflow: stock 9223372036854775807, quantity -1\n\
         Transaction failed.\n"
    ));
    assert!(output.contains(
        "Stock for W would overflow: stock 5, quantity -9223372036854775808\n\
         Transaction failed.\n"
    ));
    assert!(output.ends_with("Exiting...\n"));
    assert_eq!(inventory.find("Big").unwrap().stock, i64::MAX);
    assert_eq!(inventory.find("W").unwrap().stock, 5);
}

#[test]
fn test_find_prints_large_price_in_exponent_form() {
    let inventory: Inventory = vec![Product::new("Yacht", "Sea", "Boat", 1_000_000.0, 1)].into();

    let (output, _) = run("find\nYacht\nexit\n", inventory);

    assert!(output.contains("Product found: {Yacht Sea Boat 1e+06 1}\n"));
}
