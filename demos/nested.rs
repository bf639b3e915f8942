//! Nested menus: a root menu with a back-capable submenu and shared state.
//!
//! Run with: cargo run --example nested

use std::cell::Cell;
use std::io;
use std::rc::Rc;

use menukit::{ConsoleDriver, Menu, SubMenu};

fn main() -> io::Result<()> {
    let mut term = ConsoleDriver::new();

    let coins = Rc::new(Cell::new(10i32));

    let spend = coins.clone();
    let earn = coins.clone();
    let balance = coins.clone();

    let shop = SubMenu::new()
        .title("Shop")
        .header(move || format!("coins: {}", balance.get()))
        .option("Buy potion (3 coins)", move || {
            spend.set(spend.get() - 3);
        })
        .option("Sell scrap (+1 coin)", move || {
            earn.set(earn.get() + 1);
        })
        .into_handle();

    let mut root = Menu::new()
        .title("Village")
        .option("Rest", || println!("You feel rested."))
        .submenu("Visit the shop", &shop);

    root.run(&mut term)?;
    println!("You leave with {} coins.", coins.get());
    Ok(())
}
