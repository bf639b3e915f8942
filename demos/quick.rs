//! Keystroke menu: selections happen on a single unechoed key press.
//!
//! Run with: cargo run --example quick

use std::io;

use menukit::{ConsoleDriver, QuickMenu};

fn main() -> io::Result<()> {
    let mut term = ConsoleDriver::new();

    let mut menu = QuickMenu::new()
        .title("Press a digit (no Enter needed)")
        .option("Say hi", || println!("hi"))
        .option("Say bye", || println!("bye"));

    menu.run(&mut term)
}
