//! menukit: nested numbered menus and validated prompts for terminal tools.
//!
//! Build a menu with the fluent registration API, then hand it a terminal
//! driver and run it:
//!
//! ```no_run
//! use menukit::{ConsoleDriver, Menu, SubMenu};
//!
//! # fn main() -> std::io::Result<()> {
//! let settings = SubMenu::new()
//!     .title("Settings")
//!     .option("Toggle sound", || println!("toggled"))
//!     .into_handle();
//!
//! let mut root = Menu::new()
//!     .title("Main menu")
//!     .option("Play", || println!("playing"))
//!     .submenu("Settings", &settings);
//!
//! root.run(&mut ConsoleDriver::new())?;
//! # Ok(())
//! # }
//! ```

pub mod driver;
pub mod input;
pub mod menu;
pub mod prompt;
pub mod render;
pub mod theme;

pub use driver::{ConsoleDriver, ScriptEvent, ScriptedDriver, TerminalDriver};
pub use input::InputMode;
pub use menu::{Menu, MenuHandle, QuickMenu, SubMenu, SubQuickMenu};
pub use prompt::Prompt;
pub use theme::Theme;
