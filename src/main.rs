//! menukit showcase CLI
//!
//! Small interactive demos of the library: nested line-input menus,
//! single-keystroke menus, and validated prompts.

use std::cell::Cell;
use std::io;
use std::process::ExitCode;
use std::rc::Rc;

use clap::{Parser, Subcommand};

use menukit::{ConsoleDriver, Menu, Prompt, QuickMenu, SubMenu, SubQuickMenu};

#[derive(Parser)]
#[command(name = "menukit")]
#[command(about = "Interactive demos for the menukit toolkit")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Nested line-input menus with a dynamic header
    Nested,

    /// Single-keystroke menus (no Enter key, no echo)
    Quick,

    /// Validated string prompts
    Prompt,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Nested => cmd_nested(),
        Commands::Quick => cmd_quick(),
        Commands::Prompt => cmd_prompt(),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

// ============================================================================
// COMMAND HANDLERS
// ============================================================================

fn cmd_nested() -> io::Result<()> {
    let mut term = ConsoleDriver::new();

    let volume = Rc::new(Cell::new(5u8));

    let vol_up = volume.clone();
    let vol_down = volume.clone();
    let vol_status = volume.clone();

    let settings = SubMenu::new()
        .title("Settings")
        .header(move || format!("volume: {}", vol_status.get()))
        .option("Volume up", move || {
            vol_up.set(vol_up.get().saturating_add(1));
        })
        .option("Volume down", move || {
            vol_down.set(vol_down.get().saturating_sub(1));
        })
        .into_handle();

    let plays = Rc::new(Cell::new(0u32));
    let play_count = plays.clone();

    let mut root = Menu::new()
        .title("Main menu")
        .header(move || format!("games played: {}", plays.get()))
        .option("Play", move || {
            play_count.set(play_count.get() + 1);
            println!("Playing a round...");
        })
        .submenu("Settings", &settings);

    root.run(&mut term)?;
    println!("Final volume: {}", volume.get());
    Ok(())
}

fn cmd_quick() -> io::Result<()> {
    let mut term = ConsoleDriver::new();

    let tools = SubQuickMenu::new()
        .title("Tools")
        .option("Sharpen", || println!("sharpened"))
        .option("Polish", || println!("polished"))
        .into_handle();

    let mut root = QuickMenu::new()
        .title("Quick menu (press a digit)")
        .option("Greet", || println!("hello!"))
        .submenu("Tools", &tools);

    root.run(&mut term)
}

fn cmd_prompt() -> io::Result<()> {
    let mut term = ConsoleDriver::new();

    let mut name = Prompt::new("Player name (1-16 characters):")
        .validator(|s| !s.is_empty() && s.len() <= 16);
    let name = name.get(&mut term)?;

    let mut age = Prompt::new("Age (a number):").validator(|s| s.parse::<u32>().is_ok());
    let age = age.get(&mut term)?;

    println!("Welcome, {} ({}).", name, age);
    Ok(())
}
