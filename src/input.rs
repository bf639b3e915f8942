//! Input acquisition: the two option-reading strategies.
//!
//! Both strategies share one validation rule — the value must land in
//! `[0, option_count)` — and re-prompt forever until it does. They differ
//! only in how a raw token is acquired and echoed:
//! - Line: a whitespace-delimited token, typed and terminated with Enter.
//! - Keystroke: one raw unechoed character, mapped to a digit.
//!
//! An unparsable line token is treated exactly like an out-of-range value:
//! "Invalid option." and a re-read. Neither strategy ever returns an index
//! outside the valid range, so the dispatch step downstream needs no bounds
//! handling of its own.

use std::io;

use crate::driver::TerminalDriver;
use crate::theme::Theme;

/// Which acquisition strategy a menu uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Buffered tokens; any number of digits, requires Enter.
    Line,
    /// Single raw keystroke; caps selectable indices at 0–9.
    Keystroke,
}

/// Read one valid option index in `[0, option_count)`.
///
/// Blocks until the user produces a valid selection; invalid entries are
/// rejected with a message and re-read without re-rendering the menu.
pub(crate) fn read_option(
    term: &mut dyn TerminalDriver,
    mode: InputMode,
    option_count: usize,
    theme: &Theme,
) -> io::Result<usize> {
    match mode {
        InputMode::Line => read_option_line(term, option_count, theme),
        InputMode::Keystroke => read_option_keystroke(term, option_count, theme),
    }
}

fn read_option_line(
    term: &mut dyn TerminalDriver,
    option_count: usize,
    theme: &Theme,
) -> io::Result<usize> {
    loop {
        let token = term.read_token()?;
        match token.parse::<usize>() {
            Ok(choice) if choice < option_count => {
                term.write("\n")?;
                return Ok(choice);
            }
            _ => {
                term.set_color(theme.error)?;
                term.write("Invalid option.\n")?;
                term.reset_color()?;
                term.write("> ")?;
                term.flush()?;
            }
        }
    }
}

fn read_option_keystroke(
    term: &mut dyn TerminalDriver,
    option_count: usize,
    theme: &Theme,
) -> io::Result<usize> {
    loop {
        let key = term.read_key()?;
        if let Some(choice) = digit_value(key) {
            if choice < option_count {
                term.write("\n")?;
                return Ok(choice);
            }
        }
        term.set_color(theme.error)?;
        term.write("Invalid option.\n")?;
        term.reset_color()?;
        term.flush()?;
    }
}

/// Map a keystroke to its digit value, `None` for non-digits.
///
/// Single-digit mapping means a keystroke menu can only address indices
/// 0–9. Known limitation, preserved on purpose: a quick menu with more than
/// ten entries has unreachable tail entries.
fn digit_value(key: char) -> Option<usize> {
    key.to_digit(10).map(|d| d as usize)
}

// ============================================================================
// TESTS
// ============================================================================
