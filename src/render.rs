//! Rendering for menus and prompts.
//!
//! Two views share one heading pass:
//! - menu view: heading, numbered option list, input marker
//! - prompt view: heading, input marker only
//!
//! The reserved entry lives at index 0 in storage but is always printed
//! last, in its own color, since it is the Exit/Back escape hatch.

use std::io;

use crate::driver::TerminalDriver;
use crate::theme::Theme;

/// Dynamic status line provider, invoked once per render.
///
/// The returned text is emitted through the driver so the color band wraps
/// it regardless of which driver is in play.
pub(crate) type HeaderFn = Box<dyn FnMut() -> String>;

/// Prompt line plus optional header band.
///
/// The header is tinted only when a prompt line is present above it; a bare
/// header renders in the default color.
pub(crate) fn heading(
    term: &mut dyn TerminalDriver,
    prompt: &str,
    header: Option<&mut HeaderFn>,
    theme: &Theme,
) -> io::Result<()> {
    if !prompt.is_empty() {
        term.write(prompt)?;
        term.write("\n")?;
    }
    if let Some(header) = header {
        if !prompt.is_empty() {
            term.set_color(theme.header)?;
        }
        let text = header();
        term.write(&text)?;
        term.reset_color()?;
        term.write("\n")?;
    }
    Ok(())
}

/// Full menu view: heading, options `1..N-1` in ascending order, then the
/// reserved entry as `0.`, then the input marker with no trailing newline so
/// the user's next keystroke appears inline.
pub(crate) fn menu_view(
    term: &mut dyn TerminalDriver,
    prompt: &str,
    header: Option<&mut HeaderFn>,
    labels: &[&str],
    theme: &Theme,
) -> io::Result<()> {
    heading(term, prompt, header, theme)?;

    if labels.is_empty() {
        return Ok(());
    }

    term.set_color(theme.options)?;
    for (i, label) in labels.iter().enumerate().skip(1) {
        term.write(&format!("{}. {}\n", i, label))?;
    }

    term.set_color(theme.reserved)?;
    term.write(&format!("0. {}", labels[0]))?;
    term.reset_color()?;
    term.write("\n> ")?;
    term.flush()
}

/// Prompt view: heading only, then the input marker in the default color.
pub(crate) fn prompt_view(
    term: &mut dyn TerminalDriver,
    prompt: &str,
    header: Option<&mut HeaderFn>,
    theme: &Theme,
) -> io::Result<()> {
    heading(term, prompt, header, theme)?;
    term.reset_color()?;
    term.write("> ")?;
    term.flush()
}

// ============================================================================
// TESTS
// ============================================================================
