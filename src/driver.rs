//! Terminal driver boundary: the only place that touches a real terminal.
//!
//! The engines are written against the [`TerminalDriver`] trait so the
//! interaction logic can run against a real console or a scripted double.
//! Two implementations live here:
//! - [`ConsoleDriver`]: stdin/stdout via crossterm (clear, colors, raw mode)
//! - [`ScriptedDriver`]: queued inputs and a recorded transcript, for tests
//!   and headless use

use std::collections::VecDeque;
use std::io::{self, Write};

use crossterm::cursor::MoveTo;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use crossterm::terminal::{self, Clear, ClearType};
use crossterm::queue;

// ============================================================================
// CAPABILITY TRAIT
// ============================================================================

/// Everything the menu and prompt engines need from a terminal.
///
/// Output operations may buffer; implementations must make buffered output
/// visible before blocking on either read operation.
pub trait TerminalDriver {
    /// Clear the screen and move the cursor to the top-left corner.
    fn clear_screen(&mut self) -> io::Result<()>;

    /// Write text verbatim, without a trailing newline.
    fn write(&mut self, text: &str) -> io::Result<()>;

    /// Switch the foreground color for subsequent writes.
    fn set_color(&mut self, color: Color) -> io::Result<()>;

    /// Restore the default foreground color.
    fn reset_color(&mut self) -> io::Result<()>;

    /// Read one whitespace-delimited token, line-buffered.
    ///
    /// One typed line may satisfy several token reads; surplus tokens are
    /// kept for the next call. Blocks until a token is available.
    fn read_token(&mut self) -> io::Result<String>;

    /// Read one raw character without waiting for a line terminator and
    /// without echoing it.
    ///
    /// The terminal's input mode is saved, switched to raw, and restored
    /// before returning — on every exit path.
    fn read_key(&mut self) -> io::Result<char>;

    /// Flush buffered output.
    fn flush(&mut self) -> io::Result<()>;
}

// ============================================================================
// CONSOLE DRIVER
// ============================================================================

/// The real terminal: stdout for output, stdin for tokens, crossterm events
/// for raw keystrokes.
#[derive(Debug, Default)]
pub struct ConsoleDriver {
    /// Tokens left over from the last line read, served before reading more.
    pending: VecDeque<String>,
}

impl ConsoleDriver {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TerminalDriver for ConsoleDriver {
    fn clear_screen(&mut self) -> io::Result<()> {
        queue!(io::stdout(), Clear(ClearType::All), MoveTo(0, 0))
    }

    fn write(&mut self, text: &str) -> io::Result<()> {
        queue!(io::stdout(), Print(text))
    }

    fn set_color(&mut self, color: Color) -> io::Result<()> {
        queue!(io::stdout(), SetForegroundColor(color))
    }

    fn reset_color(&mut self) -> io::Result<()> {
        queue!(io::stdout(), ResetColor)
    }

    fn read_token(&mut self) -> io::Result<String> {
        self.flush()?;
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(token);
            }
            let mut line = String::new();
            let read = io::stdin().read_line(&mut line)?;
            if read == 0 {
                return Err(io::Error::new(
                    io::ErrorKind::UnexpectedEof,
                    "input stream closed",
                ));
            }
            self.pending
                .extend(line.split_whitespace().map(str::to_string));
        }
    }

    fn read_key(&mut self) -> io::Result<char> {
        self.flush()?;
        let _mode = RawModeGuard::enter()?;
        loop {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if let KeyCode::Char(c) = key.code {
                    return Ok(c);
                }
                // Enter, arrows, etc. don't map to a character; keep waiting.
            }
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        io::stdout().flush()
    }
}

/// Raw-mode scope guard: entered for the duration of a single-key read,
/// restored on drop so the terminal never leaks raw mode past an error or
/// panic inside the read.
struct RawModeGuard;

impl RawModeGuard {
    fn enter() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        Ok(RawModeGuard)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        // Best-effort: a failed restore should not abort the interaction
        // loop, but the operator has to hear about it.
        if let Err(e) = terminal::disable_raw_mode() {
            eprintln!("warning: failed to restore terminal mode: {}", e);
        }
    }
}

// ============================================================================
// SCRIPTED DRIVER
// ============================================================================

/// One recorded output operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptEvent {
    Clear,
    Color(Color),
    Reset,
    Text(String),
}

/// A terminal double: inputs are scripted up front, outputs are recorded.
///
/// Reading past the end of the script is an `UnexpectedEof` error, so a test
/// that under-scripts its input fails loudly instead of hanging.
#[derive(Debug, Default)]
pub struct ScriptedDriver {
    tokens: VecDeque<String>,
    keys: VecDeque<char>,
    events: Vec<ScriptEvent>,
}

impl ScriptedDriver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Script the tokens `read_token` will return, in order.
    pub fn with_tokens<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            tokens: tokens.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Script the characters `read_key` will return, in order.
    pub fn with_keys<I: IntoIterator<Item = char>>(keys: I) -> Self {
        Self {
            keys: keys.into_iter().collect(),
            ..Self::default()
        }
    }

    /// The full output transcript, in order.
    pub fn events(&self) -> &[ScriptEvent] {
        &self.events
    }

    /// The transcript with color and clear events stripped — just the text
    /// the user would have seen, concatenated.
    pub fn plain_text(&self) -> String {
        self.events
            .iter()
            .filter_map(|e| match e {
                ScriptEvent::Text(t) => Some(t.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Number of screen clears so far.
    pub fn clear_count(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, ScriptEvent::Clear))
            .count()
    }
}

impl TerminalDriver for ScriptedDriver {
    fn clear_screen(&mut self) -> io::Result<()> {
        self.events.push(ScriptEvent::Clear);
        Ok(())
    }

    fn write(&mut self, text: &str) -> io::Result<()> {
        self.events.push(ScriptEvent::Text(text.to_string()));
        Ok(())
    }

    fn set_color(&mut self, color: Color) -> io::Result<()> {
        self.events.push(ScriptEvent::Color(color));
        Ok(())
    }

    fn reset_color(&mut self) -> io::Result<()> {
        self.events.push(ScriptEvent::Reset);
        Ok(())
    }

    fn read_token(&mut self) -> io::Result<String> {
        self.tokens.pop_front().ok_or_else(|| {
            io::Error::new(io::ErrorKind::UnexpectedEof, "script out of tokens")
        })
    }

    fn read_key(&mut self) -> io::Result<char> {
        self.keys.pop_front().ok_or_else(|| {
            io::Error::new(io::ErrorKind::UnexpectedEof, "script out of keys")
        })
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scripted_tokens_come_back_in_order() {
        let mut term = ScriptedDriver::with_tokens(["2", "0"]);
        assert_eq!(term.read_token().unwrap(), "2");
        assert_eq!(term.read_token().unwrap(), "0");
    }

    #[test]
    fn exhausted_token_script_is_eof() {
        let mut term = ScriptedDriver::new();
        let err = term.read_token().unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
    }

    #[test]
    fn exhausted_key_script_is_eof() {
        let mut term = ScriptedDriver::with_keys(['1']);
        assert_eq!(term.read_key().unwrap(), '1');
        let err = term.read_key().unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
    }

    #[test]
    fn transcript_records_output_in_order() {
        let mut term = ScriptedDriver::new();
        term.clear_screen().unwrap();
        term.set_color(Color::Cyan).unwrap();
        term.write("1. A\n").unwrap();
        term.reset_color().unwrap();

        assert_eq!(
            term.events(),
            &[
                ScriptEvent::Clear,
                ScriptEvent::Color(Color::Cyan),
                ScriptEvent::Text("1. A\n".to_string()),
                ScriptEvent::Reset,
            ]
        );
    }

    #[test]
    fn plain_text_strips_color_and_clear() {
        let mut term = ScriptedDriver::new();
        term.clear_screen().unwrap();
        term.set_color(Color::Red).unwrap();
        term.write("boo").unwrap();
        term.reset_color().unwrap();
        term.write("!").unwrap();
        assert_eq!(term.plain_text(), "boo!");
        assert_eq!(term.clear_count(), 1);
    }
}
