//! Prompt engine: single-purpose string capture with optional validation.
//!
//! A prompt is the degenerate menu: same title/header rendering, no option
//! list, no dispatch. It loops on string capture until the caller's
//! validator accepts the token, so the only public surface is `get` (and
//! `recall`).

use std::io;

use crate::driver::TerminalDriver;
use crate::render::{self, HeaderFn};
use crate::theme::Theme;

/// A validated string prompt.
///
/// The validator sees the raw captured token — no trimming, no length
/// coercion. Whatever "valid" means is entirely the caller's business; the
/// engine only learns true or false and re-prompts on false, forever.
///
/// ```no_run
/// use menukit::{ConsoleDriver, Prompt};
///
/// # fn main() -> std::io::Result<()> {
/// let mut term = ConsoleDriver::new();
/// let mut name = Prompt::new("Player name (max 16 chars):")
///     .validator(|s| !s.is_empty() && s.len() <= 16);
/// println!("hello {}", name.get(&mut term)?);
/// # Ok(())
/// # }
/// ```
pub struct Prompt {
    prompt: String,
    header: Option<HeaderFn>,
    validator: Box<dyn FnMut(&str) -> bool>,
    theme: Theme,
    /// Most recent captured token, valid or not; empty before any read.
    last_string: String,
}

impl Prompt {
    /// New prompt with the given display text and an accept-all validator.
    pub fn new(prompt: impl Into<String>) -> Self {
        Prompt {
            prompt: prompt.into(),
            header: None,
            validator: Box::new(|_| true),
            theme: Theme::DEFAULT,
            last_string: String::new(),
        }
    }

    /// Replace the validator predicate.
    pub fn validator(mut self, validator: impl FnMut(&str) -> bool + 'static) -> Self {
        self.validator = Box::new(validator);
        self
    }

    /// Set or replace the dynamic header, invoked on every render.
    pub fn header(mut self, header: impl FnMut() -> String + 'static) -> Self {
        self.header = Some(Box::new(header));
        self
    }

    /// Replace the color table.
    pub fn theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Capture one validated string.
    ///
    /// Clears the screen, then renders and reads until the validator
    /// accepts a token; each rejection prints "Invalid input." before
    /// re-prompting. Clears again on success and returns the token.
    pub fn get(&mut self, term: &mut dyn TerminalDriver) -> io::Result<String> {
        term.clear_screen()?;
        loop {
            let token = self.read_string(term)?;
            if (self.validator)(&token) {
                term.clear_screen()?;
                return Ok(token);
            }
            term.set_color(self.theme.error)?;
            term.write("Invalid input.\n")?;
            term.reset_color()?;
        }
    }

    /// The most recent captured token, whether or not it validated.
    pub fn recall(&self) -> &str {
        &self.last_string
    }

    fn read_string(&mut self, term: &mut dyn TerminalDriver) -> io::Result<String> {
        render::prompt_view(term, &self.prompt, self.header.as_mut(), &self.theme)?;
        let token = term.read_token()?;
        term.write("\n")?;
        self.last_string = token.clone();
        Ok(token)
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::driver::ScriptedDriver;

    #[test]
    fn default_validator_accepts_anything() {
        let mut prompt = Prompt::new("Name:");
        let mut term = ScriptedDriver::with_tokens(["whatever"]);
        assert_eq!(prompt.get(&mut term).unwrap(), "whatever");
    }

    #[test]
    fn rejects_until_validator_passes() {
        // Scenario: max-16-chars validator; an 18-char token is rejected,
        // "ok" is accepted.
        let mut prompt = Prompt::new("Name:").validator(|s| s.len() <= 16);
        let mut term = ScriptedDriver::with_tokens(["this-is-seventeen!", "ok"]);

        assert_eq!(prompt.get(&mut term).unwrap(), "ok");
        let text = term.plain_text();
        assert_eq!(text.matches("Invalid input.").count(), 1);
        // Re-prompted after the rejection.
        assert_eq!(text.matches("Name:").count(), 2);
    }

    #[test]
    fn recall_holds_the_last_captured_token() {
        let mut prompt = Prompt::new("Name:");
        assert_eq!(prompt.recall(), "");

        let mut term = ScriptedDriver::with_tokens(["ada"]);
        prompt.get(&mut term).unwrap();
        assert_eq!(prompt.recall(), "ada");
    }

    #[test]
    fn validator_sees_the_raw_token() {
        // No trimming: a validator can reject on exact content.
        let mut prompt = Prompt::new("Code:").validator(|s| s == "42");
        let mut term = ScriptedDriver::with_tokens(["042", "42"]);
        assert_eq!(prompt.get(&mut term).unwrap(), "42");
    }

    #[test]
    fn clears_before_and_after_capture() {
        let mut prompt = Prompt::new("Name:");
        let mut term = ScriptedDriver::with_tokens(["x"]);
        prompt.get(&mut term).unwrap();
        assert_eq!(term.clear_count(), 2);
    }

    #[test]
    fn header_renders_above_the_marker() {
        let mut prompt = Prompt::new("Name:").header(|| "3 players online".to_string());
        let mut term = ScriptedDriver::with_tokens(["z"]);
        prompt.get(&mut term).unwrap();
        assert!(term.plain_text().starts_with("Name:\n3 players online\n> "));
    }

    #[test]
    fn validator_state_can_accumulate() {
        // FnMut validator: reject the first two attempts regardless.
        let mut seen = 0;
        let mut prompt = Prompt::new("Retry:").validator(move |_| {
            seen += 1;
            seen > 2
        });
        let mut term = ScriptedDriver::with_tokens(["a", "b", "c"]);
        assert_eq!(prompt.get(&mut term).unwrap(), "c");
    }
}
