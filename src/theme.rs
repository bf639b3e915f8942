//! Color semantics for menu rendering.
//!
//! A plain immutable configuration table — pure data, consumed by the
//! rendering and input layers for visual consistency.
//!
//! Color semantics:
//! - Header: dynamic status line above the option list
//! - Options: the selectable numbered entries
//! - Reserved: the index-0 Exit/Back entry, always printed last
//! - Error: invalid-input messages

use crossterm::style::Color;

/// Colors used when rendering a menu or prompt.
///
/// Every menu and prompt carries one of these; the default reproduces the
/// classic yellow/cyan/magenta/red scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    /// Header band, shown when both a title and a header are set.
    pub header: Color,
    /// Regular numbered options.
    pub options: Color,
    /// The reserved Exit/Back entry.
    pub reserved: Color,
    /// "Invalid option." / "Invalid input." messages.
    pub error: Color,
}

impl Theme {
    /// The stock scheme.
    pub const DEFAULT: Theme = Theme {
        header: Color::Yellow,
        options: Color::Cyan,
        reserved: Color::Magenta,
        error: Color::Red,
    };
}

impl Default for Theme {
    fn default() -> Self {
        Theme::DEFAULT
    }
}

// ============================================================================
// TESTS
// ============================================================================
