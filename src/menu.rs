//! Menu engine: registration, the run loop, and the four menu variants.
//!
//! One `Core` carries the whole data model — title, entries, header
//! provider, input mode, color table, and the recall fields. The public
//! variants are thin capability wrappers over it:
//! - [`Menu`] / [`QuickMenu`]: top-level, reserved entry "Exit", public `run`
//! - [`SubMenu`] / [`SubQuickMenu`]: reserved entry "Back", no public `run` —
//!   only reachable through a parent's dispatch
//!
//! Entry 0 is fixed at construction (label + close action) and cannot be
//! replaced or shadowed by registration; `option`/`submenu` only append.
//! Labels and actions live in one `Vec<Entry>`, so the two sequences can
//! never drift apart in length.

use std::cell::RefCell;
use std::io;
use std::rc::Rc;

use crate::driver::TerminalDriver;
use crate::input::{self, InputMode};
use crate::render::{self, HeaderFn};
use crate::theme::Theme;

/// Reserved label for menus that terminate the interaction.
const EXIT_LABEL: &str = "Exit";

/// Reserved label for menus that return control to a parent.
const BACK_LABEL: &str = "Back";

// ============================================================================
// CORE
// ============================================================================

/// What selecting an entry does.
enum Action {
    /// The reserved entry: clear the screen, nothing else. The run loop
    /// terminates on its index, not on this variant.
    Close,
    /// A caller-supplied callback.
    Invoke(Box<dyn FnMut()>),
    /// Run a child menu's loop, then resume this one.
    Submenu(MenuHandle),
}

/// One selectable row: display label plus its action, index-aligned by
/// construction.
struct Entry {
    label: String,
    action: Action,
}

/// Shared state and behavior behind every menu variant.
pub(crate) struct Core {
    prompt: String,
    entries: Vec<Entry>,
    header: Option<HeaderFn>,
    mode: InputMode,
    theme: Theme,
    /// Most recent successfully read option index; `None` before any read.
    last_option: Option<usize>,
    /// Most recent captured string token; empty before any read.
    last_string: String,
}

impl Core {
    fn new(mode: InputMode, reserved_label: &str) -> Self {
        Core {
            prompt: String::new(),
            entries: vec![Entry {
                label: reserved_label.to_string(),
                action: Action::Close,
            }],
            header: None,
            mode,
            theme: Theme::DEFAULT,
            last_option: None,
            last_string: String::new(),
        }
    }

    fn push_entry(&mut self, label: String, action: Action) {
        self.entries.push(Entry { label, action });
    }

    fn label(&self, index: usize) -> Option<&str> {
        self.entries.get(index).map(|e| e.label.as_str())
    }

    fn render(&mut self, term: &mut dyn TerminalDriver) -> io::Result<()> {
        let labels: Vec<&str> = self.entries.iter().map(|e| e.label.as_str()).collect();
        render::menu_view(term, &self.prompt, self.header.as_mut(), &labels, &self.theme)
    }

    /// Read one valid option index and remember it for recall.
    fn read_option(&mut self, term: &mut dyn TerminalDriver) -> io::Result<usize> {
        let choice = input::read_option(term, self.mode, self.entries.len(), &self.theme)?;
        self.last_option = Some(choice);
        Ok(choice)
    }

    /// Render the menu, capture one raw token, remember it for recall.
    fn read_string(&mut self, term: &mut dyn TerminalDriver) -> io::Result<String> {
        self.render(term)?;
        let token = term.read_token()?;
        term.write("\n")?;
        self.last_string = token.clone();
        Ok(token)
    }

    /// The render → read → dispatch loop.
    ///
    /// Clears and renders on entry, then cycles until the reserved index 0
    /// is chosen. Every dispatch is preceded by a clear; the reserved
    /// entry's own action performs one more clear and the loop exits
    /// without re-rendering. Re-entrant: calling again restarts the cycle
    /// while recall values persist.
    fn run(&mut self, term: &mut dyn TerminalDriver) -> io::Result<()> {
        term.clear_screen()?;
        self.render(term)?;
        loop {
            let choice = self.read_option(term)?;
            term.clear_screen()?;
            // The reader contract guarantees `choice` is in range; an
            // out-of-bounds panic here would be a core invariant violation.
            match &mut self.entries[choice].action {
                Action::Close => term.clear_screen()?,
                Action::Invoke(action) => action(),
                Action::Submenu(child) => child.run(term)?,
            }
            if choice == 0 {
                return Ok(());
            }
            self.render(term)?;
        }
    }
}

// ============================================================================
// HANDLES
// ============================================================================

/// Shared handle to a registered menu: the capability a parent stores to
/// invoke the child's loop without owning it.
///
/// Produced by `into_handle()` on any menu variant and accepted by
/// `submenu()`. Clones share the same underlying menu, so recall accessors
/// observe state from runs triggered through any clone. The run entry
/// itself is crate-internal — holding a handle does not allow running the
/// menu directly, which is what keeps sub-variants parent-only.
///
/// A menu must not be registered as its own descendant; dispatching such a
/// cycle would re-borrow the menu mid-run and panic.
#[derive(Clone)]
pub struct MenuHandle(Rc<RefCell<Core>>);

impl MenuHandle {
    pub(crate) fn run(&self, term: &mut dyn TerminalDriver) -> io::Result<()> {
        self.0.borrow_mut().run(term)
    }

    /// The most recent option index selected on the underlying menu.
    pub fn recall_option(&self) -> Option<usize> {
        self.0.borrow().last_option
    }

    /// The most recent string token captured on the underlying menu.
    pub fn recall_string(&self) -> String {
        self.0.borrow().last_string.clone()
    }

    /// Label at `index`; index 0 is the reserved entry.
    pub fn label(&self, index: usize) -> Option<String> {
        self.0.borrow().label(index).map(str::to_string)
    }

    /// Total number of entries, reserved entry included.
    pub fn option_count(&self) -> usize {
        self.0.borrow().entries.len()
    }
}

// ============================================================================
// VARIANTS
// ============================================================================

/// A top-level menu with buffered line input.
///
/// Renders a numbered option list, reads integer selections, dispatches the
/// matching action, and repeats until "Exit" (entry 0) is chosen.
pub struct Menu {
    core: Core,
}

/// A top-level menu that reads single raw keystrokes instead of full lines.
///
/// No Enter key needed and nothing is echoed. The digit mapping caps
/// addressable entries at ten (indices 0–9); entries past that render but
/// cannot be selected.
pub struct QuickMenu {
    core: Core,
}

/// A line-input menu that can only be entered through a parent's dispatch.
///
/// Its reserved entry reads "Back" and there is no public run operation:
/// convert it with `into_handle()` and register it on a parent via
/// `submenu()`.
pub struct SubMenu {
    core: Core,
}

/// A keystroke-input menu that can only be entered through a parent's
/// dispatch. See [`SubMenu`] and [`QuickMenu`].
pub struct SubQuickMenu {
    core: Core,
}

/// Fluent registration surface shared by all variants.
macro_rules! registration_api {
    ($ty:ident, $mode:expr, $reserved:expr) => {
        impl $ty {
            /// New empty menu with the reserved entry preinstalled at
            /// index 0.
            pub fn new() -> Self {
                Self {
                    core: Core::new($mode, $reserved),
                }
            }

            /// Set or replace the title line rendered above the options.
            pub fn title(mut self, text: impl Into<String>) -> Self {
                self.core.prompt = text.into();
                self
            }

            /// Set or replace the dynamic header, invoked on every render.
            pub fn header(mut self, header: impl FnMut() -> String + 'static) -> Self {
                self.core.header = Some(Box::new(header));
                self
            }

            /// Replace the color table.
            pub fn theme(mut self, theme: Theme) -> Self {
                self.core.theme = theme;
                self
            }

            /// Append a selectable entry. Indices are assigned in call
            /// order starting at 1; index 0 stays reserved.
            pub fn option(
                mut self,
                label: impl Into<String>,
                action: impl FnMut() + 'static,
            ) -> Self {
                self.core
                    .push_entry(label.into(), Action::Invoke(Box::new(action)));
                self
            }

            /// Append an entry that runs `child`'s loop when selected and
            /// resumes this menu when the child exits.
            pub fn submenu(mut self, label: impl Into<String>, child: &MenuHandle) -> Self {
                self.core
                    .push_entry(label.into(), Action::Submenu(child.clone()));
                self
            }

            /// Convert into the shared handle that `submenu` accepts.
            pub fn into_handle(self) -> MenuHandle {
                MenuHandle(Rc::new(RefCell::new(self.core)))
            }
        }

        impl Default for $ty {
            fn default() -> Self {
                Self::new()
            }
        }
    };
}

/// Run loop and read-side accessors, top-level variants only.
macro_rules! runnable_api {
    ($ty:ident) => {
        impl $ty {
            /// Run the render → read → dispatch loop until "Exit" is
            /// chosen.
            pub fn run(&mut self, term: &mut dyn TerminalDriver) -> io::Result<()> {
                self.core.run(term)
            }

            /// Render the menu and capture one raw string token.
            pub fn read_string(&mut self, term: &mut dyn TerminalDriver) -> io::Result<String> {
                self.core.read_string(term)
            }

            /// The most recent option index selected on this menu, if any.
            pub fn recall_option(&self) -> Option<usize> {
                self.core.last_option
            }

            /// The most recent string token captured on this menu.
            pub fn recall_string(&self) -> &str {
                &self.core.last_string
            }

            /// Label at `index`; index 0 is the reserved entry.
            pub fn label(&self, index: usize) -> Option<&str> {
                self.core.label(index)
            }

            /// Total number of entries, reserved entry included.
            pub fn option_count(&self) -> usize {
                self.core.entries.len()
            }
        }
    };
}

registration_api!(Menu, InputMode::Line, EXIT_LABEL);
registration_api!(QuickMenu, InputMode::Keystroke, EXIT_LABEL);
registration_api!(SubMenu, InputMode::Line, BACK_LABEL);
registration_api!(SubQuickMenu, InputMode::Keystroke, BACK_LABEL);

runnable_api!(Menu);
runnable_api!(QuickMenu);

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::driver::ScriptedDriver;
    use std::cell::Cell;

    /// Shared counter for observing action dispatches from 'static closures.
    fn counter() -> (Rc<Cell<u32>>, impl FnMut() + 'static) {
        let count = Rc::new(Cell::new(0));
        let c = count.clone();
        (count, move || c.set(c.get() + 1))
    }

    #[test]
    fn entry_count_is_one_plus_registrations() {
        let menu = Menu::new()
            .option("A", || {})
            .option("B", || {})
            .option("C", || {});
        assert_eq!(menu.option_count(), 4);

        let child = SubMenu::new().into_handle();
        let menu = Menu::new().option("A", || {}).submenu("More", &child);
        assert_eq!(menu.option_count(), 3);
    }

    #[test]
    fn labels_are_stable_and_ordered() {
        let menu = Menu::new().option("Scan", || {}).option("Report", || {});
        assert_eq!(menu.label(0), Some("Exit"));
        assert_eq!(menu.label(1), Some("Scan"));
        assert_eq!(menu.label(2), Some("Report"));
        assert_eq!(menu.label(3), None);
        // Idempotent across repeated reads.
        assert_eq!(menu.label(1), Some("Scan"));
    }

    #[test]
    fn reserved_label_matches_variant() {
        assert_eq!(Menu::new().label(0), Some("Exit"));
        assert_eq!(QuickMenu::new().label(0), Some("Exit"));
        assert_eq!(SubMenu::new().into_handle().label(0), Some("Back".to_string()));
        assert_eq!(
            SubQuickMenu::new().into_handle().label(0),
            Some("Back".to_string())
        );
    }

    #[test]
    fn registration_never_touches_the_reserved_entry() {
        let menu = Menu::new().option("A", || {}).option("B", || {});
        assert_eq!(menu.label(0), Some("Exit"));
    }

    #[test]
    fn run_dispatches_selected_action_then_exits() {
        // Scenario: options A (1) and B (2); input "2" runs B and
        // re-renders, input "0" terminates.
        let (a_count, a) = counter();
        let (b_count, b) = counter();
        let mut menu = Menu::new().title("Main").option("A", a).option("B", b);

        let mut term = ScriptedDriver::with_tokens(["2", "0"]);
        menu.run(&mut term).unwrap();

        assert_eq!(a_count.get(), 0);
        assert_eq!(b_count.get(), 1);
        // Entry clear, one per dispatch, plus the reserved entry's own.
        assert_eq!(term.clear_count(), 4);
        // Menu rendered twice: on entry and after B's dispatch.
        assert_eq!(term.plain_text().matches("0. Exit").count(), 2);
    }

    #[test]
    fn invalid_selection_never_dispatches() {
        let (count, action) = counter();
        let mut menu = Menu::new().option("A", action);

        let mut term = ScriptedDriver::with_tokens(["9", "nope", "0"]);
        menu.run(&mut term).unwrap();

        assert_eq!(count.get(), 0);
        assert_eq!(term.plain_text().matches("Invalid option.").count(), 2);
    }

    #[test]
    fn keystroke_menu_rejects_out_of_range_key() {
        // Scenario: three entries, '5' is rejected without dispatch, '1'
        // dispatches.
        let (count, action) = counter();
        let mut menu = QuickMenu::new().option("A", action).option("B", || {});

        let mut term = ScriptedDriver::with_keys(['5', '1', '0']);
        menu.run(&mut term).unwrap();

        assert_eq!(count.get(), 1);
        assert!(term.plain_text().contains("Invalid option.\n"));
    }

    #[test]
    fn submenu_runs_once_per_selection_and_returns_to_parent() {
        // Scenario: selecting the child entry enters the child's loop;
        // the child's "Back" returns to the parent's loop, not the caller.
        let (child_count, child_action) = counter();
        let child = SubMenu::new()
            .title("Settings")
            .option("Toggle", child_action)
            .into_handle();

        let (parent_count, parent_action) = counter();
        let mut parent = Menu::new()
            .title("Main")
            .option("Refresh", parent_action)
            .submenu("Settings", &child);

        // Parent: enter child. Child: run Toggle, go Back. Parent: run
        // Refresh (proves the parent loop resumed), then Exit.
        let mut term = ScriptedDriver::with_tokens(["2", "1", "0", "1", "0"]);
        parent.run(&mut term).unwrap();

        assert_eq!(child_count.get(), 1);
        assert_eq!(parent_count.get(), 1);
        assert_eq!(child.recall_option(), Some(0));
        // Both titles made it to the screen.
        let text = term.plain_text();
        assert!(text.contains("Main"));
        assert!(text.contains("Settings"));
        assert!(text.contains("0. Back"));
    }

    #[test]
    fn recall_option_tracks_last_read() {
        let mut menu = Menu::new().option("A", || {});
        assert_eq!(menu.recall_option(), None);

        let mut term = ScriptedDriver::with_tokens(["1", "0"]);
        menu.run(&mut term).unwrap();
        // Last successful read was the exit selection.
        assert_eq!(menu.recall_option(), Some(0));
    }

    #[test]
    fn recall_string_survives_option_reads() {
        let mut menu = Menu::new().option("A", || {});
        assert_eq!(menu.recall_string(), "");

        let mut term = ScriptedDriver::with_tokens(["hello"]);
        let token = menu.read_string(&mut term).unwrap();
        assert_eq!(token, "hello");
        assert_eq!(menu.recall_string(), "hello");

        // An option read afterwards leaves the string recall untouched.
        let mut term = ScriptedDriver::with_tokens(["0"]);
        menu.run(&mut term).unwrap();
        assert_eq!(menu.recall_string(), "hello");
        assert_eq!(menu.recall_option(), Some(0));
    }

    #[test]
    fn run_is_reentrant() {
        let (count, action) = counter();
        let mut menu = Menu::new().option("A", action);

        let mut term = ScriptedDriver::with_tokens(["1", "0"]);
        menu.run(&mut term).unwrap();
        let mut term = ScriptedDriver::with_tokens(["1", "1", "0"]);
        menu.run(&mut term).unwrap();

        assert_eq!(count.get(), 3);
        assert_eq!(menu.recall_option(), Some(0));
    }

    #[test]
    fn read_string_renders_the_menu_first() {
        let mut menu = Menu::new().title("Pick").option("A", || {});
        let mut term = ScriptedDriver::with_tokens(["tok"]);
        menu.read_string(&mut term).unwrap();
        assert_eq!(term.plain_text(), "Pick\n1. A\n0. Exit\n> \n");
    }

    #[test]
    fn header_runs_on_every_render() {
        let renders = Rc::new(Cell::new(0));
        let r = renders.clone();
        let mut menu = Menu::new()
            .title("Main")
            .header(move || {
                r.set(r.get() + 1);
                format!("renders: {}", r.get())
            })
            .option("A", || {});

        let mut term = ScriptedDriver::with_tokens(["1", "0"]);
        menu.run(&mut term).unwrap();
        // Entry render plus the re-render after the dispatch.
        assert_eq!(renders.get(), 2);
        assert!(term.plain_text().contains("renders: 2"));
    }

    #[test]
    fn handle_clones_share_state() {
        let child = SubMenu::new().option("A", || {}).into_handle();
        let alias = child.clone();

        let mut parent = Menu::new().submenu("Child", &child);
        let mut term = ScriptedDriver::with_tokens(["1", "0", "0"]);
        parent.run(&mut term).unwrap();

        assert_eq!(alias.recall_option(), Some(0));
        assert_eq!(alias.option_count(), 2);
    }
}
