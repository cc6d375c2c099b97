//! UI state the console can drive.
//!
//! The console never reaches into a UI on its own; a [`MenuState`] is handed
//! to `DebugConsole::with_ui` and toggled through the `ConsoleUi` trait.

use tracing::debug;

use crate::application::debug_console::ConsoleUi;

/// Visibility of the on-screen menu.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MenuState {
    pub shown: bool,
}

impl MenuState {
    pub fn new(shown: bool) -> Self {
        Self { shown }
    }
}

impl ConsoleUi for MenuState {
    fn toggle_menu(&mut self) -> bool {
        self.shown = !self.shown;
        debug!(shown = self.shown, "menu visibility changed");
        self.shown
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_starts_hidden_by_default() {
        assert!(!MenuState::default().shown);
    }

    #[test]
    fn test_toggle_flips_and_reports_visibility() {
        let mut menu = MenuState::new(true);

        assert!(!menu.toggle_menu());
        assert!(menu.toggle_menu());
        assert!(menu.shown);
    }
}
