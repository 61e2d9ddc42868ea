//! Navigation shell state.
//!
//! The shell is cosmetic; its only state is whether the mobile menu is open.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    pub menu_open: bool,
}

impl UiState {
    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    /// Called after any navigation link is followed.
    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }
}
