use dioxus::prelude::*;
use crate::services::{AuthService, ThemeService};
use crate::types::{DrawerState, ShellCommand};

/// Local open/closed state of the shell's drawer
#[derive(Clone, Copy, PartialEq)]
pub struct DrawerControl {
    pub state: Signal<DrawerState>,
}

/// Drawer starts expanded on mount and is dropped with the component
pub fn use_drawer() -> DrawerControl {
    let state = use_signal(DrawerState::default);
    DrawerControl { state }
}

impl DrawerControl {
    pub fn state(&self) -> DrawerState {
        *self.state.read()
    }

    /// Run a shell command, writing the drawer state only when it changes
    pub fn dispatch(&self, command: ShellCommand, theme: &dyn ThemeService, auth: &dyn AuthService) {
        let current = *self.state.peek();
        let next = command.apply(current, theme, auth);
        if next != current {
            let mut state = self.state;
            state.set(next);
        }
    }
}
