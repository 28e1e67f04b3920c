use crate::services::{AuthService, ThemeService};

/// Open/closed state of the navigation drawer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DrawerState {
    #[default]
    Expanded,
    Collapsed,
}

impl DrawerState {
    pub fn from_flag(expanded: bool) -> Self {
        if expanded {
            DrawerState::Expanded
        } else {
            DrawerState::Collapsed
        }
    }

    pub fn is_expanded(self) -> bool {
        self == DrawerState::Expanded
    }

    pub fn toggled(self) -> Self {
        Self::from_flag(!self.is_expanded())
    }

    pub fn as_str(self) -> &'static str {
        match self {
            DrawerState::Expanded => "expanded",
            DrawerState::Collapsed => "collapsed",
        }
    }
}

/// State the drawer is actually drawn in.
///
/// Below the breakpoint the user's flag is inverted rather than forced closed:
/// an expanded flag draws collapsed and a collapsed flag draws expanded. The
/// flag itself is never modified here.
pub fn effective_state(flag: DrawerState, narrow: bool) -> DrawerState {
    if narrow {
        flag.toggled()
    } else {
        flag
    }
}

/// User actions the shell reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellCommand {
    ToggleDrawer,
    ToggleTheme,
    Logout,
}

impl ShellCommand {
    /// Run the command and return the next drawer state.
    ///
    /// Theme and logout are forwarded exactly once to their service and leave
    /// the drawer state untouched.
    pub fn apply(
        self,
        drawer: DrawerState,
        theme: &dyn ThemeService,
        auth: &dyn AuthService,
    ) -> DrawerState {
        match self {
            ShellCommand::ToggleDrawer => {
                let next = drawer.toggled();
                tracing::debug!(from = drawer.as_str(), to = next.as_str(), "drawer toggled");
                next
            }
            ShellCommand::ToggleTheme => {
                theme.toggle();
                drawer
            }
            ShellCommand::Logout => {
                auth.logout();
                drawer
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::ThemeMode;
    use std::cell::Cell;

    #[derive(Default)]
    struct Calls {
        theme: Cell<usize>,
        logout: Cell<usize>,
    }

    impl ThemeService for Calls {
        fn mode(&self) -> ThemeMode {
            ThemeMode::Light
        }

        fn toggle(&self) {
            self.theme.set(self.theme.get() + 1);
        }
    }

    impl AuthService for Calls {
        fn logout(&self) {
            self.logout.set(self.logout.get() + 1);
        }
    }

    #[test]
    fn test_initial_state_is_expanded() {
        assert_eq!(DrawerState::default(), DrawerState::Expanded);
    }

    #[test]
    fn test_toggle_parity() {
        let calls = Calls::default();
        let mut state = DrawerState::default();
        for n in 1..=9 {
            state = ShellCommand::ToggleDrawer.apply(state, &calls, &calls);
            assert_eq!(state.is_expanded(), n % 2 == 0, "after {n} toggles");
        }
        assert_eq!(calls.theme.get(), 0);
        assert_eq!(calls.logout.get(), 0);
    }

    #[test]
    fn test_narrow_viewport_inverts_flag() {
        assert_eq!(effective_state(DrawerState::Expanded, true), DrawerState::Collapsed);
        assert_eq!(effective_state(DrawerState::Collapsed, true), DrawerState::Expanded);
    }

    #[test]
    fn test_wide_viewport_follows_flag() {
        assert_eq!(effective_state(DrawerState::Expanded, false), DrawerState::Expanded);
        assert_eq!(effective_state(DrawerState::Collapsed, false), DrawerState::Collapsed);
    }

    #[test]
    fn test_theme_toggle_forwards_once_and_keeps_drawer() {
        let calls = Calls::default();
        for state in [DrawerState::Expanded, DrawerState::Collapsed] {
            let next = ShellCommand::ToggleTheme.apply(state, &calls, &calls);
            assert_eq!(next, state);
        }
        assert_eq!(calls.theme.get(), 2);
        assert_eq!(calls.logout.get(), 0);
    }

    #[test]
    fn test_logout_forwards_once_and_keeps_drawer() {
        let calls = Calls::default();
        let next = ShellCommand::Logout.apply(DrawerState::Collapsed, &calls, &calls);
        assert_eq!(next, DrawerState::Collapsed);
        assert_eq!(calls.logout.get(), 1);
        assert_eq!(calls.theme.get(), 0);
    }
}
