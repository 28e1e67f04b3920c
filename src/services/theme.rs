use std::fmt;
use std::ops::Deref;
use std::rc::Rc;

use dioxus::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    pub fn palette(self) -> Palette {
        match self {
            ThemeMode::Light => Palette::LIGHT,
            ThemeMode::Dark => Palette::DARK,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Colours the shell paints itself; everything else is left to the stylesheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub app_bar_background: &'static str,
    pub main_background: &'static str,
    pub text: &'static str,
}

impl Palette {
    pub const LIGHT: Palette = Palette {
        app_bar_background: "#fff",
        main_background: "#f5f5f5",
        text: "rgba(0, 0, 0, 0.87)",
    };

    pub const DARK: Palette = Palette {
        app_bar_background: "#121212",
        main_background: "#212121",
        text: "#fff",
    };
}

/// Source of the current colour mode and the action that flips it.
pub trait ThemeService {
    fn mode(&self) -> ThemeMode;
    fn toggle(&self);
}

/// Shared handle to a [`ThemeService`], comparable by identity so it can be
/// passed as a component prop.
#[derive(Clone)]
pub struct ThemeHandle(Rc<dyn ThemeService>);

impl ThemeHandle {
    pub fn new(service: impl ThemeService + 'static) -> Self {
        Self(Rc::new(service))
    }

    pub fn from_rc(service: Rc<dyn ThemeService>) -> Self {
        Self(service)
    }
}

impl Deref for ThemeHandle {
    type Target = dyn ThemeService;

    fn deref(&self) -> &Self::Target {
        self.0.as_ref()
    }
}

impl PartialEq for ThemeHandle {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(
            Rc::as_ptr(&self.0) as *const (),
            Rc::as_ptr(&other.0) as *const (),
        )
    }
}

/// Theme mode held in a signal. Reading the mode inside a component
/// subscribes that component to mode changes.
#[derive(Clone, Copy, PartialEq)]
pub struct SignalTheme {
    mode: Signal<ThemeMode>,
}

impl SignalTheme {
    pub fn new(mode: Signal<ThemeMode>) -> Self {
        Self { mode }
    }
}

impl ThemeService for SignalTheme {
    fn mode(&self) -> ThemeMode {
        *self.mode.read()
    }

    fn toggle(&self) {
        let mut mode = self.mode;
        let next = mode.peek().toggled();
        mode.set(next);
        tracing::debug!(mode = %next, "theme toggled");
    }
}

pub fn use_signal_theme(initial: ThemeMode) -> SignalTheme {
    let mode = use_signal(|| initial);
    SignalTheme::new(mode)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    struct Fixed(Cell<ThemeMode>);

    impl ThemeService for Fixed {
        fn mode(&self) -> ThemeMode {
            self.0.get()
        }

        fn toggle(&self) {
            self.0.set(self.0.get().toggled());
        }
    }

    #[test]
    fn test_toggled_round_trip() {
        assert_eq!(ThemeMode::Light.toggled(), ThemeMode::Dark);
        assert_eq!(ThemeMode::Dark.toggled().toggled(), ThemeMode::Dark);
    }

    #[test]
    fn test_palette_per_mode() {
        assert_eq!(ThemeMode::Light.palette().app_bar_background, "#fff");
        assert_eq!(ThemeMode::Light.palette().main_background, "#f5f5f5");
        assert_eq!(ThemeMode::Dark.palette().app_bar_background, "#121212");
        assert_eq!(ThemeMode::Dark.palette().main_background, "#212121");
    }

    #[test]
    fn test_mode_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&ThemeMode::Dark).unwrap(), "\"dark\"");
        let mode: ThemeMode = serde_json::from_str("\"light\"").unwrap();
        assert_eq!(mode, ThemeMode::Light);
    }

    #[test]
    fn test_handle_equality_is_identity() {
        let a = ThemeHandle::new(Fixed(Cell::new(ThemeMode::Light)));
        let b = ThemeHandle::new(Fixed(Cell::new(ThemeMode::Light)));
        assert!(a == a.clone());
        assert!(a != b);

        a.toggle();
        assert_eq!(a.mode(), ThemeMode::Dark);
    }
}
