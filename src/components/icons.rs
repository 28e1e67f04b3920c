use dioxus::prelude::*;
use crate::services::ThemeMode;

/// Material icons used by the shell, drawn as inline SVG
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Menu,
    DarkMode,
    LightMode,
    Logout,
}

impl Icon {
    /// Moon while the theme is light, sun while it is dark
    pub fn theme_toggle(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Light => Icon::DarkMode,
            ThemeMode::Dark => Icon::LightMode,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Icon::Menu => "menu",
            Icon::DarkMode => "dark-mode",
            Icon::LightMode => "light-mode",
            Icon::Logout => "logout",
        }
    }

    fn path(self) -> &'static str {
        match self {
            Icon::Menu => "M3 18h18v-2H3v2zm0-5h18v-2H3v2zm0-7v2h18V6H3z",
            Icon::DarkMode => "M12 3c-4.97 0-9 4.03-9 9s4.03 9 9 9 9-4.03 9-9c0-.46-.04-.92-.1-1.36-.98 1.37-2.58 2.26-4.4 2.26-2.98 0-5.4-2.42-5.4-5.4 0-1.81.89-3.42 2.26-4.4-.44-.06-.9-.1-1.36-.1z",
            Icon::LightMode => "M12 7c-2.76 0-5 2.24-5 5s2.24 5 5 5 5-2.24 5-5-2.24-5-5-5zM2 13h2c.55 0 1-.45 1-1s-.45-1-1-1H2c-.55 0-1 .45-1 1s.45 1 1 1zm18 0h2c.55 0 1-.45 1-1s-.45-1-1-1h-2c-.55 0-1 .45-1 1s.45 1 1 1zM11 2v2c0 .55.45 1 1 1s1-.45 1-1V2c0-.55-.45-1-1-1s-1 .45-1 1zm0 18v2c0 .55.45 1 1 1s1-.45 1-1v-2c0-.55-.45-1-1-1s-1 .45-1 1z",
            Icon::Logout => "M17 7l-1.41 1.41L18.17 11H8v2h10.17l-2.58 2.58L17 17l5-5zM4 5h8V3H4c-1.1 0-2 .9-2 2v14c0 1.1.9 2 2 2h8v-2H4V5z",
        }
    }
}

#[component]
pub fn IconGlyph(icon: Icon) -> Element {
    rsx! {
        svg {
            class: "shell-icon",
            "data-icon": icon.name(),
            "viewBox": "0 0 24 24",
            "width": "24",
            "height": "24",
            "fill": "currentColor",
            "aria-hidden": "true",
            path { "d": icon.path() }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_icon_shows_target_mode() {
        assert_eq!(Icon::theme_toggle(ThemeMode::Light), Icon::DarkMode);
        assert_eq!(Icon::theme_toggle(ThemeMode::Dark), Icon::LightMode);
    }
}
