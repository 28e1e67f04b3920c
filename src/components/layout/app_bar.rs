use dioxus::prelude::*;
use crate::components::icons::{Icon, IconGlyph};
use crate::services::ThemeMode;

/// Top bar with the drawer toggle on the left and theme/logout actions on the right
#[component]
pub fn AppBar(
    style: String,
    mode: ThemeMode,
    on_toggle_drawer: EventHandler<()>,
    on_toggle_theme: EventHandler<()>,
    on_logout: EventHandler<()>,
) -> Element {
    let theme_icon = Icon::theme_toggle(mode);

    rsx! {
        header { class: "shell-appbar", style: "{style}",
            div { class: "shell-toolbar",
                button {
                    class: "shell-icon-btn shell-icon-btn--start",
                    "aria-label": "open drawer",
                    onclick: move |_| on_toggle_drawer.call(()),
                    IconGlyph { icon: Icon::Menu }
                }
                div { class: "shell-toolbar-title" }
                button {
                    class: "shell-icon-btn",
                    "aria-label": "toggle theme",
                    title: if mode == ThemeMode::Light { "Switch to dark mode" } else { "Switch to light mode" },
                    onclick: move |_| on_toggle_theme.call(()),
                    IconGlyph { icon: theme_icon }
                }
                button {
                    class: "shell-icon-btn",
                    "aria-label": "logout",
                    onclick: move |_| on_logout.call(()),
                    IconGlyph { icon: Icon::Logout }
                }
            }
        }
    }
}
