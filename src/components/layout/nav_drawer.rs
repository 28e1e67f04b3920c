use dioxus::prelude::*;
use crate::components::navigation::Menu;
use crate::config::initial;
use crate::types::DrawerState;

#[component]
pub fn NavDrawer(
    style: String,
    state: DrawerState,
    app_name: String,
    avatar_url: Option<String>,
) -> Element {
    let badge = initial(&app_name);

    let avatar = match avatar_url {
        Some(url) => rsx! {
            img { class: "shell-avatar", src: "{url}", alt: "{app_name}" }
        },
        None => rsx! {
            span { class: "shell-avatar shell-avatar--initials", "{badge}" }
        },
    };

    rsx! {
        aside {
            class: if state.is_expanded() { "shell-drawer shell-drawer--expanded" } else { "shell-drawer shell-drawer--collapsed" },
            style: "{style}",

            div { class: "shell-drawer-header",
                {avatar}
                h6 { class: "shell-brand", "{app_name}" }
            }

            Menu {}
        }
    }
}
