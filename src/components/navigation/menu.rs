use dioxus::prelude::*;
use crate::hooks::use_shell_config;

/// Navigation links listed in the drawer.
///
/// Entries come from the [`ShellConfig`](crate::config::ShellConfig) provided by the enclosing shell.
/// Only the letter badges remain visible while the drawer is collapsed.
#[component]
pub fn Menu() -> Element {
    let config = use_shell_config();

    rsx! {
        nav { class: "shell-menu",
            ul { class: "shell-menu-list",
                for item in config.nav.iter() {
                    {
                        let initial = item.initial();
                        rsx! {
                            li {
                                key: "{item.href}",
                                a {
                                    class: "shell-menu-item",
                                    href: "{item.href}",
                                    title: "{item.label}",
                                    span { class: "shell-menu-badge", "{initial}" }
                                    span { class: "shell-menu-label", "{item.label}" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
