use dioxus::prelude::*;
use crate::hooks::use_shell_config;

#[component]
pub fn Footer() -> Element {
    let config = use_shell_config();
    let version = env!("CARGO_PKG_VERSION");

    rsx! {
        footer { class: "shell-footer",
            span { "{config.app_name}" }
            span { class: "shell-footer-version", "v{version}" }
        }
    }
}
