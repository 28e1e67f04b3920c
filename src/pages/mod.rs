use dioxus::prelude::*;
use crate::components::Shell;
use crate::config::ShellConfig;
use crate::hooks::use_below_breakpoint;
use crate::services::{use_session_auth, use_signal_theme, AuthHandle, SessionAuth, ThemeHandle, ThemeMode};

#[component]
pub fn Dashboard() -> Element {
    let config = try_use_context::<ShellConfig>().unwrap_or_default();
    let theme = use_signal_theme(ThemeMode::Light);
    let auth = use_session_auth("admin");
    let narrow = use_below_breakpoint(config.breakpoint_sm);

    let theme_handle = use_hook(|| ThemeHandle::new(theme));
    let auth_handle = use_hook(|| AuthHandle::new(auth));

    if !auth.is_signed_in() {
        return rsx! { SignedOut { auth: auth } };
    }

    rsx! {
        Shell {
            theme: theme_handle,
            auth: auth_handle,
            narrow: narrow,
            config: config,
            Overview {}
        }
    }
}

#[component]
fn SignedOut(auth: SessionAuth) -> Element {
    let mut auth = auth;

    rsx! {
        div { class: "signed-out",
            h2 { "Signed out" }
            button {
                class: "signed-out-btn",
                onclick: move |_| auth.sign_in("admin"),
                "Sign in again"
            }
        }
    }
}

#[component]
fn Overview() -> Element {
    rsx! {
        section { class: "overview",
            h2 { "Overview" }
            div { class: "overview-grid",
                div { class: "overview-card",
                    h3 { "People" }
                    p { "128 records" }
                }
                div { class: "overview-card",
                    h3 { "Cities" }
                    p { "42 records" }
                }
            }
        }
    }
}
