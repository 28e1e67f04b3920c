use dioxus::prelude::*;
use crate::components::layout::{AppBar, ContentArea, NavDrawer};
use crate::config::ShellConfig;
use crate::hooks::{use_drawer, use_provide_shell_config, DrawerControl};
use crate::services::{AuthHandle, ThemeHandle};
use crate::styles::{container_style, main_style, LayoutTable};
use crate::types::ShellCommand;

/// Dashboard frame: app bar, collapsible navigation drawer and main content.
///
/// The drawer flag is local to the shell and starts expanded. Theme and
/// logout actions are forwarded to the injected services. `narrow` reports a
/// viewport below the small breakpoint, in which case the drawer is drawn in
/// the opposite state of its flag.
#[component]
pub fn Shell(
    theme: ThemeHandle,
    auth: AuthHandle,
    narrow: ReadOnlySignal<bool>,
    #[props(default)] config: ShellConfig,
    children: Element,
) -> Element {
    let drawer = use_drawer();

    rsx! {
        ShellFrame {
            drawer: drawer,
            theme: theme,
            auth: auth,
            narrow: narrow,
            config: config,
            {children}
        }
    }
}

/// [`Shell`] drawn around a drawer flag owned by the caller
#[component]
pub fn ShellFrame(
    drawer: DrawerControl,
    theme: ThemeHandle,
    auth: AuthHandle,
    narrow: ReadOnlySignal<bool>,
    config: ShellConfig,
    children: Element,
) -> Element {
    use_provide_shell_config(&config);

    let mode = theme.mode();
    let palette = mode.palette();
    let table = LayoutTable::new(&config);
    let layout = table.resolve(drawer.state(), narrow());

    let on_toggle_drawer = {
        let theme = theme.clone();
        let auth = auth.clone();
        move |_: ()| drawer.dispatch(ShellCommand::ToggleDrawer, &*theme, &*auth)
    };
    let on_toggle_theme = {
        let theme = theme.clone();
        let auth = auth.clone();
        move |_: ()| drawer.dispatch(ShellCommand::ToggleTheme, &*theme, &*auth)
    };
    let on_logout = move |_: ()| drawer.dispatch(ShellCommand::Logout, &*theme, &*auth);

    rsx! {
        div { class: "shell shell--{mode}", style: "display: flex;",
            AppBar {
                style: layout.app_bar.style(&palette),
                mode: mode,
                on_toggle_drawer: on_toggle_drawer,
                on_toggle_theme: on_toggle_theme,
                on_logout: on_logout,
            }
            NavDrawer {
                style: layout.drawer.style(),
                state: layout.state,
                app_name: config.app_name.clone(),
                avatar_url: config.avatar_url.clone(),
            }
            ContentArea {
                style: main_style(&palette),
                container_style: container_style(&config),
                {children}
            }
        }
    }
}
