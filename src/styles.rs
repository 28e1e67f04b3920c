//! Inline style descriptors for the app bar and drawer.
//!
//! Everything that depends on the drawer being open or closed lives in a
//! [`LayoutTable`] built once from the [`ShellConfig`]. Components look their
//! layout up by [`DrawerState`] instead of branching while rendering.

use crate::config::ShellConfig;
use crate::services::Palette;
use crate::types::{effective_state, DrawerState};

/// Stacking order of the drawer; the app bar sits one above it
pub const DRAWER_Z_INDEX: u32 = 1200;

/// Height reserved under the absolutely positioned app bar
pub const TOOLBAR_HEIGHT: u32 = 64;

#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    pub properties: &'static [&'static str],
    pub duration_ms: u32,
    pub easing: String,
}

impl Transition {
    pub fn css(&self) -> String {
        self.properties
            .iter()
            .map(|prop| format!("{} {}ms {} 0ms", prop, self.duration_ms, self.easing))
            .collect::<Vec<_>>()
            .join(",")
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppBarLayout {
    /// Space left for the drawer; zero means the bar spans the full width
    pub margin_left: u32,
    pub transition: Transition,
}

impl AppBarLayout {
    pub fn width(&self) -> String {
        if self.margin_left == 0 {
            "100%".to_string()
        } else {
            format!("calc(100% - {}px)", self.margin_left)
        }
    }

    pub fn style(&self, palette: &Palette) -> String {
        format!(
            "position: absolute; z-index: {}; box-shadow: none; background-color: {}; color: {}; margin-left: {}px; width: {}; transition: {};",
            DRAWER_Z_INDEX + 1,
            palette.app_bar_background,
            palette.text,
            self.margin_left,
            self.width(),
            self.transition.css(),
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DrawerLayout {
    pub width: u32,
    pub clip_overflow: bool,
    pub transition: Transition,
}

impl DrawerLayout {
    pub fn style(&self) -> String {
        let mut style = format!(
            "position: relative; white-space: nowrap; box-sizing: border-box; width: {}px; transition: {};",
            self.width,
            self.transition.css(),
        );
        if self.clip_overflow {
            style.push_str(" overflow-x: hidden;");
        }
        style
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ShellLayout {
    pub state: DrawerState,
    pub app_bar: AppBarLayout,
    pub drawer: DrawerLayout,
}

/// One precomputed [`ShellLayout`] per drawer state
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutTable {
    expanded: ShellLayout,
    collapsed: ShellLayout,
}

impl LayoutTable {
    pub fn new(config: &ShellConfig) -> Self {
        let entering = |properties: &'static [&'static str]| Transition {
            properties,
            duration_ms: config.entering_ms,
            easing: config.easing.clone(),
        };
        let leaving = |properties: &'static [&'static str]| Transition {
            properties,
            duration_ms: config.leaving_ms,
            easing: config.easing.clone(),
        };

        Self {
            expanded: ShellLayout {
                state: DrawerState::Expanded,
                app_bar: AppBarLayout {
                    margin_left: config.drawer_width,
                    transition: entering(&["width", "margin"]),
                },
                drawer: DrawerLayout {
                    width: config.drawer_width,
                    clip_overflow: false,
                    transition: entering(&["width"]),
                },
            },
            collapsed: ShellLayout {
                state: DrawerState::Collapsed,
                app_bar: AppBarLayout {
                    margin_left: 0,
                    transition: leaving(&["width", "margin"]),
                },
                drawer: DrawerLayout {
                    width: config.collapsed_width(),
                    clip_overflow: true,
                    transition: leaving(&["width"]),
                },
            },
        }
    }

    pub fn get(&self, state: DrawerState) -> &ShellLayout {
        match state {
            DrawerState::Expanded => &self.expanded,
            DrawerState::Collapsed => &self.collapsed,
        }
    }

    /// Layout for a drawer flag as seen on a narrow or wide viewport
    pub fn resolve(&self, flag: DrawerState, narrow: bool) -> &ShellLayout {
        self.get(effective_state(flag, narrow))
    }
}

pub fn main_style(palette: &Palette) -> String {
    format!(
        "background-color: {}; flex-grow: 1; height: 100vh; overflow: auto;",
        palette.main_background
    )
}

pub fn container_style(config: &ShellConfig) -> String {
    format!(
        "max-width: {}px; margin: {}px auto; padding: 0 {}px;",
        config.container_max_width,
        config.spacing(2),
        config.spacing(3),
    )
}
