//! Dashboard shell for Dioxus apps.
//!
//! A [`Shell`](components::Shell) wraps page content with a top app bar, a
//! collapsible navigation drawer and a footer. The drawer's open/closed flag
//! is owned by the shell; colour theme and session are injected as service
//! handles.

pub mod components;
pub mod config;
pub mod error;
pub mod hooks;
pub mod pages;
pub mod services;
pub mod styles;
pub mod types;

pub use components::{Shell, ShellFrame};
pub use config::{NavItem, ShellConfig};
pub use error::{ShellError, ShellResult};
pub use services::{AuthHandle, AuthService, ThemeHandle, ThemeMode, ThemeService};
pub use types::{effective_state, DrawerState, ShellCommand};
