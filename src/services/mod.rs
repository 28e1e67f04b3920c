//! Collaborators injected into the shell: colour theme and authentication.
//!
//! The shell only ever sees the [`ThemeService`] and [`AuthService`] traits
//! through cloneable handles passed in as props. `SignalTheme` and
//! `SessionAuth` are signal-backed implementations used by the dashboard page.

pub mod auth;
pub mod theme;

pub use auth::{use_session_auth, AuthHandle, AuthService, Session, SessionAuth};
pub use theme::{use_signal_theme, Palette, SignalTheme, ThemeHandle, ThemeMode, ThemeService};
