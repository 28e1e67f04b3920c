//! Error types for the dashboard shell

use thiserror::Error;

/// Errors raised while configuring the shell or wiring it to the browser.
///
/// The shell's own interactions (drawer toggle, theme toggle, logout) never
/// fail; these only come from loading configuration and subscribing to
/// viewport media queries.
#[derive(Error, Debug)]
pub enum ShellError {
    #[error("Invalid shell configuration: {0}")]
    InvalidConfig(String),

    #[error("Configuration parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Browser window is not available")]
    WindowUnavailable,

    #[error("Media query failed: {0}")]
    MediaQuery(String),
}

/// Result type for shell setup operations
pub type ShellResult<T> = Result<T, ShellError>;
