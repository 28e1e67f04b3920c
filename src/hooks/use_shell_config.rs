use dioxus::prelude::*;
use crate::config::ShellConfig;

/// Share `config` with descendants of the calling component.
///
/// The shared copy lives in a signal and is replaced whenever the caller is
/// rendered with a different config, so readers never lag behind the prop.
pub fn use_provide_shell_config(config: &ShellConfig) {
    let mut shared = use_context_provider(|| Signal::new(config.clone()));
    if *shared.peek() != *config {
        shared.set(config.clone());
    }
}

/// Config of the enclosing shell, or the defaults outside of one
pub fn use_shell_config() -> ShellConfig {
    match try_use_context::<Signal<ShellConfig>>() {
        Some(shared) => shared.read().clone(),
        None => ShellConfig::default(),
    }
}
