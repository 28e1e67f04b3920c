pub mod use_drawer;
pub mod use_media_query;
pub mod use_shell_config;

pub use use_drawer::{use_drawer, DrawerControl};
pub use use_media_query::{media_query_below, use_below_breakpoint, use_media_query};
pub use use_shell_config::{use_provide_shell_config, use_shell_config};
