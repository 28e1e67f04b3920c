pub mod app_bar;
pub mod content_area;
pub mod footer;
pub mod nav_drawer;
pub mod shell;

pub use app_bar::AppBar;
pub use content_area::ContentArea;
pub use footer::Footer;
pub use nav_drawer::NavDrawer;
pub use shell::{Shell, ShellFrame};
