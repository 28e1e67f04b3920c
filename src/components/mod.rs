pub mod icons;
pub mod layout;
pub mod navigation;

pub use icons::{Icon, IconGlyph};
pub use layout::{AppBar, ContentArea, Footer, NavDrawer, Shell, ShellFrame};
pub use navigation::Menu;
