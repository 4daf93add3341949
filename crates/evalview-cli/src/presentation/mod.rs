pub mod formatters;
pub mod layout;
pub mod palette;
pub mod renderers;
pub mod views;

pub use layout::{GridLayout, terminal_width};
pub use palette::Palette;
pub use views::Screen;
