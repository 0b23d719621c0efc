pub mod controls;
#[cfg(windows)]
pub mod painting;
#[cfg(windows)]
pub mod theme;
#[cfg(windows)]
mod window;

#[cfg(windows)]
pub use window::{create_window, hide_window, show_window};
