//! Overlay components for TUI

mod base;
mod help;
mod toast;

pub use help::render_help;
pub use toast::render_toast;
