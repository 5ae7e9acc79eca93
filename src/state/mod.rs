//! Application state module

mod app_state;
mod assessment;
mod controller;
mod forms;
mod notification;
mod progress;

pub use app_state::*;
pub use assessment::*;
pub use controller::*;
pub use forms::*;
pub use notification::*;
pub use progress::*;
